use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Films::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Films::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Films::Title).string().not_null())
                    .col(ColumnDef::new(Films::Year).integer().not_null())
                    .col(ColumnDef::new(Films::Rate).double().not_null().default(0.0))
                    .col(ColumnDef::new(Films::Votes).integer().not_null().default(0))
                    .col(
                        ColumnDef::new(Films::BoxOffice)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(Films::Value).double().not_null().default(0.0))
                    .col(ColumnDef::new(Films::Img).string().null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Persons::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Persons::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Persons::Name).string().not_null())
                    .col(ColumnDef::new(Persons::Img).string().null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Genres::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Genres::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Genres::Genre).string().not_null().unique_key())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Types::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Types::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Types::Type).string().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(FilmsCasts::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(FilmsCasts::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(FilmsCasts::FilmId).integer().not_null())
                    .col(ColumnDef::new(FilmsCasts::PersonId).integer().not_null())
                    .col(ColumnDef::new(FilmsCasts::Type).integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(FilmsCasts::Table, FilmsCasts::FilmId)
                            .to(Films::Table, Films::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(FilmsCasts::Table, FilmsCasts::PersonId)
                            .to(Persons::Table, Persons::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(FilmsGenres::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(FilmsGenres::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(FilmsGenres::FilmId).integer().not_null())
                    .col(ColumnDef::new(FilmsGenres::GenreId).integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(FilmsGenres::Table, FilmsGenres::FilmId)
                            .to(Films::Table, Films::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(FilmsGenres::Table, FilmsGenres::GenreId)
                            .to(Genres::Table, Genres::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(PersonsTypes::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(PersonsTypes::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(PersonsTypes::PersonId).integer().not_null())
                    .col(ColumnDef::new(PersonsTypes::TypeId).integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(PersonsTypes::Table, PersonsTypes::PersonId)
                            .to(Persons::Table, Persons::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(PersonsTypes::Table, PersonsTypes::TypeId)
                            .to(Types::Table, Types::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .table(FilmsCasts::Table)
                    .col(FilmsCasts::FilmId)
                    .col(FilmsCasts::Type)
                    .name("idx_films_casts_film_id_type")
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .table(FilmsCasts::Table)
                    .col(FilmsCasts::PersonId)
                    .name("idx_films_casts_person_id")
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .table(FilmsGenres::Table)
                    .col(FilmsGenres::GenreId)
                    .col(FilmsGenres::FilmId)
                    .unique()
                    .name("uq_films_genres_genre_id_film_id")
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .table(PersonsTypes::Table)
                    .col(PersonsTypes::PersonId)
                    .col(PersonsTypes::TypeId)
                    .unique()
                    .name("uq_persons_types_person_id_type_id")
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PersonsTypes::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(FilmsGenres::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(FilmsCasts::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Types::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Genres::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Persons::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Films::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Films {
    Table,
    Id,
    Title,
    Year,
    Rate,
    Votes,
    BoxOffice,
    Value,
    Img,
}

#[derive(Iden)]
enum Persons {
    Table,
    Id,
    Name,
    Img,
}

#[derive(Iden)]
enum Genres {
    Table,
    Id,
    Genre,
}

#[derive(Iden)]
enum Types {
    Table,
    Id,
    Type,
}

#[derive(Iden)]
enum FilmsCasts {
    Table,
    Id,
    FilmId,
    PersonId,
    Type,
}

#[derive(Iden)]
enum FilmsGenres {
    Table,
    Id,
    FilmId,
    GenreId,
}

#[derive(Iden)]
enum PersonsTypes {
    Table,
    Id,
    PersonId,
    TypeId,
}
