use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Reviews::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Reviews::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Reviews::UserId).integer().not_null())
                    .col(ColumnDef::new(Reviews::FilmId).integer().not_null())
                    .col(ColumnDef::new(Reviews::Body).text().not_null())
                    .col(
                        ColumnDef::new(Reviews::Date)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Reviews::Table, Reviews::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Reviews::Table, Reviews::FilmId)
                            .to(Films::Table, Films::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .table(Reviews::Table)
                    .col(Reviews::FilmId)
                    .col(Reviews::Date)
                    .name("idx_reviews_film_id_date")
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .table(Reviews::Table)
                    .col(Reviews::UserId)
                    .col(Reviews::Date)
                    .name("idx_reviews_user_id_date")
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(FilmsRates::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(FilmsRates::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(FilmsRates::FilmId).integer().not_null())
                    .col(ColumnDef::new(FilmsRates::UserId).integer().not_null())
                    .col(ColumnDef::new(FilmsRates::Rate).integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(FilmsRates::Table, FilmsRates::FilmId)
                            .to(Films::Table, Films::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(FilmsRates::Table, FilmsRates::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // One vote per user per film.
        manager
            .create_index(
                Index::create()
                    .table(FilmsRates::Table)
                    .col(FilmsRates::UserId)
                    .col(FilmsRates::FilmId)
                    .unique()
                    .name("uq_films_rates_user_id_film_id")
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .table(FilmsRates::Table)
                    .col(FilmsRates::FilmId)
                    .name("idx_films_rates_film_id")
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(FilmsRates::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Reviews::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Users {
    Table,
    Id,
}

#[derive(Iden)]
enum Films {
    Table,
    Id,
}

#[derive(Iden)]
enum Reviews {
    Table,
    Id,
    UserId,
    FilmId,
    Body,
    Date,
}

#[derive(Iden)]
enum FilmsRates {
    Table,
    Id,
    FilmId,
    UserId,
    Rate,
}
