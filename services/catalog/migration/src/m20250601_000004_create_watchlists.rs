use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Watchlists::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Watchlists::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Watchlists::Username).string().not_null())
                    .col(ColumnDef::new(Watchlists::Name).string_len(12).not_null())
                    .col(
                        ColumnDef::new(Watchlists::Body)
                            .text()
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(Watchlists::Private)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .to_owned(),
            )
            .await?;

        // Watchlist names are scoped to their owner.
        manager
            .create_index(
                Index::create()
                    .table(Watchlists::Table)
                    .col(Watchlists::Username)
                    .col(Watchlists::Name)
                    .unique()
                    .name("uq_watchlists_username_name")
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(WatchlistsFilms::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(WatchlistsFilms::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(WatchlistsFilms::WatchlistId)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(WatchlistsFilms::FilmId).integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(WatchlistsFilms::Table, WatchlistsFilms::WatchlistId)
                            .to(Watchlists::Table, Watchlists::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(WatchlistsFilms::Table, WatchlistsFilms::FilmId)
                            .to(Films::Table, Films::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .table(WatchlistsFilms::Table)
                    .col(WatchlistsFilms::WatchlistId)
                    .col(WatchlistsFilms::FilmId)
                    .unique()
                    .name("uq_watchlists_films_watchlist_id_film_id")
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(WatchlistsFilms::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Watchlists::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Films {
    Table,
    Id,
}

#[derive(Iden)]
enum Watchlists {
    Table,
    Id,
    Username,
    Name,
    Body,
    Private,
}

#[derive(Iden)]
enum WatchlistsFilms {
    Table,
    Id,
    WatchlistId,
    FilmId,
}
