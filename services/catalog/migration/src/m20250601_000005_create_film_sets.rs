use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        create_film_set(
            manager,
            UsersWatchlater::Table,
            UsersWatchlater::Id,
            UsersWatchlater::UserId,
            UsersWatchlater::FilmId,
            "uq_users_watchlater_user_id_film_id",
        )
        .await?;
        create_film_set(
            manager,
            UsersFavorites::Table,
            UsersFavorites::Id,
            UsersFavorites::UserId,
            UsersFavorites::FilmId,
            "uq_users_favorites_user_id_film_id",
        )
        .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UsersFavorites::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(UsersWatchlater::Table).to_owned())
            .await
    }
}

/// Both per-user film sets share one shape: `(id, user_id, film_id)` with
/// a unique `(user_id, film_id)` pair.
async fn create_film_set<T>(
    manager: &SchemaManager<'_>,
    table: T,
    id: T,
    user_id: T,
    film_id: T,
    unique_name: &str,
) -> Result<(), DbErr>
where
    T: Iden + Copy + 'static,
{
    manager
        .create_table(
            Table::create()
                .table(table)
                .if_not_exists()
                .col(
                    ColumnDef::new(id)
                        .integer()
                        .not_null()
                        .auto_increment()
                        .primary_key(),
                )
                .col(ColumnDef::new(user_id).integer().not_null())
                .col(ColumnDef::new(film_id).integer().not_null())
                .foreign_key(
                    ForeignKey::create()
                        .from(table, user_id)
                        .to(Users::Table, Users::Id)
                        .on_delete(ForeignKeyAction::Cascade),
                )
                .foreign_key(
                    ForeignKey::create()
                        .from(table, film_id)
                        .to(Films::Table, Films::Id)
                        .on_delete(ForeignKeyAction::Cascade),
                )
                .to_owned(),
        )
        .await?;

    manager
        .create_index(
            Index::create()
                .table(table)
                .col(user_id)
                .col(film_id)
                .unique()
                .name(unique_name)
                .to_owned(),
        )
        .await
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

#[derive(Iden, Clone, Copy)]
enum UsersWatchlater {
    Table,
    Id,
    UserId,
    FilmId,
}

#[derive(Iden, Clone, Copy)]
enum UsersFavorites {
    Table,
    Id,
    UserId,
    FilmId,
}
