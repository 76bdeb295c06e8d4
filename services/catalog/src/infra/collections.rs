use anyhow::Context as _;
use sea_orm::{
    ActiveValue::Set, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, TransactionTrait,
    sea_query::{Expr, OnConflict},
};

use cinema_catalog_schema::{users_favorites, users_watchlater, watchlists, watchlists_films};

use crate::domain::repository::{FilmSetRepository, WatchlistRepository};
use crate::domain::types::{Film, NewWatchlist, Watchlist};
use crate::error::CatalogServiceError;
use crate::infra::db::{films_in_order, is_unique_violation};

// ── Watchlist repository ─────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbWatchlistRepository {
    pub db: DatabaseConnection,
}

impl WatchlistRepository for DbWatchlistRepository {
    async fn list(
        &self,
        username: &str,
        include_private: bool,
    ) -> Result<Vec<Watchlist>, CatalogServiceError> {
        let mut query =
            watchlists::Entity::find().filter(watchlists::Column::Username.eq(username));
        if !include_private {
            query = query.filter(watchlists::Column::Private.eq(false));
        }
        let models = query
            .order_by_desc(watchlists::Column::Id)
            .all(&self.db)
            .await
            .context("list watchlists")?;
        Ok(models.into_iter().map(watchlist_from_model).collect())
    }

    async fn names(&self, username: &str) -> Result<Vec<String>, CatalogServiceError> {
        let names = watchlists::Entity::find()
            .select_only()
            .column(watchlists::Column::Name)
            .filter(watchlists::Column::Username.eq(username))
            .order_by_desc(watchlists::Column::Id)
            .into_tuple::<String>()
            .all(&self.db)
            .await
            .context("list watchlist names")?;
        Ok(names)
    }

    async fn find(
        &self,
        username: &str,
        name: &str,
    ) -> Result<Option<Watchlist>, CatalogServiceError> {
        let model = watchlists::Entity::find()
            .filter(watchlists::Column::Username.eq(username))
            .filter(watchlists::Column::Name.eq(name))
            .one(&self.db)
            .await
            .context("find watchlist")?;
        Ok(model.map(watchlist_from_model))
    }

    async fn create(&self, list: &NewWatchlist) -> Result<Option<Watchlist>, CatalogServiceError> {
        let inserted = watchlists::Entity::insert(watchlists::ActiveModel {
            username: Set(list.username.clone()),
            name: Set(list.name.as_str().to_owned()),
            body: Set(list.body.clone()),
            private: Set(false),
            ..Default::default()
        })
        .on_conflict(
            OnConflict::columns([watchlists::Column::Username, watchlists::Column::Name])
                .do_nothing()
                .to_owned(),
        )
        .exec_without_returning(&self.db)
        .await
        .context("create watchlist")?;
        if inserted == 0 {
            return Ok(None);
        }
        self.find(&list.username, list.name.as_str()).await
    }

    async fn films(&self, watchlist_id: i32) -> Result<Vec<Film>, CatalogServiceError> {
        let film_ids: Vec<i32> = watchlists_films::Entity::find()
            .select_only()
            .column(watchlists_films::Column::FilmId)
            .filter(watchlists_films::Column::WatchlistId.eq(watchlist_id))
            .order_by_asc(watchlists_films::Column::Id)
            .into_tuple()
            .all(&self.db)
            .await
            .context("list watchlist film ids")?;
        films_in_order(&self.db, &film_ids).await
    }

    async fn add_film(&self, watchlist_id: i32, film_id: i32) -> Result<bool, CatalogServiceError> {
        let inserted = watchlists_films::Entity::insert(watchlists_films::ActiveModel {
            watchlist_id: Set(watchlist_id),
            film_id: Set(film_id),
            ..Default::default()
        })
        .on_conflict(
            OnConflict::columns([
                watchlists_films::Column::WatchlistId,
                watchlists_films::Column::FilmId,
            ])
            .do_nothing()
            .to_owned(),
        )
        .exec_without_returning(&self.db)
        .await
        .context("add film to watchlist")?;
        Ok(inserted > 0)
    }

    async fn remove_film(
        &self,
        watchlist_id: i32,
        film_id: i32,
    ) -> Result<bool, CatalogServiceError> {
        let result = watchlists_films::Entity::delete_many()
            .filter(watchlists_films::Column::WatchlistId.eq(watchlist_id))
            .filter(watchlists_films::Column::FilmId.eq(film_id))
            .exec(&self.db)
            .await
            .context("remove film from watchlist")?;
        Ok(result.rows_affected > 0)
    }

    async fn set_private(
        &self,
        watchlist_id: i32,
        private: bool,
    ) -> Result<(), CatalogServiceError> {
        watchlists::Entity::update_many()
            .col_expr(watchlists::Column::Private, Expr::value(private))
            .filter(watchlists::Column::Id.eq(watchlist_id))
            .exec(&self.db)
            .await
            .context("set watchlist visibility")?;
        Ok(())
    }

    async fn update(
        &self,
        watchlist_id: i32,
        name: &str,
        body: &str,
    ) -> Result<(), CatalogServiceError> {
        let result = watchlists::Entity::update_many()
            .col_expr(watchlists::Column::Name, Expr::value(name))
            .col_expr(watchlists::Column::Body, Expr::value(body))
            .filter(watchlists::Column::Id.eq(watchlist_id))
            .exec(&self.db)
            .await;
        match result {
            Ok(_) => Ok(()),
            Err(e) if is_unique_violation(&e) => Err(CatalogServiceError::WatchlistAlreadyExists),
            Err(e) => Err(anyhow::Error::new(e).context("update watchlist").into()),
        }
    }

    async fn delete(&self, watchlist_id: i32) -> Result<(), CatalogServiceError> {
        self.db
            .transaction::<_, (), DbErr>(|txn| {
                Box::pin(async move {
                    watchlists_films::Entity::delete_many()
                        .filter(watchlists_films::Column::WatchlistId.eq(watchlist_id))
                        .exec(txn)
                        .await?;
                    watchlists::Entity::delete_by_id(watchlist_id)
                        .exec(txn)
                        .await?;
                    Ok(())
                })
            })
            .await
            .context("delete watchlist")?;
        Ok(())
    }
}

fn watchlist_from_model(model: watchlists::Model) -> Watchlist {
    Watchlist {
        id: model.id,
        username: model.username,
        name: model.name,
        body: model.body,
        private: model.private,
    }
}

// ── Watch later / favorites ──────────────────────────────────────────────────

/// Both film sets are `(id, user_id, film_id)` tables with a unique
/// `(user_id, film_id)` pair, so they share one implementation.
macro_rules! film_set_repository {
    ($repo:ident, $table:ident, $label:literal) => {
        #[derive(Clone)]
        pub struct $repo {
            pub db: DatabaseConnection,
        }

        impl FilmSetRepository for $repo {
            async fn list(&self, user_id: i32) -> Result<Vec<Film>, CatalogServiceError> {
                let film_ids: Vec<i32> = $table::Entity::find()
                    .select_only()
                    .column($table::Column::FilmId)
                    .filter($table::Column::UserId.eq(user_id))
                    .order_by_desc($table::Column::Id)
                    .into_tuple()
                    .all(&self.db)
                    .await
                    .context(concat!("list ", $label))?;
                films_in_order(&self.db, &film_ids).await
            }

            async fn add(&self, user_id: i32, film_id: i32) -> Result<bool, CatalogServiceError> {
                let inserted = $table::Entity::insert($table::ActiveModel {
                    user_id: Set(user_id),
                    film_id: Set(film_id),
                    ..Default::default()
                })
                .on_conflict(
                    OnConflict::columns([$table::Column::UserId, $table::Column::FilmId])
                        .do_nothing()
                        .to_owned(),
                )
                .exec_without_returning(&self.db)
                .await
                .context(concat!("add to ", $label))?;
                Ok(inserted > 0)
            }

            async fn remove(
                &self,
                user_id: i32,
                film_id: i32,
            ) -> Result<bool, CatalogServiceError> {
                let result = $table::Entity::delete_many()
                    .filter($table::Column::UserId.eq(user_id))
                    .filter($table::Column::FilmId.eq(film_id))
                    .exec(&self.db)
                    .await
                    .context(concat!("remove from ", $label))?;
                Ok(result.rows_affected > 0)
            }

            async fn contains(
                &self,
                user_id: i32,
                film_id: i32,
            ) -> Result<bool, CatalogServiceError> {
                let count = $table::Entity::find()
                    .filter($table::Column::UserId.eq(user_id))
                    .filter($table::Column::FilmId.eq(film_id))
                    .count(&self.db)
                    .await
                    .context(concat!("check ", $label))?;
                Ok(count > 0)
            }
        }
    };
}

film_set_repository!(DbWatchLaterRepository, users_watchlater, "watch later");
film_set_repository!(DbFavoritesRepository, users_favorites, "favorites");
