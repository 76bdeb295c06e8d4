use anyhow::Context as _;
use sea_orm::{
    ColumnTrait, ConnectionTrait, DatabaseConnection, DbBackend, EntityTrait, FromQueryResult,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Select,
    sea_query::{Alias, Expr, Func, Order, Query, SimpleExpr},
};

use cinema_catalog_schema::{films, films_genres, followed, genres, persons, persons_types, users};
use cinema_core::sea_ext::UpperLike;
use cinema_domain::cast::CastType;
use cinema_domain::pagination::PageWindow;
use cinema_domain::search::{CaseFold, LIKE_ESCAPE, SearchTerm};

use crate::domain::repository::SearchRepository;
use crate::domain::types::{Film, Person, UserSummary};
use crate::error::CatalogServiceError;
use crate::infra::db::with_ratings;

#[derive(Clone)]
pub struct DbSearchRepository {
    pub db: DatabaseConnection,
}

impl DbSearchRepository {
    /// Prefix pattern folded the way this backend's `UPPER()` folds.
    fn pattern(&self, term: &SearchTerm) -> String {
        let fold = match self.db.get_database_backend() {
            DbBackend::Sqlite => CaseFold::Ascii,
            _ => CaseFold::Unicode,
        };
        term.prefix_pattern(fold)
    }
}

#[derive(Debug, FromQueryResult)]
struct UserSummaryRow {
    id: i32,
    name: String,
    followers: i64,
    followings: i64,
}

fn films_by_title(pattern: String) -> Select<films::Entity> {
    films::Entity::find().filter(films::Column::Title.upper_like(pattern, LIKE_ESCAPE))
}

/// Persons matching the name prefix that hold at least one of `roles`.
///
/// Role ids come from the closed `CastType` set and are bound as values.
fn persons_by_name(pattern: String, roles: &[CastType]) -> Select<persons::Entity> {
    let holders = Query::select()
        .column(persons_types::Column::PersonId)
        .from(persons_types::Entity)
        .and_where(persons_types::Column::TypeId.is_in(roles.iter().map(|r| r.id())))
        .to_owned();
    persons::Entity::find()
        .filter(persons::Column::Name.upper_like(pattern, LIKE_ESCAPE))
        .filter(persons::Column::Id.in_subquery(holders))
}

/// Films tagged with every genre in `genre_ids` (ids must be distinct).
///
/// `(genre_id, film_id)` is unique, so counting matching rows per film
/// counts distinct genres.
fn films_with_all_genres(genre_ids: &[i32]) -> Select<films::Entity> {
    let matching = Query::select()
        .column(films_genres::Column::FilmId)
        .from(films_genres::Entity)
        .and_where(films_genres::Column::GenreId.is_in(genre_ids.iter().copied()))
        .group_by_col(films_genres::Column::FilmId)
        .and_having(
            Expr::expr(Func::count(Expr::col(films_genres::Column::GenreId)))
                .eq(genre_ids.len() as i64),
        )
        .to_owned();
    films::Entity::find().filter(films::Column::Id.in_subquery(matching))
}

/// Correlated `COUNT(*)` of follow edges whose `edge` column points at the outer user.
fn follow_count(edge: followed::Column) -> SimpleExpr {
    let count = Query::select()
        .expr(Func::count(Expr::col((followed::Entity, followed::Column::Id))))
        .from(followed::Entity)
        .and_where(Expr::col((followed::Entity, edge)).equals((users::Entity, users::Column::Id)))
        .to_owned();
    SimpleExpr::SubQuery(None, Box::new(count.into_sub_query_statement()))
}

impl SearchRepository for DbSearchRepository {
    async fn count_films(&self, term: &SearchTerm) -> Result<u64, CatalogServiceError> {
        let count = films_by_title(self.pattern(term))
            .count(&self.db)
            .await
            .context("count films by title")?;
        Ok(count)
    }

    async fn films(
        &self,
        term: &SearchTerm,
        window: PageWindow,
    ) -> Result<Vec<Film>, CatalogServiceError> {
        let models = films_by_title(self.pattern(term))
            .order_by_desc(films::Column::Year)
            .order_by_desc(films::Column::Value)
            .order_by_asc(films::Column::Id)
            .offset(window.offset)
            .limit(window.limit)
            .all(&self.db)
            .await
            .context("search films by title")?;
        with_ratings(&self.db, models).await
    }

    async fn count_persons(
        &self,
        term: &SearchTerm,
        roles: &[CastType],
    ) -> Result<u64, CatalogServiceError> {
        if roles.is_empty() {
            return Ok(0);
        }
        let count = persons_by_name(self.pattern(term), roles)
            .count(&self.db)
            .await
            .context("count persons by name")?;
        Ok(count)
    }

    async fn persons(
        &self,
        term: &SearchTerm,
        roles: &[CastType],
        window: PageWindow,
    ) -> Result<Vec<Person>, CatalogServiceError> {
        if roles.is_empty() {
            return Ok(vec![]);
        }
        let models = persons_by_name(self.pattern(term), roles)
            .order_by_asc(persons::Column::Name)
            .order_by_asc(persons::Column::Id)
            .offset(window.offset)
            .limit(window.limit)
            .all(&self.db)
            .await
            .context("search persons by name")?;
        Ok(models
            .into_iter()
            .map(|m| Person {
                id: m.id,
                name: m.name,
                img: m.img,
            })
            .collect())
    }

    async fn users(
        &self,
        term: &SearchTerm,
        limit: u64,
    ) -> Result<Vec<UserSummary>, CatalogServiceError> {
        let rows = users::Entity::find()
            .select_only()
            .column(users::Column::Id)
            .column(users::Column::Name)
            .column_as(follow_count(followed::Column::FollowedId), "followers")
            .column_as(follow_count(followed::Column::FollowerId), "followings")
            .filter(users::Column::Name.upper_like(self.pattern(term), LIKE_ESCAPE))
            .order_by(Expr::col(Alias::new("followers")), Order::Desc)
            .order_by_asc(users::Column::Name)
            .limit(limit)
            .into_model::<UserSummaryRow>()
            .all(&self.db)
            .await
            .context("search users by name")?;
        Ok(rows
            .into_iter()
            .map(|r| UserSummary {
                id: r.id,
                name: r.name,
                followers: r.followers,
                followings: r.followings,
            })
            .collect())
    }

    async fn genre_ids(&self, names: &[String]) -> Result<Vec<i32>, CatalogServiceError> {
        let lowered: Vec<String> = names.iter().map(|n| n.trim().to_lowercase()).collect();
        if lowered.is_empty() {
            return Ok(vec![]);
        }
        let mut ids: Vec<i32> = genres::Entity::find()
            .select_only()
            .column(genres::Column::Id)
            .filter(Expr::expr(Func::lower(Expr::col(genres::Column::Genre))).is_in(lowered))
            .into_tuple()
            .all(&self.db)
            .await
            .context("resolve genre names")?;
        ids.sort_unstable();
        ids.dedup();
        Ok(ids)
    }

    async fn count_films_with_genres(&self, genre_ids: &[i32]) -> Result<u64, CatalogServiceError> {
        if genre_ids.is_empty() {
            return Ok(0);
        }
        let count = films_with_all_genres(genre_ids)
            .count(&self.db)
            .await
            .context("count films by genres")?;
        Ok(count)
    }

    async fn films_with_genres(
        &self,
        genre_ids: &[i32],
        window: PageWindow,
    ) -> Result<Vec<Film>, CatalogServiceError> {
        if genre_ids.is_empty() {
            return Ok(vec![]);
        }
        let models = films_with_all_genres(genre_ids)
            .order_by_desc(films::Column::Year)
            .order_by_desc(films::Column::Value)
            .order_by_asc(films::Column::Id)
            .offset(window.offset)
            .limit(window.limit)
            .all(&self.db)
            .await
            .context("list films by genres")?;
        with_ratings(&self.db, models).await
    }
}
