use std::collections::HashMap;

use anyhow::Context as _;
use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr,
    EntityTrait, FromQueryResult, JoinType, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
    RelationTrait, SqlErr,
    sea_query::{OnConflict, Query},
};

use cinema_catalog_schema::{
    films, films_casts, films_genres, films_rates, followed, genres, persons, persons_types,
    reviews, types, users,
};
use cinema_domain::cast::CastType;
use cinema_domain::pagination::PageWindow;
use cinema_domain::rating::{RatingSummary, RatingValue};

use crate::domain::repository::{
    FilmRepository, FollowRepository, PersonRepository, RatingRepository, ReviewRepository,
    UserRepository,
};
use crate::domain::types::{Film, FilmRanking, NewUser, Person, Review, User, UserReview};
use crate::error::CatalogServiceError;

// ── Shared film loading ──────────────────────────────────────────────────────

#[derive(Debug, FromQueryResult)]
struct RateAggregate {
    film_id: i32,
    total: Option<i64>,
    votes: i64,
}

/// Convert film rows to domain films, deriving `rate`/`votes` from the stored
/// baseline and one grouped aggregate over `films_rates` for the whole batch.
pub(crate) async fn with_ratings<C: ConnectionTrait>(
    db: &C,
    models: Vec<films::Model>,
) -> Result<Vec<Film>, CatalogServiceError> {
    if models.is_empty() {
        return Ok(vec![]);
    }
    let ids: Vec<i32> = models.iter().map(|m| m.id).collect();
    let aggregates = films_rates::Entity::find()
        .select_only()
        .column(films_rates::Column::FilmId)
        .column_as(films_rates::Column::Rate.sum(), "total")
        .column_as(films_rates::Column::Rate.count(), "votes")
        .filter(films_rates::Column::FilmId.is_in(ids))
        .group_by(films_rates::Column::FilmId)
        .into_model::<RateAggregate>()
        .all(db)
        .await
        .context("aggregate film rates")?;
    let by_film: HashMap<i32, (i64, i64)> = aggregates
        .into_iter()
        .map(|a| (a.film_id, (a.total.unwrap_or(0), a.votes)))
        .collect();

    Ok(models
        .into_iter()
        .map(|model| {
            let (sum, count) = by_film.get(&model.id).copied().unwrap_or((0, 0));
            film_from_model(model, sum, count)
        })
        .collect())
}

/// Load films by id, keeping the order of `ids`. Unknown ids are skipped.
pub(crate) async fn films_in_order<C: ConnectionTrait>(
    db: &C,
    ids: &[i32],
) -> Result<Vec<Film>, CatalogServiceError> {
    if ids.is_empty() {
        return Ok(vec![]);
    }
    let models = films::Entity::find()
        .filter(films::Column::Id.is_in(ids.iter().copied()))
        .all(db)
        .await
        .context("find films by ids")?;
    let mut by_id: HashMap<i32, films::Model> = models.into_iter().map(|m| (m.id, m)).collect();
    let ordered = ids.iter().filter_map(|id| by_id.remove(id)).collect();
    with_ratings(db, ordered).await
}

fn film_from_model(model: films::Model, local_sum: i64, local_count: i64) -> Film {
    let summary = RatingSummary::combine(model.rate, i64::from(model.votes), local_sum, local_count);
    Film {
        id: model.id,
        title: model.title,
        year: model.year,
        rate: summary.rate,
        votes: summary.votes,
        box_office: model.box_office,
        value: model.value,
        img: model.img,
    }
}

fn person_from_model(model: persons::Model) -> Person {
    Person {
        id: model.id,
        name: model.name,
        img: model.img,
    }
}

pub(crate) fn is_unique_violation(err: &DbErr) -> bool {
    matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
}

// ── Film repository ──────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbFilmRepository {
    pub db: DatabaseConnection,
}

impl FilmRepository for DbFilmRepository {
    async fn ranked(
        &self,
        ranking: FilmRanking,
        limit: u64,
    ) -> Result<Vec<Film>, CatalogServiceError> {
        let query = match ranking {
            FilmRanking::Top => films::Entity::find().order_by_desc(films::Column::Value),
            FilmRanking::Popular { after_year } => films::Entity::find()
                .filter(films::Column::Year.gt(after_year))
                .order_by_desc(films::Column::Value),
            FilmRanking::HighestGrossing => {
                films::Entity::find().order_by_desc(films::Column::BoxOffice)
            }
        };
        let models = query
            .order_by_asc(films::Column::Id)
            .limit(limit)
            .all(&self.db)
            .await
            .context("list ranked films")?;
        with_ratings(&self.db, models).await
    }

    async fn exists(&self, id: i32) -> Result<bool, CatalogServiceError> {
        let count = films::Entity::find_by_id(id)
            .count(&self.db)
            .await
            .context("check film exists")?;
        Ok(count > 0)
    }

    async fn find(&self, id: i32) -> Result<Option<Film>, CatalogServiceError> {
        let Some(model) = films::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find film by id")?
        else {
            return Ok(None);
        };
        Ok(with_ratings(&self.db, vec![model]).await?.pop())
    }

    async fn cast(&self, film_id: i32, role: CastType) -> Result<Vec<Person>, CatalogServiceError> {
        let models = persons::Entity::find()
            .join(JoinType::InnerJoin, persons::Relation::FilmsCasts.def())
            .filter(films_casts::Column::FilmId.eq(film_id))
            .filter(films_casts::Column::Kind.eq(role.id()))
            .order_by_asc(films_casts::Column::Id)
            .all(&self.db)
            .await
            .context("list film cast")?;
        Ok(models.into_iter().map(person_from_model).collect())
    }

    async fn genres(&self, film_id: i32) -> Result<Vec<String>, CatalogServiceError> {
        let names = genres::Entity::find()
            .select_only()
            .column(genres::Column::Genre)
            .join(JoinType::InnerJoin, genres::Relation::FilmsGenres.def())
            .filter(films_genres::Column::FilmId.eq(film_id))
            .order_by_asc(genres::Column::Genre)
            .into_tuple::<String>()
            .all(&self.db)
            .await
            .context("list film genres")?;
        Ok(names)
    }
}

// ── Person repository ────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbPersonRepository {
    pub db: DatabaseConnection,
}

impl PersonRepository for DbPersonRepository {
    async fn find(&self, id: i32) -> Result<Option<Person>, CatalogServiceError> {
        let model = persons::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find person by id")?;
        Ok(model.map(person_from_model))
    }

    async fn job_types(&self, person_id: i32) -> Result<Vec<String>, CatalogServiceError> {
        let names = types::Entity::find()
            .select_only()
            .column(types::Column::Name)
            .join(JoinType::InnerJoin, types::Relation::PersonsTypes.def())
            .filter(persons_types::Column::PersonId.eq(person_id))
            .order_by_asc(types::Column::Id)
            .into_tuple::<String>()
            .all(&self.db)
            .await
            .context("list person job types")?;
        Ok(names)
    }

    async fn films(&self, person_id: i32, role: CastType) -> Result<Vec<Film>, CatalogServiceError> {
        let models = films::Entity::find()
            .join(JoinType::InnerJoin, films::Relation::FilmsCasts.def())
            .filter(films_casts::Column::PersonId.eq(person_id))
            .filter(films_casts::Column::Kind.eq(role.id()))
            .order_by_desc(films::Column::Year)
            .order_by_desc(films::Column::Value)
            .all(&self.db)
            .await
            .context("list person films")?;
        with_ratings(&self.db, models).await
    }
}

// ── Review repository ────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbReviewRepository {
    pub db: DatabaseConnection,
}

impl ReviewRepository for DbReviewRepository {
    async fn count_for_film(&self, film_id: i32) -> Result<u64, CatalogServiceError> {
        let count = reviews::Entity::find()
            .filter(reviews::Column::FilmId.eq(film_id))
            .count(&self.db)
            .await
            .context("count film reviews")?;
        Ok(count)
    }

    async fn list_for_film(
        &self,
        film_id: i32,
        window: PageWindow,
    ) -> Result<Vec<Review>, CatalogServiceError> {
        let rows = reviews::Entity::find()
            .filter(reviews::Column::FilmId.eq(film_id))
            .find_also_related(users::Entity)
            .order_by_desc(reviews::Column::Date)
            .order_by_desc(reviews::Column::Id)
            .offset(window.offset)
            .limit(window.limit)
            .all(&self.db)
            .await
            .context("list film reviews")?;
        Ok(rows
            .into_iter()
            .map(|(review, user)| Review {
                id: review.id,
                user_id: review.user_id,
                user_name: user.map(|u| u.name).unwrap_or_default(),
                film_id: review.film_id,
                body: review.body,
                date: review.date,
            })
            .collect())
    }

    async fn count_for_user(&self, user_id: i32) -> Result<u64, CatalogServiceError> {
        let count = reviews::Entity::find()
            .filter(reviews::Column::UserId.eq(user_id))
            .count(&self.db)
            .await
            .context("count user reviews")?;
        Ok(count)
    }

    async fn list_for_user(
        &self,
        user_id: i32,
        window: PageWindow,
    ) -> Result<Vec<UserReview>, CatalogServiceError> {
        let rows = reviews::Entity::find()
            .filter(reviews::Column::UserId.eq(user_id))
            .order_by_desc(reviews::Column::Date)
            .order_by_desc(reviews::Column::Id)
            .offset(window.offset)
            .limit(window.limit)
            .all(&self.db)
            .await
            .context("list user reviews")?;
        let film_ids: Vec<i32> = rows.iter().map(|r| r.film_id).collect();
        let films: HashMap<i32, Film> = films_in_order(&self.db, &film_ids)
            .await?
            .into_iter()
            .map(|f| (f.id, f))
            .collect();

        Ok(rows
            .into_iter()
            .filter_map(|review| {
                let film = films.get(&review.film_id).cloned()?;
                Some(UserReview {
                    id: review.id,
                    film,
                    body: review.body,
                    date: review.date,
                })
            })
            .collect())
    }

    async fn create(
        &self,
        user_id: i32,
        film_id: i32,
        body: &str,
        date: DateTime<Utc>,
    ) -> Result<(), CatalogServiceError> {
        reviews::ActiveModel {
            user_id: Set(user_id),
            film_id: Set(film_id),
            body: Set(body.to_owned()),
            date: Set(date),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .context("create review")?;
        Ok(())
    }
}

// ── Rating repository ────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbRatingRepository {
    pub db: DatabaseConnection,
}

impl RatingRepository for DbRatingRepository {
    async fn find(
        &self,
        user_id: i32,
        film_id: i32,
    ) -> Result<Option<RatingValue>, CatalogServiceError> {
        let model = films_rates::Entity::find()
            .filter(films_rates::Column::UserId.eq(user_id))
            .filter(films_rates::Column::FilmId.eq(film_id))
            .one(&self.db)
            .await
            .context("find film rate")?;
        Ok(model.and_then(|m| RatingValue::new(i64::from(m.rate))))
    }

    async fn insert_if_absent(
        &self,
        user_id: i32,
        film_id: i32,
        value: RatingValue,
    ) -> Result<bool, CatalogServiceError> {
        let inserted = films_rates::Entity::insert(films_rates::ActiveModel {
            film_id: Set(film_id),
            user_id: Set(user_id),
            rate: Set(i32::from(value.get())),
            ..Default::default()
        })
        .on_conflict(
            OnConflict::columns([films_rates::Column::UserId, films_rates::Column::FilmId])
                .do_nothing()
                .to_owned(),
        )
        .exec_without_returning(&self.db)
        .await
        .context("insert film rate")?;
        Ok(inserted > 0)
    }

    async fn delete(&self, user_id: i32, film_id: i32) -> Result<bool, CatalogServiceError> {
        let result = films_rates::Entity::delete_many()
            .filter(films_rates::Column::UserId.eq(user_id))
            .filter(films_rates::Column::FilmId.eq(film_id))
            .exec(&self.db)
            .await
            .context("delete film rate")?;
        Ok(result.rows_affected > 0)
    }
}

// ── User repository ──────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbUserRepository {
    pub db: DatabaseConnection,
}

impl UserRepository for DbUserRepository {
    async fn find_by_name(&self, name: &str) -> Result<Option<User>, CatalogServiceError> {
        let model = users::Entity::find()
            .filter(users::Column::Name.eq(name))
            .one(&self.db)
            .await
            .context("find user by name")?;
        Ok(model.map(user_from_model))
    }

    async fn email_exists(&self, email: &str) -> Result<bool, CatalogServiceError> {
        let count = users::Entity::find()
            .filter(users::Column::Email.eq(email))
            .count(&self.db)
            .await
            .context("check email exists")?;
        Ok(count > 0)
    }

    async fn create(&self, user: &NewUser) -> Result<i32, CatalogServiceError> {
        let result = users::ActiveModel {
            name: Set(user.name.clone()),
            email: Set(user.email.clone()),
            password: Set(user.password_hash.clone()),
            ..Default::default()
        }
        .insert(&self.db)
        .await;
        match result {
            Ok(model) => Ok(model.id),
            Err(e) if is_unique_violation(&e) => Err(CatalogServiceError::UserAlreadyExists),
            Err(e) => Err(anyhow::Error::new(e).context("create user").into()),
        }
    }
}

fn user_from_model(model: users::Model) -> User {
    User {
        id: model.id,
        name: model.name,
        email: model.email,
        password_hash: model.password,
    }
}

// ── Follow repository ────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbFollowRepository {
    pub db: DatabaseConnection,
}

impl DbFollowRepository {
    async fn names_where(
        &self,
        select: followed::Column,
        filter: followed::Column,
        user_id: i32,
    ) -> Result<Vec<String>, CatalogServiceError> {
        let names = users::Entity::find()
            .select_only()
            .column(users::Column::Name)
            .filter(
                users::Column::Id.in_subquery(
                    Query::select()
                        .column(select)
                        .from(followed::Entity)
                        .and_where(filter.eq(user_id))
                        .to_owned(),
                ),
            )
            .order_by_asc(users::Column::Name)
            .into_tuple::<String>()
            .all(&self.db)
            .await
            .context("list follow graph names")?;
        Ok(names)
    }
}

impl FollowRepository for DbFollowRepository {
    async fn follow(&self, follower_id: i32, followed_id: i32) -> Result<bool, CatalogServiceError> {
        let inserted = followed::Entity::insert(followed::ActiveModel {
            follower_id: Set(follower_id),
            followed_id: Set(followed_id),
            ..Default::default()
        })
        .on_conflict(
            OnConflict::columns([followed::Column::FollowerId, followed::Column::FollowedId])
                .do_nothing()
                .to_owned(),
        )
        .exec_without_returning(&self.db)
        .await
        .context("insert follow edge")?;
        Ok(inserted > 0)
    }

    async fn unfollow(
        &self,
        follower_id: i32,
        followed_id: i32,
    ) -> Result<bool, CatalogServiceError> {
        let result = followed::Entity::delete_many()
            .filter(followed::Column::FollowerId.eq(follower_id))
            .filter(followed::Column::FollowedId.eq(followed_id))
            .exec(&self.db)
            .await
            .context("delete follow edge")?;
        Ok(result.rows_affected > 0)
    }

    async fn is_following(
        &self,
        follower_id: i32,
        followed_id: i32,
    ) -> Result<bool, CatalogServiceError> {
        let count = followed::Entity::find()
            .filter(followed::Column::FollowerId.eq(follower_id))
            .filter(followed::Column::FollowedId.eq(followed_id))
            .count(&self.db)
            .await
            .context("check follow edge")?;
        Ok(count > 0)
    }

    async fn followers(&self, user_id: i32) -> Result<Vec<String>, CatalogServiceError> {
        self.names_where(
            followed::Column::FollowerId,
            followed::Column::FollowedId,
            user_id,
        )
        .await
    }

    async fn followings(&self, user_id: i32) -> Result<Vec<String>, CatalogServiceError> {
        self.names_where(
            followed::Column::FollowedId,
            followed::Column::FollowerId,
            user_id,
        )
        .await
    }
}
