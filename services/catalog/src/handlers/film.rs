use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use cinema_auth_types::identity::IdentityHeaders;
use cinema_domain::age::posted_ago;
use cinema_domain::pagination::Page;

use crate::domain::types::{Review, Viewer};
use crate::error::CatalogServiceError;
use crate::handlers::{FilmResponse, PageQuery, PersonResponse, films_response};
use crate::state::AppState;
use crate::usecase::film::{GetFilmDetailUseCase, GetRankedFilmsUseCase};
use crate::usecase::rating::{
    DeleteRateUseCase, GetMyRatingUseCase, RateFilmUseCase, RateOutcome,
};
use crate::usecase::review::WriteReviewUseCase;

// ── GET /films/top | /films/popular | /films/highest-grossing ────────────────

pub async fn get_top_films(
    State(state): State<AppState>,
) -> Result<Json<Vec<FilmResponse>>, CatalogServiceError> {
    let usecase = GetRankedFilmsUseCase {
        films: state.film_repo(),
    };
    Ok(Json(films_response(usecase.top().await?)))
}

pub async fn get_popular_films(
    State(state): State<AppState>,
) -> Result<Json<Vec<FilmResponse>>, CatalogServiceError> {
    let usecase = GetRankedFilmsUseCase {
        films: state.film_repo(),
    };
    Ok(Json(films_response(usecase.popular().await?)))
}

pub async fn get_highest_grossing_films(
    State(state): State<AppState>,
) -> Result<Json<Vec<FilmResponse>>, CatalogServiceError> {
    let usecase = GetRankedFilmsUseCase {
        films: state.film_repo(),
    };
    Ok(Json(films_response(usecase.highest_grossing().await?)))
}

// ── GET /films/{id} ──────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct ReviewResponse {
    pub id: i32,
    pub user_id: i32,
    pub user_name: String,
    pub body: String,
    #[serde(serialize_with = "cinema_core::serde::to_rfc3339_ms")]
    pub date: DateTime<Utc>,
    pub posted_ago: String,
}

impl ReviewResponse {
    fn new(review: Review, now: DateTime<Utc>) -> Self {
        Self {
            id: review.id,
            user_id: review.user_id,
            user_name: review.user_name,
            body: review.body,
            date: review.date,
            posted_ago: posted_ago(review.date, now),
        }
    }
}

#[derive(Serialize)]
pub struct FilmDetailResponse {
    #[serde(flatten)]
    pub film: FilmResponse,
    pub directors: Vec<PersonResponse>,
    pub actors: Vec<PersonResponse>,
    pub genres: Vec<String>,
    pub reviews: Page<ReviewResponse>,
    /// Present only for signed-in viewers; 0 when they have not rated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub my_rate: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub my_watchlists: Option<Vec<String>>,
}

pub async fn get_film(
    identity: Option<IdentityHeaders>,
    State(state): State<AppState>,
    Path(film_id): Path<i32>,
    Query(query): Query<PageQuery>,
) -> Result<Json<FilmDetailResponse>, CatalogServiceError> {
    let viewer = identity.map(Viewer::from);
    let usecase = GetFilmDetailUseCase {
        films: state.film_repo(),
        reviews: state.review_repo(),
        ratings: state.rating_repo(),
        watchlists: state.watchlist_repo(),
        reviews_per_page: state.reviews_per_page,
    };
    let detail = usecase
        .execute(film_id, query.page.as_deref(), viewer.as_ref())
        .await?;

    let now = Utc::now();
    let (my_rate, my_watchlists) = match detail.viewer {
        Some(v) => (Some(v.my_rate), Some(v.watchlists)),
        None => (None, None),
    };
    Ok(Json(FilmDetailResponse {
        film: detail.film.into(),
        directors: detail.directors.into_iter().map(PersonResponse::from).collect(),
        actors: detail.actors.into_iter().map(PersonResponse::from).collect(),
        genres: detail.genres,
        reviews: detail.reviews.map(|r| ReviewResponse::new(r, now)),
        my_rate,
        my_watchlists,
    }))
}

// ── POST /films/{id}/reviews ─────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct WriteReviewRequest {
    pub body: String,
}

pub async fn create_review(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Path(film_id): Path<i32>,
    Json(body): Json<WriteReviewRequest>,
) -> Result<StatusCode, CatalogServiceError> {
    let usecase = WriteReviewUseCase {
        films: state.film_repo(),
        reviews: state.review_repo(),
    };
    usecase
        .execute(identity.user_id, film_id, &body.body)
        .await?;
    Ok(StatusCode::CREATED)
}

// ── Ratings ──────────────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct MyRatingResponse {
    pub rate: u8,
}

pub async fn get_my_rating(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Path(film_id): Path<i32>,
) -> Result<Json<MyRatingResponse>, CatalogServiceError> {
    let usecase = GetMyRatingUseCase {
        films: state.film_repo(),
        ratings: state.rating_repo(),
    };
    let rate = usecase.execute(identity.user_id, film_id).await?;
    Ok(Json(MyRatingResponse { rate }))
}

#[derive(Serialize)]
pub struct RateResponse {
    pub applied: bool,
    pub rate: f64,
    pub votes: i64,
}

impl From<RateOutcome> for RateResponse {
    fn from(outcome: RateOutcome) -> Self {
        Self {
            applied: outcome.applied,
            rate: outcome.rate,
            votes: outcome.votes,
        }
    }
}

/// `PUT /films/{id}/rating/{value}`. An invalid value or a second rating is
/// answered with `applied: false` rather than an error.
pub async fn rate_film(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Path((film_id, value)): Path<(i32, String)>,
) -> Result<Json<RateResponse>, CatalogServiceError> {
    let usecase = RateFilmUseCase {
        films: state.film_repo(),
        ratings: state.rating_repo(),
    };
    let outcome = usecase.execute(identity.user_id, film_id, &value).await?;
    Ok(Json(outcome.into()))
}

pub async fn delete_rating(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Path(film_id): Path<i32>,
) -> Result<Json<RateResponse>, CatalogServiceError> {
    let usecase = DeleteRateUseCase {
        films: state.film_repo(),
        ratings: state.rating_repo(),
    };
    let outcome = usecase.execute(identity.user_id, film_id).await?;
    Ok(Json(outcome.into()))
}
