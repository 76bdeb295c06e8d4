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

use crate::domain::types::{User, UserReview, Viewer};
use crate::error::CatalogServiceError;
use crate::handlers::{FilmResponse, PageQuery};
use crate::state::AppState;
use crate::usecase::follow::{FollowUseCase, IsFollowingUseCase, UnfollowUseCase};
use crate::usecase::user::{
    CheckCredentialsUseCase, GetProfileUseCase, GetUserIdUseCase, RegisterInput, RegisterUseCase,
};

#[derive(Serialize)]
pub struct UserResponse {
    pub id: i32,
    pub name: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
        }
    }
}

// ── POST /users ──────────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

pub async fn register(
    State(state): State<AppState>,
    Json(body): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<UserResponse>), CatalogServiceError> {
    let usecase = RegisterUseCase {
        users: state.user_repo(),
        hasher: state.hasher.clone(),
    };
    let user = usecase
        .execute(RegisterInput {
            name: body.name,
            email: body.email,
            password: body.password,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(user.into())))
}

// ── POST /login ──────────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct LoginRequest {
    pub name: String,
    pub password: String,
}

/// Checks credentials only. Issuing the session is left to the gateway.
pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> Result<Json<UserResponse>, CatalogServiceError> {
    let usecase = CheckCredentialsUseCase {
        users: state.user_repo(),
        hasher: state.hasher.clone(),
    };
    let user = usecase.execute(&body.name, &body.password).await?;
    Ok(Json(user.into()))
}

// ── GET /users/{name} ────────────────────────────────────────────────────────

pub async fn get_user(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<UserResponse>, CatalogServiceError> {
    let usecase = GetUserIdUseCase {
        users: state.user_repo(),
    };
    let id = usecase.execute(&name).await?;
    Ok(Json(UserResponse { id, name }))
}

// ── GET /users/{name}/profile ────────────────────────────────────────────────

#[derive(Serialize)]
pub struct UserReviewResponse {
    pub id: i32,
    pub film: FilmResponse,
    pub body: String,
    #[serde(serialize_with = "cinema_core::serde::to_rfc3339_ms")]
    pub date: DateTime<Utc>,
    pub posted_ago: String,
}

impl UserReviewResponse {
    fn new(review: UserReview, now: DateTime<Utc>) -> Self {
        Self {
            id: review.id,
            film: review.film.into(),
            body: review.body,
            date: review.date,
            posted_ago: posted_ago(review.date, now),
        }
    }
}

#[derive(Serialize)]
pub struct ProfileResponse {
    pub id: i32,
    pub name: String,
    pub followers: Vec<String>,
    pub followings: Vec<String>,
    pub is_following: bool,
    pub reviews: Page<UserReviewResponse>,
}

pub async fn get_profile(
    identity: Option<IdentityHeaders>,
    State(state): State<AppState>,
    Path(name): Path<String>,
    Query(query): Query<PageQuery>,
) -> Result<Json<ProfileResponse>, CatalogServiceError> {
    let viewer = identity.map(Viewer::from);
    let usecase = GetProfileUseCase {
        users: state.user_repo(),
        follows: state.follow_repo(),
        reviews: state.review_repo(),
        reviews_per_page: state.reviews_per_page,
    };
    let profile = usecase
        .execute(&name, query.page.as_deref(), viewer.as_ref())
        .await?;
    let now = Utc::now();
    Ok(Json(ProfileResponse {
        id: profile.id,
        name: profile.name,
        followers: profile.followers,
        followings: profile.followings,
        is_following: profile.is_following,
        reviews: profile.reviews.map(|r| UserReviewResponse::new(r, now)),
    }))
}

// ── /users/{name}/follow ─────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct FollowingResponse {
    pub following: bool,
}

pub async fn get_following(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<FollowingResponse>, CatalogServiceError> {
    let usecase = IsFollowingUseCase {
        users: state.user_repo(),
        follows: state.follow_repo(),
    };
    let following = usecase.execute(&Viewer::from(identity), &name).await?;
    Ok(Json(FollowingResponse { following }))
}

/// Idempotent: following someone twice keeps a single edge.
pub async fn follow(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<StatusCode, CatalogServiceError> {
    let usecase = FollowUseCase {
        users: state.user_repo(),
        follows: state.follow_repo(),
    };
    usecase.execute(&Viewer::from(identity), &name).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn unfollow(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<StatusCode, CatalogServiceError> {
    let usecase = UnfollowUseCase {
        users: state.user_repo(),
        follows: state.follow_repo(),
    };
    usecase.execute(&Viewer::from(identity), &name).await?;
    Ok(StatusCode::NO_CONTENT)
}
