//! `/users/@me/watchlater` and `/users/@me/favorites`.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::Serialize;

use cinema_auth_types::identity::IdentityHeaders;

use crate::domain::repository::FilmSetRepository;
use crate::domain::types::Viewer;
use crate::error::CatalogServiceError;
use crate::handlers::{FilmResponse, films_response};
use crate::infra::db::DbFilmRepository;
use crate::state::AppState;
use crate::usecase::film_set::{
    AddToFilmSetUseCase, FilmSetContainsUseCase, ListFilmSetUseCase, RemoveFromFilmSetUseCase,
};

#[derive(Serialize)]
pub struct ContainsResponse {
    pub contains: bool,
}

async fn list<S: FilmSetRepository>(
    set: S,
    viewer: Viewer,
) -> Result<Json<Vec<FilmResponse>>, CatalogServiceError> {
    let films = ListFilmSetUseCase { set }.execute(&viewer).await?;
    Ok(Json(films_response(films)))
}

async fn contains<S: FilmSetRepository>(
    set: S,
    viewer: Viewer,
    film_id: i32,
) -> Result<Json<ContainsResponse>, CatalogServiceError> {
    let contains = FilmSetContainsUseCase { set }.execute(&viewer, film_id).await?;
    Ok(Json(ContainsResponse { contains }))
}

async fn add<S: FilmSetRepository>(
    films: DbFilmRepository,
    set: S,
    viewer: Viewer,
    film_id: i32,
) -> Result<StatusCode, CatalogServiceError> {
    AddToFilmSetUseCase { films, set }
        .execute(&viewer, film_id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn remove<S: FilmSetRepository>(
    set: S,
    viewer: Viewer,
    film_id: i32,
) -> Result<StatusCode, CatalogServiceError> {
    RemoveFromFilmSetUseCase { set }
        .execute(&viewer, film_id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

// ── Watch later ──────────────────────────────────────────────────────────────

pub async fn get_watch_later(
    identity: IdentityHeaders,
    State(state): State<AppState>,
) -> Result<Json<Vec<FilmResponse>>, CatalogServiceError> {
    list(state.watch_later_repo(), identity.into()).await
}

pub async fn get_watch_later_film(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Path(film_id): Path<i32>,
) -> Result<Json<ContainsResponse>, CatalogServiceError> {
    contains(state.watch_later_repo(), identity.into(), film_id).await
}

pub async fn add_watch_later(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Path(film_id): Path<i32>,
) -> Result<StatusCode, CatalogServiceError> {
    add(state.film_repo(), state.watch_later_repo(), identity.into(), film_id).await
}

pub async fn remove_watch_later(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Path(film_id): Path<i32>,
) -> Result<StatusCode, CatalogServiceError> {
    remove(state.watch_later_repo(), identity.into(), film_id).await
}

// ── Favorites ────────────────────────────────────────────────────────────────

pub async fn get_favorites(
    identity: IdentityHeaders,
    State(state): State<AppState>,
) -> Result<Json<Vec<FilmResponse>>, CatalogServiceError> {
    list(state.favorites_repo(), identity.into()).await
}

pub async fn get_favorite_film(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Path(film_id): Path<i32>,
) -> Result<Json<ContainsResponse>, CatalogServiceError> {
    contains(state.favorites_repo(), identity.into(), film_id).await
}

pub async fn add_favorite(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Path(film_id): Path<i32>,
) -> Result<StatusCode, CatalogServiceError> {
    add(state.film_repo(), state.favorites_repo(), identity.into(), film_id).await
}

pub async fn remove_favorite(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Path(film_id): Path<i32>,
) -> Result<StatusCode, CatalogServiceError> {
    remove(state.favorites_repo(), identity.into(), film_id).await
}
