use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};

use cinema_auth_types::identity::IdentityHeaders;

use crate::domain::types::{Viewer, Watchlist};
use crate::error::CatalogServiceError;
use crate::handlers::{FilmResponse, films_response};
use crate::state::AppState;
use crate::usecase::watchlist::{
    AddWatchlistFilmUseCase, CreateWatchlistInput, CreateWatchlistUseCase, DeleteWatchlistUseCase,
    GetWatchlistFilmsUseCase, GetWatchlistsUseCase, RemoveWatchlistFilmUseCase,
    SetWatchlistVisibilityUseCase, UpdateWatchlistInput, UpdateWatchlistUseCase,
};

#[derive(Serialize)]
pub struct WatchlistResponse {
    pub owner: String,
    pub name: String,
    pub body: String,
    pub private: bool,
}

impl From<Watchlist> for WatchlistResponse {
    fn from(list: Watchlist) -> Self {
        Self {
            owner: list.username,
            name: list.name,
            body: list.body,
            private: list.private,
        }
    }
}

// ── GET /users/{name}/flows ──────────────────────────────────────────────────

pub async fn get_watchlists(
    identity: Option<IdentityHeaders>,
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<Json<Vec<WatchlistResponse>>, CatalogServiceError> {
    let viewer = identity.map(Viewer::from);
    let usecase = GetWatchlistsUseCase {
        users: state.user_repo(),
        watchlists: state.watchlist_repo(),
    };
    let lists = usecase.execute(viewer.as_ref(), &username).await?;
    Ok(Json(lists.into_iter().map(WatchlistResponse::from).collect()))
}

// ── GET /users/{name}/flows/{list} ───────────────────────────────────────────

#[derive(Serialize)]
pub struct WatchlistFilmsResponse {
    #[serde(flatten)]
    pub list: WatchlistResponse,
    pub films: Vec<FilmResponse>,
}

pub async fn get_watchlist(
    identity: Option<IdentityHeaders>,
    State(state): State<AppState>,
    Path((username, name)): Path<(String, String)>,
) -> Result<Json<WatchlistFilmsResponse>, CatalogServiceError> {
    let viewer = identity.map(Viewer::from);
    let usecase = GetWatchlistFilmsUseCase {
        watchlists: state.watchlist_repo(),
    };
    let (list, films) = usecase.execute(viewer.as_ref(), &username, &name).await?;
    Ok(Json(WatchlistFilmsResponse {
        list: list.into(),
        films: films_response(films),
    }))
}

// ── GET /users/@me/flows | /users/@me/flows/{list} ──────────────────────────

pub async fn get_own_watchlists(
    identity: IdentityHeaders,
    state: State<AppState>,
) -> Result<Json<Vec<WatchlistResponse>>, CatalogServiceError> {
    let username = identity.user_name.clone();
    get_watchlists(Some(identity), state, Path(username)).await
}

pub async fn get_own_watchlist(
    identity: IdentityHeaders,
    state: State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<WatchlistFilmsResponse>, CatalogServiceError> {
    let username = identity.user_name.clone();
    get_watchlist(Some(identity), state, Path((username, name))).await
}

// ── POST /users/@me/flows ────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct CreateWatchlistRequest {
    pub name: String,
    #[serde(default)]
    pub body: String,
    pub film_id: Option<i32>,
}

pub async fn create_watchlist(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Json(body): Json<CreateWatchlistRequest>,
) -> Result<(StatusCode, Json<WatchlistResponse>), CatalogServiceError> {
    let usecase = CreateWatchlistUseCase {
        films: state.film_repo(),
        watchlists: state.watchlist_repo(),
    };
    let list = usecase
        .execute(
            &Viewer::from(identity),
            CreateWatchlistInput {
                name: body.name,
                body: body.body,
                film_id: body.film_id,
            },
        )
        .await?;
    Ok((StatusCode::CREATED, Json(list.into())))
}

// ── PATCH /users/@me/flows/{list} ────────────────────────────────────────────

#[derive(Deserialize)]
pub struct UpdateWatchlistRequest {
    pub name: Option<String>,
    pub body: Option<String>,
}

pub async fn update_watchlist(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Path(name): Path<String>,
    Json(body): Json<UpdateWatchlistRequest>,
) -> Result<Json<WatchlistResponse>, CatalogServiceError> {
    let usecase = UpdateWatchlistUseCase {
        watchlists: state.watchlist_repo(),
    };
    let list = usecase
        .execute(
            &Viewer::from(identity),
            &name,
            UpdateWatchlistInput {
                name: body.name,
                body: body.body,
            },
        )
        .await?;
    Ok(Json(list.into()))
}

// ── DELETE /users/@me/flows/{list} ───────────────────────────────────────────

pub async fn delete_watchlist(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<StatusCode, CatalogServiceError> {
    let usecase = DeleteWatchlistUseCase {
        watchlists: state.watchlist_repo(),
    };
    usecase.execute(&Viewer::from(identity), &name).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ── PUT /users/@me/flows/{list}/private | /public ────────────────────────────

async fn set_visibility(
    identity: IdentityHeaders,
    state: AppState,
    name: String,
    private: bool,
) -> Result<StatusCode, CatalogServiceError> {
    let usecase = SetWatchlistVisibilityUseCase {
        watchlists: state.watchlist_repo(),
    };
    usecase.execute(&Viewer::from(identity), &name, private).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn make_private(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<StatusCode, CatalogServiceError> {
    set_visibility(identity, state, name, true).await
}

pub async fn make_public(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<StatusCode, CatalogServiceError> {
    set_visibility(identity, state, name, false).await
}

// ── PUT | DELETE /users/@me/flows/{list}/films/{film_id} ─────────────────────

pub async fn add_watchlist_film(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Path((name, film_id)): Path<(String, i32)>,
) -> Result<StatusCode, CatalogServiceError> {
    let usecase = AddWatchlistFilmUseCase {
        films: state.film_repo(),
        watchlists: state.watchlist_repo(),
    };
    usecase.execute(&Viewer::from(identity), &name, film_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn remove_watchlist_film(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Path((name, film_id)): Path<(String, i32)>,
) -> Result<StatusCode, CatalogServiceError> {
    let usecase = RemoveWatchlistFilmUseCase {
        watchlists: state.watchlist_repo(),
    };
    usecase.execute(&Viewer::from(identity), &name, film_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
