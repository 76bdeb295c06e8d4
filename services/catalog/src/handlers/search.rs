use axum::{
    Json,
    extract::{RawQuery, State},
};
use serde::{Deserialize, Serialize, de::DeserializeOwned};

use cinema_domain::cast::CastType;
use cinema_domain::pagination::Page;

use crate::domain::types::{SearchKind, SearchResult, UserSummary, parse_roles};
use crate::error::CatalogServiceError;
use crate::handlers::{FilmResponse, PersonResponse};
use crate::state::AppState;
use crate::usecase::search::{GenreFilterUseCase, SearchInput, SearchUseCase};

/// Bracketed list parameters (`role[]=`, `gen[]=`) need `serde_qs`.
fn parse_query<T: DeserializeOwned + Default>(
    raw_query: Option<String>,
) -> Result<T, CatalogServiceError> {
    Ok(raw_query
        .as_deref()
        .map(serde_qs::from_str)
        .transpose()
        .map_err(|_| CatalogServiceError::MissingData)?
        .unwrap_or_default())
}

// ── GET /search ──────────────────────────────────────────────────────────────

#[derive(Deserialize, Default)]
pub struct SearchQuery {
    pub query: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub page: Option<String>,
    pub role: Option<Vec<String>>,
}

#[derive(Serialize)]
pub struct UserSummaryResponse {
    pub id: i32,
    pub name: String,
    pub followers: i64,
    pub followings: i64,
}

impl From<UserSummary> for UserSummaryResponse {
    fn from(user: UserSummary) -> Self {
        Self {
            id: user.id,
            name: user.name,
            followers: user.followers,
            followings: user.followings,
        }
    }
}

#[derive(Serialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum SearchResponse {
    Film(Page<FilmResponse>),
    Person(Page<PersonResponse>),
    User { items: Vec<UserSummaryResponse> },
}

impl From<SearchResult> for SearchResponse {
    fn from(result: SearchResult) -> Self {
        match result {
            SearchResult::Films(page) => Self::Film(page.map(FilmResponse::from)),
            SearchResult::Persons(page) => Self::Person(page.map(PersonResponse::from)),
            SearchResult::Users(users) => Self::User {
                items: users.into_iter().map(UserSummaryResponse::from).collect(),
            },
        }
    }
}

/// A missing or unknown `type` searches films. Without `role[]` a person
/// search covers every cast role.
pub async fn search(
    State(state): State<AppState>,
    RawQuery(raw_query): RawQuery,
) -> Result<Json<SearchResponse>, CatalogServiceError> {
    let query: SearchQuery = parse_query(raw_query)?;
    let kind = query
        .kind
        .as_deref()
        .and_then(SearchKind::from_kebab)
        .unwrap_or(SearchKind::Film);
    let roles = match &query.role {
        Some(raw) => parse_roles(raw),
        None => CastType::ALL.to_vec(),
    };

    let usecase = SearchUseCase {
        repo: state.search_repo(),
        items_per_page: state.items_per_page,
        users_limit: state.users_search_limit,
    };
    let result = usecase
        .execute(SearchInput {
            query: query.query.as_deref().unwrap_or_default(),
            kind,
            page: query.page.as_deref(),
            roles: &roles,
        })
        .await?;
    Ok(Json(result.into()))
}

// ── GET /genres ──────────────────────────────────────────────────────────────

#[derive(Deserialize, Default)]
pub struct GenreQuery {
    #[serde(default, rename = "gen")]
    pub genres: Vec<String>,
    pub page: Option<String>,
}

pub async fn filter_by_genres(
    State(state): State<AppState>,
    RawQuery(raw_query): RawQuery,
) -> Result<Json<Page<FilmResponse>>, CatalogServiceError> {
    let query: GenreQuery = parse_query(raw_query)?;
    let usecase = GenreFilterUseCase {
        repo: state.search_repo(),
        items_per_page: state.items_per_page,
    };
    let page = usecase.execute(&query.genres, query.page.as_deref()).await?;
    Ok(Json(page.map(FilmResponse::from)))
}
