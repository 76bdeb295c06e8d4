use axum::{
    Json,
    extract::{Path, State},
};
use serde::Serialize;

use crate::error::CatalogServiceError;
use crate::handlers::{FilmResponse, films_response};
use crate::state::AppState;
use crate::usecase::person::GetPersonDetailUseCase;

// ── GET /persons/{id} ────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct PersonDetailResponse {
    pub id: i32,
    pub name: String,
    pub img: Option<String>,
    pub job_types: Vec<String>,
    pub as_director: Vec<FilmResponse>,
    pub as_actor: Vec<FilmResponse>,
}

pub async fn get_person(
    State(state): State<AppState>,
    Path(person_id): Path<i32>,
) -> Result<Json<PersonDetailResponse>, CatalogServiceError> {
    let usecase = GetPersonDetailUseCase {
        persons: state.person_repo(),
    };
    let detail = usecase.execute(person_id).await?;
    Ok(Json(PersonDetailResponse {
        id: detail.person.id,
        name: detail.person.name,
        img: detail.person.img,
        job_types: detail.job_types,
        as_director: films_response(detail.as_director),
        as_actor: films_response(detail.as_actor),
    }))
}
