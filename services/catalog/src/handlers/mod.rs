pub mod film;
pub mod film_set;
pub mod person;
pub mod search;
pub mod user;
pub mod watchlist;

use axum::extract::State;
use axum::http::StatusCode;
use serde::{Deserialize, Serialize};

use crate::domain::types::{Film, Person};
use crate::state::AppState;

// ── Shared response shapes ───────────────────────────────────────────────────

#[derive(Serialize)]
pub struct FilmResponse {
    pub id: i32,
    pub title: String,
    pub year: i32,
    pub rate: f64,
    pub votes: i64,
    pub box_office: i64,
    pub img: Option<String>,
}

impl From<Film> for FilmResponse {
    fn from(film: Film) -> Self {
        Self {
            id: film.id,
            title: film.title,
            year: film.year,
            rate: film.rate,
            votes: film.votes,
            box_office: film.box_office,
            img: film.img,
        }
    }
}

pub(crate) fn films_response(films: Vec<Film>) -> Vec<FilmResponse> {
    films.into_iter().map(FilmResponse::from).collect()
}

#[derive(Serialize)]
pub struct PersonResponse {
    pub id: i32,
    pub name: String,
    pub img: Option<String>,
}

impl From<Person> for PersonResponse {
    fn from(person: Person) -> Self {
        Self {
            id: person.id,
            name: person.name,
            img: person.img,
        }
    }
}

/// `?page=` kept raw so junk values fall back to page 1 instead of a 400.
#[derive(Deserialize, Default)]
pub struct PageQuery {
    pub page: Option<String>,
}

// ── GET /readyz ──────────────────────────────────────────────────────────────

pub async fn readyz(State(state): State<AppState>) -> StatusCode {
    cinema_core::health::database_ready(&state.db).await
}
