use tracing::{debug, info};

use cinema_domain::rating::RatingValue;

use crate::domain::repository::{FilmRepository, RatingRepository};
use crate::error::CatalogServiceError;

/// Outcome of a rating change. `applied` is false when the request was a
/// no-op (invalid value, already rated, nothing to delete).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RateOutcome {
    pub applied: bool,
    pub rate: f64,
    pub votes: i64,
}

async fn outcome<F: FilmRepository>(
    films: &F,
    film_id: i32,
    applied: bool,
) -> Result<RateOutcome, CatalogServiceError> {
    let film = films
        .find(film_id)
        .await?
        .ok_or(CatalogServiceError::FilmNotFound)?;
    Ok(RateOutcome {
        applied,
        rate: film.rate,
        votes: film.votes,
    })
}

// ── GetMyRating ──────────────────────────────────────────────────────────────

pub struct GetMyRatingUseCase<F: FilmRepository, R: RatingRepository> {
    pub films: F,
    pub ratings: R,
}

impl<F: FilmRepository, R: RatingRepository> GetMyRatingUseCase<F, R> {
    /// The user's rating of the film, 0 when unrated.
    pub async fn execute(&self, user_id: i32, film_id: i32) -> Result<u8, CatalogServiceError> {
        if !self.films.exists(film_id).await? {
            return Err(CatalogServiceError::FilmNotFound);
        }
        Ok(self
            .ratings
            .find(user_id, film_id)
            .await?
            .map(RatingValue::get)
            .unwrap_or(0))
    }
}

// ── RateFilm ─────────────────────────────────────────────────────────────────

pub struct RateFilmUseCase<F: FilmRepository, R: RatingRepository> {
    pub films: F,
    pub ratings: R,
}

impl<F: FilmRepository, R: RatingRepository> RateFilmUseCase<F, R> {
    pub async fn execute(
        &self,
        user_id: i32,
        film_id: i32,
        raw_value: &str,
    ) -> Result<RateOutcome, CatalogServiceError> {
        if !self.films.exists(film_id).await? {
            return Err(CatalogServiceError::FilmNotFound);
        }
        let applied = match RatingValue::parse(raw_value) {
            Some(value) => {
                let inserted = self
                    .ratings
                    .insert_if_absent(user_id, film_id, value)
                    .await?;
                if inserted {
                    info!(user_id, film_id, value = value.get(), "film rated");
                }
                inserted
            }
            None => {
                debug!(user_id, film_id, raw_value, "ignored invalid rating");
                false
            }
        };
        outcome(&self.films, film_id, applied).await
    }
}

// ── DeleteRate ───────────────────────────────────────────────────────────────

pub struct DeleteRateUseCase<F: FilmRepository, R: RatingRepository> {
    pub films: F,
    pub ratings: R,
}

impl<F: FilmRepository, R: RatingRepository> DeleteRateUseCase<F, R> {
    pub async fn execute(
        &self,
        user_id: i32,
        film_id: i32,
    ) -> Result<RateOutcome, CatalogServiceError> {
        if !self.films.exists(film_id).await? {
            return Err(CatalogServiceError::FilmNotFound);
        }
        let deleted = self.ratings.delete(user_id, film_id).await?;
        if deleted {
            info!(user_id, film_id, "film rating removed");
        }
        outcome(&self.films, film_id, deleted).await
    }
}
