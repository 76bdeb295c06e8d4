use chrono::Utc;
use tracing::debug;

use crate::domain::repository::{FilmRepository, ReviewRepository};
use crate::error::CatalogServiceError;

// ── WriteReview ──────────────────────────────────────────────────────────────

pub struct WriteReviewUseCase<F: FilmRepository, V: ReviewRepository> {
    pub films: F,
    pub reviews: V,
}

impl<F: FilmRepository, V: ReviewRepository> WriteReviewUseCase<F, V> {
    pub async fn execute(
        &self,
        user_id: i32,
        film_id: i32,
        body: &str,
    ) -> Result<(), CatalogServiceError> {
        let body = body.trim();
        if body.is_empty() {
            return Err(CatalogServiceError::EmptyReview);
        }
        if !self.films.exists(film_id).await? {
            return Err(CatalogServiceError::FilmNotFound);
        }
        self.reviews
            .create(user_id, film_id, body, Utc::now())
            .await?;
        debug!(user_id, film_id, "review written");
        Ok(())
    }
}
