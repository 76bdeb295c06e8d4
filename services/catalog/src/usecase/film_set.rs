//! Watch-later and favorites. Both are plain per-user film sets, so the same
//! use cases serve either repository.

use tracing::debug;

use crate::domain::repository::{FilmRepository, FilmSetRepository};
use crate::domain::types::{Film, Viewer};
use crate::error::CatalogServiceError;

pub struct ListFilmSetUseCase<S: FilmSetRepository> {
    pub set: S,
}

impl<S: FilmSetRepository> ListFilmSetUseCase<S> {
    pub async fn execute(&self, viewer: &Viewer) -> Result<Vec<Film>, CatalogServiceError> {
        self.set.list(viewer.id).await
    }
}

pub struct AddToFilmSetUseCase<F: FilmRepository, S: FilmSetRepository> {
    pub films: F,
    pub set: S,
}

impl<F: FilmRepository, S: FilmSetRepository> AddToFilmSetUseCase<F, S> {
    /// Returns `false` when the film was already in the set.
    pub async fn execute(&self, viewer: &Viewer, film_id: i32) -> Result<bool, CatalogServiceError> {
        if !self.films.exists(film_id).await? {
            return Err(CatalogServiceError::FilmNotFound);
        }
        let added = self.set.add(viewer.id, film_id).await?;
        debug!(user_id = viewer.id, film_id, added, "film set add");
        Ok(added)
    }
}

pub struct RemoveFromFilmSetUseCase<S: FilmSetRepository> {
    pub set: S,
}

impl<S: FilmSetRepository> RemoveFromFilmSetUseCase<S> {
    pub async fn execute(&self, viewer: &Viewer, film_id: i32) -> Result<(), CatalogServiceError> {
        if !self.set.remove(viewer.id, film_id).await? {
            return Err(CatalogServiceError::FilmNotInList);
        }
        Ok(())
    }
}

pub struct FilmSetContainsUseCase<S: FilmSetRepository> {
    pub set: S,
}

impl<S: FilmSetRepository> FilmSetContainsUseCase<S> {
    pub async fn execute(&self, viewer: &Viewer, film_id: i32) -> Result<bool, CatalogServiceError> {
        self.set.contains(viewer.id, film_id).await
    }
}
