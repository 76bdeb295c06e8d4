use tracing::info;

use crate::domain::repository::{FilmRepository, UserRepository, WatchlistRepository};
use crate::domain::types::{Film, NewWatchlist, Viewer, Watchlist, WatchlistName};
use crate::error::CatalogServiceError;

async fn owned_list<W: WatchlistRepository>(
    watchlists: &W,
    owner: &Viewer,
    name: &str,
) -> Result<Watchlist, CatalogServiceError> {
    watchlists
        .find(&owner.name, name)
        .await?
        .ok_or(CatalogServiceError::WatchlistNotFound)
}

// ── GetWatchlists ────────────────────────────────────────────────────────────

pub struct GetWatchlistsUseCase<U: UserRepository, W: WatchlistRepository> {
    pub users: U,
    pub watchlists: W,
}

impl<U: UserRepository, W: WatchlistRepository> GetWatchlistsUseCase<U, W> {
    /// The owner sees every list, everybody else only the public ones.
    pub async fn execute(
        &self,
        viewer: Option<&Viewer>,
        username: &str,
    ) -> Result<Vec<Watchlist>, CatalogServiceError> {
        if self.users.find_by_name(username).await?.is_none() {
            return Err(CatalogServiceError::UserNotFound);
        }
        let is_owner = viewer.is_some_and(|v| v.name == username);
        self.watchlists.list(username, is_owner).await
    }
}

// ── GetWatchlistFilms ────────────────────────────────────────────────────────

pub struct GetWatchlistFilmsUseCase<W: WatchlistRepository> {
    pub watchlists: W,
}

impl<W: WatchlistRepository> GetWatchlistFilmsUseCase<W> {
    pub async fn execute(
        &self,
        viewer: Option<&Viewer>,
        username: &str,
        name: &str,
    ) -> Result<(Watchlist, Vec<Film>), CatalogServiceError> {
        let list = self
            .watchlists
            .find(username, name)
            .await?
            .filter(|l| l.is_visible_to(viewer.map(|v| v.name.as_str())))
            .ok_or(CatalogServiceError::WatchlistNotFound)?;
        let films = self.watchlists.films(list.id).await?;
        Ok((list, films))
    }
}

// ── CreateWatchlist ──────────────────────────────────────────────────────────

pub struct CreateWatchlistInput {
    pub name: String,
    pub body: String,
    pub film_id: Option<i32>,
}

pub struct CreateWatchlistUseCase<F: FilmRepository, W: WatchlistRepository> {
    pub films: F,
    pub watchlists: W,
}

impl<F: FilmRepository, W: WatchlistRepository> CreateWatchlistUseCase<F, W> {
    pub async fn execute(
        &self,
        owner: &Viewer,
        input: CreateWatchlistInput,
    ) -> Result<Watchlist, CatalogServiceError> {
        let name = WatchlistName::parse(&input.name)?;
        if let Some(film_id) = input.film_id
            && !self.films.exists(film_id).await?
        {
            return Err(CatalogServiceError::FilmNotFound);
        }
        let list = self
            .watchlists
            .create(&NewWatchlist {
                username: owner.name.clone(),
                name,
                body: input.body.trim().to_owned(),
            })
            .await?
            .ok_or(CatalogServiceError::WatchlistAlreadyExists)?;
        if let Some(film_id) = input.film_id {
            self.watchlists.add_film(list.id, film_id).await?;
        }
        info!(owner = %owner.name, watchlist_id = list.id, "watchlist created");
        Ok(list)
    }
}

// ── UpdateWatchlist ──────────────────────────────────────────────────────────

pub struct UpdateWatchlistInput {
    pub name: Option<String>,
    pub body: Option<String>,
}

pub struct UpdateWatchlistUseCase<W: WatchlistRepository> {
    pub watchlists: W,
}

impl<W: WatchlistRepository> UpdateWatchlistUseCase<W> {
    pub async fn execute(
        &self,
        owner: &Viewer,
        name: &str,
        input: UpdateWatchlistInput,
    ) -> Result<Watchlist, CatalogServiceError> {
        let list = owned_list(&self.watchlists, owner, name).await?;
        let new_name = match input.name.as_deref() {
            Some(raw) => WatchlistName::parse(raw)?.into_inner(),
            None => list.name.clone(),
        };
        let new_body = input
            .body
            .map(|b| b.trim().to_owned())
            .unwrap_or_else(|| list.body.clone());
        if new_name != list.name
            && self
                .watchlists
                .find(&owner.name, &new_name)
                .await?
                .is_some()
        {
            return Err(CatalogServiceError::WatchlistAlreadyExists);
        }
        self.watchlists.update(list.id, &new_name, &new_body).await?;
        Ok(Watchlist {
            name: new_name,
            body: new_body,
            ..list
        })
    }
}

// ── SetWatchlistVisibility ───────────────────────────────────────────────────

pub struct SetWatchlistVisibilityUseCase<W: WatchlistRepository> {
    pub watchlists: W,
}

impl<W: WatchlistRepository> SetWatchlistVisibilityUseCase<W> {
    pub async fn execute(
        &self,
        owner: &Viewer,
        name: &str,
        private: bool,
    ) -> Result<(), CatalogServiceError> {
        let list = owned_list(&self.watchlists, owner, name).await?;
        self.watchlists.set_private(list.id, private).await
    }
}

// ── DeleteWatchlist ──────────────────────────────────────────────────────────

pub struct DeleteWatchlistUseCase<W: WatchlistRepository> {
    pub watchlists: W,
}

impl<W: WatchlistRepository> DeleteWatchlistUseCase<W> {
    pub async fn execute(&self, owner: &Viewer, name: &str) -> Result<(), CatalogServiceError> {
        let list = owned_list(&self.watchlists, owner, name).await?;
        self.watchlists.delete(list.id).await?;
        info!(owner = %owner.name, watchlist_id = list.id, "watchlist deleted");
        Ok(())
    }
}

// ── AddWatchlistFilm ─────────────────────────────────────────────────────────

pub struct AddWatchlistFilmUseCase<F: FilmRepository, W: WatchlistRepository> {
    pub films: F,
    pub watchlists: W,
}

impl<F: FilmRepository, W: WatchlistRepository> AddWatchlistFilmUseCase<F, W> {
    /// Returns `true` if the film was added, `false` if it was already listed.
    pub async fn execute(
        &self,
        owner: &Viewer,
        name: &str,
        film_id: i32,
    ) -> Result<bool, CatalogServiceError> {
        let list = owned_list(&self.watchlists, owner, name).await?;
        if !self.films.exists(film_id).await? {
            return Err(CatalogServiceError::FilmNotFound);
        }
        self.watchlists.add_film(list.id, film_id).await
    }
}

// ── RemoveWatchlistFilm ──────────────────────────────────────────────────────

pub struct RemoveWatchlistFilmUseCase<W: WatchlistRepository> {
    pub watchlists: W,
}

impl<W: WatchlistRepository> RemoveWatchlistFilmUseCase<W> {
    pub async fn execute(
        &self,
        owner: &Viewer,
        name: &str,
        film_id: i32,
    ) -> Result<(), CatalogServiceError> {
        let list = owned_list(&self.watchlists, owner, name).await?;
        if !self.watchlists.remove_film(list.id, film_id).await? {
            return Err(CatalogServiceError::FilmNotInList);
        }
        Ok(())
    }
}
