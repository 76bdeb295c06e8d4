use sea_orm::DatabaseConnection;

use cinema_auth_types::identity::IdentityHeaders;

use crate::config::CatalogConfig;
use crate::domain::types::Viewer;
use crate::infra::collections::{DbFavoritesRepository, DbWatchLaterRepository, DbWatchlistRepository};
use crate::infra::db::{
    DbFilmRepository, DbFollowRepository, DbPersonRepository, DbRatingRepository,
    DbReviewRepository, DbUserRepository,
};
use crate::infra::password::Pbkdf2Hasher;
use crate::infra::search::DbSearchRepository;

/// Shared application state passed to every handler via axum `State`.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub items_per_page: u32,
    pub reviews_per_page: u32,
    pub users_search_limit: u64,
    pub hasher: Pbkdf2Hasher,
}

impl AppState {
    pub fn new(db: DatabaseConnection, config: &CatalogConfig) -> Self {
        Self {
            db,
            items_per_page: config.items_per_page,
            reviews_per_page: config.reviews_per_page,
            users_search_limit: config.users_search_limit,
            hasher: Pbkdf2Hasher::new(config.password_salt.clone(), config.password_iterations),
        }
    }

    pub fn film_repo(&self) -> DbFilmRepository {
        DbFilmRepository {
            db: self.db.clone(),
        }
    }

    pub fn person_repo(&self) -> DbPersonRepository {
        DbPersonRepository {
            db: self.db.clone(),
        }
    }

    pub fn review_repo(&self) -> DbReviewRepository {
        DbReviewRepository {
            db: self.db.clone(),
        }
    }

    pub fn rating_repo(&self) -> DbRatingRepository {
        DbRatingRepository {
            db: self.db.clone(),
        }
    }

    pub fn user_repo(&self) -> DbUserRepository {
        DbUserRepository {
            db: self.db.clone(),
        }
    }

    pub fn follow_repo(&self) -> DbFollowRepository {
        DbFollowRepository {
            db: self.db.clone(),
        }
    }

    pub fn watchlist_repo(&self) -> DbWatchlistRepository {
        DbWatchlistRepository {
            db: self.db.clone(),
        }
    }

    pub fn watch_later_repo(&self) -> DbWatchLaterRepository {
        DbWatchLaterRepository {
            db: self.db.clone(),
        }
    }

    pub fn favorites_repo(&self) -> DbFavoritesRepository {
        DbFavoritesRepository {
            db: self.db.clone(),
        }
    }

    pub fn search_repo(&self) -> DbSearchRepository {
        DbSearchRepository {
            db: self.db.clone(),
        }
    }
}

impl From<IdentityHeaders> for Viewer {
    fn from(identity: IdentityHeaders) -> Self {
        Self {
            id: identity.user_id,
            name: identity.user_name,
        }
    }
}
