#![allow(async_fn_in_trait)]

use chrono::{DateTime, Utc};

use cinema_domain::cast::CastType;
use cinema_domain::pagination::PageWindow;
use cinema_domain::rating::RatingValue;
use cinema_domain::search::SearchTerm;

use crate::domain::types::{
    Film, FilmRanking, NewUser, NewWatchlist, Person, Review, User, UserReview, UserSummary,
    Watchlist,
};
use crate::error::CatalogServiceError;

/// Repository for films and their cast and genre associations.
pub trait FilmRepository: Send + Sync {
    async fn ranked(&self, ranking: FilmRanking, limit: u64)
    -> Result<Vec<Film>, CatalogServiceError>;
    async fn exists(&self, id: i32) -> Result<bool, CatalogServiceError>;
    async fn find(&self, id: i32) -> Result<Option<Film>, CatalogServiceError>;
    /// Persons credited on the film with the given role, in credit order.
    async fn cast(&self, film_id: i32, role: CastType)
    -> Result<Vec<Person>, CatalogServiceError>;
    async fn genres(&self, film_id: i32) -> Result<Vec<String>, CatalogServiceError>;
}

/// Repository for persons.
pub trait PersonRepository: Send + Sync {
    async fn find(&self, id: i32) -> Result<Option<Person>, CatalogServiceError>;
    async fn job_types(&self, person_id: i32) -> Result<Vec<String>, CatalogServiceError>;
    /// Films the person is credited on with the given role, newest first.
    async fn films(&self, person_id: i32, role: CastType)
    -> Result<Vec<Film>, CatalogServiceError>;
}

/// Repository for reviews. Reviews are append-only.
pub trait ReviewRepository: Send + Sync {
    async fn count_for_film(&self, film_id: i32) -> Result<u64, CatalogServiceError>;
    /// Newest first.
    async fn list_for_film(
        &self,
        film_id: i32,
        window: PageWindow,
    ) -> Result<Vec<Review>, CatalogServiceError>;
    async fn count_for_user(&self, user_id: i32) -> Result<u64, CatalogServiceError>;
    /// Newest first.
    async fn list_for_user(
        &self,
        user_id: i32,
        window: PageWindow,
    ) -> Result<Vec<UserReview>, CatalogServiceError>;
    async fn create(
        &self,
        user_id: i32,
        film_id: i32,
        body: &str,
        date: DateTime<Utc>,
    ) -> Result<(), CatalogServiceError>;
}

/// Repository for per-user film ratings.
pub trait RatingRepository: Send + Sync {
    async fn find(&self, user_id: i32, film_id: i32)
    -> Result<Option<RatingValue>, CatalogServiceError>;
    /// Insert the rating unless the user already rated the film.
    /// Returns `true` if a row was inserted.
    async fn insert_if_absent(
        &self,
        user_id: i32,
        film_id: i32,
        value: RatingValue,
    ) -> Result<bool, CatalogServiceError>;
    /// Returns `true` if a row was deleted.
    async fn delete(&self, user_id: i32, film_id: i32) -> Result<bool, CatalogServiceError>;
}

/// Repository for user accounts.
pub trait UserRepository: Send + Sync {
    async fn find_by_name(&self, name: &str) -> Result<Option<User>, CatalogServiceError>;
    async fn email_exists(&self, email: &str) -> Result<bool, CatalogServiceError>;
    /// Create the user and return its id. A taken name or email yields
    /// `UserAlreadyExists`.
    async fn create(&self, user: &NewUser) -> Result<i32, CatalogServiceError>;
}

/// Repository for the follow graph.
pub trait FollowRepository: Send + Sync {
    /// Returns `true` if a new edge was inserted.
    async fn follow(&self, follower_id: i32, followed_id: i32)
    -> Result<bool, CatalogServiceError>;
    /// Returns `true` if an edge was deleted.
    async fn unfollow(
        &self,
        follower_id: i32,
        followed_id: i32,
    ) -> Result<bool, CatalogServiceError>;
    async fn is_following(
        &self,
        follower_id: i32,
        followed_id: i32,
    ) -> Result<bool, CatalogServiceError>;
    /// Names of the users following `user_id`.
    async fn followers(&self, user_id: i32) -> Result<Vec<String>, CatalogServiceError>;
    /// Names of the users `user_id` follows.
    async fn followings(&self, user_id: i32) -> Result<Vec<String>, CatalogServiceError>;
}

/// Repository for watchlists and their films.
pub trait WatchlistRepository: Send + Sync {
    /// Newest first. Private lists are included only when `include_private` is set.
    async fn list(
        &self,
        username: &str,
        include_private: bool,
    ) -> Result<Vec<Watchlist>, CatalogServiceError>;
    /// Names of all of the owner's lists, newest first.
    async fn names(&self, username: &str) -> Result<Vec<String>, CatalogServiceError>;
    async fn find(&self, username: &str, name: &str)
    -> Result<Option<Watchlist>, CatalogServiceError>;
    /// Returns `None` when the owner already has a list with that name.
    async fn create(&self, list: &NewWatchlist) -> Result<Option<Watchlist>, CatalogServiceError>;
    /// Films in insertion order.
    async fn films(&self, watchlist_id: i32) -> Result<Vec<Film>, CatalogServiceError>;
    /// Returns `true` if the film was not in the list yet.
    async fn add_film(&self, watchlist_id: i32, film_id: i32) -> Result<bool, CatalogServiceError>;
    /// Returns `true` if a row was deleted.
    async fn remove_film(
        &self,
        watchlist_id: i32,
        film_id: i32,
    ) -> Result<bool, CatalogServiceError>;
    async fn set_private(&self, watchlist_id: i32, private: bool)
    -> Result<(), CatalogServiceError>;
    /// Rename and re-describe the list in a single statement. A name taken by
    /// another list of the same owner yields `WatchlistAlreadyExists`.
    async fn update(
        &self,
        watchlist_id: i32,
        name: &str,
        body: &str,
    ) -> Result<(), CatalogServiceError>;
    /// Delete the list and its film links atomically.
    async fn delete(&self, watchlist_id: i32) -> Result<(), CatalogServiceError>;
}

/// Repository for one per-user film set (watch later or favorites).
pub trait FilmSetRepository: Send + Sync {
    /// Most recently added first.
    async fn list(&self, user_id: i32) -> Result<Vec<Film>, CatalogServiceError>;
    /// Returns `true` if the film was not in the set yet.
    async fn add(&self, user_id: i32, film_id: i32) -> Result<bool, CatalogServiceError>;
    /// Returns `true` if a row was deleted.
    async fn remove(&self, user_id: i32, film_id: i32) -> Result<bool, CatalogServiceError>;
    async fn contains(&self, user_id: i32, film_id: i32) -> Result<bool, CatalogServiceError>;
}

/// Filtered, paginated catalog queries.
pub trait SearchRepository: Send + Sync {
    async fn count_films(&self, term: &SearchTerm) -> Result<u64, CatalogServiceError>;
    /// Title prefix match, newest first then by ranking value.
    async fn films(
        &self,
        term: &SearchTerm,
        window: PageWindow,
    ) -> Result<Vec<Film>, CatalogServiceError>;
    async fn count_persons(
        &self,
        term: &SearchTerm,
        roles: &[CastType],
    ) -> Result<u64, CatalogServiceError>;
    /// Name prefix match restricted to persons holding one of `roles`, by name.
    async fn persons(
        &self,
        term: &SearchTerm,
        roles: &[CastType],
        window: PageWindow,
    ) -> Result<Vec<Person>, CatalogServiceError>;
    /// Name prefix match ranked by follower count, at most `limit` rows.
    async fn users(
        &self,
        term: &SearchTerm,
        limit: u64,
    ) -> Result<Vec<UserSummary>, CatalogServiceError>;
    /// Ids of the genres whose names match, case-insensitively.
    async fn genre_ids(&self, names: &[String]) -> Result<Vec<i32>, CatalogServiceError>;
    async fn count_films_with_genres(&self, genre_ids: &[i32])
    -> Result<u64, CatalogServiceError>;
    /// Films tagged with every one of `genre_ids`, newest first then by ranking value.
    async fn films_with_genres(
        &self,
        genre_ids: &[i32],
        window: PageWindow,
    ) -> Result<Vec<Film>, CatalogServiceError>;
}

/// Port for one-way password hashing.
pub trait PasswordHasher: Send + Sync {
    fn hash(&self, password: &str) -> String;

    fn verify(&self, password: &str, hash: &str) -> bool {
        self.hash(password) == hash
    }
}
