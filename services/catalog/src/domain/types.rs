use chrono::{DateTime, Utc};

use cinema_domain::cast::CastType;
use cinema_domain::pagination::Page;

use crate::error::CatalogServiceError;

/// Signed-in user on whose behalf a request runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Viewer {
    pub id: i32,
    pub name: String,
}

/// Film as exposed to clients. `rate` and `votes` are already derived from
/// the catalog baseline plus every stored user rating.
#[derive(Debug, Clone, PartialEq)]
pub struct Film {
    pub id: i32,
    pub title: String,
    pub year: i32,
    pub rate: f64,
    pub votes: i64,
    pub box_office: i64,
    pub value: f64,
    pub img: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    pub id: i32,
    pub name: String,
    pub img: Option<String>,
}

/// Fixed film listings, each with its own ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilmRanking {
    /// Highest ranking value first.
    Top,
    /// Films released after `after_year`, highest ranking value first.
    Popular { after_year: i32 },
    /// Highest box office first.
    HighestGrossing,
}

/// Review of a film, joined with its author.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Review {
    pub id: i32,
    pub user_id: i32,
    pub user_name: String,
    pub film_id: i32,
    pub body: String,
    pub date: DateTime<Utc>,
}

/// Review on a user's profile, joined with the reviewed film.
#[derive(Debug, Clone, PartialEq)]
pub struct UserReview {
    pub id: i32,
    pub film: Film,
    pub body: String,
    pub date: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FilmDetail {
    pub film: Film,
    pub directors: Vec<Person>,
    pub actors: Vec<Person>,
    pub genres: Vec<String>,
    pub reviews: Page<Review>,
    /// Present only for signed-in viewers.
    pub viewer: Option<FilmViewerState>,
}

/// What a signed-in viewer sees in addition to the public film page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilmViewerState {
    /// The viewer's own rating, 0 when the film is unrated.
    pub my_rate: u8,
    pub watchlists: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PersonDetail {
    pub person: Person,
    pub job_types: Vec<String>,
    pub as_director: Vec<Film>,
    pub as_actor: Vec<Film>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub password_hash: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password_hash: String,
}

/// User search hit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserSummary {
    pub id: i32,
    pub name: String,
    pub followers: i64,
    pub followings: i64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    pub id: i32,
    pub name: String,
    pub followers: Vec<String>,
    pub followings: Vec<String>,
    pub is_following: bool,
    pub reviews: Page<UserReview>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Watchlist {
    pub id: i32,
    pub username: String,
    pub name: String,
    pub body: String,
    pub private: bool,
}

impl Watchlist {
    /// Private lists are visible to their owner only.
    pub fn is_visible_to(&self, viewer: Option<&str>) -> bool {
        !self.private || viewer == Some(self.username.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewWatchlist {
    pub username: String,
    pub name: WatchlistName,
    pub body: String,
}

/// A validated watchlist name: 1 to 12 characters after trimming.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WatchlistName(String);

impl WatchlistName {
    pub const MAX_CHARS: usize = 12;

    pub fn parse(raw: &str) -> Result<Self, CatalogServiceError> {
        let name = raw.trim();
        if name.is_empty() || name.chars().count() > Self::MAX_CHARS {
            return Err(CatalogServiceError::InvalidWatchlistName);
        }
        Ok(Self(name.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

/// Target of a `/search` request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchKind {
    Film,
    Person,
    User,
}

impl SearchKind {
    pub fn from_kebab(s: &str) -> Option<Self> {
        match s {
            "film" => Some(Self::Film),
            "person" => Some(Self::Person),
            "user" => Some(Self::User),
            _ => None,
        }
    }
}

/// Result of a `/search` request. User search is capped, not paginated.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchResult {
    Films(Page<Film>),
    Persons(Page<Person>),
    Users(Vec<UserSummary>),
}

/// Cast roles requested for a person search. Unknown role names are dropped.
pub fn parse_roles(raw: &[String]) -> Vec<CastType> {
    let mut roles = Vec::new();
    for role in raw.iter().filter_map(|r| CastType::from_kebab_case(r.trim())) {
        if !roles.contains(&role) {
            roles.push(role);
        }
    }
    roles
}
