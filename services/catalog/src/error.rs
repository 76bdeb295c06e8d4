use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Catalog service domain error variants.
#[derive(Debug, thiserror::Error)]
pub enum CatalogServiceError {
    #[error("film not found")]
    FilmNotFound,
    #[error("person not found")]
    PersonNotFound,
    #[error("user not found")]
    UserNotFound,
    #[error("watchlist not found")]
    WatchlistNotFound,
    #[error("film not in list")]
    FilmNotInList,
    #[error("user already exists")]
    UserAlreadyExists,
    #[error("email already exists")]
    EmailAlreadyExists,
    #[error("watchlist already exists")]
    WatchlistAlreadyExists,
    #[error("invalid email")]
    InvalidEmail,
    #[error("invalid password")]
    InvalidPassword,
    #[error("invalid watchlist name")]
    InvalidWatchlistName,
    #[error("empty review")]
    EmptyReview,
    #[error("cannot follow yourself")]
    SelfFollow,
    #[error("missing data")]
    MissingData,
    #[error("invalid credentials")]
    InvalidCredentials,
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl CatalogServiceError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::FilmNotFound => "FILM_NOT_FOUND",
            Self::PersonNotFound => "PERSON_NOT_FOUND",
            Self::UserNotFound => "USER_NOT_FOUND",
            Self::WatchlistNotFound => "WATCHLIST_NOT_FOUND",
            Self::FilmNotInList => "FILM_NOT_IN_LIST",
            Self::UserAlreadyExists => "USER_ALREADY_EXISTS",
            Self::EmailAlreadyExists => "EMAIL_ALREADY_EXISTS",
            Self::WatchlistAlreadyExists => "WATCHLIST_ALREADY_EXISTS",
            Self::InvalidEmail => "INVALID_EMAIL",
            Self::InvalidPassword => "INVALID_PASSWORD",
            Self::InvalidWatchlistName => "INVALID_WATCHLIST_NAME",
            Self::EmptyReview => "EMPTY_REVIEW",
            Self::SelfFollow => "SELF_FOLLOW",
            Self::MissingData => "MISSING_DATA",
            Self::InvalidCredentials => "INVALID_CREDENTIALS",
            Self::Internal(_) => "INTERNAL",
        }
    }
}

impl IntoResponse for CatalogServiceError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::FilmNotFound
            | Self::PersonNotFound
            | Self::UserNotFound
            | Self::WatchlistNotFound
            | Self::FilmNotInList => StatusCode::NOT_FOUND,
            Self::UserAlreadyExists | Self::EmailAlreadyExists | Self::WatchlistAlreadyExists => {
                StatusCode::CONFLICT
            }
            Self::InvalidEmail
            | Self::InvalidPassword
            | Self::InvalidWatchlistName
            | Self::EmptyReview
            | Self::SelfFollow
            | Self::MissingData => StatusCode::BAD_REQUEST,
            Self::InvalidCredentials => StatusCode::UNAUTHORIZED,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if let Self::Internal(ref e) = self {
            tracing::error!(error = %e, kind = "INTERNAL", "internal error");
        }
        let body = serde_json::json!({
            "kind": self.kind(),
            "message": self.to_string(),
        });
        (status, axum::Json(body)).into_response()
    }
}
