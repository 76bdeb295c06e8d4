//! Gateway-injected identity headers extractor.

use axum::extract::{FromRequestParts, OptionalFromRequestParts};
use http::StatusCode;
use http::request::Parts;

pub const USER_ID_HEADER: &str = "x-cinema-user-id";
pub const USER_NAME_HEADER: &str = "x-cinema-user-name";

/// Signed-in user injected by the gateway via `x-cinema-user-id` and `x-cinema-user-name`.
///
/// Returns 401 if either header is absent or malformed. Use `Option<IdentityHeaders>`
/// on endpoints that guests may call: absent headers yield `None`, malformed ones 401.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentityHeaders {
    pub user_id: i32,
    pub user_name: String,
}

enum Lookup {
    Missing,
    Invalid,
    Found(IdentityHeaders),
}

fn lookup(parts: &Parts) -> Lookup {
    let user_id = parts.headers.get(USER_ID_HEADER);
    let user_name = parts.headers.get(USER_NAME_HEADER);
    if user_id.is_none() && user_name.is_none() {
        return Lookup::Missing;
    }

    let user_id = user_id
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.parse::<i32>().ok());
    let user_name = user_name
        .and_then(|v| v.to_str().ok())
        .filter(|s| !s.is_empty());

    match (user_id, user_name) {
        (Some(user_id), Some(user_name)) => Lookup::Found(IdentityHeaders {
            user_id,
            user_name: user_name.to_owned(),
        }),
        _ => Lookup::Invalid,
    }
}

impl<S> FromRequestParts<S> for IdentityHeaders
where
    S: Send + Sync,
{
    type Rejection = StatusCode;

    // Values are read synchronously so the returned future is 'static.
    fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> impl std::future::Future<Output = Result<Self, Self::Rejection>> + Send {
        let found = lookup(parts);
        async move {
            match found {
                Lookup::Found(identity) => Ok(identity),
                Lookup::Missing | Lookup::Invalid => Err(StatusCode::UNAUTHORIZED),
            }
        }
    }
}

impl<S> OptionalFromRequestParts<S> for IdentityHeaders
where
    S: Send + Sync,
{
    type Rejection = StatusCode;

    fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> impl std::future::Future<Output = Result<Option<Self>, Self::Rejection>> + Send {
        let found = lookup(parts);
        async move {
            match found {
                Lookup::Found(identity) => Ok(Some(identity)),
                Lookup::Missing => Ok(None),
                Lookup::Invalid => Err(StatusCode::UNAUTHORIZED),
            }
        }
    }
}
