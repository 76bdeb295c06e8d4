//! Mock auth helpers for integration tests.
//!
//! Services behind the gateway receive `x-cinema-user-id` + `x-cinema-user-name` headers
//! injected by the gateway. In tests, `MockAuth` produces these headers directly
//! so no real gateway or session is needed.

use axum::http::{HeaderMap, HeaderName, HeaderValue};

use cinema_auth_types::identity::{USER_ID_HEADER, USER_NAME_HEADER};

/// Configurable identity injected into test requests.
pub struct MockAuth {
    pub user_id: i32,
    pub user_name: String,
}

impl MockAuth {
    pub fn new(user_id: i32, user_name: &str) -> Self {
        Self {
            user_id,
            user_name: user_name.to_owned(),
        }
    }

    /// Return headers as if the gateway injected them.
    pub fn headers(&self) -> HeaderMap {
        let mut map = HeaderMap::new();
        for (name, value) in self.header_pairs() {
            map.insert(name, value);
        }
        map
    }

    /// Header pairs, for clients that add headers one at a time.
    pub fn header_pairs(&self) -> [(HeaderName, HeaderValue); 2] {
        [
            (
                HeaderName::from_static(USER_ID_HEADER),
                HeaderValue::from_str(&self.user_id.to_string()).unwrap(),
            ),
            (
                HeaderName::from_static(USER_NAME_HEADER),
                HeaderValue::from_str(&self.user_name).unwrap(),
            ),
        ]
    }
}
