use cinema_core::config::{parse_flag, parse_or};

/// Catalog service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// sea-orm connection URL (PostgreSQL or SQLite).
    pub database_url: String,
    /// TCP port for the HTTP server (default 3120). Env var: `CATALOG_PORT`.
    pub catalog_port: u16,
    /// Page size of catalog listings and searches. Env var: `ITEMS_PER_PAGE`.
    pub items_per_page: u32,
    /// Page size of review lists. Env var: `REVIEWS_PER_PAGE`.
    pub reviews_per_page: u32,
    /// Maximum number of users returned by a user search. Env var: `USERS_SEARCH_LIMIT`.
    pub users_search_limit: u64,
    /// Secret salt mixed into every password hash.
    pub password_salt: String,
    /// PBKDF2 rounds. Env var: `PASSWORD_ITERATIONS`.
    pub password_iterations: u32,
    /// Apply pending migrations at startup. Env var: `RUN_MIGRATIONS`.
    pub run_migrations: bool,
}

impl CatalogConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from any key lookup. Panics when a required key is missing.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            database_url: lookup("DATABASE_URL").expect("DATABASE_URL"),
            catalog_port: parse_or(lookup("CATALOG_PORT"), 3120),
            items_per_page: parse_or(lookup("ITEMS_PER_PAGE"), 20u32).max(1),
            reviews_per_page: parse_or(lookup("REVIEWS_PER_PAGE"), 10u32).max(1),
            users_search_limit: parse_or(lookup("USERS_SEARCH_LIMIT"), 20),
            password_salt: lookup("PASSWORD_SALT").expect("PASSWORD_SALT"),
            password_iterations: parse_or(lookup("PASSWORD_ITERATIONS"), 150_000u32).max(1),
            run_migrations: parse_flag(lookup("RUN_MIGRATIONS"), true),
        }
    }
}
