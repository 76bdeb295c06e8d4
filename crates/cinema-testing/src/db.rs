//! In-memory SQLite databases for repository tests.

use sea_orm::{ConnectOptions, Database, DatabaseConnection};

/// Connect to a fresh, empty in-memory SQLite database.
///
/// The pool is pinned to one long-lived connection: every new SQLite
/// connection to `sqlite::memory:` would otherwise see its own empty database.
pub async fn memory_db() -> DatabaseConnection {
    let mut options = ConnectOptions::new("sqlite::memory:");
    options
        .max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);
    Database::connect(options)
        .await
        .expect("failed to open in-memory sqlite")
}
