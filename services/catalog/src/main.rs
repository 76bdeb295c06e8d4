use sea_orm::Database;
use sea_orm_migration::MigratorTrait;
use tracing::info;

use cinema_catalog::config::CatalogConfig;
use cinema_catalog::router::build_router;
use cinema_catalog::state::AppState;
use cinema_catalog_migration::Migrator;
use cinema_core::tracing::init_tracing;

#[tokio::main]
async fn main() {
    init_tracing();

    let config = CatalogConfig::from_env();

    let db = Database::connect(&config.database_url)
        .await
        .expect("failed to connect to database");

    if config.run_migrations {
        Migrator::up(&db, None)
            .await
            .expect("failed to apply migrations");
        info!("database schema is up to date");
    }

    let state = AppState::new(db, &config);
    let router = build_router(state);

    let http_addr = format!("0.0.0.0:{}", config.catalog_port);
    let listener = tokio::net::TcpListener::bind(&http_addr)
        .await
        .expect("failed to bind");

    info!("catalog service listening on {http_addr}");
    axum::serve(listener, router).await.expect("server error");
}
