//! Schema for the catalog database, applied at service startup and by tests.

use sea_orm_migration::prelude::*;

mod m20250601_000001_create_users;
mod m20250601_000002_create_catalog;
mod m20250601_000003_create_reviews_and_rates;
mod m20250601_000004_create_watchlists;
mod m20250601_000005_create_film_sets;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250601_000001_create_users::Migration),
            Box::new(m20250601_000002_create_catalog::Migration),
            Box::new(m20250601_000003_create_reviews_and_rates::Migration),
            Box::new(m20250601_000004_create_watchlists::Migration),
            Box::new(m20250601_000005_create_film_sets::Migration),
        ]
    }
}
