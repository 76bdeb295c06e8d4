//! Test utilities for cinema services.
//!
//! Provides gateway identity headers and an in-memory database.
//! Import in `#[cfg(test)]` blocks and integration tests only, never in production code.

pub mod auth;
pub mod db;
