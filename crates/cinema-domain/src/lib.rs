//! Domain types shared across the cinema services.
//!
//! This crate contains only pure types with no framework dependencies.
//! Import in `usecase/` and `domain/` layers; never in `infra/` or `handlers/`.

pub mod age;
pub mod cast;
pub mod pagination;
pub mod rating;
pub mod search;
