//! Service plumbing shared by the cinema services: tracing, request ids,
//! health probes, serializers and query-building helpers.

pub mod config;
pub mod health;
pub mod middleware;
pub mod sea_ext;
pub mod serde;
pub mod tracing;
