//! Auth types shared across cinema services.
//!
//! Session handling lives in the gateway; services only read the identity it injects.

pub mod identity;
