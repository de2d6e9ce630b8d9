//! Infrastructure adapters.
//!
//! Persistence implements the repository port, handlers react to domain events,
//! http is the inbound JSON API. Infrastructure errors map to DomainError.

pub mod handlers;
pub mod http;
pub mod persistence;
