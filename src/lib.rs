//! account-service: user accounts over HTTP with a hexagonal layout.
//!
//! domain (entities, value objects, events) <- ports <- usecases <- adapters.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod shared;
pub mod usecases;
