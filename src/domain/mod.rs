//! Core domain layer. No external I/O dependencies.
//!
//! Entities, value objects and events live here. Dependencies flow inward.

pub mod errors;
pub mod events;
pub mod user;
pub mod value_objects;

pub use errors::DomainError;
pub use events::{DomainEvent, EventKind};
pub use user::{User, UserId, UserProperties};
pub use value_objects::{Age, Email, Name};
