//! Port traits. API boundaries for the hexagon.
//!
//! - Outbound: called by use cases into infrastructure (persistence)
//! - Events: implemented by reactions to domain events

pub mod events;
pub mod outbound;

pub use events::EventHandler;
pub use outbound::UserRepository;
