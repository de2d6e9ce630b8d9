//! Event handler port. Reactions to domain events (notifications, audit, analytics).

use crate::domain::DomainEvent;

/// Handles domain events it was subscribed to. Called synchronously by the dispatcher
/// after the originating change is persisted.
pub trait EventHandler: Send + Sync {
    fn handle(&self, event: &DomainEvent);
}
