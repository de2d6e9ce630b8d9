//! Publish-subscribe fan-out of domain events to registered handlers.
//!
//! Configured once at startup, then shared read-only behind an `Arc`.

use crate::domain::{DomainEvent, EventKind};
use crate::ports::EventHandler;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

#[derive(Default)]
pub struct EventDispatcher {
    handlers: HashMap<EventKind, Vec<Arc<dyn EventHandler>>>,
}

impl EventDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribe `handler` to events of `kind`. A handler may subscribe to several kinds.
    pub fn subscribe(&mut self, kind: EventKind, handler: Arc<dyn EventHandler>) {
        self.handlers.entry(kind).or_default().push(handler);
    }

    /// Deliver each event to its handlers in subscription order. Unsubscribed kinds are skipped.
    pub fn dispatch(&self, events: &[DomainEvent]) {
        debug!(count = events.len(), "dispatching domain events");
        for event in events {
            if let Some(handlers) = self.handlers.get(&event.kind()) {
                for handler in handlers {
                    handler.handle(event);
                }
            }
        }
    }

    pub fn dispatch_single(&self, event: &DomainEvent) {
        self.dispatch(std::slice::from_ref(event));
    }

    pub fn clear_handlers(&mut self) {
        self.handlers.clear();
    }

    pub fn handler_count(&self, kind: EventKind) -> usize {
        self.handlers.get(&kind).map_or(0, Vec::len)
    }
}
