//! Analytics handler. Keeps running counters and logs each tracked event.

use crate::domain::DomainEvent;
use crate::ports::EventHandler;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::info;

#[derive(Default)]
pub struct UserAnalyticsHandler {
    registrations: AtomicU64,
    adult_registrations: AtomicU64,
    email_changes: AtomicU64,
    deletions: AtomicU64,
}

/// Point-in-time copy of the analytics counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnalyticsSnapshot {
    pub registrations: u64,
    pub adult_registrations: u64,
    pub email_changes: u64,
    pub deletions: u64,
}

impl UserAnalyticsHandler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> AnalyticsSnapshot {
        AnalyticsSnapshot {
            registrations: self.registrations.load(Ordering::Relaxed),
            adult_registrations: self.adult_registrations.load(Ordering::Relaxed),
            email_changes: self.email_changes.load(Ordering::Relaxed),
            deletions: self.deletions.load(Ordering::Relaxed),
        }
    }
}

impl EventHandler for UserAnalyticsHandler {
    fn handle(&self, event: &DomainEvent) {
        match event {
            DomainEvent::UserCreated { age, .. } => {
                let total = self.registrations.fetch_add(1, Ordering::Relaxed) + 1;
                if *age >= 18 {
                    self.adult_registrations.fetch_add(1, Ordering::Relaxed);
                }
                info!(age, total, "analytics: new user registered");
            }
            DomainEvent::UserEmailChanged { .. } => {
                let total = self.email_changes.fetch_add(1, Ordering::Relaxed) + 1;
                info!(total, "analytics: user email changed");
            }
            DomainEvent::UserDeleted { .. } => {
                let total = self.deletions.fetch_add(1, Ordering::Relaxed) + 1;
                info!(total, "analytics: user deleted");
            }
        }
    }
}
