//! Notification handler. Stand-in for email/SMS delivery: logs what would be sent.

use crate::domain::DomainEvent;
use crate::ports::EventHandler;
use tracing::info;

pub struct UserNotificationHandler;

impl EventHandler for UserNotificationHandler {
    fn handle(&self, event: &DomainEvent) {
        match event {
            DomainEvent::UserCreated { name, email, .. } => {
                info!(to = %email, "sending welcome email");
                info!(user = %name, "sending welcome SMS");
            }
            DomainEvent::UserEmailChanged {
                old_email,
                new_email,
                ..
            } => {
                info!(to = %new_email, "sending email change confirmation");
                info!(to = %old_email, "notifying previous address of email change");
            }
            DomainEvent::UserDeleted { email, .. } => {
                info!(to = %email, "sending account closure notice");
            }
        }
    }
}
