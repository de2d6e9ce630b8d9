//! Domain event handlers and their subscription wiring.

pub mod analytics;
pub mod audit;
pub mod notification;

pub use analytics::{AnalyticsSnapshot, UserAnalyticsHandler};
pub use audit::UserAuditHandler;
pub use notification::UserNotificationHandler;

use crate::domain::EventKind;
use crate::ports::EventHandler;
use crate::usecases::EventDispatcher;
use std::sync::Arc;

const USER_EVENTS: [EventKind; 3] = [
    EventKind::UserCreated,
    EventKind::UserEmailChanged,
    EventKind::UserDeleted,
];

/// Subscribe the notification, audit and analytics handlers to every user event.
pub fn configure_dispatcher(dispatcher: &mut EventDispatcher, analytics: Arc<UserAnalyticsHandler>) {
    let handlers: [Arc<dyn EventHandler>; 3] = [
        Arc::new(UserNotificationHandler),
        Arc::new(UserAuditHandler),
        analytics,
    ];
    for kind in USER_EVENTS {
        for handler in &handlers {
            dispatcher.subscribe(kind, Arc::clone(handler));
        }
    }
}

/// Build a dispatcher with all user event handlers registered. The analytics
/// handler is returned too so the caller can read its counters.
pub fn create_configured_dispatcher() -> (EventDispatcher, Arc<UserAnalyticsHandler>) {
    let analytics = Arc::new(UserAnalyticsHandler::new());
    let mut dispatcher = EventDispatcher::new();
    configure_dispatcher(&mut dispatcher, Arc::clone(&analytics));
    (dispatcher, analytics)
}
