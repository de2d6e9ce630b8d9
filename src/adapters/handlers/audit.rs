//! Audit handler. Writes every user event to the `audit` tracing target as JSON,
//! so a subscriber can route it to a separate sink.

use crate::domain::DomainEvent;
use crate::ports::EventHandler;
use tracing::{info, warn};

pub struct UserAuditHandler;

impl UserAuditHandler {
    /// JSON line recorded for `event`.
    pub fn audit_record(event: &DomainEvent) -> Result<String, serde_json::Error> {
        serde_json::to_string(event)
    }
}

impl EventHandler for UserAuditHandler {
    fn handle(&self, event: &DomainEvent) {
        match Self::audit_record(event) {
            Ok(record) => info!(
                target: "audit",
                user_id = %event.aggregate_id(),
                kind = ?event.kind(),
                %record,
                "user event"
            ),
            Err(e) => warn!(target: "audit", error = %e, "failed to serialize audit record"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::UserId;

    #[test]
    fn audit_record_is_tagged_json() {
        let id = UserId::new();
        let record =
            UserAuditHandler::audit_record(&DomainEvent::user_created(id, "Ann", "ann@example.com", 31))
                .unwrap();
        let value: serde_json::Value = serde_json::from_str(&record).unwrap();

        assert_eq!(value["event"], "user_created");
        assert_eq!(value["aggregate_id"], id.to_string());
        assert_eq!(value["age"], 31);
        assert!(value["occurred_at"].is_string());
    }
}
