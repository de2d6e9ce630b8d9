//! User domain events. Recorded on the aggregate, dispatched after persistence.

use crate::domain::UserId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Subscription key for the dispatcher: one per event variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    UserCreated,
    UserEmailChanged,
    UserDeleted,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum DomainEvent {
    UserCreated {
        aggregate_id: UserId,
        occurred_at: DateTime<Utc>,
        name: String,
        email: String,
        age: u8,
    },
    UserEmailChanged {
        aggregate_id: UserId,
        occurred_at: DateTime<Utc>,
        old_email: String,
        new_email: String,
    },
    UserDeleted {
        aggregate_id: UserId,
        occurred_at: DateTime<Utc>,
        email: String,
    },
}

impl DomainEvent {
    pub fn user_created(aggregate_id: UserId, name: &str, email: &str, age: u8) -> Self {
        Self::UserCreated {
            aggregate_id,
            occurred_at: Utc::now(),
            name: name.to_string(),
            email: email.to_string(),
            age,
        }
    }

    pub fn user_email_changed(aggregate_id: UserId, old_email: &str, new_email: &str) -> Self {
        Self::UserEmailChanged {
            aggregate_id,
            occurred_at: Utc::now(),
            old_email: old_email.to_string(),
            new_email: new_email.to_string(),
        }
    }

    pub fn user_deleted(aggregate_id: UserId, email: &str) -> Self {
        Self::UserDeleted {
            aggregate_id,
            occurred_at: Utc::now(),
            email: email.to_string(),
        }
    }

    pub fn kind(&self) -> EventKind {
        match self {
            Self::UserCreated { .. } => EventKind::UserCreated,
            Self::UserEmailChanged { .. } => EventKind::UserEmailChanged,
            Self::UserDeleted { .. } => EventKind::UserDeleted,
        }
    }

    pub fn aggregate_id(&self) -> UserId {
        match self {
            Self::UserCreated { aggregate_id, .. }
            | Self::UserEmailChanged { aggregate_id, .. }
            | Self::UserDeleted { aggregate_id, .. } => *aggregate_id,
        }
    }

    pub fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            Self::UserCreated { occurred_at, .. }
            | Self::UserEmailChanged { occurred_at, .. }
            | Self::UserDeleted { occurred_at, .. } => *occurred_at,
        }
    }
}
