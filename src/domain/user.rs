//! User aggregate. Identity-based equality; collects domain events until the
//! use case dispatches them.

use crate::domain::{Age, DomainError, DomainEvent, Email, Name};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;
use uuid::Uuid;

/// Unique user identifier (UUID v4).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(Uuid);

impl UserId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for UserId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s)
            .map(Self)
            .map_err(|_| DomainError::validation(format!("Invalid user ID '{}'", s)))
    }
}

/// Raw properties for creating or restoring a user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProperties {
    pub name: String,
    pub age: i64,
    pub email: String,
}

#[derive(Debug, Clone)]
pub struct User {
    id: UserId,
    name: Name,
    age: Age,
    email: Email,
    domain_events: Vec<DomainEvent>,
}

impl User {
    /// Create a new user with a fresh id. Records `UserCreated`.
    pub fn create(properties: UserProperties) -> Result<Self, DomainError> {
        let mut user = Self::build(UserId::new(), properties)?;
        let event = DomainEvent::user_created(
            user.id,
            user.name.value(),
            user.email.value(),
            user.age.value(),
        );
        user.add_domain_event(event);
        Ok(user)
    }

    /// Rehydrate a persisted user. Records no events.
    pub fn restore(id: UserId, properties: UserProperties) -> Result<Self, DomainError> {
        Self::build(id, properties)
    }

    fn build(id: UserId, properties: UserProperties) -> Result<Self, DomainError> {
        Ok(Self {
            id,
            name: Name::new(properties.name)?,
            age: Age::new(properties.age)?,
            email: Email::new(properties.email)?,
            domain_events: Vec::new(),
        })
    }

    pub fn id(&self) -> UserId {
        self.id
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn age(&self) -> Age {
        self.age
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn is_adult(&self) -> bool {
        self.age.is_adult()
    }

    /// Replace the email. Records `UserEmailChanged`; on validation failure the user is unchanged.
    pub fn change_email(&mut self, new_email: &str) -> Result<(), DomainError> {
        let new_email = Email::new(new_email)?;
        let old_email = std::mem::replace(&mut self.email, new_email);
        let event = DomainEvent::user_email_changed(self.id, old_email.value(), self.email.value());
        self.add_domain_event(event);
        Ok(())
    }

    pub fn rename(&mut self, new_name: &str) -> Result<(), DomainError> {
        self.name = Name::new(new_name)?;
        Ok(())
    }

    pub fn change_age(&mut self, new_age: i64) -> Result<(), DomainError> {
        self.age = Age::new(new_age)?;
        Ok(())
    }

    /// Records `UserDeleted`. Removal itself is the repository's job.
    pub fn mark_deleted(&mut self) {
        let event = DomainEvent::user_deleted(self.id, self.email.value());
        self.add_domain_event(event);
    }

    pub fn add_domain_event(&mut self, event: DomainEvent) {
        self.domain_events.push(event);
    }

    pub fn domain_events(&self) -> &[DomainEvent] {
        &self.domain_events
    }

    pub fn clear_domain_events(&mut self) {
        self.domain_events.clear();
    }

    /// Drain pending events, leaving the aggregate with none.
    pub fn take_domain_events(&mut self) -> Vec<DomainEvent> {
        std::mem::take(&mut self.domain_events)
    }
}

impl PartialEq for User {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for User {}

impl Hash for User {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
