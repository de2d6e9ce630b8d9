//! Outbound ports. Application calls into infrastructure.
//!
//! Implemented by adapters.

use crate::domain::{DomainError, Email, User, UserId};

/// User persistence. Stores the aggregate's state only; pending events are not persisted.
#[async_trait::async_trait]
pub trait UserRepository: Send + Sync {
    /// Fetch a user by id. `None` if absent.
    async fn get_user_by_id(&self, user_id: &UserId) -> Result<Option<User>, DomainError>;

    /// Fetch the user owning `email`, if any. Used to keep emails unique.
    async fn find_by_email(&self, email: &Email) -> Result<Option<User>, DomainError>;

    /// Insert a new user.
    async fn create_user(&self, user: &User) -> Result<(), DomainError>;

    /// Overwrite an existing user. Returns `false` when no user has this id.
    async fn update_user(&self, user: &User) -> Result<bool, DomainError>;

    /// Remove a user. Returns `false` when no user has this id.
    async fn delete_user(&self, user_id: &UserId) -> Result<bool, DomainError>;
}
