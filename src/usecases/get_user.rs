//! Fetch a single user by id.

use crate::domain::{DomainError, User, UserId};
use crate::ports::UserRepository;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct GetUserQuery {
    pub user_id: UserId,
}

pub struct GetUserUseCase {
    repo: Arc<dyn UserRepository>,
}

impl GetUserUseCase {
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, query: GetUserQuery) -> Result<User, DomainError> {
        self.repo
            .get_user_by_id(&query.user_id)
            .await?
            .ok_or_else(|| DomainError::UserNotFound(query.user_id.to_string()))
    }
}
