//! Delete a user by id and announce the removal.

use crate::domain::{DomainError, UserId};
use crate::ports::UserRepository;
use crate::usecases::EventDispatcher;
use std::sync::Arc;
use tracing::info;

#[derive(Debug, Clone)]
pub struct DeleteUserCommand {
    pub user_id: UserId,
}

pub struct DeleteUserUseCase {
    repo: Arc<dyn UserRepository>,
    dispatcher: Arc<EventDispatcher>,
}

impl DeleteUserUseCase {
    pub fn new(repo: Arc<dyn UserRepository>, dispatcher: Arc<EventDispatcher>) -> Self {
        Self { repo, dispatcher }
    }

    pub async fn execute(&self, command: DeleteUserCommand) -> Result<(), DomainError> {
        let not_found = || DomainError::UserNotFound(command.user_id.to_string());
        let mut user = self
            .repo
            .get_user_by_id(&command.user_id)
            .await?
            .ok_or_else(not_found)?;

        user.mark_deleted();
        if !self.repo.delete_user(&command.user_id).await? {
            return Err(not_found());
        }
        info!(user_id = %command.user_id, "user deleted");

        let events = user.take_domain_events();
        self.dispatcher.dispatch(&events);
        Ok(())
    }
}
