//! Partial update of an existing user. Omitted fields keep their value;
//! an email change goes through the aggregate so `UserEmailChanged` is raised.

use crate::domain::{DomainError, User, UserId};
use crate::ports::UserRepository;
use crate::usecases::EventDispatcher;
use std::sync::Arc;
use tracing::info;

#[derive(Debug, Clone, Default)]
pub struct UpdateUserCommand {
    pub user_id: UserId,
    pub name: Option<String>,
    pub age: Option<i64>,
    pub email: Option<String>,
}

pub struct UpdateUserUseCase {
    repo: Arc<dyn UserRepository>,
    dispatcher: Arc<EventDispatcher>,
}

impl UpdateUserUseCase {
    pub fn new(repo: Arc<dyn UserRepository>, dispatcher: Arc<EventDispatcher>) -> Self {
        Self { repo, dispatcher }
    }

    pub async fn execute(&self, command: UpdateUserCommand) -> Result<User, DomainError> {
        let not_found = || DomainError::UserNotFound(command.user_id.to_string());
        let mut user = self
            .repo
            .get_user_by_id(&command.user_id)
            .await?
            .ok_or_else(not_found)?;

        // All mutations validate before anything is written.
        if let Some(name) = &command.name {
            user.rename(name)?;
        }
        if let Some(age) = command.age {
            user.change_age(age)?;
        }
        if let Some(email) = &command.email {
            if email != user.email().value() {
                user.change_email(email)?;
                if let Some(owner) = self.repo.find_by_email(user.email()).await? {
                    if owner.id() != user.id() {
                        return Err(DomainError::EmailTaken(email.clone()));
                    }
                }
            }
        }

        if !self.repo.update_user(&user).await? {
            return Err(not_found());
        }
        info!(user_id = %user.id(), "user updated");

        let events = user.take_domain_events();
        self.dispatcher.dispatch(&events);
        Ok(user)
    }
}
