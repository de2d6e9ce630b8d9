//! Create a user: validate, enforce unique email, persist, then announce.

use crate::domain::{DomainError, User, UserProperties};
use crate::ports::UserRepository;
use crate::usecases::EventDispatcher;
use std::sync::Arc;
use tracing::info;

#[derive(Debug, Clone)]
pub struct CreateUserCommand {
    pub name: String,
    pub age: i64,
    pub email: String,
}

pub struct CreateUserUseCase {
    repo: Arc<dyn UserRepository>,
    dispatcher: Arc<EventDispatcher>,
}

impl CreateUserUseCase {
    pub fn new(repo: Arc<dyn UserRepository>, dispatcher: Arc<EventDispatcher>) -> Self {
        Self { repo, dispatcher }
    }

    pub async fn execute(&self, command: CreateUserCommand) -> Result<User, DomainError> {
        let mut user = User::create(UserProperties {
            name: command.name,
            age: command.age,
            email: command.email,
        })?;

        if self.repo.find_by_email(user.email()).await?.is_some() {
            return Err(DomainError::EmailTaken(user.email().to_string()));
        }

        self.repo.create_user(&user).await?;
        info!(user_id = %user.id(), "user created");

        // Events go out only after the write succeeded.
        let events = user.take_domain_events();
        self.dispatcher.dispatch(&events);
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::EventKind;
    use crate::usecases::test_support::fixture;

    fn command(email: &str) -> CreateUserCommand {
        CreateUserCommand {
            name: "John Doe".into(),
            age: 25,
            email: email.into(),
        }
    }

    #[tokio::test]
    async fn persists_and_dispatches_user_created() {
        let (repo, dispatcher, recorder) = fixture();
        let use_case = CreateUserUseCase::new(repo.clone(), dispatcher);

        let user = use_case.execute(command("john@example.com")).await.unwrap();

        let stored = repo.get_user_by_id(&user.id()).await.unwrap().unwrap();
        assert_eq!(stored.email().value(), "john@example.com");
        assert!(user.domain_events().is_empty());
        assert_eq!(recorder.kinds(), vec![EventKind::UserCreated]);
    }

    #[tokio::test]
    async fn invalid_input_persists_nothing() {
        let (repo, dispatcher, recorder) = fixture();
        let use_case = CreateUserUseCase::new(repo.clone(), dispatcher);

        let err = use_case
            .execute(CreateUserCommand {
                name: "J".into(),
                age: 25,
                email: "j@example.com".into(),
            })
            .await
            .unwrap_err();

        assert_eq!(
            err,
            DomainError::Validation("Name must have at least 2 characters".into())
        );
        assert_eq!(repo.len().await, 0);
        assert!(recorder.events().is_empty());
    }

    #[tokio::test]
    async fn duplicate_email_is_rejected() {
        let (repo, dispatcher, recorder) = fixture();
        let use_case = CreateUserUseCase::new(repo.clone(), dispatcher);
        use_case.execute(command("dup@example.com")).await.unwrap();

        let err = use_case.execute(command("dup@example.com")).await.unwrap_err();

        assert_eq!(err, DomainError::EmailTaken("dup@example.com".into()));
        assert_eq!(repo.len().await, 1);
        assert_eq!(recorder.events().len(), 1);
    }
}
