//! Implements UserRepository in process memory.
//!
//! Used by tests and by `storage = "memory"`. Contents are lost on restart.

use crate::domain::{DomainError, Email, User, UserId};
use crate::ports::UserRepository;
use std::collections::HashMap;
use tokio::sync::RwLock;

/// In-memory user store keyed by id. Stored users carry no pending events.
#[derive(Default)]
pub struct InMemoryUserRepo {
    users: RwLock<HashMap<UserId, User>>,
}

impl InMemoryUserRepo {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.users.read().await.is_empty()
    }

    fn snapshot(user: &User) -> User {
        let mut stored = user.clone();
        stored.clear_domain_events();
        stored
    }

    /// Same rule as the SQLite UNIQUE index: an email belongs to at most one id.
    fn ensure_email_free(users: &HashMap<UserId, User>, user: &User) -> Result<(), DomainError> {
        let taken = users
            .values()
            .any(|other| other.id() != user.id() && other.email() == user.email());
        if taken {
            return Err(DomainError::EmailTaken(user.email().to_string()));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl UserRepository for InMemoryUserRepo {
    async fn get_user_by_id(&self, user_id: &UserId) -> Result<Option<User>, DomainError> {
        Ok(self.users.read().await.get(user_id).cloned())
    }

    async fn find_by_email(&self, email: &Email) -> Result<Option<User>, DomainError> {
        let users = self.users.read().await;
        Ok(users.values().find(|u| u.email() == email).cloned())
    }

    async fn create_user(&self, user: &User) -> Result<(), DomainError> {
        let mut users = self.users.write().await;
        if users.contains_key(&user.id()) {
            return Err(DomainError::Repo(format!(
                "user {} already exists",
                user.id()
            )));
        }
        Self::ensure_email_free(&users, user)?;
        users.insert(user.id(), Self::snapshot(user));
        Ok(())
    }

    async fn update_user(&self, user: &User) -> Result<bool, DomainError> {
        let mut users = self.users.write().await;
        if !users.contains_key(&user.id()) {
            return Ok(false);
        }
        Self::ensure_email_free(&users, user)?;
        users.insert(user.id(), Self::snapshot(user));
        Ok(true)
    }

    async fn delete_user(&self, user_id: &UserId) -> Result<bool, DomainError> {
        Ok(self.users.write().await.remove(user_id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::UserProperties;

    fn user(email: &str) -> User {
        User::create(UserProperties {
            name: "John Doe".into(),
            age: 25,
            email: email.into(),
        })
        .unwrap()
    }

    #[tokio::test]
    async fn crud_cycle() {
        let repo = InMemoryUserRepo::new();
        let mut u = user("john@example.com");

        repo.create_user(&u).await.unwrap();
        let stored = repo.get_user_by_id(&u.id()).await.unwrap().unwrap();
        assert!(stored.domain_events().is_empty());

        u.rename("Johnny").unwrap();
        assert!(repo.update_user(&u).await.unwrap());
        let stored = repo.get_user_by_id(&u.id()).await.unwrap().unwrap();
        assert_eq!(stored.name().value(), "Johnny");

        assert!(repo.delete_user(&u.id()).await.unwrap());
        assert!(!repo.delete_user(&u.id()).await.unwrap());
        assert!(repo.is_empty().await);
    }

    #[tokio::test]
    async fn update_of_missing_user_reports_false() {
        let repo = InMemoryUserRepo::new();
        assert!(!repo.update_user(&user("x@example.com")).await.unwrap());
        assert!(repo.is_empty().await);
    }

    #[tokio::test]
    async fn find_by_email_matches_exactly() {
        let repo = InMemoryUserRepo::new();
        let u = user("john@example.com");
        repo.create_user(&u).await.unwrap();

        let hit = repo
            .find_by_email(&Email::new("john@example.com").unwrap())
            .await
            .unwrap();
        assert_eq!(hit, Some(u));
        let miss = repo
            .find_by_email(&Email::new("jane@example.com").unwrap())
            .await
            .unwrap();
        assert!(miss.is_none());
    }

    #[tokio::test]
    async fn duplicate_id_is_rejected() {
        let repo = InMemoryUserRepo::new();
        let u = user("john@example.com");
        repo.create_user(&u).await.unwrap();
        assert!(matches!(
            repo.create_user(&u).await,
            Err(DomainError::Repo(_))
        ));
    }

    #[tokio::test]
    async fn email_owned_by_another_user_is_taken() {
        let repo = InMemoryUserRepo::new();
        repo.create_user(&user("same@example.com")).await.unwrap();

        let err = repo
            .create_user(&user("same@example.com"))
            .await
            .unwrap_err();
        assert_eq!(err, DomainError::EmailTaken("same@example.com".into()));
        assert_eq!(repo.len().await, 1);

        let mut other = user("other@example.com");
        repo.create_user(&other).await.unwrap();
        other.change_email("same@example.com").unwrap();
        let err = repo.update_user(&other).await.unwrap_err();
        assert_eq!(err, DomainError::EmailTaken("same@example.com".into()));
        let stored = repo.get_user_by_id(&other.id()).await.unwrap().unwrap();
        assert_eq!(stored.email().value(), "other@example.com");
    }

    #[tokio::test]
    async fn user_may_keep_its_own_email() {
        let repo = InMemoryUserRepo::new();
        let mut u = user("john@example.com");
        repo.create_user(&u).await.unwrap();

        u.rename("Johnny").unwrap();
        assert!(repo.update_user(&u).await.unwrap());
    }
}
