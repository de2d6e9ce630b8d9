//! SQLite-backed repository via libsql. Implements UserRepository.
//!
//! Single `users` table keyed by the UUID string, with a UNIQUE index on email.
//! Database file: <data_dir>/accounts.db

use crate::domain::{DomainError, Email, User, UserId, UserProperties};
use crate::ports::UserRepository;
use chrono::Utc;
use libsql::{Connection, Database, Row, params};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

const USERS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS users (
    id TEXT PRIMARY KEY,
    name TEXT NOT NULL,
    age INTEGER NOT NULL,
    email TEXT NOT NULL,
    created_at INTEGER NOT NULL,
    updated_at INTEGER NOT NULL
)"#;
const USERS_EMAIL_INDEX: &str =
    "CREATE UNIQUE INDEX IF NOT EXISTS idx_users_email ON users (email)";

const SELECT_COLUMNS: &str = "SELECT id, name, age, email FROM users";

fn repo_err(e: impl std::fmt::Display) -> DomainError {
    DomainError::Repo(e.to_string())
}

/// SQLite user repository. One database file in the given base directory.
pub struct SqliteUserRepo {
    db: Database,
    db_path: PathBuf,
}

impl SqliteUserRepo {
    /// Connect to (or create) the database and ensure the schema exists.
    /// Call this once at startup; the returned repo is safe to share via Arc.
    ///
    /// WAL mode with synchronous=NORMAL: concurrent readers, one writer.
    pub async fn connect(base_dir: impl AsRef<Path>) -> Result<Self, DomainError> {
        let base = base_dir.as_ref();
        std::fs::create_dir_all(base).map_err(repo_err)?;
        let db_path = base.join("accounts.db");
        let path_str = db_path.to_string_lossy();
        let db = libsql::Builder::new_local(path_str.as_ref())
            .build()
            .await
            .map_err(repo_err)?;
        let conn = db.connect().map_err(repo_err)?;

        // PRAGMA returns a row; use query and drain it (execute fails when rows are returned).
        for pragma in ["PRAGMA journal_mode=WAL", "PRAGMA synchronous=NORMAL"] {
            let mut rows = conn
                .query(pragma, ())
                .await
                .map_err(|e| DomainError::Repo(format!("{} failed: {}", pragma, e)))?;
            while rows.next().await.map_err(repo_err)?.is_some() {}
        }

        conn.execute(USERS_TABLE, ()).await.map_err(repo_err)?;
        conn.execute(USERS_EMAIL_INDEX, ()).await.map_err(repo_err)?;

        info!(path = %db_path.display(), "SQLite connected with WAL mode");

        Ok(Self { db, db_path })
    }

    pub fn db_path(&self) -> &Path {
        &self.db_path
    }

    fn conn(&self) -> Result<Connection, DomainError> {
        self.db.connect().map_err(repo_err)
    }

    fn row_to_user(row: &Row) -> Result<User, DomainError> {
        let id: String = row.get(0).map_err(repo_err)?;
        let name: String = row.get(1).map_err(repo_err)?;
        let age: i64 = row.get(2).map_err(repo_err)?;
        let email: String = row.get(3).map_err(repo_err)?;
        let user_id: UserId = id
            .parse()
            .map_err(|e| DomainError::Repo(format!("corrupt user row: {}", e)))?;
        User::restore(user_id, UserProperties { name, age, email })
            .map_err(|e| DomainError::Repo(format!("corrupt user row {}: {}", id, e)))
    }

    async fn query_one(&self, sql: &str, key: String) -> Result<Option<User>, DomainError> {
        let conn = self.conn()?;
        let mut rows = conn.query(sql, params![key]).await.map_err(repo_err)?;
        match rows.next().await.map_err(repo_err)? {
            Some(row) => Self::row_to_user(&row).map(Some),
            None => Ok(None),
        }
    }
}

/// Maps a UNIQUE violation on email to the domain conflict; anything else is a storage error.
fn map_write_err(e: libsql::Error, email: &Email) -> DomainError {
    let msg = e.to_string();
    if msg.contains("UNIQUE constraint failed: users.email") {
        DomainError::EmailTaken(email.to_string())
    } else {
        DomainError::Repo(msg)
    }
}

#[async_trait::async_trait]
impl UserRepository for SqliteUserRepo {
    async fn get_user_by_id(&self, user_id: &UserId) -> Result<Option<User>, DomainError> {
        let sql = format!("{} WHERE id = ?1", SELECT_COLUMNS);
        self.query_one(&sql, user_id.to_string()).await
    }

    async fn find_by_email(&self, email: &Email) -> Result<Option<User>, DomainError> {
        let sql = format!("{} WHERE email = ?1", SELECT_COLUMNS);
        self.query_one(&sql, email.to_string()).await
    }

    async fn create_user(&self, user: &User) -> Result<(), DomainError> {
        let now = Utc::now().timestamp();
        let conn = self.conn()?;
        conn.execute(
            r#"
            INSERT INTO users (id, name, age, email, created_at, updated_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?5)
            "#,
            params![
                user.id().to_string(),
                user.name().value(),
                i64::from(user.age().value()),
                user.email().value(),
                now
            ],
        )
        .await
        .map_err(|e| map_write_err(e, user.email()))?;
        debug!(user_id = %user.id(), "user row inserted");
        Ok(())
    }

    async fn update_user(&self, user: &User) -> Result<bool, DomainError> {
        let now = Utc::now().timestamp();
        let conn = self.conn()?;
        let changed = conn
            .execute(
                r#"
                UPDATE users SET name = ?2, age = ?3, email = ?4, updated_at = ?5
                WHERE id = ?1
                "#,
                params![
                    user.id().to_string(),
                    user.name().value(),
                    i64::from(user.age().value()),
                    user.email().value(),
                    now
                ],
            )
            .await
            .map_err(|e| map_write_err(e, user.email()))?;
        Ok(changed > 0)
    }

    async fn delete_user(&self, user_id: &UserId) -> Result<bool, DomainError> {
        let conn = self.conn()?;
        let changed = conn
            .execute("DELETE FROM users WHERE id = ?1", params![user_id.to_string()])
            .await
            .map_err(repo_err)?;
        Ok(changed > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(name: &str, email: &str) -> User {
        User::create(UserProperties {
            name: name.into(),
            age: 25,
            email: email.into(),
        })
        .unwrap()
    }

    #[tokio::test]
    async fn round_trips_users_through_disk() {
        let dir = tempfile::tempdir().unwrap();
        let u = user("John Doe", "john@example.com");
        {
            let repo = SqliteUserRepo::connect(dir.path()).await.unwrap();
            repo.create_user(&u).await.unwrap();
        }

        let repo = SqliteUserRepo::connect(dir.path()).await.unwrap();
        let stored = repo.get_user_by_id(&u.id()).await.unwrap().unwrap();
        assert_eq!(stored, u);
        assert_eq!(stored.name().value(), "John Doe");
        assert_eq!(stored.age().value(), 25);
        assert!(stored.domain_events().is_empty());
        assert!(repo.db_path().ends_with("accounts.db"));
    }

    #[tokio::test]
    async fn update_and_delete_report_presence() {
        let dir = tempfile::tempdir().unwrap();
        let repo = SqliteUserRepo::connect(dir.path()).await.unwrap();
        let mut u = user("John Doe", "john@example.com");

        assert!(!repo.update_user(&u).await.unwrap());
        repo.create_user(&u).await.unwrap();

        u.change_email("johnny@example.com").unwrap();
        assert!(repo.update_user(&u).await.unwrap());
        let by_email = repo
            .find_by_email(&Email::new("johnny@example.com").unwrap())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(by_email.id(), u.id());

        assert!(repo.delete_user(&u.id()).await.unwrap());
        assert!(!repo.delete_user(&u.id()).await.unwrap());
        assert!(repo.get_user_by_id(&u.id()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn unique_email_index_maps_to_email_taken() {
        let dir = tempfile::tempdir().unwrap();
        let repo = SqliteUserRepo::connect(dir.path()).await.unwrap();
        repo.create_user(&user("John Doe", "same@example.com"))
            .await
            .unwrap();

        let err = repo
            .create_user(&user("Jane Doe", "same@example.com"))
            .await
            .unwrap_err();
        assert_eq!(err, DomainError::EmailTaken("same@example.com".into()));
    }

    #[tokio::test]
    async fn email_change_onto_taken_address_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let repo = SqliteUserRepo::connect(dir.path()).await.unwrap();
        repo.create_user(&user("John Doe", "john@example.com"))
            .await
            .unwrap();
        let mut jane = user("Jane Doe", "jane@example.com");
        repo.create_user(&jane).await.unwrap();

        jane.change_email("john@example.com").unwrap();
        let err = repo.update_user(&jane).await.unwrap_err();
        assert_eq!(err, DomainError::EmailTaken("john@example.com".into()));

        let stored = repo.get_user_by_id(&jane.id()).await.unwrap().unwrap();
        assert_eq!(stored.email().value(), "jane@example.com");
    }
}
