//! User route handlers.

use crate::adapters::http::error::json_body;
use crate::adapters::http::state::AppState;
use crate::domain::{DomainError, User, UserId};
use crate::usecases::{CreateUserCommand, DeleteUserCommand, GetUserQuery, UpdateUserCommand};
use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use serde::{Deserialize, Serialize};

/// Request body for POST /api/users. All fields required.
#[derive(Debug, Clone, Deserialize)]
pub struct UserWrite {
    pub name: String,
    pub age: i64,
    pub email: String,
}

/// Request body for PATCH /api/users/{user_id}. Omitted fields are left unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserPatch {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub age: Option<i64>,
    #[serde(default)]
    pub email: Option<String>,
}

/// Response body: a stored user with its generated id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRead {
    pub user_id: String,
    pub name: String,
    pub age: u8,
    pub email: String,
}

impl From<&User> for UserRead {
    fn from(user: &User) -> Self {
        Self {
            user_id: user.id().to_string(),
            name: user.name().value().to_string(),
            age: user.age().value(),
            email: user.email().value().to_string(),
        }
    }
}

/// POST /api/users
pub async fn create_user(
    State(state): State<AppState>,
    payload: Result<Json<UserWrite>, JsonRejection>,
) -> Result<(StatusCode, Json<UserRead>), DomainError> {
    let data = json_body(payload)?;
    let user = state
        .create_user
        .execute(CreateUserCommand {
            name: data.name,
            age: data.age,
            email: data.email,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(UserRead::from(&user))))
}

/// GET /api/users/{user_id}
pub async fn get_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<UserRead>, DomainError> {
    let user_id: UserId = user_id.parse()?;
    let user = state.get_user.execute(GetUserQuery { user_id }).await?;
    Ok(Json(UserRead::from(&user)))
}

/// PATCH /api/users/{user_id}
pub async fn update_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    payload: Result<Json<UserPatch>, JsonRejection>,
) -> Result<Json<UserRead>, DomainError> {
    let user_id: UserId = user_id.parse()?;
    let patch = json_body(payload)?;
    let user = state
        .update_user
        .execute(UpdateUserCommand {
            user_id,
            name: patch.name,
            age: patch.age,
            email: patch.email,
        })
        .await?;
    Ok(Json(UserRead::from(&user)))
}

/// DELETE /api/users/{user_id}
pub async fn delete_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<StatusCode, DomainError> {
    let user_id: UserId = user_id.parse()?;
    state
        .delete_user
        .execute(DeleteUserCommand { user_id })
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
