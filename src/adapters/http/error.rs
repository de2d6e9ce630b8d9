//! Maps domain errors onto HTTP responses.

use crate::domain::DomainError;
use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use tracing::error;

/// JSON error body: `{"status_code": 404, "detail": "..."}`.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub status_code: u16,
    pub detail: String,
}

pub fn status_for(err: &DomainError) -> StatusCode {
    match err {
        DomainError::Validation(_) => StatusCode::BAD_REQUEST,
        DomainError::UserNotFound(_) => StatusCode::NOT_FOUND,
        DomainError::EmailTaken(_) => StatusCode::CONFLICT,
        DomainError::Repo(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Unwrap a JSON request body. Undecodable bodies become a validation error
/// so they get the same 400 + `ErrorBody` as any other bad input.
pub fn json_body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, DomainError> {
    payload
        .map(|Json(value)| value)
        .map_err(|rejection| DomainError::validation(rejection.body_text()))
}

impl IntoResponse for DomainError {
    fn into_response(self) -> Response {
        let status = status_for(&self);
        let detail = match &self {
            DomainError::Repo(msg) => {
                error!(error = %msg, "repository failure");
                "Internal server error".to_string()
            }
            other => other.to_string(),
        };
        let body = ErrorBody {
            status_code: status.as_u16(),
            detail,
        };
        (status, Json(body)).into_response()
    }
}
