use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use tracing::error;

use super::validation::FieldViolation;
use crate::store::StoreError;

/// Everything a handler can fail with. Each variant maps to exactly one
/// response at the boundary; nothing propagates uncaught.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("{message}")]
    Validation {
        message: &'static str,
        violations: Vec<FieldViolation>,
    },
    #[error("User already exists")]
    DuplicateUser,
    #[error("User not found")]
    UserNotFound,
    #[error("Invalid password, try again")]
    InvalidCredentials,
    #[error("Something went wrong")]
    Internal(#[from] anyhow::Error),
}

impl From<StoreError> for AuthError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::DuplicateEmail => AuthError::DuplicateUser,
            StoreError::Backend(source) => AuthError::Internal(source),
        }
    }
}

/// Error body on the wire: `errors` carries the field-level list for validation
/// failures and is omitted otherwise.
#[derive(Debug, Serialize)]
struct ErrorBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    errors: Option<Vec<FieldViolation>>,
    message: String,
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let status = match &self {
            AuthError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::BAD_REQUEST,
        };
        let message = self.to_string();
        let errors = match self {
            AuthError::Validation { violations, .. } => Some(violations),
            AuthError::Internal(source) => {
                // The source chain stays server-side; the client sees only the
                // generic message.
                error!(error = %source, "request failed");
                None
            }
            _ => None,
        };
        (status, Json(ErrorBody { errors, message })).into_response()
    }
}
