use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::domain::error::DomainError;

/// Wire-level error, one variant per HTTP failure class.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Conflict(String),
    #[error("{0}")]
    Internal(String),
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    status: &'a str,
    error: &'a str,
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match &err {
            DomainError::UserNotFound { .. } => ApiError::NotFound(err.to_string()),
            DomainError::EmailAlreadyExists { .. } => ApiError::Conflict(err.to_string()),
            DomainError::MissingFields { .. } | DomainError::EmptyPatch => {
                ApiError::BadRequest(err.to_string())
            }
            // Store faults carry internal detail; only the generic
            // message crosses the wire.
            DomainError::Connection { message } => {
                tracing::error!(error = %message, "database connection failed");
                ApiError::Internal("Database connection failed".to_string())
            }
            DomainError::Database { message } => {
                tracing::error!(error = %message, "database error");
                ApiError::Internal("Database error".to_string())
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        use ApiError::*;

        let (status, message) = match &self {
            BadRequest(m) => (StatusCode::BAD_REQUEST, m.as_str()),
            NotFound(m) => (StatusCode::NOT_FOUND, m.as_str()),
            Conflict(m) => (StatusCode::CONFLICT, m.as_str()),
            Internal(m) => (StatusCode::INTERNAL_SERVER_ERROR, m.as_str()),
        };

        match &self {
            Internal(m) => tracing::error!(error = %m, status = status.as_u16(), "request failed"),
            other => tracing::warn!(error = %other, status = status.as_u16(), "request failed"),
        }

        let body = ErrorBody {
            status: "error",
            error: message,
        };

        (status, Json(&body)).into_response()
    }
}
