//! Unified error handling for HTTP.
//!
//! Every variant fixes the status code of the response it becomes, so a
//! client error keeps its 400/404 and anything else is reported as 500.
//! Bodies are plain text holding only the message.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use domain::{DomainError, MSG_UNEXPECTED};
use thiserror::Error;

/// Application error types.
#[derive(Error, Debug)]
pub enum AppError {
    // Client errors
    #[error("{0}")]
    Validation(String),

    /// A unique field is already taken. Reported as a bad request.
    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    NotFound(String),

    // External service errors
    #[cfg(feature = "database")]
    #[error("{0}")]
    Database(#[from] sea_orm::DbErr),

    // Internal
    #[error("{0}")]
    Internal(String),
}

impl AppError {
    /// Get HTTP status code
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) | AppError::Conflict(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the message sent to the client, falling back to a generic one.
    pub fn user_message(&self) -> String {
        let message = self.to_string();
        if message.is_empty() {
            MSG_UNEXPECTED.to_string()
        } else {
            message
        }
    }

    /// Whether the client caused the error
    pub fn is_client_error(&self) -> bool {
        self.status().is_client_error()
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.user_message();

        if self.is_client_error() {
            tracing::warn!(status = status.as_u16(), "{}", message);
        } else {
            tracing::error!(status = status.as_u16(), error = ?self, "Request failed");
        }

        (status, message).into_response()
    }
}

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(msg) => AppError::Validation(msg),
            DomainError::NotFound(msg) => AppError::NotFound(msg),
            DomainError::Conflict(msg) => AppError::Conflict(msg),
        }
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Extension trait for Option -> AppError conversion
pub trait OptionExt<T> {
    fn ok_or_not_found(self, msg: &str) -> AppResult<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_not_found(self, msg: &str) -> AppResult<T> {
        self.ok_or_else(|| AppError::NotFound(msg.to_string()))
    }
}

/// Convenience constructors
impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        AppError::Conflict(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        AppError::NotFound(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}
