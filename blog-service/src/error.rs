use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, AppError>;

/// Service error taxonomy. Database and internal failures expose the
/// underlying error text in `details`; client errors carry only the
/// message.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("{0}")]
    Authentication(String),

    #[error("{0}")]
    NotFound(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Database(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Authentication(_) => StatusCode::UNAUTHORIZED,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let (error, message, details) = match self {
            AppError::Database(e) => (
                "database_error",
                "Internal Server Error".to_string(),
                Some(e.to_string()),
            ),
            AppError::Validation(msg) => ("validation_error", msg.clone(), None),
            AppError::Authentication(msg) => ("authentication_error", msg.clone(), None),
            AppError::NotFound(msg) => ("not_found", msg.clone(), None),
            AppError::Internal(msg) => (
                "internal_error",
                "Internal Server Error".to_string(),
                Some(msg.clone()),
            ),
        };

        tracing::error!(status = %self.status_code(), error, "{}", self);

        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: error.to_string(),
            message,
            details,
        })
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        AppError::Validation(errors.to_string())
    }
}
