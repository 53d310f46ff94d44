//! Error handling - maps application failures to the JSON wire shapes.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use blogful_shared::ErrorResponse;
use std::fmt;

use crate::config::{self, Environment};

/// Application-level error type that converts to HTTP responses.
#[derive(Debug)]
pub enum AppError {
    ArticleNotFound,
    MissingField(&'static str),
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::ArticleNotFound => write!(f, "Article doesn't exist"),
            AppError::MissingField(field) => write!(f, "Missing '{}' in request body", field),
            AppError::Internal(detail) => write!(f, "Internal error: {}", detail),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ArticleNotFound => StatusCode::NOT_FOUND,
            AppError::MissingField(_) => StatusCode::BAD_REQUEST,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = match self {
            AppError::ArticleNotFound => ErrorResponse::message("Article doesn't exist"),
            AppError::MissingField(field) => {
                ErrorResponse::message(format!("Missing '{}' in request body", field))
            }
            AppError::Internal(detail) => {
                // Log internal errors; the raw detail leaves the process
                // only outside production.
                tracing::error!("Internal error: {}", detail);
                if config::environment() == Environment::Production {
                    ErrorResponse::message("server error")
                } else {
                    ErrorResponse::message(detail.clone())
                }
            }
        };

        HttpResponse::build(self.status_code()).json(body)
    }
}

// Conversion from repository errors
impl From<blogful_core::error::RepoError> for AppError {
    fn from(err: blogful_core::error::RepoError) -> Self {
        match err {
            blogful_core::error::RepoError::Connection(msg)
            | blogful_core::error::RepoError::Query(msg) => AppError::Internal(msg),
        }
    }
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;
