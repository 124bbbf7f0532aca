//! HTTP error type and the mapping from service errors to status codes.

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};

use crate::domain::errors::ShortenerError;

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

#[derive(Debug, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

#[derive(Debug)]
pub enum AppError {
    Validation { message: String, details: Value },
    NotFound { message: String, details: Value },
    Unavailable { message: String, details: Value },
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }
    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }
    pub fn unavailable(message: impl Into<String>, details: Value) -> Self {
        Self::Unavailable {
            message: message.into(),
            details,
        }
    }
    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Unavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn to_error_info(&self) -> ErrorInfo {
        let (code, message, details) = match self {
            AppError::Validation { message, details } => ("validation_error", message, details),
            AppError::NotFound { message, details } => ("not_found", message, details),
            AppError::Unavailable { message, details } => ("unavailable", message, details),
            AppError::Internal { message, details } => ("internal_error", message, details),
        };

        ErrorInfo {
            code,
            message: message.clone(),
            details: details.clone(),
        }
    }
}

impl From<ShortenerError> for AppError {
    fn from(err: ShortenerError) -> Self {
        match err {
            ShortenerError::BadUrl(reason) => {
                AppError::bad_request("bad origin link URL", json!({ "reason": reason }))
            }
            ShortenerError::BadShortLink(reason) => {
                AppError::bad_request("bad short link", json!({ "reason": reason }))
            }
            ShortenerError::MaxRetriesReachedOnCreateLink => AppError::bad_request(
                "max retries reached on create link",
                json!({ "retryable": true }),
            ),
            ShortenerError::NotFound => AppError::not_found("link not found", json!({})),
            ShortenerError::LinkDeleted => AppError::not_found("link is deleted", json!({})),
            ShortenerError::DeadlineExceeded => {
                tracing::warn!("Request deadline exceeded");
                AppError::unavailable("request deadline exceeded", json!({}))
            }
            err @ ShortenerError::Storage { .. } => {
                tracing::error!(error = ?anyhow::Error::new(err), "Storage failure");
                AppError::internal("internal server error", json!({}))
            }
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::bad_request(
            "invalid request body",
            json!({ "reason": rejection.body_text() }),
        )
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorBody {
            error: self.to_error_info(),
        };

        (status, Json(body)).into_response()
    }
}
