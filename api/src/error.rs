//! Centralized error responder.
//!
//! Every handler and the authentication gate return [`AppError`]; its
//! `IntoResponse` impl is the only place a failure becomes an HTTP response.

use crate::response::{ApiResponse, Empty};
use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use services::ServiceError;
use thiserror::Error;

pub const INTERNAL_SERVER_ERROR: &str = "Internal Server Error";

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Authentication Failed")]
    Unauthorized,

    #[error("{0}")]
    BadRequest(String),

    #[error("Forbidden")]
    Forbidden,

    #[error("{0}")]
    NotFound(String),

    /// The message is shown to the client as-is; put causes in the log, not here.
    #[error("{0}")]
    Internal(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Unauthorized => StatusCode::UNAUTHORIZED,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Forbidden => StatusCode::FORBIDDEN,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        (status, Json(ApiResponse::<Empty>::error(self.to_string()))).into_response()
    }
}

impl From<ServiceError> for AppError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Validation(msg) => AppError::BadRequest(msg),
            ServiceError::DuplicateEmail(_) => AppError::BadRequest(err.to_string()),
            ServiceError::AuthenticationFailed => AppError::Unauthorized,
            ServiceError::NotFound(msg) => AppError::NotFound(msg),
            ServiceError::Forbidden => AppError::Forbidden,
            ServiceError::NotCreated(msg) => {
                tracing::error!(%msg, "Store returned no record");
                AppError::Internal(msg)
            }
            ServiceError::Hashing(_) | ServiceError::Database(_) => {
                tracing::error!(error = %err, "Request failed");
                AppError::Internal(INTERNAL_SERVER_ERROR.into())
            }
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}
