//! API error types and JSON error response formatting.
//!
//! Every failure leaves the server as `{ "error": <code>, "message": <text> }`.
//! Messages are fixed, user-facing strings; provider bodies and transport
//! errors are logged by the handlers and never placed in the response.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

/// JSON error response body.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Machine-readable code (`validation_error`, `configuration_error`, ...).
    pub error: String,
    /// Human-readable message for the chat UI.
    pub message: String,
}

#[derive(Debug)]
pub enum ApiError {
    /// 400 — missing or unusable request field.
    Validation(&'static str),
    /// 500 — provider credential absent.
    Configuration(&'static str),
    /// 500 — external provider failed or returned non-success.
    Provider(&'static str),
    /// 500 — anything else.
    Internal(&'static str),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Configuration(_) | ApiError::Provider(_) | ApiError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            ApiError::Validation(_) => "validation_error",
            ApiError::Configuration(_) => "configuration_error",
            ApiError::Provider(_) => "provider_error",
            ApiError::Internal(_) => "internal_error",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            ApiError::Validation(m)
            | ApiError::Configuration(m)
            | ApiError::Provider(m)
            | ApiError::Internal(m) => m,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.code().to_string(),
            message: self.message().to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}

/// Bodies that are not JSON, or not the expected shape, are validation failures.
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!("rejected request body: {rejection}");
        ApiError::Validation("The request body could not be read. Please try again.")
    }
}
