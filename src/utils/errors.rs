use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;
use tracing::{error, warn};

use crate::api::ApiError;

/// Errors surfaced to HTTP callers
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Missing or malformed input, or an alert that would fire immediately
    #[error("{0}")]
    BadRequest(String),
    /// Upstream returned no rows
    #[error("{0}")]
    NotFound(String),
    #[error("Missing API key.")]
    MissingApiKey,
    #[error("Network timeout.")]
    UpstreamTimeout,
    /// Tiingo unreachable or answered with something unusable
    #[error("{0}")]
    Upstream(String),
}

/// Uniform error body
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub detail: String,
}

impl ServiceError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ServiceError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ServiceError::NotFound(_) => StatusCode::NOT_FOUND,
            ServiceError::MissingApiKey => StatusCode::INTERNAL_SERVER_ERROR,
            ServiceError::UpstreamTimeout => StatusCode::GATEWAY_TIMEOUT,
            ServiceError::Upstream(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl From<ApiError> for ServiceError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::MissingApiKey => {
                error!("TIINGO_API_KEY is not configured");
                ServiceError::MissingApiKey
            }
            ApiError::Timeout(msg) => {
                warn!("Tiingo request timed out: {}", msg);
                ServiceError::UpstreamTimeout
            }
            ApiError::RequestError(msg) => {
                warn!("Tiingo request failed: {}", msg);
                ServiceError::Upstream("Network error.".to_string())
            }
            ApiError::DeserializationError(msg) => {
                warn!("Unexpected Tiingo payload: {}", msg);
                ServiceError::Upstream("Invalid response from Tiingo.".to_string())
            }
            other => {
                warn!("Tiingo returned an error: {}", other);
                ServiceError::Upstream("Error fetching from Tiingo.".to_string())
            }
        }
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            detail: self.to_string(),
        };
        (self.status_code(), Json(body)).into_response()
    }
}
