use serde::Deserialize;
use thiserror::Error;

/// Parameters for GET /tiingo/daily/{ticker}/prices
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesQuery {
    pub ticker: String,
    pub start_date: Option<String>,
    pub resample_freq: Option<String>,
}

impl SeriesQuery {
    /// Bare query for a ticker, upstream picks the default window
    pub fn latest(ticker: impl Into<String>) -> Self {
        Self {
            ticker: ticker.into(),
            start_date: None,
            resample_freq: None,
        }
    }

    pub fn history(
        ticker: impl Into<String>,
        start_date: impl Into<String>,
        resample_freq: impl Into<String>,
    ) -> Self {
        Self {
            ticker: ticker.into(),
            start_date: Some(start_date.into()),
            resample_freq: Some(resample_freq.into()),
        }
    }
}

/// Error body Tiingo sends with non-200 responses
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorResponse {
    pub detail: Option<String>,
}

/// Comprehensive error type for Tiingo API operations
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    /// No API key configured
    #[error("Missing API key")]
    MissingApiKey,
    /// 401/403
    #[error("Unauthorized: {0}")]
    Unauthorized(String),
    /// 404 Not Found
    #[error("Not Found: {0}")]
    NotFound(String),
    /// 5xx Server Error
    #[error("Server Error ({0}): {1}")]
    ServerError(u16, String),
    /// Other HTTP errors
    #[error("HTTP Error ({0}): {1}")]
    HttpError(u16, String),
    /// Request exceeded the configured timeout
    #[error("Timed out: {0}")]
    Timeout(String),
    /// Network/request error
    #[error("Request Error: {0}")]
    RequestError(String),
    /// Deserialization error
    #[error("Deserialization Error: {0}")]
    DeserializationError(String),
}

impl ApiError {
    /// Classify a transport-level failure from reqwest
    pub fn from_transport(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Timeout(err.to_string())
        } else if err.is_decode() {
            ApiError::DeserializationError(format!("Failed to parse response: {}", err))
        } else {
            ApiError::RequestError(format!("Request failed: {}", err))
        }
    }
}
