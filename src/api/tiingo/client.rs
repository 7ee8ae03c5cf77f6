use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client as HttpClient, Response, StatusCode, Url};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, warn};

use super::models::{ApiError, ErrorResponse, SeriesQuery};
use crate::api::QuoteProvider;
use crate::models::{PriceSeries, QuoteSnapshot};

/// Tiingo REST client for end-of-day prices and IEX quotes
pub struct TiingoClient {
    http_client: HttpClient,
    api_key: Option<String>,
    base_url: String,
}

impl TiingoClient {
    pub const DEFAULT_BASE_URL: &'static str = "https://api.tiingo.com";

    /// Create a new Tiingo client. Every request, including the body read, is
    /// bounded by `timeout`.
    pub fn new(
        api_key: Option<String>,
        base_url: String,
        timeout: Duration,
    ) -> Result<Self, ApiError> {
        let http_client = HttpClient::builder()
            .timeout(timeout)
            .connect_timeout(timeout)
            .build()
            .map_err(|e| ApiError::RequestError(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http_client,
            api_key,
            base_url,
        })
    }

    /// Create default headers with authorization
    fn create_headers(&self) -> Result<HeaderMap, ApiError> {
        let api_key = self.api_key.as_deref().ok_or(ApiError::MissingApiKey)?;

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let auth_value = HeaderValue::from_str(&format!("Token {}", api_key))
            .map_err(|e| ApiError::RequestError(format!("Failed to create auth header: {}", e)))?;
        headers.insert(AUTHORIZATION, auth_value);

        Ok(headers)
    }

    /// Join path segments onto the base URL, percent-encoding each one
    fn endpoint(&self, segments: &[&str]) -> Result<Url, ApiError> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| ApiError::RequestError(format!("Invalid base URL '{}': {}", self.base_url, e)))?;
        {
            let mut path = url
                .path_segments_mut()
                .map_err(|_| ApiError::RequestError(format!("Invalid base URL '{}'", self.base_url)))?;
            path.pop_if_empty().extend(segments);
        }
        Ok(url)
    }

    /// URL for GET /tiingo/daily/{ticker}/prices
    pub fn series_url(&self, query: &SeriesQuery) -> Result<Url, ApiError> {
        let mut url = self.endpoint(&["tiingo", "daily", &query.ticker, "prices"])?;
        if let Some(start_date) = &query.start_date {
            url.query_pairs_mut().append_pair("startDate", start_date);
        }
        if let Some(resample_freq) = &query.resample_freq {
            url.query_pairs_mut().append_pair("resampleFreq", resample_freq);
        }
        Ok(url)
    }

    /// URL for GET /iex/{ticker}
    pub fn quote_url(&self, ticker: &str) -> Result<Url, ApiError> {
        self.endpoint(&["iex", ticker])
    }

    /// Map a non-success status and its body to an error
    fn classify_error(status: StatusCode, body_text: &str) -> ApiError {
        let status_code = status.as_u16();
        let message = serde_json::from_str::<ErrorResponse>(body_text)
            .ok()
            .and_then(|e| e.detail)
            .unwrap_or_else(|| body_text.to_string());

        match status_code {
            401 | 403 => ApiError::Unauthorized(message),
            404 => ApiError::NotFound(message),
            500..=599 => {
                warn!("Tiingo server error {}: {}", status_code, message);
                ApiError::ServerError(status_code, message)
            }
            _ => ApiError::HttpError(status_code, message),
        }
    }

    /// Send an authorized GET and fail on any non-2xx status
    async fn send(&self, url: Url) -> Result<Response, ApiError> {
        let headers = self.create_headers()?;
        debug!("GET {}", url);

        let response = self
            .http_client
            .get(url)
            .headers(headers)
            .send()
            .await
            .map_err(ApiError::from_transport)?;

        let status = response.status();
        if !status.is_success() {
            let body_text = response.text().await.unwrap_or_default();
            return Err(Self::classify_error(status, &body_text));
        }

        Ok(response)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, ApiError> {
        self.send(url)
            .await?
            .json::<T>()
            .await
            .map_err(ApiError::from_transport)
    }
}

#[async_trait]
impl QuoteProvider for TiingoClient {
    async fn ping(&self, ticker: &str) -> Result<(), ApiError> {
        let url = self.series_url(&SeriesQuery::latest(ticker))?;
        self.send(url).await?;
        Ok(())
    }

    async fn fetch_daily_series(&self, query: &SeriesQuery) -> Result<PriceSeries, ApiError> {
        let url = self.series_url(query)?;
        self.get_json::<PriceSeries>(url).await
    }

    async fn fetch_latest_quote(&self, ticker: &str) -> Result<Option<QuoteSnapshot>, ApiError> {
        let url = self.quote_url(ticker)?;
        let quotes = self.get_json::<Vec<QuoteSnapshot>>(url).await?;
        Ok(quotes.into_iter().next())
    }
}
