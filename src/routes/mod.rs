//! HTTP surface
//!
//! `GET /health`, `GET /stocks` and `GET /check-alert`. Every handler is a
//! single pass over one upstream call; failures become `{"detail": ...}`.

pub mod alert;
pub mod health;
pub mod stocks;

use std::sync::Arc;
use std::time::Duration;

use axum::routing::get;
use axum::Router;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tower_http::LatencyUnit;
use tracing::Level;

use crate::api::QuoteProvider;

/// Shared, read-only handler state
#[derive(Clone)]
pub struct AppState {
    pub provider: Arc<dyn QuoteProvider>,
}

impl AppState {
    pub fn new(provider: Arc<dyn QuoteProvider>) -> Self {
        Self { provider }
    }
}

/// Build the router with request logging. Requests still running after
/// `request_timeout` are answered with 408.
pub fn router(state: AppState, request_timeout: Duration) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/stocks", get(stocks::stocks))
        .route("/check-alert", get(alert::check_alert))
        .layer(TimeoutLayer::new(request_timeout))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .latency_unit(LatencyUnit::Millis),
                ),
        )
        .with_state(state)
}
