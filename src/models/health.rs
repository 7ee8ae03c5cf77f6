//! Health check models

use serde::Serialize;

/// Body returned by `/health` when Tiingo is reachable
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HealthResponse {
    pub health: bool,
}
