use axum::extract::State;
use axum::Json;

use super::AppState;
use crate::models::HealthResponse;
use crate::services::health_service;
use crate::utils::ServiceError;

pub async fn health(State(state): State<AppState>) -> Result<Json<HealthResponse>, ServiceError> {
    tracing::info!("Health check requested");
    let health = health_service::check_health(state.provider.as_ref()).await?;
    Ok(Json(health))
}
