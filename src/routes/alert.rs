use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::Json;

use super::AppState;
use crate::models::{AlertParams, AlertResponse};
use crate::services::alert_service;
use crate::utils::ServiceError;

pub async fn check_alert(
    State(state): State<AppState>,
    params: Result<Query<AlertParams>, QueryRejection>,
) -> Result<Json<AlertResponse>, ServiceError> {
    let Query(params) = params.map_err(|e| ServiceError::BadRequest(e.body_text()))?;
    tracing::info!(
        "Checking alert - Ticker: {:?}, Price: {:?}, Direction: {:?}",
        params.ticker,
        params.price,
        params.direction
    );

    let request = alert_service::parse_alert_params(&params)?;
    let response = alert_service::check_alert(state.provider.as_ref(), &request).await?;
    Ok(Json(response))
}
