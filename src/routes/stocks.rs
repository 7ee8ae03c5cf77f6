use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::Json;

use super::AppState;
use crate::models::{PriceSeries, StockParams};
use crate::services::stock_service;
use crate::utils::ServiceError;

pub async fn stocks(
    State(state): State<AppState>,
    params: Result<Query<StockParams>, QueryRejection>,
) -> Result<Json<PriceSeries>, ServiceError> {
    let Query(params) = params.map_err(|e| ServiceError::BadRequest(e.body_text()))?;
    tracing::info!(
        "Fetching stock data - Ticker: {:?}, StartDate: {:?}, Interval: {:?}",
        params.ticker,
        params.start_date,
        params.interval
    );

    let query = stock_service::parse_stock_params(&params)?;
    let series = stock_service::get_price_history(state.provider.as_ref(), &query).await?;
    Ok(Json(series))
}
