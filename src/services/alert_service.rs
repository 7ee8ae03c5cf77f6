use tracing::{info, warn};

use crate::api::{ApiError, QuoteProvider};
use crate::models::{AlertDecision, AlertParams, AlertRequest, AlertResponse, Direction};
use crate::utils::{non_empty, require_params, ServiceError};

/// Validate `/check-alert` parameters
pub fn parse_alert_params(params: &AlertParams) -> Result<AlertRequest, ServiceError> {
    let ticker = non_empty(&params.ticker);
    let price = non_empty(&params.price);
    let direction = non_empty(&params.direction);

    require_params(&[
        ("ticker", ticker),
        ("price", price),
        ("direction", direction),
    ])?;

    let (Some(ticker), Some(price), Some(direction)) = (ticker, price, direction) else {
        return Err(ServiceError::BadRequest("Missing required parameters".to_string()));
    };

    // NaN and infinities parse as f64 but can never be a target
    let target = price
        .parse::<f64>()
        .ok()
        .filter(|p| p.is_finite())
        .ok_or_else(|| {
            warn!("Invalid price format: {}", price);
            ServiceError::BadRequest("Invalid price format".to_string())
        })?;

    let direction = direction
        .parse::<Direction>()
        .map_err(ServiceError::BadRequest)?;

    Ok(AlertRequest {
        ticker: ticker.to_string(),
        target,
        direction,
    })
}

/// Decide whether an alert at `target` would already fire at `current`
pub fn evaluate_alert(current: f64, target: f64, direction: Direction) -> AlertDecision {
    let triggered = match direction {
        Direction::Above => current > target,
        Direction::Below => current < target,
    };

    if triggered {
        AlertDecision::AlreadyTriggered {
            current,
            target,
            direction,
        }
    } else {
        AlertDecision::Valid
    }
}

/// Check an alert against the latest quote
pub async fn check_alert(
    provider: &dyn QuoteProvider,
    request: &AlertRequest,
) -> Result<AlertResponse, ServiceError> {
    let not_found =
        || ServiceError::NotFound(format!("No price data found for ticker: {}", request.ticker));

    let quote = match provider.fetch_latest_quote(&request.ticker).await {
        Ok(Some(quote)) => quote,
        Ok(None) => {
            warn!("No price data found for ticker: {}", request.ticker);
            return Err(not_found());
        }
        Err(ApiError::NotFound(msg)) => {
            warn!("Tiingo has no ticker {}: {}", request.ticker, msg);
            return Err(not_found());
        }
        Err(e) => return Err(e.into()),
    };

    let Some(current) = quote.current_price() else {
        warn!("Quote for {} carries neither a live price nor a previous close", request.ticker);
        return Err(not_found());
    };
    if !quote.is_live() {
        warn!(
            "Live price unavailable for {}, using previous close",
            request.ticker
        );
    }

    match evaluate_alert(current, request.target, request.direction) {
        AlertDecision::Valid => {
            info!(
                "Valid alert - Ticker: {}, Current: ${:.2}, Target: ${:.2} {}",
                request.ticker, current, request.target, request.direction
            );
            Ok(AlertResponse {
                valid: true,
                message: AlertDecision::Valid.message(),
            })
        }
        triggered => {
            let message = triggered.message();
            warn!("Invalid alert - {}", message);
            Err(ServiceError::BadRequest(message))
        }
    }
}
