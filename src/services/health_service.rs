use tracing::debug;

use crate::api::QuoteProvider;
use crate::models::HealthResponse;
use crate::utils::ServiceError;

/// Always-listed symbol used to check Tiingo
pub const REFERENCE_TICKER: &str = "SPY";

/// Confirm the service is up and Tiingo answers 2xx to a lightweight request.
/// The body is not inspected.
pub async fn check_health(provider: &dyn QuoteProvider) -> Result<HealthResponse, ServiceError> {
    debug!("Pinging Tiingo with {}", REFERENCE_TICKER);
    provider.ping(REFERENCE_TICKER).await?;
    Ok(HealthResponse { health: true })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::testing::StubProvider;
    use crate::api::ApiError;

    #[tokio::test]
    async fn test_healthy_pings_reference_ticker() {
        let provider = StubProvider::new();
        let health = check_health(&provider).await.unwrap();
        assert!(health.health);

        assert_eq!(provider.ping_tickers.lock().unwrap().as_slice(), &["SPY".to_string()]);
        assert!(provider.series_queries.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_healthy_even_when_series_would_not_decode() {
        let provider = StubProvider::new()
            .with_series(Err(ApiError::DeserializationError("expected a sequence".into())));
        assert!(check_health(&provider).await.is_ok());
    }

    #[tokio::test]
    async fn test_upstream_failures() {
        let provider = StubProvider::new().with_ping(Err(ApiError::Timeout("slow".into())));
        assert!(matches!(
            check_health(&provider).await,
            Err(ServiceError::UpstreamTimeout)
        ));

        let provider = StubProvider::new().with_ping(Err(ApiError::Unauthorized("bad token".into())));
        assert!(matches!(check_health(&provider).await, Err(ServiceError::Upstream(_))));
    }
}
