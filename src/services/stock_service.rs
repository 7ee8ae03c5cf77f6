use tracing::{info, warn};

use crate::api::{ApiError, QuoteProvider, SeriesQuery};
use crate::models::{PriceSeries, StockParams};
use crate::utils::{non_empty, require_params, ServiceError};

/// Validate `/stocks` parameters into an upstream query
pub fn parse_stock_params(params: &StockParams) -> Result<SeriesQuery, ServiceError> {
    let ticker = non_empty(&params.ticker);
    let start_date = non_empty(&params.start_date);
    let interval = non_empty(&params.interval);

    require_params(&[
        ("ticker", ticker),
        ("startDate", start_date),
        ("interval", interval),
    ])?;

    match (ticker, start_date, interval) {
        (Some(t), Some(s), Some(i)) => Ok(SeriesQuery::history(t, s, i)),
        _ => Err(ServiceError::BadRequest("Missing required parameters".to_string())),
    }
}

/// Fetch a price series and relay it unchanged
pub async fn get_price_history(
    provider: &dyn QuoteProvider,
    query: &SeriesQuery,
) -> Result<PriceSeries, ServiceError> {
    let not_found = || ServiceError::NotFound(format!("No price data found for ticker: {}", query.ticker));

    let series = match provider.fetch_daily_series(query).await {
        Ok(series) => series,
        Err(ApiError::NotFound(msg)) => {
            warn!("Tiingo has no ticker {}: {}", query.ticker, msg);
            return Err(not_found());
        }
        Err(e) => return Err(e.into()),
    };

    if series.is_empty() {
        warn!("No price data found for ticker: {}", query.ticker);
        return Err(not_found());
    }

    info!(
        "Retrieved {} price points for ticker: {}",
        series.len(),
        query.ticker
    );
    Ok(series)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::testing::StubProvider;
    use crate::models::price::PricePoint;

    fn params(ticker: Option<&str>, start: Option<&str>, interval: Option<&str>) -> StockParams {
        StockParams {
            ticker: ticker.map(String::from),
            start_date: start.map(String::from),
            interval: interval.map(String::from),
        }
    }

    #[test]
    fn test_parse_all_present() {
        let query = parse_stock_params(&params(Some("AAPL"), Some("2024-01-01"), Some("daily"))).unwrap();
        assert_eq!(query, SeriesQuery::history("AAPL", "2024-01-01", "daily"));
    }

    #[test]
    fn test_parse_every_missing_combination() {
        let values = [None, Some("x")];
        for t in values {
            for s in values {
                for i in values {
                    if t.is_some() && s.is_some() && i.is_some() {
                        continue;
                    }
                    let err = parse_stock_params(&params(t, s, i)).unwrap_err();
                    let msg = err.to_string();
                    assert!(matches!(err, ServiceError::BadRequest(_)));
                    assert_eq!(msg.contains("ticker"), t.is_none(), "{}", msg);
                    assert_eq!(msg.contains("startDate"), s.is_none(), "{}", msg);
                    assert_eq!(msg.contains("interval"), i.is_none(), "{}", msg);
                }
            }
        }
    }

    #[test]
    fn test_parse_blank_counts_as_missing() {
        let err = parse_stock_params(&params(Some(""), Some("2024-01-01"), Some("daily"))).unwrap_err();
        assert_eq!(err.to_string(), "Missing required parameters: ticker");
    }

    #[tokio::test]
    async fn test_series_relayed_in_order() {
        let series = vec![
            PricePoint { date: "2024-01-03".into(), close: 3.0 },
            PricePoint { date: "2024-01-01".into(), close: 1.0 },
            PricePoint { date: "2024-01-02".into(), close: 2.0 },
        ];
        let provider = StubProvider::new().with_series(Ok(series.clone()));
        let query = SeriesQuery::history("AAPL", "2024-01-01", "daily");

        let result = get_price_history(&provider, &query).await.unwrap();
        assert_eq!(result, series);
        assert_eq!(provider.series_queries.lock().unwrap().as_slice(), &[query]);
    }

    #[tokio::test]
    async fn test_empty_series_is_not_found() {
        let provider = StubProvider::new().with_series(Ok(Vec::new()));
        let query = SeriesQuery::history("ZZZZ", "2024-01-01", "daily");
        let err = get_price_history(&provider, &query).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
        assert_eq!(err.to_string(), "No price data found for ticker: ZZZZ");
    }

    #[tokio::test]
    async fn test_unknown_ticker_is_not_found() {
        let provider = StubProvider::new().with_series(Err(ApiError::NotFound("Ticker 'ZZZZ' not found".into())));
        let query = SeriesQuery::history("ZZZZ", "2024-01-01", "daily");
        let err = get_price_history(&provider, &query).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
    }
}
