pub mod tiingo;

use async_trait::async_trait;

use crate::models::{PriceSeries, QuoteSnapshot};
pub use tiingo::{ApiError, SeriesQuery, TiingoClient};

/// Upstream market-data provider used by every handler
#[async_trait]
pub trait QuoteProvider: Send + Sync {
    /// Reachability check: succeeds on any 2xx for the ticker's daily prices, body ignored
    async fn ping(&self, ticker: &str) -> Result<(), ApiError>;

    /// Daily price history for a ticker
    async fn fetch_daily_series(&self, query: &SeriesQuery) -> Result<PriceSeries, ApiError>;

    /// Latest quote for a ticker, `None` when upstream returns no rows
    async fn fetch_latest_quote(&self, ticker: &str) -> Result<Option<QuoteSnapshot>, ApiError>;
}
