//! Price history models

use serde::{Deserialize, Serialize};

/// A single daily close as returned by Tiingo's end-of-day endpoint.
/// Upstream sends more fields (open, high, adjClose, ...); only these two are kept.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub date: String,
    pub close: f64,
}

/// Chronological series in upstream order
pub type PriceSeries = Vec<PricePoint>;

/// Raw query parameters for `/stocks`
#[derive(Debug, Default, Deserialize)]
pub struct StockParams {
    pub ticker: Option<String>,
    #[serde(rename = "startDate")]
    pub start_date: Option<String>,
    pub interval: Option<String>,
}
