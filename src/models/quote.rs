//! Latest-quote models

use serde::Deserialize;

/// Most recent IEX quote for a ticker
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct QuoteSnapshot {
    /// Live price, null while the market is closed
    pub last: Option<f64>,
    /// Null for listings with no prior session
    #[serde(rename = "prevClose", default)]
    pub previous_close: Option<f64>,
}

impl QuoteSnapshot {
    /// Whether `last` carries a live price
    pub fn is_live(&self) -> bool {
        self.last.is_some()
    }

    /// Live price if available, previous close otherwise
    pub fn current_price(&self) -> Option<f64> {
        self.last.or(self.previous_close)
    }
}
