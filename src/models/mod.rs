//! Data models for the stock alert service
//!
//! Every value here is built per request and discarded with the response.

pub mod alert;
pub mod health;
pub mod price;
pub mod quote;

// Re-export commonly used types for convenience
pub use alert::{AlertDecision, AlertParams, AlertRequest, AlertResponse, Direction};
pub use health::HealthResponse;
pub use price::{PriceSeries, StockParams};
pub use quote::QuoteSnapshot;
