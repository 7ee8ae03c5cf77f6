pub mod client;
pub mod models;

pub use client::TiingoClient;
pub use models::{ApiError, SeriesQuery};
