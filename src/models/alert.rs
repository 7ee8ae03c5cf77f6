//! Price alert models

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Side of the target price an alert fires on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Fires when the price rises above the target
    Above,
    /// Fires when the price drops below the target
    Below,
}

impl FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "above" => Ok(Direction::Above),
            "below" => Ok(Direction::Below),
            other => Err(format!(
                "Invalid direction: {}. Expected 'above' or 'below'",
                other
            )),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Above => write!(f, "above"),
            Direction::Below => write!(f, "below"),
        }
    }
}

/// Raw query parameters for `/check-alert`
#[derive(Debug, Default, Deserialize)]
pub struct AlertParams {
    pub ticker: Option<String>,
    pub price: Option<String>,
    pub direction: Option<String>,
}

/// Validated alert check request
#[derive(Debug, Clone, PartialEq)]
pub struct AlertRequest {
    pub ticker: String,
    pub target: f64,
    pub direction: Direction,
}

/// Outcome of comparing the current price with an alert
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AlertDecision {
    Valid,
    /// The condition already holds, so the alert would fire immediately
    AlreadyTriggered {
        current: f64,
        target: f64,
        direction: Direction,
    },
}

impl AlertDecision {
    pub fn message(&self) -> String {
        match self {
            AlertDecision::Valid => "Valid alert.".to_string(),
            AlertDecision::AlreadyTriggered { current, target, direction } => format!(
                "Current price is ${:.2}, already {} ${:.2}",
                current, direction, target
            ),
        }
    }
}

/// Body returned by `/check-alert` for a valid alert
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlertResponse {
    pub valid: bool,
    pub message: String,
}
