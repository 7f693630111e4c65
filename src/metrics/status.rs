//! Availability status classification.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Minimum availability (percent) for the GOOD tier.
const GOOD_THRESHOLD: f64 = 95.0;
/// Minimum availability (percent) for the FAIR tier.
const FAIR_THRESHOLD: f64 = 90.0;

/// Categorical equipment status derived from availability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    Good,
    Fair,
    Poor,
}

impl Status {
    /// The uppercase wire/display form of the status.
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Good => "GOOD",
            Status::Fair => "FAIR",
            Status::Poor => "POOR",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify an availability percentage into a status tier.
///
/// Tier boundaries are inclusive lower bounds: exactly 95% is GOOD and
/// exactly 90% is FAIR.
pub fn classify(availability_pct: f64) -> Status {
    if availability_pct >= GOOD_THRESHOLD {
        Status::Good
    } else if availability_pct >= FAIR_THRESHOLD {
        Status::Fair
    } else {
        Status::Poor
    }
}
