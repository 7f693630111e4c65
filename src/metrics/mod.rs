//! Reliability metrics computation.
//!
//! Transforms a raw performance reading (operating hours, uptime hours,
//! failure count) into derived metrics: downtime, availability, MTBF, MTTR
//! and a categorical status.

mod status;

pub use status::{classify, Status};

use crate::error::ValidationError;

use serde::{Deserialize, Serialize};
use std::fmt;

/// A raw equipment performance reading over one observation period.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PerformanceReading {
    /// Total length of the observation period in hours.
    pub total_hours: f64,
    /// Hours the equipment was operational; never more than `total_hours`.
    pub uptime_hours: f64,
    /// Number of discrete failure events in the period.
    pub failure_count: u32,
}

impl PerformanceReading {
    pub fn new(total_hours: f64, uptime_hours: f64, failure_count: u32) -> Self {
        Self {
            total_hours,
            uptime_hours,
            failure_count,
        }
    }

    /// Check the reading's input invariants.
    ///
    /// Hours must be finite and non-negative, and uptime must not exceed
    /// the total period. Violations are reported, never clamped.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.total_hours.is_finite() {
            return Err(ValidationError::NonFiniteHours { field: "total_hours" });
        }
        if !self.uptime_hours.is_finite() {
            return Err(ValidationError::NonFiniteHours { field: "uptime_hours" });
        }
        if self.total_hours < 0.0 {
            return Err(ValidationError::NegativeTotalHours(self.total_hours));
        }
        if self.uptime_hours < 0.0 {
            return Err(ValidationError::NegativeUptimeHours(self.uptime_hours));
        }
        if self.uptime_hours > self.total_hours {
            return Err(ValidationError::UptimeExceedsTotal {
                uptime: self.uptime_hours,
                total: self.total_hours,
            });
        }
        Ok(())
    }
}

/// Mean time between failures.
///
/// Tagged so that "no failures observed" stays distinguishable from a real
/// measurement instead of masquerading as a large finite number. Serializes
/// as a JSON number, or `null` for the no-failures case.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "Option<f64>", into = "Option<f64>")]
pub enum Mtbf {
    /// No failure events were observed; MTBF is undefined.
    NoFailures,
    /// Mean operating hours between failure events.
    Hours(f64),
}

impl Mtbf {
    /// The measured hours, or `None` when no failures were observed.
    pub fn hours(&self) -> Option<f64> {
        match self {
            Mtbf::NoFailures => None,
            Mtbf::Hours(h) => Some(*h),
        }
    }

    /// Whether at least one failure was observed.
    pub fn is_defined(&self) -> bool {
        matches!(self, Mtbf::Hours(_))
    }
}

impl From<Option<f64>> for Mtbf {
    fn from(value: Option<f64>) -> Self {
        match value {
            Some(h) => Mtbf::Hours(h),
            None => Mtbf::NoFailures,
        }
    }
}

impl From<Mtbf> for Option<f64> {
    fn from(value: Mtbf) -> Self {
        value.hours()
    }
}

impl fmt::Display for Mtbf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mtbf::NoFailures => f.write_str("no failures"),
            Mtbf::Hours(h) => write!(f, "{:.2}h", h),
        }
    }
}

/// Derived reliability metrics for a single reading.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReliabilityMetrics {
    /// Hours the equipment was down during the period.
    pub downtime_hours: f64,
    /// Fraction of the period the equipment was operational, in percent.
    pub availability_pct: f64,
    /// Mean time between failures.
    pub mtbf: Mtbf,
    /// Mean downtime per failure event; zero when no failures occurred.
    pub mttr_hours: f64,
    /// Status tier derived from availability.
    pub status: Status,
}

/// Compute derived reliability metrics for a single reading.
///
/// Validates the reading first, then derives each metric in a fixed order:
/// downtime, availability, MTBF, MTTR, status. Pure function; safe to call
/// concurrently.
pub fn compute(reading: &PerformanceReading) -> Result<ReliabilityMetrics, ValidationError> {
    reading.validate()?;

    let downtime_hours = reading.total_hours - reading.uptime_hours;

    let availability_pct = if reading.total_hours > 0.0 {
        reading.uptime_hours / reading.total_hours * 100.0
    } else {
        0.0
    };

    let mtbf = if reading.failure_count > 0 {
        Mtbf::Hours(reading.uptime_hours / reading.failure_count as f64)
    } else {
        Mtbf::NoFailures
    };

    let mttr_hours = if reading.failure_count > 0 {
        downtime_hours / reading.failure_count as f64
    } else {
        0.0
    };

    let status = classify(availability_pct);

    Ok(ReliabilityMetrics {
        downtime_hours,
        availability_pct,
        mtbf,
        mttr_hours,
        status,
    })
}
