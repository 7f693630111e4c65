//! Validation error types.

use thiserror::Error;

/// Errors raised when a performance reading or equipment record violates
/// its input invariants.
///
/// Every variant names the offending field. Validation failures are local
/// to a single call; there is nothing to recover internally.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("total hours cannot be negative (got {0})")]
    NegativeTotalHours(f64),
    #[error("uptime hours cannot be negative (got {0})")]
    NegativeUptimeHours(f64),
    #[error("uptime exceeds total hours ({uptime} > {total})")]
    UptimeExceedsTotal { uptime: f64, total: f64 },
    #[error("{field} must be a finite number")]
    NonFiniteHours { field: &'static str },
    #[error("equipment name cannot be empty")]
    EmptyName,
}
