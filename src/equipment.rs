//! Equipment records.

use crate::error::ValidationError;
use crate::metrics::{compute, PerformanceReading, ReliabilityMetrics};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A named piece of equipment with its latest reading and derived metrics.
///
/// Construction goes through [`EquipmentRecord::new`] so a record can never
/// hold metrics inconsistent with its reading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquipmentRecord {
    pub name: String,
    pub reading: PerformanceReading,
    pub metrics: ReliabilityMetrics,
    pub recorded_at: DateTime<Utc>,
}

impl EquipmentRecord {
    /// Validate the reading and derive its metrics.
    ///
    /// Fails if the name is empty after trimming or the reading violates
    /// its invariants.
    pub fn new(
        name: impl Into<String>,
        reading: PerformanceReading,
        recorded_at: DateTime<Utc>,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::EmptyName);
        }

        let metrics = compute(&reading)?;

        Ok(Self {
            name,
            reading,
            metrics,
            recorded_at,
        })
    }
}
