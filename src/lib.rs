//! FleetMetrics - Equipment Reliability Metrics Engine
//!
//! Computes derived reliability metrics (downtime, availability, MTBF,
//! MTTR) from raw equipment performance readings, classifies each reading
//! into a GOOD/FAIR/POOR status tier, and aggregates fleets of readings
//! into summary statistics.
//!
//! All operations are pure functions over caller-owned values; parsing raw
//! input, persistence and rendering are left to the caller.

mod equipment;
mod error;
pub mod fleet;
mod metrics;

pub use equipment::EquipmentRecord;
pub use error::ValidationError;
pub use fleet::{availability_trend, FleetStats, Trend};
pub use metrics::{classify, compute, Mtbf, PerformanceReading, ReliabilityMetrics, Status};
