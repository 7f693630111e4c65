//! Fleet-wide aggregation and analysis.
//!
//! Summarizes a collection of per-equipment metrics into fleet statistics
//! and provides ranking/filter helpers over equipment records.

use crate::equipment::EquipmentRecord;
use crate::metrics::{ReliabilityMetrics, Status};

use serde::Serialize;

/// Aggregate statistics over a fleet of readings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FleetStats {
    /// Arithmetic mean of availability across all readings, in percent.
    pub fleet_availability: f64,
    /// Number of readings classified POOR.
    pub critical_count: usize,
    /// Mean MTBF across readings that observed at least one failure.
    pub avg_mtbf: f64,
    /// Number of readings aggregated.
    pub total_equipment: usize,
}

impl FleetStats {
    fn empty() -> Self {
        Self {
            fleet_availability: 0.0,
            critical_count: 0,
            avg_mtbf: 0.0,
            total_equipment: 0,
        }
    }
}

/// Summarize per-equipment metrics into fleet statistics.
///
/// Readings that observed no failures carry an undefined MTBF and are
/// excluded from `avg_mtbf` so the marker never pollutes the mean. An
/// empty input yields all-zero stats, not an error.
pub fn summary(metrics: &[ReliabilityMetrics]) -> FleetStats {
    if metrics.is_empty() {
        return FleetStats::empty();
    }

    let fleet_availability =
        metrics.iter().map(|m| m.availability_pct).sum::<f64>() / metrics.len() as f64;

    let critical_count = metrics.iter().filter(|m| m.status == Status::Poor).count();

    let mut mtbf_sum = 0.0;
    let mut mtbf_count = 0usize;
    for m in metrics {
        if let Some(hours) = m.mtbf.hours() {
            mtbf_sum += hours;
            mtbf_count += 1;
        }
    }
    let avg_mtbf = if mtbf_count > 0 {
        mtbf_sum / mtbf_count as f64
    } else {
        0.0
    };

    tracing::debug!(
        "fleet summary: {} readings, {} critical, availability {:.2}%",
        metrics.len(),
        critical_count,
        fleet_availability
    );

    FleetStats {
        fleet_availability,
        critical_count,
        avg_mtbf,
        total_equipment: metrics.len(),
    }
}

/// Availability trend over a chronological series of one asset's metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Improving,
    Declining,
    Stable,
    #[serde(rename = "insufficient data")]
    InsufficientData,
}

/// Compare the latest reading's availability against the earliest.
///
/// `history` must be ordered oldest first. Fewer than two readings cannot
/// establish a direction.
pub fn availability_trend(history: &[ReliabilityMetrics]) -> Trend {
    let (first, last) = match (history.first(), history.last()) {
        (Some(first), Some(last)) if history.len() >= 2 => (first, last),
        _ => return Trend::InsufficientData,
    };

    let delta = last.availability_pct - first.availability_pct;
    if delta > 0.0 {
        Trend::Improving
    } else if delta < 0.0 {
        Trend::Declining
    } else {
        Trend::Stable
    }
}

/// The record with the highest availability, or `None` for an empty fleet.
pub fn best_performer(fleet: &[EquipmentRecord]) -> Option<&EquipmentRecord> {
    fleet
        .iter()
        .max_by(|a, b| a.metrics.availability_pct.total_cmp(&b.metrics.availability_pct))
}

/// The record with the lowest availability, or `None` for an empty fleet.
pub fn worst_performer(fleet: &[EquipmentRecord]) -> Option<&EquipmentRecord> {
    fleet
        .iter()
        .min_by(|a, b| a.metrics.availability_pct.total_cmp(&b.metrics.availability_pct))
}

/// All records currently in the given status tier, in input order.
pub fn with_status(fleet: &[EquipmentRecord], status: Status) -> Vec<&EquipmentRecord> {
    fleet
        .iter()
        .filter(|record| record.metrics.status == status)
        .collect()
}

/// POOR records ordered worst availability first.
pub fn critical(fleet: &[EquipmentRecord]) -> Vec<&EquipmentRecord> {
    let mut records = with_status(fleet, Status::Poor);
    records.sort_by(|a, b| a.metrics.availability_pct.total_cmp(&b.metrics.availability_pct));
    records
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::{compute, PerformanceReading};
    use chrono::{TimeZone, Utc};

    fn metrics(total: f64, uptime: f64, failures: u32) -> ReliabilityMetrics {
        compute(&PerformanceReading::new(total, uptime, failures)).unwrap()
    }

    fn record(name: &str, total: f64, uptime: f64, failures: u32) -> EquipmentRecord {
        let recorded_at = Utc.with_ymd_and_hms(2024, 3, 1, 8, 0, 0).unwrap();
        EquipmentRecord::new(name, PerformanceReading::new(total, uptime, failures), recorded_at)
            .unwrap()
    }

    #[test]
    fn test_empty_fleet_summary() {
        let stats = summary(&[]);
        assert_eq!(stats.fleet_availability, 0.0);
        assert_eq!(stats.critical_count, 0);
        assert_eq!(stats.avg_mtbf, 0.0);
        assert_eq!(stats.total_equipment, 0);
    }

    #[test]
    fn test_fleet_summary() {
        let fleet = vec![
            metrics(720.0, 695.5, 3), // GOOD, mtbf ~231.83
            metrics(720.0, 635.0, 5), // POOR, mtbf 127
            metrics(100.0, 100.0, 0), // GOOD, no failures
        ];

        let stats = summary(&fleet);
        let expected_availability = (695.5 / 720.0 * 100.0 + 635.0 / 720.0 * 100.0 + 100.0) / 3.0;

        assert!((stats.fleet_availability - expected_availability).abs() < 1e-9);
        assert_eq!(stats.critical_count, 1);
        assert_eq!(stats.total_equipment, 3);
    }

    #[test]
    fn test_avg_mtbf_skips_no_failure_readings() {
        let fleet = vec![
            metrics(720.0, 635.0, 5),  // mtbf 127
            metrics(720.0, 718.0, 1),  // mtbf 718
            metrics(100.0, 100.0, 0),  // undefined, must not count
        ];

        let stats = summary(&fleet);
        assert!((stats.avg_mtbf - (127.0 + 718.0) / 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_avg_mtbf_with_no_failures_anywhere() {
        let fleet = vec![metrics(100.0, 100.0, 0), metrics(50.0, 50.0, 0)];
        assert_eq!(summary(&fleet).avg_mtbf, 0.0);
    }

    #[test]
    fn test_trend_directions() {
        let improving = vec![metrics(720.0, 635.0, 5), metrics(720.0, 700.0, 2)];
        assert_eq!(availability_trend(&improving), Trend::Improving);

        let declining = vec![metrics(720.0, 700.0, 2), metrics(720.0, 635.0, 5)];
        assert_eq!(availability_trend(&declining), Trend::Declining);

        let stable = vec![metrics(720.0, 700.0, 2), metrics(720.0, 700.0, 2)];
        assert_eq!(availability_trend(&stable), Trend::Stable);
    }

    #[test]
    fn test_trend_needs_two_readings() {
        assert_eq!(availability_trend(&[]), Trend::InsufficientData);
        assert_eq!(
            availability_trend(&[metrics(720.0, 700.0, 2)]),
            Trend::InsufficientData
        );
    }

    #[test]
    fn test_trend_serde_strings() {
        assert_eq!(serde_json::to_string(&Trend::Improving).unwrap(), "\"improving\"");
        assert_eq!(
            serde_json::to_string(&Trend::InsufficientData).unwrap(),
            "\"insufficient data\""
        );
    }

    #[test]
    fn test_performers() {
        let fleet = vec![
            record("Pump-101", 720.0, 695.5, 3),
            record("Compressor-A", 720.0, 635.0, 5),
            record("Conveyor-7", 720.0, 718.0, 1),
        ];

        assert_eq!(best_performer(&fleet).unwrap().name, "Conveyor-7");
        assert_eq!(worst_performer(&fleet).unwrap().name, "Compressor-A");
        assert!(best_performer(&[]).is_none());
        assert!(worst_performer(&[]).is_none());
    }

    #[test]
    fn test_status_filter_and_critical_ordering() {
        let fleet = vec![
            record("Pump-101", 720.0, 695.5, 3),   // GOOD
            record("Compressor-A", 720.0, 635.0, 5), // POOR ~88.2%
            record("Mixer-3", 720.0, 580.0, 8),    // POOR ~80.6%
            record("Press-2", 720.0, 660.0, 4),    // FAIR ~91.7%
        ];

        let fair = with_status(&fleet, Status::Fair);
        assert_eq!(fair.len(), 1);
        assert_eq!(fair[0].name, "Press-2");

        // Worst availability first
        let worst = critical(&fleet);
        assert_eq!(worst.len(), 2);
        assert_eq!(worst[0].name, "Mixer-3");
        assert_eq!(worst[1].name, "Compressor-A");
    }
}
