use crate::fusion::{FusionOutcome, ScannerOrigin};
use crate::geometry::Point3;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Maximum pairwise Manhattan distance over the recovered scanner origins.
///
/// O(n²) over the number of scanners; n is tens at most. Returns 0 when there
/// are fewer than two origins.
pub fn max_manhattan(origins: &[Point3]) -> i64 {
    let mut best = 0;
    for (i, a) in origins.iter().enumerate() {
        for b in &origins[i + 1..] {
            best = best.max(a.manhattan(b));
        }
    }
    best
}

/// The system's two scalar outputs plus supporting metadata, serializable for
/// downstream tooling.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FusionReport {
    /// Distinct beacons in the fused map.
    pub beacon_count: usize,
    /// Maximum pairwise Manhattan distance among scanner origins, the
    /// reference scanner's zero origin included.
    pub max_scanner_distance: i64,
    pub scanners_merged: usize,
    pub origins: Vec<ScannerOrigin>,
    pub processing_time_ms: f32,
    pub generated_at: DateTime<Utc>,
}

pub fn build_report(outcome: &FusionOutcome, processing_time_ms: f32) -> FusionReport {
    FusionReport {
        beacon_count: outcome.beacons.len(),
        max_scanner_distance: max_manhattan(&outcome.origin_positions()),
        scanners_merged: outcome.origins.len(),
        origins: outcome.origins.clone(),
        processing_time_ms,
        generated_at: Utc::now(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_manhattan_worked_example() {
        // The classic worked example: scanners at these three recovered
        // positions are 3621 apart at most.
        let origins = vec![
            Point3::ZERO,
            Point3::new(1105, -1205, 1229),
            Point3::new(-92, -2380, -20),
        ];
        assert_eq!(max_manhattan(&origins), 3621);
    }

    #[test]
    fn test_max_manhattan_degenerate_inputs() {
        assert_eq!(max_manhattan(&[]), 0);
        assert_eq!(max_manhattan(&[Point3::new(5, 5, 5)]), 0);
        assert_eq!(
            max_manhattan(&[Point3::new(1, 1, 1), Point3::new(1, 1, 1)]),
            0
        );
    }
}
