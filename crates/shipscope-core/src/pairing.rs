//! All-pairs proximity search over a batch of vessel records.

use crate::error::Result;
use crate::geo::footprint::min_distance;
use crate::models::vessel::{valid_records, VesselRecord};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Thresholds controlling which pairs are reported.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PairingThresholds {
    /// Maximum footprint separation in meters.
    pub max_distance_m: f64,
    /// When set, both vessels must be at or below this speed in knots.
    pub max_speed_kn: Option<f64>,
}

impl Default for PairingThresholds {
    fn default() -> Self {
        Self { max_distance_m: 75.0, max_speed_kn: None }
    }
}

impl PairingThresholds {
    pub fn new(max_distance_m: f64) -> Self {
        Self { max_distance_m, max_speed_kn: None }
    }

    pub fn with_max_speed(mut self, max_speed_kn: f64) -> Self {
        self.max_speed_kn = Some(max_speed_kn);
        self
    }

    fn admits(&self, distance_m: f64, a: &VesselRecord, b: &VesselRecord) -> bool {
        if distance_m > self.max_distance_m {
            return false;
        }
        match self.max_speed_kn {
            Some(max) => a.speed_kn <= max && b.speed_kn <= max,
            None => true,
        }
    }
}

/// An unordered pair of vessels below the thresholds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProximityPair {
    pub a: String,
    pub b: String,
    pub distance_m: f64,
}

/// Find all vessel pairs whose footprints are within the thresholds.
///
/// Invalid-identifier records are dropped up front and never compared. Every
/// unordered pair of the remaining records is evaluated once (i < j, no
/// self-pairs); O(n²) in the batch size, which is bounded by a single map
/// viewport. The result is sorted ascending by distance, ties keeping
/// iteration order, so identical input yields identical output.
pub fn find_pairs(
    vessels: &[VesselRecord],
    thresholds: &PairingThresholds,
) -> Result<Vec<ProximityPair>> {
    let valid = valid_records(vessels);
    debug!(
        total = vessels.len(),
        valid = valid.len(),
        max_distance_m = thresholds.max_distance_m,
        "pairing vessel batch"
    );

    let mut pairs = Vec::new();
    for i in 0..valid.len() {
        for j in (i + 1)..valid.len() {
            let (a, b) = (valid[i], valid[j]);
            let distance_m = min_distance(a, b)?;
            if thresholds.admits(distance_m, a, b) {
                pairs.push(ProximityPair {
                    a: a.id.clone(),
                    b: b.id.clone(),
                    distance_m,
                });
            }
        }
    }

    pairs.sort_by(|x, y| x.distance_m.total_cmp(&y.distance_m));
    Ok(pairs)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vessel(id: &str, imo: &str, lat: f64, lon: f64, size_m: (f64, f64), speed_kn: f64) -> VesselRecord {
        VesselRecord {
            id: id.to_string(),
            imo: imo.to_string(),
            lat,
            lon,
            length_m: size_m.0,
            width_m: size_m.1,
            speed_kn,
        }
    }

    fn close_pair() -> Vec<VesselRecord> {
        vec![
            vessel("1", "1000001", 52.0, 4.0, (300.0, 50.0), 0.0),
            vessel("2", "1000002", 52.0, 4.001, (300.0, 50.0), 0.0),
        ]
    }

    #[test]
    fn test_pair_within_distance_threshold() {
        let pairs = find_pairs(&close_pair(), &PairingThresholds::new(100.0)).unwrap();

        assert_eq!(pairs.len(), 1);
        assert_eq!((pairs[0].a.as_str(), pairs[0].b.as_str()), ("1", "2"));
        assert!(pairs[0].distance_m >= 0.0 && pairs[0].distance_m <= 100.0);
    }

    #[test]
    fn test_no_pair_below_tight_threshold() {
        let pairs = find_pairs(&close_pair(), &PairingThresholds::new(10.0)).unwrap();
        assert!(pairs.is_empty());
    }

    #[test]
    fn test_speed_threshold_gates_both_vessels() {
        let mut vessels = close_pair();
        vessels[1].speed_kn = 12.0;

        let thresholds = PairingThresholds::new(100.0).with_max_speed(5.0);
        assert!(find_pairs(&vessels, &thresholds).unwrap().is_empty());

        vessels[1].speed_kn = 4.0;
        assert_eq!(find_pairs(&vessels, &thresholds).unwrap().len(), 1);
    }

    #[test]
    fn test_invalid_identifier_never_paired() {
        let mut vessels = close_pair();
        vessels.push(vessel("3", "N/A", 52.0, 4.0, (300.0, 50.0), 0.0));

        let pairs = find_pairs(&vessels, &PairingThresholds::new(500.0)).unwrap();

        assert!(pairs.iter().all(|p| p.a != "3" && p.b != "3"));
        assert_eq!(pairs.len(), 1);
    }

    #[test]
    fn test_no_self_pairs_and_no_duplicates() {
        let vessels = vec![
            vessel("1", "1000001", 52.0, 4.0, (100.0, 20.0), 0.0),
            vessel("2", "1000002", 52.0, 4.0005, (100.0, 20.0), 0.0),
            vessel("3", "1000003", 52.0, 4.001, (100.0, 20.0), 0.0),
        ];

        let pairs = find_pairs(&vessels, &PairingThresholds::new(100_000.0)).unwrap();

        // 3 vessels, C(3,2) pairs
        assert_eq!(pairs.len(), 3);
        for p in &pairs {
            assert_ne!(p.a, p.b);
        }
        let mut keys: Vec<(String, String)> =
            pairs.iter().map(|p| (p.a.clone(), p.b.clone())).collect();
        keys.sort();
        keys.dedup();
        assert_eq!(keys.len(), 3);
    }

    #[test]
    fn test_output_sorted_by_distance() {
        let vessels = vec![
            vessel("far", "1000001", 52.0, 4.0, (0.0, 0.0), 0.0),
            vessel("mid", "1000002", 52.0, 4.002, (0.0, 0.0), 0.0),
            vessel("near", "1000003", 52.0, 4.003, (0.0, 0.0), 0.0),
        ];

        let pairs = find_pairs(&vessels, &PairingThresholds::new(1_000_000.0)).unwrap();

        assert_eq!(pairs.len(), 3);
        assert!(pairs.windows(2).all(|w| w[0].distance_m <= w[1].distance_m));
        // Closest pair is mid-near at ~68 m
        assert_eq!((pairs[0].a.as_str(), pairs[0].b.as_str()), ("mid", "near"));
    }

    #[test]
    fn test_empty_batch() {
        assert!(find_pairs(&[], &PairingThresholds::default()).unwrap().is_empty());
    }
}
