//! Vessel records and snapshot ingestion.
//!
//! A snapshot maps vessel identifiers to the textual fields scraped upstream.
//! Ingestion normalizes those fields once, through the recovery policy in
//! [`crate::parse`], so the geometry never sees raw text.

use crate::error::{Result, ShipscopeError};
use crate::parse::{coordinate_or_default, parse_speed, size_or_default};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

/// Textual vessel record as delivered by the upstream snapshot.
///
/// Fields the core does not interpret (heading, trip history, port calls, …)
/// land in `extra` untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawVesselRecord {
    #[serde(rename = "IMO", default)]
    pub imo: String,
    #[serde(rename = "MMSI", default)]
    pub mmsi: String,
    #[serde(rename = "Latitude", default)]
    pub latitude: String,
    #[serde(rename = "Longitude", default)]
    pub longitude: String,
    #[serde(rename = "Size", default)]
    pub size: String,
    #[serde(rename = "Speed", default)]
    pub speed: String,
    #[serde(rename = "Status", default)]
    pub status: String,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

/// A full collection cycle: vessel id to raw record.
///
/// Backed by a `BTreeMap` so iteration, and therefore everything derived from
/// it, is deterministic for identical input.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Snapshot {
    pub vessels: BTreeMap<String, RawVesselRecord>,
}

impl Snapshot {
    /// Parse a snapshot from its JSON rendering.
    pub fn from_json(raw: &str) -> Result<Self> {
        serde_json::from_str(raw)
            .map_err(|e| ShipscopeError::Serialization(format!("invalid vessel snapshot: {e}")))
    }

    /// Normalize every raw record into a [`VesselRecord`], in key order.
    pub fn into_records(self) -> Vec<VesselRecord> {
        self.vessels
            .into_iter()
            .map(|(id, raw)| VesselRecord::from_raw(id, &raw))
            .collect()
    }
}

/// A vessel with normalized position, footprint size, and speed.
///
/// Fresh per collection cycle; never mutated after ingestion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VesselRecord {
    pub id: String,
    pub imo: String,
    /// Decimal degrees, south negative.
    pub lat: f64,
    /// Decimal degrees, west negative.
    pub lon: f64,
    pub length_m: f64,
    pub width_m: f64,
    pub speed_kn: f64,
}

impl VesselRecord {
    /// Build a record from its raw textual form, applying the zero-default
    /// recovery for unparseable fields.
    pub fn from_raw(id: String, raw: &RawVesselRecord) -> Self {
        let (length_m, width_m) = size_or_default(&raw.size);
        Self {
            id,
            imo: raw.imo.clone(),
            lat: coordinate_or_default(&raw.latitude),
            lon: coordinate_or_default(&raw.longitude),
            length_m,
            width_m,
            speed_kn: parse_speed(&raw.speed),
        }
    }

    /// Validity predicate: the IMO identifier, apostrophes stripped, must be
    /// a non-empty digit string. Records failing this never enter geometry.
    pub fn has_numeric_identifier(&self) -> bool {
        let digits: String = self.imo.chars().filter(|c| *c != '\'').collect();
        !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit())
    }

    /// `(lon, lat)` position, the axis order the area filter works in.
    pub fn position(&self) -> (f64, f64) {
        (self.lon, self.lat)
    }
}

/// Keep only records passing the validity predicate, logging the drops.
pub fn valid_records(records: &[VesselRecord]) -> Vec<&VesselRecord> {
    records
        .iter()
        .filter(|record| {
            let valid = record.has_numeric_identifier();
            if !valid {
                debug!(id = %record.id, imo = %record.imo, "dropping vessel with non-numeric identifier");
            }
            valid
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(imo: &str, lat: &str, lon: &str, size: &str, speed: &str) -> RawVesselRecord {
        RawVesselRecord {
            imo: imo.to_string(),
            latitude: lat.to_string(),
            longitude: lon.to_string(),
            size: size.to_string(),
            speed: speed.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_from_raw_normalizes_fields() {
        let record = VesselRecord::from_raw(
            "244615000".to_string(),
            &raw("9376426", "52.3702° N", "4.8952° E", "200 x 32 m", "0.3 kn"),
        );

        assert_eq!(record.lat, 52.3702);
        assert_eq!(record.lon, 4.8952);
        assert_eq!((record.length_m, record.width_m), (200.0, 32.0));
        assert_eq!(record.speed_kn, 0.3);
    }

    #[test]
    fn test_from_raw_recovers_bad_fields() {
        let record = VesselRecord::from_raw(
            "1".to_string(),
            &raw("123456", "Nicht verfügbar", "garbage", "---", ""),
        );

        assert_eq!((record.lat, record.lon), (0.0, 0.0));
        assert_eq!((record.length_m, record.width_m), (0.0, 0.0));
        assert_eq!(record.speed_kn, 0.0);
    }

    #[test]
    fn test_identifier_validity() {
        let mut record = VesselRecord::from_raw("1".to_string(), &raw("9376426", "0", "0", "---", ""));
        assert!(record.has_numeric_identifier());

        // Scraped identifiers sometimes arrive quoted.
        record.imo = "'9376426'".to_string();
        assert!(record.has_numeric_identifier());

        record.imo = "N/A".to_string();
        assert!(!record.has_numeric_identifier());

        record.imo = String::new();
        assert!(!record.has_numeric_identifier());
    }

    #[test]
    fn test_snapshot_json_round_trip_and_order() {
        let json = r#"{
            "244615000": { "IMO": "9376426", "Latitude": "52.37° N", "Longitude": "4.89° E", "Size": "110 x 11 m", "Speed": "0 kn" },
            "205196000": { "IMO": "9195640", "Latitude": "51.90° N", "Longitude": "4.48° E", "Size": "---", "Speed": "8.1 kn" }
        }"#;

        let records = Snapshot::from_json(json).unwrap().into_records();

        assert_eq!(records.len(), 2);
        // BTreeMap ordering: lexicographic by id.
        assert_eq!(records[0].id, "205196000");
        assert_eq!(records[1].id, "244615000");
    }

    #[test]
    fn test_snapshot_preserves_unknown_fields() {
        let json = r#"{
            "1": { "IMO": "123", "Flag": "NL", "Course": "181°" }
        }"#;

        let snapshot = Snapshot::from_json(json).unwrap();
        let raw = snapshot.vessels.get("1").unwrap();
        assert_eq!(raw.extra.get("Flag"), Some(&serde_json::json!("NL")));
    }

    #[test]
    fn test_valid_records_filters_once() {
        let records = vec![
            VesselRecord::from_raw("1".to_string(), &raw("9376426", "52° N", "4° E", "---", "")),
            VesselRecord::from_raw("2".to_string(), &raw("N/A", "52° N", "4° E", "---", "")),
        ];

        let valid = valid_records(&records);
        assert_eq!(valid.len(), 1);
        assert_eq!(valid[0].id, "1");
    }
}
