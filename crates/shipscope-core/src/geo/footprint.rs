//! Footprint rectangles and minimum corner-to-corner distance.
//!
//! A vessel's footprint is an axis-aligned-in-lat/lon rectangle built from
//! its length and width; heading is deliberately not modeled. Separation
//! between two vessels is the minimum over the 16 corner-to-corner
//! great-circle distances. Corner sampling is exact for well-separated
//! rectangles but only an upper bound when footprints are very close or
//! overlapping; downstream thresholds are tuned against this behavior, so it
//! is kept as-is.

use crate::error::{Result, ShipscopeError};
use crate::models::vessel::VesselRecord;

/// Meters spanned by one degree of latitude (fixed-latitude approximation).
pub const METERS_PER_DEGREE: f64 = 111_320.0;

/// Mean Earth radius used by the haversine distance, in meters.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// The four `(lat, lon)` corners of a vessel's footprint rectangle.
///
/// Length maps to latitudinal extent and width to longitudinal extent, both
/// halved and offset from the center; the longitudinal offset shrinks with
/// `cos(latitude)`. A zero-size vessel collapses to its center repeated four
/// times. Fails with [`ShipscopeError::DegenerateGeometry`] at polar
/// latitudes where the longitude scale vanishes.
pub fn rectangle_corners(
    lat: f64,
    lon: f64,
    length_m: f64,
    width_m: f64,
) -> Result<[(f64, f64); 4]> {
    let cos_lat = lat.to_radians().cos();
    if cos_lat.abs() < f64::EPSILON {
        return Err(ShipscopeError::DegenerateGeometry { lat });
    }

    let half_lat = length_m / (2.0 * METERS_PER_DEGREE);
    let half_lon = width_m / (2.0 * METERS_PER_DEGREE * cos_lat);

    Ok([
        (lat + half_lat, lon + half_lon),
        (lat + half_lat, lon - half_lon),
        (lat - half_lat, lon + half_lon),
        (lat - half_lat, lon - half_lon),
    ])
}

/// Great-circle distance between two `(lat, lon)` points in meters.
pub fn haversine_m(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let (lat1, lon1) = (lat1.to_radians(), lon1.to_radians());
    let (lat2, lon2) = (lat2.to_radians(), lon2.to_radians());

    let dlat = lat2 - lat1;
    let dlon = lon2 - lon1;

    let a = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_M * c
}

/// Minimum footprint-to-footprint distance between two vessels, in meters.
///
/// Symmetric in its arguments and zero for coincident footprints.
pub fn min_distance(a: &VesselRecord, b: &VesselRecord) -> Result<f64> {
    let corners_a = rectangle_corners(a.lat, a.lon, a.length_m, a.width_m)?;
    let corners_b = rectangle_corners(b.lat, b.lon, b.length_m, b.width_m)?;

    let mut min = f64::INFINITY;
    for (lat_a, lon_a) in corners_a {
        for (lat_b, lon_b) in corners_b {
            let distance = haversine_m(lat_a, lon_a, lat_b, lon_b);
            if distance < min {
                min = distance;
            }
        }
    }

    Ok(min)
}
