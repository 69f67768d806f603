//! Region selection ingestion.
//!
//! The map picker hands over a GeoJSON FeatureCollection with a single
//! feature: a `Point` with a `radius` property (kilometers) for discs, or a
//! `Polygon` for everything drawn as an outline. Any other geometry kind is
//! rejected, matching what the downstream geometry can actually evaluate.

use crate::error::{Result, ShipscopeError};
use crate::geo::shape::AreaShape;
use geojson::{Feature, GeoJson, Value};
use tracing::warn;

/// Parse a raw GeoJSON region selection into an [`AreaShape`].
///
/// Fails with [`ShipscopeError::InvalidGeometry`] for documents that are not
/// a FeatureCollection, are empty, or carry an unsupported geometry kind.
pub fn parse_region(raw: &str) -> Result<AreaShape> {
    let geojson: GeoJson = raw.parse().map_err(|e| ShipscopeError::InvalidGeometry {
        reason: format!("not valid GeoJSON: {e}"),
    })?;

    let collection = match geojson {
        GeoJson::FeatureCollection(fc) => fc,
        GeoJson::Feature(_) | GeoJson::Geometry(_) => {
            return Err(ShipscopeError::InvalidGeometry {
                reason: "expected a FeatureCollection".to_string(),
            })
        }
    };

    let feature = collection.features.into_iter().next().ok_or_else(|| {
        ShipscopeError::InvalidGeometry { reason: "empty FeatureCollection".to_string() }
    })?;

    shape_from_feature(feature)
}

fn shape_from_feature(feature: Feature) -> Result<AreaShape> {
    let geometry = feature.geometry.as_ref().ok_or_else(|| ShipscopeError::InvalidGeometry {
        reason: "feature has no geometry".to_string(),
    })?;

    match &geometry.value {
        Value::Point(position) => {
            let (lon, lat) = position_lon_lat(position)?;
            Ok(AreaShape::disc(lon, lat, radius_km(&feature)))
        }
        Value::Polygon(rings) => {
            let ring = rings.first().ok_or_else(|| ShipscopeError::InvalidGeometry {
                reason: "polygon has no linear ring".to_string(),
            })?;
            let vertices = ring
                .iter()
                .map(|position| position_lon_lat(position).map(|(lon, lat)| [lon, lat]))
                .collect::<Result<Vec<_>>>()?;
            AreaShape::polygon(vertices)
        }
        other => Err(ShipscopeError::InvalidGeometry {
            reason: format!("unsupported geometry kind: {}", kind_name(other)),
        }),
    }
}

fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Point(_) => "Point",
        Value::MultiPoint(_) => "MultiPoint",
        Value::LineString(_) => "LineString",
        Value::MultiLineString(_) => "MultiLineString",
        Value::Polygon(_) => "Polygon",
        Value::MultiPolygon(_) => "MultiPolygon",
        Value::GeometryCollection(_) => "GeometryCollection",
    }
}

fn position_lon_lat(position: &[f64]) -> Result<(f64, f64)> {
    match position {
        [lon, lat, ..] => Ok((*lon, *lat)),
        _ => Err(ShipscopeError::InvalidGeometry {
            reason: format!("position needs 2 coordinates, got {}", position.len()),
        }),
    }
}

/// Read the disc radius (km) from the feature's `radius` property.
///
/// A missing or unparseable radius is recovered as 0, which degenerates the
/// disc to a point; the selection itself stays usable.
fn radius_km(feature: &Feature) -> f64 {
    let Some(value) = feature.properties.as_ref().and_then(|props| props.get("radius")) else {
        return 0.0;
    };

    let parsed = match value {
        serde_json::Value::Number(n) => n.as_f64(),
        serde_json::Value::String(s) => s.parse().ok(),
        _ => None,
    };

    parsed.unwrap_or_else(|| {
        warn!(?value, "invalid radius property, defaulting to 0");
        0.0
    })
}
