//! Region shapes: discs and polygons with containment and bounds queries.

use crate::error::{Result, ShipscopeError};
use geo::algorithm::intersects::Intersects;
use geo::{Coord, LineString, Point, Polygon};
use serde::{Deserialize, Serialize};

/// Kilometers spanned by one degree of latitude. Fixed-latitude approximation
/// used to buffer a disc radius into degrees; acceptable for regional,
/// non-polar areas.
pub const KM_PER_DEGREE: f64 = 111.32;

/// Axis-aligned bounding box in degrees (min corner to max corner).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min_lon: f64,
    pub min_lat: f64,
    pub max_lon: f64,
    pub max_lat: f64,
}

impl BoundingBox {
    /// Check whether a point lies inside the box, boundary inclusive.
    pub fn contains(&self, lon: f64, lat: f64) -> bool {
        lon >= self.min_lon && lon <= self.max_lon && lat >= self.min_lat && lat <= self.max_lat
    }
}

/// A closed 2-D region on the lon/lat plane, selected by the user once per
/// session and immutable afterwards.
#[derive(Debug, Clone)]
pub enum AreaShape {
    /// Circular region: center plus radius in kilometers. A radius ≤ 0
    /// degenerates to a zero-area point rather than failing.
    Disc { center: Point<f64>, radius_km: f64 },
    /// Arbitrary polygon, implicitly closed.
    Polygon(Polygon<f64>),
}

impl AreaShape {
    /// Create a disc from a center (lon, lat) and radius in kilometers.
    pub fn disc(lon: f64, lat: f64, radius_km: f64) -> Self {
        AreaShape::Disc { center: Point::new(lon, lat), radius_km }
    }

    /// Create a polygon from an ordered `[lon, lat]` vertex ring.
    ///
    /// The ring may be given open or explicitly closed; either way at least
    /// three distinct vertices are required, otherwise the shape is rejected
    /// with [`ShipscopeError::InvalidGeometry`].
    pub fn polygon(vertices: Vec<[f64; 2]>) -> Result<Self> {
        let distinct = if vertices.len() > 1 && vertices.first() == vertices.last() {
            vertices.len() - 1
        } else {
            vertices.len()
        };
        if distinct < 3 {
            return Err(ShipscopeError::InvalidGeometry {
                reason: format!("polygon needs at least 3 vertices, got {distinct}"),
            });
        }

        let exterior: LineString<f64> =
            vertices.into_iter().map(|[lon, lat]| Coord { x: lon, y: lat }).collect();
        Ok(AreaShape::Polygon(Polygon::new(exterior, vec![])))
    }

    /// Point-containment test, boundary inclusive.
    pub fn contains(&self, lon: f64, lat: f64) -> bool {
        match self {
            AreaShape::Disc { center, radius_km } => {
                // Planar degree distance against the same km-to-degree buffer
                // the bounding box uses, so the two stay consistent.
                let radius_deg = radius_km.max(0.0) / KM_PER_DEGREE;
                let dx = lon - center.x();
                let dy = lat - center.y();
                (dx * dx + dy * dy).sqrt() <= radius_deg
            }
            // Intersects rather than Contains: points exactly on an edge
            // count as inside.
            AreaShape::Polygon(polygon) => polygon.intersects(&Point::new(lon, lat)),
        }
    }

    /// Tight axis-aligned bounding box around the shape.
    pub fn bounds(&self) -> BoundingBox {
        match self {
            AreaShape::Disc { center, radius_km } => {
                let buffer_deg = radius_km.max(0.0) / KM_PER_DEGREE;
                BoundingBox {
                    min_lon: center.x() - buffer_deg,
                    min_lat: center.y() - buffer_deg,
                    max_lon: center.x() + buffer_deg,
                    max_lat: center.y() + buffer_deg,
                }
            }
            AreaShape::Polygon(polygon) => {
                let mut coords = polygon.exterior().coords();
                // Construction guarantees at least three vertices.
                let first = coords.next().copied().unwrap_or(Coord { x: 0.0, y: 0.0 });
                coords.fold(
                    BoundingBox {
                        min_lon: first.x,
                        min_lat: first.y,
                        max_lon: first.x,
                        max_lat: first.y,
                    },
                    |bbox, c| BoundingBox {
                        min_lon: bbox.min_lon.min(c.x),
                        min_lat: bbox.min_lat.min(c.y),
                        max_lon: bbox.max_lon.max(c.x),
                        max_lat: bbox.max_lat.max(c.y),
                    },
                )
            }
        }
    }
}
