//! Spatial operations: region shapes, area filtering, and footprint distance.

pub mod filter;
pub mod footprint;
pub mod region;
pub mod shape;

// Re-export key types for convenience
pub use filter::{bounding_box, filter_positions};
pub use footprint::{haversine_m, min_distance, rectangle_corners, EARTH_RADIUS_M, METERS_PER_DEGREE};
pub use region::parse_region;
pub use shape::{AreaShape, BoundingBox, KM_PER_DEGREE};
