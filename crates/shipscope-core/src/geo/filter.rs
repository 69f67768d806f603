//! Area membership filtering.

use crate::geo::shape::{AreaShape, BoundingBox};
use tracing::debug;

/// Keep the candidates whose `(lon, lat)` position lies inside the shape.
///
/// Input order is preserved, which makes the result deterministic for
/// identical input. The ids are whatever the caller keys vessels by.
pub fn filter_positions<'a>(
    shape: &AreaShape,
    positions: &'a [(String, f64, f64)],
) -> Vec<&'a str> {
    let inside: Vec<&str> = positions
        .iter()
        .filter(|(_, lon, lat)| shape.contains(*lon, *lat))
        .map(|(id, _, _)| id.as_str())
        .collect();

    debug!(candidates = positions.len(), inside = inside.len(), "filtered positions by shape");
    inside
}

/// Bounding box of the selected shape.
///
/// Used to scope an upstream query to a rectangle before the exact membership
/// test; fetching by box is cheaper than by polygon. The exact shape filter
/// stays authoritative, the box is only a pre-filter.
pub fn bounding_box(shape: &AreaShape) -> BoundingBox {
    shape.bounds()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn positions() -> Vec<(String, f64, f64)> {
        vec![
            // At the disc center
            ("244615000".to_string(), 4.9, 52.37),
            // ~50 km north of it
            ("205196000".to_string(), 4.9, 52.82),
            // Just inside the 5 km radius
            ("211331640".to_string(), 4.93, 52.38),
        ]
    }

    #[test]
    fn test_disc_membership() {
        let disc = AreaShape::disc(4.9, 52.37, 5.0);
        let positions = positions();
        let inside = filter_positions(&disc, &positions);

        assert_eq!(inside, vec!["244615000", "211331640"]);
    }

    #[test]
    fn test_order_is_input_order() {
        let everything = AreaShape::polygon(vec![
            [-180.0, -85.0],
            [180.0, -85.0],
            [180.0, 85.0],
            [-180.0, 85.0],
        ])
        .unwrap();

        let positions = positions();
        let ids = filter_positions(&everything, &positions);
        assert_eq!(ids, vec!["244615000", "205196000", "211331640"]);
    }

    #[test]
    fn test_bounding_box_delegates_to_shape() {
        let disc = AreaShape::disc(4.9, 52.37, 5.0);
        assert_eq!(bounding_box(&disc), disc.bounds());
    }
}
