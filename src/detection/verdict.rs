use imageproc::point::Point;

use crate::models::{shoelace_area, BoundingRect};

/// Area-sum sufficiency check: the polygon's footprint must strictly exceed
/// the summed object rectangle footprint.
///
/// This is a coarse heuristic, not a geometric containment test; it never
/// verifies that objects actually lie inside the polygon. Ties resolve to
/// false.
pub fn objects_fit(polygon: &[Point<i32>], rects: &[BoundingRect]) -> bool {
    let object_area: f64 = rects.iter().map(BoundingRect::area).sum();
    shoelace_area(polygon) > object_area
}
