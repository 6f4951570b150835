use imageproc::geometry::{approximate_polygon_dp, arc_length, min_area_rect};
use imageproc::point::Point;

use crate::models::{BoundingRect, Contour};

/// Simplification tolerance as a fraction of the closed perimeter.
const APPROX_TOLERANCE: f64 = 0.01;

/// Minimum-area rotated rectangle around one object contour.
///
/// Contours too small to span a rectangle collapse to a degenerate
/// zero-area rectangle instead of failing.
pub fn min_rect(contour: &Contour) -> BoundingRect {
    if contour.points.len() < 3 {
        return BoundingRect {
            corners: [Point::new(0, 0); 4],
        };
    }

    BoundingRect {
        corners: min_area_rect(&contour.points),
    }
}

/// One rectangle per object contour, order preserved.
pub fn min_rects(objects: &[Contour]) -> Vec<BoundingRect> {
    objects.iter().map(min_rect).collect()
}

/// Simplify the polygon contour to its corners with Ramer-Douglas-Peucker,
/// closed-curve mode, tolerance 1% of the perimeter.
///
/// This strips vertex noise left by the smoothing and closing steps before
/// the area is recomputed; it is a robustness step, not a semantic change.
pub fn approx_polygon(contour: &Contour) -> Vec<Point<i32>> {
    if contour.points.len() < 3 {
        return contour.points.clone();
    }

    let epsilon = APPROX_TOLERANCE * arc_length(&contour.points, true);
    approximate_polygon_dp(&contour.points, epsilon, true)
}
