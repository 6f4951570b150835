use imageproc::point::Point;

/// Shoelace area of a closed point sequence, magnitude only.
///
/// A duplicate closing point contributes a zero term, so sequences with or
/// without one give the same result. Fewer than 3 points is degenerate and
/// yields 0.0.
pub fn shoelace_area(points: &[Point<i32>]) -> f64 {
    if points.len() < 3 {
        return 0.0;
    }

    let mut twice_area: i64 = 0;
    for (i, p) in points.iter().enumerate() {
        let q = &points[(i + 1) % points.len()];
        twice_area += p.x as i64 * q.y as i64 - q.x as i64 * p.y as i64;
    }

    (twice_area.abs() as f64) / 2.0
}

/// Closed boundary traced around one connected region of the edge mask.
///
/// Contours have no identity beyond their point sequence and are never
/// mutated after creation.
#[derive(Debug, Clone)]
pub struct Contour {
    pub points: Vec<Point<i32>>,
}

impl Contour {
    pub fn new(points: Vec<Point<i32>>) -> Self {
        Self { points }
    }

    /// Enclosed area over the raw point sequence.
    pub fn area(&self) -> f64 {
        shoelace_area(&self.points)
    }
}

/// Minimal-area rotated rectangle enclosing one object contour.
#[derive(Debug, Clone)]
pub struct BoundingRect {
    pub corners: [Point<i32>; 4],
}

impl BoundingRect {
    pub fn area(&self) -> f64 {
        shoelace_area(&self.corners)
    }
}

/// Partition of an edge mask's external contours.
///
/// At most one polygon per image. An empty object set is a meaningful
/// "no objects detected" state, not an error.
#[derive(Debug, Clone, Default)]
pub struct ClassifiedContours {
    pub polygon: Option<Contour>,
    pub objects: Vec<Contour>,
}
