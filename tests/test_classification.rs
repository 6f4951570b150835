use imageproc::point::Point;

use sheetcheck::detection::{contours, shapes, verdict};
use sheetcheck::models::Contour;

/// Corner sequence of an axis-aligned rectangle, counter-clockwise.
fn rect_contour(x0: i32, y0: i32, x1: i32, y1: i32) -> Contour {
    Contour::new(vec![
        Point::new(x0, y0),
        Point::new(x0, y1),
        Point::new(x1, y1),
        Point::new(x1, y0),
    ])
}

#[test]
fn polygon_shaped_requires_every_point_above_limit() {
    let upper = rect_contour(100, 100, 400, 300);
    assert!(contours::is_polygon_shaped(&upper));

    // y = 749 is still inside, y = 750 is not (strict inequality).
    let boundary = rect_contour(100, 700, 400, 749);
    assert!(contours::is_polygon_shaped(&boundary));

    let touching = rect_contour(100, 700, 400, 750);
    assert!(!contours::is_polygon_shaped(&touching));
}

#[test]
fn border_band_predicate_matches_literal_truth_table() {
    // All points strictly inside the 600..750 band: false.
    let inside_band = rect_contour(100, 601, 400, 749);
    assert!(!contours::escapes_border_band(&inside_band));

    // A single point outside the band flips it to true.
    let one_above = rect_contour(100, 500, 400, 749);
    assert!(contours::escapes_border_band(&one_above));

    let one_below = rect_contour(100, 601, 400, 800);
    assert!(contours::escapes_border_band(&one_below));

    // Band bounds are exclusive: y = 600 already counts as outside.
    let on_lower_bound = rect_contour(100, 600, 400, 749);
    assert!(contours::escapes_border_band(&on_lower_bound));
}

#[test]
fn qualifying_contour_is_classified_as_polygon() {
    let polygon = rect_contour(100, 100, 400, 300); // area 60000
    let classified = contours::classify(vec![polygon]);

    let found = classified.polygon.expect("polygon should be classified");
    assert_eq!(found.area(), 60000.0);
    assert!(classified.objects.is_empty());
}

#[test]
fn last_qualifying_polygon_wins() {
    let first = rect_contour(100, 100, 400, 300); // area 60000
    let second = rect_contour(500, 100, 700, 200); // area 20000
    let classified = contours::classify(vec![first, second]);

    let found = classified.polygon.expect("polygon should be classified");
    assert_eq!(found.area(), 20000.0);
}

#[test]
fn small_upper_contour_is_dropped_entirely() {
    // Polygon-shaped but under the 3000 px^2 area floor; polygon-shaped
    // contours never qualify as objects either.
    let small = rect_contour(100, 100, 130, 120); // area 600
    let classified = contours::classify(vec![small]);

    assert!(classified.polygon.is_none());
    assert!(classified.objects.is_empty());
}

#[test]
fn object_requires_area_strictly_over_floor() {
    // Reaches below y = 750, area exactly 500: excluded.
    let at_floor = rect_contour(0, 800, 20, 825);
    assert_eq!(at_floor.area(), 500.0);
    let classified = contours::classify(vec![at_floor]);
    assert!(classified.objects.is_empty());

    // Area 600: included, and never considered for the polygon slot.
    let over_floor = rect_contour(100, 740, 130, 760);
    assert_eq!(over_floor.area(), 600.0);
    let classified = contours::classify(vec![over_floor]);
    assert!(classified.polygon.is_none());
    assert_eq!(classified.objects.len(), 1);
}

#[test]
fn band_confined_contour_never_becomes_polygon() {
    // Polygon-shaped and large, but confined to the 600..750 band, so the
    // band predicate disqualifies it.
    let confined = rect_contour(100, 610, 400, 740); // area 39000
    let classified = contours::classify(vec![confined]);
    assert!(classified.polygon.is_none());
}

#[test]
fn scenario_large_polygon_small_object_fits() {
    let polygon = rect_contour(100, 100, 400, 300); // area 60000
    let object = rect_contour(100, 740, 130, 760); // area 600
    let classified = contours::classify(vec![polygon, object]);

    let polygon = classified.polygon.expect("polygon should be classified");
    assert_eq!(classified.objects.len(), 1);

    let rects = shapes::min_rects(&classified.objects);
    let approx = shapes::approx_polygon(&polygon);
    assert!(verdict::objects_fit(&approx, &rects));
}

#[test]
fn scenario_object_larger_than_polygon_fails() {
    let polygon = rect_contour(100, 100, 400, 300); // area 60000
    let object = rect_contour(100, 600, 450, 800); // area 70000
    let classified = contours::classify(vec![polygon, object]);

    let polygon = classified.polygon.expect("polygon should be classified");
    let rects = shapes::min_rects(&classified.objects);
    let approx = shapes::approx_polygon(&polygon);
    assert!(!verdict::objects_fit(&approx, &rects));
}

#[test]
fn equal_areas_resolve_to_false() {
    // Strict inequality: a tie is a rejection. The rectangle is built from
    // exact corners so both areas are precisely 60000.
    let polygon = rect_contour(100, 100, 400, 300); // area 60000
    let rect = sheetcheck::BoundingRect {
        corners: [
            Point::new(100, 600),
            Point::new(100, 800),
            Point::new(400, 800),
            Point::new(400, 600),
        ],
    };
    assert_eq!(rect.area(), 60000.0);

    assert!(!verdict::objects_fit(&polygon.points, &[rect]));
}

#[test]
fn approximation_preserves_area_of_convex_polygon() {
    // Dense pixel-step trace of a 300x200 rectangle boundary; the simplifier
    // should collapse the collinear runs without moving the corners.
    let mut points = Vec::new();
    for x in 100..400 {
        points.push(Point::new(x, 100));
    }
    for y in 100..300 {
        points.push(Point::new(400, y));
    }
    for x in (101..=400).rev() {
        points.push(Point::new(x, 300));
    }
    for y in (101..=300).rev() {
        points.push(Point::new(100, y));
    }
    let contour = Contour::new(points);
    let original_area = contour.area();
    assert!(original_area > 1000.0);

    let approx = shapes::approx_polygon(&contour);
    assert!(approx.len() < contour.points.len());

    let approx_area = sheetcheck::models::shoelace_area(&approx);
    let relative_error = (approx_area - original_area).abs() / original_area;
    assert!(
        relative_error < 0.05,
        "approximated area {} drifted from {}",
        approx_area,
        original_area
    );
}

#[test]
fn degenerate_contours_yield_defined_results() {
    let two_points = Contour::new(vec![Point::new(0, 0), Point::new(10, 10)]);
    assert_eq!(two_points.area(), 0.0);

    let rect = shapes::min_rect(&two_points);
    assert_eq!(rect.area(), 0.0);

    let approx = shapes::approx_polygon(&two_points);
    assert_eq!(approx.len(), 2);

    // Verdict arithmetic stays well-defined: zero polygon area never exceeds
    // a zero object sum.
    assert!(!verdict::objects_fit(&approx, &[rect]));
}
