use image::GrayImage;
use imageproc::contours::{self, BorderType};

use crate::models::{ClassifiedContours, Contour};

// Scene-specific calibration constants, in source pixel coordinates.
// The printed outline sits in the upper region of the frame; the bottom
// paper edge crosses the 600..750 band.
const POLYGON_Y_LIMIT: i32 = 750;
const BORDER_BAND_LOW: i32 = 600;
const BORDER_BAND_HIGH: i32 = 750;
const MIN_POLYGON_AREA: f64 = 3000.0;
const MIN_OBJECT_AREA: f64 = 500.0;

/// Extract the external (outermost) contours of the edge mask. Holes are
/// ignored; classification only ever looks at outer boundaries.
pub fn find_external_contours(mask: &GrayImage) -> Vec<Contour> {
    contours::find_contours::<i32>(mask)
        .into_iter()
        .filter(|c| c.border_type == BorderType::Outer)
        .map(|c| Contour::new(c.points))
        .collect()
}

/// Every point of the contour lies above the bottom paper edge (y < 750).
pub fn is_polygon_shaped(contour: &Contour) -> bool {
    contour.points.iter().all(|p| p.y < POLYGON_Y_LIMIT)
}

/// At least one point of the contour escapes the 600..750 paper-border band.
///
/// Inherited quirk: the source system named this check "is paper border" but
/// its truth table is the inverse of that name, and the result gates the
/// polygon rather than excluding borders. The literal behavior is load-bearing
/// and must not be "fixed": all strictly inside the band => false, any point
/// outside => true.
pub fn escapes_border_band(contour: &Contour) -> bool {
    !contour
        .points
        .iter()
        .all(|p| p.y > BORDER_BAND_LOW && p.y < BORDER_BAND_HIGH)
}

/// Partition external contours into at most one polygon plus a set of
/// objects.
///
/// Polygon: polygon-shaped, area over 3000 px^2, and escapes the border band.
/// When several contours qualify, the last one in extraction order wins.
/// Object: not polygon-shaped and area over 500 px^2; no upper bound and no
/// band filter. Everything else is dropped.
pub fn classify_contours(mask: &GrayImage) -> ClassifiedContours {
    classify(find_external_contours(mask))
}

/// Classification over an already-extracted contour sequence; order matters
/// for the last-match-wins polygon rule.
pub fn classify(contours: Vec<Contour>) -> ClassifiedContours {
    let mut polygon = None;
    let mut objects = Vec::new();

    for contour in contours {
        if is_polygon_shaped(&contour)
            && contour.area() > MIN_POLYGON_AREA
            && escapes_border_band(&contour)
        {
            polygon = Some(contour);
        } else if !is_polygon_shaped(&contour) && contour.area() > MIN_OBJECT_AREA {
            objects.push(contour);
        }
    }

    ClassifiedContours { polygon, objects }
}
