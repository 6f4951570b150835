use image::{DynamicImage, GrayImage, Luma};
use imageproc::distance_transform::Norm;
use imageproc::edges::canny;
use imageproc::filter::gaussian_blur_f32;
use imageproc::morphology::close;
use std::collections::VecDeque;

/// Smoothing applied before edge detection; tuned to suppress sensor noise
/// while keeping printed-line edges.
const EDGE_SIGMA: f32 = 3.0;
const CANNY_LOW: f32 = 50.0;
const CANNY_HIGH: f32 = 100.0;
/// Chebyshev radius of the closing element; a 21x21 square, large enough to
/// bridge small gaps so outlines become closed curves.
const CLOSING_RADIUS: u8 = 10;

/// Convert image to grayscale
pub fn to_grayscale(img: &DynamicImage) -> GrayImage {
    img.to_luma8()
}

/// Detect edges: Gaussian smoothing followed by Canny
pub fn detect_edges(gray: &GrayImage) -> GrayImage {
    let blurred = gaussian_blur_f32(gray, EDGE_SIGMA);
    canny(&blurred, CANNY_LOW, CANNY_HIGH)
}

/// Bridge small gaps in the edge map with a morphological closing
pub fn close_edges(edges: &GrayImage) -> GrayImage {
    close(edges, Norm::LInf, CLOSING_RADIUS)
}

/// Fill every fully enclosed region so each closed outline becomes a solid
/// blob.
///
/// Background is flood-filled from the image border; any background pixel the
/// fill never reaches is enclosed by foreground and gets promoted to 255.
/// Downstream contour extraction traces boundaries of filled regions, not
/// hollow rings.
pub fn fill_holes(mask: &GrayImage) -> GrayImage {
    let (width, height) = mask.dimensions();
    let mut filled = mask.clone();
    if width == 0 || height == 0 {
        return filled;
    }

    let idx = |x: u32, y: u32| (y * width + x) as usize;
    let mut outside = vec![false; (width * height) as usize];
    let mut queue: VecDeque<(u32, u32)> = VecDeque::new();

    // Seed the fill with every background pixel on the image border.
    for x in 0..width {
        for y in [0, height - 1] {
            if mask.get_pixel(x, y)[0] == 0 && !outside[idx(x, y)] {
                outside[idx(x, y)] = true;
                queue.push_back((x, y));
            }
        }
    }
    for y in 0..height {
        for x in [0, width - 1] {
            if mask.get_pixel(x, y)[0] == 0 && !outside[idx(x, y)] {
                outside[idx(x, y)] = true;
                queue.push_back((x, y));
            }
        }
    }

    while let Some((x, y)) = queue.pop_front() {
        let mut neighbours = Vec::with_capacity(4);
        if x > 0 {
            neighbours.push((x - 1, y));
        }
        if x + 1 < width {
            neighbours.push((x + 1, y));
        }
        if y > 0 {
            neighbours.push((x, y - 1));
        }
        if y + 1 < height {
            neighbours.push((x, y + 1));
        }

        for (nx, ny) in neighbours {
            if mask.get_pixel(nx, ny)[0] == 0 && !outside[idx(nx, ny)] {
                outside[idx(nx, ny)] = true;
                queue.push_back((nx, ny));
            }
        }
    }

    for y in 0..height {
        for x in 0..width {
            if mask.get_pixel(x, y)[0] == 0 && !outside[idx(x, y)] {
                filled.put_pixel(x, y, Luma([255]));
            }
        }
    }

    filled
}

/// Full edge-extraction stage: color image in, {0, 255} mask of the same
/// dimensions out. An image with no detectable edges yields a blank mask;
/// that is not an error and propagates as "nothing found" downstream.
pub fn extract_edges(img: &DynamicImage) -> GrayImage {
    let gray = to_grayscale(img);
    let edges = detect_edges(&gray);
    let closed = close_edges(&edges);
    fill_holes(&closed)
}
