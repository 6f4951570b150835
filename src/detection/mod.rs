pub mod contours;
pub mod preprocessing;
pub mod shapes;
pub mod verdict;

use anyhow::Result;
use image::DynamicImage;
use std::path::Path;

use crate::diagnostics::DiagnosticSink;
use crate::source::ImageSource;

/// Main placement-check pipeline orchestrator.
///
/// Each call owns its data end to end: raw image -> edge mask -> classified
/// contours -> reduced shapes -> verdict, strictly forward, no shared state.
/// Independent images can be checked in parallel with one pipeline value.
pub struct PlacementPipeline {
    pub verbose: bool,
}

impl PlacementPipeline {
    pub fn new() -> Self {
        Self { verbose: false }
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Run the full placement check on a decoded image.
    ///
    /// Returns `Ok(false)` with a single diagnostic line when no polygon was
    /// classified or no objects were found; that is a recovered terminal
    /// state, not a fault.
    pub fn check(&self, img: &DynamicImage, diagnostics: &mut dyn DiagnosticSink) -> Result<bool> {
        if self.verbose {
            println!("Extracting edges...");
        }
        let mask = preprocessing::extract_edges(img);

        if self.verbose {
            println!("Classifying contours...");
        }
        let classified = contours::classify_contours(&mask);

        if self.verbose {
            println!(
                "Polygon found: {}, objects found: {}",
                classified.polygon.is_some(),
                classified.objects.len()
            );
        }

        let Some(polygon) = classified.polygon else {
            diagnostics.emit("Can't find polygon or objects");
            return Ok(false);
        };
        if classified.objects.is_empty() {
            diagnostics.emit("Can't find polygon or objects");
            return Ok(false);
        }

        if self.verbose {
            println!("Reducing shapes...");
        }
        let rects = shapes::min_rects(&classified.objects);
        let approx = shapes::approx_polygon(&polygon);

        Ok(verdict::objects_fit(&approx, &rects))
    }

    /// Acquire an image from the source collaborator and check it.
    pub fn check_path(
        &self,
        source: &dyn ImageSource,
        path: &Path,
        diagnostics: &mut dyn DiagnosticSink,
    ) -> Result<bool> {
        let img = source.load(path)?;
        self.check(&img, diagnostics)
    }
}

impl Default for PlacementPipeline {
    fn default() -> Self {
        Self::new()
    }
}
