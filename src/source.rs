use anyhow::{Context, Result};
use image::{DynamicImage, ImageReader};
use std::path::Path;

/// Supplies decoded images to the pipeline.
///
/// The core never touches the filesystem itself; acquiring the image is the
/// only resource acquisition of a verification call and is scoped to that
/// call. Decode failures surface here as errors, fatal to the one call only.
pub trait ImageSource {
    /// Decode a single image from a path.
    fn load(&self, path: &Path) -> Result<DynamicImage>;

    /// Decode every file in a directory, in traversal order.
    fn load_dir(&self, dir: &Path) -> Result<Vec<DynamicImage>>;
}

/// Filesystem-backed image source.
pub struct FsImageSource;

impl ImageSource for FsImageSource {
    fn load(&self, path: &Path) -> Result<DynamicImage> {
        let img = ImageReader::open(path)
            .with_context(|| format!("Failed to open image: {}", path.display()))?
            .decode()
            .map_err(|e| anyhow::anyhow!("Failed to decode image {}: {}", path.display(), e))?;
        Ok(img)
    }

    fn load_dir(&self, dir: &Path) -> Result<Vec<DynamicImage>> {
        let mut images = Vec::new();
        for entry in std::fs::read_dir(dir)
            .with_context(|| format!("Failed to read directory: {}", dir.display()))?
        {
            let entry = entry?;
            if entry.file_type()?.is_file() {
                images.push(self.load(&entry.path())?);
            }
        }
        Ok(images)
    }
}
