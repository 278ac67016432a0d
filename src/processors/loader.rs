// image-optimizer/src/processors/loader.rs
use crate::core::{ImageToolError, Result};
use image::{DynamicImage, GenericImageView, ImageReader};
use std::path::Path;

const MAX_DECODE_DIMENSION: u32 = 100_000;

#[derive(Clone)]
pub struct Loader {
    max_dimension: u32,
}

impl Loader {
    pub fn new() -> Self {
        Self {
            max_dimension: MAX_DECODE_DIMENSION,
        }
    }

    /// Decodes `path`, guessing the codec from its content. A missing
    /// file is reported as a decode failure like any other unreadable one.
    pub fn load(&self, path: &Path) -> Result<DynamicImage> {
        log::debug!("Loading image from: {}", path.display());

        let image = ImageReader::open(path)
            .map_err(image::ImageError::IoError)
            .and_then(|reader| reader.with_guessed_format().map_err(image::ImageError::IoError))
            .and_then(|reader| reader.decode())
            .map_err(|source| ImageToolError::Decode {
                path: path.to_path_buf(),
                source,
            })?;

        let (width, height) = image.dimensions();

        if width > self.max_dimension || height > self.max_dimension {
            return Err(ImageToolError::Decode {
                path: path.to_path_buf(),
                source: image::ImageError::Limits(image::error::LimitError::from_kind(
                    image::error::LimitErrorKind::DimensionError,
                )),
            });
        }

        log::debug!(
            "Loaded image: {}x{} pixels, color: {:?}",
            width,
            height,
            image.color()
        );

        Ok(image)
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}
