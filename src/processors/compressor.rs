// image-optimizer/src/processors/compressor.rs
use crate::core::{ImageToolError, OutputFormat, OutputTarget, Result};
use crate::utils::format_file_size;
use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use image::{ColorType, DynamicImage};
use std::io::Cursor;
use std::path::Path;

pub struct Compressor;

impl Compressor {
    pub fn new() -> Self {
        Self
    }

    /// Encodes fully in memory before touching the disk, so a failed encode
    /// leaves whatever was at `target.final_path` intact.
    pub fn save(&self, image: &DynamicImage, target: &OutputTarget) -> Result<u64> {
        let path = target.final_path.as_path();

        log::debug!(
            "Saving image to {} with format {:?}",
            path.display(),
            target.format
        );

        let data = self.compress_to_bytes(image, target.format, path)?;

        std::fs::write(path, &data).map_err(|source| ImageToolError::Write {
            path: path.to_path_buf(),
            source,
        })?;

        let size = data.len() as u64;
        log::debug!("Saved image: {} ({})", path.display(), format_file_size(size));
        Ok(size)
    }

    pub fn compress_to_bytes(
        &self,
        image: &DynamicImage,
        format: OutputFormat,
        path: &Path,
    ) -> Result<Vec<u8>> {
        let mut buffer = Cursor::new(Vec::new());

        let encoded = match format {
            OutputFormat::Jpeg { quality } => {
                let encoder = JpegEncoder::new_with_quality(&mut buffer, quality.clamp(1, 100));
                without_alpha(image).write_with_encoder(encoder)
            }
            OutputFormat::Png => image.write_with_encoder(PngEncoder::new(&mut buffer)),
        };

        encoded.map_err(|source| ImageToolError::Encode {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(buffer.into_inner())
    }
}

impl Default for Compressor {
    fn default() -> Self {
        Self::new()
    }
}

/// JPEG has no alpha channel and no 16-bit samples.
fn without_alpha(image: &DynamicImage) -> std::borrow::Cow<'_, DynamicImage> {
    use std::borrow::Cow;

    match image.color() {
        ColorType::L8 | ColorType::Rgb8 => Cow::Borrowed(image),
        ColorType::La8 | ColorType::L16 | ColorType::La16 => {
            Cow::Owned(DynamicImage::ImageLuma8(image.to_luma8()))
        }
        _ => Cow::Owned(DynamicImage::ImageRgb8(image.to_rgb8())),
    }
}
