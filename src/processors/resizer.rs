// image-optimizer/src/processors/resizer.rs
use crate::core::ResizeAlgorithm;
use image::{imageops::FilterType, DynamicImage, GenericImageView};

pub struct Resizer {
    algorithm: ResizeAlgorithm,
}

impl Resizer {
    pub fn new(algorithm: ResizeAlgorithm) -> Self {
        Self { algorithm }
    }

    /// Shrinks `image` to fit a `target`x`target` box. Images already inside
    /// the box, and a zero target, pass through untouched.
    pub fn fit(&self, image: DynamicImage, target: u32) -> DynamicImage {
        let (orig_width, orig_height) = image.dimensions();
        let (width, height) = fit_dimensions(orig_width, orig_height, target);

        if width == orig_width && height == orig_height {
            log::debug!("Image dimensions unchanged, skipping resize");
            return image;
        }

        log::debug!(
            "Resizing image from {}x{} to {}x{} ({:?})",
            orig_width,
            orig_height,
            width,
            height,
            self.algorithm
        );

        image.resize_exact(width, height, self.filter_type())
    }

    fn filter_type(&self) -> FilterType {
        match self.algorithm {
            ResizeAlgorithm::CatmullRom => FilterType::CatmullRom,
            ResizeAlgorithm::Lanczos3 => FilterType::Lanczos3,
        }
    }
}

/// Dimensions of a `width`x`height` image fitted into a square box of side
/// `target`, rounding the shorter side to the nearest pixel.
pub fn fit_dimensions(width: u32, height: u32, target: u32) -> (u32, u32) {
    if target == 0 || (width <= target && height <= target) {
        return (width, height);
    }

    let scale = |short: u32, long: u32| -> u32 {
        let scaled = (short as u64 * target as u64 + long as u64 / 2) / long as u64;
        (scaled as u32).clamp(1, target)
    };

    if width >= height {
        (target, scale(height, width))
    } else {
        (scale(width, height), target)
    }
}
