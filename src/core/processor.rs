// image-optimizer/src/core/processor.rs
use super::{Destination, ImageToolError, OptimizationProfile, OutputTarget, Result};
use crate::processors::{ColorProcessor, Compressor, Loader, OutputLocator, Resizer};
use std::path::Path;

/// Runs one file through decode, color transform, bounded resize and encode.
pub struct ImageProcessor {
    target_dimension: u32,
    loader: Loader,
    color: ColorProcessor,
    resizer: Resizer,
    compressor: Compressor,
    locator: OutputLocator,
}

impl ImageProcessor {
    pub fn new(profile: OptimizationProfile, max_dimension: u32, destination: Destination) -> Self {
        Self {
            target_dimension: profile.target_dimension(max_dimension),
            loader: Loader::new(),
            color: ColorProcessor::new(profile.color_transform()),
            resizer: Resizer::new(profile.resize_algorithm()),
            compressor: Compressor::new(),
            locator: OutputLocator::new(profile, destination),
        }
    }

    pub fn destination(&self) -> &Destination {
        self.locator.destination()
    }

    pub fn process<P: AsRef<Path>>(&self, input_path: P) -> Result<OutputTarget> {
        let input_path = input_path.as_ref();

        let image = self.loader.load(input_path)?;
        let image = self.color.apply(image);
        let image = self.resizer.fit(image, self.target_dimension);

        let target = self.locator.target_for(input_path)?;
        self.compressor.save(&image, &target)?;

        if self.destination().is_in_place() {
            self.remove_replaced_source(input_path, &target)?;
        }

        Ok(target)
    }

    /// In place, a renamed output (`.gif` -> `.png`, or any `app` source)
    /// replaces its source. Names equal up to case are left alone since they
    /// may be the same file.
    fn remove_replaced_source(&self, input_path: &Path, target: &OutputTarget) -> Result<()> {
        let same_name = input_path
            .to_string_lossy()
            .eq_ignore_ascii_case(&target.final_path.to_string_lossy());
        if same_name {
            return Ok(());
        }

        log::debug!(
            "Removing {} replaced by {}",
            input_path.display(),
            target.final_path.display()
        );
        std::fs::remove_file(input_path).map_err(|source| ImageToolError::Write {
            path: input_path.to_path_buf(),
            source,
        })
    }
}
