// image-optimizer/src/processors/locator.rs
use crate::core::{
    Destination, ImageToolError, OptimizationProfile, OutputFormat, OutputTarget,
    ProcessingRequest, Result,
};
use crate::utils::{get_file_extension, with_png_extension};
use std::path::{Path, PathBuf};

pub const DEFAULT_OUTPUT_DIR: &str = "optimized";

pub struct OutputLocator {
    profile: OptimizationProfile,
    destination: Destination,
}

impl OutputLocator {
    pub fn new(profile: OptimizationProfile, destination: Destination) -> Self {
        Self {
            profile,
            destination,
        }
    }

    pub fn destination(&self) -> &Destination {
        &self.destination
    }

    /// Final path and container format for one input file.
    pub fn target_for(&self, input_path: &Path) -> Result<OutputTarget> {
        let base = match &self.destination {
            Destination::InPlace(_) => input_path.to_path_buf(),
            Destination::Directory(dir) => {
                let file_name = input_path.file_name().ok_or_else(|| ImageToolError::Write {
                    path: input_path.to_path_buf(),
                    source: std::io::Error::new(
                        std::io::ErrorKind::InvalidInput,
                        "kein Dateiname",
                    ),
                })?;
                dir.join(file_name)
            }
        };

        let format = output_format(self.profile, input_path);
        let final_path = match (format, get_file_extension(input_path).as_deref()) {
            _ if self.profile.forces_png() => with_png_extension(&base),
            (OutputFormat::Png, Some("png")) => base,
            (OutputFormat::Png, _) => with_png_extension(&base),
            (OutputFormat::Jpeg { .. }, _) => base,
        };

        Ok(OutputTarget { final_path, format })
    }
}

/// Format policy: `app` always writes PNG, JPEG sources stay JPEG at the
/// profile's quality, everything else becomes PNG.
pub fn output_format(profile: OptimizationProfile, input_path: &Path) -> OutputFormat {
    if profile.forces_png() {
        return OutputFormat::Png;
    }

    match get_file_extension(input_path).as_deref() {
        Some("jpg") | Some("jpeg") => OutputFormat::Jpeg {
            quality: profile.jpeg_quality(),
        },
        _ => OutputFormat::Png,
    }
}

/// Picks the destination directory without touching the filesystem.
pub fn plan_destination(request: &ProcessingRequest, input_is_dir: bool) -> Destination {
    let input_dir = if input_is_dir {
        request.source_path.clone()
    } else {
        parent_dir(&request.source_path)
    };

    if request.overwrite_in_place {
        Destination::InPlace(input_dir)
    } else if let Some(dir) = &request.output_directory {
        Destination::Directory(dir.clone())
    } else {
        Destination::Directory(input_dir.join(DEFAULT_OUTPUT_DIR))
    }
}

/// Creates the output directory for non-overwrite runs.
pub fn prepare_destination(destination: &Destination) -> Result<()> {
    match destination {
        Destination::InPlace(_) => Ok(()),
        Destination::Directory(dir) => {
            std::fs::create_dir_all(dir).map_err(|source| ImageToolError::OutputDir {
                path: dir.clone(),
                source,
            })?;
            log::debug!("Output directory ready: {}", dir.display());
            Ok(())
        }
    }
}

fn parent_dir(path: &Path) -> PathBuf {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}
