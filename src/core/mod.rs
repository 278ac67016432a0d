// image-optimizer/src/core/mod.rs
pub mod processor;

use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Largest bounding dimension accepted from the command line.
pub const MAX_DIMENSION_LIMIT: u32 = 100_000;

/// Bounding box used by `thumbnail` when no size was given.
pub const DEFAULT_THUMBNAIL_SIZE: u32 = 300;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OptimizationProfile {
    Web,
    App,
    Bw,
    Thumbnail,
    Sepia,
    Invert,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorTransform {
    Grayscale,
    Sepia,
    Invert,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizeAlgorithm {
    CatmullRom,
    Lanczos3,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Jpeg { quality: u8 },
    Png,
}

impl OptimizationProfile {
    pub fn name(self) -> &'static str {
        match self {
            Self::Web => "web",
            Self::App => "app",
            Self::Bw => "bw",
            Self::Thumbnail => "thumbnail",
            Self::Sepia => "sepia",
            Self::Invert => "invert",
        }
    }

    pub fn color_transform(self) -> Option<ColorTransform> {
        match self {
            Self::Bw => Some(ColorTransform::Grayscale),
            Self::Sepia => Some(ColorTransform::Sepia),
            Self::Invert => Some(ColorTransform::Invert),
            Self::Web | Self::App | Self::Thumbnail => None,
        }
    }

    /// Bounding dimension actually applied for a requested `max_dimension`.
    /// Zero means no resize.
    pub fn target_dimension(self, max_dimension: u32) -> u32 {
        match self {
            Self::Thumbnail if max_dimension == 0 => DEFAULT_THUMBNAIL_SIZE,
            _ => max_dimension,
        }
    }

    pub fn resize_algorithm(self) -> ResizeAlgorithm {
        match self {
            Self::App => ResizeAlgorithm::CatmullRom,
            Self::Web | Self::Bw | Self::Thumbnail | Self::Sepia | Self::Invert => {
                ResizeAlgorithm::Lanczos3
            }
        }
    }

    pub fn jpeg_quality(self) -> u8 {
        match self {
            Self::Thumbnail => 75,
            Self::Web | Self::App | Self::Bw | Self::Sepia | Self::Invert => 85,
        }
    }

    pub fn forces_png(self) -> bool {
        matches!(self, Self::App)
    }
}

impl fmt::Display for OptimizationProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone)]
pub struct ProcessingRequest {
    pub source_path: PathBuf,
    pub output_directory: Option<PathBuf>,
    pub max_dimension: u32,
    pub profile: OptimizationProfile,
    pub overwrite_in_place: bool,
}

impl ProcessingRequest {
    pub fn new<P: Into<PathBuf>>(source_path: P, profile: OptimizationProfile) -> Self {
        Self {
            source_path: source_path.into(),
            output_directory: None,
            max_dimension: 0,
            profile,
            overwrite_in_place: false,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.source_path.as_os_str().is_empty() {
            return Err(ImageToolError::Validation(
                "--path ist erforderlich".to_string(),
            ));
        }

        if self.max_dimension > MAX_DIMENSION_LIMIT {
            return Err(ImageToolError::Validation(format!(
                "--size ist zu groß (maximal {} Pixel)",
                MAX_DIMENSION_LIMIT
            )));
        }

        Ok(())
    }
}

/// Where processed files go. Exactly one mode per run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    InPlace(PathBuf),
    Directory(PathBuf),
}

impl Destination {
    pub fn dir(&self) -> &Path {
        match self {
            Self::InPlace(dir) | Self::Directory(dir) => dir,
        }
    }

    pub fn is_in_place(&self) -> bool {
        matches!(self, Self::InPlace(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputTarget {
    pub final_path: PathBuf,
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchOutcome {
    Empty,
    Complete,
    Partial,
}

#[derive(Debug, Default)]
pub struct BatchSummary {
    pub total: usize,
    pub succeeded: usize,
    pub failures: Vec<(PathBuf, String)>,
}

impl BatchSummary {
    pub fn outcome(&self) -> BatchOutcome {
        if self.total == 0 {
            BatchOutcome::Empty
        } else if self.succeeded == self.total {
            BatchOutcome::Complete
        } else {
            BatchOutcome::Partial
        }
    }
}

#[derive(Error, Debug)]
pub enum ImageToolError {
    #[error("{0}")]
    Validation(String),

    #[error("Pfad nicht gefunden: {}", .0.display())]
    PathNotFound(PathBuf),

    #[error("Datei ist kein unterstütztes Bildformat: {}", .0.display())]
    UnsupportedFormat(PathBuf),

    #[error("Fehler beim Lesen des Ordners: {0}")]
    Traversal(#[from] walkdir::Error),

    #[error("Fehler beim Erstellen des Ausgabeordners {}: {source}", path.display())]
    OutputDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Fehler beim Öffnen von {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Fehler beim Kodieren von {}: {source}", path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Fehler beim Erstellen der Ausgabedatei {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ImageToolError {
    /// Fatal errors abort the run before any file is processed; the rest only
    /// skip the file they belong to.
    pub fn is_fatal(&self) -> bool {
        match self {
            Self::Validation(_)
            | Self::PathNotFound(_)
            | Self::UnsupportedFormat(_)
            | Self::Traversal(_)
            | Self::OutputDir { .. } => true,
            Self::Decode { .. } | Self::Encode { .. } | Self::Write { .. } => false,
        }
    }
}

pub type Result<T> = std::result::Result<T, ImageToolError>;
