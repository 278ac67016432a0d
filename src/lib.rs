pub mod cli;
mod core;
mod processors;
mod utils;

pub use cli::{Cli, Profile};
pub use crate::core::processor::ImageProcessor;
pub use crate::core::{
    BatchOutcome, BatchSummary, ColorTransform, Destination, ImageToolError,
    OptimizationProfile, OutputFormat, OutputTarget, ProcessingRequest, ResizeAlgorithm, Result,
    DEFAULT_THUMBNAIL_SIZE, MAX_DIMENSION_LIMIT,
};
pub use processors::{
    fit_dimensions, invert, output_format, plan_destination, prepare_destination, sepia,
    BatchProcessor, ColorProcessor, Compressor, InputResolver, Loader, OutputLocator, Resizer,
};
pub use utils::{format_file_size, get_file_extension, is_supported_format, SUPPORTED_EXTENSIONS};

pub mod prelude {
    pub use crate::{
        BatchProcessor, ImageProcessor, InputResolver, OptimizationProfile, OutputLocator,
        ProcessingRequest,
    };
}

// Re-export commonly used types
pub use image::DynamicImage;
