// image-optimizer/src/processors/mod.rs
mod batch;
mod color;
mod compressor;
mod loader;
pub mod locator;
mod resolver;
mod resizer;

pub use batch::BatchProcessor;
pub use color::{invert, sepia, ColorProcessor};
pub use compressor::Compressor;
pub use loader::Loader;
pub use locator::{output_format, plan_destination, prepare_destination, OutputLocator};
pub use resizer::{fit_dimensions, Resizer};
pub use resolver::InputResolver;
