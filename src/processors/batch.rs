// image-optimizer/src/processors/batch.rs
use crate::core::processor::ImageProcessor;
use crate::core::{BatchSummary, ProcessingRequest, Result};
use crate::processors::locator::{plan_destination, prepare_destination};
use crate::processors::InputResolver;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;

pub struct BatchProcessor {
    request: ProcessingRequest,
    show_progress: bool,
}

impl BatchProcessor {
    pub fn new(request: ProcessingRequest) -> Self {
        Self {
            request,
            show_progress: false,
        }
    }

    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    /// Runs the whole batch. Errors returned from here are fatal and happen
    /// before any file is written; per-file failures end up in the summary.
    pub fn run(&self) -> Result<BatchSummary> {
        self.request.validate()?;

        let source = self.request.source_path.as_path();
        let input_is_dir = std::fs::metadata(source)
            .map(|metadata| metadata.is_dir())
            .unwrap_or(false);
        let destination = plan_destination(&self.request, input_is_dir);

        let mut resolver = InputResolver::new();
        if !destination.is_in_place() {
            resolver = resolver.excluding(destination.dir());
        }
        let image_paths = resolver.resolve(source)?;

        if image_paths.is_empty() {
            log::warn!("No image files found in {}", source.display());
            return Ok(BatchSummary::default());
        }

        prepare_destination(&destination)?;

        log::info!(
            "Processing {} images from {} (profile: {}, size: {})",
            image_paths.len(),
            source.display(),
            self.request.profile,
            self.request.max_dimension
        );

        let processor = ImageProcessor::new(
            self.request.profile,
            self.request.max_dimension,
            destination,
        );
        let pb = self.create_progress_bar(image_paths.len());

        let mut summary = BatchSummary {
            total: image_paths.len(),
            ..Default::default()
        };

        for input_path in &image_paths {
            match processor.process(input_path) {
                Ok(target) => {
                    summary.succeeded += 1;
                    pb.suspend(|| self.report_success(input_path, processor.destination().is_in_place()));
                    log::debug!("{} -> {}", input_path.display(), target.final_path.display());
                }
                Err(e) => {
                    log::debug!("Skipping {}: {}", input_path.display(), e);
                    pb.suspend(|| {
                        eprintln!("Fehler beim Verarbeiten von {}: {}", input_path.display(), e)
                    });
                    summary.failures.push((input_path.clone(), e.to_string()));
                }
            }
            pb.inc(1);
        }

        pb.finish_and_clear();
        Ok(summary)
    }

    fn report_success(&self, input_path: &Path, in_place: bool) {
        if in_place {
            println!("✓ Überschrieben: {}", input_path.display());
        } else {
            let name = input_path
                .file_name()
                .map(|name| name.to_string_lossy())
                .unwrap_or_else(|| input_path.to_string_lossy());
            println!("✓ Optimiert: {}", name);
        }
    }

    fn create_progress_bar(&self, total: usize) -> ProgressBar {
        if !self.show_progress {
            return ProgressBar::hidden();
        }

        let pb = ProgressBar::new(total as u64);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta})")
        {
            pb.set_style(style.progress_chars("#>-"));
        }
        pb
    }
}
