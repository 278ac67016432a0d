// image-optimizer/src/processors/resolver.rs
use crate::core::{ImageToolError, Result};
use crate::utils::is_supported_format;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

pub struct InputResolver {
    exclude: Option<PathBuf>,
}

impl InputResolver {
    pub fn new() -> Self {
        Self { exclude: None }
    }

    /// Skips `dir` and everything under it while walking, as long as it lies
    /// strictly inside the walked directory.
    pub fn excluding<P: Into<PathBuf>>(mut self, dir: P) -> Self {
        self.exclude = Some(dir.into());
        self
    }

    /// Resolves `path` into the list of images to process: the file itself,
    /// or every supported image below a directory.
    pub fn resolve(&self, path: &Path) -> Result<Vec<PathBuf>> {
        let metadata =
            std::fs::metadata(path).map_err(|_| ImageToolError::PathNotFound(path.to_path_buf()))?;

        if metadata.is_dir() {
            return self.collect_image_paths(path);
        }

        if !is_supported_format(path) {
            return Err(ImageToolError::UnsupportedFormat(path.to_path_buf()));
        }

        Ok(vec![path.to_path_buf()])
    }

    pub fn collect_image_paths(&self, input_dir: &Path) -> Result<Vec<PathBuf>> {
        let exclude = self
            .exclude
            .as_deref()
            .and_then(|dir| nested_below(input_dir, dir));

        let walker = WalkDir::new(input_dir)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| match &exclude {
                Some(exclude) => !entry.path().starts_with(exclude),
                None => true,
            });

        let mut paths = Vec::new();
        for entry in walker {
            let entry = entry?;
            if entry.file_type().is_file() && is_supported_format(entry.path()) {
                paths.push(entry.into_path());
            }
        }

        log::debug!("Found {} images in {}", paths.len(), input_dir.display());
        Ok(paths)
    }
}

/// `dir` spelled relative to `input_dir`'s walk paths, if it lies strictly
/// below `input_dir`. The same directory or an ancestor yields `None`.
fn nested_below(input_dir: &Path, dir: &Path) -> Option<PathBuf> {
    let (input_abs, dir_abs) = match (input_dir.canonicalize(), dir.canonicalize()) {
        (Ok(input_abs), Ok(dir_abs)) => (input_abs, dir_abs),
        _ => (input_dir.to_path_buf(), dir.to_path_buf()),
    };

    match dir_abs.strip_prefix(&input_abs) {
        Ok(relative) if !relative.as_os_str().is_empty() => Some(input_dir.join(relative)),
        _ => None,
    }
}

impl Default for InputResolver {
    fn default() -> Self {
        Self::new()
    }
}
