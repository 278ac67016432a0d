// image-optimizer/src/utils/mod.rs
use std::path::{Path, PathBuf};

pub const SUPPORTED_EXTENSIONS: [&str; 6] = ["jpg", "jpeg", "png", "gif", "bmp", "webp"];

pub fn is_supported_format(path: &Path) -> bool {
    get_file_extension(path)
        .map(|ext| SUPPORTED_EXTENSIONS.contains(&ext.as_str()))
        .unwrap_or(false)
}

pub fn get_file_extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|s| s.to_lowercase())
}

/// Replaces the extension of `path` with `png`.
pub fn with_png_extension(path: &Path) -> PathBuf {
    path.with_extension("png")
}

pub fn format_file_size(bytes: u64) -> String {
    const UNITS: [&str; 6] = ["B", "KB", "MB", "GB", "TB", "PB"];

    if bytes == 0 {
        return "0 B".to_string();
    }

    let base = 1024_f64;
    let bytes_f64 = bytes as f64;
    let exponent = ((bytes_f64.log10() / base.log10()).floor() as usize).min(UNITS.len() - 1);
    let size = bytes_f64 / base.powi(exponent as i32);

    format!("{:.2} {}", size, UNITS[exponent])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn supported_extensions_any_case() {
        for path in [
            "test.jpg",
            "test.JPG",
            "test.JpG",
            "test.jpeg",
            "test.png",
            "test.gif",
            "test.bmp",
            "test.webp",
            "/path/to/image.jpg",
            "/path/to/image.PNG",
            "archive/Scan.WEBP",
        ] {
            assert!(is_supported_format(Path::new(path)), "{path} should be supported");
        }
    }

    #[test]
    fn unsupported_or_missing_extensions() {
        for path in ["test.txt", "test", "test.pdf", "", "photo.tiff", ".png", "dir.jpg/file"] {
            assert!(!is_supported_format(Path::new(path)), "{path} should be rejected");
        }
    }

    #[test]
    fn png_extension_replacement() {
        assert_eq!(with_png_extension(Path::new("out/a.JPG")), PathBuf::from("out/a.png"));
        assert_eq!(with_png_extension(Path::new("b.gif")), PathBuf::from("b.png"));
        assert_eq!(
            with_png_extension(Path::new("dir/c.tar.bmp")),
            PathBuf::from("dir/c.tar.png")
        );
    }

    #[test]
    fn file_sizes() {
        assert_eq!(format_file_size(0), "0 B");
        assert_eq!(format_file_size(512), "512.00 B");
        assert_eq!(format_file_size(2048), "2.00 KB");
        assert_eq!(format_file_size(5 * 1024 * 1024), "5.00 MB");
    }
}
