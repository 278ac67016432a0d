#[cfg(test)]
mod tests {
    use assert_fs::prelude::*;
    use assert_fs::TempDir;
    use image::{GenericImageView, ImageFormat, RgbImage};
    use image_optimizer::{
        BatchOutcome, BatchProcessor, OptimizationProfile, ProcessingRequest,
    };
    use std::path::Path;

    fn red_image(path: &Path, width: u32, height: u32) {
        RgbImage::from_pixel(width, height, image::Rgb([255, 0, 0]))
            .save(path)
            .unwrap();
    }

    fn run(request: ProcessingRequest) -> image_optimizer::BatchSummary {
        BatchProcessor::new(request).run().unwrap()
    }

    fn format_of(path: &Path) -> ImageFormat {
        image::guess_format(&std::fs::read(path).unwrap()).unwrap()
    }

    #[test]
    fn test_web_png_without_resize() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.child("test.png");
        red_image(input.path(), 10, 10);

        let summary = run(ProcessingRequest::new(input.path(), OptimizationProfile::Web));
        assert_eq!(summary.succeeded, 1);

        let output = temp_dir.child("optimized/test.png");
        output.assert(predicates::path::is_file());
        assert_eq!(format_of(output.path()), ImageFormat::Png);
        assert_eq!(image::open(output.path()).unwrap().dimensions(), (10, 10));
    }

    #[test]
    fn test_thumbnail_default_matches_explicit_300() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.child("big.jpg");
        red_image(input.path(), 900, 600);

        let default_out = temp_dir.child("default");
        let mut request = ProcessingRequest::new(input.path(), OptimizationProfile::Thumbnail);
        request.output_directory = Some(default_out.path().to_path_buf());
        run(request);

        let explicit_out = temp_dir.child("explicit");
        let mut request = ProcessingRequest::new(input.path(), OptimizationProfile::Thumbnail);
        request.output_directory = Some(explicit_out.path().to_path_buf());
        request.max_dimension = 300;
        run(request);

        let a = std::fs::read(default_out.child("big.jpg").path()).unwrap();
        let b = std::fs::read(explicit_out.child("big.jpg").path()).unwrap();
        assert_eq!(a, b);
        assert_eq!(image::load_from_memory(&a).unwrap().dimensions(), (300, 200));
        assert_eq!(image::guess_format(&a).unwrap(), ImageFormat::Jpeg);
    }

    #[test]
    fn test_thumbnail_small_image_untouched() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.child("small.png");
        red_image(input.path(), 10, 10);

        run(ProcessingRequest::new(input.path(), OptimizationProfile::Thumbnail));

        let output = temp_dir.child("optimized/small.png");
        assert_eq!(image::open(output.path()).unwrap().dimensions(), (10, 10));
    }

    #[test]
    fn test_app_always_writes_png() {
        let temp_dir = TempDir::new().unwrap();
        for (name, format) in [
            ("photo.jpg", ImageFormat::Jpeg),
            ("anim.gif", ImageFormat::Gif),
            ("scan.bmp", ImageFormat::Bmp),
        ] {
            RgbImage::from_pixel(40, 20, image::Rgb([0, 128, 255]))
                .save_with_format(temp_dir.child(name).path(), format)
                .unwrap();
        }

        let mut request = ProcessingRequest::new(temp_dir.path(), OptimizationProfile::App);
        request.max_dimension = 16;
        let summary = run(request);
        assert_eq!(summary.outcome(), BatchOutcome::Complete);

        for stem in ["photo", "anim", "scan"] {
            let output = temp_dir.child(format!("optimized/{stem}.png"));
            output.assert(predicates::path::is_file());
            assert_eq!(format_of(output.path()), ImageFormat::Png);
            assert_eq!(image::open(output.path()).unwrap().dimensions(), (16, 8));
        }
        temp_dir
            .child("optimized/photo.jpg")
            .assert(predicates::path::missing());
    }

    #[test]
    fn test_gif_and_webp_become_png_for_web() {
        let temp_dir = TempDir::new().unwrap();
        RgbImage::from_pixel(5, 5, image::Rgb([9, 9, 9]))
            .save_with_format(temp_dir.child("a.gif").path(), ImageFormat::Gif)
            .unwrap();
        RgbImage::from_pixel(6, 3, image::Rgb([200, 100, 50]))
            .save_with_format(temp_dir.child("b.webp").path(), ImageFormat::WebP)
            .unwrap();

        let summary = run(ProcessingRequest::new(temp_dir.path(), OptimizationProfile::Web));
        assert_eq!(summary.outcome(), BatchOutcome::Complete);

        let gif_out = temp_dir.child("optimized/a.png");
        assert_eq!(format_of(gif_out.path()), ImageFormat::Png);
        temp_dir
            .child("optimized/a.gif")
            .assert(predicates::path::missing());

        let webp_out = temp_dir.child("optimized/b.png");
        assert_eq!(format_of(webp_out.path()), ImageFormat::Png);
        let decoded = image::open(webp_out.path()).unwrap();
        assert_eq!(decoded.dimensions(), (6, 3));
        assert_eq!(decoded.to_rgb8().get_pixel(2, 1), &image::Rgb([200, 100, 50]));
        temp_dir
            .child("optimized/b.webp")
            .assert(predicates::path::missing());
    }

    #[test]
    fn test_overwrite_gif_is_replaced_by_png() {
        let temp_dir = TempDir::new().unwrap();
        RgbImage::from_pixel(4, 4, image::Rgb([9, 9, 9]))
            .save_with_format(temp_dir.child("a.gif").path(), ImageFormat::Gif)
            .unwrap();

        let mut request = ProcessingRequest::new(temp_dir.path(), OptimizationProfile::Web);
        request.overwrite_in_place = true;
        assert_eq!(run(request).succeeded, 1);

        temp_dir.child("a.gif").assert(predicates::path::missing());
        assert_eq!(format_of(temp_dir.child("a.png").path()), ImageFormat::Png);

        // A second pass only sees the converted file.
        let mut request = ProcessingRequest::new(temp_dir.path(), OptimizationProfile::Web);
        request.overwrite_in_place = true;
        assert_eq!(run(request).total, 1);
    }

    #[test]
    fn test_overwrite_app_replaces_jpeg_with_png() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.child("icon.jpg");
        RgbImage::from_pixel(8, 8, image::Rgb([0, 128, 255]))
            .save_with_format(input.path(), ImageFormat::Jpeg)
            .unwrap();

        let mut request = ProcessingRequest::new(input.path(), OptimizationProfile::App);
        request.overwrite_in_place = true;
        assert_eq!(run(request).succeeded, 1);

        input.assert(predicates::path::missing());
        assert_eq!(format_of(temp_dir.child("icon.png").path()), ImageFormat::Png);
        temp_dir.child("optimized").assert(predicates::path::missing());
    }

    #[test]
    fn test_overwrite_in_place() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.child("test_overwrite.png");
        red_image(input.path(), 50, 25);

        let mut request = ProcessingRequest::new(input.path(), OptimizationProfile::Invert);
        request.overwrite_in_place = true;
        request.max_dimension = 10;
        let summary = run(request);
        assert_eq!(summary.succeeded, 1);

        temp_dir.child("optimized").assert(predicates::path::missing());
        let written = image::open(input.path()).unwrap();
        assert_eq!(written.dimensions(), (10, 5));
        let image::Rgba([r, g, b, _]) = written.to_rgba8().get_pixel(5, 2).to_owned();
        assert!(r <= 1 && g >= 254 && b >= 254);
    }

    #[test]
    fn test_explicit_output_directory_is_created() {
        let temp_dir = TempDir::new().unwrap();
        temp_dir.child("in").create_dir_all().unwrap();
        red_image(temp_dir.child("in/a.png").path(), 4, 4);

        let out = temp_dir.child("deep/nested/out");
        let mut request = ProcessingRequest::new(temp_dir.child("in").path(), OptimizationProfile::Bw);
        request.output_directory = Some(out.path().to_path_buf());
        run(request);

        out.child("a.png").assert(predicates::path::is_file());
        temp_dir.child("in/optimized").assert(predicates::path::missing());
        let gray = image::open(out.child("a.png").path()).unwrap().to_rgb8();
        let image::Rgb([r, g, b]) = *gray.get_pixel(0, 0);
        assert!(r == g && g == b);
    }

    #[test]
    fn test_sepia_jpeg_keeps_extension() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.child("old.JPEG");
        RgbImage::from_pixel(8, 8, image::Rgb([255, 0, 0]))
            .save_with_format(input.path(), ImageFormat::Jpeg)
            .unwrap();

        run(ProcessingRequest::new(input.path(), OptimizationProfile::Sepia));

        let output = temp_dir.child("optimized/old.JPEG");
        assert_eq!(format_of(output.path()), ImageFormat::Jpeg);
        let image::Rgb([r, g, b]) = *image::open(output.path()).unwrap().to_rgb8().get_pixel(4, 4);
        assert!(r > g && g > b, "not sepia-toned: {r},{g},{b}");
    }

    #[test]
    fn test_invalid_file_is_skipped() {
        let temp_dir = TempDir::new().unwrap();
        temp_dir.child("broken.jpg").write_str("fake jpeg").unwrap();
        red_image(temp_dir.child("good.png").path(), 3, 3);

        let summary = run(ProcessingRequest::new(temp_dir.path(), OptimizationProfile::Web));

        assert_eq!(summary.total, 2);
        assert_eq!(summary.succeeded, 1);
        assert_eq!(summary.failures.len(), 1);
        assert!(summary.failures[0].0.ends_with("broken.jpg"));
    }
}
