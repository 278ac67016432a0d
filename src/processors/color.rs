// image-optimizer/src/processors/color.rs
use crate::core::ColorTransform;
use image::{DynamicImage, Rgba, RgbaImage};

const SEPIA: [[f32; 3]; 3] = [
    [0.393, 0.769, 0.189],
    [0.349, 0.686, 0.168],
    [0.272, 0.534, 0.131],
];

pub struct ColorProcessor {
    transform: Option<ColorTransform>,
}

impl ColorProcessor {
    pub fn new(transform: Option<ColorTransform>) -> Self {
        Self { transform }
    }

    pub fn apply(&self, image: DynamicImage) -> DynamicImage {
        let Some(transform) = self.transform else {
            return image;
        };

        log::debug!("Applying color transform {:?}", transform);

        match transform {
            ColorTransform::Grayscale => image.grayscale(),
            ColorTransform::Sepia => DynamicImage::ImageRgba8(map_rgba(image.into_rgba8(), sepia)),
            ColorTransform::Invert => DynamicImage::ImageRgba8(map_rgba(image.into_rgba8(), invert)),
        }
    }
}

fn map_rgba(mut buffer: RgbaImage, f: fn(Rgba<u8>) -> Rgba<u8>) -> RgbaImage {
    for pixel in buffer.pixels_mut() {
        *pixel = f(*pixel);
    }
    buffer
}

pub fn sepia(pixel: Rgba<u8>) -> Rgba<u8> {
    let [r, g, b, a] = pixel.0;
    let (r, g, b) = (r as f32, g as f32, b as f32);
    let channel = |row: [f32; 3]| (row[0] * r + row[1] * g + row[2] * b).round().clamp(0.0, 255.0) as u8;

    Rgba([channel(SEPIA[0]), channel(SEPIA[1]), channel(SEPIA[2]), a])
}

pub fn invert(pixel: Rgba<u8>) -> Rgba<u8> {
    let [r, g, b, a] = pixel.0;
    Rgba([255 - r, 255 - g, 255 - b, a])
}
