//! Shared test utilities: synthetic source images and PNG inspection.

use image::{ImageEncoder, RgbImage, RgbaImage};
use std::path::Path;

/// Write a gradient RGBA PNG with a transparent corner.
pub fn create_test_png(path: &Path, width: u32, height: u32) {
    let img = RgbaImage::from_fn(width, height, |x, y| {
        let alpha = if x < width / 4 && y < height / 4 { 0 } else { 255 };
        image::Rgba([(x % 256) as u8, (y % 256) as u8, 128, alpha])
    });
    img.save_with_format(path, image::ImageFormat::Png).unwrap();
}

/// Write an opaque RGB JPEG (no alpha channel in the source).
pub fn create_test_jpeg(path: &Path, width: u32, height: u32) {
    let img = RgbImage::from_fn(width, height, |x, y| {
        image::Rgb([(x % 256) as u8, (y % 256) as u8, 128])
    });
    let file = std::fs::File::create(path).unwrap();
    let writer = std::io::BufWriter::new(file);
    image::codecs::jpeg::JpegEncoder::new(writer)
        .write_image(img.as_raw(), width, height, image::ExtendedColorType::Rgb8)
        .unwrap();
}

/// Read the pixel dimensions of an image on disk. Panics if unreadable.
pub fn png_dimensions(path: &Path) -> (u32, u32) {
    image::image_dimensions(path)
        .unwrap_or_else(|e| panic!("cannot read {}: {e}", path.display()))
}
