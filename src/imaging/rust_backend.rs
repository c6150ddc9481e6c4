//! Pure Rust image backend built on the `image` crate.
//!
//! ## Crate mapping
//!
//! | Operation | Crate / function |
//! |---|---|
//! | Decode (PNG, JPEG, TIFF, WebP) | `image::ImageReader` with content sniffing |
//! | Normalize | `DynamicImage::into_rgba8` |
//! | Resize | `image::imageops::resize` (Lanczos3 unless configured) |
//! | Encode → PNG | `image::codecs::png::PngEncoder` |
//!
//! PNG encoding uses fixed compression and filter settings, so the same source
//! always produces byte-identical icons.

use super::backend::{BackendError, ImageBackend};
use super::params::IconParams;
use image::codecs::png::{CompressionType, FilterType as PngFilter, PngEncoder};
use image::{ExtendedColorType, ImageEncoder, ImageReader, RgbaImage};
use std::path::Path;

/// Production backend.
pub struct RustBackend;

impl RustBackend {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RustBackend {
    fn default() -> Self {
        Self::new()
    }
}

fn decode_error(path: &Path, reason: impl ToString) -> BackendError {
    BackendError::Decode {
        path: path.display().to_string(),
        reason: reason.to_string(),
    }
}

/// Encode RGBA pixels as PNG into memory.
fn encode_png(img: &RgbaImage) -> Result<Vec<u8>, BackendError> {
    let mut buf = Vec::new();
    PngEncoder::new_with_quality(&mut buf, CompressionType::Default, PngFilter::Adaptive)
        .write_image(
            img.as_raw(),
            img.width(),
            img.height(),
            ExtendedColorType::Rgba8,
        )
        .map_err(|e| BackendError::ProcessingFailed(format!("PNG encode failed: {e}")))?;
    Ok(buf)
}

impl ImageBackend for RustBackend {
    fn open(&self, path: &Path) -> Result<RgbaImage, BackendError> {
        // Format comes from the file content, not the extension.
        let img = ImageReader::open(path)
            .map_err(|e| decode_error(path, e))?
            .with_guessed_format()
            .map_err(|e| decode_error(path, e))?
            .decode()
            .map_err(|e| decode_error(path, e))?;
        Ok(img.into_rgba8())
    }

    fn write_icon(&self, source: &RgbaImage, params: &IconParams) -> Result<(), BackendError> {
        let resized = if source.width() == params.size && source.height() == params.size {
            source.clone()
        } else {
            image::imageops::resize(
                source,
                params.size,
                params.size,
                params.filter.filter_type(),
            )
        };
        let png = encode_png(&resized)?;
        std::fs::write(&params.output, png)?;
        Ok(())
    }
}
