//! Image processing backend trait and shared types.
//!
//! The [`ImageBackend`] trait defines the two operations icon generation
//! needs: open a source (decoded and normalized to RGBA) and write one resized
//! icon.
//!
//! The production implementation is
//! [`RustBackend`](super::rust_backend::RustBackend), built on the `image`
//! crate. Tests use a mock that records calls and can fail chosen outputs.

use super::params::IconParams;
use image::RgbaImage;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to decode {path}: {reason}")]
    Decode { path: String, reason: String },
    #[error("Processing failed: {0}")]
    ProcessingFailed(String),
}

/// Pixel dimensions of an image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    pub fn of(image: &RgbaImage) -> Self {
        Self {
            width: image.width(),
            height: image.height(),
        }
    }

    pub fn is_square(self) -> bool {
        self.width == self.height
    }
}

/// Trait for image processing backends.
pub trait ImageBackend {
    /// Decode the source and convert it to 8-bit RGBA.
    fn open(&self, path: &Path) -> Result<RgbaImage, BackendError>;

    /// Resize `source` to `params.size` square and write it as PNG.
    fn write_icon(&self, source: &RgbaImage, params: &IconParams) -> Result<(), BackendError>;
}
