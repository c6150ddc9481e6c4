//! Parameter types for image operations.
//!
//! These structs describe *what* to do, not *how* to do it. They are the
//! interface between [`generate`](crate::generate) (which decides which icons
//! to create) and the [`backend`](super::backend) (which does the pixel work).
//! Keeping them separate lets tests swap in a mock backend without changing
//! the generation logic.
//!
//! ## Types
//!
//! - [`ResampleFilter`] — Interpolation used for resizing. Defaults to Lanczos3.
//! - [`IconParams`] — One icon to write: output path, square edge length, filter.

use image::imageops::FilterType;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Resampling filter used when scaling the source to an icon size.
///
/// Serialized in kebab-case so it reads naturally in the config file
/// (`filter = "catmull-rom"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResampleFilter {
    #[default]
    Lanczos3,
    CatmullRom,
    Gaussian,
    Triangle,
    Nearest,
}

impl ResampleFilter {
    pub fn filter_type(self) -> FilterType {
        match self {
            ResampleFilter::Lanczos3 => FilterType::Lanczos3,
            ResampleFilter::CatmullRom => FilterType::CatmullRom,
            ResampleFilter::Gaussian => FilterType::Gaussian,
            ResampleFilter::Triangle => FilterType::Triangle,
            ResampleFilter::Nearest => FilterType::Nearest,
        }
    }
}

impl fmt::Display for ResampleFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ResampleFilter::Lanczos3 => "lanczos3",
            ResampleFilter::CatmullRom => "catmull-rom",
            ResampleFilter::Gaussian => "gaussian",
            ResampleFilter::Triangle => "triangle",
            ResampleFilter::Nearest => "nearest",
        };
        f.write_str(name)
    }
}

/// Parameters for writing one square icon.
#[derive(Debug, Clone, PartialEq)]
pub struct IconParams {
    pub output: PathBuf,
    /// Edge length in pixels; icons are always square.
    pub size: u32,
    pub filter: ResampleFilter,
}
