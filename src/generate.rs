//! Icon generation: one source image in, nine PNGs out.
//!
//! ## Flow
//!
//! ```text
//! source exists?  ──no──▶ GenerateError::SourceNotFound
//!      │
//! decode + RGBA   ──err─▶ GenerateError::Decode
//!      │
//! mkdir -p output
//!      │
//! for each ICON_SIZES entry: resize → PNG   (failures counted, not fatal)
//!      │
//! GenerateReport { written, failed }
//! ```
//!
//! The pre-flight checks run before anything touches the filesystem, so a bad
//! source never leaves an empty asset catalog behind. Once icon writing starts
//! the run is partial-failure tolerant: each entry is independent and the
//! report carries the tally. Writing `Contents.json` is the caller's call,
//! made only when [`GenerateReport::is_complete`] holds.
//!
//! Progress is reported through a caller-supplied event sink rather than
//! printed here; see [`crate::output::format_generate_event`].

use crate::icons::ICON_SIZES;
use crate::imaging::{
    BackendError, Dimensions, IconParams, ImageBackend, ResampleFilter, RustBackend,
};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Failures that stop the run before any icon is written.
#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("Source image not found: {}", .0.display())]
    SourceNotFound(PathBuf),
    #[error(transparent)]
    Decode(BackendError),
    #[error("Failed to create output directory {}: {source}", path.display())]
    CreateOutputDir {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Where and how to write the icons.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerateOptions {
    pub output_dir: PathBuf,
    pub filter: ResampleFilter,
}

/// Progress notifications emitted while generating.
#[derive(Debug, Clone, PartialEq)]
pub enum GenerateEvent {
    SourceOpened { dimensions: Dimensions },
    IconWritten { filename: String, size: u32 },
    IconFailed { filename: String, error: String },
}

/// One icon that could not be written.
#[derive(Debug, Clone, PartialEq)]
pub struct IconFailure {
    pub filename: String,
    pub error: String,
}

/// Outcome of a generation run that got past the pre-flight checks.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerateReport {
    pub source: Dimensions,
    /// Filenames written, in table order.
    pub written: Vec<String>,
    pub failed: Vec<IconFailure>,
}

impl GenerateReport {
    pub fn succeeded(&self) -> usize {
        self.written.len()
    }

    pub fn total(&self) -> usize {
        ICON_SIZES.len()
    }

    /// True when every icon in the table was written.
    pub fn is_complete(&self) -> bool {
        self.succeeded() == self.total()
    }
}

/// Generate all icons with the production backend.
pub fn generate(
    source: &Path,
    options: &GenerateOptions,
    on_event: impl FnMut(&GenerateEvent),
) -> Result<GenerateReport, GenerateError> {
    generate_with_backend(&RustBackend::new(), source, options, on_event)
}

/// Generate all icons using a specific backend (allows testing with mock).
pub fn generate_with_backend(
    backend: &impl ImageBackend,
    source: &Path,
    options: &GenerateOptions,
    mut on_event: impl FnMut(&GenerateEvent),
) -> Result<GenerateReport, GenerateError> {
    if !source.exists() {
        return Err(GenerateError::SourceNotFound(source.to_path_buf()));
    }

    let image = backend.open(source).map_err(GenerateError::Decode)?;
    let dimensions = Dimensions::of(&image);
    on_event(&GenerateEvent::SourceOpened { dimensions });

    std::fs::create_dir_all(&options.output_dir).map_err(|source| {
        GenerateError::CreateOutputDir {
            path: options.output_dir.clone(),
            source,
        }
    })?;

    let mut report = GenerateReport {
        source: dimensions,
        written: Vec::with_capacity(ICON_SIZES.len()),
        failed: Vec::new(),
    };

    for spec in &ICON_SIZES {
        let filename = spec.filename();
        let params = IconParams {
            output: options.output_dir.join(&filename),
            size: spec.pixels,
            filter: options.filter,
        };

        match backend.write_icon(&image, &params) {
            Ok(()) => {
                on_event(&GenerateEvent::IconWritten {
                    filename: filename.clone(),
                    size: spec.pixels,
                });
                report.written.push(filename);
            }
            Err(e) => {
                let error = e.to_string();
                on_event(&GenerateEvent::IconFailed {
                    filename: filename.clone(),
                    error: error.clone(),
                });
                report.failed.push(IconFailure { filename, error });
            }
        }
    }

    Ok(report)
}
