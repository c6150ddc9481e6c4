//! `Contents.json` — the asset catalog manifest Xcode reads.
//!
//! The structure is fixed: one descriptor per entry of
//! [`ICON_SIZES`](crate::icons::ICON_SIZES) plus an `info` block. Field order
//! follows what Xcode itself writes.

use crate::icons::{ICON_SIZES, IconSpec};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const MANIFEST_FILENAME: &str = "Contents.json";

#[derive(Error, Debug)]
pub enum ManifestError {
    #[error("Failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contents {
    pub images: Vec<ImageEntry>,
    pub info: Info,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageEntry {
    pub filename: String,
    pub idiom: String,
    pub scale: String,
    pub size: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Info {
    pub author: String,
    pub version: u32,
}

impl Default for Info {
    fn default() -> Self {
        Self {
            author: "xcode".to_string(),
            version: 1,
        }
    }
}

impl From<&IconSpec> for ImageEntry {
    fn from(spec: &IconSpec) -> Self {
        Self {
            filename: spec.filename(),
            idiom: spec.idiom.to_string(),
            scale: spec.scale.to_string(),
            size: spec.size.to_string(),
        }
    }
}

impl Contents {
    /// The manifest for the full icon table.
    pub fn app_icon() -> Self {
        Self {
            images: ICON_SIZES.iter().map(ImageEntry::from).collect(),
            info: Info::default(),
        }
    }

    pub fn to_json(&self) -> Result<String, ManifestError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Write `Contents.json` into `output_dir`, replacing any existing file.
///
/// Returns the path written.
pub fn write_manifest(output_dir: &Path) -> Result<PathBuf, ManifestError> {
    let path = output_dir.join(MANIFEST_FILENAME);
    let json = Contents::app_icon().to_json()?;
    std::fs::write(&path, json).map_err(|source| ManifestError::Io {
        path: path.clone(),
        source,
    })?;
    Ok(path)
}
