//! Generator configuration.
//!
//! Everything has a default, so a config file is optional. When one is given
//! with `--config`, it is sparse: set only what you want to change.
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! output_dir = "ios/MassageChairControl/Images.xcassets/AppIcon.appiconset"
//! filter = "lanczos3"   # lanczos3 | catmull-rom | gaussian | triangle | nearest
//! ```
//!
//! The icon table itself is fixed by Xcode and is not configurable.
//! Unknown keys are rejected to catch typos early.

use crate::generate::GenerateOptions;
use crate::icons::DEFAULT_OUTPUT_DIR;
use crate::imaging::ResampleFilter;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error reading {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Asset catalog directory the icons and `Contents.json` are written to.
    pub output_dir: String,
    /// Resampling filter for every icon.
    pub filter: ResampleFilter,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            output_dir: DEFAULT_OUTPUT_DIR.to_string(),
            filter: ResampleFilter::default(),
        }
    }
}

impl GeneratorConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.output_dir.trim().is_empty() {
            return Err(ConfigError::Validation(
                "output_dir must not be empty".into(),
            ));
        }
        Ok(())
    }

    /// Apply a command-line `--output` override.
    pub fn with_output_dir(mut self, output_dir: Option<&Path>) -> Self {
        if let Some(dir) = output_dir {
            self.output_dir = dir.to_string_lossy().into_owned();
        }
        self
    }

    pub fn generate_options(&self) -> GenerateOptions {
        GenerateOptions {
            output_dir: PathBuf::from(&self.output_dir),
            filter: self.filter,
        }
    }
}

pub fn parse_config(content: &str) -> Result<GeneratorConfig, ConfigError> {
    let config: GeneratorConfig = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}

/// Load configuration.
///
/// With no path, returns stock defaults. An explicit path must exist.
pub fn load_config(path: Option<&Path>) -> Result<GeneratorConfig, ConfigError> {
    let Some(path) = path else {
        return Ok(GeneratorConfig::default());
    };
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_config(&content)
}

/// A documented config file with every option at its default.
pub fn stock_config_toml() -> &'static str {
    r#"# generate-icons configuration
# All options are optional; the values below are the defaults.

# Asset catalog directory, relative to where the command is run.
# Overridden by --output.
output_dir = "ios/MassageChairControl/Images.xcassets/AppIcon.appiconset"

# Resampling filter used for every icon size.
# One of: lanczos3, catmull-rom, gaussian, triangle, nearest
filter = "lanczos3"
"#
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let config = GeneratorConfig::default();
        assert_eq!(config.output_dir, DEFAULT_OUTPUT_DIR);
        assert_eq!(config.filter, ResampleFilter::Lanczos3);
    }

    #[test]
    fn stock_config_parses_to_defaults() {
        let config = parse_config(stock_config_toml()).unwrap();
        assert_eq!(config, GeneratorConfig::default());
    }

    #[test]
    fn parse_partial_config() {
        let config = parse_config(r#"filter = "triangle""#).unwrap();
        assert_eq!(config.filter, ResampleFilter::Triangle);
        assert_eq!(config.output_dir, DEFAULT_OUTPUT_DIR);
    }

    #[test]
    fn unknown_key_rejected() {
        let result = parse_config("sizes = [16, 32]");
        assert!(matches!(result, Err(ConfigError::Toml(_))));
    }

    #[test]
    fn unknown_filter_rejected() {
        let result = parse_config(r#"filter = "bicubic""#);
        assert!(matches!(result, Err(ConfigError::Toml(_))));
    }

    #[test]
    fn empty_output_dir_rejected() {
        let result = parse_config(r#"output_dir = "  ""#);
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }

    #[test]
    fn load_config_without_path_is_default() {
        assert_eq!(load_config(None).unwrap(), GeneratorConfig::default());
    }

    #[test]
    fn load_config_reads_file() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("icons.toml");
        fs::write(&path, "output_dir = \"build/AppIcon.appiconset\"\n").unwrap();

        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.output_dir, "build/AppIcon.appiconset");
    }

    #[test]
    fn load_config_missing_file_is_error() {
        let result = load_config(Some(Path::new("/nonexistent/icons.toml")));
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }

    #[test]
    fn output_override_wins() {
        let config = GeneratorConfig::default().with_output_dir(Some(Path::new("out/icons")));
        assert_eq!(config.generate_options().output_dir, PathBuf::from("out/icons"));

        let untouched = GeneratorConfig::default().with_output_dir(None);
        assert_eq!(untouched.output_dir, DEFAULT_OUTPUT_DIR);
    }
}
