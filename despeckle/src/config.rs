//! JSON run configuration
//!
//! ```json
//! {
//!   "input": "noisy.png",
//!   "output": "clean.png",
//!   "filter": { "kind": "contraharmonic_black", "mask_size": 3 },
//!   "output_format": "png"
//! }
//! ```
//!
//! `filter` and `output_format` may be omitted.

use despeckle_core::ImageFormat;
use despeckle_filter::{FilterError, FilterKind};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while loading or validating a run configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be read
    #[error("failed to read config {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The config file is not valid JSON for [`RunConfig`]
    #[error("failed to parse config {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// The filter section names an unknown kind
    #[error(transparent)]
    Filter(#[from] FilterError),

    /// Mask size must be at least 1
    #[error("mask size must be at least 1, got {0}")]
    InvalidMaskSize(u32),

    /// `output_format` is not a known image format
    #[error("unknown output format: {0}")]
    UnknownFormat(String),
}

/// Filter selection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    /// Kind token: "arithmetic", "contraharmonic_black" or "contraharmonic_white"
    pub kind: String,
    /// Side length of the square neighborhood
    pub mask_size: u32,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            kind: FilterKind::Arithmetic.name().to_string(),
            mask_size: 3,
        }
    }
}

/// A single filtering run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    #[serde(default)]
    pub filter: FilterConfig,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_format: Option<String>,
}

impl RunConfig {
    /// Build a config for `input` -> `output` with the given filter.
    pub fn new<P: Into<PathBuf>, Q: Into<PathBuf>>(
        input: P,
        output: Q,
        kind: FilterKind,
        mask_size: u32,
    ) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            filter: FilterConfig {
                kind: kind.name().to_string(),
                mask_size,
            },
            output_format: None,
        }
    }

    /// Parse the filter kind token.
    pub fn filter_kind(&self) -> Result<FilterKind, ConfigError> {
        Ok(self.filter.kind.parse()?)
    }

    /// Mask size, rejecting 0.
    pub fn mask_size(&self) -> Result<u32, ConfigError> {
        match self.filter.mask_size {
            0 => Err(ConfigError::InvalidMaskSize(0)),
            m => Ok(m),
        }
    }

    /// Resolve the output format.
    ///
    /// An explicit `output_format` must name a known format. Otherwise the
    /// format is inferred from the output extension, falling back to PNG.
    pub fn output_format(&self) -> Result<ImageFormat, ConfigError> {
        if let Some(token) = &self.output_format {
            return match ImageFormat::from_extension(token) {
                ImageFormat::Unknown => Err(ConfigError::UnknownFormat(token.clone())),
                format => Ok(format),
            };
        }
        let inferred = self
            .output
            .extension()
            .and_then(|e| e.to_str())
            .map(ImageFormat::from_extension)
            .unwrap_or_default();
        Ok(match inferred {
            ImageFormat::Unknown => ImageFormat::Png,
            format => format,
        })
    }

    /// Check every field that can be invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.filter_kind()?;
        self.mask_size()?;
        self.output_format()?;
        Ok(())
    }
}

/// Parse a run configuration from a JSON string.
pub fn parse_config(json: &str) -> Result<RunConfig, serde_json::Error> {
    serde_json::from_str(json)
}

/// Load and validate a run configuration from a JSON file.
pub fn load_config(path: &Path) -> Result<RunConfig, ConfigError> {
    let data = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let config = parse_config(&data).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    config.validate()?;
    Ok(config)
}
