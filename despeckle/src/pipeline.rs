//! Read, filter, write

use crate::config::{ConfigError, RunConfig};
use despeckle_core::{ImageFormat, Pix};
use despeckle_filter::{FilterError, FilterKind, apply_filter};
use despeckle_io::IoError;
use log::{debug, info};
use std::path::PathBuf;
use std::time::Instant;
use thiserror::Error;

/// Errors from a filtering run
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("failed to read {}: {source}", .path.display())]
    Read { path: PathBuf, source: IoError },

    #[error("filter error: {0}")]
    Filter(#[from] FilterError),

    #[error("failed to write {}: {source}", .path.display())]
    Write { path: PathBuf, source: IoError },
}

/// What a completed run did
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub width: u32,
    pub height: u32,
    pub kind: FilterKind,
    pub mask_size: u32,
    /// Format detected on the input file
    pub input_format: ImageFormat,
    /// Format written to the output file
    pub output_format: ImageFormat,
}

/// Filter an in-memory image with the config's filter settings.
pub fn filter_image(pix: &Pix, config: &RunConfig) -> Result<Pix, PipelineError> {
    let kind = config.filter_kind()?;
    let mask_size = config.mask_size()?;
    Ok(apply_filter(pix, kind, mask_size)?)
}

/// Run one configuration: read the input, filter it and write the output.
pub fn run(config: &RunConfig) -> Result<RunSummary, PipelineError> {
    let kind = config.filter_kind()?;
    let mask_size = config.mask_size()?;
    let output_format = config.output_format()?;

    let pix = despeckle_io::read_image(&config.input).map_err(|source| PipelineError::Read {
        path: config.input.clone(),
        source,
    })?;
    info!(
        "read {} ({}x{}, {} bpp, {:?})",
        config.input.display(),
        pix.width(),
        pix.height(),
        pix.depth().bits(),
        pix.informat()
    );

    let start = Instant::now();
    let filtered = apply_filter(&pix, kind, mask_size)?;
    debug!(
        "{} filter, mask {}: {:.3} ms",
        kind,
        mask_size,
        start.elapsed().as_secs_f64() * 1000.0
    );

    despeckle_io::write_image(&filtered, &config.output, output_format).map_err(|source| {
        PipelineError::Write {
            path: config.output.clone(),
            source,
        }
    })?;
    info!("wrote {} ({:?})", config.output.display(), output_format);

    Ok(RunSummary {
        width: filtered.width(),
        height: filtered.height(),
        kind,
        mask_size,
        input_format: pix.informat(),
        output_format,
    })
}
