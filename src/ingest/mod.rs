//! Loading of daily location logs into one batch of raw events.

mod csv_log;
mod discover;

pub use csv_log::read_log;
pub use discover::discover_logs;

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::RawEvent;
use std::path::{Path, PathBuf};

/// Expand the given inputs (files or directories) into a list of log files.
/// No inputs means: the configured `input_dir`.
pub fn resolve_inputs(inputs: &[PathBuf], cfg: &Config) -> AppResult<Vec<PathBuf>> {
    let defaults = [PathBuf::from(&cfg.input_dir)];
    let inputs = if inputs.is_empty() { &defaults[..] } else { inputs };

    let mut files = Vec::new();
    for input in inputs {
        if input.is_dir() {
            files.extend(discover_logs(input)?);
        } else {
            files.push(input.clone());
        }
    }

    if files.is_empty() {
        let searched = inputs
            .iter()
            .map(|p| p.display().to_string())
            .collect::<Vec<_>>()
            .join(", ");
        return Err(AppError::NoInput(searched));
    }

    Ok(files)
}

/// Read and concatenate several logs.
pub fn load_logs<P: AsRef<Path>>(paths: &[P], cfg: &Config) -> AppResult<Vec<RawEvent>> {
    let mut all = Vec::new();

    for p in paths {
        let events = read_log(p.as_ref(), cfg)?;
        log::debug!("{}: {} events", p.as_ref().display(), events.len());
        all.extend(events);
    }

    Ok(all)
}
