//! Log setup.
//!
//! The terminal is in raw mode on the alternate screen while the game runs, so
//! log records can't go to stderr. They are appended to `QUEEN_LOG_PATH`
//! instead; without it no logger is installed and `log` macros are no-ops.

use std::fs::OpenOptions;

use anyhow::{Context, Result};
use env_logger::{Builder, Target};

use crate::config::AppConfig;

/// Install the file logger. Returns whether one was installed.
pub fn init_logging(config: &AppConfig) -> Result<bool> {
    let Some(path) = config.log_path.as_ref() else {
        return Ok(false);
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("opening log file {}", path.display()))?;

    Builder::new()
        .parse_filters(&config.log_filter)
        .target(Target::Pipe(Box::new(file)))
        .format_timestamp_millis()
        .try_init()
        .context("installing logger")?;

    for warning in &config.warnings {
        log::warn!("{warning}");
    }
    Ok(true)
}
