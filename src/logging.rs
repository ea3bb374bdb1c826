//! File logging.
//!
//! The TUI owns stdout, so log lines go to `agrodash.log` in the data
//! directory, without ANSI colors.

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::{Config, DEFAULT_LOG_FILTER};
use crate::error::{DashError, DashResult};

pub const LOG_FILE: &str = "agrodash.log";

pub fn log_path(data_dir: &Path) -> PathBuf {
    data_dir.join(LOG_FILE)
}

/// Parse a filter directive, falling back to `info` when it is invalid.
pub fn build_filter(directive: &str) -> EnvFilter {
    EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
}

/// Install the global subscriber. Returns the log file path.
pub fn init(config: &Config) -> DashResult<PathBuf> {
    fs::create_dir_all(&config.data_dir)?;
    let path = log_path(&config.data_dir);
    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    tracing_subscriber::fmt()
        .with_env_filter(build_filter(&config.log_filter))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .map_err(|e| DashError::Logging(e.to_string()))?;

    tracing::info!(version = crate::cli::VERSION, "agrodash starting");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_path_in_data_dir() {
        assert_eq!(log_path(Path::new("/tmp/farm")), PathBuf::from("/tmp/farm/agrodash.log"));
    }

    #[test]
    fn test_invalid_filter_falls_back() {
        let fallback = EnvFilter::new(DEFAULT_LOG_FILTER).to_string();
        assert_eq!(build_filter("agrodash=loud").to_string(), fallback);
        assert_ne!(build_filter("agrodash=debug").to_string(), fallback);
    }
}
