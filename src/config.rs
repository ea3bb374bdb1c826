//! Runtime configuration.
//!
//! Built from the environment and then overridden by command-line flags:
//!
//! ```ignore
//! use agrodash::config::Config;
//!
//! let config = Config::from_env().with_offline(true);
//! ```

use std::path::PathBuf;

use crate::app::{Route, StartOptions};

/// Environment variable overriding the data directory.
pub const DATA_DIR_ENV: &str = "AGRODASH_DATA_DIR";
/// Environment variable holding the log filter directive.
pub const LOG_ENV: &str = "AGRODASH_LOG";
/// Filter used when `AGRODASH_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Directory holding `store.json` and `agrodash.log`
    pub data_dir: PathBuf,
    /// `tracing-subscriber` filter directive
    pub log_filter: String,
    /// Start disconnected
    pub offline: bool,
    /// First screen after registration
    pub route: Route,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            offline: false,
            route: Route::Dashboard,
        }
    }
}

/// `<platform data dir>/agrodash`, or `./data` when the platform has none.
pub fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .map(|dir| dir.join("agrodash"))
        .unwrap_or_else(|| PathBuf::from("data"))
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = dir.into();
        self
    }

    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = filter.into();
        self
    }

    pub fn with_offline(mut self, offline: bool) -> Self {
        self.offline = offline;
        self
    }

    pub fn with_route(mut self, route: Route) -> Self {
        self.route = route;
        self
    }

    /// Read `AGRODASH_DATA_DIR` and `AGRODASH_LOG`. Empty values are ignored.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(dir) = lookup(DATA_DIR_ENV).filter(|v| !v.trim().is_empty()) {
            config = config.with_data_dir(dir);
        }
        if let Some(filter) = lookup(LOG_ENV).filter(|v| !v.trim().is_empty()) {
            config = config.with_log_filter(filter);
        }
        config
    }

    pub fn start_options(&self) -> StartOptions {
        StartOptions {
            route: self.route,
            offline: self.offline,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::new();
        assert_eq!(config.log_filter, "info");
        assert!(!config.offline);
        assert_eq!(config.route, Route::Dashboard);
        assert!(config.data_dir.ends_with("agrodash") || config.data_dir.ends_with("data"));
    }

    #[test]
    fn test_env_overrides() {
        let config = Config::from_lookup(|key| match key {
            DATA_DIR_ENV => Some("/tmp/farm".to_string()),
            LOG_ENV => Some("agrodash=debug".to_string()),
            _ => None,
        });
        assert_eq!(config.data_dir, PathBuf::from("/tmp/farm"));
        assert_eq!(config.log_filter, "agrodash=debug");
    }

    #[test]
    fn test_blank_env_values_are_ignored() {
        let config = Config::from_lookup(|_| Some("  ".to_string()));
        assert_eq!(config, Config::default());
    }

    #[test]
    #[serial_test::serial]
    fn test_from_env_reads_process_environment() {
        std::env::set_var(DATA_DIR_ENV, "/tmp/agrodash-env");
        std::env::remove_var(LOG_ENV);
        let config = Config::from_env();
        std::env::remove_var(DATA_DIR_ENV);

        assert_eq!(config.data_dir, PathBuf::from("/tmp/agrodash-env"));
        assert_eq!(config.log_filter, DEFAULT_LOG_FILTER);
    }

    #[test]
    fn test_start_options_follow_builder() {
        let options = Config::new()
            .with_offline(true)
            .with_route(Route::Sync)
            .start_options();
        assert!(options.offline);
        assert_eq!(options.route, Route::Sync);
    }
}
