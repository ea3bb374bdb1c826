//! Command-line interface.
//!
//! The dispatcher runs early in `main()`, before the terminal is touched:
//!
//! ```ignore
//! use agrodash::cli::{parse_args, run_cli_command, CliCommand};
//!
//! let command = parse_args(std::env::args())?;
//! if let Some(result) = run_cli_command(&command, &config) {
//!     return result;
//! }
//! // No CLI command, continue to TUI
//! ```

pub mod args;
pub mod version;

pub use args::{parse_args, CliCommand, TuiFlags};
pub use version::{version_line, USAGE, VERSION};

use color_eyre::Result;

use crate::adapters::FileStore;
use crate::config::Config;
use crate::traits::KeyValueStore;

/// Delete every stored value in the configured data directory.
pub fn handle_reset_command(config: &Config) -> Result<()> {
    let store = FileStore::open(&config.data_dir);
    store.clear()?;
    tracing::info!(path = %store.path().display(), "Store reset");
    println!("Cleared {}", store.path().display());
    Ok(())
}

/// Run a CLI command if applicable.
///
/// Returns `None` for `RunTui`, otherwise the outcome of the command.
pub fn run_cli_command(command: &CliCommand, config: &Config) -> Option<Result<()>> {
    match command {
        CliCommand::Version => {
            println!("{}", version_line());
            Some(Ok(()))
        }
        CliCommand::Help => {
            println!("{}\n\n{}", version_line(), USAGE);
            Some(Ok(()))
        }
        CliCommand::Reset => Some(handle_reset_command(config)),
        CliCommand::RunTui(_) => None,
    }
}

/// Fold the TUI flags into the configuration.
pub fn apply_flags(config: Config, flags: TuiFlags) -> Config {
    let config = if flags.offline {
        config.with_offline(true)
    } else {
        config
    };
    match flags.route {
        Some(route) => config.with_route(route),
        None => config,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::Route;

    #[test]
    fn test_run_tui_returns_none() {
        let result = run_cli_command(&CliCommand::RunTui(TuiFlags::default()), &Config::new());
        assert!(result.is_none());
    }

    #[test]
    fn test_reset_clears_store_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::new().with_data_dir(dir.path());
        let store = FileStore::open(dir.path());
        store.set("language", "\"hi\"").unwrap();
        drop(store);

        run_cli_command(&CliCommand::Reset, &config).unwrap().unwrap();
        assert!(FileStore::open(dir.path()).get("language").is_none());
    }

    #[test]
    fn test_apply_flags() {
        let config = apply_flags(
            Config::new(),
            TuiFlags {
                offline: true,
                route: Some(Route::Alerts),
            },
        );
        assert!(config.offline);
        assert_eq!(config.route, Route::Alerts);
        assert_eq!(apply_flags(Config::new(), TuiFlags::default()), Config::new());
    }
}
