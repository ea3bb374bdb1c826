//! Command-line argument parsing.
//!
//! This module handles parsing command-line arguments and determining
//! which CLI command to execute.

use crate::app::Route;
use crate::error::DashError;

/// Flags that shape the TUI session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TuiFlags {
    /// `--offline`: start disconnected
    pub offline: bool,
    /// `--route <path>`: first screen after registration
    pub route: Option<Route>,
}

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Show usage
    Help,
    /// Delete all stored state
    Reset,
    /// Run the TUI application (default)
    RunTui(TuiFlags),
}

/// Parse command-line arguments and return the appropriate command.
///
/// The first element is the program name. Unknown flags are ignored;
/// `--route` without a value is an error.
///
/// # Examples
///
/// ```
/// use agrodash::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["agrodash".to_string(), "--version".to_string()];
/// assert_eq!(parse_args(args.into_iter()).unwrap(), CliCommand::Version);
/// ```
pub fn parse_args<I>(args: I) -> Result<CliCommand, DashError>
where
    I: Iterator<Item = String>,
{
    let mut flags = TuiFlags::default();
    let mut args = args.skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--version" | "-V" => return Ok(CliCommand::Version),
            "--help" | "-h" => return Ok(CliCommand::Help),
            "--reset" => return Ok(CliCommand::Reset),
            "--offline" => flags.offline = true,
            "--route" => {
                let path = args
                    .next()
                    .ok_or_else(|| DashError::InvalidArgument("--route needs a path".to_string()))?;
                flags.route = Some(Route::from_path(&path));
            }
            other => {
                if let Some(path) = other.strip_prefix("--route=") {
                    flags.route = Some(Route::from_path(path));
                }
            }
        }
    }
    Ok(CliCommand::RunTui(flags))
}
