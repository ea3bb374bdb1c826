//! Error types for agrodash.
//!
//! Almost nothing in the dashboard is fatal: malformed persisted values fall
//! back to defaults and a failed save only gets logged. The types here cover
//! the few places where a failure is worth reporting to the caller.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by a [`crate::traits::KeyValueStore`].
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading or writing the backing file failed
    #[error("Store I/O failed for {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The backing document could not be encoded or decoded
    #[error("Store serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Simulated failure from a test double
    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

/// Errors raised while starting the host speech command.
#[derive(Debug, Error)]
pub enum SpeechError {
    #[error("No speech engine available")]
    NoEngine,

    #[error("Failed to start {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
}

/// Top-level error for startup and configuration code.
#[derive(Debug, Error)]
pub enum DashError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Speech(#[from] SpeechError),

    #[error("Failed to install logger: {0}")]
    Logging(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for fallible agrodash operations.
pub type DashResult<T> = Result<T, DashError>;
