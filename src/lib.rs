//! agrodash - a terminal dashboard for a simulated smart-irrigation farm
//!
//! This library exposes modules for use in integration tests.

pub mod adapters;
pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod i18n;
pub mod logging;
pub mod models;
pub mod state;
pub mod traits;
pub mod ui;
pub mod view_state;
pub mod widgets;
