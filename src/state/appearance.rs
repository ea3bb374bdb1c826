//! Theme preference and the derived dark flag.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tracing::{debug, info, warn};

use crate::traits::{Clock, KeyValueStore};

/// Store key holding `light`, `dark` or `auto`.
pub const THEME_KEY: &str = "theme";

/// How often `auto` mode re-reads the clock.
pub const THEME_RECHECK_INTERVAL: Duration = Duration::from_secs(60);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
    /// Dark from 18:00 until 06:00 local time
    Auto,
}

impl ThemeMode {
    pub const ALL: [ThemeMode; 3] = [ThemeMode::Light, ThemeMode::Dark, ThemeMode::Auto];

    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
            ThemeMode::Auto => "auto",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "light" => Some(ThemeMode::Light),
            "dark" => Some(ThemeMode::Dark),
            "auto" => Some(ThemeMode::Auto),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ThemeMode::Light => "Light",
            ThemeMode::Dark => "Dark",
            ThemeMode::Auto => "Auto",
        }
    }
}

/// Night hours for `auto` mode.
pub fn is_dark_hour(hour: u32) -> bool {
    hour >= 18 || hour < 6
}

pub struct AppearanceState {
    mode: ThemeMode,
    is_dark: bool,
    store: Arc<dyn KeyValueStore>,
    clock: Arc<dyn Clock>,
    revision: watch::Sender<u64>,
}

impl std::fmt::Debug for AppearanceState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppearanceState")
            .field("mode", &self.mode)
            .field("is_dark", &self.is_dark)
            .finish()
    }
}

impl AppearanceState {
    /// Read the stored mode (unknown or missing means light) and derive
    /// `is_dark` immediately.
    pub fn load(store: Arc<dyn KeyValueStore>, clock: Arc<dyn Clock>) -> Self {
        let mode = store
            .get(THEME_KEY)
            .and_then(|value| ThemeMode::parse(&value))
            .unwrap_or_default();
        let (revision, _) = watch::channel(0);
        let mut state = Self {
            mode,
            is_dark: false,
            store,
            clock,
            revision,
        };
        state.is_dark = state.derive_dark();
        state
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    pub fn is_dark(&self) -> bool {
        self.is_dark
    }

    pub fn set_theme(&mut self, mode: ThemeMode) {
        info!(theme = mode.as_str(), "Theme changed");
        self.mode = mode;
        if let Err(e) = self.store.set(THEME_KEY, mode.as_str()) {
            warn!(error = %e, "Failed to persist theme");
        }
        self.is_dark = self.derive_dark();
        self.bump();
    }

    /// Re-derive `is_dark`; returns whether it flipped.
    pub fn recompute(&mut self) -> bool {
        let dark = self.derive_dark();
        if dark == self.is_dark {
            return false;
        }
        debug!(dark, "Effective theme flipped");
        self.is_dark = dark;
        self.bump();
        true
    }

    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.revision.subscribe()
    }

    fn derive_dark(&self) -> bool {
        match self.mode {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            ThemeMode::Auto => is_dark_hour(self.clock.local_hour()),
        }
    }

    fn bump(&self) {
        self.revision.send_modify(|r| *r += 1);
    }
}
