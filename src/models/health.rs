//! Health and on/off badge states shared by several screens.

use serde::{Deserialize, Serialize};

/// Three-level health classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Health {
    Healthy,
    Warning,
    Critical,
}

impl Health {
    /// Translation key for the label.
    pub fn label_key(self) -> &'static str {
        match self {
            Health::Healthy => "healthy",
            Health::Warning => "warning",
            Health::Critical => "critical",
        }
    }

    pub fn badge(self) -> Badge {
        match self {
            Health::Healthy => Badge::Healthy,
            Health::Warning => Badge::Warning,
            Health::Critical => Badge::Critical,
        }
    }
}

/// Visual status of a badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Badge {
    Healthy,
    Warning,
    Critical,
    On,
    Off,
}

impl Badge {
    pub fn for_pump(running: bool) -> Self {
        if running {
            Badge::On
        } else {
            Badge::Off
        }
    }
}
