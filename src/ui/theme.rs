//! Color palettes for the dashboard.
//!
//! One palette per effective theme. The appearance holder decides which is
//! active; every render function receives the chosen [`Palette`].

use ratatui::style::{Color, Modifier, Style};

use crate::models::health::Badge;

/// Colors used across the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Screen background
    pub background: Color,
    /// Body text
    pub text: Color,
    /// Secondary text and hints
    pub dim: Color,
    /// Panel borders
    pub border: Color,
    /// Borders and markers of focused elements
    pub accent: Color,
    /// Titles
    pub header: Color,
    pub healthy: Color,
    pub warning: Color,
    pub critical: Color,
    /// Offline banner background
    pub banner: Color,
    /// Pump running, synced items
    pub on: Color,
    pub off: Color,
}

// ============================================================================
// Palettes
// ============================================================================

pub const LIGHT: Palette = Palette {
    background: Color::Rgb(248, 250, 245),
    text: Color::Rgb(30, 41, 59),
    dim: Color::Rgb(100, 116, 139),
    border: Color::Rgb(203, 213, 225),
    accent: Color::Rgb(22, 163, 74), // green-600
    header: Color::Rgb(21, 128, 61),
    healthy: Color::Rgb(22, 163, 74),
    warning: Color::Rgb(202, 138, 4),
    critical: Color::Rgb(220, 38, 38),
    banner: Color::Rgb(234, 88, 12),
    on: Color::Rgb(37, 99, 235),
    off: Color::Rgb(100, 116, 139),
};

pub const DARK: Palette = Palette {
    background: Color::Rgb(17, 24, 39),
    text: Color::Rgb(229, 231, 235),
    dim: Color::Rgb(107, 114, 128),
    border: Color::Rgb(55, 65, 81),
    accent: Color::Rgb(74, 222, 128), // green-400
    header: Color::Rgb(134, 239, 172),
    healthy: Color::Rgb(74, 222, 128),
    warning: Color::Rgb(250, 204, 21),
    critical: Color::Rgb(248, 113, 113),
    banner: Color::Rgb(194, 65, 12),
    on: Color::Rgb(96, 165, 250),
    off: Color::Rgb(156, 163, 175),
};

impl Palette {
    pub fn for_dark(dark: bool) -> &'static Palette {
        if dark {
            &DARK
        } else {
            &LIGHT
        }
    }

    pub fn base(&self) -> Style {
        Style::default().fg(self.text).bg(self.background)
    }

    pub fn dim_style(&self) -> Style {
        Style::default().fg(self.dim)
    }

    pub fn title_style(&self) -> Style {
        Style::default().fg(self.header).add_modifier(Modifier::BOLD)
    }

    pub fn border_style(&self, focused: bool) -> Style {
        Style::default().fg(if focused { self.accent } else { self.border })
    }

    pub fn badge_color(&self, badge: Badge) -> Color {
        match badge {
            Badge::Healthy => self.healthy,
            Badge::Warning => self.warning,
            Badge::Critical => self.critical,
            Badge::On => self.on,
            Badge::Off => self.off,
        }
    }
}
