//! Helper functions and constants for UI rendering
//!
//! Contains utility functions for truncation, gauges, badges and common UI
//! patterns.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Span,
};
use unicode_width::UnicodeWidthStr;

use super::theme::Palette;
use crate::models::health::Badge;
use crate::widgets::InputStyles;

/// Spinner frames for the scan and voice animations
pub const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Spinner frame for a tick count (the loop ticks every 16ms).
pub fn spinner(tick: u64) -> &'static str {
    SPINNER_FRAMES[((tick / 6) % SPINNER_FRAMES.len() as u64) as usize]
}

/// Get inner rect with margin
pub fn inner_rect(area: Rect, margin: u16) -> Rect {
    Rect {
        x: area.x + margin,
        y: area.y + margin,
        width: area.width.saturating_sub(margin * 2),
        height: area.height.saturating_sub(margin * 2),
    }
}

/// A `width` x `height` rect centered in `area`, clipped to it.
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Truncate to at most `max_width` display columns, adding "..." if cut.
/// Devanagari and other wide text is measured by display width, not bytes.
pub fn truncate_string(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    let target = max_width.saturating_sub(3);
    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = unicode_width::UnicodeWidthChar::width(c).unwrap_or(0);
        if used + w > target {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push_str("...");
    out
}

/// Text gauge like `███████░░░` for `value` in `[0, max]`.
pub fn gauge(value: f64, max: f64, width: usize) -> String {
    if width == 0 || max <= 0.0 {
        return String::new();
    }
    let filled = ((value / max).clamp(0.0, 1.0) * width as f64).round() as usize;
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Colored `[ label ]` badge.
pub fn badge_span(label: &str, badge: Badge, palette: &Palette) -> Span<'static> {
    Span::styled(
        format!("[{}]", label),
        Style::default()
            .fg(palette.badge_color(badge))
            .add_modifier(Modifier::BOLD),
    )
}

/// Key hint like `s start` for footers.
pub fn key_hint(key: &str, label: &str, palette: &Palette) -> Vec<Span<'static>> {
    vec![
        Span::styled(
            key.to_string(),
            Style::default().fg(palette.accent).add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!(" {}  ", label), palette.dim_style()),
    ]
}

/// Input box colors for the active palette.
pub fn input_styles(palette: &Palette) -> InputStyles {
    InputStyles {
        border: palette.border_style(false),
        focused_border: palette.border_style(true),
        text: Style::default().fg(palette.text),
        cursor: Style::default().fg(palette.background).bg(palette.accent),
    }
}

/// Marker and style for a focusable row.
pub fn focus_marker(focused: bool, palette: &Palette) -> (Span<'static>, Style) {
    if focused {
        let style = Style::default().fg(palette.accent).add_modifier(Modifier::BOLD);
        (Span::styled("▶ ", style), style)
    } else {
        (Span::raw("  "), Style::default().fg(palette.text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_string() {
        assert_eq!(truncate_string("Healthy", 10), "Healthy");
        assert_eq!(truncate_string("Nitrogen Deficiency", 10), "Nitroge...");
        // Wide characters are measured by display width
        let cut = truncate_string("फ़सल स्वास्थ्य दिखाओ", 8);
        assert!(cut.ends_with("..."));
        assert!(cut.width() <= 8);
    }

    #[test]
    fn test_gauge() {
        assert_eq!(gauge(50.0, 100.0, 10), "█████░░░░░");
        assert_eq!(gauge(150.0, 100.0, 4), "████");
        assert_eq!(gauge(-1.0, 100.0, 4), "░░░░");
        assert_eq!(gauge(1.0, 0.0, 4), "");
    }

    #[test]
    fn test_centered_rect_clips() {
        let area = Rect::new(0, 0, 20, 10);
        assert_eq!(centered_rect(area, 10, 4), Rect::new(5, 3, 10, 4));
        assert_eq!(centered_rect(area, 40, 40), area);
    }

    #[test]
    fn test_spinner_cycles() {
        assert_eq!(spinner(0), SPINNER_FRAMES[0]);
        assert_eq!(spinner(6), SPINNER_FRAMES[1]);
        assert_eq!(spinner(60), SPINNER_FRAMES[0]);
    }
}
