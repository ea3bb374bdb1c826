//! Tab Selector Component
//!
//! A horizontal tab row. The selected item carries a `▶` marker; compact
//! terminals get the short labels.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::ui::layout::LayoutContext;
use crate::ui::theme::Palette;

/// A single tab item in the selector
#[derive(Debug, Clone)]
pub struct TabItem {
    /// Full label displayed on normal-sized terminals
    pub label: String,
    /// Short label displayed on compact terminals
    pub short_label: String,
}

impl TabItem {
    pub fn new(label: impl Into<String>) -> Self {
        let label = label.into();
        Self {
            short_label: label.clone(),
            label,
        }
    }

    pub fn with_short_label(label: impl Into<String>, short_label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            short_label: short_label.into(),
        }
    }
}

/// Render a horizontal tab selector as one line.
pub fn render_tab_selector(
    items: &[TabItem],
    selected: usize,
    ctx: &LayoutContext,
    palette: &Palette,
) -> Line<'static> {
    let mut spans: Vec<Span<'static>> = vec![Span::raw(" ")];
    let spacing = if ctx.is_extra_small() { " " } else { "  " };

    for (idx, item) in items.iter().enumerate() {
        let label = if ctx.is_compact() {
            &item.short_label
        } else {
            &item.label
        };

        if idx == selected {
            spans.push(Span::styled(
                "▶ ",
                Style::default().fg(palette.accent).add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::styled(
                label.clone(),
                Style::default().fg(palette.text).add_modifier(Modifier::BOLD),
            ));
        } else {
            spans.push(Span::styled("  ", palette.dim_style()));
            spans.push(Span::styled(label.clone(), palette.dim_style()));
        }

        if idx + 1 < items.len() {
            spans.push(Span::raw(spacing));
        }
    }

    Line::from(spans)
}
