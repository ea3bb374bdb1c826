//! Dialog Frame Component
//!
//! A centered dialog frame with rounded borders. Handles background
//! clearing and responsive sizing.

use ratatui::{
    layout::Rect,
    style::Style,
    text::Span,
    widgets::{Block, BorderType, Borders, Clear},
    Frame,
};

use crate::ui::layout::LayoutContext;
use crate::ui::theme::Palette;

/// Configuration for rendering a dialog frame
#[derive(Debug, Clone)]
pub struct DialogFrameConfig<'a> {
    /// Title displayed in the border
    pub title: &'a str,
    /// Content height (not including borders)
    pub content_height: u16,
    /// Minimum width
    pub min_width: u16,
    /// Maximum width
    pub max_width: u16,
}

impl<'a> DialogFrameConfig<'a> {
    pub fn new(title: &'a str, content_height: u16) -> Self {
        Self {
            title,
            content_height,
            min_width: 30,
            max_width: 60,
        }
    }

    pub fn max_width(mut self, width: u16) -> Self {
        self.max_width = width;
        self
    }
}

/// Calculate dialog width based on terminal size and configuration
fn calculate_dialog_width(ctx: &LayoutContext, config: &DialogFrameConfig, area_width: u16) -> u16 {
    if ctx.is_extra_small() {
        area_width.saturating_sub(4).min(config.max_width)
    } else if ctx.is_narrow() {
        ctx.bounded_width(80, config.min_width, config.max_width)
    } else {
        ctx.bounded_width(50, config.min_width, config.max_width)
    }
    .min(area_width)
}

/// Render a dialog frame over `area` and return the inner content area.
pub fn render_dialog_frame(
    frame: &mut Frame,
    area: Rect,
    ctx: &LayoutContext,
    config: &DialogFrameConfig,
    palette: &Palette,
) -> Rect {
    let dialog_width = calculate_dialog_width(ctx, config, area.width);
    let dialog_height = (config.content_height + 2).min(area.height);

    let dialog_area = Rect {
        x: area.x + (area.width.saturating_sub(dialog_width)) / 2,
        y: area.y + (area.height.saturating_sub(dialog_height)) / 2,
        width: dialog_width,
        height: dialog_height,
    };

    // Clear the background behind the dialog
    frame.render_widget(Clear, dialog_area);

    let block = Block::default()
        .title(Span::styled(format!(" {} ", config.title), palette.title_style()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(palette.border_style(true))
        .style(Style::default().bg(palette.background).fg(palette.text));

    let inner = block.inner(dialog_area);
    frame.render_widget(block, dialog_area);
    inner
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dialog_frame_config_new() {
        let config = DialogFrameConfig::new("Test", 10);
        assert_eq!(config.title, "Test");
        assert_eq!(config.content_height, 10);
        assert_eq!(config.min_width, 30);
        assert_eq!(config.max_width, 60);
    }

    #[test]
    fn test_calculate_dialog_width_extra_small() {
        let ctx = LayoutContext::new(50, 14);
        let config = DialogFrameConfig::new("Test", 10);
        assert_eq!(calculate_dialog_width(&ctx, &config, 50), 46);
    }

    #[test]
    fn test_calculate_dialog_width_normal() {
        let ctx = LayoutContext::new(120, 40);
        let config = DialogFrameConfig::new("Test", 10);
        // 50% of 120 = 60, clamped to max 60
        assert_eq!(calculate_dialog_width(&ctx, &config, 120), 60);
        let wide = DialogFrameConfig::new("Test", 10).max_width(80);
        assert_eq!(calculate_dialog_width(&ctx, &wide, 120), 60);
    }
}
