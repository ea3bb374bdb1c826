//! Voice assistant overlay.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use super::helpers::{centered_rect, spinner};
use super::RenderCtx;
use crate::models::voice::suggestions;
use crate::view_state::VoicePhase;

pub fn render_voice_overlay(frame: &mut Frame, area: Rect, ctx: &RenderCtx) {
    let Some(phase) = ctx.app.voice.phase else {
        return;
    };
    let palette = ctx.palette;
    let width = ctx.layout.bounded_width(60, 30, 56);
    let panel = centered_rect(area, width, 11);
    frame.render_widget(Clear, panel);

    let accent = Style::default().fg(palette.accent).add_modifier(Modifier::BOLD);
    let mut lines = Vec::new();
    match phase {
        VoicePhase::Listening => {
            lines.push(Line::from(vec![
                Span::styled(format!("{} ", spinner(ctx.app.tick_count)), accent),
                Span::styled("Listening...", Style::default().fg(palette.text)),
            ]));
            lines.push(Line::default());
            lines.push(Line::from(Span::styled("Try saying:", palette.dim_style())));
            for phrase in suggestions(ctx.app.current_language()) {
                lines.push(Line::from(Span::styled(
                    format!("  \"{}\"", phrase),
                    Style::default().fg(palette.text),
                )));
            }
        }
        VoicePhase::Heard(cmd) | VoicePhase::Acted(cmd) => {
            lines.push(Line::from(vec![
                Span::styled("You said: ", palette.dim_style()),
                Span::styled(format!("\"{}\"", cmd.phrase), accent),
            ]));
            lines.push(Line::default());
            lines.push(Line::from(Span::styled(
                format!("🔊 {}", cmd.response),
                Style::default().fg(palette.text),
            )));
            if matches!(phase, VoicePhase::Acted(_)) {
                lines.push(Line::default());
                lines.push(Line::from(Span::styled("✓ Done", Style::default().fg(palette.healthy))));
            }
        }
    }

    let block = Block::default()
        .title(Span::styled(" 🎤 Voice Assistant ", palette.title_style()))
        .title_bottom(Line::from(Span::styled(" Esc close ", palette.dim_style())))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(palette.border_style(true))
        .style(palette.base());
    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: true }),
        panel,
    );
}
