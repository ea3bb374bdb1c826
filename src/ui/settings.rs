//! Settings screen: language, voice, connectivity, theme and help.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use super::components::{render_dialog_frame, DialogFrameConfig};
use super::helpers::{focus_marker, key_hint};
use super::RenderCtx;
use crate::i18n::Language;
use crate::models::help::HELP_TOPICS;
use crate::state::ThemeMode;
use crate::view_state::{SettingsRow, SettingsView};

fn row_label(row: SettingsRow) -> &'static str {
    match row {
        SettingsRow::Language => "Language",
        SettingsRow::VoiceEnabled => "Voice read-aloud",
        SettingsRow::VoiceSpeed => "Voice speed",
        SettingsRow::Connectivity => "Connection",
        SettingsRow::Theme => "Theme",
        SettingsRow::Help => "Help",
    }
}

fn row_value(ctx: &RenderCtx, view: &SettingsView, row: SettingsRow) -> String {
    let app = ctx.app;
    match row {
        SettingsRow::Language => Language::ALL
            .iter()
            .map(|lang| {
                if *lang == app.current_language() {
                    format!("[{}]", lang.native_name())
                } else {
                    lang.native_name().to_string()
                }
            })
            .collect::<Vec<_>>()
            .join(" "),
        SettingsRow::VoiceEnabled => {
            let key = if app.voice_prefs.enabled { "on" } else { "off" };
            ctx.t(key).to_string()
        }
        SettingsRow::VoiceSpeed => format!("◀ {:.1}x ▶", app.voice_prefs.rate),
        SettingsRow::Connectivity => {
            let key = if app.connectivity.is_offline() { "offline" } else { "online" };
            ctx.t(key).to_string()
        }
        SettingsRow::Theme => ThemeMode::ALL
            .iter()
            .map(|mode| {
                if *mode == app.appearance.mode() {
                    format!("[{}]", mode.label())
                } else {
                    mode.label().to_string()
                }
            })
            .collect::<Vec<_>>()
            .join(" "),
        SettingsRow::Help => HELP_TOPICS
            .get(view.help_selected)
            .map(|topic| format!("◀ {} ▶", topic.question))
            .unwrap_or_default(),
    }
}

pub fn render_settings(frame: &mut Frame, area: Rect, ctx: &RenderCtx, view: &SettingsView) {
    let palette = ctx.palette;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(8), Constraint::Length(3)])
        .split(area);

    let lines: Vec<Line> = SettingsRow::ALL
        .iter()
        .flat_map(|row| {
            let (marker, style) = focus_marker(*row == view.row, palette);
            [
                Line::from(vec![
                    marker,
                    Span::styled(format!("{:<18}", row_label(*row)), style),
                    Span::styled(row_value(ctx, view, *row), Style::default().fg(palette.text)),
                ]),
                Line::default(),
            ]
        })
        .collect();
    frame.render_widget(
        Paragraph::new(lines).block(
            Block::default()
                .title(Span::styled(format!(" {} ", ctx.t("settings")), palette.title_style()))
                .borders(Borders::ALL)
                .border_style(palette.border_style(true)),
        ),
        chunks[0],
    );

    let mut hints = key_hint("↑↓", "select", palette);
    hints.extend(key_hint("←→", "change", palette));
    if view.row == SettingsRow::Help {
        hints.extend(key_hint("Enter", "open", palette));
    }
    frame.render_widget(
        Paragraph::new(Line::from(hints)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(palette.border_style(false)),
        ),
        chunks[1],
    );

    if let Some(topic) = view.help_open.and_then(|i| HELP_TOPICS.get(i)) {
        let config = DialogFrameConfig::new(topic.question, 8).max_width(64);
        let inner = render_dialog_frame(frame, area, &ctx.layout, &config, palette);
        let lines = vec![
            Line::from(Span::styled(topic.answer, Style::default().fg(palette.text))),
            Line::default(),
            Line::from(key_hint("Esc", "close", palette)),
        ];
        frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner);
    }
}
