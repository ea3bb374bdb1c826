//! Navigation bar, offline banner and footer.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::components::{render_tab_selector, TabItem};
use super::helpers::{key_hint, truncate_string};
use super::RenderCtx;
use crate::app::Route;

pub fn render_nav_bar(frame: &mut Frame, area: Rect, ctx: &RenderCtx) {
    let items: Vec<TabItem> = Route::ALL
        .iter()
        .enumerate()
        .map(|(i, route)| {
            let title = ctx.t(route.title_key());
            TabItem::with_short_label(
                format!("{} {}", i + 1, title),
                format!("{} {}", i + 1, truncate_string(title, 6)),
            )
        })
        .collect();
    let selected = Route::ALL
        .iter()
        .position(|r| *r == ctx.app.route())
        .unwrap_or(0);

    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(ctx.palette.border_style(false));
    let line = render_tab_selector(&items, selected, &ctx.layout, ctx.palette);
    frame.render_widget(Paragraph::new(line).block(block), area);
}

/// One-line banner shown while offline.
pub fn render_offline_banner(frame: &mut Frame, area: Rect, ctx: &RenderCtx) {
    let pending = ctx.app.connectivity.counts().pending;
    let style = Style::default()
        .bg(ctx.palette.banner)
        .fg(ctx.palette.background)
        .add_modifier(Modifier::BOLD);
    let mut text = format!(" ⚠ {}", ctx.t("offlineMode"));
    if pending > 0 {
        text.push_str(&format!(" ({} pending)", pending));
    }
    text.push_str("   g: Sync ");
    frame.render_widget(Paragraph::new(text).style(style), area);
}

/// Status message, or the key hints of the current screen.
pub fn render_footer(frame: &mut Frame, area: Rect, ctx: &RenderCtx) {
    let app = ctx.app;
    let (dot, key) = if app.connectivity.is_offline() {
        (ctx.palette.critical, "offline")
    } else {
        (ctx.palette.healthy, "online")
    };
    let mut spans = vec![
        Span::styled("● ", Style::default().fg(dot)),
        Span::styled(format!("{}  ", ctx.t(key)), ctx.palette.dim_style()),
    ];

    if let Some(status) = &app.status {
        spans.push(Span::styled(
            status.clone(),
            Style::default().fg(ctx.palette.accent).add_modifier(Modifier::BOLD),
        ));
    } else {
        for (k, label) in screen_hints(app.route(), app.has_open_dialog()) {
            spans.extend(key_hint(k, label, ctx.palette));
        }
        if !ctx.layout.is_narrow() {
            spans.extend(key_hint("v", "voice", ctx.palette));
            spans.extend(key_hint("o", "offline", ctx.palette));
            spans.extend(key_hint("q", "quit", ctx.palette));
        }
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn screen_hints(route: Route, dialog: bool) -> &'static [(&'static str, &'static str)] {
    if dialog {
        return &[("Tab", "next field"), ("Enter", "save"), ("Esc", "cancel")];
    }
    match route {
        Route::Dashboard => &[
            ("←→↑↓", "card"),
            ("i", "info"),
            ("Enter", "open"),
            ("s/x/a", "start/stop/auto"),
            ("r", "read"),
        ],
        Route::Soil => &[("s", "start"), ("a", "auto"), ("t", "thresholds"), ("r", "read")],
        Route::Crop => &[("↑↓", "leaf"), ("r", "play advice")],
        Route::Weather => &[("s/x/a", "start/stop/auto"), ("e", "schedule")],
        Route::Alerts => &[("←→", "filter"), ("↑↓", "alert"), ("f", "fix now"), ("r", "read")],
        Route::Scan => &[
            ("Enter", "scan"),
            ("u", "upload"),
            ("w", "save"),
            ("n", "new"),
            ("r", "read"),
        ],
        Route::Sync => &[("↑↓", "item"), ("t", "retry"), ("c", "clear all")],
        Route::Profile => &[("f", "add field"), ("d", "add device")],
        Route::Settings => &[("↑↓", "row"), ("←→", "change"), ("Enter", "select")],
    }
}
