//! Crop health gallery.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use super::helpers::{badge_span, key_hint};
use super::RenderCtx;
use crate::models::crop::{leaf_counts, LEAVES};
use crate::models::Health;
use crate::view_state::ListCursor;

pub fn render_crop(frame: &mut Frame, area: Rect, ctx: &RenderCtx, cursor: &ListCursor) {
    let palette = ctx.palette;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(6),
            Constraint::Length(5),
        ])
        .split(area);

    let (healthy, warning, critical) = leaf_counts(&LEAVES);
    let count = |health: Health, n: usize| {
        vec![
            badge_span(ctx.t(health.label_key()), health.badge(), palette),
            Span::styled(format!(" {}    ", n), Style::default().fg(palette.text)),
        ]
    };
    let mut summary = count(Health::Healthy, healthy);
    summary.extend(count(Health::Warning, warning));
    summary.extend(count(Health::Critical, critical));
    let block = Block::default()
        .title(Span::styled(format!(" {} ", ctx.t("cropHealth")), palette.title_style()))
        .borders(Borders::ALL)
        .border_style(palette.border_style(false));
    frame.render_widget(Paragraph::new(Line::from(summary)).block(block), chunks[0]);

    let items: Vec<ListItem> = LEAVES
        .iter()
        .map(|leaf| {
            ListItem::new(Line::from(vec![
                Span::styled(format!("Leaf #{}  ", leaf.id), Style::default().fg(palette.text)),
                badge_span(ctx.t(leaf.health.label_key()), leaf.health.badge(), palette),
                Span::styled(format!("  {}% confidence", leaf.confidence), palette.dim_style()),
            ]))
        })
        .collect();
    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(palette.border_style(true)),
        )
        .highlight_symbol("▶ ")
        .highlight_style(Style::default().add_modifier(Modifier::BOLD));
    let mut state = ListState::default().with_selected(cursor.get(LEAVES.len()));
    frame.render_stateful_widget(list, chunks[1], &mut state);

    if let Some(leaf) = cursor.get(LEAVES.len()).map(|i| &LEAVES[i]) {
        let block = Block::default()
            .title(Span::styled(format!(" {} ", ctx.t("viewAdvice")), palette.title_style()))
            .borders(Borders::ALL)
            .border_style(palette.border_style(false));
        let lines = vec![
            Line::from(Span::styled(leaf.advice, Style::default().fg(palette.text))),
            Line::from(key_hint("r", ctx.t("playVoice"), palette)),
        ];
        frame.render_widget(
            Paragraph::new(lines).block(block).wrap(Wrap { trim: true }),
            chunks[2],
        );
    }
}
