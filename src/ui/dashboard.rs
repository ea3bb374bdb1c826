//! Dashboard screen: six live cards plus irrigation controls.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

use super::helpers::{badge_span, key_hint};
use super::RenderCtx;
use crate::models::dashboard::{Card, CardKind, CardValue};
use crate::view_state::DashboardView;

pub fn render_dashboard(frame: &mut Frame, area: Rect, ctx: &RenderCtx, view: &DashboardView) {
    let info_height = if view.info_open { 5 } else { 0 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(8),
            Constraint::Length(info_height),
            Constraint::Length(3),
        ])
        .split(area);

    render_cards(frame, chunks[0], ctx, view);
    if view.info_open {
        render_info(frame, chunks[1], ctx, view.selected_card());
    }
    render_controls(frame, chunks[2], ctx, view);
}

fn render_cards(frame: &mut Frame, area: Rect, ctx: &RenderCtx, view: &DashboardView) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)])
        .split(area);
    let cards = view.readings.cards();

    for (row_idx, row) in rows.iter().enumerate() {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
            ])
            .split(*row);
        for (col_idx, cell) in cols.iter().enumerate() {
            let idx = row_idx * 3 + col_idx;
            if let Some(card) = cards.get(idx) {
                render_card(frame, *cell, ctx, card, idx == view.selected);
            }
        }
    }
}

fn render_card(frame: &mut Frame, area: Rect, ctx: &RenderCtx, card: &Card, selected: bool) {
    let palette = ctx.palette;
    let value = match &card.value {
        CardValue::Text(text) => text.clone(),
        CardValue::Key(key) => ctx.t(key).to_string(),
    };
    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", ctx.t(card.kind.title_key())),
            palette.title_style(),
        ))
        .borders(Borders::ALL)
        .border_type(if selected {
            BorderType::Thick
        } else {
            BorderType::Rounded
        })
        .border_style(palette.border_style(selected));

    let lines = vec![
        Line::from(Span::styled(
            value,
            Style::default()
                .fg(palette.badge_color(card.badge))
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(badge_span(ctx.t(card.status_key), card.badge, palette)),
    ];
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_info(frame: &mut Frame, area: Rect, ctx: &RenderCtx, kind: CardKind) {
    let palette = ctx.palette;
    let block = Block::default()
        .title(Span::styled(" Technology ", palette.title_style()))
        .borders(Borders::ALL)
        .border_style(palette.border_style(false));
    let mut hints = key_hint("r", ctx.t("playVoice"), palette);
    hints.extend(key_hint("Enter", ctx.t("viewGraph"), palette));
    let lines = vec![
        Line::from(Span::styled(kind.technology(), Style::default().fg(palette.text))),
        Line::from(hints),
    ];
    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: true }),
        area,
    );
}

fn render_controls(frame: &mut Frame, area: Rect, ctx: &RenderCtx, view: &DashboardView) {
    let palette = ctx.palette;
    let block = Block::default()
        .title(Span::styled(format!(" {} ", ctx.t("control")), palette.title_style()))
        .borders(Borders::ALL)
        .border_style(palette.border_style(false));

    let mut spans = key_hint("s", ctx.t("startIrrigation"), palette);
    spans.extend(key_hint("x", ctx.t("stopIrrigation"), palette));
    spans.extend(key_hint("a", ctx.t("autoMode"), palette));
    let pump_key = if view.readings.pump_on { "on" } else { "off" };
    spans.push(Span::styled(
        format!("{}: ", ctx.t("pumpStatus")),
        palette.dim_style(),
    ));
    spans.push(badge_span(
        ctx.t(pump_key),
        crate::models::Badge::for_pump(view.readings.pump_on),
        palette,
    ));
    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}
