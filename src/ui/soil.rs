//! Soil monitor screen.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph, Sparkline},
    Frame,
};

use super::components::{render_dialog_frame, DialogFrameConfig};
use super::helpers::{badge_span, gauge, key_hint};
use super::RenderCtx;
use crate::models::soil::ThresholdField;
use crate::view_state::SoilView;

pub fn render_soil(frame: &mut Frame, area: Rect, ctx: &RenderCtx, view: &SoilView) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7),
            Constraint::Min(6),
            Constraint::Length(3),
        ])
        .split(area);

    render_readings(frame, chunks[0], ctx, view);

    let charts = Layout::default()
        .direction(if ctx.layout.should_stack_panels() {
            Direction::Vertical
        } else {
            Direction::Horizontal
        })
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[1]);
    render_history(frame, charts[0], ctx, view);
    render_weekly_ph(frame, charts[1], ctx, view);

    let palette = ctx.palette;
    let mut spans = key_hint("s", ctx.t("startIrrigation"), palette);
    spans.extend(key_hint("a", ctx.t("autoMode"), palette));
    spans.extend(key_hint("t", "Thresholds", palette));
    spans.extend(key_hint("r", ctx.t("playVoice"), palette));
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(palette.border_style(false));
    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), chunks[2]);

    if view.editing {
        render_threshold_editor(frame, area, ctx, view);
    }
}

fn render_readings(frame: &mut Frame, area: Rect, ctx: &RenderCtx, view: &SoilView) {
    let palette = ctx.palette;
    let current = &view.sim.current;
    let status = view.sim.status();
    let health = status.health();
    let status_text = status.fixed_text().unwrap_or_else(|| ctx.t("healthy"));
    let gauge_width = (area.width as usize).saturating_sub(30).min(40);

    let block = Block::default()
        .title(Span::styled(format!(" {} ", ctx.t("soilMonitor")), palette.title_style()))
        .borders(Borders::ALL)
        .border_style(palette.border_style(false));

    let label = |text: &str| Span::styled(format!("{:<16}", text), palette.dim_style());
    let lines = vec![
        Line::from(vec![
            label(ctx.t("soilMoisture")),
            Span::styled(
                format!("{:>4.0}% ", current.moisture),
                Style::default()
                    .fg(palette.badge_color(health.badge()))
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                gauge(current.moisture, 100.0, gauge_width),
                Style::default().fg(palette.badge_color(health.badge())),
            ),
        ]),
        Line::from(vec![
            label(ctx.t("temperature")),
            Span::raw(format!("{:>5.1}°C", current.temperature)),
        ]),
        Line::from(vec![label("pH"), Span::raw(format!("{:>5.1}", current.ph))]),
        Line::from(vec![label("EC"), Span::raw(format!("{:>5.1} mS/cm", current.ec))]),
        Line::from(vec![label("Status"), badge_span(status_text, health.badge(), palette)]),
    ];
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_history(frame: &mut Frame, area: Rect, ctx: &RenderCtx, view: &SoilView) {
    let data: Vec<u64> = view
        .sim
        .history
        .iter()
        .map(|p| p.moisture.round().max(0.0) as u64)
        .collect();
    let last_label = view
        .sim
        .history
        .back()
        .map(|p| p.label.as_str())
        .unwrap_or_default();
    let block = Block::default()
        .title(Span::styled(
            format!(" Moisture, last 24 readings ({}) ", last_label),
            ctx.palette.title_style(),
        ))
        .borders(Borders::ALL)
        .border_style(ctx.palette.border_style(false));
    let sparkline = Sparkline::default()
        .block(block)
        .data(&data)
        .max(100)
        .style(Style::default().fg(ctx.palette.on));
    frame.render_widget(sparkline, area);
}

fn render_weekly_ph(frame: &mut Frame, area: Rect, ctx: &RenderCtx, view: &SoilView) {
    let bars: Vec<Bar> = view
        .sim
        .weekly_ph
        .iter()
        .map(|p| {
            Bar::default()
                .label(Line::from(p.day))
                .value((p.ph * 10.0).round() as u64)
                .text_value(format!("{:.1}", p.ph))
        })
        .collect();
    let block = Block::default()
        .title(Span::styled(" Weekly pH ", ctx.palette.title_style()))
        .borders(Borders::ALL)
        .border_style(ctx.palette.border_style(false));
    let chart = BarChart::default()
        .block(block)
        .data(BarGroup::default().bars(&bars))
        .bar_width(3)
        .bar_gap(1)
        .max(80)
        .bar_style(Style::default().fg(ctx.palette.healthy))
        .value_style(Style::default().fg(ctx.palette.background).bg(ctx.palette.healthy));
    frame.render_widget(chart, area);
}

fn render_threshold_editor(frame: &mut Frame, area: Rect, ctx: &RenderCtx, view: &SoilView) {
    let palette = ctx.palette;
    let config = DialogFrameConfig::new("Alert Thresholds", ThresholdField::ALL.len() as u16 + 2);
    let inner = render_dialog_frame(frame, area, &ctx.layout, &config, palette);

    let mut lines: Vec<Line> = ThresholdField::ALL
        .iter()
        .map(|field| {
            let selected = *field == view.selected_field();
            let marker = if selected { "▶ " } else { "  " };
            let style = if selected {
                Style::default().fg(palette.accent).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(palette.text)
            };
            Line::from(vec![
                Span::styled(marker, style),
                Span::styled(format!("{:<18}", field.label()), style),
                Span::styled(format!("◀ {} ▶", view.sim.thresholds.display(*field)), style),
            ])
        })
        .collect();
    lines.push(Line::default());
    let mut hints = key_hint("←→", "adjust", palette);
    hints.extend(key_hint("Enter", ctx.t("save"), palette));
    lines.push(Line::from(hints));
    frame.render_widget(Paragraph::new(lines), inner);
}
