//! Alerts screen: filter chips, summary and the alert list.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use super::components::{render_tab_selector, TabItem};
use super::helpers::{badge_span, truncate_string};
use super::RenderCtx;
use crate::models::alerts::{format_age, Alert, AlertFilter, Severity};
use crate::models::Badge;
use crate::view_state::AlertsView;

fn severity_badge(severity: Severity) -> Badge {
    match severity {
        Severity::Critical => Badge::Critical,
        Severity::Warning => Badge::Warning,
        Severity::Info => Badge::On,
    }
}

pub fn render_alerts(frame: &mut Frame, area: Rect, ctx: &RenderCtx, view: &AlertsView) {
    let palette = ctx.palette;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(4),
        ])
        .split(area);

    let summary = view.summary();
    let counts = vec![
        badge_span(ctx.t("critical"), Badge::Critical, palette),
        Span::styled(format!(" {}    ", summary.critical), Style::default().fg(palette.text)),
        badge_span(ctx.t("warning"), Badge::Warning, palette),
        Span::styled(format!(" {}    ", summary.warning), Style::default().fg(palette.text)),
        badge_span("Resolved", Badge::Healthy, palette),
        Span::styled(format!(" {}", summary.resolved), Style::default().fg(palette.text)),
    ];
    frame.render_widget(
        Paragraph::new(Line::from(counts)).block(
            Block::default()
                .title(Span::styled(format!(" {} ", ctx.t("alerts")), palette.title_style()))
                .borders(Borders::ALL)
                .border_style(palette.border_style(false)),
        ),
        chunks[0],
    );

    let chips: Vec<TabItem> = AlertFilter::CHIPS
        .iter()
        .map(|chip| TabItem::new(chip.label()))
        .collect();
    let selected = AlertFilter::CHIPS
        .iter()
        .position(|c| *c == view.filter)
        .unwrap_or(0);
    frame.render_widget(
        Paragraph::new(render_tab_selector(&chips, selected, &ctx.layout, palette)),
        chunks[1],
    );

    let visible = view.visible();
    let list_block = Block::default()
        .borders(Borders::ALL)
        .border_style(palette.border_style(true));
    if visible.is_empty() {
        frame.render_widget(
            Paragraph::new(Span::styled("No alerts in this category", palette.dim_style()))
                .block(list_block),
            chunks[2],
        );
        return;
    }

    let now = ctx.app.services.clock.now();
    let text_width = (chunks[2].width as usize).saturating_sub(8);
    let items: Vec<ListItem> = visible
        .iter()
        .map(|alert| alert_item(ctx, alert, now, text_width))
        .collect();
    let list = List::new(items)
        .block(list_block)
        .highlight_symbol("▶ ")
        .highlight_style(Style::default().add_modifier(Modifier::BOLD));
    let mut state = ListState::default().with_selected(Some(view.selected.min(visible.len() - 1)));
    frame.render_stateful_widget(list, chunks[2], &mut state);
}

fn alert_item<'a>(
    ctx: &RenderCtx,
    alert: &Alert,
    now: chrono::DateTime<chrono::Local>,
    width: usize,
) -> ListItem<'a> {
    let palette = ctx.palette;
    let title_style = if alert.resolved {
        palette.dim_style().add_modifier(Modifier::CROSSED_OUT)
    } else {
        Style::default().fg(palette.text).add_modifier(Modifier::BOLD)
    };
    let mut header = vec![
        Span::raw(format!("{} ", alert.kind.icon())),
        Span::styled(alert.title.clone(), title_style),
        Span::raw("  "),
    ];
    if alert.resolved {
        header.push(badge_span("Resolved", Badge::Healthy, palette));
    } else {
        let label = match alert.severity {
            Severity::Critical => ctx.t("critical"),
            Severity::Warning => ctx.t("warning"),
            Severity::Info => "Info",
        };
        header.push(badge_span(label, severity_badge(alert.severity), palette));
    }
    header.push(Span::styled(
        format!("  {}", format_age(alert.timestamp, now)),
        palette.dim_style(),
    ));
    ListItem::new(vec![
        Line::from(header),
        Line::from(Span::styled(
            format!("   {}", truncate_string(&alert.message, width)),
            palette.dim_style(),
        )),
    ])
}
