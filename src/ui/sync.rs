//! Sync status screen.

use chrono::{DateTime, Local};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use super::helpers::{badge_span, key_hint};
use super::RenderCtx;
use crate::models::{Badge, QueueItem, SyncStatus};
use crate::view_state::ListCursor;

fn status_badge(status: SyncStatus) -> Badge {
    match status {
        SyncStatus::Pending => Badge::Warning,
        SyncStatus::Synced => Badge::Healthy,
        SyncStatus::Failed => Badge::Critical,
    }
}

fn queued_at(millis: i64) -> String {
    DateTime::from_timestamp_millis(millis)
        .map(|t| t.with_timezone(&Local).format("%H:%M:%S").to_string())
        .unwrap_or_default()
}

pub fn render_sync(frame: &mut Frame, area: Rect, ctx: &RenderCtx, cursor: &ListCursor) {
    let palette = ctx.palette;
    let connectivity = &ctx.app.connectivity;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Min(4),
            Constraint::Length(3),
        ])
        .split(area);

    let (conn_label, conn_badge, conn_detail) = if connectivity.is_offline() {
        (
            ctx.t("offline"),
            Badge::Critical,
            "Actions are queued and sync when the connection returns.",
        )
    } else {
        (ctx.t("online"), Badge::Healthy, "Connected. Queued actions sync automatically.")
    };
    let counts = connectivity.counts();
    let lines = vec![
        Line::from(vec![
            badge_span(conn_label, conn_badge, palette),
            Span::styled(format!("  {}", conn_detail), palette.dim_style()),
        ]),
        Line::from(vec![
            Span::styled(format!("{} pending  ", counts.pending), Style::default().fg(palette.warning)),
            Span::styled(format!("{} synced  ", counts.synced), Style::default().fg(palette.healthy)),
            Span::styled(format!("{} failed", counts.failed), Style::default().fg(palette.critical)),
        ]),
    ];
    frame.render_widget(
        Paragraph::new(lines).block(
            Block::default()
                .title(Span::styled(" Sync Status ", palette.title_style()))
                .borders(Borders::ALL)
                .border_style(palette.border_style(false)),
        ),
        chunks[0],
    );

    let queue = connectivity.queue();
    let list_block = Block::default()
        .title(Span::styled(" Offline Queue ", palette.title_style()))
        .borders(Borders::ALL)
        .border_style(palette.border_style(true));
    if queue.is_empty() {
        frame.render_widget(
            Paragraph::new(Span::styled("Nothing queued. All actions are synced.", palette.dim_style()))
                .block(list_block),
            chunks[1],
        );
    } else {
        let items: Vec<ListItem> = queue.iter().map(|item| queue_item(ctx, item)).collect();
        let list = List::new(items)
            .block(list_block)
            .highlight_symbol("▶ ")
            .highlight_style(Style::default().add_modifier(Modifier::BOLD));
        let mut state = ListState::default().with_selected(cursor.get(queue.len()));
        frame.render_stateful_widget(list, chunks[1], &mut state);
    }

    let mut hints = key_hint("t", "Retry failed", palette);
    hints.extend(key_hint("c", "Clear queue", palette));
    hints.extend(key_hint("o", "Toggle connection", palette));
    frame.render_widget(
        Paragraph::new(Line::from(hints)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(palette.border_style(false)),
        ),
        chunks[2],
    );
}

fn queue_item<'a>(ctx: &RenderCtx, item: &QueueItem) -> ListItem<'a> {
    let palette = ctx.palette;
    ListItem::new(Line::from(vec![
        Span::styled(format!("{:<20}", item.label()), Style::default().fg(palette.text)),
        badge_span(item.status.label(), status_badge(item.status), palette),
        Span::styled(format!("  {}", queued_at(item.timestamp)), palette.dim_style()),
    ]))
}
