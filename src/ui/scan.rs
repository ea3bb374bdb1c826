//! Leaf scan screen.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use super::components::{render_dialog_frame, DialogFrameConfig};
use super::helpers::{badge_span, gauge, input_styles, key_hint, spinner};
use super::RenderCtx;
use crate::models::crop::ScanResult;
use crate::view_state::{ScanPhase, ScanView};
use crate::widgets::InputBoxWidget;

pub fn render_scan(frame: &mut Frame, area: Rect, ctx: &RenderCtx, view: &ScanView) {
    let palette = ctx.palette;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(6), Constraint::Length(3)])
        .split(area);

    let block = Block::default()
        .title(Span::styled(format!(" {} ", ctx.t("scanLeaf")), palette.title_style()))
        .borders(Borders::ALL)
        .border_style(palette.border_style(false));

    let lines = match &view.phase {
        ScanPhase::Idle | ScanPhase::ChoosingFile(_) => vec![
            Line::from(Span::styled("Point the camera at a single leaf.", Style::default().fg(palette.text))),
            Line::from(Span::styled(
                "Hold steady in good light, or upload a photo from disk.",
                palette.dim_style(),
            )),
        ],
        ScanPhase::Scanning => vec![Line::from(vec![
            Span::styled(
                format!("{} ", spinner(ctx.app.tick_count)),
                Style::default().fg(palette.accent),
            ),
            Span::styled("Analyzing leaf...", Style::default().fg(palette.text)),
        ])],
        ScanPhase::Done(result) => result_lines(ctx, result, view.saved),
    };

    let mut lines = lines;
    if let Some(path) = &view.uploaded {
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            format!("Image: {}", path.display()),
            palette.dim_style(),
        )));
    }
    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: true }),
        chunks[0],
    );

    let hints = match &view.phase {
        ScanPhase::Done(_) => {
            let mut spans = key_hint("w", ctx.t("save"), palette);
            spans.extend(key_hint("r", ctx.t("playVoice"), palette));
            spans.extend(key_hint("n", "Scan again", palette));
            spans
        }
        ScanPhase::Scanning => Vec::new(),
        _ => {
            let mut spans = key_hint("Enter", ctx.t("scanLeaf"), palette);
            spans.extend(key_hint("u", "Upload image", palette));
            spans
        }
    };
    frame.render_widget(
        Paragraph::new(Line::from(hints)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(palette.border_style(false)),
        ),
        chunks[1],
    );

    if let ScanPhase::ChoosingFile(input) = &view.phase {
        let config = DialogFrameConfig::new("Upload Leaf Image", 5);
        let inner = render_dialog_frame(frame, area, &ctx.layout, &config, palette);
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Length(1)])
            .split(inner);
        frame.render_widget(
            InputBoxWidget::new(input, "Image path", true, input_styles(palette)),
            rows[0],
        );
        let mut hints = key_hint("Enter", "Upload", palette);
        hints.extend(key_hint("Esc", ctx.t("cancel"), palette));
        frame.render_widget(Paragraph::new(Line::from(hints)), rows[1]);
    }
}

fn result_lines<'a>(ctx: &RenderCtx, result: &ScanResult, saved: bool) -> Vec<Line<'a>> {
    let palette = ctx.palette;
    let badge = result.health.badge();
    let mut lines = vec![
        Line::from(vec![
            Span::styled(
                result.diagnosis.clone(),
                Style::default()
                    .fg(palette.badge_color(badge))
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            badge_span(ctx.t(result.health.label_key()), badge, palette),
        ]),
        Line::from(vec![
            Span::styled("Confidence ", palette.dim_style()),
            Span::styled(
                gauge(result.confidence as f64, 100.0, 20),
                Style::default().fg(palette.badge_color(badge)),
            ),
            Span::raw(format!(" {}%", result.confidence)),
        ]),
        Line::default(),
        Line::from(Span::styled(result.advice.clone(), Style::default().fg(palette.text))),
    ];
    if saved {
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            "✓ Saved to field records",
            Style::default().fg(palette.healthy),
        )));
    }
    lines
}
