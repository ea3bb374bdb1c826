//! Weather forecast, pump control and irrigation schedule.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::components::{render_dialog_frame, DialogFrameConfig};
use super::helpers::{badge_span, focus_marker, input_styles, key_hint};
use super::RenderCtx;
use crate::models::weather::{rain_expected, FORECAST};
use crate::models::Badge;
use crate::view_state::{ScheduleEditor, ScheduleFocus, WeatherView};
use crate::widgets::InputBoxWidget;

pub fn render_weather(frame: &mut Frame, area: Rect, ctx: &RenderCtx, view: &WeatherView) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6),
            Constraint::Length(3),
            Constraint::Length(4),
            Constraint::Min(4),
        ])
        .split(area);

    render_forecast(frame, chunks[0], ctx);

    let palette = ctx.palette;
    let today = &FORECAST[0];
    let suggestion = if rain_expected(today) {
        Line::from(Span::styled(
            format!("☂ Rain expected today ({}%). Consider pausing irrigation.", today.rain),
            Style::default().fg(palette.warning).add_modifier(Modifier::BOLD),
        ))
    } else {
        Line::from(Span::styled(
            format!("☀ Dry day ahead ({}% rain). Irrigation recommended.", today.rain),
            Style::default().fg(palette.healthy),
        ))
    };
    frame.render_widget(
        Paragraph::new(suggestion).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(palette.border_style(false)),
        ),
        chunks[1],
    );

    let pump_key = if view.pump_on { "on" } else { "off" };
    let mut status = vec![Span::styled(format!("{}: ", ctx.t("pumpStatus")), palette.dim_style())];
    status.push(badge_span(ctx.t(pump_key), Badge::for_pump(view.pump_on), palette));
    let mut controls = key_hint("s", ctx.t("startIrrigation"), palette);
    controls.extend(key_hint("x", ctx.t("stopIrrigation"), palette));
    controls.extend(key_hint("a", ctx.t("autoMode"), palette));
    frame.render_widget(
        Paragraph::new(vec![Line::from(status), Line::from(controls)]).block(
            Block::default()
                .title(Span::styled(format!(" {} ", ctx.t("control")), palette.title_style()))
                .borders(Borders::ALL)
                .border_style(palette.border_style(false)),
        ),
        chunks[2],
    );

    let schedule = &view.schedule;
    let state = if schedule.enabled { "Enabled" } else { "Disabled" };
    let lines = vec![
        Line::from(vec![
            Span::styled("Daily at ", palette.dim_style()),
            Span::styled(schedule.time.clone(), Style::default().fg(palette.text)),
            Span::styled(format!(" for {} min  ", schedule.duration), palette.dim_style()),
            badge_span(
                state,
                if schedule.enabled { Badge::On } else { Badge::Off },
                palette,
            ),
        ]),
        Line::from(key_hint("e", "Edit schedule", palette)),
    ];
    frame.render_widget(
        Paragraph::new(lines).block(
            Block::default()
                .title(Span::styled(" Irrigation Schedule ", palette.title_style()))
                .borders(Borders::ALL)
                .border_style(palette.border_style(false)),
        ),
        chunks[3],
    );

    if let Some(editor) = &view.editor {
        render_schedule_editor(frame, area, ctx, editor);
    }
}

fn render_forecast(frame: &mut Frame, area: Rect, ctx: &RenderCtx) {
    let palette = ctx.palette;
    let block = Block::default()
        .title(Span::styled(format!(" {} ", ctx.t("weather")), palette.title_style()))
        .borders(Borders::ALL)
        .border_style(palette.border_style(false));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, FORECAST.len() as u32); FORECAST.len()])
        .split(inner);
    for (day, col) in FORECAST.iter().zip(cols.iter()) {
        let rain_style = if rain_expected(day) {
            Style::default().fg(palette.on).add_modifier(Modifier::BOLD)
        } else {
            palette.dim_style()
        };
        let lines = vec![
            Line::from(Span::styled(day.day, palette.title_style())),
            Line::from(format!("{} {}°", day.sky.glyph(), day.temp_c)),
            Line::from(Span::styled(format!("{}%", day.rain), rain_style)),
        ];
        frame.render_widget(Paragraph::new(lines).centered(), *col);
    }
}

fn render_schedule_editor(frame: &mut Frame, area: Rect, ctx: &RenderCtx, editor: &ScheduleEditor) {
    let palette = ctx.palette;
    let config = DialogFrameConfig::new("Irrigation Schedule", 10);
    let inner = render_dialog_frame(frame, area, &ctx.layout, &config, palette);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .split(inner);

    let (marker, style) = focus_marker(editor.focus == ScheduleFocus::Enabled, palette);
    let check = if editor.enabled { "[x]" } else { "[ ]" };
    frame.render_widget(
        Paragraph::new(Line::from(vec![
            marker,
            Span::styled(format!("{} Enable daily irrigation (Space)", check), style),
        ])),
        rows[0],
    );

    let styles = input_styles(palette);
    frame.render_widget(
        InputBoxWidget::new(
            &editor.time,
            "Start time (HH:MM)",
            editor.focus == ScheduleFocus::Time,
            styles,
        ),
        rows[1],
    );
    frame.render_widget(
        InputBoxWidget::new(
            &editor.duration,
            "Duration (minutes)",
            editor.focus == ScheduleFocus::Duration,
            styles,
        ),
        rows[2],
    );

    let mut hints = key_hint("Enter", ctx.t("save"), palette);
    hints.extend(key_hint("Esc", ctx.t("cancel"), palette));
    frame.render_widget(Paragraph::new(Line::from(hints)), rows[3]);
}
