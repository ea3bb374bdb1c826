//! Two-step farmer registration, drawn full screen before anything else.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use super::helpers::{centered_rect, focus_marker, inner_rect, input_styles, key_hint};
use super::RenderCtx;
use crate::models::profile::CROP_OPTIONS;
use crate::view_state::{RegistrationFocus, RegistrationStep, RegistrationWizard};
use crate::widgets::InputBoxWidget;

pub fn render_registration(
    frame: &mut Frame,
    area: Rect,
    ctx: &RenderCtx,
    wizard: &RegistrationWizard,
) {
    let palette = ctx.palette;
    let height = match wizard.step {
        RegistrationStep::Contact => 12,
        RegistrationStep::Farm => 21,
        RegistrationStep::Done => 8,
    };
    let width = ctx.layout.bounded_width(60, 40, 72);
    let panel = centered_rect(area, width, height);

    let step_label = match wizard.step {
        RegistrationStep::Contact => "Step 1 of 2",
        RegistrationStep::Farm => "Step 2 of 2",
        RegistrationStep::Done => "Complete",
    };
    let block = Block::default()
        .title(Span::styled(
            format!(" 🌾 {} · {} ", ctx.t("registration"), step_label),
            palette.title_style(),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(palette.border_style(true));
    frame.render_widget(block, panel);
    let inner = inner_rect(panel, 1);
    let inner = Rect {
        x: inner.x + 1,
        width: inner.width.saturating_sub(2),
        ..inner
    };

    match wizard.step {
        RegistrationStep::Contact => render_contact(frame, inner, ctx, wizard),
        RegistrationStep::Farm => render_farm(frame, inner, ctx, wizard),
        RegistrationStep::Done => {
            let lines = vec![
                Line::default(),
                Line::from(Span::styled(
                    "✓ Registration successful",
                    Style::default().fg(palette.healthy).add_modifier(Modifier::BOLD),
                ))
                .centered(),
                Line::default(),
                Line::from(Span::styled(
                    format!("Welcome, {}. Opening your dashboard...", wizard.name.content().trim()),
                    palette.dim_style(),
                ))
                .centered(),
            ];
            frame.render_widget(Paragraph::new(lines), inner);
        }
    }
}

fn render_contact(frame: &mut Frame, area: Rect, ctx: &RenderCtx, wizard: &RegistrationWizard) {
    let palette = ctx.palette;
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(area);

    frame.render_widget(
        InputBoxWidget::new(
            &wizard.mobile,
            "Mobile number",
            wizard.focus == RegistrationFocus::Mobile,
            input_styles(palette),
        ),
        rows[0],
    );

    let (marker, style) = focus_marker(wizard.focus == RegistrationFocus::Language, palette);
    let mut spans = vec![marker, Span::styled("Language   ", style)];
    for lang in crate::i18n::Language::ALL {
        let chosen = lang == wizard.language;
        spans.push(Span::styled(
            if chosen {
                format!("[{}] ", lang.native_name())
            } else {
                format!(" {}  ", lang.native_name())
            },
            if chosen {
                Style::default().fg(palette.accent).add_modifier(Modifier::BOLD)
            } else {
                palette.dim_style()
            },
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), rows[2]);

    let mut hints = key_hint("Tab", "next field", palette);
    hints.extend(key_hint("Enter", ctx.t("next"), palette));
    frame.render_widget(Paragraph::new(Line::from(hints)), rows[4]);
}

fn render_farm(frame: &mut Frame, area: Rect, ctx: &RenderCtx, wizard: &RegistrationWizard) {
    let palette = ctx.palette;
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(area);

    let styles = input_styles(palette);
    let focus = wizard.focus;
    frame.render_widget(
        InputBoxWidget::new(&wizard.name, "Farmer name", focus == RegistrationFocus::Name, styles),
        rows[0],
    );
    frame.render_widget(
        InputBoxWidget::new(&wizard.village, "Village", focus == RegistrationFocus::Village, styles),
        rows[1],
    );
    frame.render_widget(
        InputBoxWidget::new(
            &wizard.farm_size,
            "Farm size (acres)",
            focus == RegistrationFocus::FarmSize,
            styles,
        ),
        rows[2],
    );

    let crops_focused = focus == RegistrationFocus::Crops;
    let (marker, style) = focus_marker(crops_focused, palette);
    frame.render_widget(
        Paragraph::new(Line::from(vec![marker, Span::styled("Crops (Space to tick)", style)])),
        rows[3],
    );
    let mut crop_lines: Vec<Line> = Vec::new();
    for chunk in CROP_OPTIONS.chunks(4).enumerate() {
        let (row, crops) = chunk;
        let mut spans = vec![Span::raw("  ")];
        for (col, crop) in crops.iter().enumerate() {
            let idx = row * 4 + col;
            let ticked = wizard.crops.contains(crop);
            let check = if ticked { "[x]" } else { "[ ]" };
            let style = if crops_focused && idx == wizard.crop_cursor {
                Style::default().fg(palette.accent).add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
            } else if ticked {
                Style::default().fg(palette.healthy)
            } else {
                Style::default().fg(palette.text)
            };
            spans.push(Span::styled(format!("{} {:<11}", check, crop), style));
        }
        crop_lines.push(Line::from(spans));
    }
    frame.render_widget(Paragraph::new(crop_lines), rows[4]);

    let (marker, style) = focus_marker(focus == RegistrationFocus::WaterSource, palette);
    let water = wizard.water_source.map(|w| w.label()).unwrap_or("Select");
    frame.render_widget(
        Paragraph::new(Line::from(vec![
            marker,
            Span::styled("Water source  ", style),
            Span::styled(format!("◀ {} ▶", water), style),
        ])),
        rows[5],
    );

    let (marker, style) = focus_marker(focus == RegistrationFocus::Consent, palette);
    let check = if wizard.consent { "[x]" } else { "[ ]" };
    frame.render_widget(
        Paragraph::new(Line::from(vec![
            marker,
            Span::styled(format!("{} I agree to share farm data for advisories", check), style),
        ])),
        rows[6],
    );

    let mut hints = key_hint("Tab", "next field", palette);
    hints.extend(key_hint("Enter", ctx.t("submit"), palette));
    hints.extend(key_hint("Esc", "back", palette));
    if !wizard.can_submit() {
        hints.push(Span::styled("(fill every field)", palette.dim_style()));
    }
    frame.render_widget(Paragraph::new(Line::from(hints)), rows[8]);
}
