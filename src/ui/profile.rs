//! Farm profile: farmer details, fields and devices.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::components::{render_dialog_frame, DialogFrameConfig};
use super::helpers::{badge_span, focus_marker, input_styles, key_hint};
use super::theme::Palette;
use super::RenderCtx;
use crate::models::profile::FIELD_CROPS;
use crate::models::{Badge, DeviceKind};
use crate::view_state::{DeviceForm, FieldForm, ProfileForm, ProfileView};
use crate::widgets::InputBoxWidget;

pub fn render_profile(frame: &mut Frame, area: Rect, ctx: &RenderCtx, view: &ProfileView) {
    let palette = ctx.palette;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6),
            Constraint::Min(4),
            Constraint::Length(3),
        ])
        .split(area);

    let profile = &view.profile;
    let label = |text: &str| Span::styled(format!("{:<14}", text), palette.dim_style());
    let value = |text: String| Span::styled(text, Style::default().fg(palette.text));
    let lines = vec![
        Line::from(vec![label("Name"), value(profile.name.clone())]),
        Line::from(vec![label("Village"), value(profile.village.clone())]),
        Line::from(vec![
            label("Farm size"),
            value(format!("{} acres", profile.farm_size)),
        ]),
        Line::from(vec![
            label("Water source"),
            value(
                profile
                    .water_source
                    .map(|w| w.label().to_string())
                    .unwrap_or_else(|| "-".to_string()),
            ),
        ]),
    ];
    frame.render_widget(
        Paragraph::new(lines).block(
            Block::default()
                .title(Span::styled(format!(" {} ", ctx.t("profile")), palette.title_style()))
                .borders(Borders::ALL)
                .border_style(palette.border_style(false)),
        ),
        chunks[0],
    );

    let panels = Layout::default()
        .direction(if ctx.layout.should_stack_panels() {
            Direction::Vertical
        } else {
            Direction::Horizontal
        })
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);

    let field_lines: Vec<Line> = view
        .fields
        .iter()
        .map(|field| {
            Line::from(vec![
                Span::styled(format!("{:<12}", field.name), Style::default().fg(palette.text)),
                Span::styled(format!("{:>5.1} ac  ", field.area), palette.dim_style()),
                Span::styled(field.crop.clone(), Style::default().fg(palette.healthy)),
            ])
        })
        .collect();
    frame.render_widget(
        Paragraph::new(field_lines).block(
            Block::default()
                .title(Span::styled(
                    format!(" Fields ({}) ", view.fields.len()),
                    palette.title_style(),
                ))
                .borders(Borders::ALL)
                .border_style(palette.border_style(false)),
        ),
        panels[0],
    );

    let device_lines: Vec<Line> = view
        .devices
        .iter()
        .map(|device| {
            let (state, badge) = if device.online {
                (ctx.t("online"), Badge::Healthy)
            } else {
                (ctx.t("offline"), Badge::Critical)
            };
            Line::from(vec![
                Span::styled(format!("{:<12}", device.name), Style::default().fg(palette.text)),
                Span::styled(format!("{:<16}", device.kind.label()), palette.dim_style()),
                badge_span(state, badge, palette),
            ])
        })
        .collect();
    frame.render_widget(
        Paragraph::new(device_lines).block(
            Block::default()
                .title(Span::styled(
                    format!(" Devices ({}/{} online) ", view.online_devices(), view.devices.len()),
                    palette.title_style(),
                ))
                .borders(Borders::ALL)
                .border_style(palette.border_style(false)),
        ),
        panels[1],
    );

    let mut hints = key_hint("f", "Add field", palette);
    hints.extend(key_hint("d", "Add device", palette));
    frame.render_widget(
        Paragraph::new(Line::from(hints)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(palette.border_style(false)),
        ),
        chunks[2],
    );

    match &view.form {
        Some(ProfileForm::Field(form)) => render_field_form(frame, area, ctx, form),
        Some(ProfileForm::Device(form)) => render_device_form(frame, area, ctx, form),
        None => {}
    }
}

/// `◀ choice ▶` picker row.
fn choice_line(label: &str, choice: Option<&str>, focused: bool, palette: &Palette) -> Line<'static> {
    let (marker, style) = focus_marker(focused, palette);
    Line::from(vec![
        marker,
        Span::styled(format!("{:<8}", label), style),
        Span::styled(format!("◀ {} ▶", choice.unwrap_or("Select")), style),
    ])
}

fn form_hints(ctx: &RenderCtx) -> Line<'static> {
    let mut hints = key_hint("Tab", "next", ctx.palette);
    hints.extend(key_hint("Enter", "Add", ctx.palette));
    hints.extend(key_hint("Esc", ctx.t("cancel"), ctx.palette));
    Line::from(hints)
}

fn render_field_form(frame: &mut Frame, area: Rect, ctx: &RenderCtx, form: &FieldForm) {
    let palette = ctx.palette;
    let config = DialogFrameConfig::new("Add Field", 9);
    let inner = render_dialog_frame(frame, area, &ctx.layout, &config, palette);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(inner);
    let styles = input_styles(palette);
    frame.render_widget(
        InputBoxWidget::new(&form.name, "Field name", form.focus == 0, styles),
        rows[0],
    );
    frame.render_widget(
        InputBoxWidget::new(&form.area, "Area (acres)", form.focus == 1, styles),
        rows[1],
    );
    let crop = form.crop.map(|i| FIELD_CROPS[i]);
    frame.render_widget(
        Paragraph::new(choice_line("Crop", crop, form.focus == 2, palette)),
        rows[2],
    );
    frame.render_widget(Paragraph::new(form_hints(ctx)), rows[3]);
}

fn render_device_form(frame: &mut Frame, area: Rect, ctx: &RenderCtx, form: &DeviceForm) {
    let palette = ctx.palette;
    let config = DialogFrameConfig::new("Add Device", 6);
    let inner = render_dialog_frame(frame, area, &ctx.layout, &config, palette);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(inner);
    frame.render_widget(
        InputBoxWidget::new(&form.name, "Device name", form.focus == 0, input_styles(palette)),
        rows[0],
    );
    let kind = form.kind.map(|i| DeviceKind::ALL[i].label());
    frame.render_widget(
        Paragraph::new(choice_line("Type", kind, form.focus == 1, palette)),
        rows[1],
    );
    frame.render_widget(Paragraph::new(form_hints(ctx)), rows[2]);
}
