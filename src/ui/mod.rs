//! UI rendering for the farm dashboard
//!
//! Layout, top to bottom:
//! - Navigation bar with the nine screens
//! - Offline banner (only while offline)
//! - The current screen
//! - Footer with connection state, status messages and key hints
//!
//! Dialogs and the voice overlay are drawn last, on top of the screen.
//! Before registration only the wizard is shown.
//!
//! ## Responsive Layout System
//!
//! Render functions receive a [`RenderCtx`] carrying the app, the active
//! palette and a [`LayoutContext`] for proportional sizing decisions.

mod alerts;
mod chrome;
mod components;
mod crop;
mod dashboard;
mod helpers;
mod layout;
mod profile;
mod registration;
mod scan;
mod settings;
mod soil;
mod sync;
mod theme;
mod voice;
mod weather;

pub use layout::{breakpoints, LayoutContext};
pub use theme::{Palette, DARK, LIGHT};

use ratatui::{
    layout::{Constraint, Direction, Layout},
    widgets::Block,
    Frame,
};

use crate::app::{App, ScreenState};

/// Everything a render function needs besides the frame and its area.
pub struct RenderCtx<'a> {
    pub app: &'a App,
    pub palette: &'static Palette,
    pub layout: LayoutContext,
}

impl<'a> RenderCtx<'a> {
    pub fn new(app: &'a App, layout: LayoutContext) -> Self {
        Self {
            app,
            palette: Palette::for_dark(app.appearance.is_dark()),
            layout,
        }
    }

    /// Translate in the active language.
    pub fn t<'k>(&self, key: &'k str) -> &'k str {
        self.app.t(key)
    }
}

// ============================================================================
// Main UI Rendering
// ============================================================================

/// Render the whole UI for the current state.
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let ctx = RenderCtx::new(app, LayoutContext::new(area.width, area.height));
    frame.render_widget(Block::default().style(ctx.palette.base()), area);

    if let Some(wizard) = &app.registration {
        registration::render_registration(frame, area, &ctx, wizard);
        return;
    }

    let banner_height = if app.connectivity.is_offline() { 1 } else { 0 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(banner_height),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(area);

    chrome::render_nav_bar(frame, chunks[0], &ctx);
    if banner_height > 0 {
        chrome::render_offline_banner(frame, chunks[1], &ctx);
    }

    let content = chunks[2];
    match &app.screen {
        ScreenState::Dashboard(view) => dashboard::render_dashboard(frame, content, &ctx, view),
        ScreenState::Soil(view) => soil::render_soil(frame, content, &ctx, view),
        ScreenState::Crop(cursor) => crop::render_crop(frame, content, &ctx, cursor),
        ScreenState::Weather(view) => weather::render_weather(frame, content, &ctx, view),
        ScreenState::Alerts(view) => alerts::render_alerts(frame, content, &ctx, view),
        ScreenState::Scan(view) => scan::render_scan(frame, content, &ctx, view),
        ScreenState::Sync(cursor) => sync::render_sync(frame, content, &ctx, cursor),
        ScreenState::Profile(view) => profile::render_profile(frame, content, &ctx, view),
        ScreenState::Settings(view) => settings::render_settings(frame, content, &ctx, view),
    }

    chrome::render_footer(frame, chunks[3], &ctx);

    if app.voice.is_open() {
        voice::render_voice_overlay(frame, area, &ctx);
    }
}
