//! Screen transitions.

use std::time::Duration;

use tracing::debug;

use super::{App, Route, ScreenState, Services};
use crate::state::registration::load_profile;
use crate::view_state::{
    AlertsView, DashboardView, ListCursor, ProfileView, ScanView, SettingsView, SoilView,
    WeatherView,
};

/// Period of the simulated sensor walks.
pub(super) const TELEMETRY_INTERVAL: Duration = Duration::from_secs(5);

/// Fresh state for a screen. Simulated readings start over on every visit.
pub(super) fn build_screen(route: Route, services: &Services) -> ScreenState {
    match route {
        Route::Dashboard => ScreenState::Dashboard(DashboardView::new()),
        Route::Soil => ScreenState::Soil(SoilView::new(services.random.as_ref())),
        Route::Crop => ScreenState::Crop(ListCursor::default()),
        Route::Weather => ScreenState::Weather(WeatherView::new()),
        Route::Alerts => ScreenState::Alerts(AlertsView::new(services.clock.now())),
        Route::Scan => ScreenState::Scan(ScanView::new()),
        Route::Sync => ScreenState::Sync(ListCursor::default()),
        Route::Profile => {
            ScreenState::Profile(ProfileView::new(load_profile(services.store.as_ref())))
        }
        Route::Settings => ScreenState::Settings(SettingsView::new()),
    }
}

impl App {
    /// Leave the current screen and enter `route`.
    ///
    /// The old screen's state is dropped and its telemetry walk stopped.
    /// Timers tagged with the old visit become stale.
    pub fn navigate(&mut self, route: Route) {
        if !self.is_registered() {
            return;
        }
        debug!(from = self.route().path(), to = route.path(), "Navigating");
        self.visit += 1;
        self.stop_telemetry();
        self.screen = build_screen(route, &self.services);
        self.mark_dirty();
        self.reconcile();
    }

    /// Navigate by path. Unknown paths land on the dashboard.
    pub fn navigate_path(&mut self, path: &str) {
        self.navigate(Route::from_path(path));
    }

    pub fn next_screen(&mut self) {
        self.navigate(self.route().next());
    }

    pub fn prev_screen(&mut self) {
        self.navigate(self.route().prev());
    }
}
