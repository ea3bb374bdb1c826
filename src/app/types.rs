//! Type definitions for the application state.
//!
//! Contains enums used for tracking UI state:
//! - [`Route`] - Which screen is currently displayed
//! - [`ScreenState`] - The live state of that screen

use crate::view_state::{
    AlertsView, DashboardView, ListCursor, ProfileView, ScanView, SettingsView, SoilView,
    WeatherView,
};

/// Navigable screens, in navigation bar order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Route {
    #[default]
    Dashboard,
    Soil,
    Crop,
    Weather,
    Alerts,
    Scan,
    Sync,
    Profile,
    Settings,
}

impl Route {
    pub const ALL: [Route; 9] = [
        Route::Dashboard,
        Route::Soil,
        Route::Crop,
        Route::Weather,
        Route::Alerts,
        Route::Scan,
        Route::Sync,
        Route::Profile,
        Route::Settings,
    ];

    /// Resolve a path. Unknown paths land on the dashboard.
    pub fn from_path(path: &str) -> Self {
        let trimmed = path.trim();
        let normalized = if trimmed.len() > 1 {
            trimmed.trim_end_matches('/')
        } else {
            trimmed
        };
        Self::ALL
            .into_iter()
            .find(|route| route.path() == normalized)
            .unwrap_or_default()
    }

    pub fn path(self) -> &'static str {
        match self {
            Route::Dashboard => "/",
            Route::Soil => "/soil",
            Route::Crop => "/crop",
            Route::Weather => "/weather",
            Route::Alerts => "/alerts",
            Route::Scan => "/scan",
            Route::Sync => "/sync",
            Route::Profile => "/profile",
            Route::Settings => "/settings",
        }
    }

    /// Translation key of the screen title.
    pub fn title_key(self) -> &'static str {
        match self {
            Route::Dashboard => "dashboard",
            Route::Soil => "soilMonitor",
            Route::Crop => "cropHealth",
            Route::Weather => "weather",
            Route::Alerts => "alerts",
            Route::Scan => "scanLeaf",
            // No translation exists; the lookup falls back to this text
            Route::Sync => "Sync",
            Route::Profile => "profile",
            Route::Settings => "settings",
        }
    }

    fn index(self) -> usize {
        Self::ALL.iter().position(|r| *r == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        let len = Self::ALL.len();
        Self::ALL[(self.index() + len - 1) % len]
    }

    /// Route bound to a number key (1-9).
    pub fn from_digit(digit: char) -> Option<Self> {
        let n = digit.to_digit(10)? as usize;
        (1..=Self::ALL.len()).contains(&n).then(|| Self::ALL[n - 1])
    }

    /// Screens that advance a telemetry walk every few seconds.
    pub fn has_telemetry(self) -> bool {
        matches!(self, Route::Dashboard | Route::Soil)
    }
}

/// State of the screen currently on display.
#[derive(Debug, Clone)]
pub enum ScreenState {
    Dashboard(DashboardView),
    Soil(SoilView),
    Crop(ListCursor),
    Weather(WeatherView),
    Alerts(AlertsView),
    Scan(ScanView),
    Sync(ListCursor),
    Profile(ProfileView),
    Settings(SettingsView),
}

impl ScreenState {
    pub fn route(&self) -> Route {
        match self {
            ScreenState::Dashboard(_) => Route::Dashboard,
            ScreenState::Soil(_) => Route::Soil,
            ScreenState::Crop(_) => Route::Crop,
            ScreenState::Weather(_) => Route::Weather,
            ScreenState::Alerts(_) => Route::Alerts,
            ScreenState::Scan(_) => Route::Scan,
            ScreenState::Sync(_) => Route::Sync,
            ScreenState::Profile(_) => Route::Profile,
            ScreenState::Settings(_) => Route::Settings,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_path() {
        assert_eq!(Route::from_path("/"), Route::Dashboard);
        assert_eq!(Route::from_path("/soil"), Route::Soil);
        assert_eq!(Route::from_path("/sync/"), Route::Sync);
        assert_eq!(Route::from_path("/nowhere"), Route::Dashboard);
        assert_eq!(Route::from_path(""), Route::Dashboard);
    }

    #[test]
    fn test_paths_round_trip() {
        for route in Route::ALL {
            assert_eq!(Route::from_path(route.path()), route);
        }
    }

    #[test]
    fn test_digit_bindings() {
        assert_eq!(Route::from_digit('1'), Some(Route::Dashboard));
        assert_eq!(Route::from_digit('9'), Some(Route::Settings));
        assert_eq!(Route::from_digit('0'), None);
        assert_eq!(Route::from_digit('x'), None);
    }

    #[test]
    fn test_cycle() {
        assert_eq!(Route::Settings.next(), Route::Dashboard);
        assert_eq!(Route::Dashboard.prev(), Route::Settings);
    }
}
