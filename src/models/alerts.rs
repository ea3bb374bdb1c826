//! Canned farm alerts.

use chrono::{DateTime, Duration, Local};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    Soil,
    Crop,
    Weather,
    System,
}

impl AlertKind {
    pub fn icon(self) -> &'static str {
        match self {
            AlertKind::Soil => "💧",
            AlertKind::Crop => "🌿",
            AlertKind::Weather => "🌧",
            AlertKind::System => "⚙",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Info,
    Warning,
    Critical,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Alert {
    pub id: String,
    pub kind: AlertKind,
    pub severity: Severity,
    pub title: String,
    pub message: String,
    pub timestamp: DateTime<Local>,
    pub resolved: bool,
}

/// Filter chip on the alerts screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AlertFilter {
    #[default]
    All,
    Only(AlertKind),
}

impl AlertFilter {
    pub const CHIPS: [AlertFilter; 5] = [
        AlertFilter::All,
        AlertFilter::Only(AlertKind::Soil),
        AlertFilter::Only(AlertKind::Crop),
        AlertFilter::Only(AlertKind::Weather),
        AlertFilter::Only(AlertKind::System),
    ];

    pub fn label(self) -> &'static str {
        match self {
            AlertFilter::All => "All",
            AlertFilter::Only(AlertKind::Soil) => "Soil",
            AlertFilter::Only(AlertKind::Crop) => "Crop",
            AlertFilter::Only(AlertKind::Weather) => "Weather",
            AlertFilter::Only(AlertKind::System) => "System",
        }
    }

    pub fn matches(self, alert: &Alert) -> bool {
        match self {
            AlertFilter::All => true,
            AlertFilter::Only(kind) => alert.kind == kind,
        }
    }

    fn position(self) -> usize {
        Self::CHIPS.iter().position(|c| *c == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::CHIPS[(self.position() + 1) % Self::CHIPS.len()]
    }

    pub fn prev(self) -> Self {
        let len = Self::CHIPS.len();
        Self::CHIPS[(self.position() + len - 1) % len]
    }
}

/// The five seeded alerts, timestamped relative to `now`.
pub fn seed_alerts(now: DateTime<Local>) -> Vec<Alert> {
    let alert = |id: &str,
                 kind: AlertKind,
                 severity: Severity,
                 title: &str,
                 message: &str,
                 age: Duration,
                 resolved: bool| Alert {
        id: id.to_string(),
        kind,
        severity,
        title: title.to_string(),
        message: message.to_string(),
        timestamp: now - age,
        resolved,
    };

    vec![
        alert(
            "1",
            AlertKind::Soil,
            Severity::Critical,
            "Low Soil Moisture",
            "Soil moisture dropped to 28%. Start irrigation immediately.",
            Duration::minutes(15),
            false,
        ),
        alert(
            "2",
            AlertKind::Crop,
            Severity::Warning,
            "Leaf Disease Detected",
            "Early signs of fungal infection on Leaf #4. View advice for treatment.",
            Duration::hours(2),
            false,
        ),
        alert(
            "3",
            AlertKind::Weather,
            Severity::Info,
            "Rain Expected",
            "70% chance of rain today. Pump paused automatically.",
            Duration::hours(4),
            false,
        ),
        alert(
            "4",
            AlertKind::System,
            Severity::Warning,
            "Sensor Connection Weak",
            "Soil sensor signal strength low. Check battery or connection.",
            Duration::hours(6),
            false,
        ),
        alert(
            "5",
            AlertKind::Soil,
            Severity::Info,
            "Irrigation Complete",
            "Irrigation cycle completed. Soil moisture now at 65%.",
            Duration::hours(8),
            true,
        ),
    ]
}

/// Summary figures shown above the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AlertSummary {
    pub critical: usize,
    pub warning: usize,
    pub resolved: usize,
}

pub fn summarize(alerts: &[Alert]) -> AlertSummary {
    AlertSummary {
        critical: alerts
            .iter()
            .filter(|a| a.severity == Severity::Critical && !a.resolved)
            .count(),
        warning: alerts
            .iter()
            .filter(|a| a.severity == Severity::Warning && !a.resolved)
            .count(),
        resolved: alerts.iter().filter(|a| a.resolved).count(),
    }
}

/// `Nm ago` under an hour, `Nh ago` under a day, else the date.
pub fn format_age(timestamp: DateTime<Local>, now: DateTime<Local>) -> String {
    let minutes = (now - timestamp).num_minutes();
    let hours = minutes / 60;
    if minutes < 60 {
        format!("{}m ago", minutes)
    } else if hours < 24 {
        format!("{}h ago", hours)
    } else {
        timestamp.format("%-m/%-d/%Y").to_string()
    }
}
