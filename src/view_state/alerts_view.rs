//! Alerts screen state

use chrono::{DateTime, Local};

use crate::models::alerts::{seed_alerts, summarize, Alert, AlertFilter, AlertSummary};

#[derive(Debug, Clone)]
pub struct AlertsView {
    pub alerts: Vec<Alert>,
    pub filter: AlertFilter,
    /// Index into the filtered list
    pub selected: usize,
}

impl AlertsView {
    pub fn new(now: DateTime<Local>) -> Self {
        Self {
            alerts: seed_alerts(now),
            filter: AlertFilter::All,
            selected: 0,
        }
    }

    pub fn visible(&self) -> Vec<&Alert> {
        self.alerts.iter().filter(|a| self.filter.matches(a)).collect()
    }

    pub fn summary(&self) -> AlertSummary {
        summarize(&self.alerts)
    }

    pub fn selected_alert(&self) -> Option<&Alert> {
        self.visible().get(self.selected).copied()
    }

    pub fn next_filter(&mut self) {
        self.filter = self.filter.next();
        self.selected = 0;
    }

    pub fn prev_filter(&mut self) {
        self.filter = self.filter.prev();
        self.selected = 0;
    }

    pub fn select_next(&mut self) {
        let len = self.visible().len();
        if len > 0 {
            self.selected = (self.selected + 1).min(len - 1);
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Mark the selected alert resolved. Returns its id when something changed.
    pub fn resolve_selected(&mut self) -> Option<String> {
        let id = self.selected_alert().filter(|a| !a.resolved)?.id.clone();
        if let Some(alert) = self.alerts.iter_mut().find(|a| a.id == id) {
            alert.resolved = true;
        }
        Some(id)
    }
}
