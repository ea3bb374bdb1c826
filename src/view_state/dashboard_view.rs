//! Dashboard screen state

use crate::models::dashboard::{CardKind, DashboardReadings};

/// Live cards plus the card cursor and info panel toggle.
///
/// Readings start from their defaults every time the screen is entered.
#[derive(Debug, Clone, Default)]
pub struct DashboardView {
    pub readings: DashboardReadings,
    /// Index into [`CardKind::ALL`]
    pub selected: usize,
    /// Whether the technology panel for the selected card is open
    pub info_open: bool,
}

impl DashboardView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected_card(&self) -> CardKind {
        CardKind::ALL[self.selected.min(CardKind::ALL.len() - 1)]
    }

    pub fn select_next(&mut self) {
        self.selected = (self.selected + 1) % CardKind::ALL.len();
    }

    pub fn select_prev(&mut self) {
        let len = CardKind::ALL.len();
        self.selected = (self.selected + len - 1) % len;
    }

    /// Cards are laid out three per row.
    pub fn select_down(&mut self) {
        self.selected = (self.selected + 3) % CardKind::ALL.len();
    }

    pub fn select_up(&mut self) {
        let len = CardKind::ALL.len();
        self.selected = (self.selected + len - 3) % len;
    }

    pub fn toggle_info(&mut self) {
        self.info_open = !self.info_open;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_cursor_wraps() {
        let mut view = DashboardView::new();
        view.select_prev();
        assert_eq!(view.selected_card(), CardKind::Rain);
        view.select_next();
        assert_eq!(view.selected_card(), CardKind::Moisture);
        view.select_down();
        assert_eq!(view.selected_card(), CardKind::Pump);
        view.select_down();
        assert_eq!(view.selected_card(), CardKind::Moisture);
    }
}
