//! Settings screen state

use crate::models::help::HELP_TOPICS;

pub const MIN_VOICE_RATE: f32 = 0.5;
pub const MAX_VOICE_RATE: f32 = 2.0;
pub const VOICE_RATE_STEP: f32 = 0.1;

/// Read-aloud preferences applied to every spoken phrase.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VoicePrefs {
    pub enabled: bool,
    pub rate: f32,
}

impl Default for VoicePrefs {
    fn default() -> Self {
        Self {
            enabled: true,
            rate: 1.0,
        }
    }
}

impl VoicePrefs {
    /// Change the rate by `steps` increments, clamped and kept on the 0.1 grid.
    pub fn adjust_rate(&mut self, steps: i32) {
        let rate = self.rate + steps as f32 * VOICE_RATE_STEP;
        self.rate = ((rate.clamp(MIN_VOICE_RATE, MAX_VOICE_RATE)) * 10.0).round() / 10.0;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SettingsRow {
    #[default]
    Language,
    VoiceEnabled,
    VoiceSpeed,
    Connectivity,
    Theme,
    Help,
}

impl SettingsRow {
    pub const ALL: [SettingsRow; 6] = [
        SettingsRow::Language,
        SettingsRow::VoiceEnabled,
        SettingsRow::VoiceSpeed,
        SettingsRow::Connectivity,
        SettingsRow::Theme,
        SettingsRow::Help,
    ];

    fn index(self) -> usize {
        Self::ALL.iter().position(|r| *r == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1).min(Self::ALL.len() - 1)]
    }

    pub fn prev(self) -> Self {
        Self::ALL[self.index().saturating_sub(1)]
    }
}

#[derive(Debug, Clone, Default)]
pub struct SettingsView {
    pub row: SettingsRow,
    /// Highlighted help topic while the help row is active
    pub help_selected: usize,
    /// Topic shown in the help dialog
    pub help_open: Option<usize>,
}

impl SettingsView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_help(&mut self) {
        self.help_selected = (self.help_selected + 1) % HELP_TOPICS.len();
    }

    pub fn prev_help(&mut self) {
        let len = HELP_TOPICS.len();
        self.help_selected = (self.help_selected + len - 1) % len;
    }

    pub fn open_help(&mut self) {
        self.help_open = Some(self.help_selected);
    }

    pub fn close_help(&mut self) {
        self.help_open = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_bounds_and_grid() {
        let mut prefs = VoicePrefs::default();
        prefs.adjust_rate(3);
        assert_eq!(prefs.rate, 1.3);
        prefs.adjust_rate(20);
        assert_eq!(prefs.rate, 2.0);
        prefs.adjust_rate(-40);
        assert_eq!(prefs.rate, 0.5);
    }

    #[test]
    fn test_rows_stop_at_ends() {
        assert_eq!(SettingsRow::Language.prev(), SettingsRow::Language);
        assert_eq!(SettingsRow::Help.next(), SettingsRow::Help);
        assert_eq!(SettingsRow::Language.next(), SettingsRow::VoiceEnabled);
    }
}
