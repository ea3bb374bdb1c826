//! Keyboard handling.
//!
//! Global bindings:
//! - `1`-`9` jump to a screen, `Tab`/`Shift+Tab` cycle screens
//! - `o` toggles offline mode, `g` jumps to the sync queue
//! - `v` opens or cancels the voice assistant
//! - `q` or `Ctrl+C` quits
//!
//! An open dialog (schedule editor, file prompt, add forms, threshold
//! editor, help topic) receives every key until it is closed, so typing
//! never triggers a global binding.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::{App, Route, ScreenState};
use crate::models::crop::LEAVES;
use crate::models::dashboard::IrrigationAction;
use crate::state::ThemeMode;
use crate::view_state::{
    ProfileForm, RegistrationFocus, RegistrationStep, ScanPhase, ScheduleFocus, SettingsRow,
};

impl App {
    /// Handle one key press, then bring timers in line with the new state.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.quit();
            return;
        }

        if self.registration.is_some() {
            self.handle_registration_key(key);
        } else if self.voice.is_open() && key.code == KeyCode::Esc {
            self.voice.close();
        } else if self.has_open_dialog() {
            self.handle_dialog_key(key);
        } else if !self.handle_global_key(key) {
            self.handle_screen_key(key);
        }

        self.mark_dirty();
        self.reconcile();
    }

    /// Whether the current screen has a dialog that captures input.
    pub fn has_open_dialog(&self) -> bool {
        match &self.screen {
            ScreenState::Soil(view) => view.editing,
            ScreenState::Weather(view) => view.editor.is_some(),
            ScreenState::Scan(view) => matches!(view.phase, ScanPhase::ChoosingFile(_)),
            ScreenState::Profile(view) => view.form.is_some(),
            ScreenState::Settings(view) => view.help_open.is_some(),
            _ => false,
        }
    }

    fn handle_global_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char(c @ '1'..='9') => {
                if let Some(route) = Route::from_digit(c) {
                    self.navigate(route);
                }
            }
            KeyCode::Tab => self.next_screen(),
            KeyCode::BackTab => self.prev_screen(),
            KeyCode::Char('o') => self.toggle_offline(),
            KeyCode::Char('g') => self.open_sync(),
            KeyCode::Char('v') => self.toggle_voice(),
            KeyCode::Char('q') => self.quit(),
            _ => return false,
        }
        true
    }

    fn handle_screen_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('r') {
            self.read_aloud();
            return;
        }
        match self.route() {
            Route::Dashboard => self.handle_dashboard_key(key),
            Route::Soil => self.handle_soil_key(key),
            Route::Crop => {
                if let ScreenState::Crop(cursor) = &mut self.screen {
                    match key.code {
                        KeyCode::Down | KeyCode::Char('j') => cursor.next(LEAVES.len()),
                        KeyCode::Up | KeyCode::Char('k') => cursor.prev(),
                        _ => {}
                    }
                }
            }
            Route::Weather => self.handle_weather_key(key),
            Route::Alerts => self.handle_alerts_key(key),
            Route::Scan => self.handle_scan_key(key),
            Route::Sync => self.handle_sync_key(key),
            Route::Profile => {
                if let ScreenState::Profile(view) = &mut self.screen {
                    match key.code {
                        KeyCode::Char('f') => view.form = Some(ProfileForm::new_field()),
                        KeyCode::Char('d') => view.form = Some(ProfileForm::new_device()),
                        _ => {}
                    }
                }
            }
            Route::Settings => self.handle_settings_key(key),
        }
    }

    fn irrigation_key(key: KeyEvent) -> Option<IrrigationAction> {
        match key.code {
            KeyCode::Char('s') => Some(IrrigationAction::Start),
            KeyCode::Char('x') => Some(IrrigationAction::Stop),
            KeyCode::Char('a') => Some(IrrigationAction::Auto),
            _ => None,
        }
    }

    fn handle_dashboard_key(&mut self, key: KeyEvent) {
        if let Some(action) = Self::irrigation_key(key) {
            self.irrigate(action);
            return;
        }
        let ScreenState::Dashboard(view) = &mut self.screen else {
            return;
        };
        match key.code {
            KeyCode::Right | KeyCode::Char('l') => view.select_next(),
            KeyCode::Left | KeyCode::Char('h') => view.select_prev(),
            KeyCode::Down | KeyCode::Char('j') => view.select_down(),
            KeyCode::Up | KeyCode::Char('k') => view.select_up(),
            KeyCode::Char('i') => view.toggle_info(),
            KeyCode::Enter => {
                let link = view.selected_card().link();
                self.navigate_path(link);
            }
            _ => {}
        }
    }

    fn handle_soil_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('s') => self.irrigate(IrrigationAction::Start),
            KeyCode::Char('a') => self.irrigate(IrrigationAction::Auto),
            KeyCode::Char('t') => {
                if let ScreenState::Soil(view) = &mut self.screen {
                    view.toggle_editor();
                }
            }
            _ => {}
        }
    }

    fn handle_weather_key(&mut self, key: KeyEvent) {
        if let Some(action) = Self::irrigation_key(key) {
            self.irrigate(action);
        } else if key.code == KeyCode::Char('e') {
            if let ScreenState::Weather(view) = &mut self.screen {
                view.open_editor();
            }
        }
    }

    fn handle_alerts_key(&mut self, key: KeyEvent) {
        if matches!(key.code, KeyCode::Enter | KeyCode::Char('f')) {
            self.resolve_alert();
            return;
        }
        let ScreenState::Alerts(view) = &mut self.screen else {
            return;
        };
        match key.code {
            KeyCode::Right | KeyCode::Char('l') => view.next_filter(),
            KeyCode::Left | KeyCode::Char('h') => view.prev_filter(),
            KeyCode::Down | KeyCode::Char('j') => view.select_next(),
            KeyCode::Up | KeyCode::Char('k') => view.select_prev(),
            _ => {}
        }
    }

    fn handle_scan_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter | KeyCode::Char('s') => self.start_scan(),
            KeyCode::Char('w') => self.save_scan(),
            KeyCode::Char('u') => {
                if let ScreenState::Scan(view) = &mut self.screen {
                    view.open_file_prompt();
                }
            }
            KeyCode::Char('n') => {
                if let ScreenState::Scan(view) = &mut self.screen {
                    view.reset();
                }
            }
            _ => {}
        }
    }

    fn handle_sync_key(&mut self, key: KeyEvent) {
        let len = self.connectivity.queue().len();
        match key.code {
            KeyCode::Enter | KeyCode::Char('t') => self.retry_selected(),
            KeyCode::Char('c') => self.clear_queue(),
            KeyCode::Down | KeyCode::Char('j') => {
                if let ScreenState::Sync(cursor) = &mut self.screen {
                    cursor.next(len);
                }
            }
            KeyCode::Up | KeyCode::Char('k') => {
                if let ScreenState::Sync(cursor) = &mut self.screen {
                    cursor.prev();
                }
            }
            _ => {}
        }
    }

    fn handle_settings_key(&mut self, key: KeyEvent) {
        let ScreenState::Settings(view) = &mut self.screen else {
            return;
        };
        let row = view.row;
        let delta: i32 = match key.code {
            KeyCode::Down | KeyCode::Char('j') => {
                view.row = row.next();
                return;
            }
            KeyCode::Up | KeyCode::Char('k') => {
                view.row = row.prev();
                return;
            }
            KeyCode::Right | KeyCode::Char('l') => 1,
            KeyCode::Left | KeyCode::Char('h') => -1,
            KeyCode::Enter | KeyCode::Char(' ') => 0,
            _ => return,
        };
        match row {
            SettingsRow::Language => {
                let current = self.current_language();
                let next = if delta < 0 { current.prev() } else { current.next() };
                self.set_language(next);
            }
            SettingsRow::VoiceEnabled => self.voice_prefs.enabled = !self.voice_prefs.enabled,
            SettingsRow::VoiceSpeed => self.voice_prefs.adjust_rate(delta),
            SettingsRow::Connectivity => self.toggle_offline(),
            SettingsRow::Theme => {
                let all = ThemeMode::ALL;
                let i = all.iter().position(|m| *m == self.appearance.mode()).unwrap_or(0);
                let step = if delta < 0 { all.len() - 1 } else { 1 };
                self.set_theme(all[(i + step) % all.len()]);
            }
            SettingsRow::Help => match delta {
                0 => view.open_help(),
                d if d > 0 => view.next_help(),
                _ => view.prev_help(),
            },
        }
    }

    fn handle_dialog_key(&mut self, key: KeyEvent) {
        match &mut self.screen {
            ScreenState::Soil(view) => match key.code {
                KeyCode::Esc | KeyCode::Enter | KeyCode::Char('t') => view.toggle_editor(),
                KeyCode::Down | KeyCode::Tab | KeyCode::Char('j') => view.next_field(),
                KeyCode::Up | KeyCode::BackTab | KeyCode::Char('k') => view.prev_field(),
                KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('+') => view.adjust(1),
                KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('-') => view.adjust(-1),
                _ => {}
            },
            ScreenState::Weather(view) => {
                let Some(editor) = view.editor.as_mut() else {
                    return;
                };
                match key.code {
                    KeyCode::Esc => view.close_editor(),
                    KeyCode::Enter => {
                        self.save_schedule();
                    }
                    KeyCode::Tab | KeyCode::Down => editor.focus = editor.focus.next(),
                    KeyCode::BackTab | KeyCode::Up => editor.focus = editor.focus.prev(),
                    KeyCode::Char(' ') if editor.focus == ScheduleFocus::Enabled => {
                        editor.enabled = !editor.enabled;
                    }
                    _ => {
                        if let Some(input) = editor.focused_input() {
                            input.handle_key(key);
                        }
                    }
                }
            }
            ScreenState::Scan(view) => {
                let ScanPhase::ChoosingFile(input) = &mut view.phase else {
                    return;
                };
                match key.code {
                    KeyCode::Esc => view.phase = ScanPhase::Idle,
                    KeyCode::Enter => self.upload_scan(),
                    _ => {
                        input.handle_key(key);
                    }
                }
            }
            ScreenState::Profile(view) => {
                let Some(form) = view.form.as_mut() else {
                    return;
                };
                match key.code {
                    KeyCode::Esc => view.form = None,
                    KeyCode::Enter => {
                        if !view.submit_form() {
                            self.set_status("Fill in every field");
                        }
                    }
                    KeyCode::Tab | KeyCode::Down => form.focus_next(),
                    KeyCode::BackTab | KeyCode::Up => form.focus_prev(),
                    _ => {
                        if let Some(input) = form.focused_input() {
                            input.handle_key(key);
                        } else {
                            match key.code {
                                KeyCode::Right | KeyCode::Char(' ') => form.cycle_choice(1),
                                KeyCode::Left => form.cycle_choice(-1),
                                _ => {}
                            }
                        }
                    }
                }
            }
            ScreenState::Settings(view) => {
                if matches!(key.code, KeyCode::Esc | KeyCode::Enter) {
                    view.close_help();
                }
            }
            _ => {}
        }
    }

    fn handle_registration_key(&mut self, key: KeyEvent) {
        let Some(wizard) = self.registration.as_mut() else {
            return;
        };
        match wizard.step {
            RegistrationStep::Done => {}
            RegistrationStep::Contact | RegistrationStep::Farm => match key.code {
                KeyCode::Tab | KeyCode::Down => wizard.focus_next(),
                KeyCode::BackTab | KeyCode::Up => wizard.focus_prev(),
                KeyCode::Enter => {
                    if wizard.step == RegistrationStep::Contact {
                        self.registration_next();
                    } else {
                        self.registration_submit();
                    }
                }
                KeyCode::Esc => wizard.back(),
                _ => {
                    let choice = matches!(
                        wizard.focus,
                        RegistrationFocus::Language
                            | RegistrationFocus::Crops
                            | RegistrationFocus::WaterSource
                            | RegistrationFocus::Consent
                    );
                    if let Some(input) = wizard.focused_input() {
                        input.handle_key(key);
                    } else if choice {
                        match key.code {
                            KeyCode::Right | KeyCode::Char('l') => wizard.cycle_choice(1),
                            KeyCode::Left | KeyCode::Char('h') => wizard.cycle_choice(-1),
                            KeyCode::Char(' ') => wizard.toggle(),
                            _ => {}
                        }
                    }
                }
            },
        }
    }
}
