//! User-triggered operations.
//!
//! Key handling and voice commands both end up here. Every operation acts on
//! the current screen's state and the shared holders, and queues an offline
//! action where the farm would otherwise have talked to a device.

use std::path::PathBuf;

use serde_json::json;
use tracing::{debug, info, warn};

use super::timers::spawn_after;
use super::{App, AppMessage, Route, ScreenState};
use crate::i18n::Language;
use crate::models::crop::LEAVES;
use crate::models::dashboard::{CardValue, IrrigationAction};
use crate::models::queue::{NewQueueItem, SyncStatus};
use crate::models::weather::{pump_after, FORECAST};
use crate::state::registration::save_profile;
use crate::state::ThemeMode;
use crate::traits::Utterance;
use crate::view_state::registration_view::SUCCESS_DELAY;
use crate::view_state::scan_view::SCAN_DURATION;
use crate::view_state::voice_view::LISTEN_DELAY;
use crate::view_state::ScanPhase;

impl App {
    /// Speak `text` in the active language, honoring the voice preferences.
    pub fn speak(&self, text: &str) {
        if !self.voice_prefs.enabled || text.is_empty() {
            return;
        }
        let utterance =
            Utterance::new(text, self.current_language()).with_rate(self.voice_prefs.rate);
        self.services.speech.speak(&utterance);
    }

    fn queue_if_offline(&mut self, item: NewQueueItem) -> Option<String> {
        if !self.connectivity.is_offline() {
            return None;
        }
        let id = self.connectivity.add_to_queue(item);
        self.set_status("Queued for sync");
        Some(id)
    }

    /// Pump control from the dashboard, soil or weather screen.
    pub fn irrigate(&mut self, action: IrrigationAction) {
        let applied = match &mut self.screen {
            ScreenState::Dashboard(view) => {
                view.readings.apply(action);
                true
            }
            ScreenState::Weather(view) => {
                view.pump_on = pump_after(action, &FORECAST[0]);
                true
            }
            ScreenState::Soil(_) => {
                matches!(action, IrrigationAction::Start | IrrigationAction::Auto)
            }
            _ => false,
        };
        if !applied {
            return;
        }
        info!(action = action.as_str(), route = self.route().path(), "Irrigation command");
        self.queue_if_offline(NewQueueItem::new("irrigation", action.as_str()));
        self.mark_dirty();
    }

    /// Irrigation signal from the voice assistant. Only the dashboard
    /// listens for it.
    pub(super) fn irrigation_signal(&mut self, action: IrrigationAction) {
        if matches!(self.screen, ScreenState::Dashboard(_)) {
            self.irrigate(action);
        }
    }

    /// Read the focused item on the current screen aloud.
    pub fn read_aloud(&mut self) {
        let text = match &self.screen {
            ScreenState::Dashboard(view) => {
                let card = view.readings.card(view.selected_card());
                let value = match card.value {
                    CardValue::Text(text) => text,
                    CardValue::Key(key) => self.t(key).to_string(),
                };
                Some(format!(
                    "{}: {}. Status: {}",
                    self.t(card.kind.title_key()),
                    value,
                    self.t(card.status_key)
                ))
            }
            ScreenState::Soil(view) => {
                let status = view.sim.status();
                let text = status.fixed_text().unwrap_or_else(|| self.t("healthy"));
                Some(format!(
                    "Soil moisture is {:.0} percent. Status: {}",
                    view.sim.current.moisture, text
                ))
            }
            ScreenState::Crop(cursor) => cursor
                .get(LEAVES.len())
                .map(|i| LEAVES[i].advice.to_string()),
            ScreenState::Alerts(view) => view
                .selected_alert()
                .map(|alert| format!("{}. {}", alert.title, alert.message)),
            ScreenState::Scan(view) => view
                .result()
                .map(|result| format!("{}. {}", result.diagnosis, result.advice)),
            _ => None,
        };
        if let Some(text) = text {
            self.speak(&text);
        }
    }

    /// Save the schedule editor. Invalid input keeps the editor open.
    pub fn save_schedule(&mut self) -> bool {
        let ScreenState::Weather(view) = &mut self.screen else {
            return false;
        };
        let Some(schedule) = view.editor.as_ref().and_then(|e| e.to_schedule()) else {
            self.set_status("Enter a time as HH:MM and a duration in minutes");
            return false;
        };
        view.schedule = schedule.clone();
        view.close_editor();
        debug!(time = %schedule.time, duration = schedule.duration, "Schedule saved");
        let data = json!(schedule);
        if self
            .queue_if_offline(NewQueueItem::new("schedule", "set").with_data(data))
            .is_none()
        {
            self.set_status("Schedule saved");
        }
        self.mark_dirty();
        true
    }

    /// Begin a simulated leaf analysis.
    pub fn start_scan(&mut self) {
        let visit = self.visit;
        let ScreenState::Scan(view) = &mut self.screen else {
            return;
        };
        if view.is_scanning() {
            return;
        }
        let session = view.start();
        spawn_after(
            &self.message_tx,
            SCAN_DURATION,
            AppMessage::ScanFinished { visit, session },
        );
        self.mark_dirty();
    }

    /// Accept the path typed into the upload prompt and scan it.
    pub fn upload_scan(&mut self) {
        let ScreenState::Scan(view) = &mut self.screen else {
            return;
        };
        let ScanPhase::ChoosingFile(input) = &view.phase else {
            return;
        };
        let path = PathBuf::from(input.content().trim());
        if path.as_os_str().is_empty() || !path.is_file() {
            self.set_status("No image at that path");
            return;
        }
        debug!(path = %path.display(), "Leaf image chosen");
        view.uploaded = Some(path);
        view.phase = ScanPhase::Idle;
        self.start_scan();
    }

    /// Save the scan result. Offline, the save is queued with the result.
    pub fn save_scan(&mut self) {
        let now = self.services.clock.now_millis();
        let ScreenState::Scan(view) = &mut self.screen else {
            return;
        };
        let Some(result) = view.result().cloned() else {
            return;
        };
        view.saved = true;
        let item = NewQueueItem::new("crop", "save-scan")
            .with_data(json!({ "result": result, "timestamp": now }));
        if self.queue_if_offline(item).is_none() {
            self.set_status("Scan saved");
        }
        self.mark_dirty();
    }

    /// Mark the selected alert resolved.
    pub fn resolve_alert(&mut self) {
        if let ScreenState::Alerts(view) = &mut self.screen {
            if let Some(id) = view.resolve_selected() {
                debug!(id = %id, "Alert resolved");
                self.mark_dirty();
            }
        }
    }

    /// Retry the selected queue item on the sync screen.
    pub fn retry_selected(&mut self) {
        let ScreenState::Sync(cursor) = &self.screen else {
            return;
        };
        let queue = self.connectivity.queue();
        let Some(item) = cursor.get(queue.len()).map(|i| &queue[i]) else {
            return;
        };
        if item.status != SyncStatus::Failed {
            return;
        }
        let id = item.id.clone();
        self.connectivity.retry_sync(&id);
        self.mark_dirty();
    }

    pub fn clear_queue(&mut self) {
        self.connectivity.clear_queue();
        if let ScreenState::Sync(cursor) = &mut self.screen {
            cursor.clamp(0);
        }
        self.mark_dirty();
    }

    pub fn toggle_offline(&mut self) {
        self.connectivity.toggle_offline();
        let key = if self.connectivity.is_offline() {
            "offline"
        } else {
            "online"
        };
        let label = self.t(key).to_string();
        self.set_status(label);
    }

    pub fn set_language(&mut self, language: Language) {
        self.language.set_language(language);
        self.mark_dirty();
    }

    pub fn set_theme(&mut self, mode: ThemeMode) {
        self.appearance.set_theme(mode);
        self.mark_dirty();
    }

    /// Open the voice overlay, or cancel the running session.
    pub fn toggle_voice(&mut self) {
        if !self.is_registered() {
            return;
        }
        if self.voice.is_open() {
            self.voice.close();
        } else {
            let session = self.voice.open();
            spawn_after(
                &self.message_tx,
                LISTEN_DELAY,
                AppMessage::VoiceHeard { session },
            );
        }
        self.mark_dirty();
    }

    /// Move the wizard to step two and apply the chosen language.
    pub fn registration_next(&mut self) {
        let Some(wizard) = self.registration.as_mut() else {
            return;
        };
        if let Some(language) = wizard.advance() {
            self.set_language(language);
        } else {
            self.set_status("Enter your mobile number");
        }
        self.mark_dirty();
    }

    /// Store the profile and show the success step.
    pub fn registration_submit(&mut self) {
        let Some(wizard) = self.registration.as_mut() else {
            return;
        };
        let Some(profile) = wizard.submit() else {
            self.set_status("Fill in every field and accept the consent");
            return;
        };
        if let Err(e) = save_profile(self.services.store.as_ref(), &profile) {
            warn!(error = %e, "Failed to store farmer profile");
        }
        info!(village = %profile.village, crops = profile.crops.len(), "Farmer registered");
        spawn_after(
            &self.message_tx,
            SUCCESS_DELAY,
            AppMessage::RegistrationComplete,
        );
        self.mark_dirty();
    }

    /// Jump from the offline banner to the sync screen.
    pub fn open_sync(&mut self) {
        self.navigate(Route::Sync);
    }
}
