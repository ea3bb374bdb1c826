//! Message handling for the App.

use tracing::{debug, info};

use super::timers::spawn_after;
use super::{App, AppMessage, Route, ScreenState};
use crate::models::crop::canned_scan_results;
use crate::models::voice::{commands_for, VoiceAction};
use crate::state::registration::mark_registered;
use crate::view_state::registration_view::RegistrationStep;
use crate::view_state::voice_view::{VoicePhase, ACT_DELAY, CLOSE_DELAY};

impl App {
    /// Handle an incoming async message.
    ///
    /// Stale deliveries (a visit, session or generation that has moved on)
    /// are dropped without touching state.
    pub fn handle_message(&mut self, msg: AppMessage) {
        self.dispatch_message(msg);
        self.reconcile();
    }

    fn dispatch_message(&mut self, msg: AppMessage) {
        match msg {
            AppMessage::TelemetryTick { visit } => {
                if visit != self.visit || self.connectivity.is_offline() {
                    return;
                }
                let random = self.services.random.clone();
                match &mut self.screen {
                    ScreenState::Dashboard(view) => view.readings.step(random.as_ref()),
                    ScreenState::Soil(view) => {
                        let now = self.services.clock.now();
                        view.sim.step(random.as_ref(), now);
                    }
                    _ => return,
                }
                self.mark_dirty();
            }
            AppMessage::ThemeRecheck => {
                if self.appearance.recompute() {
                    debug!(dark = self.appearance.is_dark(), "Theme flipped");
                    self.mark_dirty();
                }
            }
            AppMessage::FlushDue { generation } => {
                let flushed = self.connectivity.apply_flush(generation);
                if flushed > 0 {
                    self.set_status(format!("Synced {} queued action(s)", flushed));
                }
            }
            AppMessage::ScanFinished { visit, session } => {
                if visit != self.visit {
                    return;
                }
                let ScreenState::Scan(view) = &mut self.screen else {
                    return;
                };
                if !view.is_scanning() || view.session != session {
                    return;
                }
                let results = canned_scan_results();
                let pick = self.services.random.pick_index(results.len());
                let result = results[pick].clone();
                debug!(diagnosis = %result.diagnosis, "Scan finished");
                view.finish(session, result);
                self.mark_dirty();
            }
            AppMessage::VoiceHeard { session } => {
                if !self.voice.is_current(session)
                    || self.voice.phase != Some(VoicePhase::Listening)
                {
                    return;
                }
                let commands = commands_for(self.current_language());
                let command = commands[self.services.random.pick_index(commands.len())];
                info!(phrase = command.phrase, "Voice command heard");
                self.voice.phase = Some(VoicePhase::Heard(command));
                self.speak(command.response);
                spawn_after(&self.message_tx, ACT_DELAY, AppMessage::VoiceAct { session });
                self.mark_dirty();
            }
            AppMessage::VoiceAct { session } => {
                if !self.voice.is_current(session) {
                    return;
                }
                let Some(VoicePhase::Heard(command)) = self.voice.phase else {
                    return;
                };
                self.voice.phase = Some(VoicePhase::Acted(command));
                match command.action {
                    VoiceAction::Navigate(path) => self.navigate(Route::from_path(path)),
                    VoiceAction::Irrigation(action) => self.irrigation_signal(action),
                }
                spawn_after(&self.message_tx, CLOSE_DELAY, AppMessage::VoiceDone { session });
                self.mark_dirty();
            }
            AppMessage::VoiceDone { session } => {
                if self.voice.is_current(session) {
                    self.voice.close();
                    self.mark_dirty();
                }
            }
            AppMessage::RegistrationComplete => {
                let done = self
                    .registration
                    .as_ref()
                    .is_some_and(|w| w.step == RegistrationStep::Done);
                if !done {
                    return;
                }
                mark_registered(self.services.store.as_ref());
                self.registration = None;
                self.navigate(Route::Dashboard);
            }
            AppMessage::StatusExpired { seq } => {
                if seq == self.status_seq && self.status.take().is_some() {
                    self.mark_dirty();
                }
            }
        }
    }
}
