//! Voice assistant overlay state
//!
//! A session walks Listening -> Heard -> Acting and then closes. Each phase
//! change is driven by a delayed message carrying the session id; toggling
//! the overlay off bumps the id so in-flight messages are dropped.

use std::time::Duration;

use crate::models::voice::VoiceCommand;

/// Listening time before a command is "recognized".
pub const LISTEN_DELAY: Duration = Duration::from_millis(1500);
/// Pause between speaking the response and running the action.
pub const ACT_DELAY: Duration = Duration::from_secs(1);
/// How long the overlay lingers after the action.
pub const CLOSE_DELAY: Duration = Duration::from_secs(2);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoicePhase {
    Listening,
    Heard(VoiceCommand),
    Acted(VoiceCommand),
}

#[derive(Debug, Clone, Default)]
pub struct VoiceSession {
    pub session: u64,
    pub phase: Option<VoicePhase>,
}

impl VoiceSession {
    pub fn is_open(&self) -> bool {
        self.phase.is_some()
    }

    /// Open a new session and return its id.
    pub fn open(&mut self) -> u64 {
        self.session += 1;
        self.phase = Some(VoicePhase::Listening);
        self.session
    }

    /// Close the overlay, invalidating pending timers.
    pub fn close(&mut self) {
        self.session += 1;
        self.phase = None;
    }

    pub fn is_current(&self, session: u64) -> bool {
        self.is_open() && session == self.session
    }

    pub fn command(&self) -> Option<VoiceCommand> {
        match self.phase {
            Some(VoicePhase::Heard(cmd)) | Some(VoicePhase::Acted(cmd)) => Some(cmd),
            _ => None,
        }
    }
}
