use std::sync::{Arc, Mutex};

use crate::traits::{SpeechOutput, Utterance};

/// Captures utterances instead of speaking them.
#[derive(Debug, Clone)]
pub struct RecordingSpeech {
    spoken: Arc<Mutex<Vec<Utterance>>>,
    available: bool,
}

impl RecordingSpeech {
    pub fn new() -> Self {
        Self {
            spoken: Arc::new(Mutex::new(Vec::new())),
            available: true,
        }
    }

    /// A recorder that reports no speech capability and records nothing.
    pub fn unavailable() -> Self {
        Self {
            spoken: Arc::new(Mutex::new(Vec::new())),
            available: false,
        }
    }

    pub fn spoken(&self) -> Vec<Utterance> {
        self.spoken.lock().unwrap().clone()
    }

    pub fn last_text(&self) -> Option<String> {
        self.spoken.lock().unwrap().last().map(|u| u.text.clone())
    }
}

impl Default for RecordingSpeech {
    fn default() -> Self {
        Self::new()
    }
}

impl SpeechOutput for RecordingSpeech {
    fn speak(&self, utterance: &Utterance) {
        if self.available {
            self.spoken.lock().unwrap().push(utterance.clone());
        }
    }

    fn is_available(&self) -> bool {
        self.available
    }
}
