//! Text-to-speech abstraction.

use crate::i18n::Language;

/// A single phrase to speak.
#[derive(Debug, Clone, PartialEq)]
pub struct Utterance {
    pub text: String,
    pub language: Language,
    /// Playback rate multiplier (1.0 = normal)
    pub rate: f32,
}

impl Utterance {
    pub fn new(text: impl Into<String>, language: Language) -> Self {
        Self {
            text: text.into(),
            language,
            rate: 1.0,
        }
    }

    pub fn with_rate(mut self, rate: f32) -> Self {
        self.rate = rate;
        self
    }
}

/// Best-effort speech output.
///
/// Implementations must never fail loudly: when the host has no speech
/// capability, `speak` does nothing.
pub trait SpeechOutput: Send + Sync {
    /// Speak a phrase, or silently do nothing if speech is unavailable.
    fn speak(&self, utterance: &Utterance);

    /// Whether the host can actually produce speech.
    fn is_available(&self) -> bool;
}
