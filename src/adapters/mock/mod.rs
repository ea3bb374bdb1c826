//! Deterministic test doubles for the trait abstractions.

pub mod manual_clock;
pub mod memory_store;
pub mod recording_speech;
pub mod scripted_random;

pub use manual_clock::ManualClock;
pub use memory_store::InMemoryStore;
pub use recording_speech::RecordingSpeech;
pub use scripted_random::ScriptedRandom;
