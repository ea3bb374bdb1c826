//! Concrete implementations of trait abstractions.
//!
//! # Adapters
//!
//! - [`FileStore`] - JSON document on disk backing the key-value store
//! - [`SystemClock`] - Local wall-clock time
//! - [`StdRandom`] - `rand`-backed uniform source
//! - [`CommandSpeech`] - Platform speech command (`say`, `espeak`, `spd-say`)
//!
//! # Mock Implementations
//!
//! The [`mock`] submodule provides deterministic doubles:
//! - [`mock::InMemoryStore`] - In-memory key-value store with failure injection
//! - [`mock::ManualClock`] - Clock that only moves when told to
//! - [`mock::ScriptedRandom`] - Replays a fixed sequence of draws
//! - [`mock::RecordingSpeech`] - Captures utterances instead of speaking

pub mod command_speech;
pub mod file_store;
pub mod mock;
pub mod std_random;
pub mod system_clock;

pub use command_speech::CommandSpeech;
pub use file_store::FileStore;
pub use std_random::StdRandom;
pub use system_clock::SystemClock;
