//! Trait abstractions for dependency injection and testability.
//!
//! The state holders and simulated views never reach for wall-clock time,
//! randomness, disk or the speech engine directly. They receive these
//! collaborators through the traits below, so tests can swap in the
//! deterministic doubles from [`crate::adapters::mock`].
//!
//! # Traits
//!
//! - [`Clock`] - Current local time
//! - [`RandomSource`] - Uniform draws in `[0, 1)`
//! - [`KeyValueStore`] - Persisted string values (the dashboard's "local storage")
//! - [`SpeechOutput`] - Best-effort text-to-speech

pub mod clock;
pub mod random;
pub mod speech;
pub mod store;

pub use clock::Clock;
pub use random::RandomSource;
pub use speech::{SpeechOutput, Utterance};
pub use store::{load_json, save_json, KeyValueStore};
