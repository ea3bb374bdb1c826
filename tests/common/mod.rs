//! Common test utilities for integration tests.
//!
//! [`TestFarm`] owns deterministic doubles for every service and builds
//! [`App`] instances over them. Clones of the doubles share state, so a test
//! can keep inspecting the store or the spoken phrases after the app took
//! its copies.
//!
//! # Example
//!
//! ```ignore
//! let farm = TestFarm::registered();
//! let mut app = farm.app(StartOptions::default());
//! press(&mut app, KeyCode::Char('s'));
//! ```

#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use agrodash::adapters::mock::{InMemoryStore, ManualClock, RecordingSpeech, ScriptedRandom};
use agrodash::app::{App, Services, StartOptions};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

pub struct TestFarm {
    pub store: InMemoryStore,
    pub clock: ManualClock,
    pub random: ScriptedRandom,
    pub speech: RecordingSpeech,
}

impl TestFarm {
    /// Fresh install: nothing stored, wizard pending. Daytime clock.
    pub fn new() -> Self {
        Self {
            store: InMemoryStore::new(),
            clock: ManualClock::at_hour(10),
            random: ScriptedRandom::constant(0.5),
            speech: RecordingSpeech::new(),
        }
    }

    /// A farmer who has already completed registration.
    pub fn registered() -> Self {
        let farm = Self::new();
        farm.store_value("farmerRegistered", "true");
        farm
    }

    pub fn store_value(&self, key: &str, value: &str) {
        use agrodash::traits::KeyValueStore;
        self.store
            .set(key, value)
            .expect("in-memory store accepts writes");
    }

    pub fn services(&self) -> Services {
        Services::new(
            Arc::new(self.store.clone()),
            Arc::new(self.clock.clone()),
            Arc::new(self.random.clone()),
            Arc::new(self.speech.clone()),
        )
    }

    pub fn app(&self, options: StartOptions) -> App {
        App::new(self.services(), options)
    }
}

pub fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

pub fn press(app: &mut App, code: KeyCode) {
    app.handle_key(key(code));
}

pub fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c));
    }
}

/// Deliver every message already posted by timers.
pub fn pump(app: &mut App) -> usize {
    let Some(mut rx) = app.message_rx.take() else {
        return 0;
    };
    let mut delivered = 0;
    while let Ok(msg) = rx.try_recv() {
        app.handle_message(msg);
        delivered += 1;
    }
    app.message_rx = Some(rx);
    delivered
}

/// Granularity of [`advance`].
pub const STEP: Duration = Duration::from_millis(50);

/// Let paused tokio time run forward in [`STEP`] increments, delivering
/// messages after each one. Timers spawned by a delivered message (voice
/// phases, follow-up flushes) start close to when they would in the real
/// loop instead of at the end of the whole span.
pub async fn advance(app: &mut App, by: Duration) -> usize {
    let mut elapsed = Duration::ZERO;
    let mut delivered = 0;
    while elapsed < by {
        let step = STEP.min(by - elapsed);
        tokio::time::sleep(step).await;
        elapsed += step;
        delivered += pump(app);
    }
    delivered
}
