//! Active interface language.

use std::sync::Arc;

use tokio::sync::watch;
use tracing::{info, warn};

use crate::i18n::{translate, Language};
use crate::traits::KeyValueStore;

/// Store key holding the language code (`en`, `hi`, `mr`).
pub const LANGUAGE_KEY: &str = "language";

pub struct LanguageState {
    language: Language,
    store: Arc<dyn KeyValueStore>,
    revision: watch::Sender<u64>,
}

impl std::fmt::Debug for LanguageState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LanguageState")
            .field("language", &self.language)
            .finish()
    }
}

impl LanguageState {
    /// Read the stored language; anything unrecognized means English.
    pub fn load(store: Arc<dyn KeyValueStore>) -> Self {
        let language = store
            .get(LANGUAGE_KEY)
            .and_then(|code| Language::from_code(&code))
            .unwrap_or_default();
        let (revision, _) = watch::channel(0);
        Self {
            language,
            store,
            revision,
        }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Translate `key`, falling back to the key itself.
    pub fn t<'a>(&self, key: &'a str) -> &'a str {
        translate(self.language, key)
    }

    pub fn set_language(&mut self, language: Language) {
        if language != self.language {
            info!(language = language.code(), "Language changed");
        }
        self.language = language;
        if let Err(e) = self.store.set(LANGUAGE_KEY, language.code()) {
            warn!(error = %e, "Failed to persist language");
        }
        self.revision.send_modify(|r| *r += 1);
    }

    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.revision.subscribe()
    }
}
