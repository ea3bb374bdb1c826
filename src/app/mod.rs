//! Application state and logic for the TUI.
//!
//! This module contains the core [`App`] struct and related types:
//! - [`Route`] - Which screen is currently displayed
//! - [`ScreenState`] - The live state of that screen
//! - [`AppMessage`] - Messages for async communication
//! - [`Services`] - Injected collaborators (store, clock, randomness, speech)

mod actions;
mod handlers;
mod keys;
mod messages;
mod navigation;
pub(crate) mod timers;
mod types;

pub use messages::AppMessage;
pub use types::{Route, ScreenState};

use std::sync::Arc;

use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tracing::info;

use crate::i18n::Language;
use crate::state::registration::is_registered;
use crate::state::{AppearanceState, ConnectivityState, LanguageState, THEME_RECHECK_INTERVAL};
use crate::traits::{Clock, KeyValueStore, RandomSource, SpeechOutput};
use crate::view_state::{RegistrationWizard, VoicePrefs, VoiceSession};

/// Collaborators handed to the state holders and screens.
#[derive(Clone)]
pub struct Services {
    pub store: Arc<dyn KeyValueStore>,
    pub clock: Arc<dyn Clock>,
    pub random: Arc<dyn RandomSource>,
    pub speech: Arc<dyn SpeechOutput>,
}

impl Services {
    pub fn new(
        store: Arc<dyn KeyValueStore>,
        clock: Arc<dyn Clock>,
        random: Arc<dyn RandomSource>,
        speech: Arc<dyn SpeechOutput>,
    ) -> Self {
        Self {
            store,
            clock,
            random,
            speech,
        }
    }
}

/// Startup choices from the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StartOptions {
    pub route: Route,
    pub offline: bool,
}

/// Revision receivers for the three holders.
struct Subscriptions {
    connectivity: watch::Receiver<u64>,
    language: watch::Receiver<u64>,
    appearance: watch::Receiver<u64>,
}

impl Subscriptions {
    /// Whether any holder changed since the last call.
    fn take_changed(&mut self) -> bool {
        let mut changed = false;
        for rx in [&mut self.connectivity, &mut self.language, &mut self.appearance] {
            if rx.has_changed().unwrap_or(false) {
                rx.borrow_and_update();
                changed = true;
            }
        }
        changed
    }
}

/// Main application state
pub struct App {
    pub services: Services,
    pub connectivity: ConnectivityState,
    pub language: LanguageState,
    pub appearance: AppearanceState,
    /// First-run wizard; `Some` until the farmer is registered
    pub registration: Option<RegistrationWizard>,
    /// The screen on display (only meaningful once registered)
    pub screen: ScreenState,
    pub voice: VoiceSession,
    pub voice_prefs: VoicePrefs,
    /// Transient one-line feedback shown in the footer
    pub status: Option<String>,
    status_seq: u64,
    /// Bumped on every navigation; telemetry ticks from older visits are dropped
    visit: u64,
    /// Flag to track if the app should quit
    pub should_quit: bool,
    /// Dirty flag: redraw on the next loop iteration
    pub needs_redraw: bool,
    /// Tick counter for animations
    pub tick_count: u64,
    /// Receiver for async messages (taken by the run loop)
    pub message_rx: Option<mpsc::UnboundedReceiver<AppMessage>>,
    /// Sender for async messages (clone this to pass to timer tasks)
    pub message_tx: mpsc::UnboundedSender<AppMessage>,
    telemetry_task: Option<JoinHandle<()>>,
    theme_task: Option<JoinHandle<()>>,
    subscriptions: Subscriptions,
}

impl App {
    /// Build the app: load the holders from the store, pick the first screen
    /// and start the periodic timers (when called inside a tokio runtime).
    pub fn new(services: Services, options: StartOptions) -> Self {
        let connectivity = ConnectivityState::load(
            services.store.clone(),
            services.clock.clone(),
            services.random.clone(),
        );
        let language = LanguageState::load(services.store.clone());
        let appearance = AppearanceState::load(services.store.clone(), services.clock.clone());
        let registration = if is_registered(services.store.as_ref()) {
            None
        } else {
            Some(RegistrationWizard::new(language.language()))
        };
        let subscriptions = Subscriptions {
            connectivity: connectivity.subscribe(),
            language: language.subscribe(),
            appearance: appearance.subscribe(),
        };
        let screen = navigation::build_screen(options.route, &services);
        let (message_tx, message_rx) = mpsc::unbounded_channel();

        info!(
            route = options.route.path(),
            registered = registration.is_none(),
            language = language.language().code(),
            theme = appearance.mode().as_str(),
            "Starting dashboard"
        );

        let mut app = Self {
            services,
            connectivity,
            language,
            appearance,
            registration,
            screen,
            voice: VoiceSession::default(),
            voice_prefs: VoicePrefs::default(),
            status: None,
            status_seq: 0,
            visit: 0,
            should_quit: false,
            needs_redraw: true,
            tick_count: 0,
            message_rx: Some(message_rx),
            message_tx,
            telemetry_task: None,
            theme_task: None,
            subscriptions,
        };

        if options.offline {
            app.connectivity.set_offline(true);
        }
        app.theme_task = timers::spawn_every(
            &app.message_tx,
            THEME_RECHECK_INTERVAL,
            AppMessage::ThemeRecheck,
        );
        app.reconcile();
        app
    }

    pub fn route(&self) -> Route {
        self.screen.route()
    }

    pub fn is_registered(&self) -> bool {
        self.registration.is_none()
    }

    /// Translate a key in the active language.
    pub fn t<'a>(&self, key: &'a str) -> &'a str {
        self.language.t(key)
    }

    pub fn current_language(&self) -> Language {
        self.language.language()
    }

    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Called on every loop timeout.
    pub fn tick(&mut self) {
        self.tick_count = self.tick_count.wrapping_add(1);
        if self.subscriptions.take_changed() {
            self.mark_dirty();
        }
        // Animate the listening indicator
        if self.voice.is_open() && self.tick_count % 30 == 0 {
            self.mark_dirty();
        }
    }

    /// Bring timers in line with the current state. Runs after every key
    /// press and message.
    pub fn reconcile(&mut self) {
        if let Some(ticket) = self.connectivity.take_flush_request() {
            timers::spawn_after(
                &self.message_tx,
                ticket.delay,
                AppMessage::FlushDue {
                    generation: ticket.generation,
                },
            );
        }

        let wants_telemetry = self.is_registered()
            && !self.connectivity.is_offline()
            && self.route().has_telemetry();
        match (wants_telemetry, self.telemetry_task.is_some()) {
            (true, false) => {
                self.telemetry_task = timers::spawn_every(
                    &self.message_tx,
                    navigation::TELEMETRY_INTERVAL,
                    AppMessage::TelemetryTick { visit: self.visit },
                );
            }
            (false, true) => self.stop_telemetry(),
            _ => {}
        }
    }

    fn stop_telemetry(&mut self) {
        if let Some(task) = self.telemetry_task.take() {
            task.abort();
        }
    }

    /// Show a transient message in the footer for a few seconds.
    pub fn set_status(&mut self, text: impl Into<String>) {
        self.status_seq += 1;
        self.status = Some(text.into());
        timers::spawn_after(
            &self.message_tx,
            STATUS_TTL,
            AppMessage::StatusExpired {
                seq: self.status_seq,
            },
        );
        self.mark_dirty();
    }
}

/// How long a status line stays up.
const STATUS_TTL: std::time::Duration = std::time::Duration::from_secs(3);

impl Drop for App {
    fn drop(&mut self) {
        self.stop_telemetry();
        if let Some(task) = self.theme_task.take() {
            task.abort();
        }
    }
}
