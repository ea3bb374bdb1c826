//! Application-wide state holders
//!
//! Three holders are created once at startup and owned by the `App`:
//! - ConnectivityState: offline flag and the offline action queue
//! - LanguageState: active language and translation lookup
//! - AppearanceState: theme preference and effective dark flag
//!
//! Each one takes its collaborators (store, clock, randomness) as trait
//! objects and publishes a revision counter through `subscribe()`.

pub mod appearance;
pub mod connectivity;
pub mod language;
pub mod registration;

pub use appearance::{is_dark_hour, AppearanceState, ThemeMode, THEME_RECHECK_INTERVAL};
pub use connectivity::{ConnectivityState, FlushTicket, RECONNECT_FLUSH_DELAY};
pub use language::LanguageState;
