//! Per-screen view state.
//!
//! Each screen owns a small struct holding what the screen simulates and
//! where its cursor is. The state is created when the screen is entered and
//! dropped when it is left, so walks and edits never outlive the visit.
//!
//! ## Components
//!
//! - [`DashboardView`]: live cards and irrigation controls
//! - [`SoilView`]: soil readings, charts and threshold editor
//! - [`WeatherView`]: forecast, pump and schedule editor
//! - [`AlertsView`]: alert list with filters
//! - [`ScanView`]: simulated leaf scan
//! - [`ProfileView`]: farmer profile, fields and devices
//! - [`SettingsView`]: preferences and help
//! - [`RegistrationWizard`]: first-run wizard
//! - [`VoiceSession`]: voice assistant overlay
//! - [`ListCursor`]: selection for the crop gallery and sync queue

pub mod alerts_view;
pub mod dashboard_view;
mod list_cursor;
pub mod profile_view;
pub mod registration_view;
pub mod scan_view;
pub mod settings_view;
pub mod soil_view;
pub mod voice_view;
pub mod weather_view;

pub use alerts_view::AlertsView;
pub use dashboard_view::DashboardView;
pub use list_cursor::ListCursor;
pub use profile_view::{DeviceForm, FieldForm, ProfileForm, ProfileView};
pub use registration_view::{RegistrationFocus, RegistrationStep, RegistrationWizard};
pub use scan_view::{ScanPhase, ScanView};
pub use settings_view::{SettingsRow, SettingsView, VoicePrefs};
pub use soil_view::SoilView;
pub use voice_view::{VoicePhase, VoiceSession};
pub use weather_view::{ScheduleEditor, ScheduleFocus, WeatherView};
