//! AppMessage enum for async communication within the application.

/// Messages posted by timer tasks back to the UI loop.
///
/// Every delayed message carries the id of the session that scheduled it.
/// Handlers compare it with the current id and drop stale deliveries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppMessage {
    /// Advance the simulated sensor walk on the current screen
    TelemetryTick { visit: u64 },
    /// Re-derive the effective theme from the clock
    ThemeRecheck,
    /// The reconnect flush delay elapsed
    FlushDue { generation: u64 },
    /// Simulated leaf analysis finished
    ScanFinished { visit: u64, session: u64 },
    /// The voice assistant "recognized" a command
    VoiceHeard { session: u64 },
    /// Run the recognized command's action
    VoiceAct { session: u64 },
    /// Close the voice overlay
    VoiceDone { session: u64 },
    /// Registration success screen elapsed
    RegistrationComplete,
    /// Clear the status line if it is still the one posted
    StatusExpired { seq: u64 },
}
