//! Time source abstraction.

use chrono::{DateTime, Local, Timelike};

/// Source of the current local time.
///
/// Production code uses [`crate::adapters::SystemClock`]; tests use
/// [`crate::adapters::mock::ManualClock`] to pin the hour for theme checks
/// and the timestamps of queued actions.
pub trait Clock: Send + Sync {
    /// Current local date and time.
    fn now(&self) -> DateTime<Local>;

    /// Milliseconds since the Unix epoch.
    fn now_millis(&self) -> i64 {
        self.now().timestamp_millis()
    }

    /// Hour of day (0-23) in local time.
    fn local_hour(&self) -> u32 {
        self.now().hour()
    }
}
