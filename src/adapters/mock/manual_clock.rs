//! Manually advanced clock for testing.

use std::sync::{Arc, Mutex};

use chrono::{DateTime, Duration, Local, TimeZone};

use crate::traits::Clock;

/// A clock that only moves when the test moves it.
#[derive(Debug, Clone)]
pub struct ManualClock {
    now: Arc<Mutex<DateTime<Local>>>,
}

impl ManualClock {
    pub fn new(now: DateTime<Local>) -> Self {
        Self {
            now: Arc::new(Mutex::new(now)),
        }
    }

    /// A clock pinned to the given local date and time.
    ///
    /// Panics on a nonexistent local time (DST gap); tests pick safe dates.
    pub fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> Self {
        let now = Local
            .with_ymd_and_hms(year, month, day, hour, minute, 0)
            .earliest()
            .expect("valid local time");
        Self::new(now)
    }

    /// A clock pinned to `hour:00` on a fixed mid-year date.
    pub fn at_hour(hour: u32) -> Self {
        Self::at(2024, 6, 15, hour, 0)
    }

    pub fn set(&self, now: DateTime<Local>) {
        *self.now.lock().unwrap() = now;
    }

    pub fn advance(&self, by: Duration) {
        let mut now = self.now.lock().unwrap();
        *now += by;
    }

    /// Move to `hour:00` on the current day.
    pub fn set_hour(&self, hour: u32) {
        let current = *self.now.lock().unwrap();
        let date = current.date_naive();
        if let Some(t) = date
            .and_hms_opt(hour, 0, 0)
            .and_then(|naive| Local.from_local_datetime(&naive).earliest())
        {
            self.set(t);
        }
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Local> {
        *self.now.lock().unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_and_hour() {
        let clock = ManualClock::at_hour(10);
        assert_eq!(clock.local_hour(), 10);
        clock.advance(Duration::hours(9));
        assert_eq!(clock.local_hour(), 19);
    }

    #[test]
    fn test_set_hour_keeps_date() {
        let clock = ManualClock::at(2024, 6, 15, 8, 30);
        clock.set_hour(22);
        assert_eq!(clock.local_hour(), 22);
        assert_eq!(clock.now().date_naive(), chrono::NaiveDate::from_ymd_opt(2024, 6, 15).unwrap());
    }

    #[test]
    fn test_clones_share_time() {
        let clock = ManualClock::at_hour(6);
        let handle = clock.clone();
        clock.advance(Duration::milliseconds(1500));
        assert_eq!(handle.now_millis(), clock.now_millis());
    }
}
