//! Forecast, pump control and irrigation schedule.

use serde::{Deserialize, Serialize};

use super::dashboard::IrrigationAction;

/// Sky condition icon for a forecast day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sky {
    Sunny,
    Rainy,
    Cloudy,
}

impl Sky {
    pub fn glyph(self) -> &'static str {
        match self {
            Sky::Sunny => "☀",
            Sky::Rainy => "☂",
            Sky::Cloudy => "☁",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ForecastDay {
    pub day: &'static str,
    pub sky: Sky,
    pub temp_c: i32,
    /// Chance of rain in percent
    pub rain: u8,
}

pub const FORECAST: [ForecastDay; 5] = [
    ForecastDay { day: "Mon", sky: Sky::Sunny, temp_c: 32, rain: 10 },
    ForecastDay { day: "Tue", sky: Sky::Rainy, temp_c: 28, rain: 70 },
    ForecastDay { day: "Wed", sky: Sky::Rainy, temp_c: 26, rain: 80 },
    ForecastDay { day: "Thu", sky: Sky::Cloudy, temp_c: 29, rain: 40 },
    ForecastDay { day: "Fri", sky: Sky::Sunny, temp_c: 33, rain: 5 },
];

/// Rain chance above which auto mode keeps the pump off.
pub const RAIN_PAUSE_THRESHOLD: u8 = 50;

/// Whether today's forecast pauses irrigation in auto mode.
pub fn rain_expected(today: &ForecastDay) -> bool {
    today.rain > RAIN_PAUSE_THRESHOLD
}

/// Pump state after a command, given today's forecast.
pub fn pump_after(action: IrrigationAction, today: &ForecastDay) -> bool {
    match action {
        IrrigationAction::Start => true,
        IrrigationAction::Stop => false,
        IrrigationAction::Auto => !rain_expected(today),
    }
}

/// Daily irrigation schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IrrigationSchedule {
    pub enabled: bool,
    /// Start time as `HH:MM`
    pub time: String,
    /// Run length in minutes
    pub duration: u32,
}

impl Default for IrrigationSchedule {
    fn default() -> Self {
        Self {
            enabled: false,
            time: "06:00".to_string(),
            duration: 30,
        }
    }
}

/// Parse and normalize an `H:MM` or `HH:MM` time of day.
pub fn normalize_time(input: &str) -> Option<String> {
    let (h, m) = input.trim().split_once(':')?;
    let hour: u32 = h.parse().ok()?;
    let minute: u32 = m.parse().ok()?;
    if hour > 23 || minute > 59 || m.len() != 2 {
        return None;
    }
    Some(format!("{:02}:{:02}", hour, minute))
}
