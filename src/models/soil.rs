//! Soil monitor readings, history and thresholds.

use std::collections::VecDeque;

use chrono::{DateTime, Local};

use super::health::Health;
use super::walk::BoundedWalk;
use crate::traits::RandomSource;

pub const SOIL_MOISTURE_WALK: BoundedWalk = BoundedWalk::new(20.0, 100.0, 3.0);
pub const SOIL_TEMPERATURE_WALK: BoundedWalk = BoundedWalk::new(15.0, 35.0, 1.0);

/// Points kept in the moisture history chart.
pub const HISTORY_LEN: usize = 24;

pub const WEEKDAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

#[derive(Debug, Clone, PartialEq)]
pub struct SoilReadings {
    pub moisture: f64,
    pub temperature: f64,
    pub ph: f64,
    /// Electrical conductivity in mS/cm
    pub ec: f64,
}

impl Default for SoilReadings {
    fn default() -> Self {
        Self {
            moisture: 65.0,
            temperature: 24.0,
            ph: 6.8,
            ec: 1.2,
        }
    }
}

/// One point of the moisture chart.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryPoint {
    pub label: String,
    pub moisture: f64,
}

/// One bar of the weekly pH chart.
#[derive(Debug, Clone, PartialEq)]
pub struct PhPoint {
    pub day: &'static str,
    pub ph: f64,
}

/// Alert thresholds, editable from the soil screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thresholds {
    pub moisture_min: u8,
    pub moisture_max: u8,
    pub ph_min: f64,
    pub ph_max: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            moisture_min: 40,
            moisture_max: 80,
            ph_min: 6.0,
            ph_max: 7.5,
        }
    }
}

/// Which threshold the editor is adjusting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThresholdField {
    MoistureMin,
    MoistureMax,
    PhMin,
    PhMax,
}

impl ThresholdField {
    pub const ALL: [ThresholdField; 4] = [
        ThresholdField::MoistureMin,
        ThresholdField::MoistureMax,
        ThresholdField::PhMin,
        ThresholdField::PhMax,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ThresholdField::MoistureMin => "Minimum Moisture",
            ThresholdField::MoistureMax => "Maximum Moisture",
            ThresholdField::PhMin => "Minimum pH",
            ThresholdField::PhMax => "Maximum pH",
        }
    }
}

impl Thresholds {
    /// Nudge one threshold by `steps` increments (1% or 0.1 pH).
    ///
    /// Moisture minimum stays in [20, 50], maximum in [60, 90]; pH values
    /// stay in [0, 14] and the minimum never passes the maximum.
    pub fn adjust(&mut self, field: ThresholdField, steps: i32) {
        match field {
            ThresholdField::MoistureMin => {
                self.moisture_min = (self.moisture_min as i32 + steps).clamp(20, 50) as u8;
            }
            ThresholdField::MoistureMax => {
                self.moisture_max = (self.moisture_max as i32 + steps).clamp(60, 90) as u8;
            }
            ThresholdField::PhMin => {
                let value = (self.ph_min + steps as f64 * 0.1).clamp(0.0, self.ph_max);
                self.ph_min = round_tenth(value);
            }
            ThresholdField::PhMax => {
                let value = (self.ph_max + steps as f64 * 0.1).clamp(self.ph_min, 14.0);
                self.ph_max = round_tenth(value);
            }
        }
    }

    pub fn display(&self, field: ThresholdField) -> String {
        match field {
            ThresholdField::MoistureMin => format!("{}%", self.moisture_min),
            ThresholdField::MoistureMax => format!("{}%", self.moisture_max),
            ThresholdField::PhMin => format!("{:.1}", self.ph_min),
            ThresholdField::PhMax => format!("{:.1}", self.ph_max),
        }
    }
}

fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Soil status against the thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoilStatus {
    IrrigationNeeded,
    TooWet,
    Healthy,
}

impl SoilStatus {
    pub fn evaluate(moisture: f64, thresholds: &Thresholds) -> Self {
        if moisture < thresholds.moisture_min as f64 {
            SoilStatus::IrrigationNeeded
        } else if moisture > thresholds.moisture_max as f64 {
            SoilStatus::TooWet
        } else {
            SoilStatus::Healthy
        }
    }

    pub fn health(self) -> Health {
        match self {
            SoilStatus::IrrigationNeeded => Health::Critical,
            SoilStatus::TooWet => Health::Warning,
            SoilStatus::Healthy => Health::Healthy,
        }
    }

    /// Fixed English text for the non-healthy states; `None` means the
    /// localized "healthy" label applies.
    pub fn fixed_text(self) -> Option<&'static str> {
        match self {
            SoilStatus::IrrigationNeeded => Some("Irrigation Needed"),
            SoilStatus::TooWet => Some("Too Wet"),
            SoilStatus::Healthy => None,
        }
    }
}

/// Everything the soil screen simulates.
#[derive(Debug, Clone)]
pub struct SoilSimulation {
    pub current: SoilReadings,
    pub history: VecDeque<HistoryPoint>,
    pub weekly_ph: Vec<PhPoint>,
    pub thresholds: Thresholds,
}

impl SoilSimulation {
    /// Seed the charts: hourly moisture in [60, 80), weekly pH in [6.5, 7.3).
    pub fn new(random: &dyn RandomSource) -> Self {
        let history = (0..HISTORY_LEN)
            .map(|i| HistoryPoint {
                label: format!("{}:00", i),
                moisture: 60.0 + random.next_f64() * 20.0,
            })
            .collect();
        let weekly_ph = WEEKDAYS
            .iter()
            .map(|day| PhPoint {
                day: *day,
                ph: 6.5 + random.next_f64() * 0.8,
            })
            .collect();
        Self {
            current: SoilReadings::default(),
            history,
            weekly_ph,
            thresholds: Thresholds::default(),
        }
    }

    /// One telemetry tick: append the current moisture to the chart, then
    /// walk moisture and temperature.
    pub fn step(&mut self, random: &dyn RandomSource, now: DateTime<Local>) {
        let recorded = self.current.moisture;
        self.current.moisture = SOIL_MOISTURE_WALK.step(self.current.moisture, random);
        self.current.temperature = SOIL_TEMPERATURE_WALK.step(self.current.temperature, random);

        if self.history.len() >= HISTORY_LEN {
            self.history.pop_front();
        }
        self.history.push_back(HistoryPoint {
            label: now.format("%I:%M %p").to_string(),
            moisture: recorded,
        });
    }

    pub fn status(&self) -> SoilStatus {
        SoilStatus::evaluate(self.current.moisture, &self.thresholds)
    }
}
