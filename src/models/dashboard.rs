//! Dashboard readings and irrigation control.

use serde::{Deserialize, Serialize};

use super::health::{Badge, Health};
use super::walk::BoundedWalk;
use crate::traits::RandomSource;

pub const MOISTURE_WALK: BoundedWalk = BoundedWalk::new(20.0, 100.0, 5.0);
pub const TEMPERATURE_WALK: BoundedWalk = BoundedWalk::new(15.0, 45.0, 2.0);
pub const HUMIDITY_WALK: BoundedWalk = BoundedWalk::new(30.0, 100.0, 3.0);

/// Auto mode runs the pump below this soil moisture.
pub const AUTO_MOISTURE_THRESHOLD: f64 = 40.0;

/// Pump command issued from a control button or a voice command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IrrigationAction {
    Start,
    Stop,
    Auto,
}

impl IrrigationAction {
    /// Action tag recorded in the offline queue.
    pub fn as_str(self) -> &'static str {
        match self {
            IrrigationAction::Start => "start",
            IrrigationAction::Stop => "stop",
            IrrigationAction::Auto => "auto",
        }
    }
}

/// Live readings shown on the dashboard.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardReadings {
    pub soil_moisture: f64,
    pub temperature: f64,
    pub humidity: f64,
    pub pump_on: bool,
    pub crop_health: Health,
    pub rain_probability: u8,
}

impl Default for DashboardReadings {
    fn default() -> Self {
        Self {
            soil_moisture: 65.0,
            temperature: 28.0,
            humidity: 72.0,
            pump_on: false,
            crop_health: Health::Healthy,
            rain_probability: 30,
        }
    }
}

impl DashboardReadings {
    /// Advance moisture, temperature and humidity by one telemetry tick.
    pub fn step(&mut self, random: &dyn RandomSource) {
        self.soil_moisture = MOISTURE_WALK.step(self.soil_moisture, random);
        self.temperature = TEMPERATURE_WALK.step(self.temperature, random);
        self.humidity = HUMIDITY_WALK.step(self.humidity, random);
    }

    /// Apply a pump command to the local pump state.
    pub fn apply(&mut self, action: IrrigationAction) {
        self.pump_on = match action {
            IrrigationAction::Start => true,
            IrrigationAction::Stop => false,
            IrrigationAction::Auto => self.soil_moisture < AUTO_MOISTURE_THRESHOLD,
        };
    }

    pub fn moisture_health(&self) -> Health {
        moisture_health(self.soil_moisture)
    }
}

/// Classify soil moisture: >= 50 healthy, >= 30 warning, else critical.
pub fn moisture_health(value: f64) -> Health {
    if value >= 50.0 {
        Health::Healthy
    } else if value >= 30.0 {
        Health::Warning
    } else {
        Health::Critical
    }
}

/// Identifies one of the six dashboard cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardKind {
    Moisture,
    Temperature,
    Humidity,
    Pump,
    Crop,
    Rain,
}

impl CardKind {
    pub const ALL: [CardKind; 6] = [
        CardKind::Moisture,
        CardKind::Temperature,
        CardKind::Humidity,
        CardKind::Pump,
        CardKind::Crop,
        CardKind::Rain,
    ];

    pub fn title_key(self) -> &'static str {
        match self {
            CardKind::Moisture => "soilMoisture",
            CardKind::Temperature => "temperature",
            CardKind::Humidity => "humidity",
            CardKind::Pump => "pumpStatus",
            CardKind::Crop => "cropHealth",
            CardKind::Rain => "rainProbability",
        }
    }

    /// Hardware behind the reading, shown in the info panel.
    pub fn technology(self) -> &'static str {
        match self {
            CardKind::Moisture => "Capacitive Soil Sensor + ESP32 + LoRa",
            CardKind::Temperature | CardKind::Humidity => "DHT22 Sensor + ESP32",
            CardKind::Pump => "Relay Module + ESP32 + 12V DC Pump",
            CardKind::Crop => "Multispectral Camera + AI Classifier",
            CardKind::Rain => "Weather API + Local Forecast",
        }
    }

    /// Route path the card links to.
    pub fn link(self) -> &'static str {
        match self {
            CardKind::Moisture | CardKind::Temperature => "/soil",
            CardKind::Humidity | CardKind::Pump | CardKind::Rain => "/weather",
            CardKind::Crop => "/crop",
        }
    }
}

/// Untranslated card value: either preformatted text or a translation key.
#[derive(Debug, Clone, PartialEq)]
pub enum CardValue {
    Text(String),
    Key(&'static str),
}

/// Snapshot of one card ready for rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    pub kind: CardKind,
    pub value: CardValue,
    pub badge: Badge,
    /// Translation key of the badge label
    pub status_key: &'static str,
}

impl DashboardReadings {
    pub fn card(&self, kind: CardKind) -> Card {
        match kind {
            CardKind::Moisture => {
                let health = self.moisture_health();
                Card {
                    kind,
                    value: CardValue::Text(format!("{:.0}%", self.soil_moisture)),
                    badge: health.badge(),
                    status_key: health.label_key(),
                }
            }
            CardKind::Temperature => Card {
                kind,
                value: CardValue::Text(format!("{:.1}°C", self.temperature)),
                badge: Badge::Healthy,
                status_key: "healthy",
            },
            CardKind::Humidity => Card {
                kind,
                value: CardValue::Text(format!("{:.0}%", self.humidity)),
                badge: Badge::Healthy,
                status_key: "healthy",
            },
            CardKind::Pump => {
                let key = if self.pump_on { "on" } else { "off" };
                Card {
                    kind,
                    value: CardValue::Key(key),
                    badge: Badge::for_pump(self.pump_on),
                    status_key: key,
                }
            }
            CardKind::Crop => Card {
                kind,
                value: CardValue::Key(self.crop_health.label_key()),
                badge: self.crop_health.badge(),
                status_key: self.crop_health.label_key(),
            },
            CardKind::Rain => Card {
                kind,
                value: CardValue::Text(format!("{}%", self.rain_probability)),
                badge: Badge::Healthy,
                status_key: "healthy",
            },
        }
    }

    pub fn cards(&self) -> Vec<Card> {
        CardKind::ALL.iter().map(|k| self.card(*k)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::ScriptedRandom;

    #[test]
    fn test_initial_readings() {
        let readings = DashboardReadings::default();
        assert_eq!(readings.soil_moisture, 65.0);
        assert_eq!(readings.temperature, 28.0);
        assert_eq!(readings.humidity, 72.0);
        assert!(!readings.pump_on);
        assert_eq!(readings.rain_probability, 30);
    }

    #[test]
    fn test_step_uses_per_channel_spread() {
        let mut readings = DashboardReadings::default();
        // moisture +2.5, temperature -1.0, humidity +1.5
        let random = ScriptedRandom::sequence([1.0, 0.0, 1.0]);
        readings.step(&random);
        assert_eq!(readings.soil_moisture, 67.5);
        assert_eq!(readings.temperature, 27.0);
        assert_eq!(readings.humidity, 73.5);
    }

    #[test]
    fn test_irrigation_actions() {
        let mut readings = DashboardReadings::default();
        readings.apply(IrrigationAction::Start);
        assert!(readings.pump_on);
        readings.apply(IrrigationAction::Stop);
        assert!(!readings.pump_on);

        readings.soil_moisture = 39.9;
        readings.apply(IrrigationAction::Auto);
        assert!(readings.pump_on);
        readings.soil_moisture = 40.0;
        readings.apply(IrrigationAction::Auto);
        assert!(!readings.pump_on);
    }

    #[test]
    fn test_moisture_health_boundaries() {
        assert_eq!(moisture_health(50.0), Health::Healthy);
        assert_eq!(moisture_health(49.9), Health::Warning);
        assert_eq!(moisture_health(30.0), Health::Warning);
        assert_eq!(moisture_health(29.9), Health::Critical);
    }

    #[test]
    fn test_cards_formatting() {
        let mut readings = DashboardReadings::default();
        readings.temperature = 28.04;
        let cards = readings.cards();
        assert_eq!(cards.len(), 6);
        assert_eq!(cards[0].value, CardValue::Text("65%".to_string()));
        assert_eq!(cards[1].value, CardValue::Text("28.0°C".to_string()));
        assert_eq!(cards[3].value, CardValue::Key("off"));
        assert_eq!(cards[3].badge, Badge::Off);
        assert_eq!(cards[5].value, CardValue::Text("30%".to_string()));
    }

    #[test]
    fn test_card_links() {
        assert_eq!(CardKind::Moisture.link(), "/soil");
        assert_eq!(CardKind::Crop.link(), "/crop");
        assert_eq!(CardKind::Pump.link(), "/weather");
    }
}
