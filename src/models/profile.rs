//! Farmer profile, fields and devices.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::i18n::Language;

/// Store key holding the registered profile as JSON.
pub const PROFILE_KEY: &str = "farmerProfile";

/// Store key holding `"true"` once registration finished.
pub const REGISTERED_KEY: &str = "farmerRegistered";

pub const CROP_OPTIONS: [&str; 8] = [
    "Wheat",
    "Rice",
    "Corn",
    "Cotton",
    "Sugarcane",
    "Vegetables",
    "Pulses",
    "Fruits",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WaterSource {
    Borewell,
    Canal,
    River,
    Tank,
    Rainwater,
}

impl WaterSource {
    pub const ALL: [WaterSource; 5] = [
        WaterSource::Borewell,
        WaterSource::Canal,
        WaterSource::River,
        WaterSource::Tank,
        WaterSource::Rainwater,
    ];

    pub fn label(self) -> &'static str {
        match self {
            WaterSource::Borewell => "Borewell",
            WaterSource::Canal => "Canal",
            WaterSource::River => "River",
            WaterSource::Tank => "Tank/Pond",
            WaterSource::Rainwater => "Rainwater Harvesting",
        }
    }
}

/// Profile captured by the registration wizard.
///
/// Fields missing from a stored document take their defaults, so a profile
/// written by an older build still loads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FarmerProfile {
    pub mobile: String,
    pub language: Language,
    pub name: String,
    pub village: String,
    /// Acres, kept as entered
    pub farm_size: String,
    pub crops: Vec<String>,
    pub water_source: Option<WaterSource>,
    pub consent: bool,
}

impl Default for FarmerProfile {
    fn default() -> Self {
        Self {
            mobile: String::new(),
            language: Language::En,
            name: "Rajesh Kumar".to_string(),
            village: "Kharghar".to_string(),
            farm_size: "5".to_string(),
            crops: vec!["Wheat".to_string(), "Rice".to_string()],
            water_source: Some(WaterSource::Borewell),
            consent: false,
        }
    }
}

/// A named plot of land.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub id: String,
    pub name: String,
    /// Acres
    pub area: f64,
    pub crop: String,
}

pub const FIELD_CROPS: [&str; 4] = ["Wheat", "Rice", "Corn", "Cotton"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceKind {
    Soil,
    Weather,
    Pump,
    Camera,
}

impl DeviceKind {
    pub const ALL: [DeviceKind; 4] = [
        DeviceKind::Soil,
        DeviceKind::Weather,
        DeviceKind::Pump,
        DeviceKind::Camera,
    ];

    pub fn label(self) -> &'static str {
        match self {
            DeviceKind::Soil => "Soil Sensor",
            DeviceKind::Weather => "Weather Station",
            DeviceKind::Pump => "Water Pump",
            DeviceKind::Camera => "Crop Camera",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Device {
    pub id: String,
    pub name: String,
    pub kind: DeviceKind,
    pub online: bool,
}

pub fn seed_fields() -> Vec<Field> {
    vec![
        Field {
            id: "1".to_string(),
            name: "Field A".to_string(),
            area: 2.5,
            crop: "Wheat".to_string(),
        },
        Field {
            id: "2".to_string(),
            name: "Field B".to_string(),
            area: 2.5,
            crop: "Rice".to_string(),
        },
    ]
}

pub fn seed_devices() -> Vec<Device> {
    let device = |id: &str, name: &str, kind, online| Device {
        id: id.to_string(),
        name: name.to_string(),
        kind,
        online,
    };
    vec![
        device("1", "ESP32-001", DeviceKind::Soil, true),
        device("2", "ESP32-002", DeviceKind::Weather, true),
        device("3", "PUMP-001", DeviceKind::Pump, true),
        device("4", "CAM-001", DeviceKind::Camera, false),
    ]
}

/// Build a field from the add-field form. Returns `None` unless the name is
/// non-blank and the area parses as a positive number.
pub fn new_field(name: &str, area: &str, crop: &str) -> Option<Field> {
    let name = name.trim();
    let area: f64 = area.trim().parse().ok()?;
    if name.is_empty() || !(area > 0.0) {
        return None;
    }
    Some(Field {
        id: Uuid::new_v4().to_string(),
        name: name.to_string(),
        area,
        crop: crop.to_string(),
    })
}

/// Build a device from the add-device form. New devices start online.
pub fn new_device(name: &str, kind: DeviceKind) -> Option<Device> {
    let name = name.trim();
    if name.is_empty() {
        return None;
    }
    Some(Device {
        id: Uuid::new_v4().to_string(),
        name: name.to_string(),
        kind,
        online: true,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_profile() {
        let profile = FarmerProfile::default();
        assert_eq!(profile.name, "Rajesh Kumar");
        assert_eq!(profile.crops, vec!["Wheat", "Rice"]);
        assert_eq!(profile.water_source, Some(WaterSource::Borewell));
    }

    #[test]
    fn test_profile_json_uses_camel_case() {
        let value = serde_json::to_value(FarmerProfile::default()).unwrap();
        assert_eq!(value["farmSize"], "5");
        assert_eq!(value["waterSource"], "borewell");
        assert_eq!(value["language"], "en");
    }

    #[test]
    fn test_partial_profile_fills_defaults() {
        let profile: FarmerProfile =
            serde_json::from_str(r#"{"name":"Sunita","crops":["Cotton"]}"#).unwrap();
        assert_eq!(profile.name, "Sunita");
        assert_eq!(profile.crops, vec!["Cotton"]);
        assert_eq!(profile.village, "Kharghar");
    }

    #[test]
    fn test_seeds() {
        assert_eq!(seed_fields().len(), 2);
        let devices = seed_devices();
        assert_eq!(devices.len(), 4);
        assert!(!devices[3].online);
        assert_eq!(devices[3].kind.label(), "Crop Camera");
    }

    #[test]
    fn test_new_field_validation() {
        assert!(new_field("", "2.5", "Wheat").is_none());
        assert!(new_field("Field C", "abc", "Wheat").is_none());
        assert!(new_field("Field C", "0", "Wheat").is_none());

        let field = new_field(" Field C ", "1.25", "Corn").unwrap();
        assert_eq!(field.name, "Field C");
        assert_eq!(field.area, 1.25);
        assert_eq!(field.id.len(), 36);
    }

    #[test]
    fn test_new_device_ids_are_unique() {
        let a = new_device("ESP32-003", DeviceKind::Soil).unwrap();
        let b = new_device("ESP32-003", DeviceKind::Soil).unwrap();
        assert_ne!(a.id, b.id);
        assert!(a.online);
        assert!(new_device("  ", DeviceKind::Pump).is_none());
    }
}
