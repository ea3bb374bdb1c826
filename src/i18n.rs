//! Static translation table for English, Hindi and Marathi.
//!
//! Lookups never fail: an unknown key renders as the key itself.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Supported interface languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Hi,
    Mr,
}

impl Language {
    pub const ALL: [Language; 3] = [Language::En, Language::Hi, Language::Mr];

    /// Two-letter code used for persistence.
    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Hi => "hi",
            Language::Mr => "mr",
        }
    }

    /// Parse a stored code. Unknown codes return `None`.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim() {
            "en" => Some(Language::En),
            "hi" => Some(Language::Hi),
            "mr" => Some(Language::Mr),
            _ => None,
        }
    }

    /// Name of the language in its own script.
    pub fn native_name(self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Hi => "हिंदी",
            Language::Mr => "मराठी",
        }
    }

    pub fn next(self) -> Self {
        match self {
            Language::En => Language::Hi,
            Language::Hi => Language::Mr,
            Language::Mr => Language::En,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Language::En => Language::Mr,
            Language::Hi => Language::En,
            Language::Mr => Language::Hi,
        }
    }

    fn column(self) -> usize {
        match self {
            Language::En => 0,
            Language::Hi => 1,
            Language::Mr => 2,
        }
    }
}

/// key -> [en, hi, mr]
const ENTRIES: &[(&str, [&str; 3])] = &[
    ("dashboard", ["Dashboard", "डैशबोर्ड", "डॅशबोर्ड"]),
    ("soilMonitor", ["Soil Monitor", "मृदा निरीक्षण", "माती निरीक्षण"]),
    ("cropHealth", ["Crop Health", "फ़सल स्वास्थ्य", "पीक आरोग्य"]),
    ("weather", ["Weather & Irrigation", "मौसम व सिंचाई", "हवामान आणि सिंचन"]),
    ("alerts", ["Alerts", "सूचना", "सूचना"]),
    ("control", ["Control", "नियंत्रण", "नियंत्रण"]),
    ("settings", ["Settings", "सेटिंग्स", "सेटिंग्ज"]),
    ("profile", ["Profile", "प्रोफ़ाइल", "प्रोफाइल"]),
    ("startIrrigation", ["Start Irrigation", "सिंचाई शुरू", "सिंचन सुरू"]),
    ("stopIrrigation", ["Stop", "रोकें", "थांबवा"]),
    ("autoMode", ["Auto Mode", "स्वचालित", "स्वयंचलित"]),
    ("scanLeaf", ["Scan Leaf", "पत्ता स्कैन", "पान स्कॅन"]),
    ("soilMoisture", ["Soil Moisture", "मिट्टी की नमी", "माती ओलसरपणा"]),
    ("temperature", ["Temperature", "तापमान", "तापमान"]),
    ("humidity", ["Humidity", "आर्द्रता", "आर्द्रता"]),
    ("pumpStatus", ["Pump Status", "पंप स्थिति", "पंप स्थिती"]),
    ("healthy", ["Healthy", "स्वस्थ", "निरोगी"]),
    ("warning", ["Warning", "चेतावनी", "चेतावणी"]),
    ("critical", ["Critical", "गंभीर", "गंभीर"]),
    ("offline", ["Offline", "ऑफ़लाइन", "ऑफलाइन"]),
    ("online", ["Online", "ऑनलाइन", "ऑनलाइन"]),
    ("rainProbability", ["Rain Probability", "बारिश की संभावना", "पाऊस संभाव्यता"]),
    ("on", ["ON", "चालू", "चालू"]),
    ("off", ["OFF", "बंद", "बंद"]),
    ("viewGraph", ["View Graph", "ग्राफ देखें", "आलेख पहा"]),
    ("save", ["Save", "सेव करें", "जतन करा"]),
    ("cancel", ["Cancel", "रद्द करें", "रद्द करा"]),
    ("viewAdvice", ["View Advice", "सलाह देखें", "सल्ला पहा"]),
    ("playVoice", ["Play Voice", "आवाज़ सुनें", "आवाज ऐका"]),
    (
        "offlineMode",
        [
            "Offline - data will sync automatically",
            "ऑफ़लाइन - डेटा स्वचालित सिंक होगा",
            "ऑफलाइन - डेटा आपोआप सिंक होईल",
        ],
    ),
    ("registration", ["Farmer Registration", "किसान पंजीकरण", "शेतकरी नोंदणी"]),
    ("next", ["Next", "आगे", "पुढे"]),
    ("submit", ["Submit", "जमा करें", "सबमिट करा"]),
];

static TABLE: Lazy<HashMap<&'static str, [&'static str; 3]>> =
    Lazy::new(|| ENTRIES.iter().copied().collect());

/// Translate `key` into `language`, falling back to the key itself.
pub fn translate<'a>(language: Language, key: &'a str) -> &'a str {
    match TABLE.get(key) {
        Some(row) => row[language.column()],
        None => key,
    }
}

/// Whether the table has an entry for `key`.
pub fn has_key(key: &str) -> bool {
    TABLE.contains_key(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translate_known_keys() {
        assert_eq!(translate(Language::En, "dashboard"), "Dashboard");
        assert_eq!(translate(Language::Hi, "dashboard"), "डैशबोर्ड");
        assert_eq!(translate(Language::Mr, "dashboard"), "डॅशबोर्ड");
        assert_eq!(translate(Language::Mr, "stopIrrigation"), "थांबवा");
    }

    #[test]
    fn test_translate_unknown_key_returns_key() {
        assert_eq!(translate(Language::Hi, "noSuchKey"), "noSuchKey");
        assert_eq!(translate(Language::En, ""), "");
    }

    #[test]
    fn test_table_has_no_duplicate_keys() {
        assert_eq!(TABLE.len(), ENTRIES.len());
        assert!(has_key("offlineMode"));
    }

    #[test]
    fn test_language_codes_roundtrip() {
        for lang in Language::ALL {
            assert_eq!(Language::from_code(lang.code()), Some(lang));
        }
        assert_eq!(Language::from_code("fr"), None);
        assert_eq!(Language::from_code(""), None);
    }

    #[test]
    fn test_language_cycle() {
        assert_eq!(Language::En.next(), Language::Hi);
        assert_eq!(Language::Mr.next(), Language::En);
        assert_eq!(Language::En.prev(), Language::Mr);
    }

    #[test]
    fn test_language_serde_lowercase() {
        assert_eq!(serde_json::to_string(&Language::Hi).unwrap(), "\"hi\"");
        let lang: Language = serde_json::from_str("\"mr\"").unwrap();
        assert_eq!(lang, Language::Mr);
    }
}
