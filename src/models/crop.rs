//! Crop health gallery and leaf scan results.

use serde::{Deserialize, Serialize};

use super::health::Health;

/// One photographed leaf in the crop health gallery.
#[derive(Debug, Clone, PartialEq)]
pub struct LeafRecord {
    pub id: &'static str,
    pub health: Health,
    pub advice: &'static str,
    /// Classifier confidence in percent
    pub confidence: u8,
}

pub const LEAVES: [LeafRecord; 4] = [
    LeafRecord {
        id: "1",
        health: Health::Healthy,
        advice: "Crop is in excellent condition. Maintain current irrigation.",
        confidence: 95,
    },
    LeafRecord {
        id: "2",
        health: Health::Warning,
        advice: "Early signs of nitrogen deficiency. Consider fertilizer.",
        confidence: 82,
    },
    LeafRecord {
        id: "3",
        health: Health::Healthy,
        advice: "Good leaf color and texture. Continue monitoring.",
        confidence: 91,
    },
    LeafRecord {
        id: "4",
        health: Health::Critical,
        advice: "Fungal infection detected. Apply fungicide immediately.",
        confidence: 88,
    },
];

/// Gallery totals per health level.
pub fn leaf_counts(leaves: &[LeafRecord]) -> (usize, usize, usize) {
    leaves.iter().fold((0, 0, 0), |(h, w, c), leaf| match leaf.health {
        Health::Healthy => (h + 1, w, c),
        Health::Warning => (h, w + 1, c),
        Health::Critical => (h, w, c + 1),
    })
}

/// Outcome of a simulated leaf scan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanResult {
    pub health: Health,
    pub confidence: u8,
    pub diagnosis: String,
    pub advice: String,
}

/// The three canned scan outcomes, one of which is picked uniformly.
pub fn canned_scan_results() -> [ScanResult; 3] {
    [
        ScanResult {
            health: Health::Healthy,
            confidence: 94,
            diagnosis: "Healthy Leaf".to_string(),
            advice: "Leaf shows excellent health. No action needed. Continue regular monitoring."
                .to_string(),
        },
        ScanResult {
            health: Health::Warning,
            confidence: 87,
            diagnosis: "Nitrogen Deficiency".to_string(),
            advice: "Early signs of nitrogen deficiency detected. Apply nitrogen-rich fertilizer within 3 days."
                .to_string(),
        },
        ScanResult {
            health: Health::Critical,
            confidence: 91,
            diagnosis: "Fungal Infection".to_string(),
            advice: "Fungal disease detected. Apply appropriate fungicide immediately. Remove affected leaves."
                .to_string(),
        },
    ]
}
