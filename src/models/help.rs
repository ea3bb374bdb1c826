//! Help topics listed on the settings screen.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HelpTopic {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const HELP_TOPICS: [HelpTopic; 4] = [
    HelpTopic {
        question: "What is Smart Irrigation?",
        answer: "Smart Irrigation is an automated system that monitors soil moisture, weather conditions, and crop requirements to optimize water usage. It helps save water, reduce costs, and improve crop yield.",
    },
    HelpTopic {
        question: "How does the soil sensor work?",
        answer: "The capacitive soil sensor measures moisture content by detecting changes in electrical capacitance. Data is sent to ESP32 via LoRa/Wi-Fi for real-time monitoring and automated irrigation control.",
    },
    HelpTopic {
        question: "How does crop camera work?",
        answer: "The multispectral camera captures leaf images which are analyzed by an AI classifier (TensorFlow Lite). It detects diseases, nutrient deficiencies, and pest damage with 85-95% accuracy.",
    },
    HelpTopic {
        question: "Data privacy & export",
        answer: "All your farm data is encrypted and stored securely. You can export your data anytime in CSV/JSON format. We never share your data with third parties without consent.",
    },
];
