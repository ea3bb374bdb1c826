//! Canned voice commands per language.

use super::dashboard::IrrigationAction;
use crate::i18n::Language;

/// What a recognized command does once its response has been spoken.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoiceAction {
    /// Jump to a route path
    Navigate(&'static str),
    /// Broadcast a pump command to whichever screen is listening
    Irrigation(IrrigationAction),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VoiceCommand {
    pub phrase: &'static str,
    pub response: &'static str,
    pub action: VoiceAction,
}

const fn command(phrase: &'static str, response: &'static str, action: VoiceAction) -> VoiceCommand {
    VoiceCommand { phrase, response, action }
}

const EN: [VoiceCommand; 5] = [
    command(
        "start irrigation",
        "Starting irrigation now",
        VoiceAction::Irrigation(IrrigationAction::Start),
    ),
    command("show soil condition", "Showing soil monitor", VoiceAction::Navigate("/soil")),
    command("show alerts", "Showing alerts", VoiceAction::Navigate("/alerts")),
    command("show crop health", "Showing crop health", VoiceAction::Navigate("/crop")),
    command(
        "stop irrigation",
        "Stopping irrigation",
        VoiceAction::Irrigation(IrrigationAction::Stop),
    ),
];

const HI: [VoiceCommand; 3] = [
    command(
        "सिंचाई शुरू",
        "सिंचाई शुरू की जा रही है",
        VoiceAction::Irrigation(IrrigationAction::Start),
    ),
    command(
        "फ़सल स्वास्थ्य दिखाओ",
        "फ़सल स्वास्थ्य दिखाया जा रहा है",
        VoiceAction::Navigate("/crop"),
    ),
    command("सूचना दिखाओ", "सूचना दिखाई जा रही है", VoiceAction::Navigate("/alerts")),
];

const MR: [VoiceCommand; 3] = [
    command(
        "सिंचन सुरू करा",
        "सिंचन सुरू केले",
        VoiceAction::Irrigation(IrrigationAction::Start),
    ),
    command(
        "पीक आरोग्य दाखवा",
        "पीक आरोग्य दाखवले जात आहे",
        VoiceAction::Navigate("/crop"),
    ),
    command("सूचना दाखवा", "सूचना दाखवली जात आहे", VoiceAction::Navigate("/alerts")),
];

/// Commands the simulator can "hear" in the given language.
pub fn commands_for(language: Language) -> &'static [VoiceCommand] {
    match language {
        Language::En => &EN,
        Language::Hi => &HI,
        Language::Mr => &MR,
    }
}

/// Hints shown in the overlay.
pub fn suggestions(language: Language) -> impl Iterator<Item = &'static str> {
    commands_for(language).iter().take(3).map(|c| c.phrase)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_language_has_commands() {
        assert_eq!(commands_for(Language::En).len(), 5);
        assert_eq!(commands_for(Language::Hi).len(), 3);
        assert_eq!(commands_for(Language::Mr).len(), 3);
    }

    #[test]
    fn test_suggestions_are_first_three() {
        let hints: Vec<_> = suggestions(Language::En).collect();
        assert_eq!(hints, vec!["start irrigation", "show soil condition", "show alerts"]);
    }

    #[test]
    fn test_navigation_targets_are_known_paths() {
        let known = ["/soil", "/alerts", "/crop"];
        for language in Language::ALL {
            for cmd in commands_for(language) {
                if let VoiceAction::Navigate(path) = cmd.action {
                    assert!(known.contains(&path), "unexpected path {path}");
                }
            }
        }
    }
}
