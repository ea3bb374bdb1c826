//! Registration wizard state
//!
//! Step 1 collects the mobile number and language, step 2 the farm details.
//! Submitting stores the profile and shows a success screen; the app marks
//! the farmer registered a moment later.

use std::time::Duration;

use crate::i18n::Language;
use crate::models::profile::{FarmerProfile, WaterSource, CROP_OPTIONS};
use crate::widgets::{InputBox, InputKind};

/// Time the success screen stays up before entering the dashboard.
pub const SUCCESS_DELAY: Duration = Duration::from_secs(2);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistrationStep {
    Contact,
    Farm,
    Done,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistrationFocus {
    Mobile,
    Language,
    Name,
    Village,
    FarmSize,
    Crops,
    WaterSource,
    Consent,
}

const CONTACT_ORDER: [RegistrationFocus; 2] = [RegistrationFocus::Mobile, RegistrationFocus::Language];
const FARM_ORDER: [RegistrationFocus; 6] = [
    RegistrationFocus::Name,
    RegistrationFocus::Village,
    RegistrationFocus::FarmSize,
    RegistrationFocus::Crops,
    RegistrationFocus::WaterSource,
    RegistrationFocus::Consent,
];

#[derive(Debug, Clone)]
pub struct RegistrationWizard {
    pub step: RegistrationStep,
    pub focus: RegistrationFocus,
    pub mobile: InputBox,
    pub language: Language,
    pub name: InputBox,
    pub village: InputBox,
    pub farm_size: InputBox,
    /// Crops in the order they were ticked
    pub crops: Vec<&'static str>,
    /// Highlighted entry of [`CROP_OPTIONS`]
    pub crop_cursor: usize,
    pub water_source: Option<WaterSource>,
    pub consent: bool,
}

impl RegistrationWizard {
    pub fn new(language: Language) -> Self {
        Self {
            step: RegistrationStep::Contact,
            focus: RegistrationFocus::Mobile,
            mobile: InputBox::new().with_kind(InputKind::Digits).with_max_chars(10),
            language,
            name: InputBox::new(),
            village: InputBox::new(),
            farm_size: InputBox::new().with_kind(InputKind::Decimal).with_max_chars(6),
            crops: Vec::new(),
            crop_cursor: 0,
            water_source: None,
            consent: false,
        }
    }

    fn order(&self) -> &'static [RegistrationFocus] {
        match self.step {
            RegistrationStep::Contact => &CONTACT_ORDER,
            RegistrationStep::Farm | RegistrationStep::Done => &FARM_ORDER,
        }
    }

    pub fn focus_next(&mut self) {
        let order = self.order();
        let i = order.iter().position(|f| *f == self.focus).unwrap_or(0);
        self.focus = order[(i + 1) % order.len()];
    }

    pub fn focus_prev(&mut self) {
        let order = self.order();
        let i = order.iter().position(|f| *f == self.focus).unwrap_or(0);
        self.focus = order[(i + order.len() - 1) % order.len()];
    }

    pub fn focused_input(&mut self) -> Option<&mut InputBox> {
        match self.focus {
            RegistrationFocus::Mobile => Some(&mut self.mobile),
            RegistrationFocus::Name => Some(&mut self.name),
            RegistrationFocus::Village => Some(&mut self.village),
            RegistrationFocus::FarmSize => Some(&mut self.farm_size),
            _ => None,
        }
    }

    /// Left/Right on a picker row.
    pub fn cycle_choice(&mut self, delta: isize) {
        match self.focus {
            RegistrationFocus::Language => {
                self.language = if delta < 0 {
                    self.language.prev()
                } else {
                    self.language.next()
                };
            }
            RegistrationFocus::Crops => {
                let len = CROP_OPTIONS.len() as isize;
                self.crop_cursor = (self.crop_cursor as isize + delta).rem_euclid(len) as usize;
            }
            RegistrationFocus::WaterSource => {
                let all = WaterSource::ALL;
                let len = all.len() as isize;
                let next = match self.water_source {
                    None if delta < 0 => len - 1,
                    None => 0,
                    Some(current) => {
                        let i = all.iter().position(|w| *w == current).unwrap_or(0) as isize;
                        (i + delta).rem_euclid(len)
                    }
                };
                self.water_source = Some(all[next as usize]);
            }
            _ => {}
        }
    }

    /// Space on a toggle row.
    pub fn toggle(&mut self) {
        match self.focus {
            RegistrationFocus::Crops => {
                let crop = CROP_OPTIONS[self.crop_cursor];
                if let Some(i) = self.crops.iter().position(|c| *c == crop) {
                    self.crops.remove(i);
                } else {
                    self.crops.push(crop);
                }
            }
            RegistrationFocus::Consent => self.consent = !self.consent,
            _ => {}
        }
    }

    pub fn can_advance(&self) -> bool {
        self.step == RegistrationStep::Contact && self.mobile.is_filled()
    }

    pub fn can_submit(&self) -> bool {
        self.step == RegistrationStep::Farm
            && self.name.is_filled()
            && self.village.is_filled()
            && self.farm_size.is_filled()
            && !self.crops.is_empty()
            && self.water_source.is_some()
            && self.consent
    }

    /// Move to step 2. Returns the chosen language when the step changed.
    pub fn advance(&mut self) -> Option<Language> {
        if !self.can_advance() {
            return None;
        }
        self.step = RegistrationStep::Farm;
        self.focus = RegistrationFocus::Name;
        Some(self.language)
    }

    pub fn back(&mut self) {
        if self.step == RegistrationStep::Farm {
            self.step = RegistrationStep::Contact;
            self.focus = RegistrationFocus::Mobile;
        }
    }

    /// Finish step 2. Returns the profile to store when the form is complete.
    pub fn submit(&mut self) -> Option<FarmerProfile> {
        if !self.can_submit() {
            return None;
        }
        self.step = RegistrationStep::Done;
        Some(self.profile())
    }

    pub fn profile(&self) -> FarmerProfile {
        FarmerProfile {
            mobile: self.mobile.content().to_string(),
            language: self.language,
            name: self.name.content().trim().to_string(),
            village: self.village.content().trim().to_string(),
            farm_size: self.farm_size.content().to_string(),
            crops: self.crops.iter().map(|c| c.to_string()).collect(),
            water_source: self.water_source,
            consent: self.consent,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_farm_step() -> RegistrationWizard {
        let mut wizard = RegistrationWizard::new(Language::En);
        wizard.mobile.set_content("9876543210");
        wizard.advance();
        wizard.name.set_content("Asha Patil");
        wizard.village.set_content("Nashik");
        wizard.farm_size.set_content("3");
        wizard.focus = RegistrationFocus::Crops;
        wizard.toggle();
        wizard.focus = RegistrationFocus::WaterSource;
        wizard.cycle_choice(1);
        wizard
    }

    #[test]
    fn test_next_requires_mobile() {
        let mut wizard = RegistrationWizard::new(Language::En);
        assert!(wizard.advance().is_none());
        wizard.focus = RegistrationFocus::Language;
        wizard.cycle_choice(1);
        wizard.mobile.set_content("98765");
        assert_eq!(wizard.advance(), Some(Language::Hi));
        assert_eq!(wizard.step, RegistrationStep::Farm);
    }

    #[test]
    fn test_submit_requires_consent() {
        let mut wizard = filled_farm_step();
        assert!(wizard.submit().is_none());

        wizard.focus = RegistrationFocus::Consent;
        wizard.toggle();
        let profile = wizard.submit().unwrap();
        assert_eq!(wizard.step, RegistrationStep::Done);
        assert_eq!(profile.crops, vec!["Wheat"]);
        assert_eq!(profile.water_source, Some(WaterSource::Borewell));
        assert_eq!(profile.mobile, "9876543210");
    }

    #[test]
    fn test_crop_toggle_removes() {
        let mut wizard = filled_farm_step();
        wizard.focus = RegistrationFocus::Crops;
        wizard.toggle();
        assert!(wizard.crops.is_empty());
        wizard.cycle_choice(-1);
        wizard.toggle();
        assert_eq!(wizard.crops, vec!["Fruits"]);
    }

    #[test]
    fn test_focus_cycles_within_step() {
        let mut wizard = RegistrationWizard::new(Language::En);
        wizard.focus_next();
        assert_eq!(wizard.focus, RegistrationFocus::Language);
        wizard.focus_next();
        assert_eq!(wizard.focus, RegistrationFocus::Mobile);
    }
}
