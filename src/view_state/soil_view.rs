//! Soil monitor screen state

use crate::models::soil::{SoilSimulation, ThresholdField};
use crate::traits::RandomSource;

#[derive(Debug, Clone)]
pub struct SoilView {
    pub sim: SoilSimulation,
    /// Threshold editor open
    pub editing: bool,
    /// Index into [`ThresholdField::ALL`]
    pub field: usize,
}

impl SoilView {
    pub fn new(random: &dyn RandomSource) -> Self {
        Self {
            sim: SoilSimulation::new(random),
            editing: false,
            field: 0,
        }
    }

    pub fn selected_field(&self) -> ThresholdField {
        ThresholdField::ALL[self.field.min(ThresholdField::ALL.len() - 1)]
    }

    pub fn toggle_editor(&mut self) {
        self.editing = !self.editing;
    }

    pub fn next_field(&mut self) {
        self.field = (self.field + 1) % ThresholdField::ALL.len();
    }

    pub fn prev_field(&mut self) {
        let len = ThresholdField::ALL.len();
        self.field = (self.field + len - 1) % len;
    }

    pub fn adjust(&mut self, steps: i32) {
        let field = self.selected_field();
        self.sim.thresholds.adjust(field, steps);
    }
}
