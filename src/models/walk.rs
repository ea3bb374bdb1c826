//! Bounded random walk used by the simulated sensors.

use crate::traits::RandomSource;

/// One telemetry channel's walk parameters.
///
/// Each step moves the value by `(u - 0.5) * spread` for a uniform `u` in
/// `[0, 1)`, then clamps it to `[min, max]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundedWalk {
    pub min: f64,
    pub max: f64,
    pub spread: f64,
}

impl BoundedWalk {
    pub const fn new(min: f64, max: f64, spread: f64) -> Self {
        Self { min, max, spread }
    }

    /// Advance `value` by one step.
    pub fn step(&self, value: f64, random: &dyn RandomSource) -> f64 {
        let delta = (random.next_f64() - 0.5) * self.spread;
        (value + delta).clamp(self.min, self.max)
    }
}
