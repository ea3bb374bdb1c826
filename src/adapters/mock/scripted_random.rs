//! Scripted random source for testing.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::traits::RandomSource;

/// Replays queued draws, then returns a fallback value forever.
#[derive(Debug, Clone)]
pub struct ScriptedRandom {
    queued: Arc<Mutex<VecDeque<f64>>>,
    fallback: Arc<Mutex<f64>>,
}

impl ScriptedRandom {
    /// A source that always returns `value`.
    pub fn constant(value: f64) -> Self {
        Self {
            queued: Arc::new(Mutex::new(VecDeque::new())),
            fallback: Arc::new(Mutex::new(value)),
        }
    }

    /// A source that returns `values` in order, then 0.5.
    pub fn sequence(values: impl IntoIterator<Item = f64>) -> Self {
        let source = Self::constant(0.5);
        source.push_many(values);
        source
    }

    pub fn push(&self, value: f64) {
        self.queued.lock().unwrap().push_back(value);
    }

    pub fn push_many(&self, values: impl IntoIterator<Item = f64>) {
        self.queued.lock().unwrap().extend(values);
    }

    pub fn set_fallback(&self, value: f64) {
        *self.fallback.lock().unwrap() = value;
    }

    /// Draws still queued.
    pub fn remaining(&self) -> usize {
        self.queued.lock().unwrap().len()
    }
}

impl RandomSource for ScriptedRandom {
    fn next_f64(&self) -> f64 {
        self.queued
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| *self.fallback.lock().unwrap())
    }
}
