//! Camouflage domain: the energy pool that pays for staying hidden.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Resource, Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct EnergyTuning {
    pub max_energy: f32,
    pub drain_per_second: f32,
    pub regen_per_second: f32,
    /// Seconds without drain before regeneration starts.
    pub regen_delay: f32,
    /// Minimum energy needed to switch camouflage on.
    pub activation_threshold: f32,
}

impl Default for EnergyTuning {
    fn default() -> Self {
        Self {
            max_energy: 100.0,
            drain_per_second: 25.0,
            regen_per_second: 15.0,
            regen_delay: 1.0,
            activation_threshold: 20.0,
        }
    }
}

#[derive(Component, Debug, Clone, PartialEq)]
pub struct Energy {
    pub current: f32,
    pub max: f32,
    /// Remaining delay before regeneration resumes.
    pub regen_cooldown: f32,
}

impl Energy {
    pub fn new(max: f32) -> Self {
        Self {
            current: max,
            max,
            regen_cooldown: 0.0,
        }
    }

    pub fn fraction(&self) -> f32 {
        if self.max <= 0.0 {
            0.0
        } else {
            self.current / self.max
        }
    }

    pub fn is_empty(&self) -> bool {
        self.current <= 0.0
    }

    /// Spend `amount`, clamping at zero. Returns false once the pool is empty.
    pub fn drain(&mut self, amount: f32, tuning: &EnergyTuning) -> bool {
        self.current = (self.current - amount).max(0.0);
        self.regen_cooldown = tuning.regen_delay;
        !self.is_empty()
    }

    pub fn regenerate(&mut self, dt: f32, tuning: &EnergyTuning) {
        if self.regen_cooldown > 0.0 {
            self.regen_cooldown = (self.regen_cooldown - dt).max(0.0);
            return;
        }
        self.current = (self.current + tuning.regen_per_second * dt).min(self.max);
    }
}
