//! Camouflage domain: activation rules and visibility blending.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use super::energy::{Energy, EnergyTuning};
use crate::movement::move_towards;

#[derive(Resource, Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct CamouflageTuning {
    /// Seconds to fade fully in.
    pub blend_in_time: f32,
    /// Seconds to fade fully back out.
    pub blend_out_time: f32,
    /// Sprite alpha when fully blended.
    pub hidden_alpha: f32,
    /// Horizontal speed above which camouflage cannot hold.
    pub max_activation_speed: f32,
    pub require_grounded: bool,
}

impl Default for CamouflageTuning {
    fn default() -> Self {
        Self {
            blend_in_time: 0.4,
            blend_out_time: 0.2,
            hidden_alpha: 0.25,
            max_activation_speed: 0.5,
            require_grounded: true,
        }
    }
}

/// Per-frame facts the camouflage rules depend on.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CamouflageRequest {
    pub held: bool,
    pub grounded: bool,
    pub horizontal_speed: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CamouflageTransition {
    Activated,
    Deactivated,
    /// Switched off because energy ran out.
    Depleted,
}

#[derive(Component, Debug, Clone, Default, PartialEq)]
pub struct Camouflage {
    pub active: bool,
    /// 0 = fully visible, 1 = fully blended.
    pub blend: f32,
}

impl Camouflage {
    pub fn update(
        &mut self,
        request: CamouflageRequest,
        energy: &mut Energy,
        tuning: &CamouflageTuning,
        energy_tuning: &EnergyTuning,
        dt: f32,
    ) -> Option<CamouflageTransition> {
        let eligible = request.held
            && (request.grounded || !tuning.require_grounded)
            && request.horizontal_speed.abs() <= tuning.max_activation_speed;

        let mut transition = None;
        if self.active {
            if !eligible {
                self.active = false;
                transition = Some(CamouflageTransition::Deactivated);
            } else if !energy.drain(energy_tuning.drain_per_second * dt, energy_tuning) {
                self.active = false;
                transition = Some(CamouflageTransition::Depleted);
            }
        } else if eligible && energy.current >= energy_tuning.activation_threshold {
            self.active = true;
            transition = Some(CamouflageTransition::Activated);
        }

        if !self.active {
            energy.regenerate(dt, energy_tuning);
        }

        let (target, duration) = if self.active {
            (1.0, tuning.blend_in_time)
        } else {
            (0.0, tuning.blend_out_time)
        };
        self.blend = if duration > 0.0 {
            move_towards(self.blend, target, dt / duration)
        } else {
            target
        };

        transition
    }

    pub fn alpha(&self, tuning: &CamouflageTuning) -> f32 {
        1.0 + (tuning.hidden_alpha - 1.0) * self.blend
    }

    pub fn is_concealed(&self) -> bool {
        self.blend >= 1.0
    }
}
