//! Movement domain: tuning, world and input resources.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Construction-time locomotion parameters. Copied into each `Locomotion`
/// when a character spawns and never changed by the state machine.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct LocomotionTuning {
    pub move_speed: f32,
    pub acceleration: f32,
    pub jump_force: f32,
    pub jump_buffer_time: f32,
    pub coyote_time: f32,
    pub gravity: f32,
    pub fall_gravity_multiplier: f32,
    pub depth_move_speed: f32,
    pub min_depth: f32,
    pub max_depth: f32,
    pub ground_check_distance: f32,
}

impl Default for LocomotionTuning {
    fn default() -> Self {
        Self {
            move_speed: 5.0,
            acceleration: 50.0,
            jump_force: 12.0,
            jump_buffer_time: 0.2,
            coyote_time: 0.15,
            gravity: 30.0,
            fall_gravity_multiplier: 1.5,
            depth_move_speed: 3.0,
            min_depth: -2.0,
            max_depth: 2.0,
            ground_check_distance: 0.1,
        }
    }
}

impl LocomotionTuning {
    /// Apex height of a full (unreleased) jump from rest: h = v² / (2g)
    pub fn full_jump_height(&self) -> f32 {
        self.jump_force * self.jump_force / (2.0 * self.gravity)
    }

    pub fn clamp_depth(&self, depth: f32) -> f32 {
        depth.clamp(self.min_depth, self.max_depth)
    }
}

/// Level-wide placement rules.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct WorldConfig {
    /// Player spawn in gameplay space (z is depth).
    pub spawn_point: (f32, f32, f32),
    /// Characters below this height are reset to their spawn point.
    pub kill_plane_y: f32,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            spawn_point: (0.0, 2.0, 0.0),
            kill_plane_y: -12.0,
        }
    }
}

impl WorldConfig {
    pub fn spawn_vec(&self) -> Vec3 {
        let (x, y, z) = self.spawn_point;
        Vec3::new(x, y, z)
    }
}

/// Raw input sampled once per rendered frame.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq)]
pub struct LocomotionInput {
    /// Left/right in [-1, 1].
    pub horizontal: f32,
    /// Away from (+1) or toward (-1) the camera.
    pub depth: f32,
    pub jump_pressed: bool,
    pub jump_released: bool,
}
