//! Movement domain: components and physics layers for locomotion.

use avian2d::prelude::*;
use bevy::prelude::*;

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Floors and platforms; the only layer the ground probe sees
    Ground,
    /// Player character
    Player,
}

#[derive(Component, Debug)]
pub struct Player;

/// Marker for ground colliders
#[derive(Component, Debug)]
pub struct Ground;

/// Result of the last ground probe, written before the frame step.
#[derive(Component, Debug, Default, Clone, Copy)]
pub struct GroundContact {
    pub grounded: bool,
}

/// Where a character returns to when it falls out of the level.
/// Gameplay space: z is depth.
#[derive(Component, Debug, Clone, Copy)]
pub struct SpawnPoint(pub Vec3);

/// Set on characters whose locomotion failed validation. Every locomotion
/// system skips them.
#[derive(Component, Debug)]
pub struct LocomotionDisabled;

/// Gameplay depth is positive away from the camera. Bevy's 2D camera looks
/// down -Z, so farther objects need a lower z to draw behind nearer ones.
pub fn depth_to_z(depth: f32) -> f32 {
    -depth
}

pub fn z_to_depth(z: f32) -> f32 {
    -z
}
