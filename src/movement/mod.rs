//! Movement domain: locomotion plugin wiring and public exports.

mod bootstrap;
mod components;
mod dev;
mod events;
mod locomotion;
pub mod probe;
mod resources;
mod systems;

#[cfg(test)]
mod tests;

pub use components::{
    GameLayer, Ground, GroundContact, LocomotionDisabled, Player, SpawnPoint, depth_to_z,
    z_to_depth,
};
pub use events::LocomotionReset;
pub use locomotion::{
    FrameOutcome, GROUNDED_REST_VELOCITY, INPUT_EPSILON, Locomotion, LocomotionError,
    LocomotionSignals, MAX_VERTICAL_SPEED, MonotonicClock, PhysicsCommand, move_towards,
};
pub use resources::{LocomotionInput, LocomotionTuning, WorldConfig};

use bevy::prelude::*;

use crate::movement::bootstrap::{spawn_player, validate_locomotion_bodies};
use crate::movement::dev::spawn_test_level;
use crate::movement::systems::{
    detect_ground, read_input, respawn_fallen_characters, step_locomotion_frame,
    step_locomotion_physics,
};

/// Frame-phase locomotion systems. Anything reading locomotion getters for
/// presentation should run after this set.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct LocomotionSet;

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<LocomotionTuning>()
            .init_resource::<WorldConfig>()
            .init_resource::<LocomotionInput>()
            .add_message::<LocomotionReset>()
            .add_systems(Startup, (spawn_test_level, spawn_player))
            .add_systems(
                Update,
                (
                    read_input,
                    validate_locomotion_bodies,
                    detect_ground,
                    step_locomotion_frame,
                    respawn_fallen_characters,
                )
                    .chain()
                    .in_set(LocomotionSet),
            )
            .add_systems(FixedUpdate, step_locomotion_physics);

        #[cfg(feature = "dev-tools")]
        app.add_systems(
            Update,
            dev::debug_reset_hotkey
                .after(respawn_fallen_characters)
                .in_set(LocomotionSet),
        );
    }
}
