//! Core domain: camera and shared wiring.

mod camera;

pub use camera::{CameraTuning, FollowCamera, follow_player_camera, smooth_follow};

use bevy::prelude::*;

use crate::core::camera::{setup_camera, snap_camera_on_reset};
use crate::movement::LocomotionSet;

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CameraTuning>()
            .add_systems(Startup, setup_camera)
            .add_systems(
                Update,
                (snap_camera_on_reset, follow_player_camera)
                    .chain()
                    .after(LocomotionSet),
            );
    }
}
