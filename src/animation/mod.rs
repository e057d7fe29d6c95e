//! Animation module: locomotion-driven sprite states.

mod controller;

pub use controller::*;

use bevy::prelude::*;

use crate::movement::LocomotionSet;
use crate::parallax::update_depth_scale;

pub struct AnimationPlugin;

impl Plugin for AnimationPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<AnimationFinished>().add_systems(
            Update,
            (
                drive_animators::<AnimationController>,
                update_animation_frames,
                settle_finished_animations,
                apply_animation_pose,
            )
                .chain()
                .after(LocomotionSet)
                .after(update_depth_scale),
        );
    }
}
