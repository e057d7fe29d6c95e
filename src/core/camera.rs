//! Core domain: the follow camera.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::movement::{LocomotionReset, Player};

#[derive(Resource, Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct CameraTuning {
    pub pixels_per_meter: f32,
    /// Higher follows tighter; 0 never moves.
    pub follow_smoothing: f32,
    /// Keep the player a little below screen center.
    pub vertical_offset: f32,
}

impl Default for CameraTuning {
    fn default() -> Self {
        Self {
            pixels_per_meter: 48.0,
            follow_smoothing: 6.0,
            vertical_offset: 1.5,
        }
    }
}

#[derive(Component, Debug)]
pub struct FollowCamera;

/// Frame-rate independent exponential approach.
pub fn smooth_follow(current: Vec2, target: Vec2, smoothing: f32, dt: f32) -> Vec2 {
    let t = 1.0 - (-smoothing * dt).exp();
    current.lerp(target, t)
}

pub(crate) fn setup_camera(mut commands: Commands, tuning: Res<CameraTuning>) {
    commands.spawn((
        Camera2d,
        FollowCamera,
        Projection::from(OrthographicProjection {
            scale: 1.0 / tuning.pixels_per_meter,
            ..OrthographicProjection::default_2d()
        }),
    ));
}

pub fn follow_player_camera(
    time: Res<Time>,
    tuning: Res<CameraTuning>,
    players: Query<&Transform, (With<Player>, Without<FollowCamera>)>,
    mut cameras: Query<&mut Transform, With<FollowCamera>>,
) {
    let Ok(player) = players.single() else {
        return;
    };
    let target = player.translation.truncate() + Vec2::new(0.0, tuning.vertical_offset);

    for mut camera in &mut cameras {
        let next = smooth_follow(
            camera.translation.truncate(),
            target,
            tuning.follow_smoothing,
            time.delta_secs(),
        );
        camera.translation.x = next.x;
        camera.translation.y = next.y;
    }
}

/// Cut instead of panning across the level after a respawn.
pub(crate) fn snap_camera_on_reset(
    tuning: Res<CameraTuning>,
    mut resets: MessageReader<LocomotionReset>,
    players: Query<(), With<Player>>,
    mut cameras: Query<&mut Transform, With<FollowCamera>>,
) {
    for reset in resets.read() {
        if players.get(reset.entity).is_err() {
            continue;
        }
        for mut camera in &mut cameras {
            camera.translation.x = reset.translation.x;
            camera.translation.y = reset.translation.y + tuning.vertical_offset;
        }
    }
}
