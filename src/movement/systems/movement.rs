//! Movement domain: the two locomotion phases and respawning.

use avian2d::prelude::*;
use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::movement::{
    GroundContact, Locomotion, LocomotionDisabled, LocomotionInput, LocomotionReset, SpawnPoint,
    WorldConfig, depth_to_z,
};

/// Variable-timestep phase: runs once per rendered frame after the probe.
pub(crate) fn step_locomotion_frame(
    time: Res<Time>,
    input: Res<LocomotionInput>,
    mut query: Query<(Entity, &GroundContact, &mut Locomotion), Without<LocomotionDisabled>>,
) {
    let dt = time.delta_secs();

    for (entity, contact, mut locomotion) in &mut query {
        let outcome = locomotion.frame_step(&input, contact.grounded, &*time, dt);

        if outcome.landed {
            debug!("{:?} landed: velocity={}", entity, locomotion.current_velocity());
        } else if outcome.left_ground {
            debug!("{:?} left ground", entity);
        }
        if outcome.jumped {
            debug!(
                "{:?} jumped: vy={}",
                entity,
                locomotion.current_velocity().y
            );
        }
    }
}

/// Fixed-timestep phase: horizontal acceleration, then hand the velocity to
/// the integrator. Depth bypasses the integrator and is written directly.
pub(crate) fn step_locomotion_physics(
    time: Res<Time>,
    mut query: Query<
        (&mut Locomotion, &mut LinearVelocity, &mut Transform),
        Without<LocomotionDisabled>,
    >,
) {
    let dt = time.delta_secs();

    for (mut locomotion, mut velocity, mut transform) in &mut query {
        let command = locomotion.physics_step(dt);
        velocity.0 = command.velocity;
        if let Some(depth) = command.depth {
            transform.translation.z = depth_to_z(depth);
        }
    }
}

pub(crate) fn respawn_fallen_characters(
    world: Res<WorldConfig>,
    mut query: Query<
        (
            Entity,
            &SpawnPoint,
            &mut Locomotion,
            &mut Transform,
            &mut Position,
            &mut LinearVelocity,
        ),
        Without<LocomotionDisabled>,
    >,
    mut resets: MessageWriter<LocomotionReset>,
) {
    for (entity, spawn, mut locomotion, mut transform, mut position, mut velocity) in &mut query {
        if transform.translation.y >= world.kill_plane_y {
            continue;
        }

        info!(
            "{:?} fell below kill plane ({}), respawning at {}",
            entity, world.kill_plane_y, spawn.0
        );
        let translation = teleport(
            spawn.0,
            &mut locomotion,
            &mut transform,
            &mut position,
            &mut velocity,
        );
        resets.write(LocomotionReset {
            entity,
            translation,
        });
    }
}

/// Move a locomotion body to `target` (gameplay space) and stop it.
/// Returns the new world translation.
pub(crate) fn teleport(
    target: Vec3,
    locomotion: &mut Locomotion,
    transform: &mut Transform,
    position: &mut Position,
    velocity: &mut LinearVelocity,
) -> Vec3 {
    locomotion.reset_to_position(target);
    let translation = Vec3::new(
        target.x,
        target.y,
        depth_to_z(locomotion.depth_position()),
    );
    transform.translation = translation;
    position.0 = target.truncate();
    velocity.0 = Vec2::ZERO;
    translation
}
