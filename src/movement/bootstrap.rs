//! Movement domain: player bootstrap and locomotion validation.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::animation::AnimationController;
use crate::camouflage::{Camouflage, Energy, EnergyTuning};
use crate::movement::{
    GameLayer, GroundContact, Locomotion, LocomotionDisabled, LocomotionError, LocomotionTuning,
    Player, SpawnPoint, WorldConfig, depth_to_z,
};
use crate::parallax::DepthScaled;

pub(crate) const PLAYER_SIZE: Vec2 = Vec2::new(0.5, 1.0);

/// Spawn the player from the loaded tuning. Runs in `Startup`, after the
/// config resources have been inserted.
pub(crate) fn spawn_player(
    mut commands: Commands,
    tuning: Res<LocomotionTuning>,
    world: Res<WorldConfig>,
    energy_tuning: Res<EnergyTuning>,
    existing_player: Query<Entity, With<Player>>,
) {
    // Don't spawn if player already exists
    if !existing_player.is_empty() {
        info!("Player already exists, skipping spawn");
        return;
    }

    let spawn = world.spawn_vec();
    let locomotion = Locomotion::new(*tuning, spawn.z);

    info!(
        "Spawning player at {}: move_speed={}, jump_force={}, jump_height={:.2}, depth=[{}, {}]",
        spawn,
        tuning.move_speed,
        tuning.jump_force,
        tuning.full_jump_height(),
        tuning.min_depth,
        tuning.max_depth
    );

    commands.spawn((
        // Identity & Movement
        (
            Player,
            SpawnPoint(spawn),
            GroundContact::default(),
            Transform::from_xyz(spawn.x, spawn.y, depth_to_z(locomotion.depth_position())),
            locomotion,
        ),
        // Abilities & Presentation
        (
            Energy::new(energy_tuning.max_energy),
            Camouflage::default(),
            AnimationController::new(PLAYER_SIZE),
            DepthScaled::default(),
            Sprite {
                color: Color::srgb(0.9, 0.9, 0.9),
                custom_size: Some(PLAYER_SIZE),
                ..default()
            },
        ),
        // Physics
        (
            RigidBody::Dynamic,
            Collider::rectangle(PLAYER_SIZE.x, PLAYER_SIZE.y),
            LockedAxes::ROTATION_LOCKED,
            LinearVelocity::default(),
            GravityScale(0.0), // Locomotion owns gravity
            Friction::new(0.0),
            CollisionLayers::new(GameLayer::Player, [GameLayer::Ground]),
        ),
    ));
}

/// A locomotion entity without a physics body, collider or ground contact
/// cannot move or probe the ground. Disable it and say why; no recovery is
/// attempted.
pub(crate) fn validate_locomotion_bodies(
    mut commands: Commands,
    query: Query<
        (Entity, Has<RigidBody>, Has<Collider>, Has<GroundContact>),
        Added<Locomotion>,
    >,
) {
    for (entity, has_body, has_collider, has_contact) in &query {
        let missing = if !has_body {
            Some("RigidBody")
        } else if !has_collider {
            Some("Collider")
        } else if !has_contact {
            Some("GroundContact")
        } else {
            None
        };

        if let Some(collaborator) = missing {
            let err = LocomotionError::MissingCollaborator {
                entity,
                collaborator,
            };
            error!("{}", err);
            commands.entity(entity).insert(LocomotionDisabled);
        }
    }
}
