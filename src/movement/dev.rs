//! Movement domain: test level and debug-only helpers.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{GameLayer, Ground, depth_to_z};

/// Ground slabs span the whole depth band; they sit at the far edge so the
/// player always draws in front of them.
const GROUND_DEPTH: f32 = 2.5;

pub(crate) fn spawn_test_level(mut commands: Commands) {
    let ground_color = Color::srgb(0.4, 0.5, 0.4);
    let platform_color = Color::srgb(0.5, 0.4, 0.3);

    let ground_layers = CollisionLayers::new(GameLayer::Ground, [GameLayer::Player]);

    // (center, size, color)
    let slabs = [
        // Main floor, with a gap to the right
        (Vec2::new(-4.0, -1.0), Vec2::new(16.0, 1.0), ground_color),
        (Vec2::new(10.0, -1.0), Vec2::new(8.0, 1.0), ground_color),
        // Stepping platforms
        (Vec2::new(-5.0, 1.5), Vec2::new(3.0, 0.4), platform_color),
        (Vec2::new(0.0, 3.0), Vec2::new(2.5, 0.4), platform_color),
        (Vec2::new(5.0, 4.5), Vec2::new(3.0, 0.4), platform_color),
    ];

    for (center, size, color) in slabs {
        commands.spawn((
            Ground,
            Sprite {
                color,
                custom_size: Some(size),
                ..default()
            },
            Transform::from_xyz(center.x, center.y, depth_to_z(GROUND_DEPTH)),
            RigidBody::Static,
            Collider::rectangle(size.x, size.y),
            ground_layers,
        ));
    }

    info!("Spawned test level: {} ground slabs", slabs.len());
}

#[cfg(feature = "dev-tools")]
pub(crate) fn debug_reset_hotkey(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut query: Query<
        (
            Entity,
            &crate::movement::SpawnPoint,
            &mut crate::movement::Locomotion,
            &mut Transform,
            &mut Position,
            &mut LinearVelocity,
        ),
        (
            With<crate::movement::Player>,
            Without<crate::movement::LocomotionDisabled>,
        ),
    >,
    mut resets: bevy::ecs::message::MessageWriter<crate::movement::LocomotionReset>,
) {
    if !keyboard.just_pressed(KeyCode::KeyR) {
        return;
    }

    for (entity, spawn, mut locomotion, mut transform, mut position, mut velocity) in &mut query {
        let translation = crate::movement::systems::teleport(
            spawn.0,
            &mut locomotion,
            &mut transform,
            &mut position,
            &mut velocity,
        );
        info!("[DEBUG] Reset {:?} to spawn {}", entity, spawn.0);
        resets.write(crate::movement::LocomotionReset {
            entity,
            translation,
        });
    }
}
