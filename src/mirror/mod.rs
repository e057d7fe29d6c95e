//! Mirror domain: the twin that copies the player across a mirror line.
//!
//! One parameterized implementation covers both the inverted twin (walks
//! the opposite way across `axis_x`) and the parallel echo (follows at a
//! fixed offset).

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::animation::{AnimationController, apply_animation_pose};
use crate::movement::{Locomotion, LocomotionSet, Player, depth_to_z, z_to_depth};
use crate::parallax::{DepthScaled, update_depth_scale};


#[derive(Resource, Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct MirrorConfig {
    /// Vertical mirror line in world x.
    pub axis_x: f32,
    /// Reflect across `axis_x` instead of following at `offset_x`.
    pub invert: bool,
    /// Reflect depth through zero as well.
    pub mirror_depth: bool,
    /// Follow offset used when not inverting.
    pub offset_x: f32,
}

impl Default for MirrorConfig {
    fn default() -> Self {
        Self {
            axis_x: 0.0,
            invert: true,
            mirror_depth: false,
            offset_x: 3.0,
        }
    }
}

impl MirrorConfig {
    /// Map a source position (gameplay space, z is depth) to the twin's.
    pub fn mirror_point(&self, source: Vec3) -> Vec3 {
        let x = if self.invert {
            2.0 * self.axis_x - source.x
        } else {
            source.x + self.offset_x
        };
        let depth = if self.mirror_depth { -source.z } else { source.z };
        Vec3::new(x, source.y, depth)
    }

    pub fn mirror_facing(&self, source_facing_left: bool) -> bool {
        source_facing_left != self.invert
    }
}

/// A twin following `source`.
#[derive(Component, Debug)]
pub struct MirrorTwin {
    pub source: Entity,
}

pub struct MirrorPlugin;

impl Plugin for MirrorPlugin {
    fn build(&self, app: &mut App) {
        // Twins move before their depth scale is recomputed and are sized
        // after it, so size never lags position
        app.init_resource::<MirrorConfig>()
            .add_systems(
                Update,
                (spawn_mirror_twins, sync_mirror_twins)
                    .chain()
                    .after(LocomotionSet)
                    .before(update_depth_scale),
            )
            .add_systems(
                Update,
                size_mirror_twins
                    .after(update_depth_scale)
                    .after(apply_animation_pose),
            );
    }
}

fn spawn_mirror_twins(
    mut commands: Commands,
    config: Res<MirrorConfig>,
    players: Query<(Entity, &Transform, &Sprite), Added<Player>>,
) {
    for (source, transform, sprite) in &players {
        let source_point = transform
            .translation
            .truncate()
            .extend(z_to_depth(transform.translation.z));
        let twin_point = config.mirror_point(source_point);
        let size = sprite.custom_size.unwrap_or(Vec2::ONE);

        info!(
            "Spawning mirror twin for {:?}: invert={}, axis_x={}",
            source, config.invert, config.axis_x
        );

        commands.spawn((
            MirrorTwin { source },
            DepthScaled::default(),
            Sprite {
                color: Color::srgba(0.55, 0.7, 1.0, 0.8),
                custom_size: Some(size),
                ..default()
            },
            Transform::from_xyz(twin_point.x, twin_point.y, depth_to_z(twin_point.z)),
        ));
    }
}

/// Twins only read their source; they never feed back into it.
pub(crate) fn sync_mirror_twins(
    mut commands: Commands,
    config: Res<MirrorConfig>,
    sources: Query<(&Transform, &Locomotion), Without<MirrorTwin>>,
    mut twins: Query<(Entity, &MirrorTwin, &mut Transform, &mut Sprite)>,
) {
    for (twin_entity, twin, mut transform, mut sprite) in &mut twins {
        let Ok((source_transform, locomotion)) = sources.get(twin.source) else {
            debug!("Mirror source {:?} is gone, removing twin", twin.source);
            commands.entity(twin_entity).despawn();
            continue;
        };

        let source_point = source_transform
            .translation
            .truncate()
            .extend(locomotion.depth_position());
        let point = config.mirror_point(source_point);
        transform.translation = Vec3::new(point.x, point.y, depth_to_z(point.z));

        sprite.flip_x = config.mirror_facing(locomotion.signals().facing_left);
    }
}

/// Copy the source's posed size, scaled by the twin's own depth.
pub(crate) fn size_mirror_twins(
    sources: Query<&AnimationController>,
    mut twins: Query<(&MirrorTwin, &DepthScaled, &mut Sprite)>,
) {
    for (twin, depth_scaled, mut sprite) in &mut twins {
        if let Ok(animation) = sources.get(twin.source) {
            sprite.custom_size = Some(animation.posed_size() * depth_scaled.factor);
        }
    }
}
