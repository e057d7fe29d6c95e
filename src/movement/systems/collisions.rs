//! Movement domain: ground detection.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::bootstrap::PLAYER_SIZE;
use crate::movement::probe::{ProbeFootprint, SpatialGroundProbe, probe_grounded};
use crate::movement::{GameLayer, GroundContact, Locomotion, LocomotionDisabled};

/// Half extents of a rectangular collider; `None` for any other shape.
pub(crate) fn collider_half_extents(collider: &Collider) -> Option<Vec2> {
    collider
        .shape_scaled()
        .as_cuboid()
        .map(|c| Vec2::new(c.half_extents.x, c.half_extents.y))
}

pub(crate) fn detect_ground(
    spatial_query: SpatialQuery,
    mut query: Query<
        (Entity, &Transform, &Collider, &Locomotion, &mut GroundContact),
        Without<LocomotionDisabled>,
    >,
) {
    // Only Ground layer entities count, never the character itself
    let probe = SpatialGroundProbe::new(
        &spatial_query,
        SpatialQueryFilter::from_mask(GameLayer::Ground),
    );

    for (entity, transform, collider, locomotion, mut contact) in &mut query {
        let half_extents = match collider_half_extents(collider) {
            Some(half_extents) => half_extents,
            None => {
                warn_once!(
                    "{:?} has a non-rectangular collider; probing with the player footprint",
                    entity
                );
                PLAYER_SIZE * 0.5
            }
        };

        let footprint = ProbeFootprint {
            center: transform
                .translation
                .truncate()
                .extend(locomotion.depth_position()),
            half_height: half_extents.y,
            radius: half_extents.x,
        };

        contact.grounded = probe_grounded(
            &probe,
            &footprint,
            locomotion.tuning().ground_check_distance,
        );
    }
}
