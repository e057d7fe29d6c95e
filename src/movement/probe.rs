//! Movement domain: the five-ray ground probe.

use avian2d::prelude::*;
use bevy::prelude::*;

/// Anything that can answer "does a downward ray from here hit ground?"
pub trait GroundProbe {
    /// `origin` is in gameplay space (z is depth).
    fn ray_hits(&self, origin: Vec3, length: f32) -> bool;
}

/// The part of a character's collider the probe needs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProbeFootprint {
    /// Collider center in gameplay space.
    pub center: Vec3,
    pub half_height: f32,
    /// Horizontal half extent; rays fan out by half of it.
    pub radius: f32,
}

impl ProbeFootprint {
    /// Center, then ±right, then ±depth (forward/back).
    pub fn ray_origins(&self) -> [Vec3; 5] {
        let offset = self.radius * 0.5;
        [
            self.center,
            self.center + Vec3::new(offset, 0.0, 0.0),
            self.center - Vec3::new(offset, 0.0, 0.0),
            self.center + Vec3::new(0.0, 0.0, offset),
            self.center - Vec3::new(0.0, 0.0, offset),
        ]
    }

    pub fn ray_length(&self, ground_check_distance: f32) -> f32 {
        self.half_height + ground_check_distance
    }
}

/// Grounded if any of the footprint's rays hits.
pub fn probe_grounded(
    probe: &impl GroundProbe,
    footprint: &ProbeFootprint,
    ground_check_distance: f32,
) -> bool {
    let length = footprint.ray_length(ground_check_distance);
    footprint
        .ray_origins()
        .into_iter()
        .any(|origin| probe.ray_hits(origin, length))
}

/// Ground probe backed by avian's spatial query. The 2D world has no depth
/// extent, so depth-offset origins cast down the center column.
pub struct SpatialGroundProbe<'a, 'w, 's> {
    spatial_query: &'a SpatialQuery<'w, 's>,
    filter: SpatialQueryFilter,
}

impl<'a, 'w, 's> SpatialGroundProbe<'a, 'w, 's> {
    pub fn new(spatial_query: &'a SpatialQuery<'w, 's>, filter: SpatialQueryFilter) -> Self {
        Self {
            spatial_query,
            filter,
        }
    }
}

impl GroundProbe for SpatialGroundProbe<'_, '_, '_> {
    fn ray_hits(&self, origin: Vec3, length: f32) -> bool {
        self.spatial_query
            .cast_ray(origin.truncate(), Dir2::NEG_Y, length, true, &self.filter)
            .is_some()
    }
}
