//! The gameplay config file: one section per domain.

use serde::{Deserialize, Serialize};

use crate::camouflage::{CamouflageTuning, EnergyTuning};
use crate::core::CameraTuning;
use crate::mirror::MirrorConfig;
use crate::movement::{LocomotionTuning, WorldConfig};
use crate::parallax::ParallaxTuning;

/// Root of `assets/data/gameplay.ron`. Missing sections and fields fall
/// back to their defaults.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct GameplayConfig {
    pub locomotion: LocomotionTuning,
    pub world: WorldConfig,
    pub mirror: MirrorConfig,
    pub camouflage: CamouflageTuning,
    pub energy: EnergyTuning,
    pub camera: CameraTuning,
    pub parallax: ParallaxTuning,
}
