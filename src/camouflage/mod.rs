//! Camouflage domain: energy-gated blending into the background.

mod energy;
mod state;
mod systems;


pub use energy::{Energy, EnergyTuning};
pub use state::{Camouflage, CamouflageRequest, CamouflageTransition, CamouflageTuning};

use bevy::prelude::*;

use crate::camouflage::systems::{apply_camouflage_alpha, read_camouflage_input, update_camouflage};
use crate::movement::LocomotionSet;

#[derive(Resource, Debug, Default)]
pub struct CamouflageInput {
    pub held: bool,
}

pub struct CamouflagePlugin;

impl Plugin for CamouflagePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CamouflageTuning>()
            .init_resource::<EnergyTuning>()
            .init_resource::<CamouflageInput>()
            .add_systems(
                Update,
                (
                    read_camouflage_input,
                    update_camouflage,
                    apply_camouflage_alpha,
                )
                    .chain()
                    .after(LocomotionSet),
            );
    }
}
