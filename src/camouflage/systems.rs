//! Camouflage domain: input, state updates and sprite fading.

use bevy::prelude::*;

use super::{Camouflage, CamouflageInput, CamouflageRequest, CamouflageTuning, Energy, EnergyTuning};
use crate::movement::{Locomotion, LocomotionDisabled};

pub(crate) fn read_camouflage_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut input: ResMut<CamouflageInput>,
) {
    input.held = keyboard.pressed(KeyCode::KeyC) || keyboard.pressed(KeyCode::ShiftLeft);
}

pub(crate) fn update_camouflage(
    time: Res<Time>,
    input: Res<CamouflageInput>,
    tuning: Res<CamouflageTuning>,
    energy_tuning: Res<EnergyTuning>,
    mut query: Query<
        (Entity, &Locomotion, &mut Camouflage, &mut Energy),
        Without<LocomotionDisabled>,
    >,
) {
    let dt = time.delta_secs();

    for (entity, locomotion, mut camouflage, mut energy) in &mut query {
        let request = CamouflageRequest {
            held: input.held,
            grounded: locomotion.is_grounded(),
            horizontal_speed: locomotion.current_velocity().x,
        };

        let was_concealed = camouflage.is_concealed();
        if let Some(transition) =
            camouflage.update(request, &mut energy, &tuning, &energy_tuning, dt)
        {
            debug!(
                "{:?} camouflage {:?}: energy={:.0}%",
                entity,
                transition,
                energy.fraction() * 100.0
            );
        }
        if camouflage.is_concealed() != was_concealed {
            debug!("{:?} concealed={}", entity, !was_concealed);
        }
    }
}

pub(crate) fn apply_camouflage_alpha(
    tuning: Res<CamouflageTuning>,
    mut query: Query<(&Camouflage, &mut Sprite)>,
) {
    for (camouflage, mut sprite) in &mut query {
        sprite.color.set_alpha(camouflage.alpha(&tuning));
    }
}
