//! Movement domain: locomotion messages.

use bevy::ecs::message::Message;
use bevy::prelude::*;

/// Emitted when a character is teleported back to a spawn point.
#[derive(Debug)]
pub struct LocomotionReset {
    pub entity: Entity,
    /// Where it landed, in world translation (not gameplay space).
    pub translation: Vec3,
}

impl Message for LocomotionReset {}
