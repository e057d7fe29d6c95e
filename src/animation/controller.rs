//! Animation state machine and playback.
//!
//! Characters declare which locomotion signals they react to by
//! implementing `LocomotionAnimator`; the driving system is registered once
//! per animator type, so there is no per-frame parameter lookup.

use bevy::ecs::component::Mutable;
use bevy::ecs::message::{Message, MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::movement::{Locomotion, LocomotionDisabled, LocomotionSignals};
use crate::parallax::DepthScaled;

/// Horizontal speeds at or below this read as standing still.
pub const RUN_THRESHOLD: f32 = 0.1;

/// Capability: consumes locomotion signals once per frame.
pub trait LocomotionAnimator {
    fn apply_signals(&mut self, signals: &LocomotionSignals);
}

/// Animation states for characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AnimationState {
    #[default]
    Idle,
    Run,
    Jump,
    Fall,
    Land,
}

impl AnimationState {
    pub fn is_looping(&self) -> bool {
        matches!(self, AnimationState::Idle | AnimationState::Run)
    }

    pub fn frame_count(&self) -> u32 {
        match self {
            AnimationState::Idle => 4,
            AnimationState::Run => 6,
            AnimationState::Jump => 2,
            AnimationState::Fall => 2,
            AnimationState::Land => 2,
        }
    }

    pub fn frame_duration(&self) -> f32 {
        match self {
            AnimationState::Land => 0.06,
            AnimationState::Run => 0.1,
            _ => 0.15,
        }
    }

    /// Squash/stretch applied to the sprite size while in this state.
    pub fn pose_scale(&self) -> Vec2 {
        match self {
            AnimationState::Idle | AnimationState::Run => Vec2::ONE,
            AnimationState::Jump => Vec2::new(0.9, 1.12),
            AnimationState::Fall => Vec2::new(0.95, 1.05),
            AnimationState::Land => Vec2::new(1.15, 0.85),
        }
    }
}

/// Component for animation playback on a character sprite.
#[derive(Component, Debug)]
pub struct AnimationController {
    /// Current animation state.
    pub state: AnimationState,
    /// Previous state (for detecting transitions).
    pub previous_state: AnimationState,
    /// Current frame index (0-based).
    pub current_frame: u32,
    /// Time accumulator for frame timing.
    pub frame_timer: f32,
    /// Whether a non-looping animation has finished.
    pub finished: bool,
    /// Whether the sprite should be mirrored horizontally.
    pub facing_left: bool,
    /// Unposed sprite size.
    pub base_size: Vec2,
}

impl AnimationController {
    pub fn new(base_size: Vec2) -> Self {
        Self {
            state: AnimationState::Idle,
            previous_state: AnimationState::Idle,
            current_frame: 0,
            frame_timer: 0.0,
            finished: false,
            facing_left: false,
            base_size,
        }
    }

    /// Set the animation state, resetting playback if it changed.
    pub fn set_state(&mut self, state: AnimationState) {
        if self.state != state {
            self.previous_state = self.state;
            self.state = state;
            self.current_frame = 0;
            self.frame_timer = 0.0;
            self.finished = false;
        }
    }

    /// Advance playback. Returns true on the tick a non-looping state ends.
    pub fn advance(&mut self, dt: f32) -> bool {
        if self.finished {
            return false;
        }

        self.frame_timer += dt;
        let frame_duration = self.state.frame_duration();
        let total_frames = self.state.frame_count();

        while self.frame_timer >= frame_duration {
            self.frame_timer -= frame_duration;
            self.current_frame += 1;

            if self.current_frame >= total_frames {
                if self.state.is_looping() {
                    self.current_frame = 0;
                } else {
                    self.current_frame = total_frames - 1;
                    self.finished = true;
                    return true;
                }
            }
        }
        false
    }

    pub fn select_state(&self, signals: &LocomotionSignals) -> AnimationState {
        if !signals.grounded || signals.vertical_speed > 0.0 {
            return if signals.vertical_speed > 0.0 {
                AnimationState::Jump
            } else {
                AnimationState::Fall
            };
        }

        match self.state {
            AnimationState::Jump | AnimationState::Fall => AnimationState::Land,
            AnimationState::Land if !self.finished => AnimationState::Land,
            _ if signals.horizontal_speed.abs() > RUN_THRESHOLD => AnimationState::Run,
            _ => AnimationState::Idle,
        }
    }

    pub fn posed_size(&self) -> Vec2 {
        self.base_size * self.state.pose_scale()
    }
}

impl LocomotionAnimator for AnimationController {
    fn apply_signals(&mut self, signals: &LocomotionSignals) {
        let next = self.select_state(signals);
        self.set_state(next);
        self.facing_left = signals.facing_left;
    }
}

/// Message fired when a non-looping animation completes.
#[derive(Debug)]
pub struct AnimationFinished {
    pub entity: Entity,
    pub state: AnimationState,
}

impl Message for AnimationFinished {}

/// Feed locomotion signals to every animator of type `A`.
pub fn drive_animators<A>(
    mut query: Query<(&Locomotion, &mut A), Without<LocomotionDisabled>>,
) where
    A: LocomotionAnimator + Component<Mutability = Mutable>,
{
    for (locomotion, mut animator) in &mut query {
        animator.apply_signals(&locomotion.signals());
    }
}

/// System that updates animation frames based on time.
pub fn update_animation_frames(
    time: Res<Time>,
    mut query: Query<(Entity, &mut AnimationController)>,
    mut finished_events: MessageWriter<AnimationFinished>,
) {
    for (entity, mut controller) in &mut query {
        if controller.advance(time.delta_secs()) {
            debug!("{:?} finished {:?}", entity, controller.state);
            finished_events.write(AnimationFinished {
                entity,
                state: controller.state,
            });
        }
    }
}

/// Re-select the state of characters whose clip just ended, so a finished
/// landing hands over to idle or run on the same frame.
pub fn settle_finished_animations(
    mut finished: MessageReader<AnimationFinished>,
    mut query: Query<(&Locomotion, &mut AnimationController), Without<LocomotionDisabled>>,
) {
    for event in finished.read() {
        let Ok((locomotion, mut controller)) = query.get_mut(event.entity) else {
            continue;
        };
        if controller.state == event.state {
            controller.apply_signals(&locomotion.signals());
        }
    }
}

/// Apply pose, depth scale and facing to the sprite.
pub fn apply_animation_pose(
    mut query: Query<(&AnimationController, Option<&DepthScaled>, &mut Sprite)>,
) {
    for (controller, depth_scaled, mut sprite) in &mut query {
        let depth_factor = depth_scaled.map_or(1.0, |d| d.factor);
        sprite.custom_size = Some(controller.posed_size() * depth_factor);
        sprite.flip_x = controller.facing_left;
    }
}
