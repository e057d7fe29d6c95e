//! Movement domain: the locomotion state machine.
//!
//! `Locomotion` is plain data with no engine access. The systems in
//! `movement::systems` feed it input, a ground-probe result and the clock,
//! then copy its output onto the physics body. It runs in two phases:
//!
//! - `frame_step` once per rendered frame: grounding, jump buffering and
//!   coyote time, gravity, jump cut, depth movement.
//! - `physics_step` once per fixed tick: horizontal acceleration and the
//!   velocity / depth write for the integrator.

use bevy::prelude::*;

use crate::movement::{LocomotionInput, LocomotionTuning};

/// Vertical speed limit in both directions.
pub const MAX_VERTICAL_SPEED: f32 = 50.0;

/// Vertical velocity applied on landing. Slightly negative so the body keeps
/// pressing into the floor and the next probe still hits.
pub const GROUNDED_REST_VELOCITY: f32 = -0.5;

/// Axis magnitudes at or below this count as no input.
pub const INPUT_EPSILON: f32 = 0.01;

/// Source of "now" for the jump buffer and coyote windows.
pub trait MonotonicClock {
    /// Seconds since an arbitrary origin; never decreases.
    fn now(&self) -> f32;
}

impl<T: Default> MonotonicClock for Time<T> {
    fn now(&self) -> f32 {
        self.elapsed_secs()
    }
}

/// What happened during a frame step, for logging and tests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameOutcome {
    pub landed: bool,
    pub left_ground: bool,
    pub jumped: bool,
}

/// Output of a fixed step: the velocity for the integrator and, while depth
/// input is held, the depth to write straight onto the body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhysicsCommand {
    pub velocity: Vec2,
    pub depth: Option<f32>,
}

/// Read-only snapshot of what a character is doing, for animators and other
/// presentation code.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LocomotionSignals {
    pub grounded: bool,
    pub horizontal_speed: f32,
    pub vertical_speed: f32,
    pub moving_backwards: bool,
    pub facing_left: bool,
}

/// Failures detected when a locomotion entity is first seen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocomotionError {
    MissingCollaborator {
        entity: Entity,
        collaborator: &'static str,
    },
}

impl std::fmt::Display for LocomotionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LocomotionError::MissingCollaborator {
                entity,
                collaborator,
            } => write!(
                f,
                "Locomotion on {:?} has no {}; component disabled",
                entity, collaborator
            ),
        }
    }
}

impl std::error::Error for LocomotionError {}

#[derive(Component, Debug, Clone)]
pub struct Locomotion {
    tuning: LocomotionTuning,
    horizontal_velocity: f32,
    vertical_velocity: f32,
    depth_position: f32,
    is_grounded: bool,
    can_jump: bool,
    last_grounded_at: Option<f32>,
    last_jump_request_at: Option<f32>,
    horizontal_input: f32,
    depth_input: f32,
    facing_left: bool,
}

impl Locomotion {
    pub fn new(tuning: LocomotionTuning, depth: f32) -> Self {
        Self {
            depth_position: tuning.clamp_depth(depth),
            tuning,
            horizontal_velocity: 0.0,
            vertical_velocity: 0.0,
            is_grounded: false,
            can_jump: false,
            last_grounded_at: None,
            last_jump_request_at: None,
            horizontal_input: 0.0,
            depth_input: 0.0,
            facing_left: false,
        }
    }

    pub fn tuning(&self) -> &LocomotionTuning {
        &self.tuning
    }

    /// Variable-timestep phase.
    pub fn frame_step(
        &mut self,
        input: &LocomotionInput,
        grounded_now: bool,
        clock: &impl MonotonicClock,
        dt: f32,
    ) -> FrameOutcome {
        let now = clock.now();
        let mut outcome = FrameOutcome::default();

        self.horizontal_input = input.horizontal.clamp(-1.0, 1.0);
        self.depth_input = input.depth.clamp(-1.0, 1.0);
        if self.horizontal_input > INPUT_EPSILON {
            self.facing_left = false;
        } else if self.horizontal_input < -INPUT_EPSILON {
            self.facing_left = true;
        }

        let was_grounded = self.is_grounded;
        self.is_grounded = grounded_now;
        if grounded_now {
            if !was_grounded {
                if self.vertical_velocity <= 0.0 {
                    self.vertical_velocity = GROUNDED_REST_VELOCITY;
                }
                self.can_jump = true;
                outcome.landed = true;
            }
            self.last_grounded_at = Some(now);
        } else if was_grounded {
            outcome.left_ground = true;
        }

        if input.jump_pressed {
            self.last_jump_request_at = Some(now);
        }

        if self.jump_window_open(now) {
            self.vertical_velocity = self.tuning.jump_force;
            self.last_grounded_at = None;
            self.last_jump_request_at = None;
            self.can_jump = false;
            outcome.jumped = true;
        }

        if !self.is_grounded {
            let multiplier = if self.vertical_velocity < 0.0 {
                self.tuning.fall_gravity_multiplier
            } else {
                1.0
            };
            self.vertical_velocity -= self.tuning.gravity * multiplier * dt;
        }

        // Releasing early cuts the arc
        if input.jump_released && self.vertical_velocity > 0.0 {
            self.vertical_velocity *= 0.5;
        }

        if self.depth_input != 0.0 {
            let depth =
                self.depth_position + self.depth_input * self.tuning.depth_move_speed * dt;
            self.depth_position = self.tuning.clamp_depth(depth);
        }

        self.vertical_velocity = self
            .vertical_velocity
            .clamp(-MAX_VERTICAL_SPEED, MAX_VERTICAL_SPEED);

        outcome
    }

    /// Fixed-timestep phase.
    pub fn physics_step(&mut self, dt: f32) -> PhysicsCommand {
        if self.horizontal_input.abs() > INPUT_EPSILON {
            let target = self.horizontal_input * self.tuning.move_speed;
            self.horizontal_velocity = move_towards(
                self.horizontal_velocity,
                target,
                self.tuning.acceleration * dt,
            );
        } else {
            // No deceleration ramp: releasing the stick stops dead
            self.horizontal_velocity = 0.0;
        }

        PhysicsCommand {
            velocity: Vec2::new(self.horizontal_velocity, self.vertical_velocity),
            depth: (self.depth_input.abs() > INPUT_EPSILON).then_some(self.depth_position),
        }
    }

    /// Teleport bookkeeping: zero both velocities and retarget depth to `p.z`.
    /// The caller moves the body itself.
    pub fn reset_to_position(&mut self, position: Vec3) {
        self.horizontal_velocity = 0.0;
        self.vertical_velocity = 0.0;
        self.depth_position = self.tuning.clamp_depth(position.z);
        self.last_jump_request_at = None;
    }

    fn jump_window_open(&self, now: f32) -> bool {
        let buffered = self
            .last_jump_request_at
            .is_some_and(|t| now - t < self.tuning.jump_buffer_time);
        let in_coyote = self
            .last_grounded_at
            .is_some_and(|t| now - t < self.tuning.coyote_time);
        buffered && in_coyote && self.can_jump
    }

    pub fn is_grounded(&self) -> bool {
        self.is_grounded
    }

    pub fn current_velocity(&self) -> Vec2 {
        Vec2::new(self.horizontal_velocity, self.vertical_velocity)
    }

    /// True while depth input points away from the camera.
    pub fn is_moving_backwards(&self) -> bool {
        self.depth_input > 0.0
    }

    pub fn horizontal_input(&self) -> f32 {
        self.horizontal_input
    }

    pub fn depth_input(&self) -> f32 {
        self.depth_input
    }

    pub fn depth_position(&self) -> f32 {
        self.depth_position
    }

    pub fn can_jump(&self) -> bool {
        self.can_jump
    }

    pub fn signals(&self) -> LocomotionSignals {
        LocomotionSignals {
            grounded: self.is_grounded,
            horizontal_speed: self.horizontal_velocity,
            vertical_speed: self.vertical_velocity,
            moving_backwards: self.is_moving_backwards(),
            facing_left: self.facing_left,
        }
    }
}

/// Step `current` toward `target` by at most `max_delta`.
pub fn move_towards(current: f32, target: f32, max_delta: f32) -> f32 {
    if current < target {
        (current + max_delta).min(target)
    } else {
        (current - max_delta).max(target)
    }
}
