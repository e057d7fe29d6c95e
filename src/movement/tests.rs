//! Movement domain: tests for the locomotion state machine and ground probe.

use avian2d::prelude::*;
use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use super::bootstrap::validate_locomotion_bodies;
use super::probe::{GroundProbe, ProbeFootprint, probe_grounded};
use super::systems::collisions::collider_half_extents;
use super::systems::{respawn_fallen_characters, step_locomotion_physics};
use super::{
    GROUNDED_REST_VELOCITY, GroundContact, INPUT_EPSILON, Locomotion, LocomotionDisabled,
    LocomotionError, LocomotionInput, LocomotionReset, LocomotionTuning, MAX_VERTICAL_SPEED,
    MonotonicClock, SpawnPoint, WorldConfig, move_towards,
};

struct ManualClock(f32);

impl MonotonicClock for ManualClock {
    fn now(&self) -> f32 {
        self.0
    }
}

fn tuning() -> LocomotionTuning {
    LocomotionTuning {
        move_speed: 5.0,
        acceleration: 20.0,
        jump_force: 12.0,
        jump_buffer_time: 0.2,
        coyote_time: 0.15,
        gravity: 20.0,
        fall_gravity_multiplier: 1.5,
        depth_move_speed: 3.0,
        min_depth: -1.0,
        max_depth: 1.0,
        ground_check_distance: 0.1,
    }
}

fn idle() -> LocomotionInput {
    LocomotionInput::default()
}

fn jump_press() -> LocomotionInput {
    LocomotionInput {
        jump_pressed: true,
        ..default()
    }
}

/// A character that has already landed once at `t`.
fn grounded_at(t: f32) -> Locomotion {
    let mut loco = Locomotion::new(tuning(), 0.0);
    loco.frame_step(&idle(), true, &ManualClock(t), 0.016);
    loco
}

/// An airborne character with the given vertical velocity.
fn airborne_with(vy: f32) -> Locomotion {
    let mut loco = Locomotion::new(tuning(), 0.0);
    let mut t = 0.0;
    loco.frame_step(&idle(), true, &ManualClock(t), 0.0);
    t += 0.01;
    loco.frame_step(&jump_press(), true, &ManualClock(t), 0.0);
    // Jump sets vy to jump_force; airborne ticks with dt = 0 keep it there
    t += 1.0;
    loco.frame_step(&idle(), false, &ManualClock(t), 0.0);
    assert_eq!(loco.current_velocity().y, tuning().jump_force);
    // Drain to the requested velocity with one exact gravity step
    let dt = (tuning().jump_force - vy) / tuning().gravity;
    loco.frame_step(&idle(), false, &ManualClock(t), dt);
    loco
}

// -----------------------------------------------------------------------------
// Grounding and landing
// -----------------------------------------------------------------------------

#[test]
fn test_new_character_starts_airborne_without_jump() {
    let loco = Locomotion::new(tuning(), 0.0);
    assert!(!loco.is_grounded());
    assert!(!loco.can_jump());
    assert_eq!(loco.current_velocity(), Vec2::ZERO);
}

#[test]
fn test_new_character_depth_is_clamped() {
    let loco = Locomotion::new(tuning(), 5.0);
    assert_eq!(loco.depth_position(), 1.0);
}

#[test]
fn test_landing_sets_rest_velocity_and_arms_jump() {
    let mut loco = Locomotion::new(tuning(), 0.0);
    loco.frame_step(&idle(), false, &ManualClock(0.0), 0.1);
    assert!(loco.current_velocity().y < 0.0);

    let outcome = loco.frame_step(&idle(), true, &ManualClock(0.1), 0.1);
    assert!(outcome.landed);
    assert!(loco.is_grounded());
    assert!(loco.can_jump());
    assert_eq!(loco.current_velocity().y, GROUNDED_REST_VELOCITY);
}

#[test]
fn test_landing_keeps_upward_velocity() {
    let mut loco = airborne_with(4.0);
    let outcome = loco.frame_step(&idle(), true, &ManualClock(5.0), 0.0);
    assert!(outcome.landed);
    assert!((loco.current_velocity().y - 4.0).abs() < 1e-4);
}

#[test]
fn test_grounded_ticks_do_not_integrate_gravity() {
    let mut loco = grounded_at(0.0);
    for i in 1..10 {
        loco.frame_step(&idle(), true, &ManualClock(i as f32 * 0.1), 0.1);
    }
    assert_eq!(loco.current_velocity().y, GROUNDED_REST_VELOCITY);
}

#[test]
fn test_leaving_ground_is_reported() {
    let mut loco = grounded_at(0.0);
    let outcome = loco.frame_step(&idle(), false, &ManualClock(0.1), 0.016);
    assert!(outcome.left_ground);
    assert!(!outcome.landed);
}

// -----------------------------------------------------------------------------
// Gravity
// -----------------------------------------------------------------------------

#[test]
fn test_rising_gravity_uses_unit_multiplier() {
    let mut loco = airborne_with(10.0);
    assert!((loco.current_velocity().y - 10.0).abs() < 1e-4);

    loco.frame_step(&idle(), false, &ManualClock(2.0), 0.1);
    // 10 - 20 * 1 * 0.1
    assert!((loco.current_velocity().y - 8.0).abs() < 1e-4);
}

#[test]
fn test_falling_gravity_uses_fall_multiplier() {
    let mut loco = Locomotion::new(tuning(), 0.0);
    loco.frame_step(&idle(), false, &ManualClock(0.0), 0.1);
    assert!((loco.current_velocity().y + 2.0).abs() < 1e-4);

    loco.frame_step(&idle(), false, &ManualClock(0.1), 0.1);
    // -2 - 20 * 1.5 * 0.1
    assert!((loco.current_velocity().y + 5.0).abs() < 1e-4);
}

#[test]
fn test_vertical_velocity_is_clamped() {
    let mut loco = Locomotion::new(tuning(), 0.0);
    for i in 0..200 {
        loco.frame_step(&idle(), false, &ManualClock(i as f32 * 0.1), 0.1);
        let vy = loco.current_velocity().y;
        assert!((-MAX_VERTICAL_SPEED..=MAX_VERTICAL_SPEED).contains(&vy));
    }
    assert_eq!(loco.current_velocity().y, -MAX_VERTICAL_SPEED);
}

#[test]
fn test_jump_force_above_limit_is_clamped() {
    let mut strong = tuning();
    strong.jump_force = 80.0;
    let mut loco = Locomotion::new(strong, 0.0);
    loco.frame_step(&idle(), true, &ManualClock(0.0), 0.0);
    loco.frame_step(&jump_press(), true, &ManualClock(0.01), 0.0);
    assert_eq!(loco.current_velocity().y, MAX_VERTICAL_SPEED);
}

#[test]
fn test_zero_dt_airborne_tick_is_identity() {
    let mut loco = airborne_with(3.0);
    let before = loco.current_velocity().y;
    loco.frame_step(&idle(), false, &ManualClock(9.0), 0.0);
    assert_eq!(loco.current_velocity().y, before);
}

// -----------------------------------------------------------------------------
// Jump buffer and coyote time
// -----------------------------------------------------------------------------

#[test]
fn test_buffered_jump_executes_while_grounded() {
    let mut loco = grounded_at(0.0);
    loco.frame_step(&jump_press(), true, &ManualClock(0.0), 0.0);
    assert_eq!(loco.current_velocity().y, tuning().jump_force);
    assert!(!loco.can_jump());
}

#[test]
fn test_jump_pressed_then_executed_next_grounded_tick() {
    // Pressed at t=0 before the landing tick, still grounded at t=0.1
    let mut loco = Locomotion::new(tuning(), 0.0);
    let outcome = loco.frame_step(&jump_press(), false, &ManualClock(0.0), 0.0);
    assert!(!outcome.jumped);

    let outcome = loco.frame_step(&idle(), true, &ManualClock(0.1), 0.0);
    assert!(outcome.landed);
    assert!(outcome.jumped);
    assert_eq!(loco.current_velocity().y, tuning().jump_force);
}

#[test]
fn test_buffer_expires_before_landing() {
    let mut loco = Locomotion::new(tuning(), 0.0);
    loco.frame_step(&jump_press(), false, &ManualClock(0.0), 0.0);
    let outcome = loco.frame_step(&idle(), true, &ManualClock(0.25), 0.0);
    assert!(outcome.landed);
    assert!(!outcome.jumped);
    assert!(loco.can_jump());
}

#[test]
fn test_coyote_jump_shortly_after_leaving_ground() {
    let mut loco = grounded_at(0.0);
    loco.frame_step(&idle(), false, &ManualClock(0.05), 0.0);
    let outcome = loco.frame_step(&jump_press(), false, &ManualClock(0.1), 0.0);
    assert!(outcome.jumped);
}

#[test]
fn test_no_jump_after_coyote_expires() {
    let mut loco = grounded_at(0.0);
    loco.frame_step(&idle(), false, &ManualClock(0.1), 0.0);
    // Buffer is open (pressed now) but the ground was last seen 0.3s ago
    let outcome = loco.frame_step(&jump_press(), false, &ManualClock(0.3), 0.0);
    assert!(!outcome.jumped);
    assert!(loco.current_velocity().y <= 0.0);
}

#[test]
fn test_single_press_jumps_once_per_landing() {
    let mut loco = grounded_at(0.0);
    let mut jumps = 0;
    let first = loco.frame_step(&jump_press(), true, &ManualClock(0.0), 0.0);
    jumps += first.jumped as u32;
    // Still touching the floor for a few frames after the launch
    for i in 1..5 {
        let outcome = loco.frame_step(&jump_press(), true, &ManualClock(i as f32 * 0.02), 0.0);
        jumps += outcome.jumped as u32;
    }
    assert_eq!(jumps, 1);
}

#[test]
fn test_landing_rearms_jump() {
    let mut loco = grounded_at(0.0);
    assert!(loco.frame_step(&jump_press(), true, &ManualClock(0.0), 0.0).jumped);
    loco.frame_step(&idle(), false, &ManualClock(0.2), 0.1);
    loco.frame_step(&idle(), false, &ManualClock(0.9), 0.1);

    // Press shortly before touching down; the buffer carries it through
    loco.frame_step(&jump_press(), false, &ManualClock(1.0), 0.0);
    let outcome = loco.frame_step(&idle(), true, &ManualClock(1.1), 0.0);
    assert!(outcome.landed);
    assert!(outcome.jumped);
}

#[test]
fn test_release_cuts_rising_velocity() {
    let mut loco = airborne_with(10.0);
    let release = LocomotionInput {
        jump_released: true,
        ..default()
    };
    loco.frame_step(&release, false, &ManualClock(3.0), 0.0);
    assert!((loco.current_velocity().y - 5.0).abs() < 1e-4);
}

#[test]
fn test_release_while_falling_is_ignored() {
    let mut loco = airborne_with(-4.0);
    let release = LocomotionInput {
        jump_released: true,
        ..default()
    };
    loco.frame_step(&release, false, &ManualClock(3.0), 0.0);
    assert!((loco.current_velocity().y + 4.0).abs() < 1e-4);
}

// -----------------------------------------------------------------------------
// Depth axis
// -----------------------------------------------------------------------------

#[test]
fn test_depth_clamps_to_max() {
    let mut tuning = tuning();
    tuning.max_depth = 1.0;
    let mut loco = Locomotion::new(tuning, 0.0);
    let back = LocomotionInput {
        depth: 1.0,
        ..default()
    };
    loco.frame_step(&back, true, &ManualClock(0.0), 0.5);
    assert_eq!(loco.depth_position(), 1.0);
    assert!(loco.is_moving_backwards());
}

#[test]
fn test_depth_never_leaves_range() {
    let mut loco = Locomotion::new(tuning(), 0.0);
    let forward = LocomotionInput {
        depth: -1.0,
        ..default()
    };
    for i in 0..100 {
        loco.frame_step(&forward, true, &ManualClock(i as f32 * 0.1), 0.1);
        assert!((-1.0..=1.0).contains(&loco.depth_position()));
    }
    assert_eq!(loco.depth_position(), -1.0);
    assert!(!loco.is_moving_backwards());
}

#[test]
fn test_depth_holds_without_input() {
    let mut loco = Locomotion::new(tuning(), 0.0);
    let back = LocomotionInput {
        depth: 1.0,
        ..default()
    };
    loco.frame_step(&back, true, &ManualClock(0.0), 0.1);
    let held = loco.depth_position();
    loco.frame_step(&idle(), true, &ManualClock(0.1), 0.1);
    assert_eq!(loco.depth_position(), held);
}

#[test]
fn test_physics_step_writes_depth_only_with_input() {
    let mut loco = Locomotion::new(tuning(), 0.0);
    let back = LocomotionInput {
        depth: 1.0,
        ..default()
    };
    loco.frame_step(&back, true, &ManualClock(0.0), 0.1);
    let command = loco.physics_step(0.02);
    assert_eq!(command.depth, Some(loco.depth_position()));

    loco.frame_step(&idle(), true, &ManualClock(0.1), 0.1);
    assert_eq!(loco.physics_step(0.02).depth, None);
}

// -----------------------------------------------------------------------------
// Horizontal movement
// -----------------------------------------------------------------------------

#[test]
fn test_horizontal_accelerates_without_overshoot() {
    let mut loco = Locomotion::new(tuning(), 0.0);
    let right = LocomotionInput {
        horizontal: 1.0,
        ..default()
    };
    loco.frame_step(&right, true, &ManualClock(0.0), 0.0);

    let first = loco.physics_step(0.1);
    assert!((first.velocity.x - 2.0).abs() < 1e-4);

    for _ in 0..10 {
        let command = loco.physics_step(0.1);
        assert!(command.velocity.x <= tuning().move_speed);
    }
    assert_eq!(loco.current_velocity().x, tuning().move_speed);
}

#[test]
fn test_horizontal_stops_instantly_without_input() {
    let mut loco = Locomotion::new(tuning(), 0.0);
    let left = LocomotionInput {
        horizontal: -1.0,
        ..default()
    };
    loco.frame_step(&left, true, &ManualClock(0.0), 0.0);
    for _ in 0..5 {
        loco.physics_step(0.1);
    }
    assert!(loco.current_velocity().x < 0.0);

    let tiny = LocomotionInput {
        horizontal: INPUT_EPSILON * 0.5,
        ..default()
    };
    loco.frame_step(&tiny, true, &ManualClock(0.1), 0.0);
    assert_eq!(loco.physics_step(0.1).velocity.x, 0.0);
}

#[test]
fn test_physics_step_carries_vertical_velocity() {
    let mut loco = airborne_with(6.0);
    let command = loco.physics_step(0.02);
    assert!((command.velocity.y - 6.0).abs() < 1e-4);
}

#[test]
fn test_move_towards() {
    assert_eq!(move_towards(0.0, 5.0, 2.0), 2.0);
    assert_eq!(move_towards(4.0, 5.0, 2.0), 5.0);
    assert_eq!(move_towards(0.0, -5.0, 2.0), -2.0);
    assert_eq!(move_towards(-4.5, -5.0, 2.0), -5.0);
    assert_eq!(move_towards(3.0, 3.0, 1.0), 3.0);
}

// -----------------------------------------------------------------------------
// Public contract
// -----------------------------------------------------------------------------

#[test]
fn test_reset_to_position_zeroes_state() {
    let mut loco = airborne_with(7.0);
    let right = LocomotionInput {
        horizontal: 1.0,
        depth: 1.0,
        ..default()
    };
    loco.frame_step(&right, false, &ManualClock(4.0), 0.1);
    loco.physics_step(0.1);

    loco.reset_to_position(Vec3::new(3.0, 2.0, -0.5));
    assert_eq!(loco.current_velocity(), Vec2::ZERO);
    assert_eq!(loco.depth_position(), -0.5);
}

#[test]
fn test_inputs_are_exposed() {
    let mut loco = Locomotion::new(tuning(), 0.0);
    let input = LocomotionInput {
        horizontal: -0.5,
        depth: -1.0,
        ..default()
    };
    loco.frame_step(&input, true, &ManualClock(0.0), 0.0);
    assert_eq!(loco.horizontal_input(), -0.5);
    assert_eq!(loco.depth_input(), -1.0);

    let signals = loco.signals();
    assert!(signals.grounded);
    assert!(signals.facing_left);
    assert!(!signals.moving_backwards);
}

// -----------------------------------------------------------------------------
// Ground probe
// -----------------------------------------------------------------------------

/// Flat floor at y = 0 spanning x in [min_x, max_x].
struct Floor {
    min_x: f32,
    max_x: f32,
}

impl GroundProbe for Floor {
    fn ray_hits(&self, origin: Vec3, length: f32) -> bool {
        (self.min_x..=self.max_x).contains(&origin.x) && origin.y >= 0.0 && origin.y - length <= 0.0
    }
}

fn footprint_at(x: f32, y: f32) -> ProbeFootprint {
    ProbeFootprint {
        center: Vec3::new(x, y, 0.0),
        half_height: 0.5,
        radius: 0.4,
    }
}

#[test]
fn test_footprint_has_five_rays() {
    let origins = footprint_at(1.0, 2.0).ray_origins();
    assert_eq!(origins[0], Vec3::new(1.0, 2.0, 0.0));
    assert!(origins.contains(&Vec3::new(1.2, 2.0, 0.0)));
    assert!(origins.contains(&Vec3::new(0.8, 2.0, 0.0)));
    assert!(origins.contains(&Vec3::new(1.0, 2.0, 0.2)));
    assert!(origins.contains(&Vec3::new(1.0, 2.0, -0.2)));
}

#[test]
fn test_probe_hits_within_check_distance() {
    let floor = Floor {
        min_x: -10.0,
        max_x: 10.0,
    };
    assert!(probe_grounded(&floor, &footprint_at(0.0, 0.55), 0.1));
    assert!(!probe_grounded(&floor, &footprint_at(0.0, 0.7), 0.1));
}

#[test]
fn test_probe_edge_ray_keeps_grounded_over_ledge() {
    // Center hangs past the edge; the inner offset ray still hits
    let floor = Floor {
        min_x: -10.0,
        max_x: 0.0,
    };
    assert!(probe_grounded(&floor, &footprint_at(0.15, 0.5), 0.1));
    assert!(!probe_grounded(&floor, &footprint_at(0.25, 0.5), 0.1));
}

// -----------------------------------------------------------------------------
// Validation
// -----------------------------------------------------------------------------

#[test]
fn test_missing_body_disables_locomotion() {
    let mut app = App::new();
    app.add_systems(Update, validate_locomotion_bodies);
    let entity = app
        .world_mut()
        .spawn(Locomotion::new(tuning(), 0.0))
        .id();

    app.update();

    assert!(app.world().get::<LocomotionDisabled>(entity).is_some());
}

#[test]
fn test_missing_collaborator_message_names_it() {
    let err = LocomotionError::MissingCollaborator {
        entity: Entity::PLACEHOLDER,
        collaborator: "RigidBody",
    };
    assert!(err.to_string().contains("RigidBody"));
}

#[test]
fn test_missing_ground_contact_disables_locomotion() {
    let mut app = App::new();
    app.add_systems(Update, validate_locomotion_bodies);
    let entity = app
        .world_mut()
        .spawn((
            Locomotion::new(tuning(), 0.0),
            RigidBody::Dynamic,
            Collider::rectangle(0.5, 1.0),
        ))
        .id();

    app.update();

    assert!(app.world().get::<LocomotionDisabled>(entity).is_some());
}

#[test]
fn test_complete_body_stays_enabled() {
    let mut app = App::new();
    app.add_systems(Update, validate_locomotion_bodies);
    let entity = app
        .world_mut()
        .spawn((
            Locomotion::new(tuning(), 0.0),
            GroundContact::default(),
            RigidBody::Dynamic,
            Collider::rectangle(0.5, 1.0),
        ))
        .id();

    app.update();

    assert!(app.world().get::<LocomotionDisabled>(entity).is_none());
}

// -----------------------------------------------------------------------------
// ECS phases
// -----------------------------------------------------------------------------

#[derive(Resource, Default)]
struct ResetLog(Vec<(Entity, Vec3)>);

fn record_resets(mut resets: MessageReader<LocomotionReset>, mut log: ResMut<ResetLog>) {
    for reset in resets.read() {
        log.0.push((reset.entity, reset.translation));
    }
}

fn falling_locomotion() -> Locomotion {
    let mut locomotion = Locomotion::new(tuning(), 0.0);
    let input = LocomotionInput {
        horizontal: 1.0,
        ..idle()
    };
    locomotion.frame_step(&input, false, &ManualClock(0.0), 0.5);
    locomotion.physics_step(0.5);
    locomotion
}

#[test]
fn test_falling_below_kill_plane_respawns_at_spawn_point() {
    let mut app = App::new();
    app.insert_resource(WorldConfig {
        spawn_point: (0.0, 2.0, 0.0),
        kill_plane_y: -12.0,
    })
    .init_resource::<ResetLog>()
    .add_message::<LocomotionReset>()
    .add_systems(Update, (respawn_fallen_characters, record_resets).chain());

    let spawn = Vec3::new(1.0, 2.0, 0.5);
    let locomotion = falling_locomotion();
    assert_ne!(locomotion.current_velocity(), Vec2::ZERO);

    let entity = app
        .world_mut()
        .spawn((
            SpawnPoint(spawn),
            locomotion,
            Transform::from_xyz(4.0, -20.0, 0.0),
            Position(Vec2::new(4.0, -20.0)),
            LinearVelocity(Vec2::new(3.0, -10.0)),
        ))
        .id();

    app.update();

    let world = app.world();
    let expected = Vec3::new(1.0, 2.0, -0.5);
    assert_eq!(world.get::<Transform>(entity).map(|t| t.translation), Some(expected));
    assert_eq!(world.get::<Position>(entity).map(|p| p.0), Some(Vec2::new(1.0, 2.0)));
    assert_eq!(world.get::<LinearVelocity>(entity).map(|v| v.0), Some(Vec2::ZERO));

    let locomotion = world.get::<Locomotion>(entity).unwrap();
    assert_eq!(locomotion.current_velocity(), Vec2::ZERO);
    assert_eq!(locomotion.depth_position(), 0.5);

    assert_eq!(world.resource::<ResetLog>().0, vec![(entity, expected)]);
}

#[test]
fn test_above_kill_plane_is_left_alone() {
    let mut app = App::new();
    app.init_resource::<WorldConfig>()
        .init_resource::<ResetLog>()
        .add_message::<LocomotionReset>()
        .add_systems(Update, (respawn_fallen_characters, record_resets).chain());

    let entity = app
        .world_mut()
        .spawn((
            SpawnPoint(Vec3::new(0.0, 2.0, 0.0)),
            Locomotion::new(tuning(), 0.0),
            Transform::from_xyz(4.0, -1.0, 0.0),
            Position(Vec2::new(4.0, -1.0)),
            LinearVelocity(Vec2::new(3.0, 0.0)),
        ))
        .id();

    app.update();

    let world = app.world();
    assert_eq!(
        world.get::<Transform>(entity).map(|t| t.translation),
        Some(Vec3::new(4.0, -1.0, 0.0))
    );
    assert!(world.resource::<ResetLog>().0.is_empty());
}

fn physics_app(locomotion: Locomotion, z: f32) -> (App, Entity) {
    let mut app = App::new();
    app.init_resource::<Time>()
        .add_systems(Update, step_locomotion_physics);
    let entity = app
        .world_mut()
        .spawn((
            locomotion,
            LinearVelocity::default(),
            Transform::from_xyz(0.0, 0.0, z),
        ))
        .id();
    (app, entity)
}

#[test]
fn test_physics_phase_commits_depth_while_held() {
    let mut locomotion = Locomotion::new(tuning(), 0.0);
    let input = LocomotionInput {
        depth: 1.0,
        ..idle()
    };
    locomotion.frame_step(&input, false, &ManualClock(0.0), 0.5);
    assert_eq!(locomotion.depth_position(), 1.0);

    let (mut app, entity) = physics_app(locomotion, 0.0);
    app.update();

    let world = app.world();
    assert_eq!(world.get::<Transform>(entity).map(|t| t.translation.z), Some(-1.0));
    let velocity = world.get::<LinearVelocity>(entity).map(|v| v.0);
    let expected = world.get::<Locomotion>(entity).map(|l| l.current_velocity());
    assert_eq!(velocity, expected);
}

#[test]
fn test_physics_phase_leaves_depth_without_input() {
    let mut locomotion = Locomotion::new(tuning(), 0.0);
    locomotion.frame_step(&idle(), false, &ManualClock(0.0), 0.5);

    let (mut app, entity) = physics_app(locomotion, 0.25);
    app.update();

    assert_eq!(
        app.world().get::<Transform>(entity).map(|t| t.translation.z),
        Some(0.25)
    );
}

#[test]
fn test_footprint_extents_from_rectangle_only() {
    assert_eq!(
        collider_half_extents(&Collider::rectangle(0.5, 1.0)),
        Some(Vec2::new(0.25, 0.5))
    );
    assert_eq!(collider_half_extents(&Collider::circle(0.3)), None);
}
