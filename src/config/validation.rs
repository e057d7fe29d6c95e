//! Range checks for a loaded gameplay config.

use super::data::GameplayConfig;
use crate::movement::MAX_VERTICAL_SPEED;

/// A validation error with context about what failed.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    pub section: &'static str,
    pub field: &'static str,
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}: {}", self.section, self.field, self.message)
    }
}

/// Helper macro for checking a numeric field against a predicate
macro_rules! check {
    ($errors:expr, $section:expr, $value:expr, $field:ident, $ok:expr, $message:expr) => {
        let value = $value.$field;
        if !$ok(value) {
            $errors.push(ValidationError {
                section: $section,
                field: stringify!($field),
                message: format!("{} (got {})", $message, value),
            });
        }
    };
}

fn positive(v: f32) -> bool {
    v > 0.0
}

fn non_negative(v: f32) -> bool {
    v >= 0.0
}

fn unit_interval(v: f32) -> bool {
    (0.0..=1.0).contains(&v)
}

/// Validate every section. Returns all problems, empty if the config is usable.
pub fn validate_config(config: &GameplayConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    let loco = &config.locomotion;
    check!(errors, "locomotion", loco, move_speed, positive, "must be positive");
    check!(errors, "locomotion", loco, acceleration, positive, "must be positive");
    check!(errors, "locomotion", loco, jump_force, positive, "must be positive");
    check!(
        errors,
        "locomotion",
        loco,
        jump_force,
        |v: f32| v <= MAX_VERTICAL_SPEED,
        format!("exceeds the vertical speed limit {}", MAX_VERTICAL_SPEED)
    );
    check!(errors, "locomotion", loco, jump_buffer_time, non_negative, "must not be negative");
    check!(errors, "locomotion", loco, coyote_time, non_negative, "must not be negative");
    check!(errors, "locomotion", loco, gravity, positive, "must be positive");
    check!(
        errors,
        "locomotion",
        loco,
        fall_gravity_multiplier,
        positive,
        "must be positive"
    );
    check!(errors, "locomotion", loco, depth_move_speed, non_negative, "must not be negative");
    check!(
        errors,
        "locomotion",
        loco,
        ground_check_distance,
        non_negative,
        "must not be negative"
    );
    if loco.min_depth > loco.max_depth {
        errors.push(ValidationError {
            section: "locomotion",
            field: "min_depth",
            message: format!(
                "min_depth {} is greater than max_depth {}",
                loco.min_depth, loco.max_depth
            ),
        });
    }

    let spawn_depth = config.world.spawn_point.2;
    if !(loco.min_depth..=loco.max_depth).contains(&spawn_depth) {
        errors.push(ValidationError {
            section: "world",
            field: "spawn_point",
            message: format!(
                "spawn depth {} is outside [{}, {}]",
                spawn_depth, loco.min_depth, loco.max_depth
            ),
        });
    }
    if config.world.kill_plane_y >= config.world.spawn_point.1 {
        errors.push(ValidationError {
            section: "world",
            field: "kill_plane_y",
            message: format!(
                "kill plane {} is not below the spawn point",
                config.world.kill_plane_y
            ),
        });
    }

    let energy = &config.energy;
    check!(errors, "energy", energy, max_energy, positive, "must be positive");
    check!(errors, "energy", energy, drain_per_second, non_negative, "must not be negative");
    check!(errors, "energy", energy, regen_per_second, non_negative, "must not be negative");
    check!(errors, "energy", energy, regen_delay, non_negative, "must not be negative");
    check!(
        errors,
        "energy",
        energy,
        activation_threshold,
        |v: f32| (0.0..=energy.max_energy).contains(&v),
        "must lie within [0, max_energy]"
    );

    let camo = &config.camouflage;
    check!(errors, "camouflage", camo, blend_in_time, non_negative, "must not be negative");
    check!(errors, "camouflage", camo, blend_out_time, non_negative, "must not be negative");
    check!(errors, "camouflage", camo, hidden_alpha, unit_interval, "must lie within [0, 1]");
    check!(
        errors,
        "camouflage",
        camo,
        max_activation_speed,
        non_negative,
        "must not be negative"
    );

    let camera = &config.camera;
    check!(errors, "camera", camera, pixels_per_meter, positive, "must be positive");
    check!(errors, "camera", camera, follow_smoothing, non_negative, "must not be negative");

    let parallax = &config.parallax;
    check!(
        errors,
        "parallax",
        parallax,
        depth_scale_per_unit,
        non_negative,
        "must not be negative"
    );
    check!(errors, "parallax", parallax, min_depth_scale, positive, "must be positive");

    errors
}
