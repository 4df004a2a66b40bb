//! Sanity checks for tuning values that parse fine but make no sense.

use super::data::{AttackMotion, PlayerTuning, SensorLayout, TuningFile, WolfTuning};

/// A suspicious tuning value with the path of the field that holds it.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    pub field: String,
    pub problem: &'static str,
    pub value: f32,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} (got {})", self.field, self.problem, self.value)
    }
}

macro_rules! check {
    ($errors:expr, $cond:expr, $field:expr, $problem:expr, $value:expr $(,)?) => {
        if !$cond {
            $errors.push(ValidationError {
                field: $field.to_string(),
                problem: $problem,
                value: $value,
            });
        }
    };
}

/// Validate the whole tuning file. Empty result means nothing looked off.
pub fn validate_tuning(file: &TuningFile) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    validate_player(&file.player, &mut errors);
    validate_wolf(&file.wolf, &mut errors);
    errors
}

fn validate_player(tuning: &PlayerTuning, errors: &mut Vec<ValidationError>) {
    check!(
        errors,
        tuning.max_health > 0.0,
        "player.max_health",
        "must be positive",
        tuning.max_health,
    );
    check!(
        errors,
        tuning.jump_height > 0.0,
        "player.jump_height",
        "must be positive",
        tuning.jump_height,
    );
    check!(
        errors,
        tuning.wall_jump_height > 0.0,
        "player.wall_jump_height",
        "must be positive",
        tuning.wall_jump_height
    );
    check!(
        errors,
        tuning.jump_cut_rate > 0.0 && tuning.jump_cut_rate <= 1.0,
        "player.jump_cut_rate",
        "must be in (0, 1]",
        tuning.jump_cut_rate
    );
    check!(
        errors,
        tuning.wall_slide_velocity < 0.0,
        "player.wall_slide_velocity",
        "must be negative",
        tuning.wall_slide_velocity
    );
    check!(
        errors,
        tuning.fall_speed_limit > 0.0,
        "player.fall_speed_limit",
        "must be positive",
        tuning.fall_speed_limit
    );
    check!(
        errors,
        tuning.gravity_scale > 0.0,
        "player.gravity_scale",
        "must be positive",
        tuning.gravity_scale,
    );
    check!(
        errors,
        tuning.dash_time > 0.0,
        "player.dash_time",
        "must be positive",
        tuning.dash_time,
    );

    for (name, value) in [
        ("player.coyote_time", tuning.coyote_time),
        ("player.wall_coyote_time", tuning.wall_coyote_time),
        ("player.jump_buffer", tuning.jump_buffer),
        ("player.dash_buffer", tuning.dash_buffer),
        ("player.dash_cooldown", tuning.dash_cooldown),
        ("player.charge_time", tuning.charge_time),
        ("player.invincible_time", tuning.invincible_time),
    ] {
        check!(errors, value >= 0.0, name, "must not be negative", value);
    }

    for (name, motion) in [
        ("player.attacks.regular", &tuning.attacks.regular),
        ("player.attacks.up", &tuning.attacks.up),
        ("player.attacks.down", &tuning.attacks.down),
        ("player.attacks.charge", &tuning.attacks.charge),
    ] {
        validate_attack(name, motion, errors);
    }

    validate_sensors("player.sensors", &tuning.sensors, errors);
}

fn validate_attack(name: &str, motion: &AttackMotion, errors: &mut Vec<ValidationError>) {
    check!(
        errors,
        motion.total_time > 0.0,
        format!("{name}.total_time"),
        "must be positive",
        motion.total_time
    );
    check!(
        errors,
        motion.combo_time >= 0.0 && motion.combo_time <= motion.total_time,
        format!("{name}.combo_time"),
        "must fit inside total_time",
        motion.combo_time
    );
    check!(
        errors,
        motion.forward_time <= motion.total_time,
        format!("{name}.forward_time"),
        "must fit inside total_time",
        motion.forward_time
    );
    check!(
        errors,
        motion.hitbox_size[0] > 0.0 && motion.hitbox_size[1] > 0.0,
        format!("{name}.hitbox_size"),
        "must have positive extents",
        motion.hitbox_size[0].min(motion.hitbox_size[1])
    );
}

fn validate_sensors(name: &str, layout: &SensorLayout, errors: &mut Vec<ValidationError>) {
    let smallest_box = layout.ground_size[0]
        .min(layout.ground_size[1])
        .min(layout.wall_size[0])
        .min(layout.wall_size[1]);
    check!(
        errors,
        smallest_box > 0.0,
        format!("{name}.ground_size/wall_size"),
        "must have positive extents",
        smallest_box
    );
    check!(
        errors,
        layout.edge_radius > 0.0,
        format!("{name}.edge_radius"),
        "must be positive",
        layout.edge_radius
    );
}

fn validate_wolf(tuning: &WolfTuning, errors: &mut Vec<ValidationError>) {
    check!(
        errors,
        tuning.max_health > 0.0,
        "wolf.max_health",
        "must be positive",
        tuning.max_health,
    );
    check!(
        errors,
        tuning.melee_range <= tuning.pursue_range,
        "wolf.melee_range",
        "must not exceed pursue_range",
        tuning.melee_range
    );
    check!(
        errors,
        tuning.windup_jitter >= 0.0 && tuning.windup_jitter < tuning.windup_time,
        "wolf.windup_jitter",
        "must be smaller than windup_time",
        tuning.windup_jitter
    );
    check!(
        errors,
        tuning.windup_time + tuning.windup_jitter + tuning.strike_delay + tuning.strike_time
            <= tuning.melee_time,
        "wolf.melee_time",
        "must outlast windup and strike",
        tuning.melee_time
    );
    check!(
        errors,
        tuning.pause_jitter >= 0.0,
        "wolf.pause_jitter",
        "must not be negative",
        tuning.pause_jitter,
    );
    check!(
        errors,
        tuning.hop_height > 0.0,
        "wolf.hop_height",
        "must be positive",
        tuning.hop_height,
    );
    validate_sensors("wolf.sensors", &tuning.sensors, errors);
}
