//! Validation for locomotion tuning values.

use crate::locomotion::LocomotionTuning;

/// A tuning field outside its usable range.
#[derive(Debug, Clone, PartialEq)]
pub struct TuningIssue {
    pub field: &'static str,
    pub message: String,
}

impl std::fmt::Display for TuningIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "tuning field '{}' {}", self.field, self.message)
    }
}

/// Helper macro for checking a numeric field against a predicate
macro_rules! check_field {
    ($issues:expr, $value:expr, $field:expr, $ok:expr, $message:expr) => {
        let value = $value;
        if !$ok(value) {
            $issues.push(TuningIssue {
                field: $field,
                message: format!("{} (got {:?})", $message, value),
            });
        }
    };
}

/// Report every field normalization would have to correct.
/// Returns an empty list when the tuning is usable as written.
pub fn validate_tuning(tuning: &LocomotionTuning) -> Vec<TuningIssue> {
    let mut issues = Vec::new();
    let non_negative = |v: f32| v >= 0.0 && v.is_finite();
    let unit_range = |v: f32| (0.0..=1.0).contains(&v);
    let non_zero = |v: bevy::math::Vec2| v.length_squared() > 0.0;

    check_field!(
        issues,
        tuning.max_jumps,
        "max_jumps",
        |v: u32| v >= 1,
        "must allow at least one jump"
    );
    check_field!(
        issues,
        tuning.movement_speed,
        "movement_speed",
        non_negative,
        "must be non-negative"
    );
    check_field!(
        issues,
        tuning.jump_buffer_time,
        "jump_buffer_time",
        non_negative,
        "must be non-negative"
    );
    check_field!(
        issues,
        tuning.turn_lock_time,
        "turn_lock_time",
        non_negative,
        "must be non-negative"
    );
    check_field!(
        issues,
        tuning.wall_jump_lockout_time,
        "wall_jump_lockout_time",
        non_negative,
        "must be non-negative"
    );
    check_field!(
        issues,
        tuning.wall_slide_speed,
        "wall_slide_speed",
        non_negative,
        "is a speed cap and must be non-negative"
    );
    check_field!(
        issues,
        tuning.air_drag_multiplier,
        "air_drag_multiplier",
        unit_range,
        "must be within [0, 1]"
    );
    check_field!(
        issues,
        tuning.variable_jump_height_multiplier,
        "variable_jump_height_multiplier",
        unit_range,
        "must be within [0, 1]"
    );
    check_field!(
        issues,
        tuning.wall_jump_direction,
        "wall_jump_direction",
        non_zero,
        "must not be a zero vector"
    );
    check_field!(
        issues,
        tuning.wall_hop_direction,
        "wall_hop_direction",
        non_zero,
        "must not be a zero vector"
    );
    check_field!(
        issues,
        tuning.probes.ground_check_radius,
        "probes.ground_check_radius",
        non_negative,
        "must be non-negative"
    );
    check_field!(
        issues,
        tuning.probes.wall_check_distance,
        "probes.wall_check_distance",
        non_negative,
        "must be non-negative"
    );
    check_field!(
        issues,
        tuning.ledge_climb.grid_cell,
        "ledge_climb.grid_cell",
        |v: f32| v > 0.0 && v.is_finite(),
        "must be positive"
    );

    if tuning.probes.ledge_offset.y <= tuning.probes.wall_offset.y {
        issues.push(TuningIssue {
            field: "probes.ledge_offset",
            message: "must sit above probes.wall_offset or ledges are never detected".to_string(),
        });
    }

    issues
}
