//! Locomotion domain: tuning and input binding resources.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// When the turn-lock countdown is allowed to advance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TurnLockDecay {
    /// Advance whenever the lock is armed.
    #[default]
    Always,
    /// Advance only while movement is frozen.
    WhileLocked,
}

/// Optional mechanics. Turning features off recovers the simpler controllers
/// (plain jump, double jump, wall mechanics without ledges).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocomotionFeatures {
    /// Wall slide and wall jump.
    pub wall_jump: bool,
    pub ledge_climb: bool,
    /// Neutral-input jump off a wall while airborne.
    pub wall_hop: bool,
    /// Spend remaining jumps in mid-air instead of buffering the press.
    pub air_jump: bool,
    pub turn_lock_decay: TurnLockDecay,
}

impl Default for LocomotionFeatures {
    fn default() -> Self {
        Self {
            wall_jump: true,
            ledge_climb: true,
            wall_hop: false,
            air_jump: false,
            turn_lock_decay: TurnLockDecay::Always,
        }
    }
}

/// Probe anchor rig, expressed for a right-facing body relative to its position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProbeRig {
    pub ground_offset: Vec2,
    pub ground_check_radius: f32,
    pub wall_offset: Vec2,
    /// Must sit above `wall_offset`.
    pub ledge_offset: Vec2,
    pub wall_check_distance: f32,
}

impl Default for ProbeRig {
    fn default() -> Self {
        Self {
            ground_offset: Vec2::new(0.0, -0.5),
            ground_check_radius: 0.3,
            wall_offset: Vec2::new(0.0, 0.2),
            ledge_offset: Vec2::new(0.0, 0.6),
            wall_check_distance: 0.65,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LedgeClimbTuning {
    /// Hold point offset (x toward the wall is subtracted).
    pub offset1: Vec2,
    /// Release point offset (x past the ledge edge).
    pub offset2: Vec2,
    /// Size of the tile grid anchors snap to.
    pub grid_cell: f32,
}

impl Default for LedgeClimbTuning {
    fn default() -> Self {
        Self {
            offset1: Vec2::new(0.4, 0.6),
            offset2: Vec2::new(0.5, 1.5),
            grid_cell: 1.0,
        }
    }
}

#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocomotionTuning {
    pub movement_speed: f32,
    pub jump_force: f32,
    pub max_jumps: u32,
    pub jump_buffer_time: f32,
    pub turn_lock_time: f32,
    pub wall_jump_lockout_time: f32,
    /// Fall speed cap while wall sliding.
    pub wall_slide_speed: f32,
    /// Horizontal velocity factor per physics tick with no input in the air
    /// (0 stops immediately, 1 keeps all momentum).
    pub air_drag_multiplier: f32,
    /// Factor applied to rising velocity when jump is released early.
    pub variable_jump_height_multiplier: f32,
    pub wall_jump_force: f32,
    pub wall_jump_direction: Vec2,
    pub wall_hop_force: f32,
    pub wall_hop_direction: Vec2,
    pub probes: ProbeRig,
    pub ledge_climb: LedgeClimbTuning,
    pub features: LocomotionFeatures,
}

impl Default for LocomotionTuning {
    fn default() -> Self {
        Self {
            movement_speed: 9.0,
            jump_force: 20.0,
            max_jumps: 1,
            jump_buffer_time: 0.15,
            turn_lock_time: 0.1,
            wall_jump_lockout_time: 0.5,
            wall_slide_speed: 1.0,
            air_drag_multiplier: 0.95,
            variable_jump_height_multiplier: 0.5,
            wall_jump_force: 30.0,
            wall_jump_direction: Vec2::new(1.0, 2.0),
            wall_hop_force: 10.0,
            wall_hop_direction: Vec2::new(1.0, 0.5),
            probes: ProbeRig::default(),
            ledge_climb: LedgeClimbTuning::default(),
            features: LocomotionFeatures::default(),
        }
    }
}

impl LocomotionTuning {
    /// Clamp every field into its usable range. Direction vectors become unit
    /// length; a zero vector falls back to the default direction.
    pub fn normalized(mut self) -> Self {
        let defaults = Self::default();

        self.max_jumps = self.max_jumps.max(1);
        self.movement_speed = self.movement_speed.max(0.0);
        self.jump_buffer_time = self.jump_buffer_time.max(0.0);
        self.turn_lock_time = self.turn_lock_time.max(0.0);
        self.wall_jump_lockout_time = self.wall_jump_lockout_time.max(0.0);
        self.wall_slide_speed = self.wall_slide_speed.abs();
        self.air_drag_multiplier = self.air_drag_multiplier.clamp(0.0, 1.0);
        self.variable_jump_height_multiplier =
            self.variable_jump_height_multiplier.clamp(0.0, 1.0);

        self.wall_jump_direction = self
            .wall_jump_direction
            .try_normalize()
            .unwrap_or_else(|| defaults.wall_jump_direction.normalize());
        self.wall_hop_direction = self
            .wall_hop_direction
            .try_normalize()
            .unwrap_or_else(|| defaults.wall_hop_direction.normalize());

        self.probes.ground_check_radius = self.probes.ground_check_radius.abs();
        self.probes.wall_check_distance = self.probes.wall_check_distance.abs();
        if self.ledge_climb.grid_cell <= 0.0 || !self.ledge_climb.grid_cell.is_finite() {
            self.ledge_climb.grid_cell = defaults.ledge_climb.grid_cell;
        }

        self
    }
}

/// Keyboard bindings for the keyboard [`InputSource`](crate::locomotion::InputSource).
#[derive(Resource, Debug, Clone)]
pub struct InputBindings {
    pub left: Vec<KeyCode>,
    pub right: Vec<KeyCode>,
    pub jump: Vec<KeyCode>,
}

impl Default for InputBindings {
    fn default() -> Self {
        Self {
            left: vec![KeyCode::KeyA, KeyCode::ArrowLeft],
            right: vec![KeyCode::KeyD, KeyCode::ArrowRight],
            jump: vec![KeyCode::Space, KeyCode::KeyK],
        }
    }
}
