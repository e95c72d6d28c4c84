//! Locomotion domain: per-character state mutated once per tick.

use bevy::prelude::*;

use crate::locomotion::timers::TimerBank;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    #[default]
    Right,
    Left,
}

impl Facing {
    /// +1 for right, -1 for left.
    pub fn sign(self) -> f32 {
        match self {
            Facing::Right => 1.0,
            Facing::Left => -1.0,
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Facing::Right => Facing::Left,
            Facing::Left => Facing::Right,
        }
    }

    pub fn dir(self) -> Dir2 {
        match self {
            Facing::Right => Dir2::X,
            Facing::Left => Dir2::NEG_X,
        }
    }

    /// Mirror a right-facing offset into this facing.
    pub fn mirror(self, offset: Vec2) -> Vec2 {
        Vec2::new(offset.x * self.sign(), offset.y)
    }
}

/// Direction of a horizontal axis value: -1, 0 or +1.
///
/// `f32::signum` maps 0.0 to 1.0, which would read "no input" as "right".
pub fn axis_direction(value: f32) -> i8 {
    if value > 0.0 {
        1
    } else if value < 0.0 {
        -1
    } else {
        0
    }
}

impl From<Facing> for i8 {
    fn from(facing: Facing) -> Self {
        match facing {
            Facing::Right => 1,
            Facing::Left => -1,
        }
    }
}

/// Probe results, rewritten every physics tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Contacts {
    pub grounded: bool,
    pub touching_wall: bool,
    pub touching_ledge: bool,
}

/// Transition gates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gates {
    pub can_move: bool,
    pub can_flip: bool,
    pub can_normal_jump: bool,
    pub can_wall_jump: bool,
    pub has_wall_jumped: bool,
}

impl Default for Gates {
    fn default() -> Self {
        Self {
            can_move: true,
            can_flip: true,
            can_normal_jump: true,
            can_wall_jump: false,
            has_wall_jumped: false,
        }
    }
}

/// Ledge-climb sub-state. Detecting a ledge while already holding one cannot
/// be expressed.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum LedgeClimb {
    #[default]
    Idle,
    /// Latched by the prober; `ledge_base` is the wall-probe anchor and
    /// `facing` the direction the wall was probed in.
    Detected { ledge_base: Vec2, facing: Facing },
    /// Body pinned at `anchor1` until the climb is finished.
    Anchored {
        ledge_base: Vec2,
        anchor1: Vec2,
        anchor2: Vec2,
    },
}

impl LedgeClimb {
    pub fn is_anchored(&self) -> bool {
        matches!(self, LedgeClimb::Anchored { .. })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LocomotionState {
    pub facing: Facing,
    pub movement_input: f32,
    pub jumps_remaining: u32,
    pub contacts: Contacts,
    pub is_walking: bool,
    pub is_wall_sliding: bool,
    pub gates: Gates,
    /// Variable-jump watch: armed by every jump, consumed on release.
    pub check_jump_multiplier: bool,
    /// A buffered jump press is outstanding.
    pub attempting_jump: bool,
    pub timers: TimerBank,
    /// Kick direction of the last wall jump (away from the wall).
    pub last_wall_jump_direction: Facing,
    pub ledge: LedgeClimb,
}

impl LocomotionState {
    pub fn new(max_jumps: u32) -> Self {
        Self {
            facing: Facing::Right,
            movement_input: 0.0,
            jumps_remaining: max_jumps,
            contacts: Contacts::default(),
            is_walking: false,
            is_wall_sliding: false,
            gates: Gates::default(),
            check_jump_multiplier: false,
            attempting_jump: false,
            timers: TimerBank::default(),
            last_wall_jump_direction: Facing::Left,
            ledge: LedgeClimb::Idle,
        }
    }

    pub fn input_direction(&self) -> i8 {
        axis_direction(self.movement_input)
    }

    pub fn input_matches_facing(&self) -> bool {
        self.input_direction() == i8::from(self.facing)
    }

    /// Non-zero input pointing away from the current facing.
    pub fn input_opposes_facing(&self) -> bool {
        let dir = self.input_direction();
        dir != 0 && dir != i8::from(self.facing)
    }
}
