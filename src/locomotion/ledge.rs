//! Locomotion domain: ledge climb sequencer.
//!
//! `Idle -> Detected` is latched by the prober. The next logic tick computes
//! both anchors and pins the body to the hold point. Only
//! [`LocomotionEngine::finish_ledge_climb`], driven by the climb animation,
//! releases it.

use bevy::prelude::*;

use crate::locomotion::engine::LocomotionEngine;
use crate::locomotion::ports::PhysicsBody;
use crate::locomotion::resources::LedgeClimbTuning;
use crate::locomotion::state::{Facing, LedgeClimb};

/// Hold (`anchor1`) and release (`anchor2`) points for a ledge whose wall probe
/// fired at `ledge_base`. Right-facing snaps down onto the grid, left-facing
/// snaps up, so both round toward the wall.
pub fn ledge_anchors(
    ledge_base: Vec2,
    facing: Facing,
    wall_check_distance: f32,
    tuning: &LedgeClimbTuning,
) -> (Vec2, Vec2) {
    let cell = tuning.grid_cell;
    let floor = |v: f32| (v / cell).floor() * cell;
    let ceil = |v: f32| (v / cell).ceil() * cell;

    let y = floor(ledge_base.y);
    match facing {
        Facing::Right => {
            let x = floor(ledge_base.x + wall_check_distance);
            (
                Vec2::new(x - tuning.offset1.x, y + tuning.offset1.y),
                Vec2::new(x + tuning.offset2.x, y + tuning.offset2.y),
            )
        }
        Facing::Left => {
            let x = ceil(ledge_base.x - wall_check_distance);
            (
                Vec2::new(x + tuning.offset1.x, y + tuning.offset1.y),
                Vec2::new(x - tuning.offset2.x, y + tuning.offset2.y),
            )
        }
    }
}

impl LocomotionEngine {
    pub(crate) fn update_ledge_climb(&mut self, body: &mut impl PhysicsBody) {
        if let LedgeClimb::Detected { ledge_base, facing } = self.state.ledge {
            // Input may have flipped facing since the wall was probed.
            self.state.facing = facing;
            let (anchor1, anchor2) = ledge_anchors(
                ledge_base,
                facing,
                self.tuning.probes.wall_check_distance,
                &self.tuning.ledge_climb,
            );
            self.state.ledge = LedgeClimb::Anchored {
                ledge_base,
                anchor1,
                anchor2,
            };
            self.state.gates.can_move = false;
            self.state.gates.can_flip = false;
            debug!("Ledge climb anchored: hold={:?}, release={:?}", anchor1, anchor2);
        }

        if let LedgeClimb::Anchored { anchor1, .. } = self.state.ledge {
            body.set_position(anchor1);
            body.set_velocity(Vec2::ZERO);
        }
    }

    /// Release a held ledge onto its top. Returns `false` and leaves the state
    /// untouched when no ledge is held.
    pub fn finish_ledge_climb(&mut self, body: &mut impl PhysicsBody) -> bool {
        let LedgeClimb::Anchored { anchor2, .. } = self.state.ledge else {
            warn!("finish_ledge_climb called without a held ledge; ignoring");
            return false;
        };

        body.set_position(anchor2);
        self.state.gates.can_move = true;
        self.state.gates.can_flip = true;
        self.state.ledge = LedgeClimb::Idle;
        debug!("Ledge climb finished at {:?}", anchor2);
        true
    }
}
