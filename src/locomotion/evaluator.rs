//! Locomotion domain: transition evaluator steps, run in order each logic tick.

use bevy::prelude::*;

use crate::locomotion::engine::LocomotionEngine;
use crate::locomotion::ports::PhysicsBody;
use crate::locomotion::resources::TurnLockDecay;

/// Vertical speed at or below which a grounded body counts as landed.
pub(crate) const LANDING_VELOCITY_TOLERANCE: f32 = 0.01;

impl LocomotionEngine {
    /// Returns whether facing flipped this tick.
    pub(crate) fn update_facing(&mut self, body: &impl PhysicsBody) -> bool {
        let state = &mut self.state;
        let dir = state.input_direction();

        let flip = dir != 0
            && !state.input_matches_facing()
            && state.gates.can_flip
            && !state.is_wall_sliding;
        if flip {
            state.facing = state.facing.opposite();
        }

        state.is_walking = body.velocity().x != 0.0;
        flip
    }

    pub(crate) fn check_jump_eligibility(&mut self, body: &impl PhysicsBody) {
        let wall_mechanics = self.tuning.features.wall_jump;
        let state = &mut self.state;

        if state.contacts.grounded && body.velocity().y <= LANDING_VELOCITY_TOLERANCE {
            state.jumps_remaining = self.tuning.max_jumps;
        }

        // Touching a wall cancels any pending jump cut.
        state.gates.can_wall_jump = wall_mechanics && state.contacts.touching_wall;
        if state.gates.can_wall_jump {
            state.check_jump_multiplier = false;
        }

        state.gates.can_normal_jump = state.jumps_remaining > 0;
    }

    /// Wall contact was probed along the old facing, so a flip tick never slides.
    pub(crate) fn check_wall_slide(&mut self, flipped: bool, body: &impl PhysicsBody) {
        let state = &mut self.state;
        state.is_wall_sliding = !flipped
            && self.tuning.features.wall_jump
            && state.contacts.touching_wall
            && state.input_matches_facing()
            && body.velocity().y < 0.0
            && !state.ledge.is_anchored();
    }

    pub(crate) fn check_variable_jump(&mut self, jump_held: bool, body: &mut impl PhysicsBody) {
        if !self.state.check_jump_multiplier || jump_held {
            return;
        }

        self.state.check_jump_multiplier = false;
        let mut velocity = body.velocity();
        if velocity.y > 0.0 {
            velocity.y *= self.tuning.variable_jump_height_multiplier;
            body.set_velocity(velocity);
        }
    }

    pub(crate) fn arm_turn_lock(&mut self) {
        let state = &mut self.state;
        if state.contacts.touching_wall
            && !state.contacts.grounded
            && state.input_opposes_facing()
            && !state.ledge.is_anchored()
        {
            state.gates.can_move = false;
            state.gates.can_flip = false;
            state.timers.turn_lock.arm(self.tuning.turn_lock_time);
            debug!("Turn lock armed for {}s", self.tuning.turn_lock_time);
        }
    }

    pub(crate) fn tick_turn_lock(&mut self, dt: f32) {
        let state = &mut self.state;
        let may_decay = match self.tuning.features.turn_lock_decay {
            TurnLockDecay::Always => true,
            TurnLockDecay::WhileLocked => !state.gates.can_move,
        };

        // A ledge hold keeps its own freeze.
        if may_decay && state.timers.turn_lock.tick(dt) && !state.ledge.is_anchored() {
            state.gates.can_move = true;
            state.gates.can_flip = true;
        }
    }

    pub(crate) fn check_wall_jump_lockout(&mut self, dt: f32, body: &mut impl PhysicsBody) {
        let state = &mut self.state;
        if !state.timers.wall_jump_lockout.is_armed() {
            return;
        }

        let toward_wall = i8::from(state.last_wall_jump_direction.opposite());
        if state.gates.has_wall_jumped && state.input_direction() == toward_wall {
            let mut velocity = body.velocity();
            velocity.x = 0.0;
            body.set_velocity(velocity);
            state.gates.has_wall_jumped = false;
            state.timers.wall_jump_lockout.cancel();
            debug!("Wall-jump lockout: opposing input cancelled horizontal momentum");
        } else if state.timers.wall_jump_lockout.tick(dt) {
            state.gates.has_wall_jumped = false;
        }
    }
}
