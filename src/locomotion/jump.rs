//! Locomotion domain: jump, wall jump, wall hop and the jump buffer.

use bevy::prelude::*;

use crate::locomotion::engine::LocomotionEngine;
use crate::locomotion::ports::PhysicsBody;
use crate::locomotion::state::axis_direction;

impl LocomotionEngine {
    pub(crate) fn handle_jump_press(&mut self, body: &mut impl PhysicsBody) {
        let features = self.tuning.features;
        let state = &self.state;
        let contacts = state.contacts;

        if state.ledge.is_anchored() {
            debug!("Jump press ignored during ledge hold");
            return;
        }

        if self.wants_wall_hop() {
            self.wall_hop(body);
        } else if contacts.grounded || (state.jumps_remaining > 0 && contacts.touching_wall) {
            self.normal_jump(body);
        } else if features.air_jump && state.jumps_remaining > 0 {
            self.normal_jump(body);
        } else {
            self.state.timers.jump_buffer.arm(self.tuning.jump_buffer_time);
            self.state.attempting_jump = true;
        }
    }

    /// Fire a buffered jump if the situation now allows one, then age the buffer.
    pub(crate) fn resolve_buffered_jump(&mut self, dt: f32, body: &mut impl PhysicsBody) {
        if self.state.timers.jump_buffer.is_running() && !self.state.ledge.is_anchored() {
            let state = &self.state;
            let contacts = state.contacts;

            if !contacts.grounded && contacts.touching_wall && state.input_opposes_facing() {
                self.wall_jump(body);
            } else if self.wants_wall_hop() {
                self.wall_hop(body);
            } else if contacts.grounded {
                self.normal_jump(body);
            }
        }

        if self.state.attempting_jump && self.state.timers.jump_buffer.tick(dt) {
            self.state.attempting_jump = false;
        }
    }

    /// Airborne against a wall with the stick released.
    fn wants_wall_hop(&self) -> bool {
        let state = &self.state;
        self.tuning.features.wall_hop
            && !state.contacts.grounded
            && state.contacts.touching_wall
            && state.input_direction() == 0
    }

    pub(crate) fn normal_jump(&mut self, body: &mut impl PhysicsBody) -> bool {
        let state = &mut self.state;
        if !state.gates.can_normal_jump || state.jumps_remaining == 0 {
            return false;
        }

        let mut velocity = body.velocity();
        velocity.y = self.tuning.jump_force;
        body.set_velocity(velocity);

        state.jumps_remaining -= 1;
        state.timers.jump_buffer.cancel();
        state.attempting_jump = false;
        state.check_jump_multiplier = true;
        debug!("Jump: jumps_remaining={}", state.jumps_remaining);
        true
    }

    pub(crate) fn wall_jump(&mut self, body: &mut impl PhysicsBody) -> bool {
        if !self.state.gates.can_wall_jump {
            return false;
        }

        let force = self.tuning.wall_jump_force;
        let direction = self.tuning.wall_jump_direction;
        let input_sign = f32::from(axis_direction(self.state.movement_input));
        self.push_off_wall(
            body,
            Vec2::new(force * direction.x * input_sign, force * direction.y),
        );

        let state = &mut self.state;
        state.timers.turn_lock.cancel();
        state.gates.can_move = true;
        state.gates.can_flip = true;
        state.gates.has_wall_jumped = true;
        state.timers
            .wall_jump_lockout
            .arm(self.tuning.wall_jump_lockout_time);
        state.last_wall_jump_direction = state.facing.opposite();
        debug!(
            "Wall jump: kick={:?}, jumps_remaining={}",
            state.last_wall_jump_direction, state.jumps_remaining
        );
        true
    }

    /// Pop off a wall slide with no directional input, away from the wall.
    pub(crate) fn wall_hop(&mut self, body: &mut impl PhysicsBody) -> bool {
        if !self.state.gates.can_wall_jump {
            return false;
        }

        let force = self.tuning.wall_hop_force;
        let direction = self.tuning.wall_hop_direction;
        let away = -self.state.facing.sign();
        self.push_off_wall(
            body,
            Vec2::new(force * direction.x * away, force * direction.y),
        );
        debug!("Wall hop: jumps_remaining={}", self.state.jumps_remaining);
        true
    }

    /// Shared part of wall jump and wall hop. Always leaves one jump spent.
    fn push_off_wall(&mut self, body: &mut impl PhysicsBody, impulse: Vec2) {
        let mut velocity = body.velocity();
        velocity.y = 0.0;
        body.set_velocity(velocity);
        body.apply_impulse(impulse);

        let state = &mut self.state;
        state.is_wall_sliding = false;
        state.jumps_remaining = self.tuning.max_jumps.saturating_sub(1);
        state.timers.jump_buffer.cancel();
        state.attempting_jump = false;
        state.check_jump_multiplier = true;
    }
}
