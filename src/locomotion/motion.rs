//! Locomotion domain: motion resolver, run once per physics tick.

use crate::locomotion::engine::LocomotionEngine;
use crate::locomotion::ports::PhysicsBody;

impl LocomotionEngine {
    pub(crate) fn apply_motion(&mut self, body: &mut impl PhysicsBody) {
        let state = &self.state;
        let tuning = &self.tuning;
        let mut velocity = body.velocity();

        if !state.contacts.grounded && !state.is_wall_sliding && state.input_direction() == 0 {
            // Exponential decay keeps part of the carried momentum.
            velocity.x *= tuning.air_drag_multiplier;
        } else if state.gates.can_move {
            velocity.x = tuning.movement_speed * state.movement_input;
        }

        if state.is_wall_sliding && velocity.y < -tuning.wall_slide_speed {
            velocity.y = -tuning.wall_slide_speed;
        }

        body.set_velocity(velocity);
    }
}
