//! Locomotion domain: the per-character engine and its two tick pipelines.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::locomotion::ports::{
    AnimationParams, AnimationSink, EnvironmentQuery, InputSample, PhysicsBody,
};
use crate::locomotion::resources::LocomotionTuning;
use crate::locomotion::state::{LedgeClimb, LocomotionState};
use crate::locomotion::GameLayer;

/// Owns one character's tuning and state. Each character gets its own engine.
///
/// The logic tick runs once per rendered frame, the physics tick once per
/// fixed step. Probe results written by the physics tick are read by the next
/// logic tick.
#[derive(Component, Debug, Clone)]
pub struct LocomotionEngine {
    pub(crate) tuning: LocomotionTuning,
    pub(crate) state: LocomotionState,
    pub(crate) collision_mask: LayerMask,
}

impl LocomotionEngine {
    pub fn new(tuning: LocomotionTuning) -> Self {
        let tuning = tuning.normalized();
        let state = LocomotionState::new(tuning.max_jumps);
        Self {
            tuning,
            state,
            collision_mask: LayerMask::from([GameLayer::Ground, GameLayer::Wall]),
        }
    }

    pub fn tuning(&self) -> &LocomotionTuning {
        &self.tuning
    }

    pub fn state(&self) -> &LocomotionState {
        &self.state
    }

    /// Input → transition evaluator → timers → ledge hold → animation.
    ///
    /// A reversal press against a wall arms the turn lock before facing is
    /// evaluated, so the press cannot flip the character off the wall.
    pub fn logic_tick(
        &mut self,
        input: InputSample,
        dt: f32,
        body: &mut impl PhysicsBody,
        animation: &mut impl AnimationSink,
    ) {
        self.state.movement_input = input.movement.clamp(-1.0, 1.0);

        if input.move_pressed {
            self.arm_turn_lock();
        }
        let flipped = self.update_facing(body);
        self.check_jump_eligibility(body);
        self.check_wall_slide(flipped, body);
        self.check_variable_jump(input.jump_held, body);
        if input.jump_pressed {
            self.handle_jump_press(body);
        }
        self.tick_turn_lock(dt);
        self.resolve_buffered_jump(dt, body);
        self.check_wall_jump_lockout(dt, body);
        self.update_ledge_climb(body);

        animation.publish(&self.animation_params(body));
    }

    /// Motion resolver, then environment probes.
    pub fn physics_tick(&mut self, body: &mut impl PhysicsBody, env: &impl EnvironmentQuery) {
        self.apply_motion(body);
        self.probe_environment(body.position(), env);
    }

    /// Probe anchor positions for a body at `position`, mirrored by facing.
    /// Returns (ground, wall, ledge).
    pub fn probe_anchors(&self, position: Vec2) -> (Vec2, Vec2, Vec2) {
        let rig = &self.tuning.probes;
        let facing = self.state.facing;
        (
            position + facing.mirror(rig.ground_offset),
            position + facing.mirror(rig.wall_offset),
            position + facing.mirror(rig.ledge_offset),
        )
    }

    pub(crate) fn probe_environment(&mut self, position: Vec2, env: &impl EnvironmentQuery) {
        let rig = self.tuning.probes;
        let mask = self.collision_mask;
        let direction = self.state.facing.dir();
        let (ground, wall, ledge) = self.probe_anchors(position);

        let was_grounded = self.state.contacts.grounded;
        let contacts = &mut self.state.contacts;
        contacts.grounded = env.overlap_circle(ground, rig.ground_check_radius, mask);
        contacts.touching_wall = env.raycast(wall, direction, rig.wall_check_distance, mask);
        contacts.touching_ledge = env.raycast(ledge, direction, rig.wall_check_distance, mask);

        if contacts.grounded != was_grounded {
            debug!(
                "Ground contact changed: grounded={}, jumps_remaining={}",
                contacts.grounded, self.state.jumps_remaining
            );
        }

        if self.tuning.features.ledge_climb
            && contacts.touching_wall
            && !contacts.touching_ledge
            && self.state.ledge == LedgeClimb::Idle
        {
            self.state.ledge = LedgeClimb::Detected {
                ledge_base: wall,
                facing: self.state.facing,
            };
            debug!("Ledge detected at {:?}", wall);
        }
    }

    pub fn animation_params(&self, body: &impl PhysicsBody) -> AnimationParams {
        AnimationParams {
            is_walking: self.state.is_walking,
            is_grounded: self.state.contacts.grounded,
            vertical_velocity: body.velocity().y,
            is_wall_sliding: self.state.is_wall_sliding,
            can_climb_ledge: self.state.ledge.is_anchored(),
        }
    }
}
