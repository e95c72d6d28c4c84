//! Locomotion domain: interfaces to physics, environment, input and animation.
//!
//! The engine only talks to the outside world through these traits. The bevy
//! and avian2d implementations live in `systems/`.

use avian2d::prelude::LayerMask;
use bevy::prelude::*;

/// A rigid body the engine can steer.
pub trait PhysicsBody {
    fn velocity(&self) -> Vec2;
    fn set_velocity(&mut self, velocity: Vec2);
    /// Instantaneous change of momentum.
    fn apply_impulse(&mut self, impulse: Vec2);
    fn position(&self) -> Vec2;
    /// Teleport, overriding integration for this step.
    fn set_position(&mut self, position: Vec2);
}

/// Collision queries against static geometry.
pub trait EnvironmentQuery {
    fn overlap_circle(&self, point: Vec2, radius: f32, mask: LayerMask) -> bool;
    fn raycast(&self, origin: Vec2, direction: Dir2, distance: f32, mask: LayerMask) -> bool;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAxis {
    Horizontal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputButton {
    Jump,
    /// Either horizontal direction key.
    Horizontal,
}

/// Raw device state for one logic tick.
pub trait InputSource {
    fn axis(&self, axis: InputAxis) -> f32;
    fn pressed_this_tick(&self, button: InputButton) -> bool;
    fn held(&self, button: InputButton) -> bool;
}

/// Input latched once per logic tick.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InputSample {
    pub movement: f32,
    pub jump_pressed: bool,
    pub jump_held: bool,
    pub move_pressed: bool,
}

impl InputSample {
    pub fn sample(source: &impl InputSource) -> Self {
        Self {
            movement: source.axis(InputAxis::Horizontal).clamp(-1.0, 1.0),
            jump_pressed: source.pressed_this_tick(InputButton::Jump),
            jump_held: source.held(InputButton::Jump),
            move_pressed: source.pressed_this_tick(InputButton::Horizontal),
        }
    }
}

/// Parameters pushed to the animation layer after every logic tick.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq)]
pub struct AnimationParams {
    pub is_walking: bool,
    pub is_grounded: bool,
    pub vertical_velocity: f32,
    pub is_wall_sliding: bool,
    pub can_climb_ledge: bool,
}

/// Fire-and-forget receiver of [`AnimationParams`].
pub trait AnimationSink {
    fn publish(&mut self, params: &AnimationParams);
}

impl AnimationSink for AnimationParams {
    fn publish(&mut self, params: &AnimationParams) {
        *self = *params;
    }
}

/// Discards every update.
impl AnimationSink for () {
    fn publish(&mut self, _params: &AnimationParams) {}
}
