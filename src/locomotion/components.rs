//! Locomotion domain: marker components, physics layers and messages.

use avian2d::prelude::*;
use bevy::ecs::message::Message;
use bevy::prelude::*;

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Ground surfaces (floors, platforms)
    Ground,
    /// Wall surfaces, including climbable ledges
    Wall,
    /// Player character
    Player,
}

#[derive(Component, Debug)]
pub struct Player;

/// Marker for ground colliders
#[derive(Component, Debug)]
pub struct Ground;

/// Marker for wall colliders
#[derive(Component, Debug)]
pub struct Wall;

/// Input sampled this frame, shared by every player-controlled engine.
#[derive(Resource, Debug, Default)]
pub struct LocomotionInput(pub crate::locomotion::InputSample);

/// Request to release `entity` from its ledge hold onto the ledge top.
#[derive(Debug)]
pub struct LedgeClimbFinished {
    pub entity: Entity,
}

impl Message for LedgeClimbFinished {}

/// Ordering of the locomotion systems inside `Update`.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LocomotionSystems {
    Input,
    Logic,
    Release,
}
