//! Locomotion domain: engine, interfaces and plugin wiring.

mod bootstrap;
mod components;
mod engine;
mod evaluator;
mod jump;
mod ledge;
mod motion;
mod ports;
mod resources;
mod state;
mod systems;
mod timers;


pub use bootstrap::PLAYER_SIZE;
pub use components::{
    GameLayer, Ground, LedgeClimbFinished, LocomotionInput, LocomotionSystems, Player, Wall,
};
pub use engine::LocomotionEngine;
pub use ledge::ledge_anchors;
pub use ports::{
    AnimationParams, AnimationSink, EnvironmentQuery, InputAxis, InputButton, InputSample,
    InputSource, PhysicsBody,
};
pub use resources::{
    InputBindings, LedgeClimbTuning, LocomotionFeatures, LocomotionTuning, ProbeRig,
    TurnLockDecay,
};
pub use state::{Contacts, Facing, Gates, LedgeClimb, LocomotionState, axis_direction};
pub use timers::{Countdown, TimerBank};

use bevy::prelude::*;

use crate::locomotion::bootstrap::{spawn_player, spawn_test_room};
use crate::locomotion::systems::{
    finish_ledge_climbs, read_input, run_logic_tick, run_physics_tick, sync_facing,
};

pub struct LocomotionPlugin;

impl Plugin for LocomotionPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<LocomotionTuning>()
            .init_resource::<InputBindings>()
            .init_resource::<LocomotionInput>()
            .add_message::<LedgeClimbFinished>()
            .configure_sets(
                Update,
                (
                    LocomotionSystems::Input,
                    LocomotionSystems::Logic,
                    LocomotionSystems::Release,
                )
                    .chain(),
            )
            .add_systems(Startup, (spawn_test_room, spawn_player))
            .add_systems(Update, read_input.in_set(LocomotionSystems::Input))
            .add_systems(
                Update,
                (run_logic_tick, sync_facing)
                    .chain()
                    .in_set(LocomotionSystems::Logic),
            )
            .add_systems(
                Update,
                finish_ledge_climbs.in_set(LocomotionSystems::Release),
            )
            .add_systems(FixedUpdate, run_physics_tick);
    }
}
