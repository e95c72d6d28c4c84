//! Locomotion domain: system modules bridging the engine to bevy and avian2d.

pub(crate) mod collisions;
pub(crate) mod input;
pub(crate) mod movement;

pub(crate) use input::read_input;
pub(crate) use movement::{finish_ledge_climbs, run_logic_tick, run_physics_tick, sync_facing};
