//! 2D platformer locomotion: a per-character state engine that turns input and
//! ground/wall/ledge probes into velocity commands, plus the bevy and avian2d
//! plumbing that runs it.

pub mod animation;
pub mod content;
pub mod core;
#[cfg(feature = "dev-tools")]
pub mod debug;
pub mod locomotion;
