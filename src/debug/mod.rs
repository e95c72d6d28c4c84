//! Debug domain: developer overlays for locomotion probes (dev-tools only).

mod state;
mod systems;

pub use state::{DebugAction, DebugState};

use bevy::prelude::*;

use crate::debug::systems::{draw_probe_gizmos, handle_debug_keys, log_animation_changes};

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugState>().add_systems(
            Update,
            (handle_debug_keys, draw_probe_gizmos, log_animation_changes),
        );
    }
}
