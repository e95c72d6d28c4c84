//! Debug domain: toggles for probe visualization and state logging.

use bevy::prelude::*;

/// Resource tracking debug mode state
#[derive(Resource, Debug, Default)]
pub struct DebugState {
    /// Draw probe casts and ledge anchors
    pub probes_visible: bool,
    /// Log engine state and animation transitions
    pub show_info: bool,
}

/// Actions that can be triggered from debug keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DebugAction {
    ToggleProbes,
    ToggleInfo,
}

impl DebugAction {
    pub fn from_key(key: KeyCode) -> Option<Self> {
        match key {
            KeyCode::F3 => Some(DebugAction::ToggleProbes),
            KeyCode::F4 => Some(DebugAction::ToggleInfo),
            _ => None,
        }
    }
}

impl DebugState {
    pub fn apply(&mut self, action: DebugAction) {
        match action {
            DebugAction::ToggleProbes => self.probes_visible = !self.probes_visible,
            DebugAction::ToggleInfo => self.show_info = !self.show_info,
        }
    }
}
