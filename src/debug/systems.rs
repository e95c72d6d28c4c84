//! Debug domain: gizmo drawing and state logging.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::animation::AnimationStateChanged;
use crate::debug::{DebugAction, DebugState};
use crate::locomotion::{LedgeClimb, LocomotionEngine, Player};

const HIT_COLOR: Color = Color::srgb(1.0, 0.3, 0.3);
const MISS_COLOR: Color = Color::srgb(0.3, 1.0, 0.4);
const ANCHOR_COLOR: Color = Color::srgb(1.0, 0.85, 0.2);

pub(crate) fn handle_debug_keys(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut debug_state: ResMut<DebugState>,
) {
    for key in keyboard.get_just_pressed() {
        if let Some(action) = DebugAction::from_key(*key) {
            debug_state.apply(action);
            info!("Debug action {:?}: {:?}", action, *debug_state);
        }
    }
}

fn contact_color(hit: bool) -> Color {
    if hit { HIT_COLOR } else { MISS_COLOR }
}

/// Ground circle, wall and ledge rays, and ledge anchors once computed.
pub(crate) fn draw_probe_gizmos(
    debug_state: Res<DebugState>,
    mut gizmos: Gizmos,
    query: Query<(&LocomotionEngine, &Position), With<Player>>,
) {
    if !debug_state.probes_visible {
        return;
    }

    for (engine, position) in &query {
        let state = engine.state();
        let rig = engine.tuning().probes;
        let (ground, wall, ledge) = engine.probe_anchors(position.0);
        let reach = state.facing.sign() * rig.wall_check_distance;

        gizmos.circle_2d(
            Isometry2d::from_translation(ground),
            rig.ground_check_radius,
            contact_color(state.contacts.grounded),
        );
        gizmos.line_2d(
            wall,
            wall + Vec2::X * reach,
            contact_color(state.contacts.touching_wall),
        );
        gizmos.line_2d(
            ledge,
            ledge + Vec2::X * reach,
            contact_color(state.contacts.touching_ledge),
        );

        match state.ledge {
            LedgeClimb::Idle => {}
            LedgeClimb::Detected { ledge_base, .. } => {
                gizmos.cross_2d(Isometry2d::from_translation(ledge_base), 0.2, ANCHOR_COLOR);
            }
            LedgeClimb::Anchored {
                ledge_base,
                anchor1,
                anchor2,
            } => {
                gizmos.cross_2d(Isometry2d::from_translation(ledge_base), 0.2, ANCHOR_COLOR);
                gizmos.circle_2d(Isometry2d::from_translation(anchor1), 0.1, ANCHOR_COLOR);
                gizmos.circle_2d(Isometry2d::from_translation(anchor2), 0.1, ANCHOR_COLOR);
                gizmos.line_2d(anchor1, anchor2, ANCHOR_COLOR);
            }
        }
    }
}

pub(crate) fn log_animation_changes(
    debug_state: Res<DebugState>,
    mut changes: MessageReader<AnimationStateChanged>,
    query: Query<&LocomotionEngine>,
) {
    for change in changes.read() {
        if !debug_state.show_info {
            continue;
        }
        let Ok(engine) = query.get(change.entity) else {
            continue;
        };
        let state = engine.state();
        info!(
            "{:?} -> {:?}: facing={:?}, input={}, jumps={}, contacts={:?}, gates={:?}, ledge={:?}",
            change.from,
            change.to,
            state.facing,
            state.movement_input,
            state.jumps_remaining,
            state.contacts,
            state.gates,
            state.ledge
        );
    }
}
