//! Locomotion domain: player spawn and the test room.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::animation::AnimationController;
use crate::locomotion::{
    AnimationParams, GameLayer, Ground, LocomotionEngine, LocomotionTuning, Player, Wall,
};

/// Player collider size in world units.
pub const PLAYER_SIZE: Vec2 = Vec2::new(0.8, 1.0);

pub(crate) fn spawn_player(mut commands: Commands, tuning: Res<LocomotionTuning>) {
    let engine = LocomotionEngine::new(tuning.clone());
    info!(
        "Spawning player: speed={}, jump_force={}, max_jumps={}, features={:?}",
        engine.tuning().movement_speed,
        engine.tuning().jump_force,
        engine.tuning().max_jumps,
        engine.tuning().features
    );

    commands.spawn((
        // Identity & Locomotion
        (
            Player,
            engine,
            AnimationParams::default(),
            AnimationController::default(),
        ),
        // Rendering
        Sprite {
            color: Color::srgb(0.9, 0.9, 0.9),
            custom_size: Some(PLAYER_SIZE),
            ..default()
        },
        Transform::from_xyz(0.0, -2.0, 0.0),
        // Physics
        (
            RigidBody::Dynamic,
            Collider::rectangle(PLAYER_SIZE.x, PLAYER_SIZE.y),
            LockedAxes::ROTATION_LOCKED,
            LinearVelocity::default(),
            Mass(1.0),
            Friction::new(0.0),
            CollisionLayers::new(GameLayer::Player, [GameLayer::Ground, GameLayer::Wall]),
        ),
    ));
}

/// Block edges sit on whole units so ledge anchors snap cleanly.
pub(crate) fn spawn_test_room(mut commands: Commands) {
    let wall_color = Color::srgb(0.3, 0.3, 0.4);
    let ground_color = Color::srgb(0.4, 0.5, 0.4);
    let ledge_color = Color::srgb(0.5, 0.4, 0.3);

    let ground_layers = CollisionLayers::new(GameLayer::Ground, [GameLayer::Player]);
    let wall_layers = CollisionLayers::new(GameLayer::Wall, [GameLayer::Player]);

    let mut block = |marker_is_wall: bool, center: Vec2, size: Vec2, color: Color| {
        let mut entity = commands.spawn((
            Sprite {
                color,
                custom_size: Some(size),
                ..default()
            },
            Transform::from_translation(center.extend(0.0)),
            RigidBody::Static,
            Collider::rectangle(size.x, size.y),
        ));
        if marker_is_wall {
            entity.insert((Wall, wall_layers));
        } else {
            entity.insert((Ground, ground_layers));
        }
    };

    // Floor, top at y = -3
    block(false, Vec2::new(0.0, -3.5), Vec2::new(32.0, 1.0), ground_color);

    // Outer walls for wall sliding and wall jumps
    block(true, Vec2::new(-16.5, 3.0), Vec2::new(1.0, 14.0), wall_color);
    block(true, Vec2::new(16.5, 3.0), Vec2::new(1.0, 14.0), wall_color);

    // Climbable block, left face at x = 3, top at y = 0
    block(true, Vec2::new(4.5, -1.5), Vec2::new(3.0, 3.0), ledge_color);

    // Climbable block, right face at x = -6, top at y = 1
    block(true, Vec2::new(-8.0, -1.0), Vec2::new(4.0, 4.0), ledge_color);

    // Pillar pair for wall-jump chains
    block(true, Vec2::new(10.5, 2.0), Vec2::new(1.0, 8.0), wall_color);
    block(true, Vec2::new(13.5, 4.0), Vec2::new(1.0, 8.0), wall_color);

    // Floating platform
    block(false, Vec2::new(-1.0, 3.25), Vec2::new(4.0, 0.5), ground_color);
}
