//! Core: camera and world setup shared by every domain.

use avian2d::prelude::*;
use bevy::prelude::*;

/// World units are tiles; one tile renders this many pixels.
pub const PIXELS_PER_UNIT: f32 = 32.0;

/// Downward acceleration in tiles per second squared.
pub const GRAVITY: f32 = 40.0;

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(Gravity(Vec2::NEG_Y * GRAVITY))
            .add_systems(Startup, setup_camera);
    }
}

fn setup_camera(mut commands: Commands) {
    commands.spawn((
        Camera2d,
        Projection::from(OrthographicProjection {
            scale: 1.0 / PIXELS_PER_UNIT,
            ..OrthographicProjection::default_2d()
        }),
        Transform::from_xyz(0.0, 2.0, 0.0),
    ));
}
