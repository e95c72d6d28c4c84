use avian2d::prelude::*;
use bevy::prelude::*;

use platformer_locomotion::{animation, content, locomotion};

fn main() {
    let mut app = App::new();
    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Locomotion".to_string(),
            resolution: (1280, 720).into(),
            resizable: true,
            ..default()
        }),
        ..default()
    }))
    .add_plugins(PhysicsPlugins::default())
    .add_plugins((
        platformer_locomotion::core::CorePlugin,
        content::ContentPlugin,
        locomotion::LocomotionPlugin,
        animation::AnimationPlugin,
    ));

    #[cfg(feature = "dev-tools")]
    app.add_plugins(platformer_locomotion::debug::DebugPlugin);

    app.run();
}
