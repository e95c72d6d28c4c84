//! Content: data-driven locomotion tuning loaded at startup.

mod loader;
mod validation;


pub use loader::{ContentLoadError, TUNING_FILE, load_tuning, parse_single};
pub use validation::{TuningIssue, validate_tuning};

use bevy::prelude::*;
use std::path::PathBuf;

use crate::locomotion::LocomotionTuning;

/// Directory holding the data files.
#[derive(Resource, Debug, Clone)]
pub struct ContentPath(pub PathBuf);

impl Default for ContentPath {
    fn default() -> Self {
        Self(PathBuf::from("assets/data"))
    }
}

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ContentPath>()
            .add_systems(PreStartup, load_locomotion_tuning);
    }
}

/// Load, validate and normalize the tuning; fall back to defaults on failure.
fn load_locomotion_tuning(mut commands: Commands, path: Res<ContentPath>) {
    let tuning = match load_tuning(&path.0) {
        Ok(tuning) => {
            info!("Loaded locomotion tuning from {}", path.0.display());
            tuning
        }
        Err(e) => {
            warn!("{}; using default locomotion tuning", e);
            LocomotionTuning::default()
        }
    };

    for issue in validate_tuning(&tuning) {
        warn!("{}; clamping", issue);
    }

    commands.insert_resource(tuning.normalized());
}
