//! Loader for the RON locomotion tuning file.

use ron::Options;
use std::fs;
use std::path::Path;

use crate::locomotion::LocomotionTuning;

/// Error type for content loading failures.
#[derive(Debug)]
pub struct ContentLoadError {
    pub file: String,
    pub message: String,
}

impl std::fmt::Display for ContentLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to load {}: {}", self.file, self.message)
    }
}

impl std::error::Error for ContentLoadError {}

/// Create RON options with extensions enabled for more flexible parsing.
fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

/// Parse a single RON struct from `contents`. `file` only labels errors.
pub fn parse_single<T>(contents: &str, file: &str) -> Result<T, ContentLoadError>
where
    T: for<'de> serde::Deserialize<'de>,
{
    ron_options()
        .from_str(contents)
        .map_err(|e| ContentLoadError {
            file: file.to_string(),
            message: format!("Parse error: {}", e),
        })
}

/// Load a single RON struct from disk.
fn load_single_file<T>(path: &Path) -> Result<T, ContentLoadError>
where
    T: for<'de> serde::Deserialize<'de>,
{
    let file_name = path.display().to_string();
    let contents = fs::read_to_string(path).map_err(|e| ContentLoadError {
        file: file_name.clone(),
        message: format!("IO error: {}", e),
    })?;

    parse_single(&contents, &file_name)
}

/// Load `locomotion.ron` from `base_path`. Fields missing from the file keep
/// their defaults. The result is not yet validated or normalized.
pub fn load_tuning(base_path: &Path) -> Result<LocomotionTuning, ContentLoadError> {
    load_single_file::<LocomotionTuning>(&base_path.join(TUNING_FILE))
}

pub const TUNING_FILE: &str = "locomotion.ron";
