//! Error types for the fallible edges of the scene: parsing settings and names.
//!
//! The animation math never fails; see [`crate::anim`].

use std::{error, fmt};

/// Failure while reading scene settings coming from the UI layer.
#[derive(Debug)]
pub enum SettingsError {
    /// The settings document is not valid JSON for [`crate::settings::SceneSettings`].
    Json(serde_json::Error),
    /// Not one of the known environment lighting presets.
    UnknownPreset(String),
    /// Not `character` or `diorama`.
    UnknownSceneKind(String),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::Json(err) => write!(f, "invalid settings json: {err}"),
            SettingsError::UnknownPreset(name) => {
                write!(f, "unknown environment preset `{name}`")
            }
            SettingsError::UnknownSceneKind(name) => write!(f, "unknown scene kind `{name}`"),
        }
    }
}

impl error::Error for SettingsError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            SettingsError::Json(err) => Some(err),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for SettingsError {
    fn from(err: serde_json::Error) -> Self {
        SettingsError::Json(err)
    }
}
