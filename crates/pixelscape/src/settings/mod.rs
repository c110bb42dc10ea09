//! Scene configuration shared between the UI controls and the render loop.
//!
//! Loaded from a JSON document (every field optional) and mutated by the
//! settings panel through [`crate::api::scene::SceneState`].

pub mod environment;
pub mod render;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SettingsError;

pub use environment::EnvironmentPreset;
pub use render::RenderSettings;

/// Which of the two scenes is mounted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SceneKind {
    /// Loaded character model lit by an environment preset.
    #[default]
    Character,
    /// Low-poly diorama with the animated crystal and pixelation/bloom passes.
    Diorama,
}

impl SceneKind {
    pub fn name(self) -> &'static str {
        match self {
            SceneKind::Character => "character",
            SceneKind::Diorama => "diorama",
        }
    }
}

impl fmt::Display for SceneKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SceneKind {
    type Err = SettingsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "character" => Ok(SceneKind::Character),
            "diorama" => Ok(SceneKind::Diorama),
            _ => Err(SettingsError::UnknownSceneKind(s.to_owned())),
        }
    }
}

/// Everything the controls can change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneSettings {
    pub kind: SceneKind,
    pub render: RenderSettings,
    pub auto_rotate: bool,
    pub environment: EnvironmentPreset,
}

impl Default for SceneSettings {
    fn default() -> Self {
        Self {
            kind: SceneKind::default(),
            render: RenderSettings::default(),
            auto_rotate: true,
            environment: EnvironmentPreset::default(),
        }
    }
}

impl SceneSettings {
    pub fn for_kind(kind: SceneKind) -> Self {
        Self {
            kind,
            ..Self::default()
        }
    }

    /// Parse settings from JSON. Out-of-range slider values are clamped.
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let mut settings: SceneSettings = serde_json::from_str(json)?;
        let raw = settings.render;
        settings.render.normalize();
        if settings.render != raw {
            log::debug!("settings: clamped render settings {:?} -> {:?}", raw, settings.render);
        }
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string(self)?)
    }
}
