use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SettingsError;

/// HDR environment lighting preset for the character scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnvironmentPreset {
    Apartment,
    City,
    Dawn,
    Forest,
    Lobby,
    Night,
    Park,
    Studio,
    #[default]
    Sunset,
    Warehouse,
}

impl EnvironmentPreset {
    /// Every preset, in declaration order. Position is the stable [`Self::index`].
    pub const ALL: [EnvironmentPreset; 10] = [
        EnvironmentPreset::Apartment,
        EnvironmentPreset::City,
        EnvironmentPreset::Dawn,
        EnvironmentPreset::Forest,
        EnvironmentPreset::Lobby,
        EnvironmentPreset::Night,
        EnvironmentPreset::Park,
        EnvironmentPreset::Studio,
        EnvironmentPreset::Sunset,
        EnvironmentPreset::Warehouse,
    ];

    /// Presets offered in the environment picker, in menu order.
    pub const SELECTABLE: [EnvironmentPreset; 7] = [
        EnvironmentPreset::Sunset,
        EnvironmentPreset::Studio,
        EnvironmentPreset::Dawn,
        EnvironmentPreset::Night,
        EnvironmentPreset::Warehouse,
        EnvironmentPreset::Forest,
        EnvironmentPreset::Park,
    ];

    /// Lowercase identifier understood by the environment map loader.
    pub fn name(self) -> &'static str {
        match self {
            EnvironmentPreset::Apartment => "apartment",
            EnvironmentPreset::City => "city",
            EnvironmentPreset::Dawn => "dawn",
            EnvironmentPreset::Forest => "forest",
            EnvironmentPreset::Lobby => "lobby",
            EnvironmentPreset::Night => "night",
            EnvironmentPreset::Park => "park",
            EnvironmentPreset::Studio => "studio",
            EnvironmentPreset::Sunset => "sunset",
            EnvironmentPreset::Warehouse => "warehouse",
        }
    }

    /// Menu label: the name with its first letter capitalized.
    pub fn label(self) -> String {
        let name = self.name();
        let mut chars = name.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }

    pub fn index(self) -> u32 {
        self as u32
    }
}

impl fmt::Display for EnvironmentPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for EnvironmentPreset {
    type Err = SettingsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        EnvironmentPreset::ALL
            .into_iter()
            .find(|preset| preset.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| SettingsError::UnknownPreset(s.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_sunset() {
        assert_eq!(EnvironmentPreset::default(), EnvironmentPreset::Sunset);
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("Dawn".parse::<EnvironmentPreset>().unwrap(), EnvironmentPreset::Dawn);
        assert_eq!(" lobby ".parse::<EnvironmentPreset>().unwrap(), EnvironmentPreset::Lobby);
        assert!(matches!(
            "moon".parse::<EnvironmentPreset>(),
            Err(SettingsError::UnknownPreset(name)) if name == "moon"
        ));
    }

    #[test]
    fn labels_are_title_case() {
        assert_eq!(EnvironmentPreset::Warehouse.label(), "Warehouse");
        assert_eq!(EnvironmentPreset::Sunset.to_string(), "sunset");
    }

    #[test]
    fn index_matches_all_order() {
        for (i, preset) in EnvironmentPreset::ALL.iter().enumerate() {
            assert_eq!(preset.index() as usize, i);
        }
    }

    #[test]
    fn selectable_starts_with_default() {
        assert_eq!(EnvironmentPreset::SELECTABLE[0], EnvironmentPreset::default());
        assert!(!EnvironmentPreset::SELECTABLE.contains(&EnvironmentPreset::Lobby));
    }

    #[test]
    fn serde_uses_lowercase_names() {
        let json = serde_json::to_string(&EnvironmentPreset::Night).unwrap();
        assert_eq!(json, "\"night\"");
        let back: EnvironmentPreset = serde_json::from_str("\"park\"").unwrap();
        assert_eq!(back, EnvironmentPreset::Park);
    }
}
