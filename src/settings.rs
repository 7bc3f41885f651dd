//! Persisted global settings.
//!
//! Theme, animation preference, user profile, and content density, stored as
//! one JSON document. Density feeds the panel reflow heuristic. The version
//! string is compared for equality only and restamped on save.

use serde::{Deserialize, Serialize};

pub const SETTINGS_VERSION: &str = "3";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }
}

/// How tightly panel content packs its rows and columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Density {
    Compact,
    #[default]
    Normal,
    Spacious,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DensitySettings {
    /// When set, density follows panel width; otherwise `content_density`
    /// applies everywhere.
    pub auto_adjust: bool,
    pub content_density: Density,
}

impl Default for DensitySettings {
    fn default() -> Self {
        Self {
            auto_adjust: true,
            content_density: Density::Normal,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub theme: Theme,
    #[serde(default = "default_true")]
    pub animations: bool,
    #[serde(default)]
    pub user_profile: String,
    #[serde(default)]
    pub density: DensitySettings,
    pub version: String,
}

fn default_true() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            animations: true,
            user_profile: String::new(),
            density: DensitySettings::default(),
            version: SETTINGS_VERSION.to_string(),
        }
    }
}

impl Settings {
    /// Stamp the current version, warning (but accepting) on mismatch.
    pub fn restamp(&mut self) {
        if self.version != SETTINGS_VERSION {
            tracing::warn!(
                found = %self.version,
                expected = SETTINGS_VERSION,
                "settings version mismatch; restamping"
            );
            self.version = SETTINGS_VERSION.to_string();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_dark_and_auto_density() {
        let settings = Settings::default();
        assert_eq!(settings.theme, Theme::Dark);
        assert!(settings.animations);
        assert!(settings.density.auto_adjust);
        assert_eq!(settings.version, SETTINGS_VERSION);
    }

    #[test]
    fn restamp_overwrites_stale_version() {
        let mut settings = Settings {
            version: "1".into(),
            ..Settings::default()
        };
        settings.restamp();
        assert_eq!(settings.version, SETTINGS_VERSION);
    }

    #[test]
    fn missing_fields_deserialize_to_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"version":"3"}"#).unwrap();
        assert_eq!(settings, Settings::default());
    }
}
