//! Application configuration

use crate::gui::Tab;
use crate::normalizer::PlayerFlags;
use crate::panel::DEFAULT_PANEL_CAP;
use crate::utils::error::MultiviewError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Application settings
///
/// Loaded once at startup from a JSON file under the platform config dir
/// when present. Session state (the panel list) is never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppSettings {
    /// Upper bound on panels created per start action
    pub panel_cap: usize,

    /// Initial value of the panel count input
    pub default_panel_count: usize,

    /// Query flags applied to every embed address
    pub player: PlayerFlags,

    /// Tab shown at startup; remembered across sessions on tab switch
    #[serde(default)]
    pub default_tab: Tab,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            panel_cap: DEFAULT_PANEL_CAP,
            default_panel_count: 2,
            player: PlayerFlags::default(),
            default_tab: Tab::default(),
        }
    }
}

impl AppSettings {
    /// Settings file location: `<config_dir>/multiview/settings.json`.
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("multiview")
            .join("settings.json")
    }

    /// Load settings from the default location, falling back to defaults
    /// when the file is missing or unreadable.
    pub fn load() -> Self {
        let path = Self::default_path();
        match Self::load_from(&path) {
            Ok(settings) => settings,
            Err(e) => {
                debug!(path = %path.display(), error = %e, "using default settings");
                Self::default()
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self, MultiviewError> {
        let contents = std::fs::read_to_string(path)?;
        let mut settings: AppSettings = serde_json::from_str(&contents)?;
        settings.enforce_minimums();
        Ok(settings)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), MultiviewError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    /// Persist to the default location. Failure is logged, not fatal.
    pub fn save(&self) {
        let path = Self::default_path();
        if let Err(e) = self.save_to(&path) {
            warn!(path = %path.display(), error = %e, "failed to save settings");
        }
    }

    fn enforce_minimums(&mut self) {
        if self.panel_cap == 0 {
            self.panel_cap = 1;
        }
        if self.default_panel_count == 0 {
            self.default_panel_count = 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = AppSettings::default();
        assert_eq!(config.panel_cap, DEFAULT_PANEL_CAP);
        assert!(config.default_panel_count > 0);
        assert!(config.player.autoplay);
        assert!(config.player.mute);
    }

    #[test]
    fn test_round_trip_through_file() {
        let temp = TempDir::new().expect("temp dir");
        let path = temp.path().join("nested").join("settings.json");

        let mut config = AppSettings::default();
        config.panel_cap = 12;
        config.player.autoplay = false;
        config.default_tab = Tab::Shorts;
        config.save_to(&path).expect("save");

        let loaded = AppSettings::load_from(&path).expect("load");
        assert_eq!(loaded.panel_cap, 12);
        assert!(!loaded.player.autoplay);
        assert!(loaded.player.mute);
        assert_eq!(loaded.default_tab, Tab::Shorts);
    }

    #[test]
    fn test_missing_default_tab_falls_back_to_browser() {
        // Settings files written before the tab was remembered lack the
        // field; they must still load.
        let temp = TempDir::new().expect("temp dir");
        let path = temp.path().join("settings.json");
        std::fs::write(
            &path,
            r#"{"panel_cap":10,"default_panel_count":2,"player":{"autoplay":true,"mute":true,"controls":true}}"#,
        )
        .expect("write");

        let loaded = AppSettings::load_from(&path).expect("load");
        assert_eq!(loaded.default_tab, Tab::Browser);
    }

    #[test]
    fn test_zero_values_are_bumped_on_load() {
        let temp = TempDir::new().expect("temp dir");
        let path = temp.path().join("settings.json");
        std::fs::write(
            &path,
            r#"{"panel_cap":0,"default_panel_count":0,"player":{"autoplay":true,"mute":true,"controls":true}}"#,
        )
        .expect("write");

        let loaded = AppSettings::load_from(&path).expect("load");
        assert_eq!(loaded.panel_cap, 1);
        assert_eq!(loaded.default_panel_count, 1);
    }

    #[test]
    fn test_missing_file_errors() {
        let temp = TempDir::new().expect("temp dir");
        assert!(AppSettings::load_from(&temp.path().join("absent.json")).is_err());
    }
}
