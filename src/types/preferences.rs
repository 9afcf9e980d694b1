use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};

pub const THUMB_SIZE_CHOICES: [u32; 3] = [100, 150, 200];

#[derive(Debug, thiserror::Error)]
pub enum PreferencesError {
    #[error("failed to access settings file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse settings file: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppearanceMode {
    Light,
    Dark,
}

impl AppearanceMode {
    pub fn theme_name(&self) -> &'static str {
        match self {
            AppearanceMode::Light => "flatly",
            AppearanceMode::Dark => "darkly",
        }
    }

    pub fn from_theme_name(name: &str) -> Self {
        match name {
            "flatly" => AppearanceMode::Light,
            _ => AppearanceMode::Dark,
        }
    }
}

/// Flat key-value preferences persisted as JSON.
///
/// Keys this build does not know about are carried in `extra` and written
/// back untouched.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserPreferences {
    pub theme: String,
    pub auto_open: bool,
    pub delete_original: bool,
    // Written by the settings window, not consulted by the batch processor.
    pub output_dir: String,
    pub thumb_size: u32,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Default for UserPreferences {
    fn default() -> Self {
        Self {
            theme: "darkly".to_string(),
            auto_open: true,
            delete_original: false,
            output_dir: String::new(),
            thumb_size: 100,
            extra: Map::new(),
        }
    }
}

impl UserPreferences {
    pub fn config_path() -> PathBuf {
        if let Some(config_dir) = dirs::config_dir() {
            config_dir.join("BgRemoverGUI").join("settings.json")
        } else {
            PathBuf::from("settings.json")
        }
    }

    pub fn load() -> Self {
        Self::load_from(&Self::config_path())
    }

    pub fn save(&self) -> Result<(), PreferencesError> {
        self.save_to(&Self::config_path())
    }

    /// Reads the document at `path` over the defaults. A missing document is
    /// created from the defaults; an unreadable one is ignored with a warning.
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            let defaults = Self::default();
            if let Err(e) = defaults.save_to(path) {
                log::warn!("Failed to write default settings to {}: {e}", path.display());
            }
            return defaults;
        }

        match Self::read(path) {
            Ok(prefs) => {
                log::info!("Settings loaded from: {}", path.display());
                prefs
            }
            Err(e) => {
                log::warn!(
                    "Failed to load {}. Using defaults: {e}",
                    path.display()
                );
                Self::default()
            }
        }
    }

    fn read(path: &Path) -> Result<Self, PreferencesError> {
        let content = std::fs::read_to_string(path)?;
        let mut prefs: Self = serde_json::from_str(&content)?;
        prefs.thumb_size = Self::clamp_thumb_size(prefs.thumb_size);
        Ok(prefs)
    }

    /// Keeps hand-edited sizes within the range the settings window offers.
    pub fn clamp_thumb_size(thumb_size: u32) -> u32 {
        let min = THUMB_SIZE_CHOICES[0];
        let max = THUMB_SIZE_CHOICES[THUMB_SIZE_CHOICES.len() - 1];
        thumb_size.clamp(min, max)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), PreferencesError> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;

        let temp_path = path.with_extension("json.tmp");
        std::fs::write(&temp_path, content)?;
        std::fs::rename(&temp_path, path)?;
        Ok(())
    }

    pub fn appearance_mode(&self) -> AppearanceMode {
        AppearanceMode::from_theme_name(&self.theme)
    }

    pub fn set_appearance_mode(&mut self, mode: AppearanceMode) {
        self.theme = mode.theme_name().to_string();
    }
}
