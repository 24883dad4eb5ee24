// Privacy Guardian Settings Engine
// Manages monitor settings: loading, saving, updating values, and resetting
// to defaults. Settings are stored as a JSON file.

use std::fs;
use std::path::Path;

use crate::types::errors::SettingsError;
use crate::types::settings::GuardianSettings;

/// Default config file name when no override is given.
const DEFAULT_CONFIG_FILE: &str = "privacy-guardian-settings.json";

/// Trait defining the settings engine interface.
pub trait SettingsEngineTrait {
    fn load(&mut self) -> Result<GuardianSettings, SettingsError>;
    fn save(&self) -> Result<(), SettingsError>;
    fn get_settings(&self) -> &GuardianSettings;
    fn set_heavy_site_threshold(&mut self, threshold: u8) -> Result<(), SettingsError>;
    fn set_blocking_enabled(&mut self, enabled: bool) -> Result<(), SettingsError>;
    fn reset(&mut self) -> Result<(), SettingsError>;
    fn get_config_path(&self) -> &str;
}

/// Settings engine implementation that persists settings as JSON on disk.
pub struct SettingsEngine {
    config_path: String,
    settings: GuardianSettings,
}

impl SettingsEngine {
    /// Creates a new SettingsEngine.
    ///
    /// If `path_override` is `Some`, uses that path for the config file;
    /// otherwise uses `privacy-guardian-settings.json` in the working
    /// directory.
    pub fn new(path_override: Option<String>) -> Self {
        let config_path = path_override.unwrap_or_else(|| DEFAULT_CONFIG_FILE.to_string());
        Self {
            config_path,
            settings: GuardianSettings::default(),
        }
    }
}

impl SettingsEngineTrait for SettingsEngine {
    /// Loads settings from the JSON config file.
    ///
    /// If the file does not exist, returns default settings.
    /// If the file exists but is malformed, returns a serialization error.
    fn load(&mut self) -> Result<GuardianSettings, SettingsError> {
        let path = Path::new(&self.config_path);

        if !path.exists() {
            self.settings = GuardianSettings::default();
            return Ok(self.settings.clone());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| SettingsError::IoError(format!("Failed to read config file: {}", e)))?;

        let settings: GuardianSettings = serde_json::from_str(&content).map_err(|e| {
            SettingsError::SerializationError(format!("Failed to parse config file: {}", e))
        })?;

        self.settings = settings;
        Ok(self.settings.clone())
    }

    /// Saves the current settings to the JSON config file.
    ///
    /// Creates parent directories if they don't exist.
    fn save(&self) -> Result<(), SettingsError> {
        let path = Path::new(&self.config_path);

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| {
                    SettingsError::IoError(format!("Failed to create config directory: {}", e))
                })?;
            }
        }

        let json = serde_json::to_string_pretty(&self.settings).map_err(|e| {
            SettingsError::SerializationError(format!("Failed to serialize settings: {}", e))
        })?;

        fs::write(path, json)
            .map_err(|e| SettingsError::IoError(format!("Failed to write config file: {}", e)))?;

        Ok(())
    }

    /// Returns a reference to the current in-memory settings.
    fn get_settings(&self) -> &GuardianSettings {
        &self.settings
    }

    /// Updates the heavy-site threshold and saves to disk.
    /// Scores live in 0..=100, so the threshold must too.
    fn set_heavy_site_threshold(&mut self, threshold: u8) -> Result<(), SettingsError> {
        if threshold > 100 {
            return Err(SettingsError::InvalidValue(format!(
                "Heavy-site threshold must be at most 100, got {}",
                threshold
            )));
        }
        self.settings.heavy_site_threshold = threshold;
        self.save()
    }

    /// Updates the (stubbed) blocking toggle and saves to disk.
    fn set_blocking_enabled(&mut self, enabled: bool) -> Result<(), SettingsError> {
        self.settings.blocking_enabled = enabled;
        self.save()
    }

    /// Resets settings to defaults and saves to disk.
    fn reset(&mut self) -> Result<(), SettingsError> {
        self.settings = GuardianSettings::default();
        self.save()
    }

    /// Returns the path of the config file.
    fn get_config_path(&self) -> &str {
        &self.config_path
    }
}
