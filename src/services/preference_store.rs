// Tabflow preference store
// Persists user preferences as a JSON file at the platform-specific config
// path. Reads are always fresh from disk, so preference changes take effect
// on the next activation without restarts or cache invalidation.

use std::fs;
use std::path::Path;

use crate::platform;
use crate::types::errors::PreferenceError;
use crate::types::preferences::Preferences;

/// Trait defining the preference store interface.
pub trait PreferenceStoreTrait {
    fn try_read(&self) -> Result<Preferences, PreferenceError>;
    fn read(&self) -> Preferences;
    fn write(&self, prefs: &Preferences) -> Result<(), PreferenceError>;
    fn config_path(&self) -> &str;
}

/// Preference store implementation that persists preferences as JSON on disk.
pub struct PreferenceStore {
    config_path: String,
}

impl PreferenceStore {
    /// Creates a new PreferenceStore.
    ///
    /// If `path_override` is `Some`, uses that path for the preference file.
    /// Otherwise, uses the platform-specific config directory with
    /// `preferences.json`.
    pub fn new(path_override: Option<String>) -> Self {
        let config_path = match path_override {
            Some(p) => p,
            None => {
                let config_dir = platform::get_config_dir();
                config_dir
                    .join("preferences.json")
                    .to_string_lossy()
                    .to_string()
            }
        };

        Self { config_path }
    }
}

impl PreferenceStoreTrait for PreferenceStore {
    /// Reads preferences from the JSON file.
    ///
    /// A missing file yields defaults; keys missing from an existing file
    /// are filled with their defaults. A malformed file is an error.
    fn try_read(&self) -> Result<Preferences, PreferenceError> {
        let path = Path::new(&self.config_path);

        if !path.exists() {
            return Ok(Preferences::default());
        }

        let content = fs::read_to_string(path).map_err(|e| {
            PreferenceError::IoError(format!("Failed to read preference file: {}", e))
        })?;

        serde_json::from_str(&content).map_err(|e| {
            PreferenceError::SerializationError(format!("Failed to parse preference file: {}", e))
        })
    }

    /// Reads preferences, falling back to defaults when the file is missing
    /// or broken. This is the read used on the activation path, where a
    /// corrupt file must never stop evaluations.
    fn read(&self) -> Preferences {
        self.try_read().unwrap_or_default()
    }

    /// Writes preferences to the JSON file.
    ///
    /// Creates parent directories if they don't exist.
    fn write(&self, prefs: &Preferences) -> Result<(), PreferenceError> {
        let path = Path::new(&self.config_path);

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                PreferenceError::IoError(format!("Failed to create config directory: {}", e))
            })?;
        }

        let json = serde_json::to_string_pretty(prefs).map_err(|e| {
            PreferenceError::SerializationError(format!("Failed to serialize preferences: {}", e))
        })?;

        fs::write(path, json).map_err(|e| {
            PreferenceError::IoError(format!("Failed to write preference file: {}", e))
        })?;

        Ok(())
    }

    /// Returns the path to the preference file.
    fn config_path(&self) -> &str {
        &self.config_path
    }
}
