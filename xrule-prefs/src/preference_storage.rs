use std::fs;
use std::path::PathBuf;

use crate::error::PrefsError;
use crate::models::StoredPreferences;

/// Persists the single theme preference string.
pub trait PreferenceStore {
    fn load_theme(&self) -> Result<Option<String>, PrefsError>;
    fn save_theme(&mut self, theme: &str) -> Result<(), PrefsError>;
}

/// JSON preference file, by default `<config dir>/xrule/preferences.json`
pub struct PreferenceFile {
    path: PathBuf,
}

impl PreferenceFile {
    pub fn new() -> Result<Self, PrefsError> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| PrefsError::Configuration("Could not find config directory".to_string()))?
            .join("xrule");

        Ok(Self::at(config_dir.join("preferences.json")))
    }

    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn read(&self) -> Result<StoredPreferences, PrefsError> {
        if !self.path.exists() {
            return Ok(StoredPreferences::default());
        }

        let json = fs::read_to_string(&self.path)
            .map_err(|e| PrefsError::Storage(format!("Failed to read preferences: {}", e)))?;

        Ok(serde_json::from_str(&json)?)
    }
}

impl PreferenceStore for PreferenceFile {
    fn load_theme(&self) -> Result<Option<String>, PrefsError> {
        Ok(self.read()?.theme)
    }

    fn save_theme(&mut self, theme: &str) -> Result<(), PrefsError> {
        // Keep whatever else is in the file if it is still readable
        let mut prefs = self.read().unwrap_or_default();
        prefs.theme = Some(theme.to_string());

        if let Some(parent) = self.path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| {
                    PrefsError::Storage(format!("Failed to create config directory: {}", e))
                })?;
            }
        }

        let json = serde_json::to_string_pretty(&prefs)?;
        fs::write(&self.path, json)
            .map_err(|e| PrefsError::Storage(format!("Failed to save preferences: {}", e)))?;

        tracing::debug!("Saved theme preference to {}", self.path.display());
        Ok(())
    }
}

/// In-memory store
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    theme: Option<String>,
    saves: usize,
}

impl MemoryStore {
    pub fn with_theme(theme: &str) -> Self {
        Self {
            theme: Some(theme.to_string()),
            saves: 0,
        }
    }

    pub fn theme(&self) -> Option<&str> {
        self.theme.as_deref()
    }

    /// Number of `save_theme` calls so far
    pub fn saves(&self) -> usize {
        self.saves
    }
}

impl PreferenceStore for MemoryStore {
    fn load_theme(&self) -> Result<Option<String>, PrefsError> {
        Ok(self.theme.clone())
    }

    fn save_theme(&mut self, theme: &str) -> Result<(), PrefsError> {
        self.theme = Some(theme.to_string());
        self.saves += 1;
        Ok(())
    }
}
