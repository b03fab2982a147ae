use super::types::Settings;
use crate::{CatalogError, Result};
use directories::ProjectDirs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Settings file looked up in the working directory
pub const PROJECT_SETTINGS_FILE: &str = "bookshelf.yaml";

/// Resolves settings from an explicit file, the project directory or the user config dir
pub struct SettingsLoader {
    project_root: PathBuf,
    user_config: Option<PathBuf>,
}

impl SettingsLoader {
    /// Loader rooted at the current directory, with the platform config dir as fallback
    pub fn new() -> Self {
        let project_root = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        let user_config = ProjectDirs::from("", "", "bookshelf")
            .map(|dirs| dirs.config_dir().join("config.yaml"));
        Self {
            project_root,
            user_config,
        }
    }

    /// Loader with explicit lookup locations
    pub fn with_locations(project_root: impl Into<PathBuf>, user_config: Option<PathBuf>) -> Self {
        Self {
            project_root: project_root.into(),
            user_config,
        }
    }

    /// Load settings.
    ///
    /// An explicit path must exist. Otherwise the project file wins over the
    /// user file, and built-in defaults apply when neither exists.
    pub fn load(&self, explicit: Option<&Path>) -> Result<Settings> {
        if let Some(path) = explicit {
            return load_file(path);
        }

        let project_file = self.project_root.join(PROJECT_SETTINGS_FILE);
        if project_file.is_file() {
            return load_file(&project_file);
        }

        if let Some(user_file) = self.user_config.as_deref().filter(|p| p.is_file()) {
            return load_file(user_file);
        }

        debug!("No settings file found, using defaults");
        Ok(Settings::default())
    }
}

impl Default for SettingsLoader {
    fn default() -> Self {
        Self::new()
    }
}

fn load_file(path: &Path) -> Result<Settings> {
    let contents = std::fs::read_to_string(path).map_err(|e| {
        CatalogError::Config(format!("Failed to read settings file {}: {}", path.display(), e))
    })?;
    let settings = Settings::from_yaml(&contents).map_err(|e| {
        CatalogError::Config(format!("Failed to parse settings file {}: {}", path.display(), e))
    })?;
    debug!(path = %path.display(), "Loaded settings");
    Ok(settings)
}
