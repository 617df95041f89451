use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;

use crate::error::{LayoutError, LayoutResult};
use crate::models::settings::LayoutSettings;

/// Overrides the settings file location when set.
pub const CONFIG_ENV_VAR: &str = "CALENDAR_LAYOUT_CONFIG";

const CONFIG_FILE_NAME: &str = "layout.toml";

pub struct SettingsService {
    path: PathBuf,
}

impl SettingsService {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Pick the settings file: explicit path, then `CALENDAR_LAYOUT_CONFIG`,
    /// then the platform config directory.
    pub fn locate(explicit: Option<&Path>) -> LayoutResult<Self> {
        if let Some(path) = explicit {
            return Ok(Self::new(path));
        }

        if let Some(path) = std::env::var_os(CONFIG_ENV_VAR).filter(|p| !p.is_empty()) {
            return Ok(Self::new(PathBuf::from(path)));
        }

        Self::default_path()
            .map(Self::new)
            .ok_or(LayoutError::NoConfigDir)
    }

    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("com", "Brokerage", "calendar-layout")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load settings. A missing file yields the defaults.
    pub fn load(&self) -> LayoutResult<LayoutSettings> {
        if !self.path.exists() {
            log::debug!("No settings file at {}; using defaults", self.path.display());
            return Ok(LayoutSettings::default());
        }

        let content = fs::read_to_string(&self.path).map_err(|source| LayoutError::Io {
            path: self.path.clone(),
            source,
        })?;

        let settings: LayoutSettings =
            toml::from_str(&content).map_err(|source| LayoutError::ConfigParse {
                path: self.path.clone(),
                source,
            })?;

        settings.validate().map_err(LayoutError::InvalidSettings)?;

        log::info!("Loaded layout settings from {}", self.path.display());
        Ok(settings)
    }

    /// Validate and write settings, creating parent directories.
    pub fn save(&self, settings: &LayoutSettings) -> LayoutResult<()> {
        settings.validate().map_err(LayoutError::InvalidSettings)?;

        let content = toml::to_string_pretty(settings)?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| LayoutError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        fs::write(&self.path, content).map_err(|source| LayoutError::Io {
            path: self.path.clone(),
            source,
        })?;

        log::info!("Saved layout settings to {}", self.path.display());
        Ok(())
    }

    /// Write default settings. Leaves an existing file alone unless `force`.
    /// Returns whether a file was written.
    pub fn init(&self, force: bool) -> LayoutResult<bool> {
        if self.path.exists() && !force {
            log::info!(
                "Settings file {} already exists; not overwriting",
                self.path.display()
            );
            return Ok(false);
        }

        self.save(&LayoutSettings::default())?;
        Ok(true)
    }
}
