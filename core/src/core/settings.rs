use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::utils::error::SettingsError;

/// Fixed name of the settings file, resolved against the working directory.
pub const SETTINGS_FILE: &str = "ue_gitaware_launcher_config.json";

/// Launcher settings. Every field may be empty; consumers check what they need.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    pub engine_dir: String,

    #[serde(rename = "uproject")]
    pub project_file: String,

    #[serde(rename = "ubt")]
    pub build_tool: String,

    pub editor: String,

    pub autogen: bool,
    pub autobuild: bool,
    pub auto_check: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            engine_dir: String::new(),
            project_file: String::new(),
            build_tool: String::new(),
            editor: String::new(),
            autogen: true,
            autobuild: false,
            auto_check: false,
        }
    }
}

impl Settings {
    pub fn default_path() -> PathBuf {
        PathBuf::from(SETTINGS_FILE)
    }

    /// load settings from the working directory, falling back to defaults
    pub fn load() -> Settings {
        Self::load_or_default(Self::default_path())
    }

    pub fn load_or_default(path: impl AsRef<Path>) -> Settings {
        match Self::load_from(path) {
            Ok(settings) => settings,
            Err(SettingsError::NotFound(path)) => {
                log::info!("{} not found, using default settings", path.display());
                Settings::default()
            }
            Err(e) => {
                log::warn!("{}, using default settings", e);
                Settings::default()
            }
        }
    }

    pub fn load_from(path: impl AsRef<Path>) -> Result<Settings, SettingsError> {
        let path = path.as_ref();
        let txt = std::fs::read_to_string(path).map_err(|source| match source.kind() {
            std::io::ErrorKind::NotFound => SettingsError::NotFound(path.to_path_buf()),
            _ => SettingsError::Io {
                path: path.to_path_buf(),
                source,
            },
        })?;

        serde_json::from_str(&txt).map_err(|source| SettingsError::Corrupt {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn save(&self) -> Result<(), SettingsError> {
        self.save_to(Self::default_path())
    }

    /// overwrite the settings file
    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<(), SettingsError> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(self).map_err(|source| SettingsError::Corrupt {
            path: path.to_path_buf(),
            source,
        })?;

        std::fs::write(path, json).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    /// `MyGame` for `.../MyGame.uproject`
    pub fn project_name(&self) -> Option<String> {
        let project_file = self.project_file.trim();
        if project_file.is_empty() {
            return None;
        }
        Path::new(project_file)
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
    }

    /// the launcher can not open anything until these are configured
    pub fn needs_setup(&self) -> bool {
        self.project_file.trim().is_empty() || self.editor.trim().is_empty()
    }
}
