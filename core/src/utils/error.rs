use std::path::PathBuf;
use thiserror::Error;

pub type LauncherResult<T, E = LauncherError> = Result<T, E>;

#[derive(Debug, Error)]
pub enum LauncherError {
    #[error("engine folder is not set")]
    EngineDirNotSet,

    #[error("engine folder {} not found", .0.display())]
    EngineDirNotFound(PathBuf),

    #[error("invalid glob pattern {pattern}: {source}")]
    InvalidPattern {
        pattern: String,
        source: globset::Error,
    },

    #[error("git is not found!\n{0}")]
    GitNotFound(String),

    #[error("failed to get git version from {0:?}")]
    GitVersionUnknown(String),

    #[error("git version {required} is required, current version is {current}")]
    GitVersionMismatch { required: String, current: String },
}

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("settings file {} not found", .0.display())]
    NotFound(PathBuf),

    #[error("failed to access settings file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("settings file {} is corrupt: {source}", path.display())]
    Corrupt {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Failures of the open sequence, worded for the user.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum OpenError {
    #[error("Please set the .uproject file in Settings")]
    ProjectFileNotSet,

    #[error("Please set UnrealBuildTool.exe in Settings")]
    BuildToolNotSet,

    #[error("Please set UnrealEditor.exe in Settings")]
    EditorNotSet,

    #[error("Generate Project Files failed")]
    GenerateFailed,

    #[error("Build Editor failed")]
    BuildFailed,

    #[error("Failed to launch editor: {0}")]
    LaunchFailed(String),
}
