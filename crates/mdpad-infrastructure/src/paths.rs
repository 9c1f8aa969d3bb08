//! Unified path management for mdpad files.
//!
//! Platform directories come from the `dirs` crate so the layout follows XDG
//! on Linux and the native conventions on macOS and Windows.

use std::path::PathBuf;

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// Home directory could not be determined.
    HomeDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::HomeDirNotFound => write!(f, "Cannot find home directory"),
        }
    }
}

impl std::error::Error for PathError {}

impl From<PathError> for mdpad_core::ShellError {
    fn from(err: PathError) -> Self {
        mdpad_core::ShellError::config(err.to_string())
    }
}

/// Unified path management for mdpad.
///
/// # Directory Structure
///
/// ```text
/// ~/.config/mdpad/             # Config directory
/// ├── config.toml              # Shell configuration
/// └── recent.toml              # Recent documents
///
/// ~/.local/share/mdpad/        # Data directory
/// └── logs/                    # Application logs
///     └── mdpad.log.YYYY-MM-DD
/// ```
pub struct MdpadPaths;

impl MdpadPaths {
    const APP_DIR: &'static str = "mdpad";

    /// Returns the mdpad configuration directory (e.g. `~/.config/mdpad/`).
    pub fn config_dir() -> Result<PathBuf, PathError> {
        dirs::config_dir()
            .map(|dir| dir.join(Self::APP_DIR))
            .ok_or(PathError::HomeDirNotFound)
    }

    /// Returns the mdpad data directory (e.g. `~/.local/share/mdpad/`).
    pub fn data_dir() -> Result<PathBuf, PathError> {
        dirs::data_dir()
            .map(|dir| dir.join(Self::APP_DIR))
            .ok_or(PathError::HomeDirNotFound)
    }

    /// Returns the path to the main configuration file.
    pub fn config_file() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Returns the path to the recent-documents file.
    pub fn recent_documents_file() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("recent.toml"))
    }

    /// Returns the path to the logs directory.
    pub fn logs_dir() -> Result<PathBuf, PathError> {
        Ok(Self::data_dir()?.join("logs"))
    }
}
