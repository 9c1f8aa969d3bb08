//! Error types for mdpad.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// A shared error type for the entire mdpad shell.
///
/// There is no cancellation variant: a cancelled dialog ends a
/// workflow normally and is reported as `WorkflowOutcome::Cancelled`.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShellError {
    /// Reading a chosen document failed
    #[error("Failed to open '{path}': {message}")]
    OpenFailed { path: String, message: String },

    /// Writing the document source failed
    #[error("Failed to save '{path}': {message}")]
    SaveFailed { path: String, message: String },

    /// Writing rendered output failed
    #[error("Failed to export '{path}': {message}")]
    ExportFailed { path: String, message: String },

    /// IO error outside of a document workflow (config, recent documents, ...)
    #[error("IO error: {message}")]
    Io { message: String },

    /// The native dialog itself could not be shown
    #[error("Dialog error: {0}")]
    Dialog(String),

    /// Environment operation (reveal, open externally) failed
    #[error("Environment error: {0}")]
    Environment(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization { format: String, message: String },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// The coordinator side of the channel has gone away
    #[error("Channel closed: {0}")]
    ChannelClosed(String),

    /// Internal error (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ShellError {
    // ============================================================================
    // Constructor helpers
    // ============================================================================

    /// Creates an OpenFailed error
    pub fn open_failed(path: &Path, message: impl Into<String>) -> Self {
        Self::OpenFailed {
            path: path.display().to_string(),
            message: message.into(),
        }
    }

    /// Creates a SaveFailed error
    pub fn save_failed(path: &Path, message: impl Into<String>) -> Self {
        Self::SaveFailed {
            path: path.display().to_string(),
            message: message.into(),
        }
    }

    /// Creates an ExportFailed error
    pub fn export_failed(path: &Path, message: impl Into<String>) -> Self {
        Self::ExportFailed {
            path: path.display().to_string(),
            message: message.into(),
        }
    }

    /// Creates an IO error
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }
}

// ============================================================================
// From implementations for automatic conversion
// ============================================================================

impl From<std::io::Error> for ShellError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<serde_json::Error> for ShellError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for ShellError {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::ser::Error> for ShellError {
    fn from(err: toml::ser::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

/// A type alias for `Result<T, ShellError>`.
pub type Result<T> = std::result::Result<T, ShellError>;
