//! Shell configuration model.
//!
//! Loaded from `config.toml` by the infrastructure `ConfigService`. Every field
//! has a default so a partial (or empty) file is valid.

use serde::{Deserialize, Serialize};

/// Name and extensions offered by a file dialog.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct FileFilter {
    pub name: String,
    pub extensions: Vec<String>,
}

impl FileFilter {
    pub fn new(name: impl Into<String>, extensions: &[&str]) -> Self {
        Self {
            name: name.into(),
            extensions: extensions.iter().map(|e| e.to_string()).collect(),
        }
    }

    /// Filter for the document's native format.
    pub fn markdown() -> Self {
        Self::new("Markdown File", &["md"])
    }

    /// Filter for rendered exports.
    pub fn html() -> Self {
        Self::new("HTML File", &["html"])
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct ShellConfig {
    /// Used in window titles: `"<file> - <app_name>"`.
    pub app_name: String,
    /// Filter for open/save dialogs.
    pub document: FileFilter,
    /// Filter for the export dialog.
    pub export: FileFilter,
    /// Upper bound on the recent-documents list.
    pub max_recent_documents: usize,
    /// Default tracing filter when neither the CLI nor `RUST_LOG` sets one.
    pub log_level: String,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            app_name: "mdpad".to_string(),
            document: FileFilter::markdown(),
            export: FileFilter::html(),
            max_recent_documents: 10,
            log_level: "info".to_string(),
        }
    }
}
