//! Window identity and decoration.

use serde::{Deserialize, Serialize};
use std::path::Path;
use uuid::Uuid;

/// Identifies the window a session belongs to. Used for log correlation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WindowId(Uuid);

impl WindowId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for WindowId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for WindowId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Window chrome that mirrors session state.
///
/// Purely decorative; implementations must not fail.
pub trait WindowDecorations: Send + Sync {
    fn set_title(&self, title: &str);

    /// The file the window represents (proxy icon on macOS).
    fn set_represented_path(&self, path: &Path);

    /// The "modified" indicator (dot/asterisk).
    fn set_document_edited(&self, edited: bool);
}

/// Builds the `"<file name> - <app>"` window title.
pub fn document_title(path: &Path, app_name: &str) -> String {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    format!("{} - {}", name, app_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_title_uses_basename() {
        assert_eq!(
            document_title(Path::new("/tmp/notes/a.md"), "mdpad"),
            "a.md - mdpad"
        );
    }

    #[test]
    fn test_window_ids_are_unique() {
        assert_ne!(WindowId::new(), WindowId::new());
    }
}
