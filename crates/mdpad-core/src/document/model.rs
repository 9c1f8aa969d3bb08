//! Document session model.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Whether a session has been associated with a file on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionState {
    /// Untitled, never saved.
    Unbound,
    /// Bound to a path by a successful open or save.
    Bound,
}

/// The binding between one window and one file.
///
/// Holds the bound path and the exact content last read from or written to
/// that path. Pure state: nothing here touches storage, and both fields are
/// only ever replaced together through [`DocumentSession::bind`].
///
/// Dirty state is never stored; it is derived per query from the snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentSession {
    bound_path: Option<PathBuf>,
    persisted_snapshot: String,
}

impl DocumentSession {
    /// Creates an unbound session with an empty snapshot.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bound_path(&self) -> Option<&Path> {
        self.bound_path.as_deref()
    }

    pub fn persisted_snapshot(&self) -> &str {
        &self.persisted_snapshot
    }

    /// Rebinds the session wholesale.
    ///
    /// Callers must only invoke this after a completed read or write of
    /// `content` at `path`.
    pub fn bind(&mut self, path: impl Into<PathBuf>, content: impl Into<String>) {
        self.bound_path = Some(path.into());
        self.persisted_snapshot = content.into();
    }

    /// Returns true if `content` differs from the persisted snapshot.
    pub fn is_dirty(&self, content: &str) -> bool {
        self.persisted_snapshot != content
    }

    pub fn state(&self) -> SessionState {
        if self.bound_path.is_some() {
            SessionState::Bound
        } else {
            SessionState::Unbound
        }
    }
}
