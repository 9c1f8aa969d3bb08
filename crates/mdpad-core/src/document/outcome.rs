//! Results of document workflows.

use crate::error::ShellError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Which workflow failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FailureKind {
    OpenFailed,
    SaveFailed,
    ExportFailed,
}

/// A workflow failure, in a shape that can cross the channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkflowFailure {
    pub kind: FailureKind,
    pub path: String,
    pub message: String,
}

impl WorkflowFailure {
    /// Converts a workflow error into a failure record.
    ///
    /// Returns `None` for errors that did not come out of an open, save, or
    /// export (dialog errors, channel errors, ...).
    pub fn from_error(err: &ShellError) -> Option<Self> {
        let (kind, path, message) = match err {
            ShellError::OpenFailed { path, message } => (FailureKind::OpenFailed, path, message),
            ShellError::SaveFailed { path, message } => (FailureKind::SaveFailed, path, message),
            ShellError::ExportFailed { path, message } => {
                (FailureKind::ExportFailed, path, message)
            }
            _ => return None,
        };
        Some(Self {
            kind,
            path: path.clone(),
            message: message.clone(),
        })
    }
}

impl std::fmt::Display for WorkflowFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let verb = match self.kind {
            FailureKind::OpenFailed => "open",
            FailureKind::SaveFailed => "save",
            FailureKind::ExportFailed => "export",
        };
        write!(f, "Failed to {} '{}': {}", verb, self.path, self.message)
    }
}

/// How a workflow ended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum WorkflowOutcome {
    /// The workflow ran to completion against `path`.
    Completed { path: PathBuf },
    /// The user dismissed a dialog. Not an error.
    Cancelled,
    /// The workflow failed; the session is unchanged.
    Failed(WorkflowFailure),
    /// Nothing to do (e.g. reveal with no bound file).
    Ignored,
    /// The dialog could not be shown; nothing was read or written.
    Aborted { message: String },
}

impl WorkflowOutcome {
    pub fn is_completed(&self) -> bool {
        matches!(self, Self::Completed { .. })
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }

    pub fn failure(&self) -> Option<&WorkflowFailure> {
        match self {
            Self::Failed(failure) => Some(failure),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_failure_from_save_error() {
        let err = ShellError::save_failed(Path::new("/tmp/a.md"), "permission denied");
        let failure = WorkflowFailure::from_error(&err).unwrap();
        assert_eq!(failure.kind, FailureKind::SaveFailed);
        assert_eq!(failure.path, "/tmp/a.md");
        assert_eq!(
            failure.to_string(),
            "Failed to save '/tmp/a.md': permission denied"
        );
    }

    #[test]
    fn test_non_workflow_errors_have_no_failure_record() {
        assert!(WorkflowFailure::from_error(&ShellError::Dialog("no display".into())).is_none());
    }
}
