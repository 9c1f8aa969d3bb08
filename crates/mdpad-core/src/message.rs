//! Message contract between the display surface and the coordinator.
//!
//! The display surface never holds a reference to the session or to storage;
//! everything it learns arrives as a [`ShellReply`] to one of its requests or
//! as an unsolicited [`ShellEvent`]. All three enums serialize as
//! `{"type": ..., "data": ...}` so they can cross a process boundary as JSON.

use crate::document::{WorkflowFailure, WorkflowOutcome};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Requests from the display surface (or the environment) to the coordinator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum ShellRequest {
    /// Prompt for a document and open it.
    RequestOpen,
    /// Open a known path without prompting (OS "open with", recent list, argv).
    OpenPath { path: PathBuf },
    /// Save to the bound path, prompting only when unbound.
    RequestSave { content: String },
    /// Always prompt for a target, then save and rebind.
    RequestSaveAs { content: String },
    /// Prompt for a target and write the rendered output there.
    RequestExportHtml { rendered_html: String },
    /// Does `content` differ from the last persisted snapshot?
    QueryHasChanges { content: String },
    RevealInFileManager,
    OpenExternally,
}

impl ShellRequest {
    /// Returns true for requests that run as a serialized workflow.
    pub fn is_workflow(&self) -> bool {
        !matches!(self, Self::QueryHasChanges { .. })
    }

    /// Short name used in log lines.
    pub fn name(&self) -> &'static str {
        match self {
            Self::RequestOpen => "open",
            Self::OpenPath { .. } => "open_path",
            Self::RequestSave { .. } => "save",
            Self::RequestSaveAs { .. } => "save_as",
            Self::RequestExportHtml { .. } => "export_html",
            Self::QueryHasChanges { .. } => "has_changes",
            Self::RevealInFileManager => "reveal",
            Self::OpenExternally => "open_externally",
        }
    }
}

/// Direct answer to a single request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum ShellReply {
    Outcome(WorkflowOutcome),
    HasChanges(bool),
}

/// Pushed from the coordinator to the display surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum ShellEvent {
    /// A document was opened; replace the live buffer.
    FileOpened { content: String, path: PathBuf },
    /// Save acknowledgment.
    Saved { path: PathBuf },
    Exported { path: PathBuf },
    /// A workflow failed and should be reported to the user.
    WorkflowFailed(WorkflowFailure),
    /// A workflow stopped before any I/O because its dialog failed.
    WorkflowAborted { message: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_wire_shape() {
        let request = ShellRequest::QueryHasChanges {
            content: "# Hi".to_string(),
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            json!({"type": "QueryHasChanges", "data": {"content": "# Hi"}})
        );

        let unit = serde_json::to_value(ShellRequest::RequestOpen).unwrap();
        assert_eq!(unit, json!({"type": "RequestOpen"}));
    }

    #[test]
    fn test_file_opened_event_from_json() {
        let event: ShellEvent = serde_json::from_value(json!({
            "type": "FileOpened",
            "data": {"content": "body", "path": "/tmp/a.md"}
        }))
        .unwrap();
        assert_eq!(
            event,
            ShellEvent::FileOpened {
                content: "body".to_string(),
                path: PathBuf::from("/tmp/a.md"),
            }
        );
    }

    #[test]
    fn test_aborted_outcome_wire_shape() {
        let reply = ShellReply::Outcome(WorkflowOutcome::Aborted {
            message: "Dialog error: no display".to_string(),
        });
        assert_eq!(
            serde_json::to_value(&reply).unwrap(),
            json!({
                "type": "Outcome",
                "data": {"type": "Aborted", "data": {"message": "Dialog error: no display"}}
            })
        );
    }

    #[test]
    fn test_only_dirty_query_bypasses_workflow_queue() {
        assert!(!ShellRequest::QueryHasChanges { content: String::new() }.is_workflow());
        assert!(ShellRequest::RequestOpen.is_workflow());
        assert!(ShellRequest::RevealInFileManager.is_workflow());
    }
}
