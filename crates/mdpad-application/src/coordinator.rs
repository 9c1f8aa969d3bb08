//! Persistence coordinator.
//!
//! Owns one window's [`DocumentSession`] and runs the open, save, save-as and
//! export workflows against the dialog service and document storage.
//!
//! # Serialization
//!
//! Workflows for a session run one at a time. Each workflow holds the
//! session's workflow gate (a fair `tokio::sync::Mutex`) from its first dialog
//! prompt until its last side effect, so a second workflow requested while the
//! first is in flight queues behind it instead of interleaving with it. The
//! dirty query does not take the gate; it reads the last committed session.

use mdpad_core::document::{DocumentSession, WorkflowFailure, WorkflowOutcome};
use mdpad_core::window::document_title;
use mdpad_core::{
    DialogService, DocumentStorage, Environment, NoopEnvironment, Result, ShellConfig, ShellError,
    ShellEvent, WindowDecorations, WindowId,
};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::mpsc::UnboundedSender;
use tokio::sync::{Mutex, RwLock};

const SAVE_DIALOG_TITLE: &str = "Save Markdown";
const EXPORT_DIALOG_TITLE: &str = "Export HTML";

pub struct PersistenceCoordinator {
    window_id: WindowId,
    config: ShellConfig,
    /// The session store. Only `bind_session` writes to it.
    session: RwLock<DocumentSession>,
    workflow_gate: Mutex<()>,
    dialogs: Arc<dyn DialogService>,
    storage: Arc<dyn DocumentStorage>,
    environment: Arc<dyn Environment>,
    window: Option<Arc<dyn WindowDecorations>>,
    event_sender: Option<UnboundedSender<ShellEvent>>,
}

impl PersistenceCoordinator {
    /// Creates a coordinator for a fresh, unbound session.
    pub fn new(
        config: ShellConfig,
        dialogs: Arc<dyn DialogService>,
        storage: Arc<dyn DocumentStorage>,
    ) -> Self {
        Self {
            window_id: WindowId::new(),
            config,
            session: RwLock::new(DocumentSession::new()),
            workflow_gate: Mutex::new(()),
            dialogs,
            storage,
            environment: Arc::new(NoopEnvironment),
            window: None,
            event_sender: None,
        }
    }

    pub fn with_environment(mut self, environment: Arc<dyn Environment>) -> Self {
        self.environment = environment;
        self
    }

    pub fn with_window(mut self, window: Arc<dyn WindowDecorations>) -> Self {
        self.window = Some(window);
        self
    }

    /// Events (`FileOpened`, `Saved`, ...) are pushed here as workflows finish.
    pub fn with_event_sender(mut self, sender: UnboundedSender<ShellEvent>) -> Self {
        self.event_sender = Some(sender);
        self
    }

    pub fn window_id(&self) -> WindowId {
        self.window_id
    }

    pub fn config(&self) -> &ShellConfig {
        &self.config
    }

    // ============================================================================
    // Session store access
    // ============================================================================

    pub async fn bound_path(&self) -> Option<PathBuf> {
        self.session.read().await.bound_path().map(Path::to_path_buf)
    }

    pub async fn persisted_snapshot(&self) -> String {
        self.session.read().await.persisted_snapshot().to_string()
    }

    /// A copy of the current session, for inspection.
    pub async fn session(&self) -> DocumentSession {
        self.session.read().await.clone()
    }

    // ============================================================================
    // Workflows
    // ============================================================================

    /// Prompts for a document and opens it.
    pub async fn open(&self) -> Result<WorkflowOutcome> {
        let _gate = self.workflow_gate.lock().await;

        let chosen = self
            .dialogs
            .choose_file_for_open(&self.config.document)
            .await
            .map_err(|e| self.fail(e))?;
        let Some(path) = chosen else {
            tracing::debug!("[Coordinator] {} open cancelled", self.window_id);
            return Ok(WorkflowOutcome::Cancelled);
        };

        self.read_and_bind(path).await
    }

    /// Opens `path` without prompting (OS "open with", argv, recent list).
    pub async fn open_path(&self, path: impl Into<PathBuf>) -> Result<WorkflowOutcome> {
        let _gate = self.workflow_gate.lock().await;
        self.read_and_bind(path.into()).await
    }

    /// Saves `content` to the bound path, prompting for one if unbound.
    pub async fn save(&self, content: &str) -> Result<WorkflowOutcome> {
        let _gate = self.workflow_gate.lock().await;

        let target = match self.bound_path().await {
            Some(path) => path,
            None => match self.choose_save_target().await? {
                Some(path) => path,
                None => return Ok(WorkflowOutcome::Cancelled),
            },
        };

        self.write_and_bind(target, content).await
    }

    /// Prompts for a new target even when bound, then saves and rebinds.
    pub async fn save_as(&self, content: &str) -> Result<WorkflowOutcome> {
        let _gate = self.workflow_gate.lock().await;

        let Some(target) = self.choose_save_target().await? else {
            return Ok(WorkflowOutcome::Cancelled);
        };

        self.write_and_bind(target, content).await
    }

    /// Writes `rendered` to a freshly chosen path.
    ///
    /// Never consults or changes the session binding.
    pub async fn export_html(&self, rendered: &str) -> Result<WorkflowOutcome> {
        let _gate = self.workflow_gate.lock().await;

        let chosen = self
            .dialogs
            .choose_file_for_save(EXPORT_DIALOG_TITLE, &self.config.export)
            .await
            .map_err(|e| self.fail(e))?;
        let Some(target) = chosen else {
            tracing::debug!("[Coordinator] {} export cancelled", self.window_id);
            return Ok(WorkflowOutcome::Cancelled);
        };

        if let Err(e) = self.storage.write(&target, rendered).await {
            return Err(self.fail(ShellError::export_failed(&target, e.to_string())));
        }

        tracing::info!(
            "[Coordinator] {} exported {} bytes to {:?}",
            self.window_id,
            rendered.len(),
            target
        );
        self.emit(ShellEvent::Exported {
            path: target.clone(),
        });
        Ok(WorkflowOutcome::Completed { path: target })
    }

    /// Returns true if `content` differs from the persisted snapshot, and
    /// mirrors the answer in the window's "edited" decoration.
    pub async fn check_dirty(&self, content: &str) -> bool {
        let dirty = self.session.read().await.is_dirty(content);
        if let Some(window) = &self.window {
            window.set_document_edited(dirty);
        }
        dirty
    }

    pub async fn reveal_in_file_manager(&self) -> WorkflowOutcome {
        let _gate = self.workflow_gate.lock().await;
        let Some(path) = self.bound_path().await else {
            return WorkflowOutcome::Ignored;
        };

        if let Err(e) = self.environment.reveal_in_file_manager(&path).await {
            tracing::warn!("[Coordinator] Failed to reveal {:?}: {}", path, e);
        }
        WorkflowOutcome::Completed { path }
    }

    pub async fn open_externally(&self) -> WorkflowOutcome {
        let _gate = self.workflow_gate.lock().await;
        let Some(path) = self.bound_path().await else {
            return WorkflowOutcome::Ignored;
        };

        if let Err(e) = self.environment.open_with_default_application(&path).await {
            tracing::warn!("[Coordinator] Failed to open {:?} externally: {}", path, e);
        }
        WorkflowOutcome::Completed { path }
    }

    // ============================================================================
    // Internals (caller holds the workflow gate)
    // ============================================================================

    async fn choose_save_target(&self) -> Result<Option<PathBuf>> {
        let chosen = self
            .dialogs
            .choose_file_for_save(SAVE_DIALOG_TITLE, &self.config.document)
            .await
            .map_err(|e| self.fail(e))?;
        if chosen.is_none() {
            tracing::debug!("[Coordinator] {} save cancelled", self.window_id);
        }
        Ok(chosen)
    }

    async fn read_and_bind(&self, path: PathBuf) -> Result<WorkflowOutcome> {
        let content = match self.storage.read(&path).await {
            Ok(content) => content,
            Err(e) => return Err(self.fail(ShellError::open_failed(&path, e.to_string()))),
        };

        self.bind_session(&path, &content).await;
        tracing::info!(
            "[Coordinator] {} opened {:?} ({} bytes)",
            self.window_id,
            path,
            content.len()
        );

        self.emit(ShellEvent::FileOpened {
            content,
            path: path.clone(),
        });
        Ok(WorkflowOutcome::Completed { path })
    }

    async fn write_and_bind(&self, path: PathBuf, content: &str) -> Result<WorkflowOutcome> {
        if let Err(e) = self.storage.write(&path, content).await {
            return Err(self.fail(ShellError::save_failed(&path, e.to_string())));
        }

        self.bind_session(&path, content).await;
        tracing::info!(
            "[Coordinator] {} saved {:?} ({} bytes)",
            self.window_id,
            path,
            content.len()
        );

        self.emit(ShellEvent::Saved { path: path.clone() });
        Ok(WorkflowOutcome::Completed { path })
    }

    /// Rebinds the session after a completed read or write, then updates the
    /// window chrome and recent documents.
    async fn bind_session(&self, path: &Path, content: &str) {
        self.session.write().await.bind(path, content);

        if let Some(window) = &self.window {
            window.set_title(&document_title(path, &self.config.app_name));
            window.set_represented_path(path);
            window.set_document_edited(false);
        }

        if let Err(e) = self.environment.add_recent_document(path).await {
            tracing::warn!("[Coordinator] Failed to record recent document {:?}: {}", path, e);
        }
    }

    /// Logs a workflow error and reports it on the event channel.
    fn fail(&self, err: ShellError) -> ShellError {
        tracing::error!("[Coordinator] {} {}", self.window_id, err);
        let event = match WorkflowFailure::from_error(&err) {
            Some(failure) => ShellEvent::WorkflowFailed(failure),
            None => ShellEvent::WorkflowAborted {
                message: err.to_string(),
            },
        };
        self.emit(event);
        err
    }

    fn emit(&self, event: ShellEvent) {
        if let Some(sender) = &self.event_sender
            && sender.send(event).is_err()
        {
            tracing::debug!("[Coordinator] {} event receiver dropped", self.window_id);
        }
    }
}
