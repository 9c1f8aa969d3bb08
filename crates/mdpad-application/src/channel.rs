//! Message channel between the display surface and the coordinator.
//!
//! The display surface holds a [`ShellClient`] and nothing else: it cannot
//! reach the session or storage except by sending a [`ShellRequest`]. The
//! [`CoordinatorActor`] runs on the privileged side, answers dirty queries
//! immediately, and feeds every other request into a single-flight workflow
//! queue so workflows for the session run strictly in arrival order.

use crate::coordinator::PersistenceCoordinator;
use mdpad_core::document::{WorkflowFailure, WorkflowOutcome};
use mdpad_core::{Result, ShellError, ShellReply, ShellRequest};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;

const REQUEST_BUFFER: usize = 32;

/// A request plus an optional reply slot.
struct Envelope {
    request: ShellRequest,
    reply: Option<oneshot::Sender<ShellReply>>,
}

/// Creates a connected client/actor pair for `coordinator`.
///
/// The actor does nothing until [`CoordinatorActor::spawn`] is called.
pub fn connect(coordinator: Arc<PersistenceCoordinator>) -> (ShellClient, CoordinatorActor) {
    let (sender, receiver) = mpsc::channel(REQUEST_BUFFER);
    (
        ShellClient { sender },
        CoordinatorActor {
            coordinator,
            receiver,
        },
    )
}

/// Runs a single request against the coordinator.
///
/// Workflow errors become `WorkflowOutcome::Failed`; the coordinator has
/// already pushed the matching `WorkflowFailed` event. Any other error (a
/// dialog that could not be shown) becomes `WorkflowOutcome::Aborted` with
/// the error text, matching the `WorkflowAborted` event. The session is
/// untouched either way.
pub async fn dispatch(coordinator: &PersistenceCoordinator, request: ShellRequest) -> ShellReply {
    let name = request.name();
    let result = match request {
        ShellRequest::QueryHasChanges { content } => {
            return ShellReply::HasChanges(coordinator.check_dirty(&content).await);
        }
        ShellRequest::RequestOpen => coordinator.open().await,
        ShellRequest::OpenPath { path } => coordinator.open_path(path).await,
        ShellRequest::RequestSave { content } => coordinator.save(&content).await,
        ShellRequest::RequestSaveAs { content } => coordinator.save_as(&content).await,
        ShellRequest::RequestExportHtml { rendered_html } => {
            coordinator.export_html(&rendered_html).await
        }
        ShellRequest::RevealInFileManager => Ok(coordinator.reveal_in_file_manager().await),
        ShellRequest::OpenExternally => Ok(coordinator.open_externally().await),
    };

    let outcome = match result {
        Ok(outcome) => outcome,
        Err(err) => match WorkflowFailure::from_error(&err) {
            Some(failure) => WorkflowOutcome::Failed(failure),
            None => {
                tracing::warn!("[Channel] {} request aborted: {}", name, err);
                WorkflowOutcome::Aborted {
                    message: err.to_string(),
                }
            }
        },
    };
    ShellReply::Outcome(outcome)
}

/// Privileged end of the channel.
pub struct CoordinatorActor {
    coordinator: Arc<PersistenceCoordinator>,
    receiver: mpsc::Receiver<Envelope>,
}

impl CoordinatorActor {
    /// Spawns the actor; it stops once every [`ShellClient`] is dropped and
    /// the queued workflows have drained.
    pub fn spawn(mut self) -> JoinHandle<()> {
        tokio::spawn(async move {
            let window_id = self.coordinator.window_id();
            tracing::debug!("[Channel] Actor started for window {}", window_id);

            let (work_tx, mut work_rx) = mpsc::unbounded_channel::<Envelope>();
            let worker_coordinator = Arc::clone(&self.coordinator);
            let worker = tokio::spawn(async move {
                while let Some(envelope) = work_rx.recv().await {
                    let reply = dispatch(&worker_coordinator, envelope.request).await;
                    if let Some(reply_tx) = envelope.reply {
                        let _ = reply_tx.send(reply);
                    }
                }
            });

            while let Some(envelope) = self.receiver.recv().await {
                if envelope.request.is_workflow() {
                    if work_tx.send(envelope).is_err() {
                        tracing::error!("[Channel] Workflow queue closed for window {}", window_id);
                        break;
                    }
                    continue;
                }

                let reply = dispatch(&self.coordinator, envelope.request).await;
                if let Some(reply_tx) = envelope.reply {
                    let _ = reply_tx.send(reply);
                }
            }

            drop(work_tx);
            let _ = worker.await;
            tracing::debug!("[Channel] Actor stopped for window {}", window_id);
        })
    }
}

/// Unprivileged end of the channel. Cheap to clone.
#[derive(Clone)]
pub struct ShellClient {
    sender: mpsc::Sender<Envelope>,
}

impl ShellClient {
    /// Sends `request` and waits for its reply.
    pub async fn call(&self, request: ShellRequest) -> Result<ShellReply> {
        let name = request.name();
        let (reply_tx, reply_rx) = oneshot::channel();
        self.sender
            .send(Envelope {
                request,
                reply: Some(reply_tx),
            })
            .await
            .map_err(|_| ShellError::ChannelClosed(format!("{} request not delivered", name)))?;

        reply_rx
            .await
            .map_err(|_| ShellError::ChannelClosed(format!("{} reply dropped", name)))
    }

    /// Sends `request` without waiting for a reply; results arrive as events.
    pub async fn post(&self, request: ShellRequest) -> Result<()> {
        let name = request.name();
        self.sender
            .send(Envelope {
                request,
                reply: None,
            })
            .await
            .map_err(|_| ShellError::ChannelClosed(format!("{} request not delivered", name)))
    }

    /// Sends a workflow request and waits for its outcome.
    pub async fn run(&self, request: ShellRequest) -> Result<WorkflowOutcome> {
        match self.call(request).await? {
            ShellReply::Outcome(outcome) => Ok(outcome),
            ShellReply::HasChanges(_) => Err(ShellError::internal(
                "dirty-state reply to a workflow request",
            )),
        }
    }

    pub async fn has_changes(&self, content: impl Into<String>) -> Result<bool> {
        match self
            .call(ShellRequest::QueryHasChanges {
                content: content.into(),
            })
            .await?
        {
            ShellReply::HasChanges(changed) => Ok(changed),
            ShellReply::Outcome(_) => Err(ShellError::internal(
                "workflow reply to a dirty-state query",
            )),
        }
    }

    pub async fn request_open(&self) -> Result<()> {
        self.post(ShellRequest::RequestOpen).await
    }

    pub async fn open_path(&self, path: impl Into<PathBuf>) -> Result<()> {
        self.post(ShellRequest::OpenPath { path: path.into() }).await
    }

    pub async fn save(&self, content: impl Into<String>) -> Result<()> {
        self.post(ShellRequest::RequestSave {
            content: content.into(),
        })
        .await
    }

    pub async fn export_html(&self, rendered_html: impl Into<String>) -> Result<()> {
        self.post(ShellRequest::RequestExportHtml {
            rendered_html: rendered_html.into(),
        })
        .await
    }

    pub async fn reveal_in_file_manager(&self) -> Result<()> {
        self.post(ShellRequest::RevealInFileManager).await
    }

    pub async fn open_externally(&self) -> Result<()> {
        self.post(ShellRequest::OpenExternally).await
    }
}
