//! Display-surface side of the shell.
//!
//! The buffer host owns the live, possibly unsaved text and its rendered
//! form. It never sees the persisted snapshot: whether the buffer is dirty is
//! always asked of the coordinator over the channel.

use crate::channel::ShellClient;
use mdpad_core::document::WorkflowOutcome;
use mdpad_core::{Renderer, Result, ShellEvent, ShellRequest};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::mpsc::UnboundedReceiver;
use tokio::sync::mpsc::error::TryRecvError;

/// Enabled state of the UI controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Affordances {
    pub save: bool,
    pub export: bool,
    /// Reveal-in-file-manager; needs a bound file.
    pub reveal: bool,
    /// Open-with-default-application; needs a bound file.
    pub open_externally: bool,
}

impl Default for Affordances {
    fn default() -> Self {
        Self {
            save: false,
            export: true,
            reveal: false,
            open_externally: false,
        }
    }
}

pub struct BufferHost {
    client: ShellClient,
    events: UnboundedReceiver<ShellEvent>,
    renderer: Arc<dyn Renderer>,
    buffer: String,
    rendered: String,
    /// Last path reported by `FileOpened` or `Saved`; display only.
    document_path: Option<PathBuf>,
    affordances: Affordances,
}

impl BufferHost {
    pub fn new(
        client: ShellClient,
        events: UnboundedReceiver<ShellEvent>,
        renderer: Arc<dyn Renderer>,
    ) -> Self {
        let rendered = renderer.render("");
        Self {
            client,
            events,
            renderer,
            buffer: String::new(),
            rendered,
            document_path: None,
            affordances: Affordances::default(),
        }
    }

    pub fn content(&self) -> &str {
        &self.buffer
    }

    pub fn rendered(&self) -> &str {
        &self.rendered
    }

    pub fn document_path(&self) -> Option<&Path> {
        self.document_path.as_deref()
    }

    pub fn affordances(&self) -> Affordances {
        self.affordances
    }

    pub fn client(&self) -> &ShellClient {
        &self.client
    }

    /// Replaces the buffer after a local edit.
    ///
    /// Re-renders immediately, then asks the coordinator whether the new
    /// content is unsaved. Returns the dirty state.
    pub async fn edit(&mut self, content: impl Into<String>) -> Result<bool> {
        self.buffer = content.into();
        self.rendered = self.renderer.render(&self.buffer);
        self.refresh_dirty().await
    }

    /// Re-queries dirty state and updates the save affordance.
    pub async fn refresh_dirty(&mut self) -> Result<bool> {
        let dirty = self.client.has_changes(self.buffer.clone()).await?;
        self.affordances.save = dirty;
        Ok(dirty)
    }

    /// Applies one pushed event.
    pub async fn apply_event(&mut self, event: &ShellEvent) -> Result<()> {
        match event {
            ShellEvent::FileOpened { content, path } => {
                self.buffer = content.clone();
                self.rendered = self.renderer.render(&self.buffer);
                self.bind_affordances(path);
                self.affordances.save = false;
            }
            ShellEvent::Saved { path } => {
                self.bind_affordances(path);
                // The buffer may have moved on while the save was in flight
                self.refresh_dirty().await?;
            }
            ShellEvent::Exported { .. }
            | ShellEvent::WorkflowFailed(_)
            | ShellEvent::WorkflowAborted { .. } => {}
        }
        Ok(())
    }

    /// Applies every event already waiting, returning them in order.
    pub async fn pump(&mut self) -> Result<Vec<ShellEvent>> {
        let mut applied = Vec::new();
        loop {
            match self.events.try_recv() {
                Ok(event) => {
                    self.apply_event(&event).await?;
                    applied.push(event);
                }
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            }
        }
        Ok(applied)
    }

    /// Waits for the next event and applies it. `None` once the coordinator
    /// is gone.
    pub async fn next_event(&mut self) -> Result<Option<ShellEvent>> {
        let Some(event) = self.events.recv().await else {
            return Ok(None);
        };
        self.apply_event(&event).await?;
        Ok(Some(event))
    }

    // ============================================================================
    // Intents
    // ============================================================================

    pub async fn open(&mut self) -> Result<WorkflowOutcome> {
        self.run(ShellRequest::RequestOpen).await
    }

    pub async fn open_path(&mut self, path: impl Into<PathBuf>) -> Result<WorkflowOutcome> {
        self.run(ShellRequest::OpenPath { path: path.into() }).await
    }

    pub async fn save(&mut self) -> Result<WorkflowOutcome> {
        let content = self.buffer.clone();
        self.run(ShellRequest::RequestSave { content }).await
    }

    pub async fn save_as(&mut self) -> Result<WorkflowOutcome> {
        let content = self.buffer.clone();
        self.run(ShellRequest::RequestSaveAs { content }).await
    }

    /// Exports the rendered output, never the source.
    pub async fn export_html(&mut self) -> Result<WorkflowOutcome> {
        let rendered_html = self.rendered.clone();
        self.run(ShellRequest::RequestExportHtml { rendered_html }).await
    }

    pub async fn reveal_in_file_manager(&mut self) -> Result<WorkflowOutcome> {
        self.run(ShellRequest::RevealInFileManager).await
    }

    pub async fn open_externally(&mut self) -> Result<WorkflowOutcome> {
        self.run(ShellRequest::OpenExternally).await
    }

    /// Runs a workflow and applies the events it produced.
    ///
    /// The coordinator pushes a workflow's events before replying, so they
    /// are already queued when the reply arrives.
    async fn run(&mut self, request: ShellRequest) -> Result<WorkflowOutcome> {
        let outcome = self.client.run(request).await?;
        self.pump().await?;
        Ok(outcome)
    }

    fn bind_affordances(&mut self, path: &Path) {
        self.document_path = Some(path.to_path_buf());
        self.affordances.reveal = true;
        self.affordances.open_externally = true;
    }
}
