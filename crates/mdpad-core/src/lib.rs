//! Domain layer for mdpad.
//!
//! Holds the document session model, the message contract spoken across the
//! display-surface channel, and the traits for every external collaborator
//! (dialogs, storage, environment, rendering, window chrome).

pub mod config;
pub mod dialog;
pub mod document;
pub mod environment;
pub mod error;
pub mod message;
pub mod render;
pub mod storage;
pub mod window;

// Re-export common types
pub use config::{FileFilter, ShellConfig};
pub use dialog::DialogService;
pub use document::{DocumentSession, SessionState, WorkflowFailure, WorkflowOutcome};
pub use environment::{Environment, NoopEnvironment};
pub use error::{Result, ShellError};
pub use message::{ShellEvent, ShellReply, ShellRequest};
pub use render::Renderer;
pub use storage::DocumentStorage;
pub use window::{WindowDecorations, WindowId};
