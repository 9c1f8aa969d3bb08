//! Document domain module.
//!
//! # Module Structure
//!
//! - `model`: The per-window session store (`DocumentSession`, `SessionState`)
//! - `outcome`: Workflow results (`WorkflowOutcome`, `WorkflowFailure`, `FailureKind`)
//!
//! # Usage
//!
//! ```ignore
//! use mdpad_core::document::{DocumentSession, SessionState, WorkflowOutcome};
//! ```

mod model;
mod outcome;

// Re-export public API
pub use model::{DocumentSession, SessionState};
pub use outcome::{FailureKind, WorkflowFailure, WorkflowOutcome};
