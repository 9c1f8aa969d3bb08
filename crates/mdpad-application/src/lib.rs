//! Application layer for mdpad.
//!
//! Wires the document session to its collaborators and to the display
//! surface:
//!
//! - `coordinator`: open/save/save-as/export workflows over one session
//! - `channel`: message passing between the display surface and the coordinator
//! - `buffer_host`: the display-surface side holding the live buffer

pub mod buffer_host;
pub mod channel;
pub mod coordinator;


pub use buffer_host::{Affordances, BufferHost};
pub use channel::{CoordinatorActor, ShellClient, connect, dispatch};
pub use coordinator::PersistenceCoordinator;
