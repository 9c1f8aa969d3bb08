//! Infrastructure layer for mdpad.
//!
//! Concrete implementations of the collaborator traits defined in
//! `mdpad-core`: filesystem storage, platform environment integration,
//! configuration loading, and rendering.

pub mod config_service;
pub mod html_renderer;
pub mod paths;
pub mod recent_documents;
pub mod storage;
pub mod system_environment;

pub use crate::config_service::ConfigService;
pub use crate::html_renderer::PreformattedHtmlRenderer;
pub use crate::paths::MdpadPaths;
pub use crate::recent_documents::{RecentDocument, RecentDocuments};
pub use crate::storage::{AtomicTomlFile, FsDocumentStorage};
pub use crate::system_environment::SystemEnvironment;
