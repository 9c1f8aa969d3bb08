//! Operating-environment integration.

use crate::error::Result;
use async_trait::async_trait;
use std::path::Path;

/// Side effects outside the document itself.
///
/// None of these are load-bearing for the session: a failure is logged by the
/// caller and the workflow carries on.
#[async_trait]
pub trait Environment: Send + Sync {
    /// Shows `path` selected in the platform file manager.
    async fn reveal_in_file_manager(&self, path: &Path) -> Result<()>;

    /// Opens `path` with the application registered for its type.
    async fn open_with_default_application(&self, path: &Path) -> Result<()>;

    /// Records `path` in the recent-documents list.
    async fn add_recent_document(&self, path: &Path) -> Result<()>;
}

/// An environment without any of these concepts.
#[derive(Debug, Clone, Default)]
pub struct NoopEnvironment;

#[async_trait]
impl Environment for NoopEnvironment {
    async fn reveal_in_file_manager(&self, _path: &Path) -> Result<()> {
        Ok(())
    }

    async fn open_with_default_application(&self, _path: &Path) -> Result<()> {
        Ok(())
    }

    async fn add_recent_document(&self, _path: &Path) -> Result<()> {
        Ok(())
    }
}
