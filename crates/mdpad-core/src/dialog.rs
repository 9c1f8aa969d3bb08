//! Native file dialog abstraction.

use crate::config::FileFilter;
use crate::error::Result;
use async_trait::async_trait;
use std::path::PathBuf;

/// Presents file choosers to the user.
///
/// Cancellation is `Ok(None)`, never an error. `Err` is reserved for a dialog
/// that could not be shown at all. Implementations must not time out: a
/// dialog runs until the user completes or dismisses it.
#[async_trait]
pub trait DialogService: Send + Sync {
    /// Asks the user for an existing file to open.
    async fn choose_file_for_open(&self, filter: &FileFilter) -> Result<Option<PathBuf>>;

    /// Asks the user for a target path to write to.
    ///
    /// # Arguments
    ///
    /// * `title` - Dialog title ("Save Markdown", "Export HTML")
    /// * `filter` - Offered file types
    async fn choose_file_for_save(&self, title: &str, filter: &FileFilter)
    -> Result<Option<PathBuf>>;
}
