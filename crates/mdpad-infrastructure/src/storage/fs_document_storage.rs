//! Filesystem-backed document storage.

use async_trait::async_trait;
use mdpad_core::DocumentStorage;
use std::io;
use std::path::Path;
use tokio::fs;

/// Reads and writes documents on the local filesystem with `tokio::fs`.
///
/// Content is UTF-8 in both directions; a file that is not valid UTF-8 fails
/// to read with `InvalidData`. Writes go straight to the target path, the
/// same way the user would expect any editor to overwrite the file.
#[derive(Debug, Clone, Default)]
pub struct FsDocumentStorage;

impl FsDocumentStorage {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl DocumentStorage for FsDocumentStorage {
    async fn read(&self, path: &Path) -> io::Result<String> {
        let content = fs::read_to_string(path).await?;
        tracing::debug!("[Storage] Read {} bytes from {:?}", content.len(), path);
        Ok(content)
    }

    async fn write(&self, path: &Path, content: &str) -> io::Result<()> {
        fs::write(path, content.as_bytes()).await?;
        tracing::debug!("[Storage] Wrote {} bytes to {:?}", content.len(), path);
        Ok(())
    }
}
