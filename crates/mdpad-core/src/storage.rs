//! Document storage abstraction.

use async_trait::async_trait;
use std::io;
use std::path::Path;

/// Reads and writes whole documents as UTF-8 text.
///
/// Errors are plain `io::Error`s; the coordinator decides whether a failure
/// is an `OpenFailed`, `SaveFailed` or `ExportFailed`.
#[async_trait]
pub trait DocumentStorage: Send + Sync {
    async fn read(&self, path: &Path) -> io::Result<String>;

    async fn write(&self, path: &Path, content: &str) -> io::Result<()>;
}
