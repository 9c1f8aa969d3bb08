//! Platform implementation of the environment operations.

use crate::recent_documents::RecentDocuments;
use async_trait::async_trait;
use mdpad_core::{Environment, Result, ShellError};
use std::ffi::OsStr;
use std::path::Path;
use std::sync::Arc;
use tokio::process::Command;
use tokio::task::JoinHandle;

/// Reveals and opens files with the platform's own tools and records recent
/// documents in `recent.toml`.
pub struct SystemEnvironment {
    recent: Arc<RecentDocuments>,
}

impl SystemEnvironment {
    pub fn new(recent: Arc<RecentDocuments>) -> Self {
        Self { recent }
    }

    pub fn recent_documents(&self) -> &Arc<RecentDocuments> {
        &self.recent
    }
}

/// Starts `program` without waiting for it. A background task reaps the
/// child when it exits.
fn spawn_detached(program: &str, args: &[&OsStr]) -> Result<JoinHandle<()>> {
    let mut child = Command::new(program)
        .args(args)
        .spawn()
        .map_err(|e| ShellError::Environment(format!("Failed to run {}: {}", program, e)))?;

    let program = program.to_string();
    Ok(tokio::spawn(async move {
        match child.wait().await {
            Ok(status) if status.success() => {}
            Ok(status) => tracing::warn!("[Environment] {} exited with {}", program, status),
            Err(e) => tracing::warn!("[Environment] Failed to wait for {}: {}", program, e),
        }
    }))
}

fn spawn(program: &str, args: &[&OsStr]) -> Result<()> {
    spawn_detached(program, args).map(|_| ())
}

#[async_trait]
impl Environment for SystemEnvironment {
    async fn reveal_in_file_manager(&self, path: &Path) -> Result<()> {
        tracing::debug!("[Environment] Revealing {:?}", path);

        #[cfg(target_os = "macos")]
        {
            spawn("open", &["-R".as_ref(), path.as_os_str()])
        }

        #[cfg(target_os = "windows")]
        {
            let select = format!("/select,{}", path.display());
            spawn("explorer", &[select.as_ref()])
        }

        #[cfg(not(any(target_os = "macos", target_os = "windows")))]
        {
            // xdg-open has no "select"; open the containing folder instead
            let folder = path.parent().unwrap_or(path);
            spawn("xdg-open", &[folder.as_os_str()])
        }
    }

    async fn open_with_default_application(&self, path: &Path) -> Result<()> {
        tracing::debug!("[Environment] Opening {:?} externally", path);

        #[cfg(target_os = "macos")]
        {
            spawn("open", &[path.as_os_str()])
        }

        #[cfg(target_os = "windows")]
        {
            spawn(
                "cmd",
                &["/C".as_ref(), "start".as_ref(), "".as_ref(), path.as_os_str()],
            )
        }

        #[cfg(not(any(target_os = "macos", target_os = "windows")))]
        {
            spawn("xdg-open", &[path.as_os_str()])
        }
    }

    async fn add_recent_document(&self, path: &Path) -> Result<()> {
        let recent = Arc::clone(&self.recent);
        let path = path.to_path_buf();
        tokio::task::spawn_blocking(move || recent.add(&path))
            .await
            .map_err(|e| ShellError::internal(format!("Recent documents task failed: {}", e)))?
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_add_recent_document_persists() {
        let temp_dir = TempDir::new().unwrap();
        let recent = Arc::new(RecentDocuments::new(temp_dir.path().join("recent.toml"), 5));
        let environment = SystemEnvironment::new(recent.clone());

        environment
            .add_recent_document(Path::new("/tmp/a.md"))
            .await
            .unwrap();

        let listed = recent.list().unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].path, Path::new("/tmp/a.md"));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_detached_child_is_reaped() {
        let waiter = spawn_detached("true", &[]).unwrap();
        waiter.await.unwrap();
    }

    #[tokio::test]
    async fn test_missing_program_is_an_environment_error() {
        let err = spawn("mdpad-no-such-program", &[]).unwrap_err();
        assert!(matches!(err, ShellError::Environment(_)));
    }
}
