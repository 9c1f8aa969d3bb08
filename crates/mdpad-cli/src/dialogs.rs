//! Terminal stand-ins for the native file dialogs.

use async_trait::async_trait;
use colored::Colorize;
use mdpad_core::{DialogService, FileFilter, Result, ShellError};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

/// Prompts for a path on stdin. An empty answer cancels.
///
/// The REPL waits for each workflow to finish before reading its next line,
/// so these prompts never compete with the line editor for the terminal.
#[derive(Debug, Clone, Default)]
pub struct TerminalDialogs;

impl TerminalDialogs {
    pub fn new() -> Self {
        Self
    }

    async fn prompt(&self, title: &str, filter: &FileFilter) -> Result<Option<PathBuf>> {
        let label = format!(
            "{} [{}: {}] (empty to cancel): ",
            title,
            filter.name,
            filter.extensions.join(", ")
        );

        let answer = tokio::task::spawn_blocking(move || -> io::Result<String> {
            let mut stdout = io::stdout();
            write!(stdout, "{}", label.bright_yellow())?;
            stdout.flush()?;

            let mut line = String::new();
            io::stdin().lock().read_line(&mut line)?;
            Ok(line)
        })
        .await
        .map_err(|e| ShellError::Dialog(format!("Prompt task failed: {}", e)))?
        .map_err(|e| ShellError::Dialog(e.to_string()))?;

        Ok(resolve_answer(&answer))
    }
}

/// Turns a typed answer into a path; blank means cancelled, `~/` expands to
/// the home directory.
fn resolve_answer(answer: &str) -> Option<PathBuf> {
    let trimmed = answer.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Some(rest) = trimmed.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return Some(home.join(rest));
    }
    Some(PathBuf::from(trimmed))
}

#[async_trait]
impl DialogService for TerminalDialogs {
    async fn choose_file_for_open(&self, filter: &FileFilter) -> Result<Option<PathBuf>> {
        self.prompt("Open", filter).await
    }

    async fn choose_file_for_save(
        &self,
        title: &str,
        filter: &FileFilter,
    ) -> Result<Option<PathBuf>> {
        self.prompt(title, filter).await
    }
}
