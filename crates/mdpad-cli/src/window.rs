//! Terminal window chrome: the REPL prompt plays the title bar.

use mdpad_core::WindowDecorations;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

#[derive(Debug, Default)]
struct Chrome {
    title: String,
    represented: Option<PathBuf>,
    edited: bool,
}

#[derive(Debug)]
pub struct TerminalWindow {
    chrome: Mutex<Chrome>,
}

impl TerminalWindow {
    pub fn new(app_name: &str) -> Self {
        Self {
            chrome: Mutex::new(Chrome {
                title: format!("Untitled - {}", app_name),
                ..Chrome::default()
            }),
        }
    }

    /// `"a.md - mdpad* >> "`; the asterisk marks unsaved changes.
    pub fn prompt(&self) -> String {
        match self.chrome.lock() {
            Ok(chrome) => format!("{}{} >> ", chrome.title, if chrome.edited { "*" } else { "" }),
            Err(_) => ">> ".to_string(),
        }
    }

    pub fn represented_path(&self) -> Option<PathBuf> {
        self.chrome.lock().ok().and_then(|c| c.represented.clone())
    }
}

impl WindowDecorations for TerminalWindow {
    fn set_title(&self, title: &str) {
        if let Ok(mut chrome) = self.chrome.lock() {
            chrome.title = title.to_string();
        }
    }

    fn set_represented_path(&self, path: &Path) {
        if let Ok(mut chrome) = self.chrome.lock() {
            chrome.represented = Some(path.to_path_buf());
        }
    }

    fn set_document_edited(&self, edited: bool) {
        if let Ok(mut chrome) = self.chrome.lock() {
            chrome.edited = edited;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_reflects_title_and_edited_state() {
        let window = TerminalWindow::new("mdpad");
        assert_eq!(window.prompt(), "Untitled - mdpad >> ");

        window.set_title("a.md - mdpad");
        window.set_document_edited(true);
        assert_eq!(window.prompt(), "a.md - mdpad* >> ");
    }
}
