//! REPL command parsing.

use std::path::PathBuf;

/// One line of REPL input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    /// `:open` prompts; `:open <path>` opens directly.
    Open(Option<PathBuf>),
    Save,
    SaveAs,
    Export,
    Reveal,
    External,
    /// `:recent` lists; `:recent <n>` opens entry `n` (1-based).
    Recent(Option<usize>),
    Show,
    Html,
    Status,
    Clear,
    Help,
    /// `force` is set by `:quit!`.
    Quit { force: bool },
    /// A line of text appended to the buffer.
    Append(String),
    Unknown(String),
}

impl ReplCommand {
    pub fn parse(line: &str) -> Self {
        let Some(command) = line.strip_prefix(':') else {
            return Self::Append(line.to_string());
        };
        // `::` escapes a literal leading colon
        if command.starts_with(':') {
            return Self::Append(command.to_string());
        }

        let (name, arg) = match command.trim().split_once(char::is_whitespace) {
            Some((name, arg)) => (name, Some(arg.trim()).filter(|a| !a.is_empty())),
            None => (command.trim(), None),
        };

        match (name, arg) {
            ("open" | "o", path) => Self::Open(path.map(PathBuf::from)),
            ("save" | "w", None) => Self::Save,
            ("saveas", None) => Self::SaveAs,
            ("export", None) => Self::Export,
            ("reveal", None) => Self::Reveal,
            ("external", None) => Self::External,
            ("recent", None) => Self::Recent(None),
            ("recent", Some(n)) => match n.parse::<usize>() {
                Ok(index) if index > 0 => Self::Recent(Some(index)),
                _ => Self::Unknown(line.to_string()),
            },
            ("show", None) => Self::Show,
            ("html", None) => Self::Html,
            ("status", None) => Self::Status,
            ("clear", None) => Self::Clear,
            ("help" | "h", None) => Self::Help,
            ("quit" | "q", None) => Self::Quit { force: false },
            ("quit!" | "q!", None) => Self::Quit { force: true },
            _ => Self::Unknown(line.to_string()),
        }
    }
}

pub const HELP: &str = "\
Lines without a leading ':' are appended to the document.
  :open [path]   open a document (prompts when no path is given)
  :save          save to the bound file (prompts when untitled)
  :saveas        save to a new file
  :export        export the rendered HTML
  :reveal        show the file in the file manager
  :external      open the file with its default application
  :recent [n]    list recent documents, or open entry n
  :show | :html  print the source | the rendered output
  :status        bound file and unsaved state
  :clear         empty the buffer
  :quit[!]       exit (! discards unsaved changes)
  ::text         append a line starting with ':'";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_is_appended() {
        assert_eq!(ReplCommand::parse("# Hi"), ReplCommand::Append("# Hi".to_string()));
    }

    #[test]
    fn test_double_colon_escapes() {
        assert_eq!(
            ReplCommand::parse("::not a command"),
            ReplCommand::Append(":not a command".to_string())
        );
    }

    #[test]
    fn test_open_with_and_without_path() {
        assert_eq!(ReplCommand::parse(":open"), ReplCommand::Open(None));
        assert_eq!(
            ReplCommand::parse(":open  /tmp/my notes.md "),
            ReplCommand::Open(Some(PathBuf::from("/tmp/my notes.md")))
        );
    }

    #[test]
    fn test_recent_index_must_be_positive() {
        assert_eq!(ReplCommand::parse(":recent"), ReplCommand::Recent(None));
        assert_eq!(ReplCommand::parse(":recent 2"), ReplCommand::Recent(Some(2)));
        assert!(matches!(ReplCommand::parse(":recent 0"), ReplCommand::Unknown(_)));
    }

    #[test]
    fn test_quit_variants() {
        assert_eq!(ReplCommand::parse(":q"), ReplCommand::Quit { force: false });
        assert_eq!(ReplCommand::parse(":quit!"), ReplCommand::Quit { force: true });
    }

    #[test]
    fn test_unexpected_argument_is_unknown() {
        assert!(matches!(ReplCommand::parse(":save now"), ReplCommand::Unknown(_)));
    }
}
