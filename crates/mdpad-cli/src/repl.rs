//! The REPL: a terminal display surface for one document window.

use crate::command::{HELP, ReplCommand};
use crate::window::TerminalWindow;
use anyhow::Result;
use colored::Colorize;
use mdpad_application::BufferHost;
use mdpad_core::document::WorkflowOutcome;
use mdpad_core::ShellEvent;
use mdpad_infrastructure::RecentDocuments;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use std::path::PathBuf;
use std::sync::Arc;

pub struct Repl {
    host: BufferHost,
    window: Arc<TerminalWindow>,
    recent: Arc<RecentDocuments>,
    editor: DefaultEditor,
    quit_warned: bool,
}

impl Repl {
    pub fn new(
        host: BufferHost,
        window: Arc<TerminalWindow>,
        recent: Arc<RecentDocuments>,
    ) -> Result<Self> {
        Ok(Self {
            host,
            window,
            recent,
            editor: DefaultEditor::new()?,
            quit_warned: false,
        })
    }

    /// Opens the file named on the command line before the first prompt.
    pub async fn open_initial(&mut self, path: PathBuf) -> Result<()> {
        self.execute(ReplCommand::Open(Some(path))).await?;
        Ok(())
    }

    pub async fn run(mut self) -> Result<()> {
        println!("{}", "=== mdpad ===".bright_magenta().bold());
        println!("{}", "Type text to append, ':help' for commands.".bright_black());
        println!();

        loop {
            // Events the environment pushed while we were idle
            for event in self.host.pump().await? {
                print_event(&event);
            }

            let line = match self.editor.readline(&self.window.prompt()) {
                Ok(line) => line,
                Err(ReadlineError::Interrupted) => {
                    println!("{}", "CTRL-C detected. Type ':quit' to exit.".yellow());
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!("{}", "CTRL-D detected. Exiting...".bright_green());
                    break;
                }
                Err(err) => {
                    eprintln!("{}", format!("Error: {:?}", err).red());
                    break;
                }
            };

            let command = ReplCommand::parse(&line);
            if !matches!(command, ReplCommand::Append(_)) {
                let _ = self.editor.add_history_entry(&line);
            }
            if !matches!(command, ReplCommand::Quit { .. }) {
                self.quit_warned = false;
            }

            if !self.execute(command).await? {
                break;
            }
        }

        Ok(())
    }

    /// Runs one command. Returns `false` when the REPL should exit.
    async fn execute(&mut self, command: ReplCommand) -> Result<bool> {
        match command {
            ReplCommand::Append(text) => {
                let mut content = self.host.content().to_string();
                content.push_str(&text);
                content.push('\n');
                self.host.edit(content).await?;
            }
            ReplCommand::Open(None) => {
                let outcome = self.host.open().await?;
                self.report("Opened", &outcome);
            }
            ReplCommand::Open(Some(path)) => {
                let outcome = self.host.open_path(path).await?;
                self.report("Opened", &outcome);
            }
            ReplCommand::Save => {
                let outcome = self.host.save().await?;
                self.report("Saved", &outcome);
            }
            ReplCommand::SaveAs => {
                let outcome = self.host.save_as().await?;
                self.report("Saved", &outcome);
            }
            ReplCommand::Export => {
                let outcome = self.host.export_html().await?;
                self.report("Exported", &outcome);
            }
            ReplCommand::Reveal => {
                let outcome = self.host.reveal_in_file_manager().await?;
                self.report("Revealed", &outcome);
            }
            ReplCommand::External => {
                let outcome = self.host.open_externally().await?;
                self.report("Opened externally", &outcome);
            }
            ReplCommand::Recent(index) => self.recent(index).await?,
            ReplCommand::Show => print!("{}", self.host.content()),
            ReplCommand::Html => println!("{}", self.host.rendered()),
            ReplCommand::Status => self.status().await?,
            ReplCommand::Clear => {
                self.host.edit(String::new()).await?;
            }
            ReplCommand::Help => println!("{}", HELP.bright_black()),
            ReplCommand::Quit { force } => {
                let dirty = self.host.refresh_dirty().await?;
                if dirty && !force && !self.quit_warned {
                    println!(
                        "{}",
                        "Unsaved changes. ':save' first, or ':quit' again (':quit!') to discard."
                            .yellow()
                    );
                    self.quit_warned = true;
                    return Ok(true);
                }
                println!("{}", "Goodbye!".bright_green());
                return Ok(false);
            }
            ReplCommand::Unknown(line) => {
                println!("{}", format!("Unknown command: {}", line).bright_black());
            }
        }
        Ok(true)
    }

    async fn recent(&mut self, index: Option<usize>) -> Result<()> {
        let documents = self.recent.list()?;

        let Some(index) = index else {
            if documents.is_empty() {
                println!("{}", "No recent documents".bright_black());
            }
            for (i, doc) in documents.iter().enumerate() {
                println!("  {} {}", format!("{:>2}.", i + 1).cyan(), doc.path.display());
            }
            return Ok(());
        };

        match documents.get(index - 1) {
            Some(doc) => {
                let outcome = self.host.open_path(doc.path.clone()).await?;
                self.report("Opened", &outcome);
            }
            None => println!("{}", format!("No recent document #{}", index).bright_black()),
        }
        Ok(())
    }

    async fn status(&mut self) -> Result<()> {
        let dirty = self.host.refresh_dirty().await?;
        let path = self
            .window
            .represented_path()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "(untitled)".to_string());
        let affordances = self.host.affordances();

        println!("  file:     {}", path.cyan());
        println!("  unsaved:  {}", if dirty { "yes".yellow() } else { "no".green() });
        println!(
            "  bytes:    {} source, {} rendered",
            self.host.content().len(),
            self.host.rendered().len()
        );
        println!(
            "  actions:  save={} export={} reveal={} external={}",
            affordances.save, affordances.export, affordances.reveal, affordances.open_externally
        );
        Ok(())
    }

    fn report(&self, verb: &str, outcome: &WorkflowOutcome) {
        match outcome {
            WorkflowOutcome::Completed { path } => {
                println!("{}", format!("{} {}", verb, path.display()).green());
            }
            // A dismissed dialog is not worth a message
            WorkflowOutcome::Cancelled => {}
            WorkflowOutcome::Failed(failure) => {
                eprintln!("{}", failure.to_string().red());
            }
            WorkflowOutcome::Ignored => {
                println!("{}", "No file is open".bright_black());
            }
            WorkflowOutcome::Aborted { message } => {
                eprintln!("{}", message.red());
            }
        }
    }
}

fn print_event(event: &ShellEvent) {
    match event {
        ShellEvent::FileOpened { path, .. } => {
            println!("{}", format!("Opened {}", path.display()).green());
        }
        ShellEvent::Saved { path } => {
            println!("{}", format!("Saved {}", path.display()).green());
        }
        ShellEvent::Exported { path } => {
            println!("{}", format!("Exported {}", path.display()).green());
        }
        ShellEvent::WorkflowFailed(failure) => {
            eprintln!("{}", failure.to_string().red());
        }
        ShellEvent::WorkflowAborted { message } => {
            eprintln!("{}", message.red());
        }
    }
}
