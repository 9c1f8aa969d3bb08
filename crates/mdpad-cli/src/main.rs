use anyhow::{Context, Result};
use clap::Parser;
use mdpad_application::{BufferHost, PersistenceCoordinator, connect};
use mdpad_infrastructure::{
    ConfigService, FsDocumentStorage, MdpadPaths, PreformattedHtmlRenderer, RecentDocuments,
    SystemEnvironment,
};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::mpsc;

mod command;
mod dialogs;
mod logging;
mod repl;
mod window;

use dialogs::TerminalDialogs;
use repl::Repl;
use window::TerminalWindow;

#[derive(Parser)]
#[command(name = "mdpad")]
#[command(about = "mdpad - single-document markdown editor shell", long_about = None)]
struct Cli {
    /// Markdown file to open on start
    file: Option<PathBuf>,

    /// Config file (defaults to ~/.config/mdpad/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Tracing filter, e.g. `debug` or `mdpad_application=trace`
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_service = match cli.config {
        Some(path) => ConfigService::with_path(path),
        None => ConfigService::new().context("Failed to resolve config directory")?,
    };
    let config = config_service.get_config();

    let logs_dir = MdpadPaths::logs_dir().context("Failed to resolve log directory")?;
    let _log_guard = logging::init(&logs_dir, cli.log_level.as_deref(), &config.log_level);
    tracing::info!("[mdpad] Starting with config {:?}", config_service.path());

    let recent = Arc::new(RecentDocuments::new(
        MdpadPaths::recent_documents_file().context("Failed to resolve data directory")?,
        config.max_recent_documents,
    ));
    let window = Arc::new(TerminalWindow::new(&config.app_name));
    let (event_tx, event_rx) = mpsc::unbounded_channel();

    let coordinator = PersistenceCoordinator::new(
        config,
        Arc::new(TerminalDialogs::new()),
        Arc::new(FsDocumentStorage::new()),
    )
    .with_environment(Arc::new(SystemEnvironment::new(recent.clone())))
    .with_window(window.clone())
    .with_event_sender(event_tx);

    let (client, actor) = connect(Arc::new(coordinator));
    let actor_handle = actor.spawn();

    let host = BufferHost::new(client, event_rx, Arc::new(PreformattedHtmlRenderer::new()));
    let mut repl = Repl::new(host, window, recent)?;

    if let Some(path) = cli.file {
        repl.open_initial(path).await?;
    }

    repl.run().await?;

    // Dropping the REPL drops the last client, which ends the actor.
    if let Err(e) = actor_handle.await {
        tracing::warn!("[mdpad] Coordinator task ended abnormally: {}", e);
    }
    tracing::info!("[mdpad] Exiting");

    Ok(())
}
