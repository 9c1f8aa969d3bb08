//! Tracing setup.
//!
//! Logs go to a daily rolling file so they never interleave with REPL output.

use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Picks the filter: explicit CLI level, then `RUST_LOG`, then the config.
fn build_filter(cli_level: Option<&str>, config_level: &str) -> EnvFilter {
    if let Some(level) = cli_level {
        return EnvFilter::new(level);
    }
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config_level))
}

/// Installs the global subscriber. Keep the returned guard alive for the
/// lifetime of the process, or buffered lines are lost on exit.
pub fn init(log_dir: &Path, cli_level: Option<&str>, config_level: &str) -> Option<WorkerGuard> {
    let filter = build_filter(cli_level, config_level);

    if let Err(e) = std::fs::create_dir_all(log_dir) {
        eprintln!("Logging disabled, cannot create {:?}: {}", log_dir, e);
        return None;
    }

    let appender = tracing_appender::rolling::daily(log_dir, "mdpad.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .try_init();
    if let Err(e) = installed {
        eprintln!("Logging disabled: {}", e);
        return None;
    }

    Some(guard)
}
