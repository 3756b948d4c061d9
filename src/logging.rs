//! File logging for the host binaries.
//!
//! Logs go to `<data_dir>/logs/<file_name>` so they never mix with a terminal
//! UI or the stdio protocol.

use crate::config::AacConfig;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Installs the global subscriber. Keep the returned guard alive for the
/// life of the process or buffered lines are lost.
pub fn init(config: &AacConfig) -> Option<WorkerGuard> {
    let dir = config.data_dir().join("logs");
    if let Err(e) = std::fs::create_dir_all(&dir) {
        eprintln!("cannot create log directory {}: {e}", dir.display());
        return None;
    }
    let appender = tracing_appender::rolling::never(&dir, &config.logging.file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);
    let filter = EnvFilter::try_new(&config.logging.level).unwrap_or_else(|_| EnvFilter::new("info"));
    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .try_init();
    match installed {
        Ok(()) => Some(guard),
        Err(_) => None,
    }
}
