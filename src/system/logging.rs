//! Logging system initialization
//!
//! Sets up the tracing subscriber from application configuration:
//! level filter, text or JSON output, optional log file.

use crate::config::AppConfig;
use tracing_appender::non_blocking::WorkerGuard;

/// Initialize the tracing subscriber.
///
/// Must be called once during startup, after configuration is loaded.
/// The returned `WorkerGuard` has to stay alive for the process lifetime
/// so buffered log lines are flushed on exit.
pub fn init_logging(config: &AppConfig) -> WorkerGuard {
    let log_to_file = config
        .logging
        .file
        .as_ref()
        .is_some_and(|f| !f.is_empty());

    let writer: Box<dyn std::io::Write + Send + Sync> = if log_to_file {
        let path = config.logging.file.as_deref().unwrap_or_default();
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .expect("Failed to open log file");
        Box::new(file)
    } else {
        Box::new(std::io::stdout())
    };

    let (non_blocking_writer, guard) = tracing_appender::non_blocking(writer);
    let filter = tracing_subscriber::EnvFilter::new(config.logging.level.clone());

    let subscriber_builder = tracing_subscriber::fmt()
        .with_writer(non_blocking_writer)
        .with_env_filter(filter)
        .with_level(true)
        .with_ansi(!log_to_file);

    if config.logging.format == "json" {
        subscriber_builder.json().init();
    } else {
        subscriber_builder.init();
    }

    guard
}
