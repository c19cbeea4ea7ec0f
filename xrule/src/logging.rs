use anyhow::Result;
use chrono::Local;
use std::path::PathBuf;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize tracing with file-based logging
/// Logs are written to ~/.config/xrule/logs/xrule-YYYY-MM-DD-HH-MM-SS.log
pub fn init_logging() -> Result<PathBuf> {
    // Get config directory
    let config_dir = dirs::config_dir()
        .ok_or(anyhow::anyhow!("Could not find config directory"))?
        .join("xrule");

    // Create logs directory
    let logs_dir = config_dir.join("logs");
    std::fs::create_dir_all(&logs_dir)?;

    // Create timestamped log file name
    let timestamp = Local::now().format("%Y-%m-%d-%H-%M-%S");
    let log_filename = format!("xrule-{}.log", timestamp);
    let log_path = logs_dir.join(&log_filename);

    // Non-blocking so a slow disk never stalls the event loop
    let file_appender = tracing_appender::rolling::never(&logs_dir, &log_filename);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false) // No ANSI codes in log file
        .with_target(true)
        .with_thread_ids(true)
        .with_line_number(true);

    // Default to INFO, can be overridden with RUST_LOG env var
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .init();

    // The guard flushes on drop; keep it for the lifetime of the program
    std::mem::forget(guard);

    Ok(log_path)
}
