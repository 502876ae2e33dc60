//! File-based logging initialization

use std::fs;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use super::config::LogConfig;

/// Initialize the logging system
///
/// Sets up:
/// - Daily log rotation under `BAZAAR_LOG_DIR`
/// - Non-blocking writes to prevent UI lag
/// - Optional stderr mirror and JSON file format
/// - Panic hook integration for crash logging
///
/// Returns the file writer guard; logs written after it is dropped are lost.
/// Returns `None` (after a warning on stderr) if the log directory cannot be
/// created or a global subscriber is already installed.
pub fn init() -> Option<WorkerGuard> {
    let config = LogConfig::from_env();

    if let Err(e) = fs::create_dir_all(&config.log_dir) {
        eprintln!("Warning: Failed to create log directory {}: {}", config.log_dir.display(), e);
        return None;
    }

    let file_appender = tracing_appender::rolling::daily(&config.log_dir, &config.file_name);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::try_new(&config.log_level)
        .unwrap_or_else(|_| EnvFilter::new("bazaar=info,warn"));

    let (text_layer, json_layer) = if config.json {
        let layer = fmt::layer()
            .json()
            .with_writer(non_blocking)
            .with_target(true)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true);
        (None, Some(layer))
    } else {
        let layer = fmt::layer()
            .with_writer(non_blocking)
            .with_target(true)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true)
            .with_ansi(false); // No ANSI codes in log files
        (Some(layer), None)
    };

    let stderr_layer = config
        .stderr
        .then(|| fmt::layer().with_writer(std::io::stderr).with_target(false).compact());

    let initialized = tracing_subscriber::registry()
        .with(env_filter)
        .with(text_layer)
        .with(json_layer)
        .with(stderr_layer)
        .try_init();

    if let Err(e) = initialized {
        eprintln!("Warning: Failed to install log subscriber: {}", e);
        return None;
    }

    tracing::info!(
        log_file = %config.log_file().display(),
        log_level = %config.log_level,
        stderr = config.stderr,
        json = config.json,
        "Logging initialized"
    );

    setup_panic_hook();

    Some(guard)
}

/// Set up panic hook to log panics with full context
fn setup_panic_hook() {
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let location = panic_info
            .location()
            .map(|l| format!("{}:{}:{}", l.file(), l.line(), l.column()))
            .unwrap_or_else(|| "unknown location".to_string());

        let message = if let Some(s) = panic_info.payload().downcast_ref::<&str>() {
            s.to_string()
        } else if let Some(s) = panic_info.payload().downcast_ref::<String>() {
            s.clone()
        } else {
            "unknown panic message".to_string()
        };

        let backtrace = std::backtrace::Backtrace::force_capture();

        tracing::error!(location = %location, message = %message, "Application panic");
        tracing::error!(backtrace = %backtrace, "Panic backtrace");

        default_panic(panic_info);
    }));
}
