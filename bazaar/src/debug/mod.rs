//! # Logging Infrastructure
//!
//! File-based structured logging for the bazaar client.
//!
//! - **File-based logging**: `logs/bazaar.log` with daily rotation, written
//!   through a non-blocking appender so the UI thread never waits on disk
//! - **Optional stderr output**: `BAZAAR_LOG_STDERR=1`
//! - **Panic hook**: panics are logged with location and backtrace
//!
//! ## Usage
//!
//! ```rust,ignore
//! // Keep the guard alive until exit; dropping it flushes the file writer.
//! let _log_guard = bazaar::debug::init_logger();
//!
//! tracing::info!(collection = "Azuki", count = 12, "Listings ready");
//! ```
//!
//! ## Configuration
//!
//! Environment variables:
//! - `RUST_LOG`: filter (default `bazaar=info,warn`)
//! - `BAZAAR_LOG_DIR`: log directory (default `logs`)
//! - `BAZAAR_LOG_STDERR`: also log to stderr (1=on)
//! - `BAZAAR_LOG_JSON`: write the log file as JSON lines (1=on)

pub mod config;
pub mod logger;

pub use config::LogConfig;
pub use logger::init as init_logger;
