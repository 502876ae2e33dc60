//! Logging configuration from environment variables

use std::path::PathBuf;

const DEFAULT_FILTER: &str = "bazaar=info,warn";

/// Logging configuration
#[derive(Debug, Clone, PartialEq)]
pub struct LogConfig {
    /// Log directory (for rotation)
    pub log_dir: PathBuf,
    /// File name prefix inside `log_dir`
    pub file_name: String,
    /// Filter directives (e.g., "bazaar=debug,info")
    pub log_level: String,
    /// Mirror log output to stderr
    pub stderr: bool,
    /// JSON lines instead of plain text in the log file
    pub json: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            log_dir: PathBuf::from("logs"),
            file_name: "bazaar.log".to_string(),
            log_level: DEFAULT_FILTER.to_string(),
            stderr: cfg!(feature = "debug-mode"),
            json: false,
        }
    }
}

impl LogConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let flag = |name: &str, default: bool| lookup(name).map(|v| v.trim() == "1").unwrap_or(default);

        Self {
            log_dir: lookup("BAZAAR_LOG_DIR")
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from)
                .unwrap_or(defaults.log_dir),
            file_name: defaults.file_name,
            log_level: lookup("RUST_LOG")
                .filter(|v| !v.trim().is_empty())
                .unwrap_or(defaults.log_level),
            stderr: flag("BAZAAR_LOG_STDERR", defaults.stderr),
            json: flag("BAZAAR_LOG_JSON", defaults.json),
        }
    }

    pub fn log_file(&self) -> PathBuf {
        self.log_dir.join(&self.file_name)
    }

    /// Check if debug logging is enabled
    pub fn is_debug_enabled(&self) -> bool {
        self.log_level.contains("debug") || self.log_level.contains("trace")
    }
}
