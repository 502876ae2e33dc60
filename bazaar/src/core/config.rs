//! # Application Configuration
//!
//! Configuration loaded from environment variables once at startup and
//! validated before the window opens, so a misconfigured process fails fast.
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | `BAZAAR_API_URL` | `https://pythonbazaarapi.0xkofi.repl.co` | Listing data service |
//! | `RESERVOIR_KEY` | unset | Marketplace API key; unset disables buying |
//! | `RESERVOIR_API_URL` | `https://api.reservoir.tools` | Marketplace API |
//! | `RESERVOIR_SOURCE` | `https://marketplace.reservoir.tools/` | Order source attribution |
//! | `BAZAAR_FETCH_TIMEOUT_SECS` | `10` | Listing fetch timeout (1-120) |
//! | `BAZAAR_WALLET_ADDRESS` | unset | Account for the watch-address connector |

use std::time::Duration;

use crate::core::error::{AppError, Result};
use crate::utils::validation::validate_address;

const DEFAULT_LISTING_API_URL: &str = "https://pythonbazaarapi.0xkofi.repl.co";
const DEFAULT_RESERVOIR_API_URL: &str = "https://api.reservoir.tools";
const DEFAULT_RESERVOIR_SOURCE: &str = "https://marketplace.reservoir.tools/";
const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 10;
const MAX_FETCH_TIMEOUT_SECS: u64 = 120;

#[derive(Clone, Debug)]
pub struct Config {
    /// Base URL of the listing data service (no trailing slash).
    pub listing_api_url: String,

    /// Marketplace API key.
    ///
    /// `None` when unset or blank. Browsing does not need it; every buy
    /// request fails fast with [`AppError::Config`] instead of sending an
    /// empty credential.
    pub reservoir_key: Option<String>,

    pub reservoir_api_url: String,

    pub reservoir_source: String,

    /// Upper bound on one listing fetch before it settles as a timeout.
    pub fetch_timeout: Duration,

    /// Account exposed by the watch-address wallet connector.
    pub wallet_address: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listing_api_url: DEFAULT_LISTING_API_URL.to_string(),
            reservoir_key: None,
            reservoir_api_url: DEFAULT_RESERVOIR_API_URL.to_string(),
            reservoir_source: DEFAULT_RESERVOIR_SOURCE.to_string(),
            fetch_timeout: Duration::from_secs(DEFAULT_FETCH_TIMEOUT_SECS),
            wallet_address: None,
        }
    }
}

impl Config {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// Blank values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| {
            lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let fetch_timeout_secs = match get("BAZAAR_FETCH_TIMEOUT_SECS") {
            Some(raw) => raw.parse::<u64>().map_err(|e| {
                AppError::Config(format!("BAZAAR_FETCH_TIMEOUT_SECS must be a whole number of seconds: {}", e))
            })?,
            None => DEFAULT_FETCH_TIMEOUT_SECS,
        };

        let config = Self {
            listing_api_url: get("BAZAAR_API_URL")
                .unwrap_or_else(|| DEFAULT_LISTING_API_URL.to_string())
                .trim_end_matches('/')
                .to_string(),
            reservoir_key: get("RESERVOIR_KEY"),
            reservoir_api_url: get("RESERVOIR_API_URL")
                .unwrap_or_else(|| DEFAULT_RESERVOIR_API_URL.to_string())
                .trim_end_matches('/')
                .to_string(),
            reservoir_source: get("RESERVOIR_SOURCE")
                .unwrap_or_else(|| DEFAULT_RESERVOIR_SOURCE.to_string()),
            fetch_timeout: Duration::from_secs(fetch_timeout_secs),
            wallet_address: get("BAZAAR_WALLET_ADDRESS").map(|a| a.to_lowercase()),
        };

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        let secs = self.fetch_timeout.as_secs();
        if !(1..=MAX_FETCH_TIMEOUT_SECS).contains(&secs) {
            return Err(AppError::Config(format!(
                "BAZAAR_FETCH_TIMEOUT_SECS must be between 1 and {}",
                MAX_FETCH_TIMEOUT_SECS
            )));
        }

        for (name, url) in [
            ("BAZAAR_API_URL", &self.listing_api_url),
            ("RESERVOIR_API_URL", &self.reservoir_api_url),
        ] {
            if !(url.starts_with("https://") || url.starts_with("http://")) {
                return Err(AppError::Config(format!("{} must be an http(s) URL, got {}", name, url)));
            }
        }

        if let Some(address) = &self.wallet_address {
            let result = validate_address(address);
            if let Some(error) = result.error {
                return Err(AppError::Config(format!("BAZAAR_WALLET_ADDRESS: {}", error)));
            }
        }

        Ok(())
    }

    /// Whether the purchase capability can be offered.
    pub fn purchases_enabled(&self) -> bool {
        self.reservoir_key.is_some()
    }
}
