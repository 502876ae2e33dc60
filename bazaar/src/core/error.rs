//! # Common Error Types
//!
//! Consolidated error handling for the bazaar client.
//!
//! ## Error Categories
//!
//! - **UnknownCollection**: a selection named a collection that is not in the registry
//! - **Fetch**: retrieving listings failed (network, HTTP status, malformed body, timeout)
//! - **Wallet**: wallet connector failures
//! - **Purchase**: the marketplace rejected or could not prepare a buy
//! - **Config**: missing or invalid environment configuration
//! - **Validation**: malformed user-supplied values (addresses, numbers)
//!
//! A fetch that settles after a newer selection superseded it is not an
//! error: it is discarded by the selection controller and only counted in
//! diagnostics (see [`crate::app::Settlement::Stale`]).
//!
//! ## Usage Pattern
//!
//! ```rust
//! use bazaar::core::error::{AppError, FetchError};
//!
//! let err = AppError::from(FetchError::Status(500));
//! assert_eq!(err.to_string(), "Fetch error: listing service returned HTTP 500");
//! ```

use std::time::Duration;
use thiserror::Error;

/// Application-wide error type.
///
/// No variant is fatal to the process: each one is scoped to a single user
/// action or selection cycle and is recovered from by re-selecting, retrying,
/// or fixing configuration.
#[derive(Debug, Error)]
pub enum AppError {
    /// The requested collection name is not in the registry.
    ///
    /// Unreachable through the dropdown, which only offers registry entries,
    /// but any other caller can name an arbitrary collection.
    #[error("Unknown collection: {0}")]
    UnknownCollection(String),

    /// Retrieving listings failed.
    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    /// Wallet connector failure.
    #[error("Wallet error: {0}")]
    Wallet(#[from] WalletError),

    /// The purchase capability failed or is unavailable.
    #[error("Purchase error: {0}")]
    Purchase(String),

    /// Missing or invalid configuration.
    ///
    /// ```rust
    /// use bazaar::core::error::AppError;
    ///
    /// let err = AppError::Config("BAZAAR_FETCH_TIMEOUT_SECS must be between 1 and 120".to_string());
    /// assert!(err.to_string().starts_with("Config error"));
    /// ```
    #[error("Config error: {0}")]
    Config(String),

    /// Input validation error.
    #[error("Validation error: {0}")]
    Validation(String),
}

/// Failure retrieving listings from the listing data service.
///
/// `Clone` because the same failure is both stored in the selection state
/// (for the inline error) and reported through a toast.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FetchError {
    /// Connection refused, DNS failure, TLS failure, reset connection.
    #[error("network error: {0}")]
    Network(String),

    /// Any non-2xx response.
    #[error("listing service returned HTTP {0}")]
    Status(u16),

    /// The body was not a JSON array of listing records.
    #[error("malformed listing data: {0}")]
    Parse(String),

    /// No response within the configured fetch timeout.
    #[error("no response within {}s", .0.as_secs())]
    Timeout(Duration),
}

/// Wallet connector errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum WalletError {
    /// The connector cannot be used in this process.
    #[error("{0} is not available on this platform")]
    Unsupported(String),

    /// No connector with the requested id.
    #[error("unknown connector: {0}")]
    UnknownConnector(String),

    /// The connector returned something that is not an account address.
    #[error("invalid account address: {0}")]
    InvalidAccount(String),

    /// A connector was asked to connect while another attempt is in flight.
    #[error("a connection attempt is already in progress")]
    Busy,
}

/// Convenience type alias for `Result<T, AppError>`.
pub type Result<T> = std::result::Result<T, AppError>;

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            FetchError::Parse(err.to_string())
        } else {
            FetchError::Network(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            AppError::UnknownCollection("NotARealCollection".to_string()).to_string(),
            "Unknown collection: NotARealCollection"
        );
        assert_eq!(
            AppError::from(FetchError::Timeout(Duration::from_secs(10))).to_string(),
            "Fetch error: no response within 10s"
        );
        assert_eq!(
            AppError::from(WalletError::Unsupported("MetaMask".to_string())).to_string(),
            "Wallet error: MetaMask is not available on this platform"
        );
    }

    #[test]
    fn test_fetch_error_is_comparable() {
        assert_eq!(FetchError::Status(500), FetchError::Status(500));
        assert_ne!(FetchError::Status(500), FetchError::Status(502));
    }
}
