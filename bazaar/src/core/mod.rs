//! # Core Abstractions
//!
//! Foundational types shared by every layer of the client:
//!
//! - **[`error`]**: Application error types (`AppError`, `FetchError`, `WalletError`, `Result<T>`)
//! - **[`service`]**: Capability traits for dependency injection (`ListingService`,
//!   `WalletConnector`, `PurchaseService`)
//! - **[`config`]**: Environment configuration (`Config`)
//!
//! ## Dependency Injection
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use bazaar::core::service::ListingService;
//!
//! // In production: reqwest-backed client
//! let listings: Arc<dyn ListingService> = Arc::new(ListingClient::new(&config));
//!
//! // In tests: a mock that resolves on demand
//! let listings: Arc<dyn ListingService> = Arc::new(GatedListings::default());
//! ```

pub mod config;
pub mod error;
pub mod service;

pub use config::Config;
pub use error::{AppError, FetchError, Result, WalletError};
pub use service::{ListingService, PurchaseService, WalletConnector};
