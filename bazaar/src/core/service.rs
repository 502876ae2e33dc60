//! # Service Traits
//!
//! Capabilities the application consumes from the outside world. The
//! production implementations live in [`crate::services`]; tests swap in
//! mocks through [`crate::app::AppContext`].

use async_trait::async_trait;

use crate::app::state::{Listing, PurchaseStep, TokenRef};
use crate::core::error::{AppError, FetchError, WalletError};

/// Listing data service.
#[async_trait]
pub trait ListingService: Send + Sync {
    /// Fetch the current listings of one collection contract.
    ///
    /// Issues exactly one outbound request per call. No retry, no caching, no
    /// deduplication of concurrent calls for the same address.
    async fn fetch_listings(&self, contract_address: &str) -> Result<Vec<Listing>, FetchError>;
}

/// One wallet connection option shown in the profile panel.
#[async_trait]
pub trait WalletConnector: Send + Sync {
    /// Stable identifier (`"metaMask"`, `"watchAddress"`, ...).
    fn id(&self) -> &str;

    /// Display name.
    fn name(&self) -> &str;

    /// Whether the connector can be used in this process.
    fn ready(&self) -> bool;

    /// Connect and return the account address.
    async fn connect(&self) -> Result<String, WalletError>;
}

/// Marketplace purchase capability.
///
/// Implementations build the marketplace's buy steps for a token and report
/// each step through `on_progress`. Signing and submitting transactions is
/// left to the user's wallet.
#[async_trait]
pub trait PurchaseService: Send + Sync {
    async fn buy(
        &self,
        token: &TokenRef,
        quantity: u32,
        taker: &str,
        on_progress: &(dyn Fn(PurchaseStep) + Send + Sync),
    ) -> Result<(), AppError>;
}
