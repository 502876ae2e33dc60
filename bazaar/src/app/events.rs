//! # Application Events
//!
//! Results sent from background tasks to the UI thread.

use crate::app::state::{FetchTicket, Listing, PurchaseStep, TokenRef};
use crate::core::error::{FetchError, WalletError};

/// Async task results sent to main thread
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// A listing fetch settled (success, failure, or timeout)
    ListingsFetched {
        ticket: FetchTicket,
        result: Result<Vec<Listing>, FetchError>,
    },
    /// A wallet connection attempt finished
    WalletConnected {
        attempt: u64,
        connector_id: String,
        result: Result<String, WalletError>,
    },
    /// The purchase capability reported a step
    BuyProgress { token: TokenRef, step: PurchaseStep },
    /// A purchase finished
    PurchaseFinished {
        token: TokenRef,
        result: Result<(), String>,
    },
}
