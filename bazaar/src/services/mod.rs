//! # External Services
//!
//! Production implementations of the capability traits in
//! [`crate::core::service`]:
//!
//! - **[`api`]**: HTTP clients
//!   - `ListingClient`: listing data service (`GET /collection`)
//!   - `ReservoirClient`: marketplace buy steps (`POST /execute/buy/v7`)
//! - **[`wallet`]**: Wallet connector options and connection status

pub mod api;
pub mod wallet;
