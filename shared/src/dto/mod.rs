//! # Data Transfer Objects (DTOs)
//!
//! - [`listing`] - Listing records from the listing data service
//!
//! All DTOs use `serde_json`. Field names are snake_case on the wire, and
//! absent values are omitted on serialization.

pub mod listing;

pub use listing::*;
