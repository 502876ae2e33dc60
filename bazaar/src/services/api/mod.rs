//! # HTTP API Clients
//!
//! ```text
//! api/
//! ├── mod.rs        - Module exports
//! ├── client.rs     - ListingClient struct and ListingService impl
//! ├── listings.rs   - GET /collection and response coercion
//! └── reservoir.rs  - Reservoir buy steps (PurchaseService impl)
//! ```

pub mod client;
pub mod listings;
pub mod reservoir;

pub use client::ListingClient;
pub use reservoir::ReservoirClient;
