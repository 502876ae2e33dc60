//! # Bargain Bazaar - Library Root
//!
//! A **native desktop GUI** for browsing NFT collections and spotting
//! listings priced below their estimated value.
//! This library crate contains all modules used by the binary crate (`main.rs`).
//!
//! ## Features
//!
//! - **Collection browser**: pick a collection, see its current listings
//! - **Discount table**: listed price, estimated value, and the upstream
//!   discount colored by sign
//! - **Wallet profile**: connector options with readiness, connected account
//! - **Buy action**: hands the token to the marketplace and tracks its steps
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │              bazaar (this crate)                       │
//! ├────────────────────────────────────────────────────────┤
//! │  egui / eframe - Immediate-mode GUI, native window     │
//! │  Tokio         - Async runtime for background tasks    │
//! │  Reqwest       - HTTP client                           │
//! └────────────────────────────────────────────────────────┘
//!          │                              │
//!          │ GET /collection              │ POST /execute/buy/v7
//!          ▼                              ▼
//! ┌─────────────────────┐      ┌─────────────────────────┐
//! │ Listing data service│      │  Reservoir marketplace  │
//! └─────────────────────┘      └─────────────────────────┘
//! ```
//!
//! ## Module Structure
//!
//! - **app**: Orchestrator, state, collection registry, discount view-model
//! - **core**: Error types, capability traits, configuration
//! - **services**: HTTP clients and wallet connectors
//! - **ui**: Rendering (screens, widgets, theme)
//! - **debug**: Logging initialization
//! - **utils**: Validation and formatting
//!
//! ### Module Dependency Graph
//!
//! ```text
//! main.rs
//!   │
//!   ├── app (state, events, handlers, tasks)
//!   │   ├── core::service (capability traits)
//!   │   └── services::* (production implementations)
//!   │
//!   └── ui (rendering from a state snapshot)
//!       ├── screens::* (collection table, wallet profile)
//!       ├── widgets::* (tables, loading bar, notifications)
//!       └── theme
//! ```
//!
//! ## Testing
//!
//! ```bash
//! cargo test -p bazaar
//! cargo test -p bazaar app::tests
//! ```

pub mod app;
pub mod core;
pub mod debug;
pub mod services;
pub mod ui;
pub mod utils;

// Re-export commonly used types for convenience
pub use app::{App, AppContext, AppEvent, AppState};
pub use core::{AppError, Config, Result};
