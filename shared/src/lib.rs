//! # Shared Data Transfer Objects Library
//!
//! Wire types exchanged with the listing data service, plus small formatting
//! helpers used by the desktop client.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects
//!   - **[`dto::listing`]**: Raw listing records as returned by `GET /collection`
//! - **[`utils`]**: Shared utility functions
//!   - **[`utils::format_address`]**: Format contract/account addresses for display
//!   - **[`utils::truncate_address`]**: Truncate addresses with ellipsis
//!
//! ## Wire Format
//!
//! The listing service is loosely typed. Every field of a record is optional
//! and numbers may arrive as JSON numbers or numeric strings:
//!
//! ```text
//! GET /collection?contract=0xb47e3cd837ddf8e4c57f05d70ab865de6e193bbb
//!
//! [
//!   { "token_id": "1", "image_url": "a.png", "list_price": 10, "value_price": 8, "discount": -2 },
//!   { "token_id": 7804, "list_price": "61.5", "value_price": 70.1, "discount": "8.6" }
//! ]
//! ```
//!
//! Records are deserialized leniently here; the client decides which records
//! are usable.

pub mod dto;
pub mod utils;

pub use dto::*;
pub use utils::*;
