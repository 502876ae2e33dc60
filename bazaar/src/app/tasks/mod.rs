//! # Async Tasks
//!
//! Background tasks spawned on the Tokio runtime. Tasks never touch
//! [`crate::app::AppState`]; they report through the event channel and the UI
//! thread applies the result.

pub mod listings;
pub mod purchase;
pub mod wallet;
