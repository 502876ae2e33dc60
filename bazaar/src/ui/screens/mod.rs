//! # Screens
//!
//! - [`collection`]: collection dropdown and the discount table
//! - [`profile`]: wallet connection panel

pub mod collection;
pub mod profile;
