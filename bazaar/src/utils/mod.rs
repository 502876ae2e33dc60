//! # Utility Functions
//!
//! - **[`validation`]**: Address validation and numeric cell formatting
//!
//! See also [`shared::utils`] for address truncation.

pub mod validation;
