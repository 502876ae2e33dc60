//! # Reusable UI Widgets
//!
//! Common widgets used across screens.

pub mod loading_bar;
pub mod notifications;
pub mod tables;
