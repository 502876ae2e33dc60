//! # Action Handlers
//!
//! User actions, organized by domain. Each handler applies its state change
//! under one short write lock and then spawns the background task, if any.

pub mod purchase;
pub mod selection;
pub mod wallet;
