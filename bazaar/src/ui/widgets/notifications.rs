//! # Notifications Widget
//!
//! Toast notifications using egui-notify. Handlers queue
//! [`Notification`]s in application state; the UI drains them into toasts
//! once per frame.

use std::time::Duration;

use egui_notify::Toasts;

use crate::app::{Notification, NotificationLevel};

/// Notification manager for the application
pub struct NotificationManager {
    /// Toast notification system
    pub toasts: Toasts,
}

impl Default for NotificationManager {
    fn default() -> Self {
        Self {
            toasts: Toasts::default(),
        }
    }
}

impl NotificationManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show a queued notification at its level
    pub fn push(&mut self, notification: Notification) {
        let toast = match notification.level {
            NotificationLevel::Info => self.toasts.info(notification.message),
            NotificationLevel::Success => self.toasts.success(notification.message),
            NotificationLevel::Warning => self.toasts.warning(notification.message),
            NotificationLevel::Error => self.toasts.error(notification.message),
        };
        toast.duration(Some(Duration::from_secs(5)));
    }

    /// Render notifications in the UI context
    pub fn show(&mut self, ctx: &egui::Context) {
        self.toasts.show(ctx);
    }
}
