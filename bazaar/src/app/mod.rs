//! # Application Orchestrator
//!
//! The [`App`] struct coordinates the egui rendering layer, background tasks
//! and application state.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    Main Thread (egui)                       │
//! │  ┌──────────────────────────────────────────────────────┐   │
//! │  │  App (orchestrator)                                  │   │
//! │  │  - on_tick() - drains task results every frame       │   │
//! │  │  - select_collection() / retry() / buy() / ...       │   │
//! │  └────────────┬─────────────────────────────────────────┘   │
//! │               │                                             │
//! │  ┌────────────▼─────────────────────────────────────────┐   │
//! │  │  State: Arc<RwLock<AppState>>                        │   │
//! │  │  - written only on this thread                       │   │
//! │  │  - rendered from a cloned snapshot                   │   │
//! │  └──────────────────────────────────────────────────────┘   │
//! └───────────────────────┬─────────────────────────────────────┘
//!                         │ async_channel (unbounded)
//! ┌───────────────────────▼─────────────────────────────────────┐
//! │              Async Tasks (Tokio)                            │
//! │  - tasks::listings::fetch_listings() - with timeout         │
//! │  - tasks::wallet::connect()                                 │
//! │  - tasks::purchase::buy()                                   │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Selection Ordering
//!
//! Every selection gets the next sequence number and tasks carry it back in
//! their [`FetchTicket`]. A result is applied only if its ticket is still the
//! latest one, so a slow fetch for an earlier selection can never overwrite a
//! later one. Superseded results are counted in [`Diagnostics`].
//!
//! ## Dependency Injection
//!
//! External capabilities are reached only through [`AppContext`], which is
//! built once at startup ([`AppContext::from_config`]) or by tests with mock
//! services.

pub mod collections;
pub mod state;
pub mod view_model;

mod event_handler;
mod events;
mod handlers;
mod tasks;

#[cfg(test)]
mod tests;

pub use events::AppEvent;
pub use state::*;

use std::sync::Arc;
use std::time::Duration;

use async_channel::{unbounded, Receiver, Sender};
use parking_lot::RwLock;

use crate::core::config::Config;
use crate::core::error::Result;
use crate::core::service::{ListingService, PurchaseService};
use crate::services::api::{ListingClient, ReservoirClient};
use crate::services::wallet::WalletService;

/// Capabilities the application depends on.
#[derive(Clone)]
pub struct AppContext {
    pub listings: Arc<dyn ListingService>,
    pub wallet: WalletService,
    /// `None` when no marketplace key is configured.
    pub purchases: Option<Arc<dyn PurchaseService>>,
    pub fetch_timeout: Duration,
}

impl AppContext {
    /// Production context: HTTP clients and wallet connectors from configuration.
    pub fn from_config(config: &Config) -> Self {
        let purchases: Option<Arc<dyn PurchaseService>> = match ReservoirClient::from_config(config) {
            Ok(client) => Some(Arc::new(client)),
            Err(e) => {
                tracing::warn!(error = %e, "Purchase capability disabled");
                None
            }
        };

        Self {
            listings: Arc::new(ListingClient::new(config)),
            wallet: WalletService::from_config(config),
            purchases,
            fetch_timeout: config.fetch_timeout,
        }
    }
}

/// Main application orchestrator.
///
/// Must be created and driven from inside a Tokio runtime context: user
/// actions spawn tasks.
pub struct App {
    /// Shared application state.
    ///
    /// Only the UI thread writes it; hold locks briefly.
    pub state: Arc<RwLock<AppState>>,

    /// Task results, polled in [`App::on_tick`].
    pub event_rx: Receiver<AppEvent>,

    event_tx: Sender<AppEvent>,

    context: AppContext,
}

impl App {
    /// Create the application with production services.
    pub fn new(config: &Config) -> Self {
        Self::new_with(AppContext::from_config(config))
    }

    /// Create the application and mount the collection view.
    ///
    /// Mounting selects the default collection immediately, so the state
    /// returned is already `Loading` with a fetch in flight.
    pub fn new_with(context: AppContext) -> Self {
        let state = AppState {
            selection: SelectionState::default(),
            wallet: WalletState {
                options: context.wallet.options(),
                ..WalletState::default()
            },
            purchase: None,
            purchases_enabled: context.purchases.is_some(),
            diagnostics: Diagnostics::default(),
            pending_notifications: Vec::new(),
        };

        let (event_tx, event_rx) = unbounded();

        let mut app = App {
            state: Arc::new(RwLock::new(state)),
            event_rx,
            event_tx,
            context,
        };

        let default = collections::default_collection().name;
        if let Err(e) = app.select_collection(default) {
            tracing::error!(error = %e, "Failed to mount default collection");
        }

        tracing::info!(
            purchases_enabled = app.context.purchases.is_some(),
            fetch_timeout_secs = app.context.fetch_timeout.as_secs(),
            "App state initialized"
        );

        app
    }

    /// Called every frame to apply pending task results.
    ///
    /// Non-blocking: drains whatever is in the channel and returns.
    pub fn on_tick(&mut self) {
        let start = std::time::Instant::now();
        let mut events_processed = 0u32;

        while let Ok(event) = self.event_rx.try_recv() {
            events_processed += 1;
            self.handle_event(event);
        }

        if events_processed > 0 {
            tracing::debug!(
                events_processed,
                processing_time_us = start.elapsed().as_micros(),
                "on_tick: processed events"
            );
        }
    }

    fn handle_event(&mut self, event: AppEvent) {
        use event_handler::AppEventHandler;
        self.handle_event_impl(event);
    }

    /// Clone of the current state for rendering.
    pub fn snapshot(&self) -> AppState {
        self.state.read().clone()
    }

    /// Take the toasts queued since the last call.
    pub fn take_notifications(&self) -> Vec<Notification> {
        std::mem::take(&mut self.state.write().pending_notifications)
    }

    // ========== GUI Action Methods - Delegating to Handlers ==========

    /// Select a collection by name and fetch its listings.
    pub fn select_collection(&mut self, name: &str) -> Result<()> {
        handlers::selection::handle_select_collection(
            self.state.clone(),
            &self.context,
            self.event_tx.clone(),
            name,
        )
        .map(|_| ())
    }

    /// Fetch the current collection again.
    pub fn retry(&mut self) -> Result<()> {
        handlers::selection::handle_retry(self.state.clone(), &self.context, self.event_tx.clone())
            .map(|_| ())
    }

    /// Connect through the connector with `connector_id`.
    pub fn connect_wallet(&mut self, connector_id: &str) -> Result<()> {
        handlers::wallet::handle_connect_click(
            self.state.clone(),
            &self.context.wallet,
            self.event_tx.clone(),
            connector_id,
        )
    }

    pub fn disconnect_wallet(&mut self) {
        handlers::wallet::handle_disconnect_click(self.state.clone());
    }

    /// Buy `token_id` from the current collection.
    pub fn buy(&mut self, token_id: &str) -> Result<()> {
        handlers::purchase::handle_buy_click(
            self.state.clone(),
            self.context.purchases.as_ref(),
            self.event_tx.clone(),
            token_id,
        )
    }
}
