//! # Event Handler
//!
//! Applies task results to application state. This is the only place fetch
//! results reach [`SelectionState`](crate::app::state::SelectionState), and
//! it runs on the UI thread only.

use chrono::Utc;
use shared::truncate_address;

use crate::app::state::{
    FetchTicket, Listing, LoadState, NotificationLevel, PurchaseOutcome, PurchaseStep,
    Settlement, StaleRecord, TokenRef,
};
use crate::app::{App, AppEvent};
use crate::core::error::{FetchError, WalletError};
use crate::services::wallet::WalletStatus;

/// Trait for event handling implementation
pub(crate) trait AppEventHandler {
    fn handle_event_impl(&mut self, event: AppEvent);
}

impl AppEventHandler for App {
    /// Handle async event results
    ///
    /// Acquires the write lock once per event.
    fn handle_event_impl(&mut self, event: AppEvent) {
        match event {
            AppEvent::ListingsFetched { ticket, result } => {
                self.handle_listings_fetched(ticket, result);
            }
            AppEvent::WalletConnected {
                attempt,
                connector_id,
                result,
            } => {
                self.handle_wallet_connected(attempt, connector_id, result);
            }
            AppEvent::BuyProgress { token, step } => {
                self.handle_buy_progress(token, step);
            }
            AppEvent::PurchaseFinished { token, result } => {
                self.handle_purchase_finished(token, result);
            }
        }
    }
}

impl App {
    fn handle_listings_fetched(&mut self, ticket: FetchTicket, result: Result<Vec<Listing>, FetchError>) {
        let mut state = self.state.write();

        match state.selection.settle(&ticket, result) {
            Settlement::Applied(next) => {
                match &next.load {
                    LoadState::Failed { error } => {
                        state.diagnostics.fetch_errors += 1;
                        tracing::warn!(
                            seq = ticket.seq,
                            collection = %ticket.collection,
                            error = %error,
                            "Listings unavailable"
                        );
                        let message = format!("Could not load {}: {}", ticket.collection, error);
                        state.notify(NotificationLevel::Error, message);
                    }
                    _ => {
                        tracing::info!(
                            seq = ticket.seq,
                            collection = %ticket.collection,
                            count = next.listings.len(),
                            "Listings ready"
                        );
                    }
                }
                state.selection = next;
            }
            Settlement::Stale => {
                tracing::debug!(
                    seq = ticket.seq,
                    latest_seq = state.selection.latest_seq,
                    collection = %ticket.collection,
                    "Discarded stale listing result"
                );
                state.diagnostics.stale_results += 1;
                state.diagnostics.last_stale = Some(StaleRecord {
                    seq: ticket.seq,
                    collection: ticket.collection,
                    at: Utc::now(),
                });
            }
        }
    }

    fn handle_wallet_connected(
        &mut self,
        attempt: u64,
        connector_id: String,
        result: Result<String, WalletError>,
    ) {
        let mut state = self.state.write();

        if state.wallet.pending_attempt != Some(attempt) {
            tracing::debug!(
                connector = %connector_id,
                attempt,
                pending = ?state.wallet.pending_attempt,
                "Ignoring result for abandoned connection attempt"
            );
            return;
        }
        state.wallet.pending_connector = None;
        state.wallet.pending_attempt = None;

        match result {
            Ok(account) => {
                let connector_name = state
                    .wallet
                    .options
                    .iter()
                    .find(|o| o.id == connector_id)
                    .map(|o| o.name.clone())
                    .unwrap_or_else(|| connector_id.clone());
                let message = format!("Connected {} via {}", truncate_address(&account), connector_name);

                state.wallet.status = WalletStatus::Connected(account);
                state.wallet.connector_name = Some(connector_name);
                state.notify(NotificationLevel::Success, message);
            }
            Err(e) => {
                state.wallet.status = WalletStatus::Error(e.to_string());
                state.wallet.connector_name = None;
                state.notify(NotificationLevel::Error, e.to_string());
            }
        }
    }

    fn handle_buy_progress(&mut self, token: TokenRef, step: PurchaseStep) {
        let mut state = self.state.write();
        let Some(purchase) = state.purchase.as_mut().filter(|p| p.token == token) else {
            tracing::debug!(token = %token, "Ignoring progress for a purchase that is no longer shown");
            return;
        };

        tracing::info!(
            token = %token,
            step = %step.id,
            action = %step.action,
            completed = step.completed_items,
            total = step.total_items,
            "Purchase progress"
        );

        match purchase.steps.iter_mut().find(|s| s.id == step.id) {
            Some(existing) => *existing = step,
            None => purchase.steps.push(step),
        }
    }

    fn handle_purchase_finished(&mut self, token: TokenRef, result: Result<(), String>) {
        let mut state = self.state.write();
        let Some(purchase) = state.purchase.as_mut().filter(|p| p.token == token) else {
            return;
        };

        let (level, message) = match result {
            Ok(()) => {
                purchase.outcome = PurchaseOutcome::StepsReady;
                match purchase.pending_step() {
                    Some(step) => (
                        NotificationLevel::Info,
                        format!("Token #{}: {}", token.token_id, step.action),
                    ),
                    None => (
                        NotificationLevel::Success,
                        format!("Token #{}: purchase submitted", token.token_id),
                    ),
                }
            }
            Err(e) => {
                purchase.outcome = PurchaseOutcome::Failed(e.clone());
                (
                    NotificationLevel::Error,
                    format!("Could not buy token #{}: {}", token.token_id, e),
                )
            }
        };

        tracing::info!(token = %token, outcome = ?purchase.outcome, "Purchase finished");
        state.notify(level, message);
    }
}
