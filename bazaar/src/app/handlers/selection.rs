//! # Selection Handlers
//!
//! Collection selection and retry. Both start a new fetch with a fresh
//! sequence number.

use std::sync::Arc;

use async_channel::Sender;
use parking_lot::RwLock;

use crate::app::events::AppEvent;
use crate::app::state::{AppState, FetchTicket, NotificationLevel};
use crate::app::{tasks, AppContext};
use crate::core::error::Result;

/// Select a collection and fetch its listings.
///
/// An unknown collection leaves the current selection untouched and queues a
/// warning toast.
///
/// Internal handler function - use [`crate::app::App::select_collection`] instead.
pub(crate) fn handle_select_collection(
    state: Arc<RwLock<AppState>>,
    context: &AppContext,
    event_tx: Sender<AppEvent>,
    name: &str,
) -> Result<FetchTicket> {
    let ticket = {
        let mut state = state.write();
        match state.selection.select(name) {
            Ok((next, ticket)) => {
                state.selection = next;
                ticket
            }
            Err(e) => {
                tracing::warn!(collection = %name, error = %e, "Ignoring selection");
                state.notify(NotificationLevel::Warning, e.to_string());
                return Err(e);
            }
        }
    };

    tracing::info!(
        seq = ticket.seq,
        collection = %ticket.collection,
        contract = %ticket.contract,
        "Collection selected; fetching listings"
    );

    tasks::listings::fetch_listings(
        context.listings.clone(),
        context.fetch_timeout,
        ticket.clone(),
        event_tx,
    );

    Ok(ticket)
}

/// Re-issue the fetch for the current collection.
///
/// Internal handler function - use [`crate::app::App::retry`] instead.
pub(crate) fn handle_retry(
    state: Arc<RwLock<AppState>>,
    context: &AppContext,
    event_tx: Sender<AppEvent>,
) -> Result<FetchTicket> {
    let selected = state.read().selection.selected.clone();
    tracing::info!(collection = %selected, "Retrying listing fetch");
    handle_select_collection(state, context, event_tx, &selected)
}
