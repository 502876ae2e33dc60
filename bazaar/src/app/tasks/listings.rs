//! # Listing Fetch Task

use std::sync::Arc;
use std::time::{Duration, Instant};

use async_channel::Sender;
use tokio::spawn;

use crate::app::events::AppEvent;
use crate::app::state::FetchTicket;
use crate::core::error::FetchError;
use crate::core::service::ListingService;

/// Fetch the listings for `ticket` and report the outcome.
///
/// A fetch that does not settle within `timeout` reports
/// [`FetchError::Timeout`]. The request itself is not cancelled when a newer
/// selection supersedes it; its result is discarded on settlement instead.
pub(crate) fn fetch_listings(
    service: Arc<dyn ListingService>,
    timeout: Duration,
    ticket: FetchTicket,
    event_tx: Sender<AppEvent>,
) {
    spawn(async move {
        let start = Instant::now();

        let result = match tokio::time::timeout(timeout, service.fetch_listings(&ticket.contract)).await {
            Ok(result) => result,
            Err(_) => Err(FetchError::Timeout(timeout)),
        };

        match &result {
            Ok(listings) => tracing::debug!(
                seq = ticket.seq,
                collection = %ticket.collection,
                count = listings.len(),
                duration_ms = start.elapsed().as_millis(),
                "Listing fetch settled"
            ),
            Err(e) => tracing::warn!(
                seq = ticket.seq,
                collection = %ticket.collection,
                error = %e,
                duration_ms = start.elapsed().as_millis(),
                "Listing fetch failed"
            ),
        }

        if event_tx.send(AppEvent::ListingsFetched { ticket, result }).await.is_err() {
            tracing::debug!("Event channel closed; dropping listing result");
        }
    });
}
