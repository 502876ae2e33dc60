//! # Purchase Task

use std::sync::Arc;

use async_channel::Sender;
use tokio::spawn;

use crate::app::events::AppEvent;
use crate::app::state::{PurchaseStep, TokenRef};
use crate::core::service::PurchaseService;

/// Marketplace listings are bought one token at a time.
const QUANTITY: u32 = 1;

/// Request a buy of `token` for `taker`, forwarding every reported step.
pub(crate) fn buy(
    service: Arc<dyn PurchaseService>,
    token: TokenRef,
    taker: String,
    event_tx: Sender<AppEvent>,
) {
    spawn(async move {
        let progress_tx = event_tx.clone();
        let progress_token = token.clone();
        let on_progress = move |step: PurchaseStep| {
            // Unbounded: fails only once the UI has shut down.
            let _ = progress_tx.try_send(AppEvent::BuyProgress {
                token: progress_token.clone(),
                step,
            });
        };

        tracing::info!(token = %token, taker = %taker, "Starting purchase");
        let result = service
            .buy(&token, QUANTITY, &taker, &on_progress)
            .await
            .map_err(|e| e.to_string());

        if let Err(e) = &result {
            tracing::error!(token = %token, error = %e, "Purchase failed");
        }

        let _ = event_tx.send(AppEvent::PurchaseFinished { token, result }).await;
    });
}
