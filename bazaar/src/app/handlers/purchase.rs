//! # Purchase Handlers
//!
//! The Buy button. Validates the request against current state and hands it
//! to the purchase capability; all transaction work happens outside.

use std::sync::Arc;

use async_channel::Sender;
use parking_lot::RwLock;

use crate::app::events::AppEvent;
use crate::app::state::{AppState, NotificationLevel, PurchaseState, TokenRef};
use crate::app::tasks;
use crate::core::error::{AppError, Result};
use crate::core::service::PurchaseService;

/// Handle a Buy click for `token_id` in the current collection.
///
/// Internal handler function - use [`crate::app::App::buy`] instead.
pub(crate) fn handle_buy_click(
    state: Arc<RwLock<AppState>>,
    purchases: Option<&Arc<dyn PurchaseService>>,
    event_tx: Sender<AppEvent>,
    token_id: &str,
) -> Result<()> {
    let (service, token, taker) = {
        let mut state = state.write();
        match prepare(&state, purchases, token_id) {
            Ok(prepared) => {
                state.purchase = Some(PurchaseState::new(prepared.1.clone()));
                prepared
            }
            Err(e) => {
                tracing::warn!(token_id = %token_id, error = %e, "Buy rejected");
                state.notify(NotificationLevel::Error, e.to_string());
                return Err(e);
            }
        }
    };

    tasks::purchase::buy(service, token, taker, event_tx);
    Ok(())
}

fn prepare(
    state: &AppState,
    purchases: Option<&Arc<dyn PurchaseService>>,
    token_id: &str,
) -> Result<(Arc<dyn PurchaseService>, TokenRef, String)> {
    let service = purchases
        .cloned()
        .ok_or_else(|| AppError::Config("RESERVOIR_KEY is not set; buying is disabled".to_string()))?;

    let taker = state
        .wallet
        .account()
        .ok_or_else(|| AppError::Purchase("connect a wallet before buying".to_string()))?
        .to_string();

    if state.purchase.as_ref().is_some_and(|p| p.in_progress()) {
        return Err(AppError::Purchase("another purchase is still in progress".to_string()));
    }

    if !state.selection.listings.iter().any(|l| l.token_id == token_id) {
        return Err(AppError::Validation(format!(
            "token {} is not listed in {}",
            token_id, state.selection.selected
        )));
    }

    let contract = state
        .selection
        .contract()
        .ok_or_else(|| AppError::UnknownCollection(state.selection.selected.clone()))?;

    let token = TokenRef {
        contract: contract.to_string(),
        token_id: token_id.to_string(),
    };
    Ok((service, token, taker))
}
