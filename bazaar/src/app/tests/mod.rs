//! # App Tests
//!
//! Orchestrator tests: handlers, tasks, and the event handler driven
//! together against mock capabilities.

mod mock;
mod purchase;

use std::sync::Arc;
use std::time::Duration;

use super::*;
use crate::core::service::{PurchaseService, WalletConnector};
use crate::services::wallet::WalletService;
use mock::{GatedListings, ScriptedConnector, ScriptedPurchase};

pub const ACCOUNT: &str = "0xabc0000000000000000000000000000000000001";

/// Test context around a gated listing service.
pub fn test_context(listings: Arc<GatedListings>) -> AppContext {
    AppContext {
        listings,
        wallet: WalletService::new(Vec::new()),
        purchases: None,
        fetch_timeout: Duration::from_secs(10),
    }
}

pub fn with_connector(mut context: AppContext, connector: ScriptedConnector) -> AppContext {
    let connector: Arc<dyn WalletConnector> = Arc::new(connector);
    context.wallet = WalletService::new(vec![connector]);
    context
}

pub fn with_purchases(mut context: AppContext, purchases: Arc<ScriptedPurchase>) -> AppContext {
    let purchases: Arc<dyn PurchaseService> = purchases;
    context.purchases = Some(purchases);
    context
}

/// Wait for the next task result and apply it.
pub async fn apply_next_event(app: &mut App) {
    let event = tokio::time::timeout(Duration::from_secs(60), app.event_rx.recv())
        .await
        .expect("no event within 60s")
        .expect("event channel closed");
    app.handle_event(event);
}

pub fn listing(token_id: &str, discount: Option<f64>) -> Listing {
    Listing {
        token_id: token_id.to_string(),
        image_url: Some(format!("{}.png", token_id)),
        list_price: Some(10.0),
        value_price: Some(8.0),
        discount,
    }
}
