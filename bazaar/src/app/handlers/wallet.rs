//! # Wallet Handlers
//!
//! Handlers for wallet connection and disconnection.

use std::sync::Arc;

use async_channel::Sender;
use parking_lot::RwLock;

use crate::app::events::AppEvent;
use crate::app::state::{AppState, NotificationLevel};
use crate::app::tasks;
use crate::core::error::{AppError, Result, WalletError};
use crate::services::wallet::{WalletService, WalletStatus};

/// Handle a connector button click
///
/// Internal handler function - use [`crate::app::App::connect_wallet`] instead.
pub(crate) fn handle_connect_click(
    state: Arc<RwLock<AppState>>,
    wallet: &WalletService,
    event_tx: Sender<AppEvent>,
    connector_id: &str,
) -> Result<()> {
    let (connector, attempt) = {
        let mut state = state.write();

        let checked = wallet.find(connector_id).and_then(|connector| {
            if state.wallet.pending_connector.is_some() {
                Err(WalletError::Busy)
            } else if !connector.ready() {
                Err(WalletError::Unsupported(connector.name().to_string()))
            } else {
                Ok(connector)
            }
        });

        match checked {
            Ok(connector) => {
                state.wallet.latest_attempt += 1;
                let attempt = state.wallet.latest_attempt;
                state.wallet.status = WalletStatus::Connecting;
                state.wallet.pending_connector = Some(connector.id().to_string());
                state.wallet.pending_attempt = Some(attempt);
                (connector, attempt)
            }
            Err(e) => {
                tracing::warn!(connector = %connector_id, error = %e, "Wallet connect rejected");
                if e != WalletError::Busy {
                    state.wallet.status = WalletStatus::Error(e.to_string());
                }
                state.notify(NotificationLevel::Error, e.to_string());
                return Err(AppError::Wallet(e));
            }
        }
    };

    tracing::info!(connector = %connector_id, attempt, "Connecting wallet");
    tasks::wallet::connect(connector, attempt, event_tx);
    Ok(())
}

/// Handle the Disconnect button
///
/// Also abandons an in-flight connection attempt. Its result is ignored
/// when it arrives, even if a new attempt on the same connector has started
/// by then.
///
/// Internal handler function - use [`crate::app::App::disconnect_wallet`] instead.
pub(crate) fn handle_disconnect_click(state: Arc<RwLock<AppState>>) {
    let mut state = state.write();
    let was_connected = state.wallet.is_connected();

    state.wallet.status = WalletStatus::Disconnected;
    state.wallet.connector_name = None;
    state.wallet.pending_connector = None;
    state.wallet.pending_attempt = None;

    if was_connected {
        tracing::info!("Wallet disconnected");
        state.notify(NotificationLevel::Info, "Wallet disconnected");
    }
}
