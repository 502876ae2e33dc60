//! # Wallet Connection Task

use std::sync::Arc;

use async_channel::Sender;
use tokio::spawn;

use crate::app::events::AppEvent;
use crate::core::service::WalletConnector;

pub(crate) fn connect(connector: Arc<dyn WalletConnector>, attempt: u64, event_tx: Sender<AppEvent>) {
    spawn(async move {
        let connector_id = connector.id().to_string();
        let result = connector.connect().await;

        match &result {
            Ok(account) => tracing::info!(connector = %connector_id, attempt, account = %account, "Wallet connected"),
            Err(e) => tracing::warn!(connector = %connector_id, attempt, error = %e, "Wallet connection failed"),
        }

        let _ = event_tx
            .send(AppEvent::WalletConnected {
                attempt,
                connector_id,
                result,
            })
            .await;
    });
}
