//! # Mock Capabilities

use async_trait::async_trait;
use parking_lot::Mutex;
use tokio::sync::oneshot;

use crate::app::state::{Listing, PurchaseStep, TokenRef};
use crate::core::error::{AppError, FetchError, WalletError};
use crate::core::service::{ListingService, PurchaseService, WalletConnector};

struct PendingFetch {
    contract: String,
    reply: Option<oneshot::Sender<Result<Vec<Listing>, FetchError>>>,
}

/// Listing service whose fetches stay in flight until the test resolves them.
#[derive(Default)]
pub struct GatedListings {
    fetches: Mutex<Vec<PendingFetch>>,
}

impl GatedListings {
    /// Wait until at least `count` fetches have been issued.
    pub async fn wait_for_fetches(&self, count: usize) {
        for _ in 0..1000 {
            if self.fetches.lock().len() >= count {
                return;
            }
            tokio::task::yield_now().await;
        }
        panic!("expected {} fetches, saw {}", count, self.fetches.lock().len());
    }

    pub fn contracts(&self) -> Vec<String> {
        self.fetches.lock().iter().map(|f| f.contract.clone()).collect()
    }

    /// Settle fetch number `index` (0-based, in issue order).
    pub fn resolve(&self, index: usize, result: Result<Vec<Listing>, FetchError>) {
        let reply = self.fetches.lock()[index]
            .reply
            .take()
            .expect("fetch already resolved");
        let _ = reply.send(result);
    }
}

#[async_trait]
impl ListingService for GatedListings {
    async fn fetch_listings(&self, contract_address: &str) -> Result<Vec<Listing>, FetchError> {
        let (reply, rx) = oneshot::channel();
        self.fetches.lock().push(PendingFetch {
            contract: contract_address.to_string(),
            reply: Some(reply),
        });
        rx.await
            .unwrap_or_else(|_| Err(FetchError::Network("gate dropped".to_string())))
    }
}

/// Wallet connector with a fixed outcome.
pub struct ScriptedConnector {
    pub id: &'static str,
    pub name: &'static str,
    pub ready: bool,
    pub result: Result<String, WalletError>,
}

#[async_trait]
impl WalletConnector for ScriptedConnector {
    fn id(&self) -> &str {
        self.id
    }

    fn name(&self) -> &str {
        self.name
    }

    fn ready(&self) -> bool {
        self.ready
    }

    async fn connect(&self) -> Result<String, WalletError> {
        self.result.clone()
    }
}

/// Purchase service that reports fixed steps and records its calls.
#[derive(Default)]
pub struct ScriptedPurchase {
    pub steps: Vec<PurchaseStep>,
    pub fail_with: Option<String>,
    pub calls: Mutex<Vec<(String, u32, String)>>,
}

#[async_trait]
impl PurchaseService for ScriptedPurchase {
    async fn buy(
        &self,
        token: &TokenRef,
        quantity: u32,
        taker: &str,
        on_progress: &(dyn Fn(PurchaseStep) + Send + Sync),
    ) -> Result<(), AppError> {
        self.calls
            .lock()
            .push((token.to_string(), quantity, taker.to_string()));

        if let Some(message) = &self.fail_with {
            return Err(AppError::Purchase(message.clone()));
        }
        for step in &self.steps {
            on_progress(step.clone());
        }
        Ok(())
    }
}
