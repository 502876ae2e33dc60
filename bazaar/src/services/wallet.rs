//! # Wallet Service
//!
//! The set of wallet connectors offered in the profile panel.
//!
//! ## Connectors
//! - MetaMask, Coinbase Wallet, WalletConnect, Injected: browser-extension
//!   and mobile-bridge wallets. Listed so the panel matches what users expect,
//!   but never ready in a desktop process.
//! - Watch Address: exposes the account configured in `BAZAAR_WALLET_ADDRESS`.
//!   Ready only when one is configured.

use std::sync::Arc;

use async_trait::async_trait;

use crate::app::state::ConnectorOption;
use crate::core::config::Config;
use crate::core::error::WalletError;
use crate::core::service::WalletConnector;
use crate::utils::validation::validate_address;

/// Wallet connection status
#[derive(Debug, Clone, PartialEq)]
pub enum WalletStatus {
    /// Not connected
    Disconnected,
    /// Connected with account address
    Connected(String),
    /// Connecting in progress
    Connecting,
    /// Error state with message
    Error(String),
}

impl WalletStatus {
    pub fn is_connected(&self) -> bool {
        matches!(self, WalletStatus::Connected(_))
    }

    pub fn address(&self) -> Option<&str> {
        match self {
            WalletStatus::Connected(addr) => Some(addr),
            _ => None,
        }
    }
}

/// Connector that exists in the list but cannot connect here.
pub struct UnavailableConnector {
    id: &'static str,
    name: &'static str,
}

impl UnavailableConnector {
    pub const fn new(id: &'static str, name: &'static str) -> Self {
        Self { id, name }
    }
}

#[async_trait]
impl WalletConnector for UnavailableConnector {
    fn id(&self) -> &str {
        self.id
    }

    fn name(&self) -> &str {
        self.name
    }

    fn ready(&self) -> bool {
        false
    }

    async fn connect(&self) -> Result<String, WalletError> {
        Err(WalletError::Unsupported(self.name.to_string()))
    }
}

/// Read-only connector for a configured account address.
pub struct WatchAddressConnector {
    address: Option<String>,
}

impl WatchAddressConnector {
    pub const ID: &'static str = "watchAddress";

    pub fn new(address: Option<String>) -> Self {
        Self { address }
    }
}

#[async_trait]
impl WalletConnector for WatchAddressConnector {
    fn id(&self) -> &str {
        Self::ID
    }

    fn name(&self) -> &str {
        "Watch Address"
    }

    fn ready(&self) -> bool {
        self.address.is_some()
    }

    async fn connect(&self) -> Result<String, WalletError> {
        let address = self
            .address
            .as_ref()
            .ok_or_else(|| WalletError::Unsupported(self.name().to_string()))?;

        match validate_address(address).error {
            None => Ok(address.clone()),
            Some(_) => Err(WalletError::InvalidAccount(address.clone())),
        }
    }
}

/// Ordered collection of wallet connectors.
#[derive(Clone)]
pub struct WalletService {
    connectors: Vec<Arc<dyn WalletConnector>>,
}

impl WalletService {
    pub fn new(connectors: Vec<Arc<dyn WalletConnector>>) -> Self {
        Self { connectors }
    }

    /// Default connector list for this process.
    pub fn from_config(config: &Config) -> Self {
        Self::new(vec![
            Arc::new(UnavailableConnector::new("metaMask", "MetaMask")),
            Arc::new(UnavailableConnector::new("coinbaseWallet", "Coinbase Wallet")),
            Arc::new(UnavailableConnector::new("walletConnect", "WalletConnect")),
            Arc::new(UnavailableConnector::new("injected", "Injected")),
            Arc::new(WatchAddressConnector::new(config.wallet_address.clone())),
        ])
    }

    /// Connector options in display order.
    pub fn options(&self) -> Vec<ConnectorOption> {
        self.connectors
            .iter()
            .map(|c| ConnectorOption {
                id: c.id().to_string(),
                name: c.name().to_string(),
                ready: c.ready(),
            })
            .collect()
    }

    pub fn find(&self, id: &str) -> Result<Arc<dyn WalletConnector>, WalletError> {
        self.connectors
            .iter()
            .find(|c| c.id() == id)
            .cloned()
            .ok_or_else(|| WalletError::UnknownConnector(id.to_string()))
    }
}
