//! # Listing API Client
//!
//! HTTP client for the listing data service.

use std::time::Duration;

use reqwest::Client;

use crate::app::state::Listing;
use crate::core::config::Config;
use crate::core::error::FetchError;
use crate::core::service::ListingService;

/// HTTP client for the listing data service.
///
/// Holds one connection pool for the lifetime of the process.
pub struct ListingClient {
    pub(crate) client: Client,
    base_url: String,
    pub(crate) timeout: Duration,
}

impl ListingClient {
    /// Create a client for the configured service.
    ///
    /// Requests time out after the configured fetch timeout.
    pub fn new(config: &Config) -> Self {
        let client = Client::builder()
            .timeout(config.fetch_timeout)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: config.listing_api_url.clone(),
            timeout: config.fetch_timeout,
        }
    }

    pub(crate) fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Classify a reqwest failure, reporting timeouts with the configured bound.
    pub(crate) fn map_transport_error(&self, err: reqwest::Error) -> FetchError {
        if err.is_timeout() {
            FetchError::Timeout(self.timeout)
        } else {
            FetchError::from(err)
        }
    }
}

#[async_trait::async_trait]
impl ListingService for ListingClient {
    async fn fetch_listings(&self, contract_address: &str) -> Result<Vec<Listing>, FetchError> {
        crate::services::api::listings::get_listings(self, contract_address).await
    }
}
