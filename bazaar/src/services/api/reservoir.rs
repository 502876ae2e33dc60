//! # Reservoir Marketplace Client
//!
//! Requests the buy steps for a token from the Reservoir API and reports
//! them as [`PurchaseStep`]s. Steps that need a signature or a transaction
//! are completed in the user's wallet, outside this process.

use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::app::state::{PurchaseStep, TokenRef};
use crate::core::config::Config;
use crate::core::error::AppError;
use crate::core::service::PurchaseService;

/// Reservoir API client. Only constructed when an API key is configured.
pub struct ReservoirClient {
    client: Client,
    base_url: String,
    api_key: String,
    source: String,
}

impl ReservoirClient {
    /// Build a client from configuration.
    ///
    /// Fails with [`AppError::Config`] when `RESERVOIR_KEY` is not set; an
    /// empty key is never sent.
    pub fn from_config(config: &Config) -> Result<Self, AppError> {
        let api_key = config.reservoir_key.clone().ok_or_else(|| {
            AppError::Config("RESERVOIR_KEY is not set; buying is disabled".to_string())
        })?;

        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .unwrap_or_else(|_| Client::new());

        Ok(Self {
            client,
            base_url: config.reservoir_api_url.clone(),
            api_key,
            source: source_domain(&config.reservoir_source),
        })
    }
}

#[async_trait::async_trait]
impl PurchaseService for ReservoirClient {
    #[tracing::instrument(skip(self, token, on_progress), fields(token = %token))]
    async fn buy(
        &self,
        token: &TokenRef,
        quantity: u32,
        taker: &str,
        on_progress: &(dyn Fn(PurchaseStep) + Send + Sync),
    ) -> Result<(), AppError> {
        let start = std::time::Instant::now();
        let request = build_request(token, quantity, taker, &self.source);

        tracing::info!("Requesting buy steps");

        let response = self
            .client
            .post(format!("{}/execute/buy/v7", self.base_url))
            .header("x-api-key", &self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Buy request network error");
                AppError::Purchase(format!("Network error: {}", e))
            })?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<ReservoirError>()
                .await
                .ok()
                .and_then(|e| e.message)
                .unwrap_or_else(|| status.to_string());
            tracing::warn!(
                status = status.as_u16(),
                error = %message,
                duration_ms = start.elapsed().as_millis(),
                "Buy request rejected"
            );
            return Err(AppError::Purchase(message));
        }

        let body = response.json::<ExecuteResponse>().await.map_err(|e| {
            tracing::error!(error = %e, "Buy response parse error");
            AppError::Purchase(format!("Failed to parse response: {}", e))
        })?;

        let steps = steps_from_response(body);
        if steps.is_empty() {
            return Err(AppError::Purchase("marketplace returned no buy steps".to_string()));
        }

        for step in steps {
            tracing::info!(
                step = %step.id,
                action = %step.action,
                completed = step.completed_items,
                total = step.total_items,
                "Buy step"
            );
            on_progress(step);
        }

        tracing::info!(duration_ms = start.elapsed().as_millis(), "Buy steps received");
        Ok(())
    }
}

/// Reservoir expects the bare domain of the order source.
fn source_domain(source: &str) -> String {
    source
        .trim_start_matches("https://")
        .trim_start_matches("http://")
        .trim_end_matches('/')
        .to_string()
}

fn build_request(token: &TokenRef, quantity: u32, taker: &str, source: &str) -> ExecuteRequest {
    ExecuteRequest {
        items: vec![ExecuteItem {
            token: token.to_string(),
            quantity,
        }],
        taker: taker.to_string(),
        source: source.to_string(),
    }
}

fn steps_from_response(response: ExecuteResponse) -> Vec<PurchaseStep> {
    response
        .steps
        .into_iter()
        .map(|step| PurchaseStep {
            completed_items: step.items.iter().filter(|i| i.status == "complete").count(),
            total_items: step.items.len(),
            id: step.id,
            action: step.action,
            description: step.description,
        })
        .collect()
}

// ==================== RESERVOIR WIRE TYPES ====================

#[derive(Debug, Clone, Serialize)]
struct ExecuteRequest {
    items: Vec<ExecuteItem>,
    taker: String,
    source: String,
}

#[derive(Debug, Clone, Serialize)]
struct ExecuteItem {
    token: String,
    quantity: u32,
}

#[derive(Debug, Clone, Deserialize)]
struct ExecuteResponse {
    #[serde(default)]
    steps: Vec<ExecuteStep>,
}

#[derive(Debug, Clone, Deserialize)]
struct ExecuteStep {
    id: String,
    #[serde(default)]
    action: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    items: Vec<StepItem>,
}

#[derive(Debug, Clone, Deserialize)]
struct StepItem {
    #[serde(default)]
    status: String,
}

#[derive(Debug, Clone, Deserialize)]
struct ReservoirError {
    message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token() -> TokenRef {
        TokenRef {
            contract: "0xbc4ca0eda7647a8ab7c2061c2e118a18a936f13d".to_string(),
            token_id: "1".to_string(),
        }
    }

    #[test]
    fn test_source_domain() {
        assert_eq!(source_domain("https://marketplace.reservoir.tools/"), "marketplace.reservoir.tools");
        assert_eq!(source_domain("bazaar.example"), "bazaar.example");
    }

    #[test]
    fn test_request_body() {
        let request = build_request(&token(), 1, "0xabc", "marketplace.reservoir.tools");
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "items": [{ "token": "0xbc4ca0eda7647a8ab7c2061c2e118a18a936f13d:1", "quantity": 1 }],
                "taker": "0xabc",
                "source": "marketplace.reservoir.tools"
            })
        );
    }

    #[test]
    fn test_steps_from_response() {
        let response: ExecuteResponse = serde_json::from_str(
            r#"{
                "requestId": "abc",
                "steps": [
                    {"id": "currency-approval", "action": "Approve", "description": "One-time approval", "kind": "transaction", "items": []},
                    {"id": "sale", "action": "Confirm transaction in your wallet", "description": "Purchase", "kind": "transaction",
                     "items": [{"status": "incomplete"}, {"status": "complete"}]}
                ]
            }"#,
        )
        .unwrap();

        let steps = steps_from_response(response);

        assert_eq!(steps.len(), 2);
        assert_eq!(steps[0].id, "currency-approval");
        assert_eq!(steps[0].total_items, 0);
        assert!(!steps[0].is_complete());
        assert_eq!(steps[1].action, "Confirm transaction in your wallet");
        assert_eq!(steps[1].completed_items, 1);
        assert_eq!(steps[1].total_items, 2);
    }

    #[test]
    fn test_from_config_requires_key() {
        let config = Config::default();
        assert!(matches!(ReservoirClient::from_config(&config), Err(AppError::Config(_))));

        let config = Config {
            reservoir_key: Some("demo-key".to_string()),
            ..Config::default()
        };
        let client = ReservoirClient::from_config(&config).unwrap();
        assert_eq!(client.source, "marketplace.reservoir.tools");
    }
}
