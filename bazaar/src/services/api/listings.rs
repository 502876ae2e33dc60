//! # Listing Endpoint
//!
//! `GET {base}/collection?contract={address}` and coercion of its loosely
//! typed body into [`Listing`] values.

use reqwest::StatusCode;
use serde_json::Value;
use shared::ListingRecord;

use super::client::ListingClient;
use crate::app::state::Listing;
use crate::core::error::FetchError;

/// Fetch the listings of one collection contract.
#[tracing::instrument(skip(client), fields(contract = %contract_address))]
pub async fn get_listings(
    client: &ListingClient,
    contract_address: &str,
) -> Result<Vec<Listing>, FetchError> {
    let start = std::time::Instant::now();
    let url = format!("{}/collection", client.base_url());

    tracing::debug!(url = %url, "Fetching listings");

    let response = client
        .client
        .get(&url)
        .query(&[("contract", contract_address)])
        .send()
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Listing fetch network error");
            client.map_transport_error(e)
        })?;

    let status = response.status();
    check_status(status).inspect_err(|_| {
        tracing::warn!(
            status = status.as_u16(),
            duration_ms = start.elapsed().as_millis(),
            "Listing fetch failed"
        );
    })?;

    let body = response.text().await.map_err(|e| {
        tracing::error!(error = %e, "Listing body read error");
        client.map_transport_error(e)
    })?;

    let (listings, dropped) = parse_listings(&body).inspect_err(|e| {
        tracing::error!(error = %e, "Listing response parse error");
    })?;

    if dropped > 0 {
        tracing::warn!(dropped, kept = listings.len(), "Dropped listing records without a usable token id");
    }
    tracing::debug!(
        duration_ms = start.elapsed().as_millis(),
        count = listings.len(),
        "Listings fetched successfully"
    );

    Ok(listings)
}

/// Map any non-2xx status to [`FetchError::Status`].
pub fn check_status(status: StatusCode) -> Result<(), FetchError> {
    if status.is_success() {
        Ok(())
    } else {
        Err(FetchError::Status(status.as_u16()))
    }
}

/// Parse a response body into listings.
///
/// The body must be a JSON array. Elements that are not objects, or that
/// carry no usable token id, are dropped; the second value counts them.
pub fn parse_listings(body: &str) -> Result<(Vec<Listing>, usize), FetchError> {
    let value: Value =
        serde_json::from_str(body).map_err(|e| FetchError::Parse(e.to_string()))?;

    let items = match value {
        Value::Array(items) => items,
        other => {
            return Err(FetchError::Parse(format!(
                "expected a JSON array of listings, got {}",
                json_kind(&other)
            )))
        }
    };

    let total = items.len();
    let listings: Vec<Listing> = items
        .into_iter()
        .filter_map(|item| serde_json::from_value::<ListingRecord>(item).ok())
        .filter_map(Listing::from_record)
        .collect();

    let dropped = total - listings.len();
    Ok((listings, dropped))
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
