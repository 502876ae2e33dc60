//! # Application State Types
//!
//! Everything the UI renders from: the selection (collection, listings, load
//! state), wallet connection, purchase progress, and diagnostics counters.
//!
//! [`SelectionState`] is updated only through its pure transition functions
//! [`SelectionState::select`] and [`SelectionState::settle`], which return a
//! new snapshot instead of mutating in place.

use std::fmt;

use chrono::{DateTime, Utc};
use shared::ListingRecord;

use crate::app::collections;
use crate::core::error::{FetchError, Result};
use crate::services::wallet::WalletStatus;

/// One NFT listing after validation at the service boundary.
///
/// `discount` is an opaque signed quantity computed upstream; only its sign is
/// ever interpreted.
#[derive(Debug, Clone, PartialEq)]
pub struct Listing {
    pub token_id: String,
    pub image_url: Option<String>,
    pub list_price: Option<f64>,
    pub value_price: Option<f64>,
    pub discount: Option<f64>,
}

impl Listing {
    /// Coerce a raw record. Records without a token id are unusable.
    pub fn from_record(record: ListingRecord) -> Option<Self> {
        Some(Self {
            token_id: record.token_id?,
            image_url: record.image_url,
            list_price: record.list_price,
            value_price: record.value_price,
            discount: record.discount,
        })
    }
}

/// Marketplace reference to one token, rendered as `contract:token_id`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TokenRef {
    pub contract: String,
    pub token_id: String,
}

impl fmt::Display for TokenRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.contract, self.token_id)
    }
}

/// One step reported by the purchase capability.
#[derive(Debug, Clone, PartialEq)]
pub struct PurchaseStep {
    pub id: String,
    pub action: String,
    pub description: String,
    pub completed_items: usize,
    pub total_items: usize,
}

impl PurchaseStep {
    pub fn is_complete(&self) -> bool {
        self.total_items > 0 && self.completed_items == self.total_items
    }
}

/// Load state of the listing table.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState {
    /// Nothing requested yet. Left as soon as the view mounts.
    Idle,
    /// Fetch `seq` is in flight.
    Loading { seq: u64 },
    /// Listings populated, nothing in flight.
    Ready,
    /// The latest fetch failed; listings are empty.
    Failed { error: FetchError },
}

/// Handle for one initiated fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    pub seq: u64,
    pub collection: String,
    pub contract: String,
}

/// Outcome of offering a fetch result to the selection.
#[derive(Debug, Clone, PartialEq)]
pub enum Settlement {
    /// The result belonged to the latest fetch; here is the next snapshot.
    Applied(SelectionState),
    /// A newer selection superseded the fetch; the result was dropped.
    Stale,
}

/// The selected collection and what is known about its listings.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionState {
    pub selected: String,
    pub listings: Vec<Listing>,
    pub load: LoadState,
    /// Sequence number of the most recently initiated fetch.
    pub latest_seq: u64,
}

impl Default for SelectionState {
    fn default() -> Self {
        Self {
            selected: collections::default_collection().name.to_string(),
            listings: Vec::new(),
            load: LoadState::Idle,
            latest_seq: 0,
        }
    }
}

impl SelectionState {
    /// Select `name` and start a new fetch.
    ///
    /// Returns the next snapshot (listings cleared, `Loading`) and the ticket
    /// the fetch must settle with. Fails with
    /// [`AppError::UnknownCollection`](crate::core::error::AppError::UnknownCollection)
    /// without producing a snapshot, so the caller keeps the current one.
    pub fn select(&self, name: &str) -> Result<(SelectionState, FetchTicket)> {
        let contract = collections::lookup(name)?;
        let seq = self.latest_seq + 1;

        let next = SelectionState {
            selected: name.to_string(),
            listings: Vec::new(),
            load: LoadState::Loading { seq },
            latest_seq: seq,
        };
        let ticket = FetchTicket {
            seq,
            collection: name.to_string(),
            contract: contract.to_string(),
        };
        Ok((next, ticket))
    }

    /// Offer the result of fetch `ticket` to this snapshot.
    ///
    /// Only the most recently initiated fetch, while still loading, may
    /// change the snapshot.
    pub fn settle(
        &self,
        ticket: &FetchTicket,
        result: std::result::Result<Vec<Listing>, FetchError>,
    ) -> Settlement {
        match self.load {
            LoadState::Loading { seq } if seq == ticket.seq && ticket.seq == self.latest_seq => {}
            _ => return Settlement::Stale,
        }

        let next = match result {
            Ok(listings) => SelectionState {
                selected: self.selected.clone(),
                listings,
                load: LoadState::Ready,
                latest_seq: self.latest_seq,
            },
            Err(error) => SelectionState {
                selected: self.selected.clone(),
                listings: Vec::new(),
                load: LoadState::Failed { error },
                latest_seq: self.latest_seq,
            },
        };
        Settlement::Applied(next)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.load, LoadState::Loading { .. })
    }

    /// Contract address of the selected collection.
    pub fn contract(&self) -> Option<&'static str> {
        collections::lookup(&self.selected).ok()
    }
}

/// A wallet connection option as shown in the profile panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectorOption {
    pub id: String,
    pub name: String,
    pub ready: bool,
}

/// Wallet connection sub-state.
#[derive(Debug, Clone, PartialEq)]
pub struct WalletState {
    pub status: WalletStatus,
    pub options: Vec<ConnectorOption>,
    /// Connector used for the current connection.
    pub connector_name: Option<String>,
    /// Connector with a connection attempt in flight.
    pub pending_connector: Option<String>,
    /// Id of the attempt in flight. Results carrying any other id are stale.
    pub pending_attempt: Option<u64>,
    /// Last attempt id handed out. Never reused, even across disconnects.
    pub latest_attempt: u64,
}

impl Default for WalletState {
    fn default() -> Self {
        Self {
            status: WalletStatus::Disconnected,
            options: Vec::new(),
            connector_name: None,
            pending_connector: None,
            pending_attempt: None,
            latest_attempt: 0,
        }
    }
}

impl WalletState {
    pub fn account(&self) -> Option<&str> {
        self.status.address()
    }

    pub fn is_connected(&self) -> bool {
        self.status.is_connected()
    }
}

/// How a purchase ended, if it has.
#[derive(Debug, Clone, PartialEq)]
pub enum PurchaseOutcome {
    InProgress,
    /// The marketplace returned the buy steps. Steps that are not complete
    /// yet are signed and submitted in the user's wallet.
    StepsReady,
    Failed(String),
}

/// The most recent buy request.
#[derive(Debug, Clone, PartialEq)]
pub struct PurchaseState {
    pub token: TokenRef,
    pub steps: Vec<PurchaseStep>,
    pub outcome: PurchaseOutcome,
    pub started_at: DateTime<Utc>,
}

impl PurchaseState {
    pub fn new(token: TokenRef) -> Self {
        Self {
            token,
            steps: Vec::new(),
            outcome: PurchaseOutcome::InProgress,
            started_at: Utc::now(),
        }
    }

    pub fn in_progress(&self) -> bool {
        self.outcome == PurchaseOutcome::InProgress
    }

    /// First step still waiting on the wallet.
    pub fn pending_step(&self) -> Option<&PurchaseStep> {
        self.steps.iter().find(|s| !s.is_complete())
    }
}

/// A fetch result that was dropped because a newer selection superseded it.
#[derive(Debug, Clone, PartialEq)]
pub struct StaleRecord {
    pub seq: u64,
    pub collection: String,
    pub at: DateTime<Utc>,
}

/// Counters for conditions that are not surfaced as errors.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Diagnostics {
    pub stale_results: u64,
    pub fetch_errors: u64,
    pub last_stale: Option<StaleRecord>,
}

/// Severity of a user-facing notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// Toast queued by a handler, drained by the UI layer.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
}

/// Complete application state.
#[derive(Debug, Clone)]
pub struct AppState {
    pub selection: SelectionState,
    pub wallet: WalletState,
    pub purchase: Option<PurchaseState>,
    /// False when no marketplace key is configured.
    pub purchases_enabled: bool,
    pub diagnostics: Diagnostics,
    pub pending_notifications: Vec<Notification>,
}

impl AppState {
    pub fn notify(&mut self, level: NotificationLevel, message: impl Into<String>) {
        self.pending_notifications.push(Notification {
            level,
            message: message.into(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::AppError;

    fn listing(token_id: &str, discount: f64) -> Listing {
        Listing {
            token_id: token_id.to_string(),
            image_url: None,
            list_price: Some(10.0),
            value_price: Some(8.0),
            discount: Some(discount),
        }
    }

    #[test]
    fn test_default_selection_is_idle_on_default_collection() {
        let selection = SelectionState::default();
        assert_eq!(selection.selected, "CryptoPunks");
        assert_eq!(selection.load, LoadState::Idle);
        assert!(selection.listings.is_empty());
        assert_eq!(selection.latest_seq, 0);
    }

    #[test]
    fn test_select_clears_listings_and_starts_loading() {
        let ready = SelectionState {
            selected: "CryptoPunks".to_string(),
            listings: vec![listing("1", -2.0)],
            load: LoadState::Ready,
            latest_seq: 4,
        };

        let (next, ticket) = ready.select("Azuki").unwrap();

        assert_eq!(next.selected, "Azuki");
        assert!(next.listings.is_empty());
        assert_eq!(next.load, LoadState::Loading { seq: 5 });
        assert_eq!(ticket.seq, 5);
        assert_eq!(ticket.contract, "0xed5af388653567af2f388e6224dc7c4b3241c544");
        // The input snapshot is untouched.
        assert_eq!(ready.listings.len(), 1);
    }

    #[test]
    fn test_select_unknown_collection() {
        let selection = SelectionState::default();
        assert!(matches!(
            selection.select("NotARealCollection"),
            Err(AppError::UnknownCollection(_))
        ));
    }

    #[test]
    fn test_settle_latest_fetch() {
        let (loading, ticket) = SelectionState::default().select("CryptoPunks").unwrap();

        match loading.settle(&ticket, Ok(vec![listing("1", -2.0)])) {
            Settlement::Applied(next) => {
                assert_eq!(next.load, LoadState::Ready);
                assert_eq!(next.listings, vec![listing("1", -2.0)]);
                assert_eq!(next.latest_seq, ticket.seq);
            }
            Settlement::Stale => panic!("latest fetch must apply"),
        }
    }

    #[test]
    fn test_settle_superseded_fetch_is_stale() {
        let (after_a, ticket_a) = SelectionState::default().select("CryptoPunks").unwrap();
        let (after_b, ticket_b) = after_a.select("Azuki").unwrap();

        assert_eq!(after_b.settle(&ticket_a, Ok(vec![listing("1", 1.0)])), Settlement::Stale);

        let Settlement::Applied(ready) = after_b.settle(&ticket_b, Ok(vec![listing("2", 3.0)])) else {
            panic!("latest fetch must apply");
        };
        // A late result for A after B settled is still stale.
        assert_eq!(ready.settle(&ticket_a, Ok(Vec::new())), Settlement::Stale);
        assert_eq!(ready.listings[0].token_id, "2");
    }

    #[test]
    fn test_settle_twice_is_stale() {
        let (loading, ticket) = SelectionState::default().select("Azuki").unwrap();
        let Settlement::Applied(ready) = loading.settle(&ticket, Ok(Vec::new())) else {
            panic!("latest fetch must apply");
        };
        assert_eq!(ready.settle(&ticket, Ok(vec![listing("9", 0.0)])), Settlement::Stale);
    }

    #[test]
    fn test_settle_failure_leaves_listings_empty() {
        let (loading, ticket) = SelectionState::default().select("Azuki").unwrap();

        let Settlement::Applied(failed) = loading.settle(&ticket, Err(FetchError::Status(500))) else {
            panic!("latest fetch must apply");
        };
        assert!(failed.listings.is_empty());
        assert_eq!(failed.load, LoadState::Failed { error: FetchError::Status(500) });
        assert!(!failed.is_loading());
    }

    #[test]
    fn test_listing_from_record() {
        let record = ListingRecord {
            token_id: Some("7".to_string()),
            discount: Some(1.5),
            ..Default::default()
        };
        let listing = Listing::from_record(record).unwrap();
        assert_eq!(listing.token_id, "7");
        assert_eq!(listing.discount, Some(1.5));
        assert!(listing.list_price.is_none());

        assert!(Listing::from_record(ListingRecord::default()).is_none());
    }

    #[test]
    fn test_token_ref_display() {
        let token = TokenRef {
            contract: "0xbc4ca0eda7647a8ab7c2061c2e118a18a936f13d".to_string(),
            token_id: "1".to_string(),
        };
        assert_eq!(token.to_string(), "0xbc4ca0eda7647a8ab7c2061c2e118a18a936f13d:1");
    }

    #[test]
    fn test_purchase_step_completion() {
        let mut step = PurchaseStep {
            id: "sale".to_string(),
            action: "Confirm transaction in your wallet".to_string(),
            description: String::new(),
            completed_items: 0,
            total_items: 1,
        };
        assert!(!step.is_complete());
        step.completed_items = 1;
        assert!(step.is_complete());
    }
}
