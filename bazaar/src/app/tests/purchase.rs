//! # Purchase Tests

use super::*;
use crate::core::error::AppError;

/// App with CryptoPunks loaded and, optionally, a connected wallet.
async fn loaded_app(purchases: Option<Arc<ScriptedPurchase>>, connect: bool) -> App {
    let listings = Arc::new(GatedListings::default());
    let mut context = with_connector(
        test_context(listings.clone()),
        ScriptedConnector {
            id: "watchAddress",
            name: "Watch Address",
            ready: true,
            result: Ok(ACCOUNT.to_string()),
        },
    );
    if let Some(purchases) = purchases {
        context = with_purchases(context, purchases);
    }
    let mut app = App::new_with(context);

    listings.wait_for_fetches(1).await;
    listings.resolve(0, Ok(vec![listing("1", Some(-2.0))]));
    apply_next_event(&mut app).await;

    if connect {
        app.connect_wallet("watchAddress").unwrap();
        apply_next_event(&mut app).await;
    }
    app.take_notifications();
    app
}

fn step(id: &str, completed: usize, total: usize) -> PurchaseStep {
    PurchaseStep {
        id: id.to_string(),
        action: format!("{} action", id),
        description: String::new(),
        completed_items: completed,
        total_items: total,
    }
}

#[tokio::test]
async fn test_buy_without_key_fails_fast() {
    let mut app = loaded_app(None, true).await;
    assert!(!app.snapshot().purchases_enabled);

    let result = app.buy("1");

    match result {
        Err(AppError::Config(msg)) => assert!(msg.contains("RESERVOIR_KEY")),
        other => panic!("expected config error, got {:?}", other),
    }
    assert!(app.snapshot().purchase.is_none());
    assert_eq!(app.take_notifications()[0].level, NotificationLevel::Error);
}

#[tokio::test]
async fn test_buy_requires_wallet() {
    let purchases = Arc::new(ScriptedPurchase::default());
    let mut app = loaded_app(Some(purchases.clone()), false).await;

    assert!(matches!(app.buy("1"), Err(AppError::Purchase(_))));
    assert!(purchases.calls.lock().is_empty());
}

#[tokio::test]
async fn test_buy_unlisted_token() {
    let purchases = Arc::new(ScriptedPurchase::default());
    let mut app = loaded_app(Some(purchases), true).await;

    assert!(matches!(app.buy("999"), Err(AppError::Validation(_))));
}

#[tokio::test]
async fn test_buy_reports_progress() {
    let purchases = Arc::new(ScriptedPurchase {
        steps: vec![step("currency-approval", 1, 1), step("sale", 0, 1)],
        ..Default::default()
    });
    let mut app = loaded_app(Some(purchases.clone()), true).await;

    app.buy("1").unwrap();
    assert!(app.snapshot().purchase.unwrap().in_progress());

    // Two progress events, then the finish event.
    for _ in 0..3 {
        apply_next_event(&mut app).await;
    }

    assert_eq!(
        *purchases.calls.lock(),
        [(
            "0xb47e3cd837ddf8e4c57f05d70ab865de6e193bbb:1".to_string(),
            1,
            ACCOUNT.to_string()
        )]
    );

    let purchase = app.snapshot().purchase.unwrap();
    assert_eq!(purchase.outcome, PurchaseOutcome::StepsReady);
    assert_eq!(purchase.pending_step().map(|s| s.id.as_str()), Some("sale"));
    let ids: Vec<_> = purchase.steps.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, ["currency-approval", "sale"]);

    let notifications = app.take_notifications();
    assert_eq!(notifications.len(), 1);
    assert_eq!(notifications[0].level, NotificationLevel::Info);
    assert!(notifications[0].message.contains("sale action"));
}

#[tokio::test]
async fn test_buy_failure() {
    let purchases = Arc::new(ScriptedPurchase {
        fail_with: Some("order is no longer fillable".to_string()),
        ..Default::default()
    });
    let mut app = loaded_app(Some(purchases), true).await;

    app.buy("1").unwrap();
    apply_next_event(&mut app).await;

    let purchase = app.snapshot().purchase.unwrap();
    assert!(matches!(purchase.outcome, PurchaseOutcome::Failed(ref msg) if msg.contains("no longer fillable")));
}

#[tokio::test]
async fn test_second_buy_while_in_progress() {
    let purchases = Arc::new(ScriptedPurchase::default());
    let mut app = loaded_app(Some(purchases), true).await;

    app.buy("1").unwrap();
    assert!(matches!(app.buy("1"), Err(AppError::Purchase(_))));
}

#[tokio::test]
async fn test_buy_with_all_steps_complete_is_submitted() {
    let purchases = Arc::new(ScriptedPurchase {
        steps: vec![step("sale", 1, 1)],
        ..Default::default()
    });
    let mut app = loaded_app(Some(purchases), true).await;

    app.buy("1").unwrap();
    for _ in 0..2 {
        apply_next_event(&mut app).await;
    }

    let purchase = app.snapshot().purchase.unwrap();
    assert_eq!(purchase.outcome, PurchaseOutcome::StepsReady);
    assert!(purchase.pending_step().is_none());

    let notifications = app.take_notifications();
    assert_eq!(notifications[0].level, NotificationLevel::Success);
    assert_eq!(notifications[0].message, "Token #1: purchase submitted");
}
