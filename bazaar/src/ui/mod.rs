//! # GUI Rendering
//!
//! Draws one frame from a cloned [`AppState`] snapshot and forwards user
//! intent to [`App`] after drawing, so no lock is held while painting.
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │ Bargain Bazaar             [wallet profile]  │  header
//! │ Buy undervalued NFTs                         │
//! ├──────────────────────────────────────────────┤
//! │ Collection [CryptoPunks ▾]                   │
//! │ img │ ID │ Listed │ Value │ Discount │ Buy   │  table
//! ├──────────────────────────────────────────────┤
//! │ wallet · load state · counters               │  status bar
//! └──────────────────────────────────────────────┘
//! ```

pub mod screens;
pub mod theme;
pub mod widgets;

use shared::truncate_address;

use crate::app::{App, AppState, LoadState, PurchaseOutcome};
use screens::collection::{self, CollectionActions};
use screens::profile::{self, ProfileAction};
use theme::Theme;
use widgets::notifications::NotificationManager;
use widgets::tables;

/// Main render function - called every frame by eframe
pub fn render(ctx: &egui::Context, app: &mut App, notifications: &mut NotificationManager) {
    for notification in app.take_notifications() {
        notifications.push(notification);
    }

    let state = app.snapshot();
    let theme = Theme::default();

    let mut profile_action = None;
    let mut collection_actions = CollectionActions::default();
    let mut buy_requests: Vec<String> = Vec::new();

    egui::TopBottomPanel::top("header").show(ctx, |ui| {
        ui.add_space(6.0);
        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                ui.heading(egui::RichText::new("Bargain Bazaar").color(theme.selected).strong());
                ui.colored_label(theme.dim, "Buy undervalued NFTs");
            });
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.vertical(|ui| {
                    profile_action = profile::render(ui, &state.wallet);
                });
            });
        });
        ui.add_space(6.0);
    });

    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        render_status_bar(ui, &state, &theme);
    });

    egui::CentralPanel::default().show(ctx, |ui| {
        collection::render_collection_picker(ui, &state.selection.selected, &mut collection_actions);
        render_purchase(ui, &state, &theme);
        ui.separator();

        let view = collection::table_view(&state.selection);
        let buy_enabled = state.purchases_enabled && state.wallet.is_connected();
        collection::render_table_view(ui, &view, buy_enabled, &mut collection_actions, |token_id| {
            buy_requests.push(token_id.to_string());
        });
    });

    notifications.show(ctx);

    // Apply intent after painting. Handlers report their own failures as toasts.
    if let Some(name) = collection_actions.select {
        let _ = app.select_collection(&name);
    }
    if collection_actions.retry {
        let _ = app.retry();
    }
    match profile_action {
        Some(ProfileAction::Connect(id)) => {
            let _ = app.connect_wallet(&id);
        }
        Some(ProfileAction::Disconnect) => app.disconnect_wallet(),
        None => {}
    }
    for token_id in buy_requests {
        let _ = app.buy(&token_id);
    }
}

/// Latest purchase step, if a purchase has been requested.
fn render_purchase(ui: &mut egui::Ui, state: &AppState, theme: &Theme) {
    let Some(purchase) = &state.purchase else {
        return;
    };

    ui.horizontal(|ui| {
        ui.label(format!("Token #{}", purchase.token.token_id));
        match (&purchase.outcome, purchase.steps.last()) {
            (PurchaseOutcome::Failed(message), _) => {
                ui.colored_label(theme.error, message);
            }
            (PurchaseOutcome::InProgress, None) => {
                ui.spinner();
                ui.colored_label(theme.dim, "Requesting buy steps...");
            }
            (outcome, Some(step)) => {
                let done = *outcome == PurchaseOutcome::StepsReady && purchase.pending_step().is_none();
                let color = if done { theme.success } else { theme.info };
                ui.colored_label(color, &step.action);
                ui.colored_label(
                    theme.dim,
                    format!("{} ({}/{})", step.description, step.completed_items, step.total_items),
                );
            }
            (_, None) => {
                ui.colored_label(theme.success, "Submitted");
            }
        }
    });
}

fn render_status_bar(ui: &mut egui::Ui, state: &AppState, theme: &Theme) {
    ui.horizontal(|ui| {
        match state.wallet.account() {
            Some(account) => ui.colored_label(theme.success, format!("Wallet: {}", truncate_address(account))),
            None => ui.colored_label(theme.dim, "No Wallet"),
        };

        ui.separator();

        let (color, text) = match &state.selection.load {
            LoadState::Idle => (theme.dim, "Idle".to_string()),
            LoadState::Loading { seq } => (theme.warning, format!("Loading #{}", seq)),
            LoadState::Ready => (theme.success, format!("{} listings", state.selection.listings.len())),
            LoadState::Failed { .. } => (theme.error, "Failed".to_string()),
        };
        ui.colored_label(color, text);

        ui.separator();

        if !state.purchases_enabled {
            ui.colored_label(theme.dim, "Buying disabled (no RESERVOIR_KEY)");
            ui.separator();
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            tables::render_stats_summary(
                ui,
                &[
                    ("Stale", state.diagnostics.stale_results),
                    ("Failed", state.diagnostics.fetch_errors),
                ],
            );
        });
    });
}
