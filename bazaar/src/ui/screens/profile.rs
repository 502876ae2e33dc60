//! # Profile Panel
//!
//! Wallet connection panel: the connected account with a Disconnect button,
//! or one button per connector option.

use shared::truncate_address;

use crate::app::state::{ConnectorOption, WalletState};
use crate::services::wallet::WalletStatus;
use crate::ui::theme::Theme;

/// Wallet action requested this frame.
#[derive(Debug, Clone, PartialEq)]
pub enum ProfileAction {
    Connect(String),
    Disconnect,
}

/// Button caption for a connector option.
pub fn connector_label(option: &ConnectorOption, pending: Option<&str>) -> String {
    let mut label = option.name.clone();
    if !option.ready {
        label.push_str(" (unsupported)");
    }
    if pending == Some(option.id.as_str()) {
        label.push_str(" (connecting)");
    }
    label
}

pub fn render(ui: &mut egui::Ui, wallet: &WalletState) -> Option<ProfileAction> {
    let theme = Theme::default();
    let mut action = None;

    if let Some(account) = wallet.account() {
        ui.horizontal(|ui| {
            ui.colored_label(theme.success, "●");
            ui.label(truncate_address(account)).on_hover_text(account);
            if let Some(name) = &wallet.connector_name {
                ui.colored_label(theme.dim, format!("via {}", name));
            }
            if ui.button("Disconnect").clicked() {
                action = Some(ProfileAction::Disconnect);
            }
        });
        return action;
    }

    ui.horizontal_wrapped(|ui| {
        for option in &wallet.options {
            let label = connector_label(option, wallet.pending_connector.as_deref());
            let enabled = option.ready && wallet.pending_connector.is_none();
            if ui.add_enabled(enabled, egui::Button::new(label)).clicked() {
                action = Some(ProfileAction::Connect(option.id.clone()));
            }
        }
    });

    if let WalletStatus::Error(message) = &wallet.status {
        ui.colored_label(theme.error, message);
    }

    action
}
