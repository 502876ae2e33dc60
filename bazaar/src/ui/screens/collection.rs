//! # Collection Screen
//!
//! The collection dropdown and the discount table.
//!
//! Rendering is split in two: [`table_view`] decides *what* to show from a
//! [`SelectionState`] snapshot and is a pure function; [`render_table_view`]
//! paints it. Buy clicks leave the painter only through the `on_buy`
//! callback, carrying the token id.

use crate::app::collections;
use crate::app::state::{LoadState, SelectionState};
use crate::app::view_model::{to_rows, RowViewModel};
use crate::ui::theme::Theme;
use crate::ui::widgets::{loading_bar, tables};

pub const COLUMNS: [&str; 6] = ["", "ID", "Listed Price", "Value", "Discount", "Buy"];
const THUMBNAIL: f32 = 50.0;

/// What the table area shows.
#[derive(Debug, Clone, PartialEq)]
pub enum TableView {
    /// Before the first selection.
    Idle,
    Loading,
    Failed { message: String },
    /// Rows in listing order, possibly none.
    Rows(Vec<RowViewModel>),
}

pub fn table_view(selection: &SelectionState) -> TableView {
    match &selection.load {
        LoadState::Idle => TableView::Idle,
        LoadState::Loading { .. } => TableView::Loading,
        LoadState::Failed { error } => TableView::Failed {
            message: error.to_string(),
        },
        LoadState::Ready => TableView::Rows(to_rows(&selection.listings)),
    }
}

/// User intent collected while painting one frame.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct CollectionActions {
    pub select: Option<String>,
    pub retry: bool,
}

/// Collection dropdown. Offers only selectable registry entries.
pub fn render_collection_picker(ui: &mut egui::Ui, selected: &str, actions: &mut CollectionActions) {
    ui.horizontal(|ui| {
        ui.label("Collection");
        egui::ComboBox::from_id_salt("collection_picker")
            .selected_text(selected)
            .width(220.0)
            .show_ui(ui, |ui| {
                for collection in collections::selectable() {
                    let is_selected = collection.name == selected;
                    if ui.selectable_label(is_selected, collection.name).clicked() {
                        actions.select = Some(collection.name.to_string());
                    }
                }
            });
    });
}

/// Paint a [`TableView`].
pub fn render_table_view(
    ui: &mut egui::Ui,
    view: &TableView,
    buy_enabled: bool,
    actions: &mut CollectionActions,
    mut on_buy: impl FnMut(&str),
) {
    let theme = Theme::default();

    match view {
        TableView::Idle => {
            tables::render_empty_state(ui, "Pick a collection", None, &theme);
        }
        TableView::Loading => {
            ui.vertical_centered(|ui| {
                ui.add_space(20.0);
                loading_bar::render_loading_bar(ui, &theme);
            });
        }
        TableView::Failed { message } => {
            ui.vertical_centered(|ui| {
                ui.add_space(20.0);
                ui.colored_label(theme.error, format!("Could not load listings: {}", message));
                ui.add_space(10.0);
                if ui.button("Retry").clicked() {
                    actions.retry = true;
                }
            });
        }
        TableView::Rows(rows) if rows.is_empty() => {
            tables::render_empty_state(ui, "No listings", Some("Nothing is listed for this collection right now."), &theme);
        }
        TableView::Rows(rows) => {
            let config = tables::TableConfig {
                num_columns: COLUMNS.len(),
                scrollable: true,
                min_row_height: THUMBNAIL,
                ..Default::default()
            };
            tables::render_table(ui, "listing_table", config, &COLUMNS, &theme, |ui| {
                for row in rows {
                    render_row(ui, row, buy_enabled, &theme, &mut on_buy);
                    ui.end_row();
                }
            });
        }
    }
}

fn render_row(
    ui: &mut egui::Ui,
    row: &RowViewModel,
    buy_enabled: bool,
    theme: &Theme,
    on_buy: &mut impl FnMut(&str),
) {
    match &row.image_url {
        Some(url) => {
            ui.add(
                egui::Image::new(url.as_str())
                    .fit_to_exact_size(egui::vec2(THUMBNAIL, THUMBNAIL))
                    .corner_radius(4),
            );
        }
        None => {
            let (rect, _) = ui.allocate_exact_size(egui::vec2(THUMBNAIL, THUMBNAIL), egui::Sense::hover());
            ui.painter().rect_filled(rect, 4, theme.colors.gray_inactive);
        }
    }

    ui.label(&row.token_id);
    ui.label(&row.list_price);
    ui.label(&row.value_price);
    ui.colored_label(theme.discount_color(row.discount_color), &row.discount_label);

    if ui.add_enabled(buy_enabled, egui::Button::new("Buy")).clicked() {
        on_buy(&row.token_id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::{Listing, Settlement};
    use crate::app::view_model::DiscountColor;
    use crate::core::error::FetchError;

    fn listing(token_id: &str, discount: f64) -> Listing {
        Listing {
            token_id: token_id.to_string(),
            image_url: Some("a.png".to_string()),
            list_price: Some(10.0),
            value_price: Some(8.0),
            discount: Some(discount),
        }
    }

    fn settled(result: Result<Vec<Listing>, FetchError>) -> SelectionState {
        let (loading, ticket) = SelectionState::default().select("CryptoPunks").unwrap();
        match loading.settle(&ticket, result) {
            Settlement::Applied(next) => next,
            Settlement::Stale => panic!("latest fetch must apply"),
        }
    }

    #[test]
    fn test_idle_before_mount() {
        assert_eq!(table_view(&SelectionState::default()), TableView::Idle);
    }

    #[test]
    fn test_loading_shows_no_rows() {
        let (loading, _) = SelectionState::default().select("CryptoPunks").unwrap();
        assert_eq!(table_view(&loading), TableView::Loading);
    }

    #[test]
    fn test_ready_rows() {
        let view = table_view(&settled(Ok(vec![listing("1", -2.0)])));
        let TableView::Rows(rows) = view else {
            panic!("expected rows, got {:?}", view);
        };
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].token_id, "1");
        assert_eq!(rows[0].discount_color, DiscountColor::Negative);
    }

    #[test]
    fn test_empty_result_is_zero_rows_not_loading() {
        assert_eq!(table_view(&settled(Ok(Vec::new()))), TableView::Rows(Vec::new()));
    }

    #[test]
    fn test_failure_message() {
        assert_eq!(
            table_view(&settled(Err(FetchError::Status(500)))),
            TableView::Failed {
                message: "listing service returned HTTP 500".to_string()
            }
        );
    }

    #[test]
    fn test_columns() {
        assert_eq!(COLUMNS[1..], ["ID", "Listed Price", "Value", "Discount", "Buy"]);
    }
}
