//! # Discount View-Model
//!
//! Turns validated listings into display-ready rows. Pure and total: every
//! [`Listing`] maps to exactly one [`RowViewModel`], and the discount value is
//! only formatted, never recomputed.

use crate::app::state::Listing;
use crate::utils::validation::{format_amount, format_discount};

/// Placeholder for values the listing service did not provide.
pub const MISSING: &str = "—";

/// Presentation class of a discount. Drives the cell colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiscountColor {
    Negative,
    NonNegative,
    /// No discount reported.
    Neutral,
}

impl DiscountColor {
    pub fn of(discount: Option<f64>) -> Self {
        match discount {
            Some(d) if d < 0.0 => DiscountColor::Negative,
            Some(_) => DiscountColor::NonNegative,
            None => DiscountColor::Neutral,
        }
    }
}

/// One table row.
#[derive(Debug, Clone, PartialEq)]
pub struct RowViewModel {
    pub token_id: String,
    pub image_url: Option<String>,
    pub list_price: String,
    pub value_price: String,
    pub discount_label: String,
    pub discount_color: DiscountColor,
}

fn label(value: Option<f64>, format: fn(f64) -> String) -> String {
    value.map(format).unwrap_or_else(|| MISSING.to_string())
}

pub fn to_row(listing: &Listing) -> RowViewModel {
    RowViewModel {
        token_id: listing.token_id.clone(),
        image_url: listing.image_url.clone(),
        list_price: label(listing.list_price, format_amount),
        value_price: label(listing.value_price, format_amount),
        discount_label: label(listing.discount, format_discount),
        discount_color: DiscountColor::of(listing.discount),
    }
}

/// Rows in listing order.
pub fn to_rows(listings: &[Listing]) -> Vec<RowViewModel> {
    listings.iter().map(to_row).collect()
}
