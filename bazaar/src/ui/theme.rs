//! # GUI Theme
//!
//! Dark theme for egui: near-black panels, white text, and a gold accent.
//! Discount cells use the status colours (green for non-negative, red for
//! negative).

use egui::Theme as EguiTheme;
use egui::{Color32, Context, Stroke, Visuals};

use crate::app::view_model::DiscountColor;

/// Bazaar color palette
#[derive(Clone)]
pub struct BazaarColors {
    /// Near-black background
    pub background: Color32,
    /// Bright white text
    pub text: Color32,
    /// Gold accent (headers, hover, selection)
    pub gold: Color32,
    /// Dark gold (pressed widgets)
    pub gold_dark: Color32,
    /// Dark gray borders
    pub border_dark: Color32,
    /// Success green
    pub green_success: Color32,
    /// Error red
    pub red_error: Color32,
    /// Warning orange
    pub yellow_warning: Color32,
    /// Info blue
    pub blue_info: Color32,
    /// Dark gray for inactive elements
    pub gray_inactive: Color32,
    /// Medium gray for secondary text
    pub gray_secondary: Color32,
}

impl Default for BazaarColors {
    fn default() -> Self {
        BazaarColors {
            background: Color32::from_rgb(12, 12, 14),        // #0C0C0E
            text: Color32::from_rgb(240, 240, 240),           // #F0F0F0
            gold: Color32::from_rgb(230, 180, 60),            // #E6B43C
            gold_dark: Color32::from_rgb(120, 90, 20),        // #785A14

            border_dark: Color32::from_rgb(51, 51, 51),       // #333333

            green_success: Color32::from_rgb(60, 200, 90),    // #3CC85A
            red_error: Color32::from_rgb(235, 70, 70),        // #EB4646
            yellow_warning: Color32::from_rgb(255, 170, 0),   // #FFAA00
            blue_info: Color32::from_rgb(100, 150, 255),      // #6496FF

            gray_inactive: Color32::from_rgb(30, 30, 34),     // #1E1E22
            gray_secondary: Color32::from_rgb(150, 150, 150), // #969696
        }
    }
}

/// Application theme
pub struct Theme {
    /// Color palette
    pub colors: BazaarColors,
    /// Normal text color
    pub normal: Color32,
    /// Headers and highlighted items
    pub selected: Color32,
    /// Border color
    pub border: Color32,
    /// Dimmed/secondary text
    pub dim: Color32,
    pub success: Color32,
    pub error: Color32,
    pub warning: Color32,
    pub info: Color32,
    pub background: Color32,
}

impl Default for Theme {
    fn default() -> Self {
        let colors = BazaarColors::default();
        Theme {
            colors: colors.clone(),
            normal: colors.text,
            selected: colors.gold,
            border: colors.border_dark,
            dim: colors.gray_secondary,
            success: colors.green_success,
            error: colors.red_error,
            warning: colors.yellow_warning,
            info: colors.blue_info,
            background: colors.background,
        }
    }
}

impl Theme {
    /// Text color of a discount cell.
    pub fn discount_color(&self, color: DiscountColor) -> Color32 {
        match color {
            DiscountColor::Negative => self.error,
            DiscountColor::NonNegative => self.success,
            DiscountColor::Neutral => self.dim,
        }
    }

    pub fn visuals(&self) -> Visuals {
        let colors = &self.colors;
        let mut visuals = Visuals::dark();

        visuals.override_text_color = Some(colors.text);

        visuals.faint_bg_color = Color32::from_rgb(20, 20, 24);
        visuals.extreme_bg_color = colors.background;
        visuals.panel_fill = colors.background;
        visuals.window_fill = colors.background;
        visuals.window_stroke = Stroke::new(1.0, colors.border_dark);

        visuals.widgets.noninteractive.bg_fill = colors.gray_inactive;
        visuals.widgets.noninteractive.bg_stroke = Stroke::new(1.0, colors.border_dark);
        visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, colors.text);

        visuals.widgets.inactive.bg_fill = colors.gray_inactive;
        visuals.widgets.inactive.bg_stroke = Stroke::new(1.0, colors.border_dark);
        visuals.widgets.inactive.weak_bg_fill = Color32::from_rgb(36, 36, 40);

        visuals.widgets.hovered.bg_fill = Color32::from_rgb(50, 40, 15);
        visuals.widgets.hovered.bg_stroke = Stroke::new(1.5, colors.gold);
        visuals.widgets.hovered.weak_bg_fill = Color32::from_rgb(45, 36, 12);

        visuals.widgets.active.bg_fill = colors.gold_dark;
        visuals.widgets.active.bg_stroke = Stroke::new(2.0, colors.gold);
        visuals.widgets.active.weak_bg_fill = colors.gold_dark;

        visuals.widgets.open.bg_fill = Color32::from_rgb(50, 40, 15);
        visuals.widgets.open.bg_stroke = Stroke::new(1.5, colors.gold);

        visuals.selection.bg_fill = Color32::from_rgba_unmultiplied(230, 180, 60, 60);
        visuals.selection.stroke = Stroke::new(1.5, colors.gold);

        visuals.hyperlink_color = colors.blue_info;
        visuals.striped = true;

        visuals
    }

    /// Apply the theme to an egui context (dark and light variants).
    pub fn apply(ctx: &Context) {
        let visuals = Self::default().visuals();

        for variant in [EguiTheme::Dark, EguiTheme::Light] {
            let visuals = visuals.clone();
            ctx.style_mut_of(variant, |style| {
                style.visuals = visuals;
                style.spacing.item_spacing = egui::Vec2::new(8.0, 6.0);
                style.spacing.button_padding = egui::Vec2::new(10.0, 4.0);
                style.spacing.interact_size = egui::Vec2::new(32.0, 24.0);
            });
        }

        tracing::debug!("Applied theme visuals");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_discount_colors() {
        let theme = Theme::default();
        assert_eq!(theme.discount_color(DiscountColor::Negative), theme.error);
        assert_eq!(theme.discount_color(DiscountColor::NonNegative), theme.success);
        assert_eq!(theme.discount_color(DiscountColor::Neutral), theme.dim);
        assert_ne!(theme.error, theme.success);
    }
}
