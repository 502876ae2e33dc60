//! # Loading Bar
//!
//! Row of pulsing dots shown while listings load.

use std::time::Duration;

use crate::ui::theme::Theme;

const DOTS: usize = 5;
const DOT_RADIUS: f32 = 4.0;
const DOT_SPACING: f32 = 16.0;
/// Seconds for one pulse to travel across the bar
const PERIOD: f64 = 1.2;

/// Brightness of dot `index` at time `t` seconds, in `0.25..=1.0`.
pub fn dot_intensity(index: usize, t: f64) -> f32 {
    let phase = (t / PERIOD).fract() * DOTS as f64;
    let distance = (phase - index as f64).abs();
    let distance = distance.min(DOTS as f64 - distance);
    (1.0 - (distance / 2.0).min(1.0) * 0.75) as f32
}

/// Render the loading bar and schedule the next animation frame
pub fn render_loading_bar(ui: &mut egui::Ui, theme: &Theme) {
    let width = DOT_SPACING * DOTS as f32;
    let (rect, _) = ui.allocate_exact_size(egui::vec2(width, DOT_RADIUS * 4.0), egui::Sense::hover());
    let t = ui.input(|i| i.time);

    let painter = ui.painter_at(rect);
    for index in 0..DOTS {
        let center = egui::pos2(
            rect.left() + DOT_SPACING * (index as f32 + 0.5),
            rect.center().y,
        );
        let color = theme.selected.gamma_multiply(dot_intensity(index, t));
        painter.circle_filled(center, DOT_RADIUS, color);
    }

    ui.ctx().request_repaint_after(Duration::from_millis(33));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intensity_bounds() {
        for step in 0..100 {
            let t = step as f64 * 0.037;
            for index in 0..DOTS {
                let v = dot_intensity(index, t);
                assert!((0.25..=1.0).contains(&v), "intensity {} out of range", v);
            }
        }
    }

    #[test]
    fn test_pulse_moves_across_dots() {
        assert_eq!(dot_intensity(0, 0.0), 1.0);
        let step = PERIOD / DOTS as f64;
        assert!((dot_intensity(2, 2.0 * step) - 1.0).abs() < 1e-6);
        assert!(dot_intensity(0, 2.0 * step) < 1.0);
    }
}
