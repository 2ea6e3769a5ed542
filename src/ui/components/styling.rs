//! # Styling Functions
//!
//! This module contains the global egui style setup for the demo.
//!
//! ## Key Functions:
//! - `setup_demo_style()` - Configure global egui styling
//!
//! ## Purpose:
//! Centralizing style configuration keeps the screen code free of visual
//! tweaking and makes the demo easy to restyle in one place.

use eframe::egui;

use super::theme::colors;

/// Setup the global UI styling for the demo
///
/// Configures panel fill, text styles and button spacing so the single
/// screen looks consistent without per-widget styling.
pub fn setup_demo_style(ctx: &egui::Context) {
    ctx.set_style({
        let mut style = (*ctx.style()).clone();

        style.visuals.panel_fill = colors::PANEL_BACKGROUND;
        style.visuals.button_frame = true;
        style.visuals.override_text_color = Some(colors::TEXT_HEADING);

        style.text_styles.insert(
            egui::TextStyle::Heading,
            egui::FontId::new(24.0, egui::FontFamily::Proportional),
        );
        style.text_styles.insert(
            egui::TextStyle::Body,
            egui::FontId::new(15.0, egui::FontFamily::Proportional),
        );
        style.text_styles.insert(
            egui::TextStyle::Button,
            egui::FontId::new(16.0, egui::FontFamily::Proportional),
        );

        // Rounded corners and padding
        style.spacing.button_padding = egui::vec2(12.0, 8.0);
        style.visuals.widgets.inactive.rounding = egui::Rounding::same(8.0);
        style.visuals.widgets.hovered.rounding = egui::Rounding::same(8.0);
        style.visuals.widgets.active.rounding = egui::Rounding::same(8.0);

        style
    });
}
