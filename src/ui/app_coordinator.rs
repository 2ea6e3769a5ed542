//! # App Coordinator Module
//!
//! This module contains the main application update loop, implementing the
//! `eframe::App` trait for `CircleGraphApp`.
//!
//! ## Application Flow:
//! 1. Set up the global demo styling
//! 2. Render the header
//! 3. Render the Start button (wired to `show(animated: true)`)
//! 4. Render the circle graph in the remaining space

use eframe::egui;

use crate::ui::app_state::CircleGraphApp;
use crate::ui::components::styling::setup_demo_style;
use crate::ui::components::theme::colors;

impl eframe::App for CircleGraphApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        setup_demo_style(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            self.render_header(ui);

            ui.separator();
            ui.add_space(8.0);

            self.render_controls(ui);

            ui.add_space(8.0);

            // The graph takes whatever space is left; its geometry is
            // derived from that rect on every paint.
            self.circle_graph.render(ui);
        });
    }
}

impl CircleGraphApp {
    /// Render the header with the target percentage on the right
    fn render_header(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label(
                egui::RichText::new("Circle Graph")
                    .font(egui::FontId::new(24.0, egui::FontFamily::Proportional))
                    .strong(),
            );

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(
                    egui::RichText::new(format!("target {:.0}%", self.circle_graph.percentage()))
                        .font(egui::FontId::new(16.0, egui::FontFamily::Proportional))
                        .color(colors::TEXT_SECONDARY),
                );
            });
        });
    }

    /// Render the Start button row
    fn render_controls(&mut self, ui: &mut egui::Ui) {
        ui.with_layout(egui::Layout::top_down(egui::Align::Center), |ui| {
            let start_button = ui.add_sized(
                [140.0, 40.0],
                egui::Button::new(
                    egui::RichText::new("▶ Start")
                        .font(egui::FontId::new(16.0, egui::FontFamily::Proportional)),
                ),
            );

            if start_button.clicked() {
                self.circle_graph.show(true);
            }
        });
    }
}
