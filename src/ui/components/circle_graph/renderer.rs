//! # Circle Graph Renderer
//!
//! This module implements the circular progress widget using egui's painting
//! primitives: a neutral full background ring and an accent main ring that
//! fills clockwise to the stored percentage.
//!
//! ## Key Types:
//! - `CircleGraphConfig` - Appearance and timing configuration
//! - `CircleLineGraph` - The widget itself (`set_percentage` / `show` /
//!   `remove` / `render`)
//!
//! ## Lifecycle:
//! `show` replaces the previous display wholesale, which is also the only
//! cancellation mechanism for a running animation. Ring geometry is derived
//! from the widget's rect on every paint, so layout changes are picked up
//! automatically.

use eframe::egui;
use log::debug;

use super::animation::StrokeReveal;
use super::geometry::{self, CircleAlignment, RingKind, RingLayer};
use crate::ui::components::theme::colors;

/// Configuration for the circle graph appearance
#[derive(Debug, Clone)]
pub struct CircleGraphConfig {
    /// Stroke width of the main ring
    pub main_stroke_width: f32,
    /// How the background ring is inset relative to its stroke width
    pub alignment: CircleAlignment,
    /// Stroke color of the main ring
    pub main_color: egui::Color32,
    /// Stroke color of the background ring
    pub background_color: egui::Color32,
    /// Length of the stroke-reveal animation in seconds
    pub duration: f64,
}

impl CircleGraphConfig {
    /// The background ring is drawn at half the main stroke width.
    pub fn background_stroke_width(&self) -> f32 {
        self.main_stroke_width / 2.0
    }
}

impl Default for CircleGraphConfig {
    fn default() -> Self {
        Self {
            main_stroke_width: 6.0,
            alignment: CircleAlignment::Inside,
            main_color: colors::MAIN_RING,
            background_color: colors::BACKGROUND_RING,
            duration: 1.5,
        }
    }
}

/// What the widget currently displays.
#[derive(Debug, Clone, Copy)]
struct ShowState {
    animated: bool,
    /// Set on the first painted frame after an animated `show`.
    reveal: Option<StrokeReveal>,
}

/// Circular progress graph widget
#[derive(Debug)]
pub struct CircleLineGraph {
    config: CircleGraphConfig,
    percentage: f32,
    state: Option<ShowState>,
}

impl CircleLineGraph {
    /// Create a new circle graph with the default configuration
    pub fn new() -> Self {
        Self::with_config(CircleGraphConfig::default())
    }

    /// Create with custom configuration
    pub fn with_config(config: CircleGraphConfig) -> Self {
        Self {
            config,
            percentage: 0.0,
            state: None,
        }
    }

    /// Store the target fill fraction. Does not redraw.
    ///
    /// Values outside 0..=100 are not rejected; they produce geometrically
    /// valid arcs with a negative or >360 degree sweep.
    pub fn set_percentage(&mut self, percentage: i32) {
        self.percentage = percentage as f32;
    }

    /// The stored target percentage
    pub fn percentage(&self) -> f32 {
        self.percentage
    }

    /// Display the rings, replacing whatever was shown before.
    ///
    /// With `animated` the main ring reveals its arc over the configured
    /// duration; otherwise it renders fully formed immediately.
    pub fn show(&mut self, animated: bool) {
        self.remove();

        debug!(
            "showing circle graph at {}% (animated: {})",
            self.percentage, animated
        );
        self.state = Some(ShowState {
            animated,
            reveal: None,
        });
    }

    /// Clear the rings. Safe to call when nothing is shown.
    pub fn remove(&mut self) {
        if self.state.take().is_some() {
            debug!("removed circle graph rings");
        }
    }

    /// Whether the rings are currently displayed
    pub fn is_shown(&self) -> bool {
        self.state.is_some()
    }

    /// Fraction of the main arc currently visible, or `None` when the graph
    /// is not shown.
    pub fn visible_fraction(&self, now: f64) -> Option<f32> {
        let state = self.state.as_ref()?;
        if !state.animated {
            return Some(1.0);
        }
        Some(match state.reveal {
            Some(reveal) => reveal.fraction_at(now),
            // The animation clock starts on the first painted frame.
            None => 0.0,
        })
    }

    /// Advance the animation clock to `now`, starting the reveal on the
    /// first call after an animated `show`, and return the visible fraction.
    fn advance(&mut self, now: f64) -> Option<f32> {
        let state = self.state.as_mut()?;
        if state.animated && state.reveal.is_none() {
            state.reveal = Some(StrokeReveal::new(now, self.config.duration));
        }
        self.visible_fraction(now)
    }

    /// Derive the ring layers for the given drawing rect, background first.
    fn build_layers(&self, rect: egui::Rect) -> Vec<RingLayer> {
        vec![
            geometry::background_ring(
                rect,
                self.config.background_stroke_width(),
                self.config.alignment,
                self.config.background_color,
            ),
            geometry::main_ring(
                rect,
                self.config.main_stroke_width,
                self.percentage,
                self.config.main_color,
            ),
        ]
    }

    /// Paint the widget into the available space.
    ///
    /// The widget occupies its rect even while nothing is shown, so the
    /// surrounding layout does not jump when `show` is called.
    pub fn render(&mut self, ui: &mut egui::Ui) {
        let (response, painter) =
            ui.allocate_painter(ui.available_size(), egui::Sense::hover());
        let rect = response.rect;

        let now = ui.input(|i| i.time);
        let Some(fraction) = self.advance(now) else {
            return;
        };
        if fraction < 1.0 {
            ui.ctx().request_repaint();
        }

        for layer in self.build_layers(rect) {
            match layer.kind {
                RingKind::Background => {
                    painter.circle_stroke(
                        layer.center,
                        layer.radius,
                        egui::Stroke::new(layer.stroke_width, layer.color),
                    );
                }
                RingKind::Main => draw_arc_layer(&painter, &layer, fraction),
            }
        }
    }
}

impl Default for CircleLineGraph {
    fn default() -> Self {
        Self::new()
    }
}

/// Stroke the leading `fraction` of a ring layer's arc.
fn draw_arc_layer(painter: &egui::Painter, layer: &RingLayer, fraction: f32) {
    let end_degree = layer.start_degree + layer.sweep_degrees() * fraction;
    draw_arc(
        painter,
        layer.center,
        layer.radius,
        egui::Stroke::new(layer.stroke_width, layer.color),
        layer.start_degree,
        end_degree,
    );
}

/// Draw an arc as a series of short line segments (egui has no native arc
/// support).
fn draw_arc(
    painter: &egui::Painter,
    center: egui::Pos2,
    radius: f32,
    stroke: egui::Stroke,
    start_degree: f32,
    end_degree: f32,
) {
    let sweep = (end_degree - start_degree).abs();
    if sweep <= f32::EPSILON || radius <= 0.0 {
        return;
    }

    // Roughly 3 pixels per segment, bounded for degenerate sizes
    let arc_length = sweep.to_radians() * radius;
    let num_segments = ((arc_length / 3.0).ceil() as i32).clamp(8, 256);
    let degree_step = (end_degree - start_degree) / num_segments as f32;

    for i in 0..num_segments {
        let from = start_degree + degree_step * i as f32;
        let to = start_degree + degree_step * (i + 1) as f32;
        painter.line_segment(
            [
                geometry::arc_point(center, radius, from),
                geometry::arc_point(center, radius, to),
            ],
            stroke,
        );
    }
}
