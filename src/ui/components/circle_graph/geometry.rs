//! # Circle Graph Geometry
//!
//! This module handles all geometry for the circle graph: the angle convention,
//! ring radius derivation and arc endpoint computation.
//!
//! ## Angle Convention:
//! Graph degrees start at 0 at the 12 o'clock position and grow clockwise.
//! `render_angle` maps them into screen space by rotating the standard
//! 0-at-east coordinate system by -90 degrees. egui's y axis points down, so
//! increasing screen angles sweep clockwise on screen.

use eframe::egui::{pos2, Color32, Pos2, Rect};
use std::f32::consts::PI;

/// How far the background ring is inset relative to its stroke width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CircleAlignment {
    Outside,
    Center,
    Inside,
}

impl CircleAlignment {
    /// Multiplier applied to the background stroke width when deriving the
    /// background ring radius.
    pub fn coefficient(self) -> f32 {
        match self {
            CircleAlignment::Outside => 1.0,
            CircleAlignment::Center => 2.0,
            CircleAlignment::Inside => 3.0,
        }
    }
}

/// Which of the two concentric rings a layer draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RingKind {
    Background,
    Main,
}

/// A fully derived ring, ready to be stroked.
#[derive(Debug, Clone, PartialEq)]
pub struct RingLayer {
    pub kind: RingKind,
    pub center: Pos2,
    pub radius: f32,
    pub stroke_width: f32,
    pub color: Color32,
    /// Start of the arc in graph degrees (0 at 12 o'clock, clockwise).
    pub start_degree: f32,
    /// End of the arc in graph degrees.
    pub end_degree: f32,
}

impl RingLayer {
    /// Angular extent of the arc in degrees.
    pub fn sweep_degrees(&self) -> f32 {
        self.end_degree - self.start_degree
    }
}

/// Convert a graph degree into a screen-space angle in radians.
pub fn render_angle(degree: f32) -> f32 {
    (degree - 90.0) * PI / 180.0
}

/// Point on a circle around `center` at the given graph degree.
pub fn arc_point(center: Pos2, radius: f32, degree: f32) -> Pos2 {
    let angle = render_angle(degree);
    pos2(
        center.x + radius * angle.cos(),
        center.y + radius * angle.sin(),
    )
}

/// Base radius of the drawing rect: the lesser of width and height.
fn base_radius(rect: Rect) -> f32 {
    rect.width().min(rect.height())
}

/// Derive the full background ring for the given drawing rect.
pub fn background_ring(
    rect: Rect,
    stroke_width: f32,
    alignment: CircleAlignment,
    color: Color32,
) -> RingLayer {
    let radius = (base_radius(rect) - stroke_width * alignment.coefficient()) / 2.0;
    RingLayer {
        kind: RingKind::Background,
        center: rect.center(),
        radius,
        stroke_width,
        color,
        start_degree: 0.0,
        end_degree: 360.0,
    }
}

/// Derive the main ring arc for the given drawing rect and percentage.
///
/// The sweep is `360 * percentage / 100` degrees. Percentages outside
/// 0..=100 are not rejected and yield a negative or >360 degree sweep.
pub fn main_ring(rect: Rect, stroke_width: f32, percentage: f32, color: Color32) -> RingLayer {
    let radius = (base_radius(rect) - stroke_width) / 2.0;
    RingLayer {
        kind: RingKind::Main,
        center: rect.center(),
        radius,
        stroke_width,
        color,
        start_degree: 0.0,
        end_degree: 360.0 * percentage / 100.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    fn square_rect() -> Rect {
        Rect::from_min_size(pos2(0.0, 0.0), eframe::egui::vec2(100.0, 100.0))
    }

    #[test]
    fn test_render_angle_starts_at_twelve_o_clock() {
        assert!((render_angle(0.0) + FRAC_PI_2).abs() < 1e-6);
        assert!(render_angle(90.0).abs() < 1e-6);
        assert!((render_angle(252.0) - 162.0_f32.to_radians()).abs() < 1e-6);
    }

    #[test]
    fn test_arc_point_sweeps_clockwise() {
        let center = pos2(50.0, 50.0);
        let top = arc_point(center, 40.0, 0.0);
        assert!((top.x - 50.0).abs() < 1e-3);
        assert!((top.y - 10.0).abs() < 1e-3);

        // A quarter turn lands on the right, i.e. clockwise on screen.
        let right = arc_point(center, 40.0, 90.0);
        assert!((right.x - 90.0).abs() < 1e-3);
        assert!((right.y - 50.0).abs() < 1e-3);

        let bottom = arc_point(center, 40.0, 180.0);
        assert!((bottom.x - 50.0).abs() < 1e-3);
        assert!((bottom.y - 90.0).abs() < 1e-3);
    }

    #[test]
    fn test_main_ring_sweep_tracks_percentage() {
        let rect = square_rect();
        assert_eq!(main_ring(rect, 6.0, 0.0, Color32::RED).sweep_degrees(), 0.0);
        assert_eq!(main_ring(rect, 6.0, 100.0, Color32::RED).sweep_degrees(), 360.0);
        assert_eq!(main_ring(rect, 6.0, 70.0, Color32::RED).sweep_degrees(), 252.0);
    }

    #[test]
    fn test_out_of_range_percentage_is_not_clamped() {
        let rect = square_rect();
        assert_eq!(main_ring(rect, 6.0, -10.0, Color32::RED).sweep_degrees(), -36.0);
        assert_eq!(main_ring(rect, 6.0, 150.0, Color32::RED).sweep_degrees(), 540.0);
    }

    #[test]
    fn test_ring_radii() {
        let rect = square_rect();

        // Main ring: (base - stroke) / 2
        let main = main_ring(rect, 6.0, 70.0, Color32::RED);
        assert_eq!(main.radius, 47.0);
        assert_eq!(main.center, pos2(50.0, 50.0));

        // Background ring with Inside alignment: (base - stroke * 3) / 2
        let background = background_ring(rect, 3.0, CircleAlignment::Inside, Color32::GRAY);
        assert_eq!(background.radius, 45.5);
        assert_eq!(background.sweep_degrees(), 360.0);
    }

    #[test]
    fn test_alignment_coefficients() {
        assert_eq!(CircleAlignment::Outside.coefficient(), 1.0);
        assert_eq!(CircleAlignment::Center.coefficient(), 2.0);
        assert_eq!(CircleAlignment::Inside.coefficient(), 3.0);
    }

    #[test]
    fn test_base_radius_uses_lesser_dimension() {
        let wide = Rect::from_min_size(pos2(0.0, 0.0), eframe::egui::vec2(200.0, 80.0));
        let main = main_ring(wide, 6.0, 50.0, Color32::RED);
        assert_eq!(main.radius, 37.0);
    }
}
