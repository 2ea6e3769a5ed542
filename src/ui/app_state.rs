//! # App State Module
//!
//! This module defines the application state for the circle graph demo.
//!
//! ## Key Types:
//! - `CircleGraphApp` - Main application state struct
//!
//! ## Purpose:
//! The app struct holds the circle graph widget and nothing else; all
//! display state lives inside the widget itself. On construction the target
//! percentage is seeded so the Start button can animate straight away.

use log::info;

use crate::ui::components::circle_graph::CircleLineGraph;

/// Percentage displayed when the app starts
pub const DEFAULT_PERCENTAGE: i32 = 70;

/// Main application struct for the egui circle graph demo
pub struct CircleGraphApp {
    /// The circular progress widget
    pub circle_graph: CircleLineGraph,
}

impl CircleGraphApp {
    pub fn new() -> Self {
        info!("Initializing circle graph app");

        let mut circle_graph = CircleLineGraph::new();
        circle_graph.set_percentage(DEFAULT_PERCENTAGE);

        Self { circle_graph }
    }
}

impl Default for CircleGraphApp {
    fn default() -> Self {
        Self::new()
    }
}
