//! # UI Components Module
//!
//! This module organizes the UI components for the circle graph demo.
//!
//! ## Module Organization:
//! - `circle_graph` - The animated circular progress widget
//! - `styling` - Global egui style setup
//! - `theme` - Centralized color configuration

pub mod circle_graph;
pub mod styling;
pub mod theme;

pub use circle_graph::{CircleGraphConfig, CircleLineGraph};
pub use styling::setup_demo_style;
pub use theme::*;
