//! # Circle Graph Module
//!
//! This module provides the animated circular progress graph: a neutral
//! background ring plus an accent main ring that fills clockwise to a target
//! percentage, optionally revealed by a stroke animation.
//!
//! ## Key Components:
//! - `renderer.rs` - The `CircleLineGraph` widget and egui painting
//! - `geometry.rs` - Angle convention and ring radius derivation
//! - `animation.rs` - The one-shot stroke-reveal animation
//!
//! ## Purpose:
//! This component owns geometry computation, ring construction and the
//! animation lifecycle; the surrounding screen only calls `set_percentage`,
//! `show` and `remove`.

pub mod animation;
pub mod geometry;
pub mod renderer;

// Re-export main components
pub use geometry::{CircleAlignment, RingKind, RingLayer};
pub use renderer::{CircleGraphConfig, CircleLineGraph};
