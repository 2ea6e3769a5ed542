//! # Theme Configuration
//!
//! This module provides centralized color configuration for the circle graph demo.
//! All visual styling should use these constants to ensure consistency and easy
//! palette changes.
//!
//! ## Usage
//! ```rust
//! use crate::ui::components::theme::colors;
//!
//! let ring_color = colors::MAIN_RING;
//! ```

use eframe::egui::Color32;

/// Main theme configuration structure
#[derive(Debug, Clone)]
pub struct Theme {
    /// Ring colors for the circle graph
    pub graph: GraphColors,
    /// Background and layout colors
    pub layout: LayoutColors,
    /// Text and typography colors
    pub typography: TypographyColors,
}

/// Colors for the two concentric rings
#[derive(Debug, Clone)]
pub struct GraphColors {
    /// Accent stroke for the animated main ring
    pub main_ring: Color32,
    /// Neutral stroke for the full background ring
    pub background_ring: Color32,
}

/// Layout and container colors
#[derive(Debug, Clone)]
pub struct LayoutColors {
    /// Fill color behind the whole screen
    pub panel_background: Color32,
}

/// Text and typography colors
#[derive(Debug, Clone)]
pub struct TypographyColors {
    /// Heading text color
    pub heading: Color32,
    /// Secondary text color (less prominent)
    pub secondary: Color32,
}

/// The active theme for the demo
pub const CURRENT_THEME: Theme = Theme {
    graph: GraphColors {
        main_ring: Color32::from_rgb(224, 57, 50),
        background_ring: Color32::from_rgb(190, 190, 190),
    },
    layout: LayoutColors {
        panel_background: Color32::from_rgb(250, 250, 252),
    },
    typography: TypographyColors {
        heading: Color32::from_rgb(55, 55, 65),
        secondary: Color32::from_rgb(125, 125, 135),
    },
};

/// Flat constants for the most commonly used colors
pub mod colors {
    use super::CURRENT_THEME;
    use eframe::egui::Color32;

    // Graph colors
    pub const MAIN_RING: Color32 = CURRENT_THEME.graph.main_ring;
    pub const BACKGROUND_RING: Color32 = CURRENT_THEME.graph.background_ring;

    // Typography colors
    pub const TEXT_HEADING: Color32 = CURRENT_THEME.typography.heading;
    pub const TEXT_SECONDARY: Color32 = CURRENT_THEME.typography.secondary;

    // Layout colors
    pub const PANEL_BACKGROUND: Color32 = CURRENT_THEME.layout.panel_background;
}
