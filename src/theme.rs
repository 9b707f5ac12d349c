//! Centralized color theme for the application.
//!
//! This module provides all colors used throughout the editor UI and rendering.
//! Modify values here to change the application's color scheme.

use bevy::prelude::Color;
use bevy_egui::egui;

// ============================================================================
// Board Colors
// ============================================================================

/// Window clear color behind the board
pub const BACKGROUND: Color = Color::srgb(0.93, 0.93, 0.9);

/// Thin lines between cells
pub const GRID_COLOR: Color = Color::srgba(0.3, 0.3, 0.3, 0.6);

/// Outer border of the board
pub const BOARD_BORDER: Color = Color::srgb(0.1, 0.1, 0.1);

/// Plain cell numbers
pub const BOARD_TEXT: Color = Color::srgb(0.05, 0.05, 0.05);

/// Shaded clue cells in puzzles that highlight filled cells
pub const FILLED_CELL: Color = Color::srgb(0.1, 0.1, 0.1);

/// Numbers drawn on shaded clue cells
pub const BOARD_TEXT_ON_FILLED: Color = Color::WHITE;

/// Outline of the cell the host editing cursor is on
pub const CELL_CURSOR: Color = Color::srgb(0.9, 0.4, 0.1);

// ============================================================================
// Clipboard Overlay Colors
// ============================================================================

/// Stroke around selections and paste previews
pub const CLIPBOARD_STROKE: Color = Color::srgba(0.0, 0.47, 0.84, 0.8);

/// Fill of a finished copy selection
pub const SELECTION_FILL: Color = Color::srgba(0.0, 0.47, 0.84, 0.2);

/// Light blue fill of the paste preview
pub const PASTE_PREVIEW_FILL: Color = Color::srgba(0.53, 0.81, 0.92, 0.3);

/// Translucent ghost numbers in the paste preview
pub const GHOST_TEXT: Color = Color::srgba(0.0, 0.0, 0.0, 0.6);

/// Ghost numbers drawn over a tinted cell
pub const GHOST_TEXT_ON_TINT: Color = Color::srgba(1.0, 1.0, 1.0, 0.7);

/// Background tint for filled ghost cells
pub const GHOST_FILLED_TINT: Color = Color::srgba(0.0, 0.0, 0.0, 0.35);

// ============================================================================
// UI Colors (egui)
// ============================================================================

pub mod ui {
    use bevy_egui::egui;

    /// Light grey for label text
    pub const LABEL_TEXT: egui::Color32 = egui::Color32::LIGHT_GRAY;

    /// Grey for help/hint text
    pub const HINT_TEXT: egui::Color32 = egui::Color32::GRAY;

    /// Blue status text while a clipboard mode is active
    pub const MODE_ACTIVE: egui::Color32 = egui::Color32::from_rgb(90, 170, 240);
}

// ============================================================================
// Color Conversion Utilities
// ============================================================================

/// Convert a Bevy Color to egui Color32 (preserving alpha)
pub fn bevy_to_egui(color: Color) -> egui::Color32 {
    let srgba = color.to_srgba();
    egui::Color32::from_rgba_unmultiplied(
        (srgba.red * 255.0) as u8,
        (srgba.green * 255.0) as u8,
        (srgba.blue * 255.0) as u8,
        (srgba.alpha * 255.0) as u8,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bevy_to_egui_keeps_alpha() {
        let opaque = bevy_to_egui(Color::srgb(1.0, 0.0, 0.0));
        assert_eq!(opaque.r(), 255);
        assert_eq!(opaque.g(), 0);
        assert_eq!(opaque.a(), 255);

        let translucent = bevy_to_egui(Color::srgba(1.0, 0.0, 0.0, 0.5));
        assert_eq!(translucent.a(), 127);
    }
}
