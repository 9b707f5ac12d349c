//! Common SystemParam bundles to reduce parameter counts in editor systems.
//!
//! ## Available Bundles
//!
//! - [`CameraParams`]: Basic camera and window access for cursor-to-world conversion
//! - [`CameraWithProjection`]: Extended camera access including zoom scale and world-to-screen
//!
//! ## Helper Functions
//!
//! - [`is_cursor_over_ui`]: Check if cursor is over egui UI (for input gating)

use bevy::ecs::system::SystemParam;
use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use bevy_egui::EguiContexts;

use crate::board::world_to_surface;

use super::camera::EditorCamera;

/// Bundled camera and window queries for cursor-to-world calculations
#[derive(SystemParam)]
pub struct CameraParams<'w, 's> {
    pub window: Query<'w, 's, &'static Window, With<PrimaryWindow>>,
    pub camera: Query<'w, 's, (&'static Camera, &'static GlobalTransform), With<EditorCamera>>,
}

impl CameraParams<'_, '_> {
    /// Get the world position of the cursor, if available
    pub fn cursor_world_pos(&self) -> Option<Vec2> {
        let window = self.window.single().ok()?;
        let (camera, transform) = self.camera.single().ok()?;
        let cursor_pos = window.cursor_position()?;
        camera.viewport_to_world_2d(transform, cursor_pos).ok()
    }

    /// Cursor position in board surface pixels (y down), if available
    pub fn cursor_surface_pos(&self) -> Option<Vec2> {
        self.cursor_world_pos().map(world_to_surface)
    }
}

/// Bundled camera queries including projection (for zoom-aware operations)
#[derive(SystemParam)]
pub struct CameraWithProjection<'w, 's> {
    pub camera:
        Query<'w, 's, (&'static Camera, &'static GlobalTransform, &'static Projection), With<EditorCamera>>,
}

impl CameraWithProjection<'_, '_> {
    /// Viewport position of a world point, for drawing egui on top of the board
    pub fn world_to_screen(&self, world: Vec2) -> Option<Vec2> {
        let (camera, transform, _) = self.camera.single().ok()?;
        camera.world_to_viewport(transform, world.extend(0.0)).ok()
    }

    /// Get the current zoom scale from projection
    pub fn zoom_scale(&self) -> f32 {
        self.camera
            .single()
            .ok()
            .and_then(|(_, _, proj)| {
                if let Projection::Orthographic(ortho) = proj {
                    Some(ortho.scale)
                } else {
                    None
                }
            })
            .unwrap_or(1.0)
    }
}

/// Check if the cursor is over egui UI
pub fn is_cursor_over_ui(contexts: &mut EguiContexts) -> bool {
    contexts
        .ctx_mut()
        .map(|ctx| ctx.is_pointer_over_area())
        .unwrap_or(false)
}
