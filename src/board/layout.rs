//! Fitting the board into the window.
//!
//! Board geometry is computed in "surface" pixels: world units with y growing
//! downward, so row 0 is at the top. The camera starts at the world origin, so
//! the board is centered on screen.

use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::constants::{BOARD_MARGIN, MAX_CELL_SIZE, MIN_CELL_SIZE, TOOLBAR_HEIGHT};
use crate::editor::clipboard::BoardMetrics;

use super::number_board::NumberBoard;

/// Current pixel geometry of the board
#[derive(Resource, Debug, Default)]
pub struct BoardLayout {
    pub metrics: BoardMetrics,
}

/// Written whenever the board geometry changes (window resize or a new board)
#[derive(Message, Debug, Clone, Copy)]
pub struct BoardResized {
    pub metrics: BoardMetrics,
}

/// Largest square cell that fits `cols` x `rows` into `viewport`, centered below the toolbar
pub fn fit_metrics(cols: usize, rows: usize, viewport: Vec2) -> BoardMetrics {
    let available = Vec2::new(
        viewport.x - 2.0 * BOARD_MARGIN,
        viewport.y - 2.0 * BOARD_MARGIN - TOOLBAR_HEIGHT,
    );
    let cols = cols.max(1) as f32;
    let rows = rows.max(1) as f32;
    let cell = (available.x / cols)
        .min(available.y / rows)
        .clamp(MIN_CELL_SIZE, MAX_CELL_SIZE)
        .floor();

    let size = Vec2::new(cell * cols, cell * rows);
    BoardMetrics {
        unit_width: cell / 2.0,
        unit_height: cell / 2.0,
        origin: Vec2::new(-size.x / 2.0, -size.y / 2.0 + TOOLBAR_HEIGHT / 2.0),
    }
}

pub fn world_to_surface(world: Vec2) -> Vec2 {
    Vec2::new(world.x, -world.y)
}

pub fn surface_to_world(surface: Vec2) -> Vec2 {
    Vec2::new(surface.x, -surface.y)
}

pub fn surface_rect_to_world(rect: Rect) -> Rect {
    Rect::from_corners(surface_to_world(rect.min), surface_to_world(rect.max))
}

/// Refit the board whenever the window or the board size changes
pub fn fit_board_layout(
    windows: Query<&Window, With<PrimaryWindow>>,
    board: Res<NumberBoard>,
    mut layout: ResMut<BoardLayout>,
    mut resized: MessageWriter<BoardResized>,
) {
    let Ok(window) = windows.single() else {
        return;
    };

    let metrics = fit_metrics(board.cols(), board.rows(), window.size());
    if metrics == layout.metrics {
        return;
    }

    debug!(
        "Board layout: {}px cells at {:?}",
        metrics.unit_width * 2.0,
        metrics.origin
    );
    layout.metrics = metrics;
    resized.write(BoardResized { metrics });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_uses_largest_cell_within_limits() {
        // 1600x900 leaves 1520x760, so 76px cells, clamped to the maximum
        let m = fit_metrics(10, 10, Vec2::new(1600.0, 900.0));
        assert_eq!(m.cell_size(), Vec2::splat(MAX_CELL_SIZE));
        assert_eq!(m.origin, Vec2::new(-320.0, -290.0));
    }

    #[test]
    fn test_fit_shrinks_for_large_boards() {
        // 1280x900 leaves 1200x760; 50 rows give 15.2px, clamped up to the minimum
        let m = fit_metrics(50, 50, Vec2::new(1280.0, 900.0));
        assert_eq!(m.cell_size(), Vec2::splat(MIN_CELL_SIZE));

        // 20 rows give 38px
        let m = fit_metrics(20, 20, Vec2::new(1280.0, 900.0));
        assert_eq!(m.cell_size(), Vec2::splat(38.0));
    }

    #[test]
    fn test_surface_world_flip() {
        let p = Vec2::new(12.0, 30.0);
        assert_eq!(surface_to_world(p), Vec2::new(12.0, -30.0));
        assert_eq!(world_to_surface(surface_to_world(p)), p);

        let r = surface_rect_to_world(Rect::new(0.0, 0.0, 10.0, 20.0));
        assert_eq!(r.min, Vec2::new(0.0, -20.0));
        assert_eq!(r.max, Vec2::new(10.0, 0.0));
    }
}
