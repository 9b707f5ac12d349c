//! Board addressing and pixel mapping.
//!
//! Boards are addressed in half-cell units: cell centers sit on odd/odd
//! coordinates and grid-line intersections on even/even ones, so neighbouring
//! cells are 2 units apart. Pixel positions here are surface pixels with y
//! growing downward; the renderer flips them into world space.

use bevy::prelude::*;
use thiserror::Error;

use super::host::BoardRead;

/// A board-grid address
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoardCoord {
    pub bx: i32,
    pub by: i32,
}

impl BoardCoord {
    pub const fn new(bx: i32, by: i32) -> Self {
        Self { bx, by }
    }

    /// True for odd/odd coordinates
    pub fn is_cell_center(&self) -> bool {
        self.bx.rem_euclid(2) == 1 && self.by.rem_euclid(2) == 1
    }

    /// The cell `dx` columns right and `dy` rows down from this one
    pub fn offset_cells(self, dx: usize, dy: usize) -> Self {
        Self {
            bx: self.bx + 2 * dx as i32,
            by: self.by + 2 * dy as i32,
        }
    }
}

/// Axis-aligned rectangle of cells, stored by its top-left and bottom-right cell centers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellRect {
    pub min: BoardCoord,
    pub max: BoardCoord,
}

impl CellRect {
    /// Normalize two opposite corners given in any order
    pub fn from_corners(a: BoardCoord, b: BoardCoord) -> Self {
        Self {
            min: BoardCoord::new(a.bx.min(b.bx), a.by.min(b.by)),
            max: BoardCoord::new(a.bx.max(b.bx), a.by.max(b.by)),
        }
    }

    /// Rectangle of `width` x `height` cells whose top-left cell is `anchor`
    pub fn from_anchor(anchor: BoardCoord, width: usize, height: usize) -> Self {
        let width = width.max(1);
        let height = height.max(1);
        Self {
            min: anchor,
            max: anchor.offset_cells(width - 1, height - 1),
        }
    }

    pub fn width_cells(&self) -> usize {
        ((self.max.bx - self.min.bx) / 2 + 1) as usize
    }

    pub fn height_cells(&self) -> usize {
        ((self.max.by - self.min.by) / 2 + 1) as usize
    }

    /// Cell centers row by row, stepping 2 units on both axes
    pub fn rows(&self) -> impl Iterator<Item = Vec<BoardCoord>> + '_ {
        (self.min.by..=self.max.by).step_by(2).map(move |by| {
            (self.min.bx..=self.max.bx)
                .step_by(2)
                .map(|bx| BoardCoord::new(bx, by))
                .collect()
        })
    }
}

/// Pixel geometry of the drawn board
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoardMetrics {
    /// Pixels per board unit horizontally (half a cell width)
    pub unit_width: f32,
    /// Pixels per board unit vertically (half a cell height)
    pub unit_height: f32,
    /// Surface position of board address (0, 0), the board's top-left corner
    pub origin: Vec2,
}

impl Default for BoardMetrics {
    fn default() -> Self {
        Self {
            unit_width: 1.0,
            unit_height: 1.0,
            origin: Vec2::ZERO,
        }
    }
}

impl BoardMetrics {
    /// Fractional board address under a surface pixel
    pub fn pixel_to_address(&self, pixel: Vec2) -> Vec2 {
        Vec2::new(
            (pixel.x - self.origin.x) / self.unit_width,
            (pixel.y - self.origin.y) / self.unit_height,
        )
    }

    /// Surface pixel of a board address
    pub fn address_to_pixel(&self, at: BoardCoord) -> Vec2 {
        Vec2::new(
            self.origin.x + at.bx as f32 * self.unit_width,
            self.origin.y + at.by as f32 * self.unit_height,
        )
    }

    /// Pixel size of one cell
    pub fn cell_size(&self) -> Vec2 {
        Vec2::new(self.unit_width * 2.0, self.unit_height * 2.0)
    }

    /// Pixel bounds covering every cell between two cell centers (any order).
    ///
    /// Each corner is pushed out to the surrounding grid-line intersection, so
    /// a single cell yields exactly that cell's box.
    pub fn cell_rect_to_pixels(&self, a: BoardCoord, b: BoardCoord) -> Rect {
        let rect = CellRect::from_corners(a, b);
        let top_left = BoardCoord::new(rect.min.bx - 1, rect.min.by - 1);
        let bottom_right = BoardCoord::new(rect.max.bx + 1, rect.max.by + 1);
        Rect::from_corners(
            self.address_to_pixel(top_left),
            self.address_to_pixel(bottom_right),
        )
    }

    pub fn cell_range_to_pixels(&self, rect: CellRect) -> Rect {
        self.cell_rect_to_pixels(rect.min, rect.max)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CellLookupError {
    #[error("board address ({bx}, {by}) is not a playable cell")]
    OutOfBounds { bx: i32, by: i32 },
}

/// Snap a fractional board address to the center of the cell containing it
pub fn nearest_cell_center(raw: f32) -> i32 {
    (raw / 2.0).floor() as i32 * 2 + 1
}

/// Resolve a surface pixel to the playable cell under it
pub fn pointer_to_cell(
    metrics: &BoardMetrics,
    pointer: Vec2,
    board: &impl BoardRead,
) -> Result<BoardCoord, CellLookupError> {
    let address = metrics.pixel_to_address(pointer);
    let cell = BoardCoord::new(nearest_cell_center(address.x), nearest_cell_center(address.y));
    match board.cell_value(cell) {
        Some(_) => Ok(cell),
        None => Err(CellLookupError::OutOfBounds {
            bx: cell.bx,
            by: cell.by,
        }),
    }
}
