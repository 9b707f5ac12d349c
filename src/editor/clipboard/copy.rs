//! Copy execution: reading a rectangle of cells off the board.

use bevy::prelude::*;

use super::coords::CellRect;
use super::host::{BLANK, BoardRead};
use super::transform::CellBlock;
use super::types::ClipboardBuffer;

/// Read every cell in `rect` into a dense block. Missing cells read as blank.
pub fn read_region(board: &impl BoardRead, rect: CellRect) -> CellBlock {
    let rows: Vec<Vec<i32>> = rect
        .rows()
        .map(|row| {
            row.into_iter()
                .map(|at| board.cell_value(at).unwrap_or(BLANK))
                .collect()
        })
        .collect();

    // A normalized rect always has at least one cell
    CellBlock::from_rows(rows)
        .unwrap_or_else(|| CellBlock::blank(rect.width_cells(), rect.height_cells()))
}

impl ClipboardBuffer {
    /// Copy `rect` from the board, replacing the buffer and resetting its orientation
    pub fn copy_from(&mut self, board: &impl BoardRead, rect: CellRect) {
        let block = read_region(board, rect);
        info!(
            "Copied {}x{} cells from ({}, {})",
            block.width(),
            block.height(),
            rect.min.bx,
            rect.min.by
        );
        self.store(block);
    }
}
