//! Paste execution: writing an oriented block back onto the board.

use bevy::prelude::*;

use super::coords::BoardCoord;
use super::host::BoardWrite;
use super::transform::CellBlock;

/// What a paste wrote
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PasteReport {
    /// Cells overwritten
    pub written: usize,
    /// Target positions with no playable cell
    pub skipped: usize,
}

/// Overwrite the cells under `block` with its top-left at `anchor`, as one edit.
///
/// Blank values are written like any other. Targets off the board are skipped
/// and the rest of the paste still applies.
pub fn write_block(board: &mut impl BoardWrite, anchor: BoardCoord, block: &CellBlock) -> PasteReport {
    let mut report = PasteReport::default();

    board.begin_edit();
    for (dx, dy, value) in block.iter() {
        let target = anchor.offset_cells(dx, dy);
        if board.cell_value(target).is_some() {
            board.set_cell_value(target, value);
            report.written += 1;
        } else {
            report.skipped += 1;
        }
    }
    board.end_edit();
    board.request_redraw();

    info!(
        "Pasted {}x{} block at ({}, {}): {} written, {} skipped",
        block.width(),
        block.height(),
        anchor.bx,
        anchor.by,
        report.written,
        report.skipped
    );
    report
}
