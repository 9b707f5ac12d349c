//! Board access the clipboard needs from whatever puzzle board hosts it.

use super::coords::BoardCoord;

/// Cell value meaning "no number"
pub const BLANK: i32 = -1;

/// Cell value for a clue cell that has no number
pub const UNNUMBERED: i32 = -2;

/// Read access to the host board.
pub trait BoardRead {
    /// Value of the playable cell at `at`, or `None` when there is no playable cell there.
    fn cell_value(&self, at: BoardCoord) -> Option<i32>;
}

/// Write access to the host board.
///
/// Writes between `begin_edit` and `end_edit` form one undoable step.
pub trait BoardWrite: BoardRead {
    fn begin_edit(&mut self);
    fn set_cell_value(&mut self, at: BoardCoord, value: i32);
    fn end_edit(&mut self);
    fn request_redraw(&mut self);
}
