//! Editor command enum for undo/redo operations.

use crate::editor::clipboard::BoardCoord;

/// One cell value change
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellEdit {
    pub at: BoardCoord,
    pub before: i32,
    pub after: i32,
}

/// A reversible command in the editor
#[derive(Clone, Debug, PartialEq)]
pub enum EditorCommand {
    /// Cell values were changed in one step (a typed value or a whole paste)
    SetCells { edits: Vec<CellEdit> },
}

