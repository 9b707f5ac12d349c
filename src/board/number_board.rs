use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::{DEFAULT_BOARD_HEIGHT, DEFAULT_BOARD_WIDTH, MAX_BOARD_DIM};
use crate::editor::clipboard::{BLANK, BoardCoord, BoardRead};

/// How the puzzle draws its clue cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PuzzleKind {
    /// Plain numbers on white cells
    #[default]
    Numbers,
    /// Every non-blank cell is a shaded block, optionally numbered
    LightUp,
}

impl PuzzleKind {
    pub fn display_name(&self) -> &'static str {
        match self {
            PuzzleKind::Numbers => "Numbers",
            PuzzleKind::LightUp => "Light Up",
        }
    }

    pub fn all() -> &'static [PuzzleKind] {
        &[PuzzleKind::Numbers, PuzzleKind::LightUp]
    }

    /// Whether filled cells are drawn as shaded blocks
    pub fn highlights_filled(&self) -> bool {
        matches!(self, PuzzleKind::LightUp)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BoardSizeError {
    #[error("board must have at least one row and one column (got {cols}x{rows})")]
    Empty { cols: usize, rows: usize },
    #[error("board of {cols}x{rows} exceeds the {max}x{max} limit")]
    TooLarge { cols: usize, rows: usize, max: usize },
}

/// The puzzle board: a grid of cell values addressed in board units.
///
/// Cell `(col, row)` lives at board address `(2 * col + 1, 2 * row + 1)`.
#[derive(Resource, Debug, Clone)]
pub struct NumberBoard {
    cols: usize,
    rows: usize,
    kind: PuzzleKind,
    cells: Vec<i32>,
    redraw_requested: bool,
}

impl Default for NumberBoard {
    fn default() -> Self {
        Self {
            cols: DEFAULT_BOARD_WIDTH,
            rows: DEFAULT_BOARD_HEIGHT,
            kind: PuzzleKind::default(),
            cells: vec![BLANK; DEFAULT_BOARD_WIDTH * DEFAULT_BOARD_HEIGHT],
            redraw_requested: true,
        }
    }
}

impl NumberBoard {
    /// Blank board of `cols` x `rows` cells
    pub fn new(cols: usize, rows: usize, kind: PuzzleKind) -> Result<Self, BoardSizeError> {
        if cols == 0 || rows == 0 {
            return Err(BoardSizeError::Empty { cols, rows });
        }
        if cols > MAX_BOARD_DIM || rows > MAX_BOARD_DIM {
            return Err(BoardSizeError::TooLarge {
                cols,
                rows,
                max: MAX_BOARD_DIM,
            });
        }
        Ok(Self {
            cols,
            rows,
            kind,
            cells: vec![BLANK; cols * rows],
            redraw_requested: true,
        })
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn kind(&self) -> PuzzleKind {
        self.kind
    }

    /// Board address of the cell at `(col, row)`
    pub fn cell_coord(col: usize, row: usize) -> BoardCoord {
        BoardCoord::new(2 * col as i32 + 1, 2 * row as i32 + 1)
    }

    fn index_of(&self, at: BoardCoord) -> Option<usize> {
        if !at.is_cell_center() || at.bx < 0 || at.by < 0 {
            return None;
        }
        let col = (at.bx / 2) as usize;
        let row = (at.by / 2) as usize;
        (col < self.cols && row < self.rows).then_some(row * self.cols + col)
    }

    pub fn value(&self, at: BoardCoord) -> Option<i32> {
        self.index_of(at).map(|i| self.cells[i])
    }

    /// Store `value` at `at` and return the previous value, or `None` off the board
    pub fn set_value(&mut self, at: BoardCoord, value: i32) -> Option<i32> {
        let index = self.index_of(at)?;
        let previous = std::mem::replace(&mut self.cells[index], value);
        Some(previous)
    }

    /// Ask the renderer to rebuild the cell visuals
    pub fn request_redraw(&mut self) {
        self.redraw_requested = true;
    }

    /// Consume a pending redraw request
    pub fn take_redraw_request(&mut self) -> bool {
        std::mem::take(&mut self.redraw_requested)
    }

    /// Every cell with its board address, row by row
    pub fn cells(&self) -> impl Iterator<Item = (BoardCoord, i32)> + '_ {
        self.cells.iter().enumerate().map(|(i, &value)| {
            (Self::cell_coord(i % self.cols, i / self.cols), value)
        })
    }
}

impl BoardRead for NumberBoard {
    fn cell_value(&self, at: BoardCoord) -> Option<i32> {
        self.value(at)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editor::clipboard::UNNUMBERED;

    #[test]
    fn test_new_board_is_blank() {
        let board = NumberBoard::new(4, 3, PuzzleKind::Numbers).unwrap();
        assert_eq!(board.cols(), 4);
        assert_eq!(board.rows(), 3);
        assert_eq!(board.cells().count(), 12);
        assert!(board.cells().all(|(_, v)| v == BLANK));
    }

    #[test]
    fn test_rejects_bad_sizes() {
        assert_eq!(
            NumberBoard::new(0, 5, PuzzleKind::Numbers).unwrap_err(),
            BoardSizeError::Empty { cols: 0, rows: 5 }
        );
        assert!(matches!(
            NumberBoard::new(MAX_BOARD_DIM + 1, 5, PuzzleKind::Numbers),
            Err(BoardSizeError::TooLarge { .. })
        ));
    }

    #[test]
    fn test_value_only_on_cell_centers() {
        let mut board = NumberBoard::new(3, 2, PuzzleKind::Numbers).unwrap();
        let at = NumberBoard::cell_coord(2, 1);
        assert_eq!(at, BoardCoord::new(5, 3));

        assert_eq!(board.set_value(at, 12), Some(BLANK));
        assert_eq!(board.value(at), Some(12));

        // grid lines, negative and out-of-range addresses are not cells
        assert_eq!(board.value(BoardCoord::new(4, 3)), None);
        assert_eq!(board.value(BoardCoord::new(-1, 1)), None);
        assert_eq!(board.value(BoardCoord::new(7, 1)), None);
        assert_eq!(board.value(BoardCoord::new(1, 5)), None);
        assert_eq!(board.set_value(BoardCoord::new(7, 1), 3), None);
    }

    #[test]
    fn test_cells_are_row_major() {
        let mut board = NumberBoard::new(2, 2, PuzzleKind::LightUp).unwrap();
        board.set_value(NumberBoard::cell_coord(1, 0), UNNUMBERED);
        let cells: Vec<_> = board.cells().collect();
        assert_eq!(cells[1], (BoardCoord::new(3, 1), UNNUMBERED));
        assert_eq!(cells[2].0, BoardCoord::new(1, 3));
    }

    #[test]
    fn test_redraw_request_is_consumed() {
        let mut board = NumberBoard::new(1, 1, PuzzleKind::Numbers).unwrap();
        assert!(board.take_redraw_request());
        assert!(!board.take_redraw_request());
        board.request_redraw();
        assert!(board.take_redraw_request());
    }

    #[test]
    fn test_puzzle_kind_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&PuzzleKind::LightUp).unwrap(),
            "\"light_up\""
        );
        assert!(PuzzleKind::LightUp.highlights_filled());
        assert!(!PuzzleKind::Numbers.highlights_filled());
    }
}
