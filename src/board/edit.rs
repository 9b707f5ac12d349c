//! Undo-recording write access to the board.

use bevy::prelude::*;

use crate::editor::clipboard::{BoardCoord, BoardRead, BoardWrite};
use crate::editor::history::{CellEdit, CommandHistory, EditorCommand};

use super::number_board::NumberBoard;

/// Writes cell values and records them in the command history.
///
/// Writes between `begin_edit` and `end_edit` become one history entry; a
/// write outside an edit is recorded on its own. Writes that do not change a
/// value are not recorded.
pub struct BoardEditor<'a> {
    board: &'a mut NumberBoard,
    history: &'a mut CommandHistory,
    pending: Option<Vec<CellEdit>>,
}

impl<'a> BoardEditor<'a> {
    pub fn new(board: &'a mut NumberBoard, history: &'a mut CommandHistory) -> Self {
        Self {
            board,
            history,
            pending: None,
        }
    }

    fn record(&mut self, edits: Vec<CellEdit>) {
        if edits.is_empty() {
            return;
        }
        debug!("Recorded {} cell edit(s)", edits.len());
        self.history.push(EditorCommand::SetCells { edits });
    }
}

impl BoardRead for BoardEditor<'_> {
    fn cell_value(&self, at: BoardCoord) -> Option<i32> {
        self.board.value(at)
    }
}

impl BoardWrite for BoardEditor<'_> {
    fn begin_edit(&mut self) {
        if self.pending.is_none() {
            self.pending = Some(Vec::new());
        }
    }

    fn set_cell_value(&mut self, at: BoardCoord, value: i32) {
        let Some(before) = self.board.set_value(at, value) else {
            return;
        };
        if before == value {
            return;
        }
        let edit = CellEdit {
            at,
            before,
            after: value,
        };
        match &mut self.pending {
            Some(pending) => pending.push(edit),
            None => self.record(vec![edit]),
        }
    }

    fn end_edit(&mut self) {
        if let Some(edits) = self.pending.take() {
            self.record(edits);
        }
    }

    fn request_redraw(&mut self) {
        self.board.request_redraw();
    }
}

impl Drop for BoardEditor<'_> {
    fn drop(&mut self) {
        self.end_edit();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::PuzzleKind;
    use crate::editor::clipboard::BLANK;

    #[test]
    fn test_edit_groups_writes_into_one_command() {
        let mut board = NumberBoard::new(3, 3, PuzzleKind::Numbers).unwrap();
        let mut history = CommandHistory::default();
        {
            let mut editor = BoardEditor::new(&mut board, &mut history);
            editor.begin_edit();
            editor.set_cell_value(BoardCoord::new(1, 1), 4);
            editor.set_cell_value(BoardCoord::new(3, 1), 5);
            editor.end_edit();
        }
        assert_eq!(history.undo_count(), 1);
        assert_eq!(
            history.pop_undo(),
            Some(EditorCommand::SetCells {
                edits: vec![
                    CellEdit {
                        at: BoardCoord::new(1, 1),
                        before: BLANK,
                        after: 4
                    },
                    CellEdit {
                        at: BoardCoord::new(3, 1),
                        before: BLANK,
                        after: 5
                    },
                ]
            })
        );
    }

    #[test]
    fn test_unchanged_and_off_board_writes_are_not_recorded() {
        let mut board = NumberBoard::new(2, 2, PuzzleKind::Numbers).unwrap();
        let mut history = CommandHistory::default();
        {
            let mut editor = BoardEditor::new(&mut board, &mut history);
            editor.begin_edit();
            editor.set_cell_value(BoardCoord::new(1, 1), BLANK);
            editor.set_cell_value(BoardCoord::new(9, 9), 3);
            editor.end_edit();
        }
        assert!(!history.can_undo());
    }

    #[test]
    fn test_write_outside_edit_is_its_own_command() {
        let mut board = NumberBoard::new(2, 2, PuzzleKind::Numbers).unwrap();
        let mut history = CommandHistory::default();
        {
            let mut editor = BoardEditor::new(&mut board, &mut history);
            editor.set_cell_value(BoardCoord::new(1, 1), 1);
            editor.set_cell_value(BoardCoord::new(1, 3), 2);
        }
        assert_eq!(history.undo_count(), 2);
        assert_eq!(board.value(BoardCoord::new(1, 3)), Some(2));
    }

    #[test]
    fn test_drop_closes_open_edit() {
        let mut board = NumberBoard::new(2, 2, PuzzleKind::Numbers).unwrap();
        let mut history = CommandHistory::default();
        {
            let mut editor = BoardEditor::new(&mut board, &mut history);
            editor.begin_edit();
            editor.set_cell_value(BoardCoord::new(3, 3), 9);
        }
        assert_eq!(history.undo_count(), 1);
    }

    #[test]
    fn test_request_redraw_reaches_board() {
        let mut board = NumberBoard::new(1, 1, PuzzleKind::Numbers).unwrap();
        board.take_redraw_request();
        let mut history = CommandHistory::default();
        BoardEditor::new(&mut board, &mut history).request_redraw();
        assert!(board.take_redraw_request());
    }
}
