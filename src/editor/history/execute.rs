//! Execute functions for undo and redo operations.

use bevy::prelude::*;

use crate::board::NumberBoard;

use super::command_history::CommandHistory;
use super::commands::EditorCommand;

/// Execute an undo operation and return the command to keep for redo
pub fn execute_undo(command: &EditorCommand, board: &mut NumberBoard) -> Option<EditorCommand> {
    match command {
        EditorCommand::SetCells { edits } => {
            // Restore in reverse so a cell edited twice ends at its first value
            for edit in edits.iter().rev() {
                board.set_value(edit.at, edit.before);
            }
            board.request_redraw();
            Some(command.clone())
        }
    }
}

/// Execute a redo operation and return the command to keep for undo
pub fn execute_redo(command: &EditorCommand, board: &mut NumberBoard) -> Option<EditorCommand> {
    match command {
        EditorCommand::SetCells { edits } => {
            for edit in edits {
                board.set_value(edit.at, edit.after);
            }
            board.request_redraw();
            Some(command.clone())
        }
    }
}

/// Undo the most recent command. Returns false when there is nothing to undo.
pub fn undo_last(history: &mut CommandHistory, board: &mut NumberBoard) -> bool {
    let Some(command) = history.pop_undo() else {
        return false;
    };
    debug!("Undo {:?}", command);
    if let Some(reverse) = execute_undo(&command, board) {
        history.push_redo(reverse);
    }
    true
}

/// Redo the most recently undone command. Returns false when there is nothing to redo.
pub fn redo_last(history: &mut CommandHistory, board: &mut NumberBoard) -> bool {
    let Some(command) = history.pop_redo() else {
        return false;
    };
    debug!("Redo {:?}", command);
    if let Some(reverse) = execute_redo(&command, board) {
        history.push_undo(reverse);
    }
    true
}
