//! Undo/Redo system for board edits.
//!
//! Every change to cell values (typing into a cell, committing a paste) is
//! recorded as a command that can be undone and redone.
//!
//! ## Usage
//!
//! - **Ctrl+Z**: Undo the last action
//! - **Ctrl+Y** or **Ctrl+Shift+Z**: Redo the last undone action
//!
//! ## Module Structure
//!
//! - [`commands`] - EditorCommand enum defining all reversible operations
//! - [`command_history`] - CommandHistory resource for tracking state
//! - [`systems`] - Bevy systems for keyboard shortcuts
//! - [`execute`] - Execute functions for undo/redo operations

mod command_history;
mod commands;
mod execute;
mod systems;


// Re-exports
pub use command_history::CommandHistory;
pub use commands::{CellEdit, EditorCommand};
pub use execute::{redo_last, undo_last};
pub use systems::{handle_redo, handle_undo};

/// Maximum number of commands to keep in history
pub(crate) const MAX_HISTORY_SIZE: usize = 100;
