//! The copy/paste state machine.

use bevy::prelude::*;

use super::coords::{BoardCoord, BoardMetrics, CellRect, pointer_to_cell};
use super::host::{BoardRead, BoardWrite};
use super::paste::{PasteReport, write_block};
use super::types::ClipboardBuffer;

/// Which clipboard interaction is in progress
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClipboardMode {
    /// No interaction. `stale` is the last copied rectangle, still shown until the next click.
    Idle { stale: Option<CellRect> },
    /// Waiting for the first and then the second corner of a copy rectangle
    Selecting { start: Option<BoardCoord> },
    /// Following the pointer with a paste preview anchored at its top-left cell
    Pasting { anchor: Option<BoardCoord> },
}

impl Default for ClipboardMode {
    fn default() -> Self {
        ClipboardMode::Idle { stale: None }
    }
}

/// Whether a pointer press was consumed by the clipboard or should reach the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputDisposition {
    Claimed,
    PassThrough,
}

/// Owns the clipboard mode, both cursors and the copied data.
///
/// Every command is a silent no-op when its preconditions are not met; the
/// returned `bool` only reports whether anything changed.
#[derive(Resource, Debug, Default)]
pub struct CopyPasteController {
    ready: bool,
    mode: ClipboardMode,
    buffer: ClipboardBuffer,
}

impl CopyPasteController {
    /// Mark the drawing surface as ready. Commands are ignored until this runs.
    pub fn setup(&mut self) {
        if self.ready {
            return;
        }
        self.ready = true;
        debug!("Copy/paste controller ready");
    }

    #[cfg(test)]
    pub fn is_ready(&self) -> bool {
        self.ready
    }

    pub fn mode(&self) -> ClipboardMode {
        self.mode
    }

    pub fn buffer(&self) -> &ClipboardBuffer {
        &self.buffer
    }

    pub fn is_selecting(&self) -> bool {
        matches!(self.mode, ClipboardMode::Selecting { .. })
    }

    pub fn is_pasting(&self) -> bool {
        matches!(self.mode, ClipboardMode::Pasting { .. })
    }

    /// Enter selection mode, dropping any rectangle still on screen
    pub fn start_copy(&mut self) -> bool {
        if !self.ready {
            return false;
        }
        self.set_mode(ClipboardMode::Selecting { start: None });
        true
    }

    /// Enter paste mode. Ignored while the clipboard is empty.
    pub fn start_paste(&mut self) -> bool {
        if !self.ready {
            return false;
        }
        if self.buffer.is_empty() {
            debug!("Paste ignored: clipboard is empty");
            return false;
        }
        self.set_mode(ClipboardMode::Pasting { anchor: None });
        true
    }

    pub fn toggle_rotate90(&mut self) -> bool {
        self.buffer.rotate_clockwise()
    }

    pub fn toggle_flip_horizontal(&mut self) -> bool {
        self.buffer.toggle_flip()
    }

    /// Return to idle and clear anything drawn
    pub fn cancel(&mut self) -> bool {
        if self.mode == ClipboardMode::default() {
            return false;
        }
        self.set_mode(ClipboardMode::default());
        true
    }

    /// Handle a primary pointer press at a surface pixel.
    ///
    /// Presses are claimed while selecting or pasting. In idle mode a press
    /// only clears a stale rectangle and is passed on to the board.
    pub fn pointer_down<B: BoardWrite>(
        &mut self,
        pointer: Vec2,
        metrics: &BoardMetrics,
        board: &mut B,
    ) -> InputDisposition {
        match self.mode {
            ClipboardMode::Idle { stale } => {
                if stale.is_some() {
                    self.mode = ClipboardMode::default();
                }
                InputDisposition::PassThrough
            }
            ClipboardMode::Selecting { start } => {
                // Clicks off the board are swallowed without effect
                if let Ok(cell) = pointer_to_cell(metrics, pointer, &*board) {
                    match start {
                        None => {
                            debug!("Selection started at ({}, {})", cell.bx, cell.by);
                            self.mode = ClipboardMode::Selecting { start: Some(cell) };
                        }
                        Some(start) => {
                            let rect = CellRect::from_corners(start, cell);
                            self.buffer.copy_from(&*board, rect);
                            self.set_mode(ClipboardMode::Idle { stale: Some(rect) });
                        }
                    }
                }
                InputDisposition::Claimed
            }
            ClipboardMode::Pasting { .. } => {
                self.commit(board);
                InputDisposition::Claimed
            }
        }
    }

    /// Track the pointer while pasting.
    ///
    /// A pointer off the board keeps the previous anchor. Returns true when the anchor moved.
    pub fn pointer_moved(
        &mut self,
        pointer: Vec2,
        metrics: &BoardMetrics,
        board: &impl BoardRead,
    ) -> bool {
        let ClipboardMode::Pasting { anchor } = self.mode else {
            return false;
        };
        let Ok(cell) = pointer_to_cell(metrics, pointer, board) else {
            return false;
        };
        if anchor == Some(cell) {
            return false;
        }
        self.mode = ClipboardMode::Pasting { anchor: Some(cell) };
        true
    }

    /// Write the oriented clipboard at the current anchor and return to idle.
    ///
    /// Does nothing without an anchor.
    pub fn commit<B: BoardWrite>(&mut self, board: &mut B) -> Option<PasteReport> {
        let ClipboardMode::Pasting {
            anchor: Some(anchor),
        } = self.mode
        else {
            return None;
        };
        let block = self.buffer.oriented()?;
        let report = write_block(board, anchor, &block);
        self.set_mode(ClipboardMode::default());
        Some(report)
    }

    fn set_mode(&mut self, mode: ClipboardMode) {
        if self.mode != mode {
            debug!("Clipboard mode {:?} -> {:?}", self.mode, mode);
        }
        self.mode = mode;
    }
}
