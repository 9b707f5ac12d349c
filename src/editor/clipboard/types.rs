//! Clipboard storage.

use super::transform::{CellBlock, compose};

/// The last copied rectangle plus the orientation it will be pasted with.
///
/// The copied block is never modified after a copy; rotating and flipping only
/// change the transform parameters.
#[derive(Debug, Clone, Default)]
pub struct ClipboardBuffer {
    cells: Option<CellBlock>,
    rotate_step: u8,
    flip_horizontal: bool,
}

impl ClipboardBuffer {
    pub fn is_empty(&self) -> bool {
        self.cells.is_none()
    }

    /// The block as copied, before any rotation or flip
    #[cfg(test)]
    pub fn raw(&self) -> Option<&CellBlock> {
        self.cells.as_ref()
    }

    /// Clockwise quarter turns, 0..=3
    pub fn rotate_step(&self) -> u8 {
        self.rotate_step
    }

    pub fn is_flipped(&self) -> bool {
        self.flip_horizontal
    }

    /// Replace the contents and reset the orientation
    pub fn store(&mut self, cells: CellBlock) {
        self.cells = Some(cells);
        self.rotate_step = 0;
        self.flip_horizontal = false;
    }

    /// Advance the rotation by a quarter turn. Returns false when there is nothing to rotate.
    pub fn rotate_clockwise(&mut self) -> bool {
        if self.is_empty() {
            return false;
        }
        self.rotate_step = (self.rotate_step + 1) % 4;
        true
    }

    /// Toggle the horizontal mirror. Returns false when there is nothing to flip.
    pub fn toggle_flip(&mut self) -> bool {
        if self.is_empty() {
            return false;
        }
        self.flip_horizontal = !self.flip_horizontal;
        true
    }

    /// The copied block with the current rotation and flip applied
    pub fn oriented(&self) -> Option<CellBlock> {
        self.cells
            .as_ref()
            .map(|cells| compose(cells, self.rotate_step, self.flip_horizontal))
    }

    /// Width and height in cells after orientation
    pub fn oriented_size(&self) -> Option<(usize, usize)> {
        let cells = self.cells.as_ref()?;
        if self.rotate_step % 2 == 1 {
            Some((cells.height(), cells.width()))
        } else {
            Some((cells.width(), cells.height()))
        }
    }
}
