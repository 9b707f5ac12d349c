//! Rectangular copy/paste of numbered cells.
//!
//! The user enters selection mode, clicks two opposite corners to copy the
//! cells between them, then enters paste mode where a preview follows the
//! pointer until a click writes the (optionally rotated or flipped) block.
//!
//! ## Module Structure
//!
//! - [`controller`] - the idle/selecting/pasting state machine
//! - [`coords`] - board addressing, pointer-to-cell and cell-to-pixel mapping
//! - [`transform`] - cell blocks and their rotate/flip transforms
//! - [`types`] - the clipboard buffer
//! - [`copy`] / [`paste`] - reading from and writing to the board
//! - [`overlay`] - the selection and preview overlay model
//! - [`systems`] - Bevy systems for commands, pointer input and drawing

mod controller;
mod coords;
mod copy;
mod host;
mod overlay;
mod paste;
mod systems;
mod transform;
mod types;


pub use controller::{ClipboardMode, CopyPasteController};
pub use coords::{BoardCoord, BoardMetrics, pointer_to_cell};
pub use host::{BLANK, BoardRead, BoardWrite, UNNUMBERED};
pub use overlay::{OverlayStyle, label_size};
pub use systems::{
    ClipboardCommand, ClipboardOverlay, apply_clipboard_commands, draw_overlay_labels,
    draw_overlay_outline, handle_clipboard_shortcuts, intercept_pointer, refresh_overlay,
    setup_controller, track_paste_preview,
};
