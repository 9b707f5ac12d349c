//! Run conditions for controlling when editor systems execute.
//!
//! These conditions help optimize performance by preventing systems from running
//! when they have no work to do.

use bevy::prelude::*;

use crate::editor::clipboard::CopyPasteController;
use crate::ui::DialogState;

/// Run condition: returns true while a paste preview follows the pointer.
///
/// Usage: `.run_if(clipboard_is_pasting)`
pub fn clipboard_is_pasting(controller: Res<CopyPasteController>) -> bool {
    controller.is_pasting()
}

/// Run condition: returns true when no modal dialog is open.
///
/// Use this to prevent editor input handlers from processing when
/// the user is interacting with a dialog.
///
/// Usage: `.run_if(no_dialog_open)`
pub fn no_dialog_open(dialog_state: Res<DialogState>) -> bool {
    !dialog_state.any_modal_open
}
