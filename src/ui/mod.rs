mod dialogs;
mod toolbar;

use bevy::prelude::*;
use bevy_egui::EguiPrimaryContextPass;

use crate::config::{ConfigLoaded, ConfigResetNotification};

/// Resource that tracks whether any modal dialog is currently open.
/// Editor input handlers should check this to avoid processing input
/// when the user is interacting with a dialog.
#[derive(Resource, Default)]
pub struct DialogState {
    /// True when any modal dialog is open that should block editor input
    pub any_modal_open: bool,
}

/// System to aggregate all dialog open states into a single resource.
/// Runs in First schedule before input handlers.
fn update_dialog_state(
    config_reset: Res<ConfigResetNotification>,
    mut dialog_state: ResMut<DialogState>,
) {
    let open = config_reset.show;
    if dialog_state.any_modal_open != open {
        dialog_state.any_modal_open = open;
    }
}

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DialogState>()
            .init_resource::<toolbar::NewBoardForm>()
            .add_systems(Startup, toolbar::init_new_board_form.after(ConfigLoaded))
            .add_systems(
                EguiPrimaryContextPass,
                (toolbar::toolbar_ui, dialogs::config_reset_notification_ui).chain(),
            )
            // Update dialog state at the start of each frame
            .add_systems(First, update_dialog_state);
    }
}
