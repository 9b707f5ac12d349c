mod camera;
pub mod clipboard;
pub mod conditions;
pub mod history;
pub mod params;

use bevy::prelude::*;
use bevy_egui::EguiPrimaryContextPass;

use crate::board::{NewBoardRequest, PointerSet};

use conditions::{clipboard_is_pasting, no_dialog_open};

pub struct EditorPlugin;

impl Plugin for EditorPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<history::CommandHistory>()
            .init_resource::<clipboard::CopyPasteController>()
            .init_resource::<clipboard::ClipboardOverlay>()
            .add_message::<clipboard::ClipboardCommand>()
            .add_systems(Startup, camera::spawn_camera)
            // The board resource and camera exist once Startup has finished
            .add_systems(PostStartup, clipboard::setup_controller)
            .add_systems(
                Update,
                (
                    camera::camera_pan,
                    camera::camera_zoom,
                    camera::reset_camera.run_if(on_message::<NewBoardRequest>),
                    camera::apply_camera_zoom,
                )
                    .chain()
                    .before(PointerSet::Capture),
            )
            .add_systems(
                Update,
                (history::handle_undo, history::handle_redo).run_if(no_dialog_open),
            )
            .add_systems(
                Update,
                (
                    clipboard::handle_clipboard_shortcuts.run_if(no_dialog_open),
                    clipboard::apply_clipboard_commands,
                )
                    .chain()
                    .before(PointerSet::Intercept),
            )
            .add_systems(
                Update,
                (clipboard::refresh_overlay, clipboard::draw_overlay_outline)
                    .chain()
                    .after(PointerSet::Board),
            )
            .add_systems(EguiPrimaryContextPass, clipboard::draw_overlay_labels);
        add_pointer_systems(app);
    }
}

/// The preview follows the pointer before a press in the same frame commits it
fn add_pointer_systems(app: &mut App) {
    app.add_systems(
        Update,
        (
            clipboard::track_paste_preview.run_if(clipboard_is_pasting),
            clipboard::intercept_pointer.run_if(no_dialog_open),
        )
            .chain()
            .in_set(PointerSet::Intercept),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{BoardEditor, BoardLayout, NumberBoard, PointerState, PuzzleKind};
    use crate::editor::clipboard::{BoardCoord, BoardMetrics, ClipboardMode, CopyPasteController};
    use crate::editor::history::CommandHistory;
    use crate::ui::DialogState;

    #[test]
    fn test_press_commits_at_this_frames_pointer() {
        let mut board = NumberBoard::new(3, 3, PuzzleKind::Numbers).unwrap();
        let mut history = CommandHistory::default();
        let metrics = BoardMetrics::default();
        let first = BoardCoord::new(1, 1);
        board.set_value(first, 7);

        // Copy the top-left cell and leave the preview anchored on it
        let mut controller = CopyPasteController::default();
        controller.setup();
        assert!(controller.start_copy());
        {
            let mut editor = BoardEditor::new(&mut board, &mut history);
            controller.pointer_down(metrics.address_to_pixel(first), &metrics, &mut editor);
            controller.pointer_down(metrics.address_to_pixel(first), &metrics, &mut editor);
        }
        assert!(controller.start_paste());
        assert!(controller.pointer_moved(metrics.address_to_pixel(first), &metrics, &board));

        // In one frame the pointer jumps to the bottom-right cell and presses
        let target = BoardCoord::new(5, 5);
        let mut pointer = PointerState::default();
        pointer.begin_frame(Some(metrics.address_to_pixel(target)), true);

        let mut app = App::new();
        app.init_resource::<DialogState>()
            .init_resource::<BoardLayout>()
            .insert_resource(history)
            .insert_resource(board)
            .insert_resource(controller)
            .insert_resource(pointer);
        add_pointer_systems(&mut app);
        app.update();

        let board = app.world().resource::<NumberBoard>();
        assert_eq!(board.value(target), Some(7));
        assert_eq!(
            app.world().resource::<CopyPasteController>().mode(),
            ClipboardMode::Idle { stale: None }
        );
        assert!(app.world().resource::<PointerState>().is_claimed());
    }
}
