use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use crate::board::{NewBoardRequest, NumberBoard, PuzzleKind};
use crate::config::AppConfig;
use crate::constants::MAX_BOARD_DIM;
use crate::editor::clipboard::{ClipboardCommand, ClipboardMode, CopyPasteController};
use crate::editor::history::{CommandHistory, redo_last, undo_last};
use crate::theme;

/// Size and kind entered for the next "New" board
#[derive(Resource, Debug, Clone, Copy)]
pub struct NewBoardForm {
    pub width: usize,
    pub height: usize,
    pub kind: PuzzleKind,
}

impl Default for NewBoardForm {
    fn default() -> Self {
        Self {
            width: crate::constants::DEFAULT_BOARD_WIDTH,
            height: crate::constants::DEFAULT_BOARD_HEIGHT,
            kind: PuzzleKind::default(),
        }
    }
}

/// Fill the form from the loaded config
pub fn init_new_board_form(config: Res<AppConfig>, mut form: ResMut<NewBoardForm>) {
    form.width = config.data.board_width;
    form.height = config.data.board_height;
    form.kind = config.data.puzzle_kind;
}

/// One-line description of the clipboard for the status area
pub fn status_text(controller: &CopyPasteController) -> String {
    let shape = controller
        .buffer()
        .oriented_size()
        .map(|(w, h)| format!("{}×{}", w, h));

    match controller.mode() {
        ClipboardMode::Selecting { start: None } => "Copy: click the first corner".to_string(),
        ClipboardMode::Selecting { start: Some(_) } => {
            "Copy: click the opposite corner".to_string()
        }
        ClipboardMode::Pasting { .. } => {
            format!("Pasting {}", shape.unwrap_or_default())
        }
        ClipboardMode::Idle { .. } => match shape {
            Some(shape) => format!("Clipboard {}", shape),
            None => "Clipboard empty".to_string(),
        },
    }
}

fn toolbar_button(text: &str, selected: bool) -> egui::Button<'_> {
    egui::Button::new(egui::RichText::new(text).size(14.0).strong())
        .min_size(egui::vec2(0.0, 28.0))
        .selected(selected)
}

/// Main toolbar: new board, undo/redo, clipboard commands and status
#[allow(clippy::too_many_arguments)]
pub fn toolbar_ui(
    mut contexts: EguiContexts,
    mut form: ResMut<NewBoardForm>,
    controller: Res<CopyPasteController>,
    mut history: ResMut<CommandHistory>,
    mut board: ResMut<NumberBoard>,
    mut clipboard_commands: MessageWriter<ClipboardCommand>,
    mut new_board: MessageWriter<NewBoardRequest>,
) -> Result {
    let has_clip = !controller.buffer().is_empty();
    let is_idle = controller.mode() == ClipboardMode::default();

    egui::TopBottomPanel::top("main_toolbar")
        .frame(
            egui::Frame::side_top_panel(&contexts.ctx_mut()?.style())
                .inner_margin(egui::Margin::symmetric(12, 8)),
        )
        .show(contexts.ctx_mut()?, |ui| {
            ui.horizontal(|ui| {
                ui.spacing_mut().item_spacing.x = 4.0;

                // New board controls
                ui.label(egui::RichText::new("Board:").color(theme::ui::LABEL_TEXT));
                ui.add(egui::DragValue::new(&mut form.width).range(1..=MAX_BOARD_DIM));
                ui.label("×");
                ui.add(egui::DragValue::new(&mut form.height).range(1..=MAX_BOARD_DIM));
                egui::ComboBox::from_id_salt("puzzle_kind_select")
                    .selected_text(form.kind.display_name())
                    .width(90.0)
                    .show_ui(ui, |ui| {
                        for kind in PuzzleKind::all() {
                            if ui
                                .selectable_label(form.kind == *kind, kind.display_name())
                                .clicked()
                            {
                                form.kind = *kind;
                            }
                        }
                    });
                if ui.add(toolbar_button("New", false)).clicked() {
                    new_board.write(NewBoardRequest {
                        width: form.width,
                        height: form.height,
                        kind: form.kind,
                    });
                }

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                if ui
                    .add_enabled(history.can_undo(), toolbar_button("Undo", false))
                    .on_hover_text("Ctrl+Z")
                    .clicked()
                {
                    undo_last(&mut history, &mut board);
                }
                if ui
                    .add_enabled(history.can_redo(), toolbar_button("Redo", false))
                    .on_hover_text("Ctrl+Y")
                    .clicked()
                {
                    redo_last(&mut history, &mut board);
                }

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                let buttons = [
                    (
                        "Copy",
                        "Ctrl+C: click two corners to copy",
                        controller.is_selecting(),
                        true,
                        ClipboardCommand::StartCopy,
                    ),
                    (
                        "Paste",
                        "Ctrl+V: click to paste at the preview",
                        controller.is_pasting(),
                        has_clip,
                        ClipboardCommand::StartPaste,
                    ),
                    (
                        "Rotate 90°",
                        "R",
                        controller.buffer().rotate_step() != 0,
                        has_clip,
                        ClipboardCommand::Rotate90,
                    ),
                    (
                        "Flip H",
                        "F",
                        controller.buffer().is_flipped(),
                        has_clip,
                        ClipboardCommand::FlipHorizontal,
                    ),
                    ("Cancel", "Esc", false, !is_idle, ClipboardCommand::Cancel),
                ];

                for (text, hint, selected, enabled, command) in buttons {
                    if ui
                        .add_enabled(enabled, toolbar_button(text, selected))
                        .on_hover_text(hint)
                        .clicked()
                    {
                        clipboard_commands.write(command);
                    }
                }

                // Right-aligned status
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let color = if is_idle {
                        theme::ui::HINT_TEXT
                    } else {
                        theme::ui::MODE_ACTIVE
                    };
                    ui.colored_label(color, status_text(&controller));
                });
            });
        });
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editor::clipboard::{BoardCoord, BoardRead, BoardWrite};

    /// 4x4 board where every cell holds 1
    struct Ones;

    impl BoardRead for Ones {
        fn cell_value(&self, at: BoardCoord) -> Option<i32> {
            let inside = at.is_cell_center() && (1..=7).contains(&at.bx) && (1..=7).contains(&at.by);
            inside.then_some(1)
        }
    }

    impl BoardWrite for Ones {
        fn begin_edit(&mut self) {}
        fn set_cell_value(&mut self, _at: BoardCoord, _value: i32) {}
        fn end_edit(&mut self) {}
        fn request_redraw(&mut self) {}
    }

    #[test]
    fn test_status_text_follows_mode() {
        let mut controller = CopyPasteController::default();
        controller.setup();
        assert_eq!(status_text(&controller), "Clipboard empty");

        controller.start_copy();
        assert_eq!(status_text(&controller), "Copy: click the first corner");

        // Default metrics map pixels straight to board addresses
        let metrics = Default::default();
        controller.pointer_down(Vec2::new(1.0, 1.0), &metrics, &mut Ones);
        assert_eq!(status_text(&controller), "Copy: click the opposite corner");

        // 3 columns wide, 2 rows tall
        controller.pointer_down(Vec2::new(5.0, 3.0), &metrics, &mut Ones);
        assert_eq!(status_text(&controller), "Clipboard 3×2");

        controller.start_paste();
        controller.toggle_rotate90();
        assert_eq!(status_text(&controller), "Pasting 2×3");
    }
}
