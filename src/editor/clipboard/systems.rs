//! Bevy systems that connect the copy/paste controller to input, UI commands and drawing.

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use crate::board::{
    BoardEditor, BoardLayout, BoardResized, NumberBoard, PointerState, surface_rect_to_world,
    surface_to_world,
};
use crate::config::AppConfig;
use crate::editor::history::CommandHistory;
use crate::editor::params::CameraWithProjection;
use crate::theme;

use super::controller::{CopyPasteController, InputDisposition};
use super::overlay::{OverlayFrame, OverlayStyle};

/// Commands the UI (toolbar buttons, shortcuts) can issue to the clipboard
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClipboardCommand {
    StartCopy,
    StartPaste,
    Rotate90,
    FlipHorizontal,
    Cancel,
}

/// The overlay currently on screen, rebuilt when the clipboard or the board layout changes
#[derive(Resource, Default)]
pub struct ClipboardOverlay {
    pub frame: Option<OverlayFrame>,
}

/// Spacing of the hatch lines used to fill overlay regions
const FILL_HATCH_STEP: f32 = 6.0;

/// Runs once the board surface exists
pub fn setup_controller(mut controller: ResMut<CopyPasteController>) {
    controller.setup();
}

/// Keyboard shortcuts: Ctrl+C, Ctrl+V, R, F, Escape
pub fn handle_clipboard_shortcuts(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut contexts: EguiContexts,
    mut commands: MessageWriter<ClipboardCommand>,
) {
    // Don't trigger if typing in UI
    if let Ok(ctx) = contexts.ctx_mut()
        && ctx.wants_keyboard_input()
    {
        return;
    }

    let ctrl = keyboard.pressed(KeyCode::ControlLeft) || keyboard.pressed(KeyCode::ControlRight);

    if ctrl && keyboard.just_pressed(KeyCode::KeyC) {
        commands.write(ClipboardCommand::StartCopy);
    } else if ctrl && keyboard.just_pressed(KeyCode::KeyV) {
        commands.write(ClipboardCommand::StartPaste);
    } else if !ctrl && keyboard.just_pressed(KeyCode::KeyR) {
        commands.write(ClipboardCommand::Rotate90);
    } else if !ctrl && keyboard.just_pressed(KeyCode::KeyF) {
        commands.write(ClipboardCommand::FlipHorizontal);
    } else if keyboard.just_pressed(KeyCode::Escape) {
        commands.write(ClipboardCommand::Cancel);
    }
}

pub fn apply_clipboard_commands(
    mut commands: MessageReader<ClipboardCommand>,
    mut controller: ResMut<CopyPasteController>,
) {
    for command in commands.read() {
        let applied = match command {
            ClipboardCommand::StartCopy => controller.start_copy(),
            ClipboardCommand::StartPaste => controller.start_paste(),
            ClipboardCommand::Rotate90 => controller.toggle_rotate90(),
            ClipboardCommand::FlipHorizontal => controller.toggle_flip_horizontal(),
            ClipboardCommand::Cancel => controller.cancel(),
        };
        if !applied {
            debug!("Clipboard command {:?} ignored", command);
        }
    }
}

/// Give the controller first look at left clicks on the board.
///
/// Runs in `PointerSet::Intercept`; a claimed click is hidden from the board's own input.
pub fn intercept_pointer(
    layout: Res<BoardLayout>,
    mut controller: ResMut<CopyPasteController>,
    mut board: ResMut<NumberBoard>,
    mut history: ResMut<CommandHistory>,
    mut pointer: ResMut<PointerState>,
) {
    let Some(press) = pointer.press() else {
        return;
    };

    let mut editor = BoardEditor::new(&mut board, &mut history);
    if controller.pointer_down(press, &layout.metrics, &mut editor) == InputDisposition::Claimed {
        pointer.claim();
    }
}

/// Move the paste preview with the pointer.
///
/// Runs every frame while pasting so pans and zooms under a still cursor move the anchor too.
pub fn track_paste_preview(
    pointer: Res<PointerState>,
    layout: Res<BoardLayout>,
    board: Res<NumberBoard>,
    mut controller: ResMut<CopyPasteController>,
) {
    let Some(position) = pointer.position() else {
        return;
    };

    // Only flag a change when the anchor actually moved
    if controller
        .bypass_change_detection()
        .pointer_moved(position, &layout.metrics, &*board)
    {
        controller.set_changed();
    }
}

pub fn refresh_overlay(
    controller: Res<CopyPasteController>,
    layout: Res<BoardLayout>,
    board: Res<NumberBoard>,
    config: Res<AppConfig>,
    mut resized: MessageReader<BoardResized>,
    mut overlay: ResMut<ClipboardOverlay>,
) {
    let was_resized = resized.read().count() > 0;
    if !(was_resized || controller.is_changed() || config.is_changed() || board.is_changed()) {
        return;
    }

    let style = OverlayStyle {
        highlight_filled: board.kind().highlights_filled(),
        label_scale: config.data.overlay_label_scale,
        min_label_size: config.data.min_label_size,
    };
    overlay.frame = controller.overlay(&layout.metrics, &style);
}

/// Stroke and hatch-fill the overlay region
pub fn draw_overlay_outline(mut gizmos: Gizmos, overlay: Res<ClipboardOverlay>) {
    let Some(frame) = &overlay.frame else {
        return;
    };

    let region = surface_rect_to_world(frame.region);

    if let Some(fill) = frame.fill {
        // Gizmos have no filled rectangles, so hatch the inside
        let mut y = region.min.y + FILL_HATCH_STEP;
        while y < region.max.y {
            gizmos.line_2d(Vec2::new(region.min.x, y), Vec2::new(region.max.x, y), fill);
            y += FILL_HATCH_STEP;
        }
    }

    gizmos.rect_2d(
        Isometry2d::from_translation(region.center()),
        region.size(),
        frame.stroke,
    );
}

/// Draw ghost numbers and tinted cells of the paste preview with egui
pub fn draw_overlay_labels(
    mut contexts: EguiContexts,
    camera: CameraWithProjection,
    overlay: Res<ClipboardOverlay>,
) -> Result {
    let Some(frame) = &overlay.frame else {
        return Ok(());
    };
    if frame.labels.is_empty() && frame.cell_tints.is_empty() {
        return Ok(());
    }

    let ctx = contexts.ctx_mut()?;
    let painter = ctx.layer_painter(egui::LayerId::new(
        egui::Order::Background,
        egui::Id::new("clipboard_overlay"),
    ));
    let zoom = camera.zoom_scale();

    for tint in &frame.cell_tints {
        let world = surface_rect_to_world(*tint);
        let (Some(a), Some(b)) = (camera.world_to_screen(world.min), camera.world_to_screen(world.max))
        else {
            continue;
        };
        painter.rect_filled(
            egui::Rect::from_two_pos(egui::pos2(a.x, a.y), egui::pos2(b.x, b.y)),
            0.0,
            theme::bevy_to_egui(frame.tint),
        );
    }

    for label in &frame.labels {
        let Some(screen) = camera.world_to_screen(surface_to_world(label.center)) else {
            continue;
        };
        painter.text(
            egui::pos2(screen.x, screen.y),
            egui::Align2::CENTER_CENTER,
            &label.text,
            egui::FontId::proportional(label.size / zoom),
            theme::bevy_to_egui(label.color),
        );
    }
    Ok(())
}
