//! Host board input: cell selection and typing values.
//!
//! [`PointerSet::Capture`] records the pointer for the frame. Presses then pass
//! through [`PointerSet::Intercept`], where the clipboard may claim them, and
//! only unclaimed presses reach the board in [`PointerSet::Board`].

use bevy::prelude::*;
use bevy_egui::EguiContexts;

use crate::constants::MAX_CELL_NUMBER;
use crate::editor::clipboard::{BLANK, BoardCoord, BoardWrite, UNNUMBERED, pointer_to_cell};
use crate::editor::history::CommandHistory;
use crate::editor::params::{CameraParams, is_cursor_over_ui};
use crate::theme;

use super::edit::BoardEditor;
use super::layout::{BoardLayout, surface_rect_to_world};
use super::number_board::NumberBoard;

/// Ordering of pointer handlers within a frame
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum PointerSet {
    /// Resolve the cursor and this frame's press into board surface pixels
    Capture,
    /// Overlays that may consume the press
    Intercept,
    /// The board's own handlers
    Board,
}

/// This frame's pointer, in board surface pixels.
///
/// A press claimed by a handler in [`PointerSet::Intercept`] is hidden from the board.
#[derive(Resource, Debug, Default)]
pub struct PointerState {
    position: Option<Vec2>,
    press: Option<Vec2>,
    claimed: bool,
}

impl PointerState {
    /// Start a new frame with the cursor at `position`
    pub fn begin_frame(&mut self, position: Option<Vec2>, pressed: bool) {
        self.position = position;
        self.press = position.filter(|_| pressed);
        self.claimed = false;
    }

    /// Cursor over the board surface, `None` when it is off the window or over UI
    pub fn position(&self) -> Option<Vec2> {
        self.position
    }

    /// Where the left button went down this frame
    pub fn press(&self) -> Option<Vec2> {
        self.press
    }

    pub fn claim(&mut self) {
        self.claimed = true;
    }

    pub fn is_claimed(&self) -> bool {
        self.claimed
    }

    pub fn unclaimed_press(&self) -> Option<Vec2> {
        self.press.filter(|_| !self.claimed)
    }
}

/// Read the cursor and left button once per frame; egui gets the pointer when it is over UI
pub fn capture_pointer(
    mouse_button: Res<ButtonInput<MouseButton>>,
    camera: CameraParams,
    mut contexts: EguiContexts,
    mut pointer: ResMut<PointerState>,
) {
    let position = if is_cursor_over_ui(&mut contexts) {
        None
    } else {
        camera.cursor_surface_pos()
    };
    pointer.begin_frame(position, mouse_button.just_pressed(MouseButton::Left));
}

/// The cell that receives typed values
#[derive(Resource, Debug, Default)]
pub struct CellCursor {
    pub cell: Option<BoardCoord>,
}

/// A key that edits the value under the cell cursor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKey {
    Digit(i32),
    Backspace,
    Clear,
    Unnumbered,
}

/// Value of a cell after pressing `key`.
///
/// Digits append to an existing number while it stays within range and
/// otherwise start a new one.
pub fn next_value(current: i32, key: CellKey) -> i32 {
    match key {
        CellKey::Digit(d) => {
            if current > 0 && current * 10 + d <= MAX_CELL_NUMBER {
                current * 10 + d
            } else {
                d
            }
        }
        CellKey::Backspace if current >= 10 => current / 10,
        CellKey::Backspace | CellKey::Clear => BLANK,
        CellKey::Unnumbered => UNNUMBERED,
    }
}

const DIGIT_KEYS: [(KeyCode, KeyCode); 10] = [
    (KeyCode::Digit0, KeyCode::Numpad0),
    (KeyCode::Digit1, KeyCode::Numpad1),
    (KeyCode::Digit2, KeyCode::Numpad2),
    (KeyCode::Digit3, KeyCode::Numpad3),
    (KeyCode::Digit4, KeyCode::Numpad4),
    (KeyCode::Digit5, KeyCode::Numpad5),
    (KeyCode::Digit6, KeyCode::Numpad6),
    (KeyCode::Digit7, KeyCode::Numpad7),
    (KeyCode::Digit8, KeyCode::Numpad8),
    (KeyCode::Digit9, KeyCode::Numpad9),
];

fn pressed_cell_key(keyboard: &ButtonInput<KeyCode>) -> Option<CellKey> {
    let shift = keyboard.pressed(KeyCode::ShiftLeft) || keyboard.pressed(KeyCode::ShiftRight);

    for (digit, (row_key, pad_key)) in DIGIT_KEYS.iter().enumerate() {
        if keyboard.just_pressed(*row_key) || keyboard.just_pressed(*pad_key) {
            return Some(CellKey::Digit(digit as i32));
        }
    }
    if keyboard.just_pressed(KeyCode::Backspace) {
        Some(CellKey::Backspace)
    } else if keyboard.just_pressed(KeyCode::Delete) {
        Some(CellKey::Clear)
    } else if shift && keyboard.just_pressed(KeyCode::Slash) {
        // '?' on most layouts
        Some(CellKey::Unnumbered)
    } else {
        None
    }
}

/// Move the cell cursor to the clicked cell, unless the click was claimed
pub fn handle_board_click(
    pointer: Res<PointerState>,
    layout: Res<BoardLayout>,
    board: Res<NumberBoard>,
    mut cursor: ResMut<CellCursor>,
) {
    let Some(press) = pointer.unclaimed_press() else {
        return;
    };

    cursor.cell = pointer_to_cell(&layout.metrics, press, &*board).ok();
}

/// Type a value into the cell under the cursor, and move the cursor with the arrow keys
pub fn handle_cell_typing(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut contexts: EguiContexts,
    mut cursor: ResMut<CellCursor>,
    mut board: ResMut<NumberBoard>,
    mut history: ResMut<CommandHistory>,
) {
    if let Ok(ctx) = contexts.ctx_mut()
        && ctx.wants_keyboard_input()
    {
        return;
    }

    let ctrl = keyboard.pressed(KeyCode::ControlLeft) || keyboard.pressed(KeyCode::ControlRight);
    if ctrl {
        return;
    }

    let Some(cell) = cursor.cell else {
        return;
    };

    let step = if keyboard.just_pressed(KeyCode::ArrowLeft) {
        Some((-2, 0))
    } else if keyboard.just_pressed(KeyCode::ArrowRight) {
        Some((2, 0))
    } else if keyboard.just_pressed(KeyCode::ArrowUp) {
        Some((0, -2))
    } else if keyboard.just_pressed(KeyCode::ArrowDown) {
        Some((0, 2))
    } else {
        None
    };
    if let Some((dx, dy)) = step {
        let next = BoardCoord::new(cell.bx + dx, cell.by + dy);
        if board.value(next).is_some() {
            cursor.cell = Some(next);
        }
        return;
    }

    let Some(key) = pressed_cell_key(&keyboard) else {
        return;
    };
    let Some(current) = board.value(cell) else {
        cursor.cell = None;
        return;
    };

    let value = next_value(current, key);
    if value == current {
        return;
    }
    let mut editor = BoardEditor::new(&mut board, &mut history);
    editor.set_cell_value(cell, value);
    editor.request_redraw();
}

pub fn draw_cell_cursor(mut gizmos: Gizmos, cursor: Res<CellCursor>, layout: Res<BoardLayout>) {
    let Some(cell) = cursor.cell else {
        return;
    };
    let rect = surface_rect_to_world(layout.metrics.cell_rect_to_pixels(cell, cell)).inflate(-2.0);
    gizmos.rect_2d(
        Isometry2d::from_translation(rect.center()),
        rect.size(),
        theme::CELL_CURSOR,
    );
}

#[cfg(test)]
mod tests {
    use bevy::ecs::system::RunSystemOnce;

    use super::*;
    use crate::board::PuzzleKind;
    use crate::editor::clipboard::{ClipboardMode, CopyPasteController, intercept_pointer};

    #[test]
    fn test_digits_append_within_range() {
        assert_eq!(next_value(BLANK, CellKey::Digit(4)), 4);
        assert_eq!(next_value(4, CellKey::Digit(2)), 42);
        assert_eq!(next_value(42, CellKey::Digit(7)), 427);
        // 4271 would exceed the limit, so start over
        assert_eq!(next_value(427, CellKey::Digit(1)), 1);
        // a leading zero is replaced rather than kept
        assert_eq!(next_value(0, CellKey::Digit(5)), 5);
        assert_eq!(next_value(UNNUMBERED, CellKey::Digit(3)), 3);
    }

    #[test]
    fn test_backspace_and_clear() {
        assert_eq!(next_value(427, CellKey::Backspace), 42);
        assert_eq!(next_value(7, CellKey::Backspace), BLANK);
        assert_eq!(next_value(UNNUMBERED, CellKey::Backspace), BLANK);
        assert_eq!(next_value(427, CellKey::Clear), BLANK);
    }

    #[test]
    fn test_unnumbered_key() {
        assert_eq!(next_value(12, CellKey::Unnumbered), UNNUMBERED);
    }

    #[test]
    fn test_unnumbered_needs_shift() {
        let mut keyboard = ButtonInput::<KeyCode>::default();
        keyboard.press(KeyCode::Slash);
        assert_eq!(pressed_cell_key(&keyboard), None);

        let mut keyboard = ButtonInput::<KeyCode>::default();
        keyboard.press(KeyCode::ShiftRight);
        keyboard.press(KeyCode::Slash);
        assert_eq!(pressed_cell_key(&keyboard), Some(CellKey::Unnumbered));
    }

    #[test]
    fn test_pointer_state_frames() {
        let mut pointer = PointerState::default();
        pointer.begin_frame(Some(Vec2::new(3.0, 3.0)), false);
        assert_eq!(pointer.position(), Some(Vec2::new(3.0, 3.0)));
        assert_eq!(pointer.press(), None);

        pointer.begin_frame(Some(Vec2::new(5.0, 3.0)), true);
        assert_eq!(pointer.unclaimed_press(), Some(Vec2::new(5.0, 3.0)));
        pointer.claim();
        assert!(pointer.is_claimed());
        assert_eq!(pointer.press(), Some(Vec2::new(5.0, 3.0)));
        assert_eq!(pointer.unclaimed_press(), None);

        // A press over UI or off the window has no position
        pointer.begin_frame(None, true);
        assert!(!pointer.is_claimed());
        assert_eq!(pointer.press(), None);
    }

    /// 3x3 board with the default one-pixel-per-unit layout and a press at `press`
    fn click_world(press: Vec2) -> World {
        let mut world = World::new();
        world.insert_resource(NumberBoard::new(3, 3, PuzzleKind::Numbers).unwrap());
        world.init_resource::<BoardLayout>();
        world.init_resource::<CommandHistory>();
        world.insert_resource(CellCursor {
            cell: Some(BoardCoord::new(1, 1)),
        });
        let mut pointer = PointerState::default();
        pointer.begin_frame(Some(press), true);
        world.insert_resource(pointer);
        world
    }

    fn click(world: &mut World) {
        world.run_system_once(intercept_pointer).unwrap();
        world.run_system_once(handle_board_click).unwrap();
    }

    #[test]
    fn test_press_claimed_while_selecting_skips_board() {
        let mut world = click_world(Vec2::new(5.0, 5.0));
        let mut controller = CopyPasteController::default();
        controller.setup();
        assert!(controller.start_copy());
        world.insert_resource(controller);

        click(&mut world);

        assert!(world.resource::<PointerState>().is_claimed());
        assert_eq!(
            world.resource::<CellCursor>().cell,
            Some(BoardCoord::new(1, 1))
        );
        assert_eq!(
            world.resource::<CopyPasteController>().mode(),
            ClipboardMode::Selecting {
                start: Some(BoardCoord::new(5, 5))
            }
        );
    }

    #[test]
    fn test_press_while_idle_reaches_board() {
        let mut world = click_world(Vec2::new(5.0, 3.0));
        let mut controller = CopyPasteController::default();
        controller.setup();
        world.insert_resource(controller);

        click(&mut world);

        assert!(!world.resource::<PointerState>().is_claimed());
        assert_eq!(
            world.resource::<CellCursor>().cell,
            Some(BoardCoord::new(5, 3))
        );
    }
}
