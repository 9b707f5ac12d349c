//! The numbered puzzle board that hosts the clipboard.
//!
//! ## Module Structure
//!
//! - [`number_board`] - the cell grid resource and puzzle kinds
//! - [`edit`] - undo-recording write access used by typing and pasting
//! - [`layout`] - fitting the board to the window, surface/world conversion
//! - [`render`] - grid lines, cell numbers and shaded cells
//! - [`input`] - pointer ordering, cell cursor and typing

mod edit;
mod input;
mod layout;
mod number_board;
mod render;

pub use edit::BoardEditor;
pub use input::{CellCursor, PointerSet, PointerState};
pub use layout::{
    BoardLayout, BoardResized, surface_rect_to_world, surface_to_world, world_to_surface,
};
pub use number_board::{NumberBoard, PuzzleKind};

use bevy::prelude::*;

use crate::config::{AppConfig, ConfigLoaded, UpdateBoardDefaultsRequest};
use crate::editor::clipboard::CopyPasteController;
use crate::editor::history::CommandHistory;

/// Message to replace the board with a blank one
#[derive(Message, Debug, Clone, Copy)]
pub struct NewBoardRequest {
    pub width: usize,
    pub height: usize,
    pub kind: PuzzleKind,
}

/// Build the first board from the configured size and kind
fn init_board_from_config(mut commands: Commands, config: Res<AppConfig>) {
    let data = &config.data;
    match NumberBoard::new(data.board_width, data.board_height, data.puzzle_kind) {
        Ok(board) => {
            info!(
                "Created {}x{} {} board",
                data.board_width,
                data.board_height,
                data.puzzle_kind.display_name()
            );
            commands.insert_resource(board);
        }
        Err(e) => {
            warn!("Configured board is invalid ({}), using the default board", e);
            commands.insert_resource(NumberBoard::default());
        }
    }
}

fn handle_new_board(
    mut requests: MessageReader<NewBoardRequest>,
    mut board: ResMut<NumberBoard>,
    mut history: ResMut<CommandHistory>,
    mut cursor: ResMut<CellCursor>,
    mut controller: ResMut<CopyPasteController>,
    mut defaults: MessageWriter<UpdateBoardDefaultsRequest>,
) {
    let Some(request) = requests.read().last() else {
        return;
    };

    match NumberBoard::new(request.width, request.height, request.kind) {
        Ok(new_board) => {
            info!(
                "New {}x{} {} board",
                request.width,
                request.height,
                request.kind.display_name()
            );
            *board = new_board;
            history.clear();
            cursor.cell = None;
            // Selections and previews refer to the old board; the copied cells are kept
            controller.cancel();
            defaults.write(UpdateBoardDefaultsRequest {
                width: request.width,
                height: request.height,
                kind: request.kind,
            });
        }
        Err(e) => {
            warn!("Cannot create board: {}", e);
        }
    }
}

pub struct BoardPlugin;

impl Plugin for BoardPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<NumberBoard>()
            .init_resource::<BoardLayout>()
            .init_resource::<PointerState>()
            .init_resource::<CellCursor>()
            .add_message::<BoardResized>()
            .add_message::<NewBoardRequest>()
            .configure_sets(
                Update,
                (PointerSet::Capture, PointerSet::Intercept, PointerSet::Board).chain(),
            )
            .add_systems(Startup, init_board_from_config.after(ConfigLoaded))
            .add_systems(Update, input::capture_pointer.in_set(PointerSet::Capture))
            .add_systems(
                Update,
                (
                    handle_new_board.run_if(on_message::<NewBoardRequest>),
                    layout::fit_board_layout,
                    render::sync_cell_visuals,
                )
                    .chain()
                    .before(PointerSet::Intercept),
            )
            .add_systems(
                Update,
                (input::handle_board_click, input::handle_cell_typing)
                    .chain()
                    .in_set(PointerSet::Board),
            )
            .add_systems(
                Update,
                (render::draw_board_grid, input::draw_cell_cursor).after(PointerSet::Board),
            );
    }
}
