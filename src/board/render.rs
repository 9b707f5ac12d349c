use bevy::prelude::*;

use crate::config::AppConfig;
use crate::editor::clipboard::{BLANK, BoardCoord, OverlayStyle, UNNUMBERED, label_size};
use crate::theme;

use super::layout::{BoardLayout, BoardResized, surface_rect_to_world, surface_to_world};
use super::number_board::NumberBoard;

/// Marker for the sprites and texts that show cell values
#[derive(Component)]
pub struct CellVisual;

/// Text shown in a cell, if any
pub fn cell_label(value: i32, highlight_filled: bool) -> Option<String> {
    match value {
        v if v >= 0 => Some(v.to_string()),
        // shaded blocks already mark unnumbered clues
        UNNUMBERED if !highlight_filled => Some("?".to_string()),
        _ => None,
    }
}

pub fn draw_board_grid(mut gizmos: Gizmos, board: Res<NumberBoard>, layout: Res<BoardLayout>) {
    let metrics = &layout.metrics;
    let cell = metrics.cell_size();
    let top_left = metrics.address_to_pixel(BoardCoord::new(0, 0));
    let bottom_right = top_left + cell * Vec2::new(board.cols() as f32, board.rows() as f32);

    for col in 1..board.cols() {
        let x = top_left.x + col as f32 * cell.x;
        gizmos.line_2d(
            surface_to_world(Vec2::new(x, top_left.y)),
            surface_to_world(Vec2::new(x, bottom_right.y)),
            theme::GRID_COLOR,
        );
    }

    for row in 1..board.rows() {
        let y = top_left.y + row as f32 * cell.y;
        gizmos.line_2d(
            surface_to_world(Vec2::new(top_left.x, y)),
            surface_to_world(Vec2::new(bottom_right.x, y)),
            theme::GRID_COLOR,
        );
    }

    let border = surface_rect_to_world(Rect::from_corners(top_left, bottom_right));
    gizmos.rect_2d(
        Isometry2d::from_translation(border.center()),
        border.size(),
        theme::BOARD_BORDER,
    );
}

/// Rebuild the cell sprites and numbers after the board asked for a redraw or was refitted
pub fn sync_cell_visuals(
    mut commands: Commands,
    mut board: ResMut<NumberBoard>,
    layout: Res<BoardLayout>,
    config: Res<AppConfig>,
    mut resized: MessageReader<BoardResized>,
    visuals: Query<Entity, With<CellVisual>>,
) {
    let was_resized = resized.read().count() > 0;
    let requested = board.bypass_change_detection().take_redraw_request();
    if !requested && !was_resized {
        return;
    }

    for entity in &visuals {
        commands.entity(entity).despawn();
    }

    let metrics = &layout.metrics;
    let cell = metrics.cell_size();
    let highlight_filled = board.kind().highlights_filled();
    let style = OverlayStyle {
        highlight_filled,
        label_scale: config.data.overlay_label_scale,
        min_label_size: config.data.min_label_size,
    };
    let font_size = label_size(cell, &style);
    let text_color = if highlight_filled {
        theme::BOARD_TEXT_ON_FILLED
    } else {
        theme::BOARD_TEXT
    };

    let mut spawned = 0;
    for (at, value) in board.cells() {
        if value == BLANK {
            continue;
        }
        let center = surface_to_world(metrics.address_to_pixel(at));

        if highlight_filled {
            commands.spawn((
                Sprite::from_color(theme::FILLED_CELL, cell - Vec2::ONE),
                Transform::from_translation(center.extend(0.0)),
                CellVisual,
            ));
        }

        if let Some(label) = cell_label(value, highlight_filled) {
            commands.spawn((
                Text2d::new(label),
                TextFont {
                    font_size,
                    ..default()
                },
                TextColor(text_color),
                Transform::from_translation(center.extend(1.0)),
                CellVisual,
            ));
        }
        spawned += 1;
    }
    trace!("Redrew {} filled cells", spawned);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_labels() {
        assert_eq!(cell_label(0, false), Some("0".to_string()));
        assert_eq!(cell_label(42, true), Some("42".to_string()));
        assert_eq!(cell_label(UNNUMBERED, false), Some("?".to_string()));
        assert_eq!(cell_label(UNNUMBERED, true), None);
        assert_eq!(cell_label(BLANK, false), None);
    }
}
