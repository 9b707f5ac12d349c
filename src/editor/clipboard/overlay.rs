//! What the clipboard overlay should draw, in surface pixels.
//!
//! Building the frame is separate from drawing it so the overlay can be
//! rebuilt on resize without touching the controller.

use bevy::prelude::*;

use crate::theme;

use super::controller::{ClipboardMode, CopyPasteController};
use super::coords::{BoardMetrics, CellRect};
use super::host::BLANK;
use super::transform::CellBlock;

/// Presentation settings that come from the puzzle and user config
#[derive(Debug, Clone, Copy)]
pub struct OverlayStyle {
    /// Shade every filled cell, as puzzles with black clue cells do
    pub highlight_filled: bool,
    /// Label size as a fraction of the smaller cell side
    pub label_scale: f32,
    pub min_label_size: f32,
}

impl Default for OverlayStyle {
    fn default() -> Self {
        Self {
            highlight_filled: false,
            label_scale: 0.6,
            min_label_size: 10.0,
        }
    }
}

/// A translucent number drawn over a cell of the paste preview
#[derive(Debug, Clone, PartialEq)]
pub struct GhostLabel {
    pub center: Vec2,
    pub text: String,
    pub size: f32,
    pub color: Color,
}

/// One frame of overlay drawing
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayFrame {
    pub region: Rect,
    pub fill: Option<Color>,
    pub stroke: Color,
    /// Cell backgrounds shaded under the ghost labels
    pub cell_tints: Vec<Rect>,
    pub tint: Color,
    pub labels: Vec<GhostLabel>,
}

impl OverlayFrame {
    fn outline(region: Rect) -> Self {
        Self {
            region,
            fill: None,
            stroke: theme::CLIPBOARD_STROKE,
            cell_tints: Vec::new(),
            tint: theme::GHOST_FILLED_TINT,
            labels: Vec::new(),
        }
    }
}

impl CopyPasteController {
    /// The overlay for the current mode, or `None` when nothing should be shown
    pub fn overlay(&self, metrics: &BoardMetrics, style: &OverlayStyle) -> Option<OverlayFrame> {
        match self.mode() {
            ClipboardMode::Idle { stale } => {
                let region = metrics.cell_range_to_pixels(stale?);
                Some(OverlayFrame {
                    fill: Some(theme::SELECTION_FILL),
                    ..OverlayFrame::outline(region)
                })
            }
            ClipboardMode::Selecting { start } => {
                let start = start?;
                Some(OverlayFrame::outline(
                    metrics.cell_rect_to_pixels(start, start),
                ))
            }
            ClipboardMode::Pasting { anchor } => {
                let anchor = anchor?;
                let block = self.buffer().oriented()?;
                let rect = CellRect::from_anchor(anchor, block.width(), block.height());
                let mut frame = OverlayFrame {
                    fill: Some(theme::PASTE_PREVIEW_FILL),
                    ..OverlayFrame::outline(metrics.cell_range_to_pixels(rect))
                };
                add_ghost_cells(&mut frame, &block, rect, metrics, style);
                Some(frame)
            }
        }
    }
}

/// Label size for a cell of the given pixel size
pub fn label_size(cell: Vec2, style: &OverlayStyle) -> f32 {
    (cell.x.min(cell.y) * style.label_scale)
        .floor()
        .max(style.min_label_size)
}

fn add_ghost_cells(
    frame: &mut OverlayFrame,
    block: &CellBlock,
    rect: CellRect,
    metrics: &BoardMetrics,
    style: &OverlayStyle,
) {
    let size = label_size(metrics.cell_size(), style);
    let color = if style.highlight_filled {
        theme::GHOST_TEXT_ON_TINT
    } else {
        theme::GHOST_TEXT
    };

    for (dx, dy, value) in block.iter() {
        if value == BLANK {
            continue;
        }
        let cell = rect.min.offset_cells(dx, dy);
        if style.highlight_filled {
            frame.cell_tints.push(metrics.cell_rect_to_pixels(cell, cell));
        }
        // Negative non-blank values are unnumbered clues: shaded but unlabeled
        if value >= 0 {
            frame.labels.push(GhostLabel {
                center: metrics.address_to_pixel(cell),
                text: value.to_string(),
                size,
                color,
            });
        }
    }
}
