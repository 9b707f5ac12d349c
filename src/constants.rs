//! Centralized constants used across the application.
//!
//! This module contains magic numbers and configuration values that are used
//! in multiple places or would benefit from being named constants.

/// Default window width in pixels
pub const DEFAULT_WINDOW_WIDTH: f32 = 1280.0;

/// Default window height in pixels
pub const DEFAULT_WINDOW_HEIGHT: f32 = 900.0;

/// Board size used when no config exists
pub const DEFAULT_BOARD_WIDTH: usize = 10;
pub const DEFAULT_BOARD_HEIGHT: usize = 10;

/// Largest board dimension the editor accepts
pub const MAX_BOARD_DIM: usize = 50;

/// Largest number a cell can hold
pub const MAX_CELL_NUMBER: i32 = 999;

/// Space kept free around the board when fitting it to the window
pub const BOARD_MARGIN: f32 = 40.0;

/// Height reserved for the toolbar at the top of the window
pub const TOOLBAR_HEIGHT: f32 = 60.0;

/// Cell size limits in pixels when fitting the board to the window
pub const MIN_CELL_SIZE: f32 = 16.0;
pub const MAX_CELL_SIZE: f32 = 64.0;
