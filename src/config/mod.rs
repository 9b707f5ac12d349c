use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::board::PuzzleKind;
use crate::constants::{DEFAULT_BOARD_HEIGHT, DEFAULT_BOARD_WIDTH, MAX_BOARD_DIM};

/// System set for config loading (other plugins can run after this)
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct ConfigLoaded;

/// Application configuration persisted to disk
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfigData {
    /// Columns of a new board
    pub board_width: usize,

    /// Rows of a new board
    pub board_height: usize,

    /// Puzzle kind of a new board
    pub puzzle_kind: PuzzleKind,

    /// Paste preview label size as a fraction of the cell size
    pub overlay_label_scale: f32,

    /// Smallest paste preview label size in points
    pub min_label_size: f32,
}

impl Default for AppConfigData {
    fn default() -> Self {
        Self {
            board_width: DEFAULT_BOARD_WIDTH,
            board_height: DEFAULT_BOARD_HEIGHT,
            puzzle_kind: PuzzleKind::default(),
            overlay_label_scale: 0.6,
            min_label_size: 10.0,
        }
    }
}

impl AppConfigData {
    /// Clamp hand-edited values into the ranges the editor supports
    pub fn sanitized(mut self) -> Self {
        self.board_width = self.board_width.clamp(1, MAX_BOARD_DIM);
        self.board_height = self.board_height.clamp(1, MAX_BOARD_DIM);
        if !self.overlay_label_scale.is_finite() {
            self.overlay_label_scale = 0.6;
        }
        self.overlay_label_scale = self.overlay_label_scale.clamp(0.1, 1.0);
        if !self.min_label_size.is_finite() {
            self.min_label_size = 10.0;
        }
        self.min_label_size = self.min_label_size.clamp(1.0, 72.0);
        self
    }
}

/// Runtime configuration resource
#[derive(Resource)]
pub struct AppConfig {
    /// The persisted configuration data
    pub data: AppConfigData,
    /// Path to the config file
    pub config_path: PathBuf,
    /// Whether config needs to be saved (dirty flag)
    pub dirty: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data: AppConfigData::default(),
            config_path: crate::paths::config_file(),
            dirty: false,
        }
    }
}

/// Resource to notify user when config was reset to defaults
#[derive(Resource, Default)]
pub struct ConfigResetNotification {
    /// Whether to show the notification dialog
    pub show: bool,
    /// The reason for the reset (parse error, read error, etc.)
    pub reason: Option<String>,
}

/// Message to trigger config save
#[derive(Message)]
pub struct SaveConfigRequest;

/// Message to remember the size and kind of the last created board
#[derive(Message)]
pub struct UpdateBoardDefaultsRequest {
    pub width: usize,
    pub height: usize,
    pub kind: PuzzleKind,
}

/// Result of loading config from disk
struct LoadConfigResult {
    data: AppConfigData,
    /// Error message if config was reset to defaults due to an error
    reset_reason: Option<String>,
}

/// Load configuration from `path`, falling back to defaults on any error
fn load_config(path: &Path) -> LoadConfigResult {
    if !path.exists() {
        info!("No config file found, using defaults");
        return LoadConfigResult {
            data: AppConfigData::default(),
            reset_reason: None,
        };
    }

    match std::fs::read_to_string(path) {
        Ok(json) => match serde_json::from_str::<AppConfigData>(&json) {
            Ok(data) => {
                info!("Loaded config from {:?}", path);
                LoadConfigResult {
                    data: data.sanitized(),
                    reset_reason: None,
                }
            }
            Err(e) => {
                warn!("Failed to parse config file: {}", e);
                LoadConfigResult {
                    data: AppConfigData::default(),
                    reset_reason: Some(format!("Configuration file was corrupted: {}", e)),
                }
            }
        },
        Err(e) => {
            warn!("Failed to read config file: {}", e);
            LoadConfigResult {
                data: AppConfigData::default(),
                reset_reason: Some(format!("Could not read configuration file: {}", e)),
            }
        }
    }
}

/// Save configuration to disk
fn save_config(config: &AppConfig) {
    match serde_json::to_string_pretty(&config.data) {
        Ok(json) => {
            if let Err(e) = std::fs::write(&config.config_path, json) {
                error!("Failed to save config: {}", e);
            } else {
                info!("Config saved to {:?}", config.config_path);
            }
        }
        Err(e) => {
            error!("Failed to serialize config: {}", e);
        }
    }
}

/// Startup system to load config from disk into the existing resource
fn load_config_system(
    mut config: ResMut<AppConfig>,
    mut reset_notification: ResMut<ConfigResetNotification>,
) {
    let result = load_config(&config.config_path);
    config.data = result.data;
    config.dirty = false;

    // Set notification if config was reset due to an error
    if let Some(reason) = result.reset_reason {
        reset_notification.show = true;
        reset_notification.reason = Some(reason);
    }
}

/// System to save config when requested
fn save_config_system(
    mut events: MessageReader<SaveConfigRequest>,
    mut config: ResMut<AppConfig>,
) {
    for _ in events.read() {
        if config.dirty {
            save_config(&config);
            config.dirty = false;
        }
    }
}

/// System to remember the last board size and kind
fn update_board_defaults_system(
    mut events: MessageReader<UpdateBoardDefaultsRequest>,
    mut config: ResMut<AppConfig>,
    mut save_events: MessageWriter<SaveConfigRequest>,
) {
    for event in events.read() {
        if config.data.board_width == event.width
            && config.data.board_height == event.height
            && config.data.puzzle_kind == event.kind
        {
            continue;
        }
        config.data.board_width = event.width;
        config.data.board_height = event.height;
        config.data.puzzle_kind = event.kind;
        config.dirty = true;
        save_events.write(SaveConfigRequest);
    }
}

pub struct ConfigPlugin;

impl Plugin for ConfigPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<AppConfig>()
            .init_resource::<ConfigResetNotification>()
            .add_message::<SaveConfigRequest>()
            .add_message::<UpdateBoardDefaultsRequest>()
            .add_systems(Startup, load_config_system.in_set(ConfigLoaded))
            .add_systems(
                Update,
                (
                    update_board_defaults_system.run_if(on_message::<UpdateBoardDefaultsRequest>),
                    save_config_system.run_if(on_message::<SaveConfigRequest>),
                )
                    .chain(),
            );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_config_data_default() {
        let data = AppConfigData::default();
        assert_eq!(data.board_width, DEFAULT_BOARD_WIDTH);
        assert_eq!(data.board_height, DEFAULT_BOARD_HEIGHT);
        assert_eq!(data.puzzle_kind, PuzzleKind::Numbers);
    }

    #[test]
    fn test_app_config_data_serialization() {
        let data = AppConfigData {
            board_width: 7,
            board_height: 12,
            puzzle_kind: PuzzleKind::LightUp,
            overlay_label_scale: 0.5,
            min_label_size: 12.0,
        };

        let json = serde_json::to_string(&data).unwrap();
        let parsed: AppConfigData = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed, data);
        assert!(json.contains("\"light_up\""));
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let parsed: AppConfigData = serde_json::from_str(r#"{ "board_width": 4 }"#).unwrap();
        assert_eq!(parsed.board_width, 4);
        assert_eq!(parsed.board_height, DEFAULT_BOARD_HEIGHT);
        assert_eq!(parsed.overlay_label_scale, 0.6);
    }

    #[test]
    fn test_sanitized_clamps_out_of_range_values() {
        let data = AppConfigData {
            board_width: 0,
            board_height: 500,
            overlay_label_scale: f32::NAN,
            min_label_size: -3.0,
            ..AppConfigData::default()
        }
        .sanitized();

        assert_eq!(data.board_width, 1);
        assert_eq!(data.board_height, MAX_BOARD_DIM);
        assert_eq!(data.overlay_label_scale, 0.6);
        assert_eq!(data.min_label_size, 1.0);
    }

    #[test]
    fn test_load_missing_file_uses_defaults_without_notice() {
        let result = load_config(Path::new("definitely/not/here/config.json"));
        assert_eq!(result.data, AppConfigData::default());
        assert!(result.reset_reason.is_none());
    }

    #[test]
    fn test_config_reset_notification_default() {
        let notification = ConfigResetNotification::default();
        assert!(!notification.show);
        assert!(notification.reason.is_none());
    }
}
