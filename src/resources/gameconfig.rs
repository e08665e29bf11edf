//! Game configuration resource.
//!
//! Manages game settings loaded from an INI configuration file. Provides
//! defaults for safe startup; the resource is built once in `main` and not
//! mutated afterwards, replacing any ambient global settings.
//!
//! # Configuration File Format
//!
//! ```ini
//! [window]
//! width = 800
//! height = 500
//! title = Fighter - Animations
//! target_fps = 60
//! position_x = 1
//! position_y = 1
//!
//! [animation]
//! interval_ms = 100
//! actions = idle,jump,punsh,lower_punsh,kick,lower_kick
//! fallback_action = idle
//!
//! [assets]
//! path = ./assets
//! background = background.png
//! fallback = fallback.png
//! ```

use bevy_ecs::prelude::Resource;
use configparser::ini::Ini;
use log::info;
use std::path::PathBuf;

/// Default safe values for startup
const DEFAULT_WINDOW_WIDTH: u32 = 800;
const DEFAULT_WINDOW_HEIGHT: u32 = 500;
const DEFAULT_TITLE: &str = "Fighter - Animations";
const DEFAULT_TARGET_FPS: u32 = 60;
const DEFAULT_ANIMATION_INTERVAL_MS: u64 = 100;
const DEFAULT_ASSETS_PATH: &str = "./assets";
const DEFAULT_BACKGROUND_FILE: &str = "background.png";
const DEFAULT_FALLBACK_FILE: &str = "fallback.png";
const DEFAULT_FALLBACK_ACTION: &str = "idle";
const DEFAULT_ACTIONS: [&str; 6] = [
    "idle",
    "jump",
    "punsh",
    "lower_punsh",
    "kick",
    "lower_kick",
];
const DEFAULT_CONFIG_PATH: &str = "./config.ini";

/// Game configuration resource.
///
/// Stores window settings, animation pacing, and asset locations.
#[derive(Resource, Debug, Clone)]
pub struct GameConfig {
    /// Window width in pixels.
    pub window_width: u32,
    /// Window height in pixels.
    pub window_height: u32,
    /// Window title string.
    pub title: String,
    /// Target frames per second for the render loop.
    pub target_fps: u32,
    /// Interval between animation frame advances, in milliseconds.
    pub animation_interval_ms: u64,
    /// Optional OS window position hint.
    pub window_position: Option<(i32, i32)>,
    /// Root directory of the asset tree.
    pub assets_path: PathBuf,
    /// Background image filename, relative to the images directory.
    pub background_file: String,
    /// Placeholder sprite filename shown before the first committed action.
    pub fallback_file: String,
    /// Action auto-queued when a one-shot animation completes.
    pub fallback_action: String,
    /// Actions to load animations for.
    pub actions: Vec<String>,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GameConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            title: DEFAULT_TITLE.to_string(),
            target_fps: DEFAULT_TARGET_FPS,
            animation_interval_ms: DEFAULT_ANIMATION_INTERVAL_MS,
            window_position: None,
            assets_path: PathBuf::from(DEFAULT_ASSETS_PATH),
            background_file: DEFAULT_BACKGROUND_FILE.to_string(),
            fallback_file: DEFAULT_FALLBACK_FILE.to_string(),
            fallback_action: DEFAULT_FALLBACK_ACTION.to_string(),
            actions: DEFAULT_ACTIONS.iter().map(|a| a.to_string()).collect(),
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values.
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;

        // [window] section
        if let Some(width) = config.getuint("window", "width").ok().flatten() {
            self.window_width = width as u32;
        }
        if let Some(height) = config.getuint("window", "height").ok().flatten() {
            self.window_height = height as u32;
        }
        if let Some(title) = config.get("window", "title") {
            self.title = title;
        }
        if let Some(fps) = config.getuint("window", "target_fps").ok().flatten() {
            self.target_fps = fps as u32;
        }
        let pos_x = config.getint("window", "position_x").ok().flatten();
        let pos_y = config.getint("window", "position_y").ok().flatten();
        if let (Some(x), Some(y)) = (pos_x, pos_y) {
            self.window_position = Some((x as i32, y as i32));
        }

        // [animation] section
        if let Some(interval) = config.getuint("animation", "interval_ms").ok().flatten() {
            self.animation_interval_ms = interval;
        }
        if let Some(actions) = config.get("animation", "actions") {
            self.actions = actions
                .split(',')
                .map(|a| a.trim().to_string())
                .filter(|a| !a.is_empty())
                .collect();
        }
        if let Some(fallback) = config.get("animation", "fallback_action") {
            self.fallback_action = fallback;
        }

        // [assets] section
        if let Some(path) = config.get("assets", "path") {
            self.assets_path = PathBuf::from(path);
        }
        if let Some(background) = config.get("assets", "background") {
            self.background_file = background;
        }
        if let Some(fallback) = config.get("assets", "fallback") {
            self.fallback_file = fallback;
        }

        info!(
            "Loaded config: {}x{} window, fps={}, interval={}ms, {} actions",
            self.window_width,
            self.window_height,
            self.target_fps,
            self.animation_interval_ms,
            self.actions.len()
        );

        Ok(())
    }

    /// Directory holding still images (background, fallback sprite).
    pub fn images_path(&self) -> PathBuf {
        self.assets_path.join("images")
    }

    /// Directory holding one subdirectory of numbered frames per action.
    pub fn animations_path(&self) -> PathBuf {
        self.images_path().join("animations")
    }

    /// Interval between animation frame advances, in seconds.
    pub fn animation_interval(&self) -> f32 {
        self.animation_interval_ms as f32 / 1000.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GameConfig::new();
        assert_eq!(config.window_width, 800);
        assert_eq!(config.window_height, 500);
        assert_eq!(config.target_fps, 60);
        assert_eq!(config.animation_interval_ms, 100);
        assert_eq!(config.title, "Fighter - Animations");
        assert_eq!(config.fallback_action, "idle");
        assert_eq!(config.actions.len(), 6);
        assert!(config.actions.iter().any(|a| a == "lower_punsh"));
        assert_eq!(config.window_position, None);
    }

    #[test]
    fn test_asset_paths() {
        let config = GameConfig::new();
        assert_eq!(config.images_path(), PathBuf::from("./assets/images"));
        assert_eq!(
            config.animations_path(),
            PathBuf::from("./assets/images/animations")
        );
    }

    #[test]
    fn test_animation_interval_in_seconds() {
        let config = GameConfig::new();
        assert!((config.animation_interval() - 0.1).abs() < f32::EPSILON);
    }

    #[test]
    fn test_load_from_missing_file_is_an_error() {
        let mut config = GameConfig::with_path("./does-not-exist.ini");
        assert!(config.load_from_file().is_err());
        // Defaults survive the failed load
        assert_eq!(config.window_width, 800);
    }
}
