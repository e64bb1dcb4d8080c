//! Game configuration resource.
//!
//! Settings come from an optional INI file. Missing files or keys keep the
//! defaults below.
//!
//! # Configuration File Format
//!
//! ```ini
//! [render]
//! width = 640
//! height = 320
//!
//! [window]
//! width = 1280
//! height = 640
//! target_fps = 60
//!
//! [assets]
//! base_sheet = ./assets/horse-base.png
//! palette = ./assets/colour-pallette.png
//! background = ./assets/bg-mock.png
//! stable = ./assets/stable.png
//! frame_width = 60
//! frame_height = 33
//! ; catalog = ./assets/catalog.json
//!
//! [palette]
//! rows = 3
//! columns = 11
//!
//! [animation]
//! run_fps = 12
//!
//! [spawner]
//! interval = 1.0
//! cap = 8
//! speed = 40
//!
//! [breeder]
//! name = Breeder
//! level = 1
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::info;
use std::path::PathBuf;

use crate::palette::PaletteLayout;
use crate::palette::remap::DEFAULT_RUN_FPS;
use crate::resources::spawner::{DEFAULT_SPAWN_CAP, DEFAULT_SPAWN_INTERVAL, DEFAULT_SPAWN_SPEED};

const DEFAULT_RENDER_WIDTH: u32 = 640;
const DEFAULT_RENDER_HEIGHT: u32 = 320;
const DEFAULT_WINDOW_WIDTH: u32 = 1280;
const DEFAULT_WINDOW_HEIGHT: u32 = 640;
const DEFAULT_TARGET_FPS: u32 = 60;
const DEFAULT_CONFIG_PATH: &str = "./config.ini";

const DEFAULT_BASE_SHEET: &str = "./assets/horse-base.png";
const DEFAULT_PALETTE: &str = "./assets/colour-pallette.png";
const DEFAULT_BACKGROUND: &str = "./assets/bg-mock.png";
const DEFAULT_STABLE: &str = "./assets/stable.png";
const DEFAULT_FRAME_WIDTH: u32 = 60;
const DEFAULT_FRAME_HEIGHT: u32 = 33;

/// File locations and sheet geometry.
#[derive(Debug, Clone, PartialEq)]
pub struct AssetPaths {
    pub base_sheet: PathBuf,
    pub palette: PathBuf,
    pub background: PathBuf,
    pub stable: PathBuf,
    /// Optional JSON list of horse types replacing the built-in catalog.
    pub catalog: Option<PathBuf>,
    pub frame_width: u32,
    pub frame_height: u32,
}

impl Default for AssetPaths {
    fn default() -> Self {
        Self {
            base_sheet: PathBuf::from(DEFAULT_BASE_SHEET),
            palette: PathBuf::from(DEFAULT_PALETTE),
            background: PathBuf::from(DEFAULT_BACKGROUND),
            stable: PathBuf::from(DEFAULT_STABLE),
            catalog: None,
            frame_width: DEFAULT_FRAME_WIDTH,
            frame_height: DEFAULT_FRAME_HEIGHT,
        }
    }
}

#[derive(Resource, Debug, Clone)]
pub struct GameConfig {
    /// Internal render width in pixels.
    pub render_width: u32,
    /// Internal render height in pixels.
    pub render_height: u32,
    pub window_width: u32,
    pub window_height: u32,
    pub target_fps: u32,
    pub assets: AssetPaths,
    pub palette: PaletteLayout,
    pub run_fps: f32,
    pub spawn_interval: f32,
    pub spawn_cap: usize,
    pub spawn_speed: f32,
    pub breeder_name: String,
    pub breeder_level: u32,
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
            render_width: DEFAULT_RENDER_WIDTH,
            render_height: DEFAULT_RENDER_HEIGHT,
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            target_fps: DEFAULT_TARGET_FPS,
            assets: AssetPaths::default(),
            palette: PaletteLayout::default(),
            run_fps: DEFAULT_RUN_FPS,
            spawn_interval: DEFAULT_SPAWN_INTERVAL,
            spawn_cap: DEFAULT_SPAWN_CAP,
            spawn_speed: DEFAULT_SPAWN_SPEED,
            breeder_name: "Breeder".to_string(),
            breeder_level: 1,
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file at `config_path`.
    ///
    /// Missing values retain their current values.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let text = std::fs::read_to_string(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;
        self.load_from_str(&text)
    }

    /// Load configuration from INI text.
    pub fn load_from_str(&mut self, text: &str) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .read(text.to_string())
            .map_err(|e| format!("Failed to parse config: {}", e))?;
        self.apply(&config);
        Ok(())
    }

    fn apply(&mut self, config: &Ini) {
        let uint = |section: &str, key: &str| config.getuint(section, key).ok().flatten();
        let float = |section: &str, key: &str| config.getfloat(section, key).ok().flatten();

        // [render]
        if let Some(width) = uint("render", "width") {
            self.render_width = width as u32;
        }
        if let Some(height) = uint("render", "height") {
            self.render_height = height as u32;
        }

        // [window]
        if let Some(width) = uint("window", "width") {
            self.window_width = width as u32;
        }
        if let Some(height) = uint("window", "height") {
            self.window_height = height as u32;
        }
        if let Some(fps) = uint("window", "target_fps") {
            self.target_fps = fps as u32;
        }

        // [assets]
        if let Some(path) = config.get("assets", "base_sheet") {
            self.assets.base_sheet = PathBuf::from(path);
        }
        if let Some(path) = config.get("assets", "palette") {
            self.assets.palette = PathBuf::from(path);
        }
        if let Some(path) = config.get("assets", "background") {
            self.assets.background = PathBuf::from(path);
        }
        if let Some(path) = config.get("assets", "stable") {
            self.assets.stable = PathBuf::from(path);
        }
        if let Some(path) = config.get("assets", "catalog") {
            self.assets.catalog = Some(PathBuf::from(path));
        }
        if let Some(w) = uint("assets", "frame_width") {
            self.assets.frame_width = w as u32;
        }
        if let Some(h) = uint("assets", "frame_height") {
            self.assets.frame_height = h as u32;
        }

        // [palette]
        if let Some(rows) = uint("palette", "rows") {
            self.palette.rows = rows as u32;
        }
        if let Some(columns) = uint("palette", "columns") {
            self.palette.columns = columns as u32;
        }

        // [animation]
        if let Some(fps) = float("animation", "run_fps") {
            self.run_fps = fps as f32;
        }

        // [spawner]
        if let Some(interval) = float("spawner", "interval") {
            self.spawn_interval = interval as f32;
        }
        if let Some(cap) = uint("spawner", "cap") {
            self.spawn_cap = cap as usize;
        }
        if let Some(speed) = float("spawner", "speed") {
            self.spawn_speed = speed as f32;
        }

        // [breeder]
        if let Some(name) = config.get("breeder", "name") {
            self.breeder_name = name;
        }
        if let Some(level) = uint("breeder", "level") {
            self.breeder_level = (level as u32).max(1);
        }

        info!(
            "Loaded config: {}x{} render, {}x{} window, fps={}, palette {}x{}, run_fps={}",
            self.render_width,
            self.render_height,
            self.window_width,
            self.window_height,
            self.target_fps,
            self.palette.rows,
            self.palette.columns,
            self.run_fps
        );
    }

    pub fn window_size(&self) -> (u32, u32) {
        (self.window_width, self.window_height)
    }

    pub fn render_size(&self) -> (u32, u32) {
        (self.render_width, self.render_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let c = GameConfig::new();
        assert_eq!(c.render_size(), (640, 320));
        assert_eq!(c.window_size(), (1280, 640));
        assert_eq!(c.palette, PaletteLayout { rows: 3, columns: 11 });
        assert_eq!(c.run_fps, 12.0);
        assert_eq!(c.spawn_cap, 8);
        assert_eq!(c.assets.frame_width, 60);
        assert_eq!(c.assets.frame_height, 33);
        assert!(c.assets.catalog.is_none());
    }

    #[test]
    fn test_load_from_str_partial() {
        let mut c = GameConfig::new();
        c.load_from_str(
            "[palette]\ncolumns = 5\n[spawner]\ninterval = 0.5\n[assets]\nstable = /tmp/s.png\n",
        )
        .unwrap();
        assert_eq!(c.palette.columns, 5);
        assert_eq!(c.palette.rows, 3);
        assert_eq!(c.spawn_interval, 0.5);
        assert_eq!(c.assets.stable, PathBuf::from("/tmp/s.png"));
        assert_eq!(c.render_width, 640);
    }

    #[test]
    fn test_breeder_level_at_least_one() {
        let mut c = GameConfig::new();
        c.load_from_str("[breeder]\nname = Ann\nlevel = 0\n").unwrap();
        assert_eq!(c.breeder_name, "Ann");
        assert_eq!(c.breeder_level, 1);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.ini");
        std::fs::write(&path, "[render]\nwidth = 320\n[palette]\ncolumns = 4\n").unwrap();

        let mut loaded = GameConfig::with_path(&path);
        loaded.load_from_file().unwrap();
        assert_eq!(loaded.render_width, 320);
        assert_eq!(loaded.palette.columns, 4);
    }

    #[test]
    fn test_missing_file_is_error() {
        let mut c = GameConfig::with_path("/definitely/not/config.ini");
        assert!(c.load_from_file().is_err());
        assert_eq!(c.render_width, 640);
    }
}
