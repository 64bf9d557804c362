//! Game settings
//!
//! Read from a JSON file on native builds and from LocalStorage on the web.
//! Missing fields fall back to their defaults.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::consts::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::sim::{BrickLayout, LayoutError};

/// Errors raised while loading or validating settings
#[derive(Debug)]
pub enum SettingsError {
    /// Settings file exists but couldn't be read
    Io(std::io::Error),
    /// Settings JSON is malformed
    Parse(serde_json::Error),
    /// Settings parsed but make no sense
    Invalid(String),
    /// Brick wall can't be played
    Layout(LayoutError),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::Io(e) => write!(f, "failed to read settings: {}", e),
            SettingsError::Parse(e) => write!(f, "failed to parse settings: {}", e),
            SettingsError::Invalid(msg) => write!(f, "invalid settings: {}", msg),
            SettingsError::Layout(e) => write!(f, "invalid settings: {}", e),
        }
    }
}

impl std::error::Error for SettingsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SettingsError::Io(e) => Some(e),
            SettingsError::Parse(e) => Some(e),
            SettingsError::Layout(e) => Some(e),
            SettingsError::Invalid(_) => None,
        }
    }
}

impl From<std::io::Error> for SettingsError {
    fn from(e: std::io::Error) -> Self {
        SettingsError::Io(e)
    }
}

impl From<LayoutError> for SettingsError {
    fn from(e: LayoutError) -> Self {
        SettingsError::Layout(e)
    }
}

impl From<serde_json::Error> for SettingsError {
    fn from(e: serde_json::Error) -> Self {
        SettingsError::Parse(e)
    }
}

/// Game settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Integer scale from the logical screen to the window
    pub window_scale: u32,
    /// Window/document title
    pub title: String,
    /// Brick wall shape
    pub layout: BrickLayout,
    /// Fixed run seed (random per launch when unset)
    pub seed: Option<u64>,
    /// Ticks to simulate in the headless native run
    pub demo_ticks: u64,
    /// Serve in a seeded random horizontal direction instead of down-right
    pub random_serve: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window_scale: 2,
            title: "Brick Break".to_string(),
            layout: BrickLayout::default(),
            seed: None,
            demo_ticks: 60 * 60,
            random_serve: false,
        }
    }
}

impl Settings {
    /// Environment variable naming the settings file (native)
    pub const PATH_ENV: &'static str = "BRICK_BREAK_SETTINGS";
    /// Settings file used when `PATH_ENV` is unset (native)
    pub const DEFAULT_PATH: &'static str = "brick_break.json";
    /// LocalStorage key (used only in wasm32)
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "brick_break_settings";

    /// Parse and validate settings JSON
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.window_scale == 0 {
            return Err(SettingsError::Invalid(
                "window_scale must be at least 1".to_string(),
            ));
        }
        self.layout.validate()?;
        Ok(())
    }

    /// Window size in physical pixels
    pub fn window_size(&self) -> (u32, u32) {
        (
            SCREEN_WIDTH as u32 * self.window_scale,
            SCREEN_HEIGHT as u32 * self.window_scale,
        )
    }

    /// Load settings from a JSON file; a missing file yields defaults
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from(path: &std::path::Path) -> Result<Self, SettingsError> {
        match std::fs::read_to_string(path) {
            Ok(json) => {
                let settings = Self::from_json(&json)?;
                log::info!("Loaded settings from {}", path.display());
                Ok(settings)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::info!("No settings at {}, using defaults", path.display());
                Ok(Self::default())
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Load settings from `$BRICK_BREAK_SETTINGS` or `brick_break.json`
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Result<Self, SettingsError> {
        Self::load_from(&Self::path_from(std::env::var_os(Self::PATH_ENV)))
    }

    /// Settings file named by the environment, or the default path
    #[cfg(not(target_arch = "wasm32"))]
    fn path_from(var: Option<std::ffi::OsString>) -> std::path::PathBuf {
        match var {
            Some(path) if !path.is_empty() => path.into(),
            _ => Self::DEFAULT_PATH.into(),
        }
    }

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Result<Self, SettingsError> {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                let settings = Self::from_json(&json)?;
                log::info!("Loaded settings from LocalStorage");
                return Ok(settings);
            }
        }

        log::info!("Using default settings");
        Ok(Self::default())
    }

    /// Save settings to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = serde_json::to_string(self) {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("Settings saved");
            }
        }
    }
}
