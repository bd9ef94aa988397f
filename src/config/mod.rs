//! Configuration module for the storefront
//!
//! Only user preferences are persisted. The view state (active tab, drawer)
//! is deliberately ephemeral and never written to disk.
//!
//! # App Data Location
//!
//! Application data is stored in the platform-appropriate location:
//! - **Linux**: `~/.local/share/dev.devadiga.grocery-storefront/`
//! - **macOS**: `~/Library/Application Support/dev.devadiga.grocery-storefront/`
//! - **Windows**: `%APPDATA%\dev.devadiga.grocery-storefront\`
//!
//! # Files
//!
//! - `app_state.json` - UI preferences
//!
//! # Example
//!
//! ```ignore
//! use grocery_storefront::config::AppState;
//!
//! let mut state = AppState::load_or_default();
//! state.ui_preferences.dark_mode = true;
//! state.save()?;
//! ```

use crate::error::{Result, ResultExt, StorefrontError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application identifier for data directories
pub const APP_ID: &str = "dev.devadiga.grocery-storefront";

/// App state filename
pub const APP_STATE_FILE: &str = "app_state.json";

/// Smallest accepted font scale
pub const MIN_FONT_SCALE: f32 = 0.5;

/// Largest accepted font scale
pub const MAX_FONT_SCALE: f32 = 2.0;

// ==================== App Data Directory ====================

/// Get the application data directory path
pub fn app_data_dir() -> Option<PathBuf> {
    dirs_next::data_dir().map(|p| p.join(APP_ID))
}

/// Ensure the app data directory exists
pub fn ensure_app_data_dir() -> Result<PathBuf> {
    let dir = app_data_dir().ok_or_else(|| {
        StorefrontError::Config("Could not determine app data directory".to_string())
    })?;

    if !dir.exists() {
        std::fs::create_dir_all(&dir).context("Failed to create app data directory")?;
    }

    Ok(dir)
}

/// Get the path to the app state file
pub fn app_state_path() -> Option<PathBuf> {
    app_data_dir().map(|p| p.join(APP_STATE_FILE))
}

// ==================== App State ====================

/// Persistent application state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppState {
    /// Version for future migration support
    #[serde(default = "default_app_state_version")]
    pub version: u32,

    /// UI preferences
    #[serde(default)]
    pub ui_preferences: UiPreferences,
}

fn default_app_state_version() -> u32 {
    1
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            version: 1,
            ui_preferences: UiPreferences::default(),
        }
    }
}

impl AppState {
    /// Load app state from the default location
    pub fn load() -> Result<Self> {
        let path = app_state_path().ok_or_else(|| {
            StorefrontError::Config("Could not determine app state path".to_string())
        })?;

        Self::load_from(&path)
    }

    /// Load app state from a specific file
    ///
    /// A missing file is not an error and yields the defaults.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            tracing::debug!("No app state at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read app state {:?}", path))?;

        let mut state: Self = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse app state {:?}", path))?;
        state.ui_preferences.sanitize();

        tracing::info!("Loaded app state from {:?}", path);
        Ok(state)
    }

    /// Load app state, returning defaults on any error
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_else(|e| {
            tracing::warn!("Failed to load app state, using defaults: {}", e);
            Self::default()
        })
    }

    /// Load app state from a specific file, returning defaults on any error
    pub fn load_or_default_from(path: impl AsRef<Path>) -> Self {
        Self::load_from(path).unwrap_or_else(|e| {
            tracing::warn!("Failed to load app state, using defaults: {}", e);
            Self::default()
        })
    }

    /// Save app state to the default location
    pub fn save(&self) -> Result<()> {
        let dir = ensure_app_data_dir()?;
        self.save_to(dir.join(APP_STATE_FILE))
    }

    /// Save app state to a specific file
    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();

        let content =
            serde_json::to_string_pretty(self).context("Failed to serialize app state")?;

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write app state {:?}", path))?;

        tracing::debug!("Saved app state to {:?}", path);
        Ok(())
    }
}

/// UI preferences that persist across launches
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiPreferences {
    /// Enable dark mode
    #[serde(default)]
    pub dark_mode: bool,

    /// Font scale factor
    #[serde(default = "default_font_scale")]
    pub font_scale: f32,

    /// Skip entrance animations
    #[serde(default)]
    pub reduce_motion: bool,

    /// Fetch catalog photos and the payment QR from the network
    #[serde(default = "default_true")]
    pub load_remote_images: bool,
}

fn default_true() -> bool {
    true
}

fn default_font_scale() -> f32 {
    1.0
}

impl Default for UiPreferences {
    fn default() -> Self {
        Self {
            dark_mode: false,
            font_scale: 1.0,
            reduce_motion: false,
            load_remote_images: true,
        }
    }
}

impl UiPreferences {
    /// Clamp values read from disk into their supported ranges
    pub fn sanitize(&mut self) {
        if !self.font_scale.is_finite() {
            self.font_scale = default_font_scale();
        }
        self.font_scale = self.font_scale.clamp(MIN_FONT_SCALE, MAX_FONT_SCALE);
    }
}
