//! Settings persistence
//!
//! Saves and loads [`VariantSettings`] to/from a JSON file so a variant's
//! board shape and castling distances can be picked without recompiling.
//!
//! # Error Handling
//!
//! - [`try_load_settings`] returns the I/O or parse error
//! - [`load_settings`] logs it and falls back to defaults
//! - [`save_settings`] creates missing parent directories

use crate::core::error::SettingsResult;
use crate::game::config::ControllerConfig;
use crate::game::resources::CastlingConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::{info, warn};

/// Serializable subset of [`ControllerConfig`]
///
/// Hooks can't be stored; `check_safety` picks between
/// [`ControllerConfig::standard`] and [`ControllerConfig::base`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VariantSettings {
    pub name: String,
    pub slug: String,
    pub rows: usize,
    pub columns: usize,
    pub king_side_distance: usize,
    pub queen_side_distance: usize,
    /// Remove moves that leave the mover's own king attacked
    pub check_safety: bool,
}

impl Default for VariantSettings {
    fn default() -> Self {
        let castling = CastlingConfig::default();
        VariantSettings {
            name: "Chess".to_string(),
            slug: "chess".to_string(),
            rows: 8,
            columns: 8,
            king_side_distance: castling.king_side_distance,
            queen_side_distance: castling.queen_side_distance,
            check_safety: true,
        }
    }
}

impl VariantSettings {
    pub fn into_config(self) -> ControllerConfig {
        let config = if self.check_safety {
            ControllerConfig::standard(self.name, self.slug)
        } else {
            ControllerConfig::base(self.name, self.slug)
        };
        config
            .with_dimensions(self.rows, self.columns)
            .with_castling(CastlingConfig {
                king_side_distance: self.king_side_distance,
                queen_side_distance: self.queen_side_distance,
            })
    }
}

/// Read settings from `path`
pub fn try_load_settings(path: &Path) -> SettingsResult<VariantSettings> {
    let contents = fs::read_to_string(path)?;
    let settings = serde_json::from_str(&contents)?;
    Ok(settings)
}

/// Read settings from `path`, using defaults when missing or invalid
pub fn load_settings(path: &Path) -> VariantSettings {
    if !path.exists() {
        info!("[SETTINGS] No settings file found at {:?}. Using defaults.", path);
        return VariantSettings::default();
    }
    match try_load_settings(path) {
        Ok(settings) => {
            info!("[SETTINGS] Loaded settings from {:?}", path);
            settings
        }
        Err(e) => {
            warn!("[SETTINGS] Failed to load settings file at {:?}: {}. Using defaults.", path, e);
            VariantSettings::default()
        }
    }
}

/// Write `settings` to `path` as pretty JSON
pub fn save_settings(path: &Path, settings: &VariantSettings) -> SettingsResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }
    let json = serde_json::to_string_pretty(settings)?;
    fs::write(path, json)?;
    info!("[SETTINGS] Saved settings to {:?}", path);
    Ok(())
}
