//! Persistence model and configuration IO.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

/// File name used under the per-user config directory.
const SETTINGS_FILE: &str = "settings.json";

/// Bounds for the tour interval, in seconds.
pub const MIN_TOUR_INTERVAL_SECS: u64 = 1;
pub const MAX_TOUR_INTERVAL_SECS: u64 = 120;

/// Window visuals exposed in the UI.
#[derive(Copy, Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum ThemeMode {
    /// Light egui visuals.
    Light,
    /// Dark egui visuals (default).
    #[serde(other)]
    Dark,
}

impl Default for ThemeMode {
    fn default() -> Self {
        ThemeMode::Dark
    }
}

impl ThemeMode {
    pub const ALL: [ThemeMode; 2] = [ThemeMode::Light, ThemeMode::Dark];

    pub fn label(self) -> &'static str {
        match self {
            ThemeMode::Light => "Light",
            ThemeMode::Dark => "Dark",
        }
    }
}

/// Settings persisted to `settings.json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct AppSettings {
    /// Directory holding the `media/` folder; the working directory when unset.
    pub media_dir: Option<String>,
    /// Window visuals.
    pub theme: ThemeMode,
    /// Seconds between tour steps.
    pub tour_interval_secs: u64,
    /// Whether the tour starts with the window.
    pub tour_on_start: bool,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            media_dir: None,
            theme: ThemeMode::Dark,
            tour_interval_secs: 5,
            tour_on_start: false,
        }
    }
}

impl AppSettings {
    /// Clamp values a hand-edited file may have pushed out of range.
    pub fn normalized(mut self) -> Self {
        self.tour_interval_secs = self
            .tour_interval_secs
            .clamp(MIN_TOUR_INTERVAL_SECS, MAX_TOUR_INTERVAL_SECS);
        if self.media_dir.as_deref().is_some_and(|dir| dir.trim().is_empty()) {
            self.media_dir = None;
        }
        self
    }
}

/// Build the settings path and ensure the directory exists.
fn settings_path() -> Result<PathBuf> {
    let proj_dirs = ProjectDirs::from("dev", "wike_showcase", "wike_showcase")
        .ok_or_else(|| anyhow!("cannot determine config directory"))?;
    let config_dir = proj_dirs.config_dir();
    fs::create_dir_all(config_dir)?;
    Ok(config_dir.join(SETTINGS_FILE))
}

/// Load settings from disk, returning defaults when missing.
pub fn load() -> AppSettings {
    match settings_path() {
        Ok(path) => load_from(&path),
        Err(err) => {
            log::warn!("using default settings: {err:#}");
            AppSettings::default()
        }
    }
}

/// Load settings from `path`; unreadable or malformed files yield defaults.
pub fn load_from(path: &Path) -> AppSettings {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(_) => return AppSettings::default(),
    };
    match serde_json::from_str::<AppSettings>(&contents) {
        Ok(settings) => settings.normalized(),
        Err(err) => {
            log::warn!("ignoring malformed {}: {err}", path.display());
            AppSettings::default()
        }
    }
}

/// Persist settings to disk as pretty JSON.
pub fn save(settings: &AppSettings) -> Result<()> {
    let path = settings_path()?;
    save_to(&path, settings)
}

pub fn save_to(path: &Path, settings: &AppSettings) -> Result<()> {
    let contents = serde_json::to_string_pretty(settings)?;
    fs::write(path, contents).with_context(|| format!("failed to write {}", path.display()))?;
    log::debug!("saved settings to {}", path.display());
    Ok(())
}
