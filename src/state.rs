//! Application runtime state derived from persisted settings.

use std::path::PathBuf;

use crate::settings::{AppSettings, ThemeMode};

/// In-memory state edited by the UI and written back on change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    /// Directory holding the `media/` folder.
    pub media_dir: Option<PathBuf>,
    /// Window visuals.
    pub theme: ThemeMode,
    /// Tour step interval in seconds.
    pub tour_interval_secs: u64,
    /// Whether the tour starts with the window.
    pub tour_on_start: bool,
}

impl AppState {
    /// Build the runtime state from persisted settings.
    pub fn from_settings(settings: &AppSettings) -> Self {
        Self {
            media_dir: settings.media_dir.as_ref().map(PathBuf::from),
            theme: settings.theme,
            tour_interval_secs: settings.tour_interval_secs,
            tour_on_start: settings.tour_on_start,
        }
    }

    /// Copy the runtime state back into settings for persistence.
    pub fn apply_to_settings(&self, settings: &mut AppSettings) {
        settings.media_dir = self
            .media_dir
            .as_ref()
            .map(|path| path.to_string_lossy().to_string());
        settings.theme = self.theme;
        settings.tour_interval_secs = self.tour_interval_secs;
        settings.tour_on_start = self.tour_on_start;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_round_trips_through_settings() {
        let settings = AppSettings {
            media_dir: Some("/data/site".to_string()),
            theme: ThemeMode::Light,
            tour_interval_secs: 9,
            tour_on_start: true,
        };
        let state = AppState::from_settings(&settings);
        assert_eq!(state.media_dir, Some(PathBuf::from("/data/site")));

        let mut written = AppSettings::default();
        state.apply_to_settings(&mut written);
        assert_eq!(written, settings);
    }
}
