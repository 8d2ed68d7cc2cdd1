//! Window visuals for the showcase.

use eframe::egui::{self, Color32, Rounding, Stroke};

use crate::settings::ThemeMode;

/// Accent for selected icons and links, the blue of the Wike app icon.
const ACCENT: Color32 = Color32::from_rgb(0x35, 0x84, 0xe4);

/// Base egui visuals for `theme` with the showcase accent applied.
pub fn visuals_for(theme: ThemeMode) -> egui::Visuals {
    let mut visuals = match theme {
        ThemeMode::Light => egui::Visuals::light(),
        ThemeMode::Dark => egui::Visuals::dark(),
    };
    visuals.selection.bg_fill = ACCENT;
    visuals.selection.stroke = Stroke::new(1.0, Color32::WHITE);
    visuals.hyperlink_color = ACCENT;
    visuals.window_rounding = Rounding::same(8.0);
    visuals
}

pub fn apply_visuals(ctx: &egui::Context, theme: ThemeMode) {
    log::debug!("window theme: {}", theme.label());
    ctx.set_visuals(visuals_for(theme));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modes_map_to_matching_base_visuals() {
        assert!(visuals_for(ThemeMode::Dark).dark_mode);
        assert!(!visuals_for(ThemeMode::Light).dark_mode);
    }

    #[test]
    fn accent_is_shared_by_both_modes() {
        for mode in ThemeMode::ALL {
            let visuals = visuals_for(mode);
            assert_eq!(visuals.selection.bg_fill, ACCENT);
            assert_eq!(visuals.hyperlink_color, ACCENT);
        }
    }
}
