//! Display targets and the page state that backs them in the window.

use crate::selection::{FeatureChoice, ThemeChoice};

/// Addressable element updated by the selectors.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum DisplayTarget {
    ImageTheme,
    ImageFeatures,
    TitleFeatures,
    TextFeatures,
}

impl DisplayTarget {
    pub const ALL: [DisplayTarget; 4] = [
        DisplayTarget::ImageTheme,
        DisplayTarget::ImageFeatures,
        DisplayTarget::TitleFeatures,
        DisplayTarget::TextFeatures,
    ];

    pub fn is_image(self) -> bool {
        matches!(self, DisplayTarget::ImageTheme | DisplayTarget::ImageFeatures)
    }

    /// Stable external identifier.
    pub fn id(self) -> &'static str {
        match self {
            DisplayTarget::ImageTheme => "image-theme",
            DisplayTarget::ImageFeatures => "image-features",
            DisplayTarget::TitleFeatures => "title-features",
            DisplayTarget::TextFeatures => "text-features",
        }
    }
}

/// Mutable presentation surface the selectors write into.
pub trait DisplaySurface {
    /// Point an image target at a new asset path.
    fn set_image(&mut self, target: DisplayTarget, path: &str);
    /// Replace the text content of a text target.
    fn set_text(&mut self, target: DisplayTarget, text: &str);
}

/// What the showcase window currently displays.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageState {
    pub theme_image: String,
    pub feature_image: String,
    pub feature_title: String,
    pub feature_text: String,
}

impl Default for PageState {
    fn default() -> Self {
        // Matches the page markup before any icon is clicked.
        let feature = FeatureChoice::FALLBACK.asset();
        Self {
            theme_image: ThemeChoice::Dark.asset().image.to_string(),
            feature_image: feature.image.to_string(),
            feature_title: feature.title.unwrap_or_default().to_string(),
            feature_text: feature.body.unwrap_or_default().to_string(),
        }
    }
}

impl PageState {
    pub fn text(&self, target: DisplayTarget) -> Option<&str> {
        match target {
            DisplayTarget::TitleFeatures => Some(&self.feature_title),
            DisplayTarget::TextFeatures => Some(&self.feature_text),
            DisplayTarget::ImageTheme | DisplayTarget::ImageFeatures => None,
        }
    }

    pub fn image(&self, target: DisplayTarget) -> Option<&str> {
        match target {
            DisplayTarget::ImageTheme => Some(&self.theme_image),
            DisplayTarget::ImageFeatures => Some(&self.feature_image),
            DisplayTarget::TitleFeatures | DisplayTarget::TextFeatures => None,
        }
    }

    fn slot_mut(&mut self, target: DisplayTarget) -> &mut String {
        match target {
            DisplayTarget::ImageTheme => &mut self.theme_image,
            DisplayTarget::ImageFeatures => &mut self.feature_image,
            DisplayTarget::TitleFeatures => &mut self.feature_title,
            DisplayTarget::TextFeatures => &mut self.feature_text,
        }
    }
}

impl DisplaySurface for PageState {
    fn set_image(&mut self, target: DisplayTarget, path: &str) {
        if !target.is_image() {
            log::warn!("ignoring image write to text target {}", target.id());
            return;
        }
        log::debug!("{} <- {path}", target.id());
        let slot = self.slot_mut(target);
        slot.clear();
        slot.push_str(path);
    }

    fn set_text(&mut self, target: DisplayTarget, text: &str) {
        if target.is_image() {
            log::warn!("ignoring text write to image target {}", target.id());
            return;
        }
        let slot = self.slot_mut(target);
        slot.clear();
        slot.push_str(text);
    }
}
