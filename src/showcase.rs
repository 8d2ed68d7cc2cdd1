//! Theme and feature selectors triggered by the showcase controls.

use std::time::Duration;

use log::debug;

use crate::display::{DisplaySurface, DisplayTarget, PageState};
use crate::selection::{FeatureChoice, SelectableOption, ThemeChoice};
use crate::tour::{TourEvent, TourWorker};

/// Swap the theme screenshot for the control value `selection`.
pub fn apply_theme(surface: &mut impl DisplaySurface, selection: SelectableOption) {
    show_theme(surface, ThemeChoice::from(selection));
}

/// Swap the feature screenshot and captions for the control value `selection`.
pub fn apply_feature(surface: &mut impl DisplaySurface, selection: SelectableOption) {
    show_feature(surface, FeatureChoice::from(selection));
}

pub fn show_theme(surface: &mut impl DisplaySurface, choice: ThemeChoice) {
    debug!("theme selector: {choice:?}");
    surface.set_image(DisplayTarget::ImageTheme, choice.asset().image);
}

pub fn show_feature(surface: &mut impl DisplaySurface, choice: FeatureChoice) {
    debug!("feature selector: {choice:?}");
    let asset = choice.asset();
    surface.set_image(DisplayTarget::ImageFeatures, asset.image);
    surface.set_text(DisplayTarget::TitleFeatures, asset.title.unwrap_or_default());
    surface.set_text(DisplayTarget::TextFeatures, asset.body.unwrap_or_default());
}

/// Displayed page plus the tour that feeds it selections.
#[derive(Debug)]
pub struct Showcase {
    page: PageState,
    current_theme: ThemeChoice,
    current_feature: FeatureChoice,
    tour: Option<TourWorker>,
    tour_interval: Duration,
}

impl Showcase {
    pub fn new(tour_interval: Duration) -> Self {
        Self {
            page: PageState::default(),
            current_theme: ThemeChoice::Dark,
            current_feature: FeatureChoice::FALLBACK,
            tour: None,
            tour_interval,
        }
    }

    pub fn page(&self) -> &PageState {
        &self.page
    }

    pub fn current_theme(&self) -> ThemeChoice {
        self.current_theme
    }

    pub fn current_feature(&self) -> FeatureChoice {
        self.current_feature
    }

    pub fn tour_interval(&self) -> Duration {
        self.tour_interval
    }

    pub fn is_touring(&self) -> bool {
        self.tour.is_some()
    }

    /// Theme icon clicked.
    pub fn select_theme(&mut self, selection: SelectableOption) {
        apply_theme(&mut self.page, selection);
        self.current_theme = ThemeChoice::from(selection);
    }

    /// Feature icon clicked; a running tour continues from the picked feature.
    pub fn select_feature(&mut self, selection: SelectableOption) {
        self.show_feature_value(selection);
        if self.tour.is_some() {
            self.start_tour();
        }
    }

    /// Apply selections emitted by the tour, in order.
    pub fn apply_tour_events(&mut self, events: impl IntoIterator<Item = TourEvent>) {
        for TourEvent::Select(selection) in events {
            self.show_feature_value(selection);
        }
    }

    /// Pull pending tour events and apply them. Returns how many were applied.
    pub fn drain_tour_events(&mut self) -> usize {
        let Some(tour) = &self.tour else {
            return 0;
        };
        let mut events = Vec::new();
        tour.drain_events(&mut events);
        let count = events.len();
        self.apply_tour_events(events);
        count
    }

    /// Start (or restart) the tour from the current feature.
    pub fn start_tour(&mut self) {
        self.stop_tour();
        self.tour = Some(TourWorker::start(self.current_feature, self.tour_interval));
    }

    /// Returns false when no tour was running.
    pub fn stop_tour(&mut self) -> bool {
        match self.tour.take() {
            Some(tour) => {
                tour.stop();
                true
            }
            None => false,
        }
    }

    pub fn next_tour_step(&self) {
        if let Some(tour) = &self.tour {
            tour.request_next();
        }
    }

    /// Change the tour step; a running tour picks it up immediately.
    pub fn set_tour_interval(&mut self, interval: Duration) {
        if interval == self.tour_interval {
            return;
        }
        self.tour_interval = interval;
        if self.tour.is_some() {
            self.start_tour();
        }
    }

    fn show_feature_value(&mut self, selection: SelectableOption) {
        apply_feature(&mut self.page, selection);
        self.current_feature = FeatureChoice::from(selection);
    }
}

impl Drop for Showcase {
    fn drop(&mut self) {
        self.stop_tour();
    }
}
