//! Selection tags carried by the showcase controls and the assets they map to.

/// Raw numeric value read from a theme or feature control.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct SelectableOption(pub i64);

impl From<i64> for SelectableOption {
    fn from(value: i64) -> Self {
        SelectableOption(value)
    }
}

/// Static content shown for one selection.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct AssetEntry {
    /// Image path relative to the media root.
    pub image: &'static str,
    /// Caption title, if the section has one.
    pub title: Option<&'static str>,
    /// Caption body, if the section has one.
    pub body: Option<&'static str>,
}

/// Theme screenshot variants.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ThemeChoice {
    /// Selected by value `1`.
    Dark,
    /// Every other value.
    Light,
}

impl ThemeChoice {
    /// Branch taken for any value other than `1`.
    pub const FALLBACK: ThemeChoice = ThemeChoice::Light;
    pub const ALL: [ThemeChoice; 2] = [ThemeChoice::Dark, ThemeChoice::Light];

    /// Canonical control value for this choice.
    pub fn value(self) -> SelectableOption {
        match self {
            ThemeChoice::Dark => SelectableOption(1),
            ThemeChoice::Light => SelectableOption(2),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ThemeChoice::Dark => "Dark",
            ThemeChoice::Light => "Light",
        }
    }

    pub fn asset(self) -> AssetEntry {
        match self {
            ThemeChoice::Dark => THEME_DARK,
            ThemeChoice::Light => THEME_LIGHT,
        }
    }
}

impl From<SelectableOption> for ThemeChoice {
    fn from(option: SelectableOption) -> Self {
        match option.0 {
            1 => ThemeChoice::Dark,
            _ => ThemeChoice::FALLBACK,
        }
    }
}

/// Feature screenshots with their captions.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FeatureChoice {
    /// Selected by value `1`.
    Bookmarks,
    /// Selected by value `2`.
    History,
    /// Value `3` and every unrecognized value.
    TableOfContents,
}

impl FeatureChoice {
    /// Branch taken for any value other than `1` or `2`.
    pub const FALLBACK: FeatureChoice = FeatureChoice::TableOfContents;
    pub const ALL: [FeatureChoice; 3] = [
        FeatureChoice::Bookmarks,
        FeatureChoice::History,
        FeatureChoice::TableOfContents,
    ];

    /// Canonical control value for this choice.
    pub fn value(self) -> SelectableOption {
        match self {
            FeatureChoice::Bookmarks => SelectableOption(1),
            FeatureChoice::History => SelectableOption(2),
            FeatureChoice::TableOfContents => SelectableOption(3),
        }
    }

    /// Next feature in tour order, wrapping at the end.
    pub fn next(self) -> FeatureChoice {
        match self {
            FeatureChoice::Bookmarks => FeatureChoice::History,
            FeatureChoice::History => FeatureChoice::TableOfContents,
            FeatureChoice::TableOfContents => FeatureChoice::Bookmarks,
        }
    }

    pub fn asset(self) -> AssetEntry {
        match self {
            FeatureChoice::Bookmarks => FEATURE_BOOKMARKS,
            FeatureChoice::History => FEATURE_HISTORY,
            FeatureChoice::TableOfContents => FEATURE_TOC,
        }
    }
}

impl From<SelectableOption> for FeatureChoice {
    fn from(option: SelectableOption) -> Self {
        match option.0 {
            1 => FeatureChoice::Bookmarks,
            2 => FeatureChoice::History,
            // A new feature must get its own arm here or it lands on the fallback.
            _ => FeatureChoice::FALLBACK,
        }
    }
}

pub const THEME_DARK: AssetEntry = AssetEntry {
    image: "media/wike-dark.png",
    title: None,
    body: None,
};

pub const THEME_LIGHT: AssetEntry = AssetEntry {
    image: "media/wike-light.png",
    title: None,
    body: None,
};

pub const FEATURE_BOOKMARKS: AssetEntry = AssetEntry {
    image: "media/wike-bookmarks.png",
    title: Some("Bookmarks"),
    body: Some("Save the articles you want to keep to read later."),
};

pub const FEATURE_HISTORY: AssetEntry = AssetEntry {
    image: "media/wike-historic.png",
    title: Some("Recent Articles"),
    body: Some("Use the history to access the last visited articles."),
};

pub const FEATURE_TOC: AssetEntry = AssetEntry {
    image: "media/wike-toc.png",
    title: Some("Table of Contents"),
    body: Some("Quickly scroll through the various sections of the article."),
};

/// Every image the showcase can reference.
pub const ALL_ASSETS: [&str; 5] = [
    THEME_DARK.image,
    THEME_LIGHT.image,
    FEATURE_BOOKMARKS.image,
    FEATURE_HISTORY.image,
    FEATURE_TOC.image,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_value_one_is_the_only_dark_value() {
        assert_eq!(ThemeChoice::from(SelectableOption(1)), ThemeChoice::Dark);
        for value in [2, 0, -1, 999, i64::MAX] {
            assert_eq!(ThemeChoice::from(SelectableOption(value)), ThemeChoice::Light);
        }
    }

    #[test]
    fn feature_unknown_values_fall_back_to_toc() {
        assert_eq!(FeatureChoice::from(SelectableOption(1)), FeatureChoice::Bookmarks);
        assert_eq!(FeatureChoice::from(SelectableOption(2)), FeatureChoice::History);
        for value in [0, 3, 4, -1, i64::MIN] {
            assert_eq!(
                FeatureChoice::from(SelectableOption(value)),
                FeatureChoice::TableOfContents
            );
        }
    }

    #[test]
    fn canonical_values_map_back_to_their_choice() {
        for choice in FeatureChoice::ALL {
            assert_eq!(FeatureChoice::from(choice.value()), choice);
        }
        for choice in ThemeChoice::ALL {
            assert_eq!(ThemeChoice::from(choice.value()), choice);
        }
    }

    #[test]
    fn tour_order_visits_every_feature() {
        let mut current = FeatureChoice::Bookmarks;
        let mut seen = Vec::new();
        for _ in 0..FeatureChoice::ALL.len() {
            seen.push(current);
            current = current.next();
        }
        assert_eq!(seen, FeatureChoice::ALL);
        assert_eq!(current, FeatureChoice::Bookmarks);
    }

    #[test]
    fn feature_assets_carry_captions_and_theme_assets_do_not() {
        for choice in FeatureChoice::ALL {
            let asset = choice.asset();
            assert!(asset.title.is_some());
            assert!(asset.body.is_some());
        }
        for choice in ThemeChoice::ALL {
            assert_eq!(choice.asset().title, None);
        }
        assert!(ALL_ASSETS.iter().all(|path| path.starts_with("media/")));
    }
}
