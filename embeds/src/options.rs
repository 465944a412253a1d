//! Option catalogs for the admin dropdowns and the localization seam.
//!
//! Closed value sets (sizes, themes) live here as enums with their machine
//! value. Display labels are looked up through a [`Localizer`] supplied by
//! the host; [`DefaultLocalizer`] answers with the built-in English text.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::SiteConfig;

/// Highest selectable number of tweets for a timeline.
pub const MAX_TWEETS: u32 = 20;

/// Localization collaborator.
///
/// `key` is a namespaced identifier such as `TwitterFollowButton.SIZE`;
/// `default` is the English text to fall back on.
pub trait Localizer {
    fn translate(&self, key: &str, default: &str) -> String;
}

/// Localizer that always answers with the default text.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultLocalizer;

impl Localizer for DefaultLocalizer {
    fn translate(&self, _key: &str, default: &str) -> String {
        default.to_string()
    }
}

/// Translates `key` and substitutes each `%s` in the result with the next of `args`.
///
/// Surplus placeholders are left as they are.
///
/// # Example
///
/// ```
/// use twitter_embeds::options::{translate_with, DefaultLocalizer};
///
/// let text = translate_with(&DefaultLocalizer, "TwitterFollowButton.FOLLOWUSERNAME", "Follow %s", &["jdoe"]);
/// assert_eq!(text, "Follow jdoe");
/// ```
#[must_use]
pub fn translate_with(localizer: &dyn Localizer, key: &str, default: &str, args: &[&str]) -> String {
    let template = localizer.translate(key, default);
    let mut pieces = template.split("%s");
    let mut out = pieces.next().unwrap_or_default().to_string();
    let mut args = args.iter();

    for piece in pieces {
        match args.next() {
            Some(arg) => out.push_str(arg),
            None => out.push_str("%s"),
        }
        out.push_str(piece);
    }

    out
}

/// Ordered `(key, label)` pairs offered by a dropdown.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OptionList(Vec<(String, String)>);

impl OptionList {
    #[must_use]
    pub fn new(options: Vec<(String, String)>) -> Self {
        Self(options)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.iter().any(|(k, _)| k == key)
    }

    /// Label for `key`, if offered.
    #[must_use]
    pub fn label(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, label)| label.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(k, _)| k.as_str())
    }
}

/// Button size shared by the follow and sharing buttons.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonSize {
    #[default]
    Default,
    Large,
}

impl ButtonSize {
    pub const ALL: [ButtonSize; 2] = [ButtonSize::Default, ButtonSize::Large];

    /// Machine value, as emitted in `data-size`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ButtonSize::Default => "default",
            ButtonSize::Large => "large",
        }
    }

    fn label_key(self) -> (&'static str, &'static str) {
        match self {
            ButtonSize::Default => ("DEFAULT", "Default"),
            ButtonSize::Large => ("LARGE", "Large"),
        }
    }

    /// Dropdown options, with labels looked up under `namespace`.
    #[must_use]
    pub fn options(localizer: &dyn Localizer, namespace: &str) -> OptionList {
        OptionList::new(
            Self::ALL
                .iter()
                .map(|size| {
                    let (key, default) = size.label_key();
                    (
                        size.as_str().to_string(),
                        localizer.translate(&format!("{namespace}.{key}"), default),
                    )
                })
                .collect(),
        )
    }
}

impl fmt::Display for ButtonSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Timeline color theme.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub const ALL: [Theme; 2] = [Theme::Light, Theme::Dark];

    /// Machine value, as emitted in `data-theme`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Dropdown options, with labels looked up under `namespace`.
    #[must_use]
    pub fn options(localizer: &dyn Localizer, namespace: &str) -> OptionList {
        OptionList::new(
            Self::ALL
                .iter()
                .map(|theme| {
                    let (key, default) = match theme {
                        Theme::Light => ("LIGHT", "Light"),
                        Theme::Dark => ("DARK", "Dark"),
                    };
                    (
                        theme.as_str().to_string(),
                        localizer.translate(&format!("{namespace}.{key}"), default),
                    )
                })
                .collect(),
        )
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tweet counts `1..=20`, each key doubling as its label.
#[must_use]
pub fn tweet_count_options() -> OptionList {
    OptionList::new(
        (1..=MAX_TWEETS)
            .map(|n| (n.to_string(), n.to_string()))
            .collect(),
    )
}

/// Languages the site supports, as configured site-wide.
#[must_use]
pub fn language_options(site: &SiteConfig) -> OptionList {
    OptionList::new(site.languages().to_vec())
}
