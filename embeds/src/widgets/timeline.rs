//! Twitter timeline widget.
//!
//! Embeds the recent tweets of one account. Appearance is controlled through
//! `data-*` attributes; the display toggles are folded into a single
//! `data-chrome` value by [`compose_chrome`].

use serde::{Deserialize, Serialize};

use crate::attributes::Attributes;
use crate::config::SiteConfig;
use crate::extensions::Extensions;
use crate::forms::{FieldSection, FormField, FormLayout, RequiredFields, TAB_MAIN, TAB_OPTIONS, TAB_STYLE};
use crate::links::timeline_link;
use crate::options::{language_options, translate_with, tweet_count_options, Localizer, Theme};
use crate::sanitize::{sanitize_username, USERNAME_FIELD};
use crate::widget::{EmbedWidget, WidgetKind};

/// CSS class the widget script looks for.
pub const TIMELINE_CLASS: &str = "twitter-timeline";

/// Language preselected for new timelines.
pub const DEFAULT_LANGUAGE: &str = "en";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct TimelineWidget {
    pub username: String,
    pub theme: Theme,
    /// Pixels; 0 lets the widget size itself.
    pub width: u32,
    /// Pixels; 0 lets the widget size itself.
    pub height: u32,
    /// Language code; empty means automatic.
    pub language: String,
    /// 1 to 20, or 0 for automatic.
    pub number_of_tweets: u32,
    pub hide_header: bool,
    pub hide_footer: bool,
    pub hide_borders: bool,
    pub hide_scrollbar: bool,
    pub transparent: bool,
    pub disabled: bool,
}

impl Default for TimelineWidget {
    fn default() -> Self {
        Self {
            username: String::new(),
            theme: Theme::Light,
            width: 0,
            height: 0,
            language: DEFAULT_LANGUAGE.to_string(),
            number_of_tweets: 0,
            hide_header: false,
            hide_footer: false,
            hide_borders: false,
            hide_scrollbar: false,
            transparent: false,
            disabled: false,
        }
    }
}

/// Space-joined chrome tokens for the toggles that are set.
///
/// Token order is fixed (`noheader nofooter noborders noscrollbar
/// transparent`) so output is stable. Empty when no toggle is set.
///
/// # Example
///
/// ```
/// use twitter_embeds::widgets::{compose_chrome, TimelineWidget};
///
/// let timeline = TimelineWidget {
///     hide_header: true,
///     transparent: true,
///     ..TimelineWidget::new("jdoe")
/// };
/// assert_eq!(compose_chrome(&timeline), "noheader transparent");
/// ```
#[must_use]
pub fn compose_chrome(timeline: &TimelineWidget) -> String {
    [
        (timeline.hide_header, "noheader"),
        (timeline.hide_footer, "nofooter"),
        (timeline.hide_borders, "noborders"),
        (timeline.hide_scrollbar, "noscrollbar"),
        (timeline.transparent, "transparent"),
    ]
    .into_iter()
    .filter_map(|(set, token)| set.then_some(token))
    .collect::<Vec<_>>()
    .join(" ")
}

impl TimelineWidget {
    #[must_use]
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            ..Self::default()
        }
    }

    /// See [`compose_chrome`].
    #[must_use]
    pub fn chrome(&self) -> String {
        compose_chrome(self)
    }

    /// The `data-*` attributes. `data-theme` is always present; the rest only
    /// when set.
    #[must_use]
    pub fn link_data_attributes(&self, extensions: &Extensions) -> Attributes {
        let mut attrs = Attributes::new();
        attrs.insert("data-theme", self.theme.as_str());

        if self.width > 0 {
            attrs.insert("data-width", self.width.to_string());
        }

        if self.height > 0 {
            attrs.insert("data-height", self.height.to_string());
        }

        let chrome = self.chrome();
        if !chrome.is_empty() {
            attrs.insert("data-chrome", chrome);
        }

        if !self.language.is_empty() {
            attrs.insert("data-lang", self.language.as_str());
        }

        if self.number_of_tweets > 0 {
            attrs.insert("data-tweet-limit", self.number_of_tweets.to_string());
        }

        extensions.link_data_attributes(self.kind(), &mut attrs);
        attrs
    }
}

impl EmbedWidget for TimelineWidget {
    fn kind(&self) -> WidgetKind {
        WidgetKind::Timeline
    }

    fn link(&self) -> String {
        timeline_link(&self.username)
    }

    fn link_attributes(&self, extensions: &Extensions) -> Attributes {
        let mut attrs = Attributes::new();
        attrs.insert("class", TIMELINE_CLASS);
        attrs.insert("href", self.link());

        extensions.link_attributes(self.kind(), &mut attrs);

        attrs.merge(self.link_data_attributes(extensions));
        attrs
    }

    fn text(&self, localizer: &dyn Localizer) -> String {
        translate_with(
            localizer,
            "TwitterTimelineWidget.TWEETSBYUSERNAME",
            "Tweets by %s",
            &[self.username.as_str()],
        )
    }

    fn is_disabled(&self) -> bool {
        self.username.is_empty() || self.disabled
    }

    fn on_before_write(&mut self) {
        self.username = sanitize_username(&self.username);
    }

    fn cms_fields(&self, localizer: &dyn Localizer, site: &SiteConfig) -> FormLayout {
        let namespace = self.kind().namespace();
        let label = |key: &str, default: &str| localizer.translate(&format!("{namespace}.{key}"), default);
        let automatic = label("DROPDOWNAUTOMATIC", "Automatic");
        let widget = label("WIDGET", "Widget");

        FormLayout::new()
            .with(FieldSection::on_tab(
                TAB_MAIN,
                vec![FormField::text(USERNAME_FIELD, label("USERNAME", "Username"))],
            ))
            .with(FieldSection::titled(
                TAB_STYLE,
                "WidgetStyle",
                widget.clone(),
                vec![
                    FormField::dropdown(
                        "Theme",
                        label("THEME", "Theme"),
                        Theme::options(localizer, namespace),
                    ),
                    FormField::text("Width", label("WIDTHINPIXELS", "Width (in pixels)")),
                    FormField::text("Height", label("HEIGHTINPIXELS", "Height (in pixels)")),
                ],
            ))
            .with(FieldSection::titled(
                TAB_OPTIONS,
                "WidgetOptions",
                widget,
                vec![
                    FormField::dropdown(
                        "NumberOfTweets",
                        label("NUMBEROFTWEETS", "Number of tweets"),
                        tweet_count_options(),
                    )
                    .with_empty_string(" ", automatic.clone()),
                    FormField::dropdown(
                        "Language",
                        label("LANGUAGE", "Language"),
                        language_options(site),
                    )
                    .with_empty_string(" ", automatic),
                    FormField::checkbox("HideHeader", label("HIDEHEADER", "Hide header")),
                    FormField::checkbox("HideFooter", label("HIDEFOOTER", "Hide footer")),
                    FormField::checkbox("HideBorders", label("HIDEBORDERS", "Hide borders")),
                    FormField::checkbox("HideScrollbar", label("HIDESCROLLBAR", "Hide scrollbar")),
                    FormField::checkbox("Transparent", label("TRANSPARENT", "Transparent")),
                ],
            ))
    }

    fn cms_validator(&self) -> RequiredFields {
        RequiredFields::new(&[USERNAME_FIELD])
    }
}
