//! Twitter follow button.

use serde::{Deserialize, Serialize};

use crate::attributes::Attributes;
use crate::config::SiteConfig;
use crate::extensions::Extensions;
use crate::forms::{FieldSection, FormField, FormLayout, RequiredFields, TAB_MAIN, TAB_OPTIONS, TAB_STYLE};
use crate::links::follow_link;
use crate::options::{translate_with, ButtonSize, Localizer};
use crate::sanitize::{sanitize_username, USERNAME_FIELD};
use crate::widget::{EmbedWidget, WidgetKind};

/// CSS class the widget script looks for.
pub const FOLLOW_BUTTON_CLASS: &str = "twitter-follow-button";

/// A button following one Twitter account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct FollowButton {
    /// Handle to follow, without `@` once written.
    pub username: String,
    pub size: ButtonSize,
    pub show_count: bool,
    pub show_username: bool,
    /// Editor switch hiding the block regardless of its configuration.
    pub disabled: bool,
}

impl Default for FollowButton {
    fn default() -> Self {
        Self {
            username: String::new(),
            size: ButtonSize::Default,
            show_count: true,
            show_username: true,
            disabled: false,
        }
    }
}

impl FollowButton {
    /// A button for `username` with every other field at its default.
    #[must_use]
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            ..Self::default()
        }
    }

    /// The `data-*` attributes; only values that differ from the widget defaults are emitted.
    #[must_use]
    pub fn link_data_attributes(&self, extensions: &Extensions) -> Attributes {
        let mut attrs = Attributes::new();

        if self.size != ButtonSize::Default {
            attrs.insert("data-size", self.size.as_str());
        }

        if !self.show_count {
            attrs.insert("data-show-count", "false");
        }

        if !self.show_username {
            attrs.insert("data-show-screen-name", "false");
        }

        extensions.link_data_attributes(self.kind(), &mut attrs);
        attrs
    }

    fn label(&self, localizer: &dyn Localizer, key: &str, default: &str) -> String {
        localizer.translate(&format!("{}.{key}", self.kind().namespace()), default)
    }
}

impl EmbedWidget for FollowButton {
    fn kind(&self) -> WidgetKind {
        WidgetKind::FollowButton
    }

    fn link(&self) -> String {
        follow_link(&self.username)
    }

    fn link_attributes(&self, extensions: &Extensions) -> Attributes {
        let mut attrs = Attributes::new();
        attrs.insert("class", FOLLOW_BUTTON_CLASS);
        attrs.insert("href", self.link());

        extensions.link_attributes(self.kind(), &mut attrs);

        attrs.merge(self.link_data_attributes(extensions));
        attrs
    }

    fn text(&self, localizer: &dyn Localizer) -> String {
        translate_with(
            localizer,
            "TwitterFollowButton.FOLLOWUSERNAME",
            "Follow %s",
            &[self.username.as_str()],
        )
    }

    fn is_disabled(&self) -> bool {
        self.username.is_empty() || self.disabled
    }

    fn on_before_write(&mut self) {
        self.username = sanitize_username(&self.username);
    }

    fn cms_fields(&self, localizer: &dyn Localizer, _site: &SiteConfig) -> FormLayout {
        let namespace = self.kind().namespace();
        let button = self.label(localizer, "BUTTON", "Button");

        FormLayout::new()
            .with(FieldSection::on_tab(
                TAB_MAIN,
                vec![FormField::text(
                    USERNAME_FIELD,
                    self.label(localizer, "USERNAME", "Username"),
                )],
            ))
            .with(FieldSection::titled(
                TAB_STYLE,
                "ButtonStyle",
                button.clone(),
                vec![FormField::dropdown(
                    "Size",
                    self.label(localizer, "SIZE", "Size"),
                    ButtonSize::options(localizer, namespace),
                )],
            ))
            .with(FieldSection::titled(
                TAB_OPTIONS,
                "ButtonOptions",
                button,
                vec![
                    FormField::checkbox("ShowCount", self.label(localizer, "SHOWCOUNT", "Show count")),
                    FormField::checkbox(
                        "ShowUsername",
                        self.label(localizer, "SHOWUSERNAME", "Show username"),
                    ),
                ],
            ))
    }

    fn cms_validator(&self) -> RequiredFields {
        RequiredFields::new(&[USERNAME_FIELD])
    }
}
