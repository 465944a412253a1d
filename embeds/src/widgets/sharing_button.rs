//! Twitter sharing ("Tweet") button.

use serde::{Deserialize, Serialize};

use crate::attributes::Attributes;
use crate::config::SiteConfig;
use crate::extensions::Extensions;
use crate::forms::{FieldSection, FormField, FormLayout, TAB_STYLE};
use crate::links::sharing_intent_link;
use crate::options::{ButtonSize, DefaultLocalizer, Localizer};
use crate::widget::{EmbedWidget, WidgetKind};

/// CSS class the widget script looks for.
pub const SHARE_BUTTON_CLASS: &str = "twitter-share-button";

/// A button opening the Tweet compose intent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct SharingButton {
    pub button_size: ButtonSize,
    /// Button caption.
    pub name: String,
}

impl Default for SharingButton {
    fn default() -> Self {
        Self::localized(&DefaultLocalizer)
    }
}

impl SharingButton {
    /// A default-sized button captioned in the localizer's language.
    #[must_use]
    pub fn localized(localizer: &dyn Localizer) -> Self {
        Self {
            button_size: ButtonSize::Default,
            name: localizer.translate("TwitterSharingButton.SHAREVIATWITTER", "Share via Twitter"),
        }
    }

    #[must_use]
    pub fn with_size(button_size: ButtonSize) -> Self {
        Self {
            button_size,
            ..Self::default()
        }
    }

    /// CSS classes of the link, after the class-name extensions have run.
    #[must_use]
    pub fn link_class_names(&self, extensions: &Extensions) -> Vec<String> {
        let mut classes = vec![SHARE_BUTTON_CLASS.to_string()];
        extensions.link_class_names(self.kind(), &mut classes);
        classes
    }
}

impl EmbedWidget for SharingButton {
    fn kind(&self) -> WidgetKind {
        WidgetKind::SharingButton
    }

    fn link(&self) -> String {
        sharing_intent_link()
    }

    /// `data-size` is always present here, unlike the follow button which
    /// leaves it out for the default size.
    fn link_attributes(&self, extensions: &Extensions) -> Attributes {
        let mut attrs = Attributes::new();
        attrs.insert("class", self.link_class_names(extensions).join(" "));
        attrs.insert("href", self.link());
        attrs.insert("data-size", self.button_size.as_str());

        extensions.link_attributes(self.kind(), &mut attrs);
        attrs
    }

    fn text(&self, _localizer: &dyn Localizer) -> String {
        self.name.clone()
    }

    fn cms_fields(&self, localizer: &dyn Localizer, _site: &SiteConfig) -> FormLayout {
        let namespace = self.kind().namespace();

        FormLayout::new().with(FieldSection::titled(
            TAB_STYLE,
            "TwitterSharingButtonStyle",
            localizer.translate(
                &format!("{namespace}.SINGULARNAME"),
                self.kind().singular_name(),
            ),
            vec![FormField::dropdown(
                "ButtonSize",
                localizer.translate(&format!("{namespace}.BUTTONSIZE"), "Button size"),
                ButtonSize::options(localizer, namespace),
            )],
        ))
    }
}
