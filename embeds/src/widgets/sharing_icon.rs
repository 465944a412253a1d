//! Twitter sharing icon.
//!
//! A colored glyph that shares the current page. It has no link logic of its
//! own: link, classes and attributes all come from a [`SharingButton`].

use serde::{Deserialize, Serialize};

use crate::attributes::Attributes;
use crate::config::SiteConfig;
use crate::extensions::Extensions;
use crate::forms::{FieldSection, FormField, FormLayout, TAB_STYLE};
use crate::options::Localizer;
use crate::widget::{EmbedWidget, WidgetKind};
use crate::widgets::SharingButton;

pub const DEFAULT_FONT_ICON: &str = "twitter";
pub const DEFAULT_BACKGROUND_COLOR: &str = "#3abeff";
pub const DEFAULT_FOREGROUND_COLOR: &str = "#ffffff";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct SharingIcon {
    /// Icon font glyph name.
    pub font_icon: String,
    pub color_background_link: String,
    pub color_foreground_link: String,
}

impl Default for SharingIcon {
    fn default() -> Self {
        Self {
            font_icon: DEFAULT_FONT_ICON.to_string(),
            color_background_link: DEFAULT_BACKGROUND_COLOR.to_string(),
            color_foreground_link: DEFAULT_FOREGROUND_COLOR.to_string(),
        }
    }
}

impl SharingIcon {
    /// The button this icon delegates to.
    #[must_use]
    pub fn button(&self) -> SharingButton {
        SharingButton::default()
    }

    #[must_use]
    pub fn link_class_names(&self, extensions: &Extensions) -> Vec<String> {
        self.button().link_class_names(extensions)
    }
}

impl EmbedWidget for SharingIcon {
    fn kind(&self) -> WidgetKind {
        WidgetKind::SharingIcon
    }

    fn link(&self) -> String {
        self.button().link()
    }

    fn link_attributes(&self, extensions: &Extensions) -> Attributes {
        self.button().link_attributes(extensions)
    }

    /// The caption of a button captioned through `localizer`.
    fn text(&self, localizer: &dyn Localizer) -> String {
        SharingButton::localized(localizer).text(localizer)
    }

    fn cms_fields(&self, localizer: &dyn Localizer, _site: &SiteConfig) -> FormLayout {
        let namespace = self.kind().namespace();
        let label = |key: &str, default: &str| localizer.translate(&format!("{namespace}.{key}"), default);

        FormLayout::new().with(FieldSection::titled(
            TAB_STYLE,
            "SharingIconStyle",
            label("ICON", "Icon"),
            vec![
                FormField::text("FontIcon", label("FONTICON", "Font icon")),
                FormField::text(
                    "ColorBackgroundLink",
                    label("COLORBACKGROUNDLINK", "Background color"),
                ),
                FormField::text(
                    "ColorForegroundLink",
                    label("COLORFOREGROUNDLINK", "Foreground color"),
                ),
            ],
        ))
    }
}
