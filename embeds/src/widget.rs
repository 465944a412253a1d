//! The capability shared by every embed widget.

use maud::{html, Markup, PreEscaped};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::attributes::{render_attributes_html, Attributes};
use crate::config::SiteConfig;
use crate::extensions::Extensions;
use crate::forms::{FormLayout, RequiredFields};
use crate::options::Localizer;

/// Which widget a value belongs to. Passed to extensions at every hook.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WidgetKind {
    FollowButton,
    SharingButton,
    SharingIcon,
    Timeline,
}

impl WidgetKind {
    #[must_use]
    pub fn singular_name(self) -> &'static str {
        match self {
            WidgetKind::FollowButton => "Twitter Follow Button",
            WidgetKind::SharingButton => "Twitter Sharing Button",
            WidgetKind::SharingIcon => "Twitter Sharing Icon",
            WidgetKind::Timeline => "Twitter Timeline",
        }
    }

    #[must_use]
    pub fn plural_name(self) -> &'static str {
        match self {
            WidgetKind::FollowButton => "Twitter Follow Buttons",
            WidgetKind::SharingButton => "Twitter Sharing Buttons",
            WidgetKind::SharingIcon => "Twitter Sharing Icons",
            WidgetKind::Timeline => "Twitter Timelines",
        }
    }

    /// One-line description for the admin's "add block" picker.
    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            WidgetKind::FollowButton => "A component which shows a Twitter follow button",
            WidgetKind::SharingButton => "A button to share the current page via Twitter",
            WidgetKind::SharingIcon => "A sharing icon to share the current page via Twitter",
            WidgetKind::Timeline => "A component which shows a Twitter timeline",
        }
    }

    /// Localization namespace for this widget's labels.
    #[must_use]
    pub fn namespace(self) -> &'static str {
        match self {
            WidgetKind::FollowButton => "TwitterFollowButton",
            WidgetKind::SharingButton => "TwitterSharingButton",
            WidgetKind::SharingIcon => "TwitterSharingIcon",
            WidgetKind::Timeline => "TwitterTimelineWidget",
        }
    }
}

/// A configurable, embeddable Twitter widget.
///
/// Implementors hold their persisted fields and derive presentation values
/// from them on demand. Nothing here mutates the record except
/// [`on_before_write`](EmbedWidget::on_before_write).
pub trait EmbedWidget {
    fn kind(&self) -> WidgetKind;

    /// The outbound URL of the embed link.
    fn link(&self) -> String;

    /// Attributes of the embed link, after every extension has run.
    fn link_attributes(&self, extensions: &Extensions) -> Attributes;

    /// Visible link text (shown until the Twitter script replaces the link).
    fn text(&self, localizer: &dyn Localizer) -> String;

    /// Whether the layout should emit a placeholder instead of the widget.
    fn is_disabled(&self) -> bool {
        false
    }

    /// Normalizes fields before the record is persisted.
    fn on_before_write(&mut self) {}

    /// Declarative admin edit form.
    fn cms_fields(&self, localizer: &dyn Localizer, site: &SiteConfig) -> FormLayout;

    /// Fields that must be filled in for a submission to be accepted.
    fn cms_validator(&self) -> RequiredFields {
        RequiredFields::none()
    }

    /// [`link_attributes`](EmbedWidget::link_attributes) serialized for a template.
    fn link_attributes_html(&self, extensions: &Extensions) -> String {
        render_attributes_html(&self.link_attributes(extensions))
    }
}

/// Renders the embed anchor for `widget`.
///
/// Returns `None` for a disabled widget so the layout can put a placeholder
/// in its place. The Twitter widget script, loaded by the page, upgrades the
/// anchor into the live widget.
///
/// # Example
///
/// ```
/// use twitter_embeds::extensions::Extensions;
/// use twitter_embeds::options::DefaultLocalizer;
/// use twitter_embeds::widget::render_link;
/// use twitter_embeds::widgets::FollowButton;
///
/// let markup = render_link(&FollowButton::new("jdoe"), &Extensions::new(), &DefaultLocalizer)
///     .expect("enabled");
/// assert_eq!(
///     markup.into_string(),
///     r#"<a class="twitter-follow-button" href="https://twitter.com/jdoe">Follow jdoe</a>"#
/// );
/// ```
pub fn render_link<W>(widget: &W, extensions: &Extensions, localizer: &dyn Localizer) -> Option<Markup>
where
    W: EmbedWidget + ?Sized,
{
    if widget.is_disabled() {
        debug!(kind = ?widget.kind(), "Widget disabled, skipping render");
        return None;
    }

    let attrs = widget.link_attributes_html(extensions);
    let text = widget.text(localizer);

    Some(html! {
        (PreEscaped(format!("<a {attrs}>")))
        (text)
        (PreEscaped("</a>"))
    })
}
