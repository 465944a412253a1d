//! Render-time behavior of the Twitter embed widgets.
//!
//! Covers the attribute omission rules, attribute ordering, extension hooks,
//! HTML serialization and the disabled state as a template would see them.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use twitter_embeds::attributes::{render_attributes_html, Attributes};
use twitter_embeds::extensions::{Extension, Extensions};
use twitter_embeds::links::{follow_link, sharing_intent_link};
use twitter_embeds::options::{ButtonSize, DefaultLocalizer, Localizer, Theme};
use twitter_embeds::widget::{render_link, EmbedWidget, WidgetKind};
use twitter_embeds::widgets::{compose_chrome, FollowButton, SharingButton, SharingIcon, TimelineWidget};

// =============================================================================
// Test Helpers
// =============================================================================

fn no_extensions() -> Extensions {
    Extensions::new()
}

/// Adds `data-dnt="true"` to every widget's data attributes.
struct DoNotTrack;

impl Extension for DoNotTrack {
    fn update_link_data_attributes(&self, _kind: WidgetKind, attrs: &mut Attributes) {
        attrs.insert("data-dnt", "true");
    }
}

/// Overrides `data-size` on the base attributes.
struct ForceSize(&'static str);

impl Extension for ForceSize {
    fn update_link_attributes(&self, _kind: WidgetKind, attrs: &mut Attributes) {
        attrs.insert("data-size", self.0);
    }
}

/// Records which widget kinds it was called for.
#[derive(Default)]
struct CallCounter {
    base: AtomicUsize,
    data: AtomicUsize,
}

impl Extension for CallCounter {
    fn update_link_attributes(&self, _kind: WidgetKind, _attrs: &mut Attributes) {
        self.base.fetch_add(1, Ordering::SeqCst);
    }

    fn update_link_data_attributes(&self, _kind: WidgetKind, _attrs: &mut Attributes) {
        self.data.fetch_add(1, Ordering::SeqCst);
    }
}

struct French;

impl Localizer for French {
    fn translate(&self, key: &str, default: &str) -> String {
        match key {
            "TwitterFollowButton.FOLLOWUSERNAME" => "Suivre %s".to_string(),
            "TwitterSharingButton.SHAREVIATWITTER" => "Partager sur Twitter".to_string(),
            _ => default.to_string(),
        }
    }
}

// =============================================================================
// Follow button
// =============================================================================

#[test]
fn follow_button_default_config_has_exactly_class_and_href() {
    let button = FollowButton {
        size: ButtonSize::Default,
        show_count: true,
        show_username: true,
        ..FollowButton::new("jdoe")
    };

    let attrs = button.link_attributes(&no_extensions());

    assert_eq!(attrs.names().collect::<Vec<_>>(), ["class", "href"]);
    assert!(!attrs.contains("data-size"));
    assert!(!attrs.contains("data-show-count"));
    assert!(!attrs.contains("data-show-screen-name"));
}

#[test]
fn follow_button_large_without_count() {
    let button = FollowButton {
        size: ButtonSize::Large,
        show_count: false,
        ..FollowButton::new("jdoe")
    };

    let html = button.link_attributes_html(&no_extensions());

    assert_eq!(
        html,
        r#"class="twitter-follow-button" href="https://twitter.com/jdoe" data-size="large" data-show-count="false""#
    );
}

#[test]
fn follow_button_link_matches_link_composer() {
    let button = FollowButton::new("jdoe");
    assert_eq!(button.link(), follow_link("jdoe"));
    assert_eq!(button.link(), "https://twitter.com/jdoe");
}

#[test]
fn follow_button_renders_anchor() {
    let markup = render_link(&FollowButton::new("jdoe"), &no_extensions(), &DefaultLocalizer)
        .expect("enabled widget renders");

    assert_eq!(
        markup.into_string(),
        r#"<a class="twitter-follow-button" href="https://twitter.com/jdoe">Follow jdoe</a>"#
    );
}

#[test]
fn follow_button_text_localized() {
    assert_eq!(FollowButton::new("jdoe").text(&French), "Suivre jdoe");
}

// =============================================================================
// Timeline
// =============================================================================

#[test]
fn timeline_chrome_composition() {
    let none = TimelineWidget::new("jdoe");
    assert_eq!(compose_chrome(&none), "");

    let some = TimelineWidget {
        hide_header: true,
        transparent: true,
        ..TimelineWidget::new("jdoe")
    };
    assert_eq!(compose_chrome(&some), "noheader transparent");
}

#[test]
fn timeline_full_markup() {
    let timeline = TimelineWidget {
        theme: Theme::Dark,
        width: 320,
        height: 0,
        language: "de".to_string(),
        number_of_tweets: 10,
        hide_borders: true,
        hide_scrollbar: true,
        ..TimelineWidget::new("TwitterDev")
    };

    assert_eq!(
        timeline.link_attributes_html(&no_extensions()),
        concat!(
            r#"class="twitter-timeline" href="https://twitter.com/TwitterDev" "#,
            r#"data-theme="dark" data-width="320" data-chrome="noborders noscrollbar" "#,
            r#"data-lang="de" data-tweet-limit="10""#
        )
    );
}

#[test]
fn timeline_renders_tweets_by_text() {
    let markup = render_link(&TimelineWidget::new("jdoe"), &no_extensions(), &DefaultLocalizer)
        .expect("enabled widget renders");
    assert!(markup.into_string().ends_with(">Tweets by jdoe</a>"));
}

// =============================================================================
// Sharing button and icon
// =============================================================================

#[test]
fn sharing_button_always_emits_size() {
    let attrs = SharingButton::default().link_attributes(&no_extensions());
    assert_eq!(attrs.get("data-size"), Some("default"));
    assert_eq!(attrs.get("href"), Some("https://twitter.com/intent/tweet"));
}

#[test]
fn sharing_link_ignores_configuration() {
    let small = SharingButton::with_size(ButtonSize::Default);
    let large = SharingButton::with_size(ButtonSize::Large);
    assert_eq!(small.link(), sharing_intent_link());
    assert_eq!(large.link(), sharing_intent_link());
    assert_eq!(SharingIcon::default().link(), "https://twitter.com/intent/tweet");
}

#[test]
fn sharing_icon_renders_like_its_button() {
    let icon = render_link(&SharingIcon::default(), &no_extensions(), &DefaultLocalizer)
        .expect("icon renders")
        .into_string();
    let button = render_link(&SharingButton::default(), &no_extensions(), &DefaultLocalizer)
        .expect("button renders")
        .into_string();
    assert_eq!(icon, button);
}

#[test]
fn sharing_button_caption_localized() {
    let button = SharingButton::localized(&French);
    assert_eq!(button.text(&DefaultLocalizer), "Partager sur Twitter");
}

#[test]
fn sharing_icon_caption_localized() {
    assert_eq!(SharingIcon::default().text(&French), "Partager sur Twitter");

    let markup = render_link(&SharingIcon::default(), &no_extensions(), &French)
        .expect("icon renders")
        .into_string();
    assert!(markup.ends_with(">Partager sur Twitter</a>"));
}

// =============================================================================
// Disabled state
// =============================================================================

#[test]
fn empty_username_disables_follow_and_timeline() {
    let follow = FollowButton::default();
    let timeline = TimelineWidget::default();

    assert!(follow.is_disabled());
    assert!(timeline.is_disabled());
    assert!(render_link(&follow, &no_extensions(), &DefaultLocalizer).is_none());
    assert!(render_link(&timeline, &no_extensions(), &DefaultLocalizer).is_none());
}

#[test]
fn disabled_widget_still_derives_attributes() {
    let attrs = FollowButton::default().link_attributes(&no_extensions());
    assert_eq!(attrs.get("href"), Some("https://twitter.com/"));
}

#[test]
fn widgets_usable_as_trait_objects() {
    let widgets: Vec<Box<dyn EmbedWidget>> = vec![
        Box::new(FollowButton::new("a")),
        Box::new(SharingButton::default()),
        Box::new(SharingIcon::default()),
        Box::new(TimelineWidget::new("b")),
    ];

    let rendered: Vec<_> = widgets
        .iter()
        .filter_map(|w| render_link(w.as_ref(), &no_extensions(), &DefaultLocalizer))
        .collect();
    assert_eq!(rendered.len(), 4);
}

// =============================================================================
// Extensions
// =============================================================================

#[test]
fn data_extension_applies_to_follow_and_timeline() {
    let mut extensions = Extensions::new();
    extensions.register(DoNotTrack);

    let follow = FollowButton::new("jdoe").link_attributes(&extensions);
    let timeline = TimelineWidget::new("jdoe").link_attributes(&extensions);

    assert_eq!(follow.names().last(), Some("data-dnt"));
    assert_eq!(timeline.names().last(), Some("data-dnt"));
}

#[test]
fn data_attributes_override_base_extension_values() {
    // The base hook runs before the data attributes are merged, so the
    // computed data-size wins when both set it.
    let mut extensions = Extensions::new();
    extensions.register(ForceSize("small"));

    let large = FollowButton {
        size: ButtonSize::Large,
        ..FollowButton::new("jdoe")
    };
    let attrs = large.link_attributes(&extensions);
    assert_eq!(attrs.get("data-size"), Some("large"));
    assert_eq!(attrs.names().collect::<Vec<_>>(), ["class", "href", "data-size"]);

    let default = FollowButton::new("jdoe").link_attributes(&extensions);
    assert_eq!(default.get("data-size"), Some("small"));
}

#[test]
fn sharing_button_extension_runs_last() {
    let mut extensions = Extensions::new();
    extensions.register(ForceSize("large"));

    let attrs = SharingButton::default().link_attributes(&extensions);
    assert_eq!(attrs.get("data-size"), Some("large"));
}

#[test]
fn hooks_called_once_per_derivation() {
    let counter = Arc::new(CallCounter::default());
    let mut extensions = Extensions::new();
    extensions.register_shared(counter.clone());

    FollowButton::new("jdoe").link_attributes(&extensions);
    TimelineWidget::new("jdoe").link_attributes(&extensions);
    SharingButton::default().link_attributes(&extensions);

    assert_eq!(counter.base.load(Ordering::SeqCst), 3);
    assert_eq!(counter.data.load(Ordering::SeqCst), 2);
}

#[test]
fn extension_values_are_escaped_in_html() {
    struct Title;
    impl Extension for Title {
        fn update_link_attributes(&self, _kind: WidgetKind, attrs: &mut Attributes) {
            attrs.insert("title", r#"<b>"quoted" & more</b>"#);
        }
    }

    let mut extensions = Extensions::new();
    extensions.register(Title);

    let html = render_attributes_html(&FollowButton::new("jdoe").link_attributes(&extensions));
    assert!(html.ends_with(r#"title="&lt;b&gt;&quot;quoted&quot; &amp; more&lt;/b&gt;""#));
}

#[test]
fn extension_cannot_inject_markup_through_attribute_names() {
    struct Inject;
    impl Extension for Inject {
        fn update_link_attributes(&self, _kind: WidgetKind, attrs: &mut Attributes) {
            attrs.insert(r#"x><script>alert(1)</script"#, "y");
            attrs.insert("data-related", "jdoe");
        }
    }

    let mut extensions = Extensions::new();
    extensions.register(Inject);

    let markup = render_link(&FollowButton::new("jdoe"), &extensions, &DefaultLocalizer)
        .expect("enabled widget renders")
        .into_string();
    assert!(!markup.contains("<script>"));
    assert_eq!(
        markup,
        r#"<a class="twitter-follow-button" href="https://twitter.com/jdoe" data-related="jdoe">Follow jdoe</a>"#
    );
}
