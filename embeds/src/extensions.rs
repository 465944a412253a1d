//! Post-processing hooks for derived widget values.
//!
//! A host registers [`Extension`]s on an [`Extensions`] registry. Widgets call
//! the registry at fixed hook points after computing their base values, and
//! every extension runs in registration order with mutable access to the
//! value. Later extensions see (and may override) what earlier ones wrote.
//!
//! # Example
//!
//! ```
//! use twitter_embeds::attributes::Attributes;
//! use twitter_embeds::extensions::{Extension, Extensions};
//! use twitter_embeds::widget::{EmbedWidget, WidgetKind};
//! use twitter_embeds::widgets::FollowButton;
//!
//! struct DoNotTrack;
//!
//! impl Extension for DoNotTrack {
//!     fn update_link_data_attributes(&self, _kind: WidgetKind, attrs: &mut Attributes) {
//!         attrs.insert("data-dnt", "true");
//!     }
//! }
//!
//! let mut extensions = Extensions::new();
//! extensions.register(DoNotTrack);
//!
//! let button = FollowButton::new("jdoe");
//! let attrs = button.link_attributes(&extensions);
//! assert_eq!(attrs.get("data-dnt"), Some("true"));
//! ```

use std::fmt;
use std::sync::Arc;

use tracing::trace;

use crate::attributes::Attributes;
use crate::widget::WidgetKind;

/// A set of callbacks invoked at the widget hook points.
///
/// Every method defaults to a no-op so an extension only implements the
/// hooks it cares about.
pub trait Extension: Send + Sync {
    /// Runs on the base link attributes (`class`, `href`, ...).
    fn update_link_attributes(&self, _kind: WidgetKind, _attrs: &mut Attributes) {}

    /// Runs on the `data-*` attributes before they are merged over the base.
    fn update_link_data_attributes(&self, _kind: WidgetKind, _attrs: &mut Attributes) {}

    /// Runs on the list of CSS class names for a sharing link.
    fn update_link_class_names(&self, _kind: WidgetKind, _classes: &mut Vec<String>) {}
}

/// Ordered registry of extensions.
#[derive(Clone, Default)]
pub struct Extensions {
    extensions: Vec<Arc<dyn Extension>>,
}

impl Extensions {
    /// Creates an empty registry; every hook is then a no-op.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `extension`; it runs after every extension registered before it.
    pub fn register<E: Extension + 'static>(&mut self, extension: E) -> &mut Self {
        self.extensions.push(Arc::new(extension));
        self
    }

    /// Appends an already shared extension.
    pub fn register_shared(&mut self, extension: Arc<dyn Extension>) -> &mut Self {
        self.extensions.push(extension);
        self
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.extensions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.extensions.is_empty()
    }

    pub(crate) fn link_attributes(&self, kind: WidgetKind, attrs: &mut Attributes) {
        for (index, extension) in self.extensions.iter().enumerate() {
            trace!(?kind, index, "Dispatching update_link_attributes");
            extension.update_link_attributes(kind, attrs);
        }
    }

    pub(crate) fn link_data_attributes(&self, kind: WidgetKind, attrs: &mut Attributes) {
        for (index, extension) in self.extensions.iter().enumerate() {
            trace!(?kind, index, "Dispatching update_link_data_attributes");
            extension.update_link_data_attributes(kind, attrs);
        }
    }

    pub(crate) fn link_class_names(&self, kind: WidgetKind, classes: &mut Vec<String>) {
        for (index, extension) in self.extensions.iter().enumerate() {
            trace!(?kind, index, "Dispatching update_link_class_names");
            extension.update_link_class_names(kind, classes);
        }
    }
}

impl fmt::Debug for Extensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Extensions")
            .field("len", &self.extensions.len())
            .finish()
    }
}
