//! Ordered HTML attribute mapping and its serialization.
//!
//! Attribute order is part of the output: templates and tests compare the
//! rendered string, so `Attributes` keeps insertion order. Re-inserting an
//! existing name replaces its value where it already stands, which is how
//! data attributes are merged over the base `class`/`href` pair.

use maud::html;
use serde::ser::{Serialize, Serializer};
use tracing::warn;

/// An ordered mapping of attribute name to value.
///
/// # Example
///
/// ```
/// use twitter_embeds::attributes::{render_attributes_html, Attributes};
///
/// let mut attrs = Attributes::new();
/// attrs.insert("class", "twitter-timeline");
/// attrs.insert("data-theme", "dark");
///
/// assert_eq!(
///     render_attributes_html(&attrs),
///     r#"class="twitter-timeline" data-theme="dark""#
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes {
    entries: Vec<(String, String)>,
}

impl Attributes {
    /// Creates an empty mapping.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `name` to `value`.
    ///
    /// An existing entry keeps its position; a new one is appended.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(key, _)| *key == name) {
            Some((_, existing)) => *existing = value,
            None => self.entries.push((name, value)),
        }
    }

    /// Returns the value for `name`, if present.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Removes `name`, returning its value.
    pub fn remove(&mut self, name: &str) -> Option<String> {
        let index = self.entries.iter().position(|(key, _)| key == name)?;
        Some(self.entries.remove(index).1)
    }

    /// Merges `other` over `self`.
    ///
    /// Names already present take the value from `other` in place; the rest
    /// are appended in `other`'s order.
    pub fn merge(&mut self, other: Attributes) {
        for (name, value) in other.entries {
            self.insert(name, value);
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates `(name, value)` pairs in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    /// Iterates attribute names in order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut attrs = Self::new();
        for (name, value) in iter {
            attrs.insert(name, value);
        }
        attrs
    }
}

impl Serialize for Attributes {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}

/// Serializes attributes into `name="value"` tokens joined by single spaces.
///
/// Values are HTML-escaped. Names outside `[A-Za-z0-9_:-]` cannot be escaped
/// inside a tag, so those attributes are dropped with a warning.
#[must_use]
pub fn render_attributes_html(attrs: &Attributes) -> String {
    attrs
        .iter()
        .filter(|(name, _)| {
            let valid = is_valid_name(name);
            if !valid {
                warn!(name, "Dropping attribute with invalid name");
            }
            valid
        })
        .map(|(name, value)| format!("{name}=\"{}\"", escape(value)))
        .collect::<Vec<_>>()
        .join(" ")
}

fn is_valid_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | ':' | '-'))
}

/// Escapes `&`, `<`, `>` and `"` for use inside a quoted attribute value.
fn escape(value: &str) -> String {
    html! { (value) }.into_string()
}
