//! Admin form descriptors and the submission boundary.
//!
//! Widgets describe their edit form declaratively: which tab, which section,
//! which field widget and which options. The host's form builder turns a
//! [`FormLayout`] into UI; this crate never renders it.
//!
//! Submitted values come back as a JSON object keyed by persisted field
//! names. [`submit`] turns that into a typed, sanitized and validated record.
//! Dropdown values must be one of the options the form offered.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::config::SiteConfig;
use crate::error::{Result, ValidationError};
use crate::options::{DefaultLocalizer, OptionList};
use crate::widget::EmbedWidget;

/// Tab holding the primary fields.
pub const TAB_MAIN: &str = "Root.Main";

/// Tab holding appearance fields.
pub const TAB_STYLE: &str = "Root.Style";

/// Tab holding behavioral toggles.
pub const TAB_OPTIONS: &str = "Root.Options";

/// The input control used for a field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FieldKind {
    Text,
    Checkbox,
    Dropdown {
        options: OptionList,
        /// Text of the blank choice, when the field may be left unset.
        empty_string: Option<String>,
        /// Placeholder shown while the blank choice is selected.
        placeholder: Option<String>,
    },
}

/// A single form field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormField {
    /// Persisted field name, e.g. `ShowCount`.
    pub name: String,
    pub label: String,
    pub kind: FieldKind,
}

impl FormField {
    #[must_use]
    pub fn text(name: &str, label: String) -> Self {
        Self {
            name: name.to_string(),
            label,
            kind: FieldKind::Text,
        }
    }

    #[must_use]
    pub fn checkbox(name: &str, label: String) -> Self {
        Self {
            name: name.to_string(),
            label,
            kind: FieldKind::Checkbox,
        }
    }

    #[must_use]
    pub fn dropdown(name: &str, label: String, options: OptionList) -> Self {
        Self {
            name: name.to_string(),
            label,
            kind: FieldKind::Dropdown {
                options,
                empty_string: None,
                placeholder: None,
            },
        }
    }

    /// Allows a dropdown to be left blank.
    ///
    /// Has no effect on other field kinds.
    #[must_use]
    pub fn with_empty_string(mut self, empty: &str, placeholder: String) -> Self {
        if let FieldKind::Dropdown {
            empty_string,
            placeholder: slot,
            ..
        } = &mut self.kind
        {
            *empty_string = Some(empty.to_string());
            *slot = Some(placeholder);
        }
        self
    }
}

/// A group of fields placed on one tab.
///
/// Fields added directly to a tab have no section name or title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldSection {
    pub tab: String,
    pub name: Option<String>,
    pub title: Option<String>,
    pub fields: Vec<FormField>,
}

impl FieldSection {
    /// Fields placed straight onto `tab`.
    #[must_use]
    pub fn on_tab(tab: &str, fields: Vec<FormField>) -> Self {
        Self {
            tab: tab.to_string(),
            name: None,
            title: None,
            fields,
        }
    }

    /// A named, titled section on `tab`.
    #[must_use]
    pub fn titled(tab: &str, name: &str, title: String, fields: Vec<FormField>) -> Self {
        Self {
            tab: tab.to_string(),
            name: Some(name.to_string()),
            title: Some(title),
            fields,
        }
    }
}

/// The full edit form of a widget, in display order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FormLayout {
    sections: Vec<FieldSection>,
}

impl FormLayout {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a section; builder-style.
    #[must_use]
    pub fn with(mut self, section: FieldSection) -> Self {
        self.sections.push(section);
        self
    }

    #[must_use]
    pub fn sections(&self) -> &[FieldSection] {
        &self.sections
    }

    /// Looks a field up by persisted name.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&FormField> {
        self.fields().find(|field| field.name == name)
    }

    /// Every field, in display order.
    pub fn fields(&self) -> impl Iterator<Item = &FormField> {
        self.sections.iter().flat_map(|section| section.fields.iter())
    }

    /// Sections placed on `tab`.
    pub fn tab<'a>(&'a self, tab: &'a str) -> impl Iterator<Item = &'a FieldSection> {
        self.sections.iter().filter(move |section| section.tab == tab)
    }

    /// Checks every dropdown value of the serialized `record` against its options.
    ///
    /// A value is accepted when its key is offered, or when it is blank (an
    /// empty string or the number `0`) and the dropdown has an empty choice.
    /// Fields the record does not carry are skipped.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::NotAnOption`] for the first value in display
    /// order that the form does not offer.
    pub fn validate_choices(&self, record: &Value) -> Result<()> {
        for field in self.fields() {
            let FieldKind::Dropdown {
                options,
                empty_string,
                ..
            } = &field.kind
            else {
                continue;
            };
            let Some(value) = record.get(&field.name) else {
                continue;
            };

            let key = choice_key(value);
            let blank = key.trim().is_empty();
            if options.contains_key(&key) || (blank && empty_string.is_some()) {
                continue;
            }

            return Err(ValidationError::NotAnOption {
                field: field.name.clone(),
                value: key,
            }
            .into());
        }
        Ok(())
    }
}

/// Option key of a stored dropdown value. Numeric `0` stands for "automatic".
fn choice_key(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        Value::Number(n) if n.as_u64() == Some(0) => String::new(),
        other => other.to_string(),
    }
}

/// Validator descriptor listing the fields that must not be blank.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RequiredFields {
    fields: Vec<String>,
}

impl RequiredFields {
    #[must_use]
    pub fn new(fields: &[&str]) -> Self {
        Self {
            fields: fields.iter().map(|f| f.to_string()).collect(),
        }
    }

    /// A validator that accepts every record.
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// Checks each required field of the serialized `record`.
    ///
    /// A field is blank when it is missing, `null`, or a string that is empty
    /// after trimming. The first blank field in declaration order is reported.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::Required`] for a blank field, or a JSON
    /// error if the record cannot be serialized.
    pub fn validate<T: Serialize>(&self, record: &T) -> Result<()> {
        if self.fields.is_empty() {
            return Ok(());
        }

        let value = serde_json::to_value(record)?;
        for field in &self.fields {
            let blank = match value.get(field) {
                None | Some(Value::Null) => true,
                Some(Value::String(s)) => s.trim().is_empty(),
                Some(_) => false,
            };
            if blank {
                return Err(ValidationError::Required {
                    field: field.clone(),
                }
                .into());
            }
        }
        Ok(())
    }
}

/// Accepts a form submission for widget `W`.
///
/// The input is deserialized (fields left out take their defaults; values of
/// the wrong type reject the submission), sanitized through
/// [`EmbedWidget::on_before_write`], checked against the widget's
/// [`RequiredFields`], and finally every dropdown value is checked against
/// the options its form offers for `site`. The accepted record is returned
/// for the host to persist.
///
/// # Errors
///
/// - [`EmbedError::Json`](crate::error::EmbedError::Json) when a value does not
///   fit its field type
/// - [`EmbedError::Validation`](crate::error::EmbedError::Validation) when a
///   required field is blank after sanitizing, or a dropdown value is not
///   one of its options
///
/// # Example
///
/// ```
/// use serde_json::json;
/// use twitter_embeds::config::SiteConfig;
/// use twitter_embeds::forms::submit;
/// use twitter_embeds::widgets::FollowButton;
///
/// let site = SiteConfig::default();
/// let button: FollowButton = submit(json!({ "Username": " @jdoe " }), &site).unwrap();
/// assert_eq!(button.username, "jdoe");
///
/// assert!(submit::<FollowButton>(json!({ "Username": "@" }), &site).is_err());
/// assert!(submit::<FollowButton>(json!({ "Username": "jdoe", "Size": "small" }), &site).is_err());
/// ```
pub fn submit<W>(input: Value, site: &SiteConfig) -> Result<W>
where
    W: EmbedWidget + DeserializeOwned + Serialize,
{
    let mut widget: W = serde_json::from_value(input)?;
    widget.on_before_write();

    let record = serde_json::to_value(&widget)?;
    let checked = widget.cms_validator().validate(&record).and_then(|()| {
        widget
            .cms_fields(&DefaultLocalizer, site)
            .validate_choices(&record)
    });

    if let Err(err) = checked {
        warn!(kind = ?widget.kind(), error = %err, "Rejected widget submission");
        return Err(err);
    }

    debug!(kind = ?widget.kind(), "Accepted widget submission");
    Ok(widget)
}
