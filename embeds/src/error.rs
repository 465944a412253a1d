//! Error types for the Twitter embed widgets.
//!
//! Derivation (links, attributes, chrome) never fails. Errors only surface at
//! the admin submission boundary. Loading site configuration has its own
//! [`ConfigError`](crate::config::ConfigError).

use thiserror::Error;

/// Errors that can occur while accepting a widget record.
///
/// # Examples
///
/// ```
/// use twitter_embeds::error::{EmbedError, ValidationError};
///
/// let err: EmbedError = ValidationError::Required { field: "Username".to_string() }.into();
/// assert_eq!(err.to_string(), "validation error: Username is required");
/// ```
#[derive(Error, Debug)]
pub enum EmbedError {
    /// A submitted record failed form validation.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// A submitted or stored record does not match the field types.
    ///
    /// Non-numeric widths, strings for checkboxes and unknown enum values all
    /// end up here.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors raised by the admin form validator.
///
/// These are reported back to the editor as form errors; they are never
/// retried and are not fatal.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A mandatory field is missing or blank.
    #[error("{field} is required")]
    Required { field: String },

    /// A dropdown value is not among the options the form offers.
    #[error("\"{value}\" is not an option for {field}")]
    NotAnOption { field: String, value: String },
}

/// A specialized `Result` type for widget operations.
pub type Result<T> = std::result::Result<T, EmbedError>;
