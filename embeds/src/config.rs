//! Site-wide configuration consumed by the widgets.
//!
//! The language list offered by the timeline widget belongs to the site, not
//! to the widget. It is read from the environment here so a host can supply
//! it without code.
//!
//! # Environment Variables
//!
//! | Variable | Required | Default | Description |
//! |----------|----------|---------|-------------|
//! | `TWITTER_EMBEDS_LANGUAGES` | No | (none) | Comma-separated `code=Label` pairs, e.g. `en=English,fr=French` |
//!
//! # Example
//!
//! ```no_run
//! use twitter_embeds::config::SiteConfig;
//!
//! let config = SiteConfig::from_env().expect("Failed to load site configuration");
//! println!("{} languages", config.languages().len());
//! ```

use std::env;

use thiserror::Error;
use tracing::debug;

/// Environment variable holding the supported language list.
pub const LANGUAGES_ENV_VAR: &str = "TWITTER_EMBEDS_LANGUAGES";

/// Errors that can occur during configuration parsing.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has an invalid value.
    #[error("invalid value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

/// Site-wide settings shared by every widget instance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SiteConfig {
    /// Supported language codes mapped to their display labels, in display order.
    languages: Vec<(String, String)>,
}

impl SiteConfig {
    /// Creates a `SiteConfig` from an explicit language list.
    ///
    /// # Example
    ///
    /// ```
    /// use twitter_embeds::config::SiteConfig;
    ///
    /// let config = SiteConfig::new(vec![("en".to_string(), "English".to_string())]);
    /// assert_eq!(config.languages().len(), 1);
    /// ```
    #[must_use]
    pub fn new(languages: Vec<(String, String)>) -> Self {
        Self { languages }
    }

    /// Creates a `SiteConfig` by parsing environment variables.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if `TWITTER_EMBEDS_LANGUAGES` is set but an
    /// entry is not of the form `code=Label` or has an empty code.
    pub fn from_env() -> Result<Self, ConfigError> {
        let languages = match env::var(LANGUAGES_ENV_VAR) {
            Ok(val) => parse_languages(&val)?,
            Err(_) => Vec::new(),
        };

        debug!(count = languages.len(), "Loaded site config from environment");

        Ok(Self { languages })
    }

    /// Returns the supported languages as `(code, label)` pairs.
    #[must_use]
    pub fn languages(&self) -> &[(String, String)] {
        &self.languages
    }
}

/// Parses a comma-separated `code=Label` list.
fn parse_languages(val: &str) -> Result<Vec<(String, String)>, ConfigError> {
    val.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| {
            let (code, label) = entry.split_once('=').ok_or_else(|| ConfigError::InvalidValue {
                key: LANGUAGES_ENV_VAR.to_string(),
                message: format!("expected code=Label, got '{entry}'"),
            })?;
            let code = code.trim();
            if code.is_empty() {
                return Err(ConfigError::InvalidValue {
                    key: LANGUAGES_ENV_VAR.to_string(),
                    message: format!("language code cannot be empty in '{entry}'"),
                });
            }
            Ok((code.to_string(), label.trim().to_string()))
        })
        .collect()
}
