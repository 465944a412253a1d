//! Username normalization and required-field checks.
//!
//! Editors paste handles in every shape (`@jdoe`, ` jdoe `, `  @jdoe`). Before
//! a record is written the username is reduced to the bare handle so the
//! composed profile links are always `https://twitter.com/<handle>`.

use tracing::debug;

use crate::error::ValidationError;

/// Persisted name of the username field.
pub const USERNAME_FIELD: &str = "Username";

/// Trims surrounding whitespace, then strips the leading `@`.
///
/// Repeated `@` and whitespace between them and the handle go too, so the
/// result never starts with either and sanitizing it again is a no-op.
///
/// # Example
///
/// ```
/// use twitter_embeds::sanitize::sanitize_username;
///
/// assert_eq!(sanitize_username("  @jdoe  "), "jdoe");
/// assert_eq!(sanitize_username("jdoe"), "jdoe");
/// ```
#[must_use]
pub fn sanitize_username(raw: &str) -> String {
    let trimmed = raw.trim();
    let stripped = trimmed.trim_start_matches(|c: char| c == '@' || c.is_whitespace());

    if stripped != raw {
        debug!(raw, sanitized = stripped, "Sanitized username");
    }

    stripped.to_string()
}

/// Fails with [`ValidationError::Required`] when `username` is empty.
///
/// Only the admin submission boundary calls this; rendering an empty
/// username simply disables the widget.
pub fn require_username(username: &str) -> Result<(), ValidationError> {
    if username.is_empty() {
        return Err(ValidationError::Required {
            field: USERNAME_FIELD.to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_leading_at() {
        assert_eq!(sanitize_username("@foo"), "foo");
    }

    #[test]
    fn trims_then_strips() {
        assert_eq!(sanitize_username("  @foo  "), "foo");
        assert_eq!(sanitize_username("\t@foo\n"), "foo");
    }

    #[test]
    fn plain_username_unchanged() {
        assert_eq!(sanitize_username("foo"), "foo");
    }

    #[test]
    fn repeated_at_stripped() {
        assert_eq!(sanitize_username("@@foo"), "foo");
        assert_eq!(sanitize_username(" @ @foo"), "foo");
    }

    #[test]
    fn at_inside_name_kept() {
        assert_eq!(sanitize_username("foo@bar"), "foo@bar");
    }

    #[test]
    fn whitespace_after_at_removed() {
        assert_eq!(sanitize_username("@ foo"), "foo");
    }

    #[test]
    fn idempotent() {
        for raw in ["@foo", "  @foo  ", "foo", "@@foo", "@", "   ", "@ foo", ""] {
            let once = sanitize_username(raw);
            assert_eq!(sanitize_username(&once), once, "not idempotent for {raw:?}");
        }
    }

    #[test]
    fn lone_at_becomes_empty() {
        assert_eq!(sanitize_username(" @ "), "");
    }

    #[test]
    fn require_username_rejects_empty() {
        assert_eq!(
            require_username(""),
            Err(ValidationError::Required {
                field: "Username".to_string()
            })
        );
    }

    #[test]
    fn require_username_accepts_value() {
        assert!(require_username("jdoe").is_ok());
    }
}
