//! Outbound link composition.

/// Base URL for profile links.
pub const TWITTER_BASE_URL: &str = "https://twitter.com";

/// Fixed compose-and-share URL used by the sharing button.
pub const SHARING_INTENT_URL: &str = "https://twitter.com/intent/tweet";

/// Profile link followed by a follow button.
#[must_use]
pub fn follow_link(username: &str) -> String {
    profile_link(username)
}

/// Profile link a timeline widget embeds.
#[must_use]
pub fn timeline_link(username: &str) -> String {
    profile_link(username)
}

/// Link for the sharing button.
///
/// Always the bare intent URL, whatever page the button sits on.
// TODO: append `via`, `hashtags` and the current page `url` query parameters.
#[must_use]
pub fn sharing_intent_link() -> String {
    SHARING_INTENT_URL.to_string()
}

fn profile_link(username: &str) -> String {
    format!("{TWITTER_BASE_URL}/{username}")
}
