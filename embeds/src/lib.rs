//! Twitter embed widgets for CMS content blocks.
//!
//! This crate models the Twitter follow button, sharing button, sharing icon
//! and timeline widget as typed configuration records. A host CMS stores the
//! records, shows the edit forms they describe, and asks them for the embed
//! link and its attributes at render time.
//!
//! # Overview
//!
//! Raw admin input goes through [`forms::submit`], which deserializes it,
//! sanitizes the username, checks required fields and checks each dropdown
//! value against the options offered for the site. At render time a
//! widget derives its link and ordered attribute mapping, which
//! [`render_attributes_html`] or [`render_link`] turn into markup. The Twitter
//! widget script loaded by the page does the rest.
//!
//! # Modules
//!
//! - [`widgets`]: the four widget records
//! - [`widget`]: the [`EmbedWidget`] capability and link rendering
//! - [`attributes`]: ordered attribute mapping and HTML serialization
//! - [`extensions`]: post-processing hooks run in registration order
//! - [`links`]: outbound URL composition
//! - [`sanitize`]: username normalization and required checks
//! - [`options`]: dropdown catalogs and the localization seam
//! - [`forms`]: admin form descriptors and the submission boundary
//! - [`config`]: site-wide configuration from the environment
//! - [`error`]: error types

pub mod attributes;
pub mod config;
pub mod error;
pub mod extensions;
pub mod forms;
pub mod links;
pub mod options;
pub mod sanitize;
pub mod widget;
pub mod widgets;

pub use attributes::{render_attributes_html, Attributes};
pub use config::{ConfigError, SiteConfig};
pub use error::{EmbedError, Result, ValidationError};
pub use extensions::{Extension, Extensions};
pub use forms::{submit, FormLayout, RequiredFields};
pub use links::{follow_link, sharing_intent_link, timeline_link};
pub use options::{ButtonSize, DefaultLocalizer, Localizer, Theme};
pub use sanitize::{require_username, sanitize_username};
pub use widget::{render_link, EmbedWidget, WidgetKind};
pub use widgets::{compose_chrome, FollowButton, SharingButton, SharingIcon, TimelineWidget};
