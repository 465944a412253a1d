//! The four Twitter embed widgets.
//!
//! - [`follow_button`]: follow button for one account
//! - [`sharing_button`]: Tweet compose intent button
//! - [`sharing_icon`]: colored sharing glyph backed by a sharing button
//! - [`timeline`]: embedded timeline of one account

pub mod follow_button;
pub mod sharing_button;
pub mod sharing_icon;
pub mod timeline;

pub use follow_button::FollowButton;
pub use sharing_button::SharingButton;
pub use sharing_icon::SharingIcon;
pub use timeline::{compose_chrome, TimelineWidget};
