//! Size guide feature slice.
//!
//! Renders the storefront "Size Guide" page from the static catalog in
//! [`atelier_domain::catalog`]: a doll size chart, measurement tips, sizing notes and a
//! call to action pointing at the contact page.
//!
//! ## Example
//! ```rust,ignore
//! use atelier_size_guide::{SizeGuidePage, STYLESHEET};
//!
//! // Inject `STYLESHEET` into the document head, then mount the page as the root.
//! dioxus::launch(SizeGuidePage);
//! ```

mod icon;
mod motion;
mod page;
mod styles;

pub use crate::icon::{Icon, icon_paths};
pub use crate::motion::{Effect, Motion, Reveal, Trigger, use_motion};
pub use crate::page::{CONTACT_HREF, SizeGuidePage};
pub use crate::styles::STYLESHEET;
pub use atelier_domain::config::MotionConfig;
