//! # Links
//!
//! Hyperlink classification for HTML text.
//!
//! ## Modules
//!
//! - **`link_type`**: `LinkType` enum (Other, Internal, External)
//! - **`url_helper`**: `UrlHelper` trait plus the `WebUrlHelper` default built on the `url` crate
//! - **`classify`**: `classify()` and `classify_with()` entry points
//! - **`statistics`**: anchor discovery and per-type link counts for a whole text
//!
//! ## Precedence
//!
//! The "other" check (non-web scheme or in-page fragment) always runs before
//! the host comparison, so `#top` is never internal even though it has no host.

pub mod classify;
pub mod link_type;
pub mod statistics;
pub mod url_helper;

pub use classify::{classify, classify_with};
pub use link_type::{LinkType, ParseLinkTypeError};
pub use statistics::{
    ClassifiedLink, Follow, FollowCounts, LinkStatistics, classify_anchors, classify_anchors_with,
    find_anchors, follow_type,
};
pub use url_helper::{UrlHelper, WebUrlHelper};
