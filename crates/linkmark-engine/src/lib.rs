pub mod formatting;
pub mod links;

// Re-export key types for easier usage
pub use formatting::{
    Attributes, BoundsCorrection, Diagnostics, FormattingElement, LogDiagnostics,
};
pub use links::{
    ClassifiedLink, Follow, FollowCounts, LinkStatistics, LinkType, ParseLinkTypeError, UrlHelper,
    WebUrlHelper, classify, classify_anchors, classify_anchors_with, classify_with, find_anchors,
    follow_type,
};
