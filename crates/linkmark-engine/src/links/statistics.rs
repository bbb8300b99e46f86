use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::sync::OnceLock;

use super::{
    classify::classify_with,
    link_type::LinkType,
    url_helper::{UrlHelper, WebUrlHelper},
};

/// Whether a link passes ranking signals, based on its `rel` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Follow {
    Dofollow,
    Nofollow,
}

impl fmt::Display for Follow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Follow::Dofollow => "dofollow",
            Follow::Nofollow => "nofollow",
        })
    }
}

/// Counts for a single [`LinkType`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FollowCounts {
    pub total: usize,
    pub dofollow: usize,
    pub nofollow: usize,
}

/// An anchor found in a text together with its classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassifiedLink<'a> {
    /// The full `<a ...>...</a>` markup.
    pub anchor: &'a str,
    pub link_type: LinkType,
    pub follow: Follow,
}

/// Classifies every anchor in `text` relative to `permalink` using [`WebUrlHelper`].
pub fn classify_anchors<'a>(
    text: &'a str,
    permalink: &'a str,
) -> impl Iterator<Item = ClassifiedLink<'a>> {
    classify_anchors_with(&WebUrlHelper, text, permalink)
}

/// Classifies every anchor in `text`, in document order.
pub fn classify_anchors_with<'a, H: UrlHelper + ?Sized>(
    helper: &'a H,
    text: &'a str,
    permalink: &'a str,
) -> impl Iterator<Item = ClassifiedLink<'a>> {
    find_anchors(text)
        .into_iter()
        .map(move |anchor| ClassifiedLink {
            anchor,
            link_type: classify_with(helper, anchor, permalink),
            follow: follow_type(anchor),
        })
}

/// Link counts for a whole text, grouped by [`LinkType`] and [`Follow`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LinkStatistics {
    pub total: usize,
    pub internal: FollowCounts,
    pub external: FollowCounts,
    pub other: FollowCounts,
}

impl LinkStatistics {
    /// Counts every anchor in `text`, classified relative to `permalink`.
    pub fn collect(text: &str, permalink: &str) -> Self {
        Self::collect_with(&WebUrlHelper, text, permalink)
    }

    pub fn collect_with<H: UrlHelper + ?Sized>(helper: &H, text: &str, permalink: &str) -> Self {
        let stats: Self = classify_anchors_with(helper, text, permalink).collect();
        log::debug!(
            "Counted {} links ({} internal, {} external, {} other)",
            stats.total,
            stats.internal.total,
            stats.external.total,
            stats.other.total
        );
        stats
    }

    pub fn record(&mut self, link_type: LinkType, follow: Follow) {
        self.total += 1;
        let counts = self.get_mut(link_type);
        counts.total += 1;
        match follow {
            Follow::Dofollow => counts.dofollow += 1,
            Follow::Nofollow => counts.nofollow += 1,
        }
    }

    pub fn get(&self, link_type: LinkType) -> FollowCounts {
        match link_type {
            LinkType::Internal => self.internal,
            LinkType::External => self.external,
            LinkType::Other => self.other,
        }
    }

    fn get_mut(&mut self, link_type: LinkType) -> &mut FollowCounts {
        match link_type {
            LinkType::Internal => &mut self.internal,
            LinkType::External => &mut self.external,
            LinkType::Other => &mut self.other,
        }
    }
}

impl<'a> FromIterator<ClassifiedLink<'a>> for LinkStatistics {
    fn from_iter<I: IntoIterator<Item = ClassifiedLink<'a>>>(iter: I) -> Self {
        let mut stats = Self::default();
        for link in iter {
            stats.record(link.link_type, link.follow);
        }
        stats
    }
}

/// Finds all `<a ...>...</a>` elements in `text`, in document order.
///
/// Anchors spanning multiple lines are not matched.
pub fn find_anchors(text: &str) -> Vec<&str> {
    static ANCHOR_REGEX: OnceLock<Regex> = OnceLock::new();
    let anchor_regex = ANCHOR_REGEX
        .get_or_init(|| Regex::new(r"(?i)<a(?:[^>]+)>(.*?)</a>").expect("Invalid anchor regex"));

    anchor_regex.find_iter(text).map(|m| m.as_str()).collect()
}

/// Returns [`Follow::Nofollow`] when the anchor's `rel` lists `nofollow`.
pub fn follow_type(anchor: &str) -> Follow {
    static REL_REGEX: OnceLock<Regex> = OnceLock::new();
    let rel_regex = REL_REGEX.get_or_init(|| {
        Regex::new(r#"(?i)\brel=(?:"([^"]*)"|'([^']*)')"#).expect("Invalid rel regex")
    });

    let nofollow = rel_regex
        .captures(anchor)
        .and_then(|caps| caps.get(1).or_else(|| caps.get(2)))
        .is_some_and(|rel| {
            rel.as_str()
                .split_whitespace()
                .any(|token| token.eq_ignore_ascii_case("nofollow"))
        });

    if nofollow {
        Follow::Nofollow
    } else {
        Follow::Dofollow
    }
}
