use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Classification of a hyperlink relative to the page it appears on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkType {
    /// Non-web scheme (`mailto:`, `tel:`, `javascript:`) or an in-page `#fragment`.
    Other,
    /// Same host as the page, or a relative URL.
    Internal,
    /// Web URL on a different host.
    External,
}

impl LinkType {
    pub const ALL: [LinkType; 3] = [LinkType::Other, LinkType::Internal, LinkType::External];

    pub fn as_str(self) -> &'static str {
        match self {
            LinkType::Other => "other",
            LinkType::Internal => "internal",
            LinkType::External => "external",
        }
    }
}

impl fmt::Display for LinkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown link type '{0}', expected one of: other, internal, external")]
pub struct ParseLinkTypeError(pub String);

impl FromStr for LinkType {
    type Err = ParseLinkTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LinkType::ALL
            .into_iter()
            .find(|link_type| link_type.as_str() == s)
            .ok_or_else(|| ParseLinkTypeError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_uses_lowercase_labels() {
        assert_eq!(LinkType::Other.to_string(), "other");
        assert_eq!(LinkType::Internal.to_string(), "internal");
        assert_eq!(LinkType::External.to_string(), "external");
    }

    #[test]
    fn parses_every_label_back() {
        for link_type in LinkType::ALL {
            assert_eq!(link_type.as_str().parse::<LinkType>(), Ok(link_type));
        }
    }

    #[test]
    fn unknown_label_is_an_error() {
        let err = "Internal".parse::<LinkType>().unwrap_err();
        assert_eq!(err, ParseLinkTypeError("Internal".to_string()));
        assert!(err.to_string().contains("'Internal'"));
    }
}
