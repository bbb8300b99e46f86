use super::{
    attributes::Attributes,
    diagnostics::{BoundsCorrection, Diagnostics, LogDiagnostics},
};

/// A formatting element (e.g. `<strong>`, `<a>`, `<em>`, markdown `_`) within a document.
///
/// Positions are signed so that out-of-range input can be represented and
/// corrected. Construction guarantees `start >= 0`, and `start <= end` unless
/// both inputs were negative: a negative `end` is left as given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattingElement {
    tag: String,
    start: i64,
    end: i64,
    attributes: Option<Attributes>,
    self_closing: bool,
}

impl FormattingElement {
    /// Creates an element, reporting bound corrections through [`LogDiagnostics`].
    pub fn new(tag: impl Into<String>, start: i64, end: i64) -> Self {
        Self::new_reporting(tag, start, end, &mut LogDiagnostics)
    }

    /// Creates an element, reporting bound corrections to `diagnostics`.
    pub fn new_reporting(
        tag: impl Into<String>,
        start: i64,
        end: i64,
        diagnostics: &mut dyn Diagnostics,
    ) -> Self {
        let tag = tag.into();
        let (mut start, mut end) = (start, end);

        if end < start {
            std::mem::swap(&mut start, &mut end);
            diagnostics.warn(BoundsCorrection::Swapped { tag: tag.clone() });
        }

        if start < 0 {
            start = 0;
            diagnostics.warn(BoundsCorrection::ClampedStart { tag: tag.clone() });
        }

        Self {
            tag,
            start,
            end,
            attributes: None,
            self_closing: false,
        }
    }

    pub fn with_attributes(mut self, attributes: Attributes) -> Self {
        self.attributes = Some(attributes);
        self
    }

    pub fn self_closing(mut self, self_closing: bool) -> Self {
        self.self_closing = self_closing;
        self
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn start(&self) -> i64 {
        self.start
    }

    pub fn end(&self) -> i64 {
        self.end
    }

    pub fn attributes(&self) -> Option<&Attributes> {
        self.attributes.as_ref()
    }

    pub fn is_self_closing(&self) -> bool {
        self.self_closing
    }

    /// Renders the element around `content`.
    ///
    /// Self-closing elements render as `<tag attrs/>` and ignore `content`.
    pub fn to_html(&self, content: &str) -> String {
        let attrs = self
            .attributes
            .as_ref()
            .map(Attributes::to_html_string)
            .unwrap_or_default();

        if self.self_closing {
            return format!("<{}{attrs}/>", self.tag);
        }
        format!("<{tag}{attrs}>{content}</{tag}>", tag = self.tag)
    }

    pub fn to_html_empty(&self) -> String {
        self.to_html("")
    }
}
