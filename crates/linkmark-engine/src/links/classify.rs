use super::{
    link_type::LinkType,
    url_helper::{UrlHelper, WebUrlHelper},
};

const WEB_PROTOCOLS: [&str; 2] = ["http:", "https:"];

/// Classifies the link in `anchor_markup` relative to `page_url` using
/// [`WebUrlHelper`].
///
/// ```
/// use linkmark_engine::{LinkType, classify};
///
/// let page = "https://example.com/blog/";
/// assert_eq!(classify(r#"<a href="/about">About</a>"#, page), LinkType::Internal);
/// assert_eq!(classify(r#"<a href="https://rust-lang.org">Rust</a>"#, page), LinkType::External);
/// assert_eq!(classify(r#"<a href="mailto:me@example.com">Mail</a>"#, page), LinkType::Other);
/// ```
pub fn classify(anchor_markup: &str, page_url: &str) -> LinkType {
    classify_with(&WebUrlHelper, anchor_markup, page_url)
}

/// Classifies the link in `anchor_markup` relative to `page_url`.
///
/// A link is [`LinkType::Other`] when its protocol is present but is not
/// `http:`/`https:`, or when it is an in-page fragment (`#...`). A missing
/// protocol does not make a link "other"; relative URLs fall through to the
/// host comparison.
pub fn classify_with<H: UrlHelper + ?Sized>(
    helper: &H,
    anchor_markup: &str,
    page_url: &str,
) -> LinkType {
    let anchor_url = helper.anchor_url(anchor_markup).unwrap_or_default();
    let protocol = helper.protocol(&anchor_url);

    let non_web_protocol = protocol
        .as_deref()
        .is_some_and(|p| !WEB_PROTOCOLS.contains(&p));
    if non_web_protocol || anchor_url.starts_with(WebUrlHelper::FRAGMENT) {
        return LinkType::Other;
    }

    let page_host = helper.hostname(page_url);
    if helper.is_internal_link(&anchor_url, page_host.as_deref()) {
        return LinkType::Internal;
    }

    LinkType::External
}
