use regex::Regex;
use std::sync::OnceLock;
use url::Url;

/// URL utilities consumed by the link classifier.
///
/// Implementations must be total: malformed input yields `None`/`false`
/// rather than an error, so classification never fails.
pub trait UrlHelper {
    /// Extracts the `href` target from anchor markup such as `<a href="/x">`.
    fn anchor_url(&self, markup: &str) -> Option<String>;

    /// Returns the scheme with its trailing colon (`"https:"`), or `None` for
    /// relative, protocol-relative and empty URLs.
    fn protocol(&self, url: &str) -> Option<String>;

    /// Returns the hostname of `url` without any port.
    fn hostname(&self, url: &str) -> Option<String>;

    /// Returns true when `url` points at `hostname` or is relative to it.
    fn is_internal_link(&self, url: &str, hostname: Option<&str>) -> bool;
}

/// [`UrlHelper`] backed by the WHATWG parser from the `url` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct WebUrlHelper;

impl WebUrlHelper {
    pub const FRAGMENT: char = '#';
    const PROTOCOL_RELATIVE: &'static str = "//";

    /// Parses absolute and protocol-relative (`//host/path`) URLs.
    fn parse(url: &str) -> Option<Url> {
        if url.starts_with(Self::PROTOCOL_RELATIVE) {
            return Url::parse(&format!("http:{url}")).ok();
        }
        Url::parse(url).ok()
    }

    /// Reads the scheme from the start of `url` without validating the rest.
    fn scheme(url: &str) -> Option<&str> {
        static SCHEME_REGEX: OnceLock<Regex> = OnceLock::new();
        let scheme_regex = SCHEME_REGEX.get_or_init(|| {
            Regex::new(r"^([a-zA-Z][a-zA-Z0-9+.\-]*):").expect("Invalid scheme regex")
        });

        scheme_regex
            .captures(url)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
    }

    /// Host including a non-default port, e.g. `example.com:8080`.
    fn host(url: &Url) -> Option<String> {
        let host = url.host_str()?;
        Some(match url.port() {
            Some(port) => format!("{host}:{port}"),
            None => host.to_string(),
        })
    }
}

impl UrlHelper for WebUrlHelper {
    fn anchor_url(&self, markup: &str) -> Option<String> {
        static HREF_REGEX: OnceLock<Regex> = OnceLock::new();
        let href_regex = HREF_REGEX.get_or_init(|| {
            Regex::new(r#"(?i)href=(?:"([^"']+)"|'([^"']+)')"#).expect("Invalid href regex")
        });

        let caps = href_regex.captures(markup)?;
        caps.get(1)
            .or_else(|| caps.get(2))
            .map(|m| m.as_str().to_string())
    }

    fn protocol(&self, url: &str) -> Option<String> {
        Self::scheme(url).map(|scheme| format!("{}:", scheme.to_ascii_lowercase()))
    }

    fn hostname(&self, url: &str) -> Option<String> {
        Self::parse(url)?.host_str().map(str::to_string)
    }

    fn is_internal_link(&self, url: &str, hostname: Option<&str>) -> bool {
        // Root-relative path such as `/about`
        if url.starts_with('/') && !url.contains(Self::PROTOCOL_RELATIVE) {
            return true;
        }
        if url.starts_with(Self::FRAGMENT) {
            return false;
        }

        match Self::parse(url).as_ref().and_then(Self::host) {
            Some(host) => hostname == Some(host.as_str()),
            // A path relative to the current page; absolute URLs that fail to
            // parse never match the page host
            None => Self::scheme(url).is_none() && !url.starts_with(Self::PROTOCOL_RELATIVE),
        }
    }
}
