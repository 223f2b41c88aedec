//! Favicon resolution helpers for result rows.
//!
//! The host exposes a favicon endpoint that resolves a page URL to an icon
//! image at a requested pixel size. The core only builds the reference
//! string; fetching and rendering are the shell's concern.

use url::Url;

/// Static placeholder shown when a row has no URL to resolve against.
pub const PLACEHOLDER_ICON: &str = "images/blank.png";

/// Builds icon references against the host's favicon endpoint.
#[derive(Debug, Clone)]
pub struct FaviconResolver {
    endpoint: Url,
}

impl FaviconResolver {
    pub fn new(endpoint: Url) -> Self {
        Self { endpoint }
    }

    /// Resolver reference for a page URL at the given pixel size, or the
    /// placeholder path when the page URL is empty.
    pub fn resolve(&self, page_url: &str, size: u32) -> String {
        if page_url.is_empty() {
            return PLACEHOLDER_ICON.to_string();
        }
        let mut reference = self.endpoint.clone();
        reference
            .query_pairs_mut()
            .append_pair("pageUrl", page_url)
            .append_pair("size", &size.to_string());
        reference.to_string()
    }
}

/// Display form of a URL: scheme prefix and one trailing slash removed.
pub fn strip_protocol(url: &str) -> String {
    let rest = url.split_once("://").map_or(url, |(_, rest)| rest);
    rest.strip_suffix('/').unwrap_or(rest).to_string()
}
