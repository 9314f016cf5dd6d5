//! Short-link detection and the redirect-following capability contract.

use async_trait::async_trait;

/// Hostnames and path fragments of known link shorteners.
pub const SHORT_LINK_MARKERS: &[&str] = &[
    "maps.app.goo.gl",
    "goo.gl/maps",
    "shorturl.at",
    "bit.ly",
];

const DIR_PATH_MARKER: &str = "/maps/dir/";
const API_MARKER: &str = "api=1";

/// Whether `link` should be followed through its redirects before decoding.
///
/// Known shorteners always qualify. A link that carries neither the
/// directions path nor the `api=1` marker is also treated as a possible short
/// link, since its format cannot be recognised as-is.
///
/// # Examples
/// ```
/// use routexplore_core::link::needs_resolution;
///
/// assert!(needs_resolution("https://maps.app.goo.gl/abc123"));
/// assert!(!needs_resolution("https://www.google.com/maps/dir/Thrissur/Kochi"));
/// assert!(!needs_resolution("https://www.google.com/maps/dir/?api=1&origin=A&destination=B"));
/// assert!(needs_resolution("https://maps.google.com/?saddr=A&daddr=B"));
/// ```
#[must_use]
pub fn needs_resolution(link: &str) -> bool {
    let lower = link.to_lowercase();
    SHORT_LINK_MARKERS
        .iter()
        .any(|marker| lower.contains(marker))
        || (!lower.contains(DIR_PATH_MARKER) && !lower.contains(API_MARKER))
}

/// Resolve a possibly shortened link to its final destination URL.
///
/// Implementations never fail: when resolution is unnecessary or the
/// transport errors, the original link is returned unchanged.
#[async_trait]
pub trait LinkCanonicalizer: Send + Sync {
    /// Return the canonical form of `link`.
    async fn canonicalize(&self, link: &str) -> String;
}
