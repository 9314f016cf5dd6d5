//! Turn map-sharing links into raw start, end and waypoint text.
//!
//! A link first passes through a [`LinkCanonicalizer`] that follows
//! shortener redirects. The canonical URL is then offered to a
//! [`DecoderChain`]; the first [`LinkDecoder`] that recognises its convention
//! produces the [`ParsedLink`]. Provider-internal coordinates embedded in the
//! URL can be recovered with [`extract_embedded_coordinates`] when geocoding
//! the textual endpoints fails.

mod canonical;
mod chain;
mod decoder;
mod embedded;
mod error;

pub use canonical::{LinkCanonicalizer, SHORT_LINK_MARKERS, needs_resolution};
pub use chain::DecoderChain;
pub use decoder::{ApiParamsDecoder, DirPathDecoder, LinkDecoder, SaddrDaddrDecoder};
pub use embedded::extract_embedded_coordinates;
pub use error::LinkError;

use serde::{Deserialize, Serialize};

/// URL convention a [`ParsedLink`] was decoded from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LinkFormat {
    /// `?api=1&origin=..&destination=..`
    #[serde(rename = "api=1")]
    ApiParams,
    /// `/maps/dir/<start>/<waypoint>.../<end>`
    #[serde(rename = "dir-path")]
    DirPath,
    /// Legacy `?saddr=..&daddr=..`
    #[serde(rename = "saddr-daddr")]
    SaddrDaddr,
}

impl LinkFormat {
    /// Provenance tag reported alongside decoded links.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ApiParams => "api=1",
            Self::DirPath => "dir-path",
            Self::SaddrDaddr => "saddr-daddr",
        }
    }
}

impl std::fmt::Display for LinkFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unresolved endpoints extracted from a canonical link by exactly one decoder.
///
/// # Examples
/// ```
/// use routexplore_core::link::{DecoderChain, LinkFormat};
///
/// # fn main() -> Result<(), routexplore_core::link::LinkError> {
/// let parsed = DecoderChain::standard().decode("https://www.google.com/maps/dir/Thrissur/Kochi")?;
/// assert_eq!(parsed.start, "Thrissur");
/// assert_eq!(parsed.end, "Kochi");
/// assert!(parsed.waypoints.is_empty());
/// assert_eq!(parsed.format, LinkFormat::DirPath);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedLink {
    /// Raw start text.
    pub start: String,
    /// Raw end text.
    pub end: String,
    /// Raw intermediate stops in visiting order.
    pub waypoints: Vec<String>,
    /// Decoder that produced this link.
    #[serde(rename = "parsedFrom")]
    pub format: LinkFormat,
}
