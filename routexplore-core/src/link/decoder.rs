//! Pure parsers for the map-link conventions recognised by the chain.
//!
//! Each decoder inspects a parsed canonical [`Url`] and either produces a
//! [`ParsedLink`] or declines. Decoders never perform I/O and never combine
//! their results with another decoder's.

use std::borrow::Cow;

use url::Url;

use super::{LinkFormat, ParsedLink};

const WAYPOINT_SEPARATOR: char = '|';
const DIR_SEGMENT: &str = "/dir/";
const VIEWPORT_MARKERS: [char; 2] = ['@', ';'];

/// A single map-link convention.
pub trait LinkDecoder: Send + Sync {
    /// Convention this decoder recognises.
    fn format(&self) -> LinkFormat;

    /// Extract endpoints from `url`, or `None` when the convention does not
    /// apply.
    fn attempt(&self, url: &Url) -> Option<ParsedLink>;
}

/// Decoder for `?api=1&origin=..&destination=..[&waypoints=a|b]` links.
#[derive(Debug, Clone, Copy, Default)]
pub struct ApiParamsDecoder;

impl LinkDecoder for ApiParamsDecoder {
    fn format(&self) -> LinkFormat {
        LinkFormat::ApiParams
    }

    fn attempt(&self, url: &Url) -> Option<ParsedLink> {
        if query_param(url, "api").as_deref() != Some("1") {
            return None;
        }
        let origin = non_empty_param(url, "origin")?;
        let destination = non_empty_param(url, "destination")?;
        Some(ParsedLink {
            start: decode_component(&origin)?,
            end: decode_component(&destination)?,
            waypoints: waypoints_param(url)?,
            format: self.format(),
        })
    }
}

/// Decoder for `/dir/<start>/<waypoint>.../<end>` paths.
///
/// Everything after `/dir/` up to the first `@` (viewport marker) or `;` is
/// split on `/`; the first segment is the start, the last is the end and the
/// interior segments are waypoints in order.
#[derive(Debug, Clone, Copy, Default)]
pub struct DirPathDecoder;

impl LinkDecoder for DirPathDecoder {
    fn format(&self) -> LinkFormat {
        LinkFormat::DirPath
    }

    fn attempt(&self, url: &Url) -> Option<ParsedLink> {
        let path = url.path();
        let after_dir = path
            .find(DIR_SEGMENT)
            .and_then(|index| path.get(index + DIR_SEGMENT.len()..))?;
        let trimmed = after_dir
            .split(VIEWPORT_MARKERS)
            .next()
            .unwrap_or_default();
        let mut segments = trimmed
            .split('/')
            .filter(|segment| !segment.is_empty())
            .map(decode_component)
            .collect::<Option<Vec<_>>>()?;
        if segments.len() < 2 {
            return None;
        }
        let end = segments.pop()?;
        let start = segments.remove(0);
        Some(ParsedLink {
            start,
            end,
            waypoints: segments,
            format: self.format(),
        })
    }
}

/// Decoder for the legacy `?saddr=..&daddr=..[&waypoints=a|b]` convention.
#[derive(Debug, Clone, Copy, Default)]
pub struct SaddrDaddrDecoder;

impl LinkDecoder for SaddrDaddrDecoder {
    fn format(&self) -> LinkFormat {
        LinkFormat::SaddrDaddr
    }

    fn attempt(&self, url: &Url) -> Option<ParsedLink> {
        let saddr = non_empty_param(url, "saddr")?;
        let daddr = non_empty_param(url, "daddr")?;
        Some(ParsedLink {
            start: decode_component(&saddr)?,
            end: decode_component(&daddr)?,
            waypoints: waypoints_param(url)?,
            format: self.format(),
        })
    }
}

/// First value of `key` in the query string.
fn query_param<'a>(url: &'a Url, key: &str) -> Option<Cow<'a, str>> {
    url.query_pairs()
        .find(|(name, _)| name == key)
        .map(|(_, value)| value)
}

fn non_empty_param<'a>(url: &'a Url, key: &str) -> Option<Cow<'a, str>> {
    query_param(url, key).filter(|value| !value.is_empty())
}

/// Pipe-delimited waypoints; an absent parameter yields an empty list.
///
/// Returns `None` only when a segment fails to decode, which rejects the whole
/// link for this decoder.
fn waypoints_param(url: &Url) -> Option<Vec<String>> {
    let Some(raw) = query_param(url, "waypoints") else {
        return Some(Vec::new());
    };
    raw.split(WAYPOINT_SEPARATOR)
        .map(decode_component)
        .filter(|decoded| decoded.as_ref().is_none_or(|value| !value.is_empty()))
        .collect()
}

/// Percent-decode one URL component; `None` when the bytes are not UTF-8.
fn decode_component(raw: &str) -> Option<String> {
    urlencoding::decode(raw).ok().map(Cow::into_owned)
}
