//! Recover coordinates that map providers embed inside their URLs.
//!
//! Google encodes the markers of a directions link in its `data=` blob as
//! consecutive `!1d<lng>!2d<lat>` tokens. These are used as a last resort
//! when a textual endpoint cannot be geocoded.

use std::sync::LazyLock;

use regex::Regex;

use crate::Coordinate;

#[expect(
    clippy::expect_used,
    reason = "the pattern is a constant and is covered by unit tests"
)]
static LNG_LAT_MOTIF: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"!1d(-?\d+(?:\.\d+)?)!2d(-?\d+(?:\.\d+)?)").expect("motif pattern compiles")
});

/// Scan `url` for embedded `!1d<lng>!2d<lat>` pairs in order of appearance.
///
/// Pairs that fail coordinate validation are skipped.
///
/// # Examples
/// ```
/// use routexplore_core::link::extract_embedded_coordinates;
///
/// let url = "https://www.google.com/maps/dir/A/B/data=!4m6!4m5!1m1!1s0x0:0x1!2m2!1d76.2144!2d10.5276";
/// let found = extract_embedded_coordinates(url);
/// assert_eq!(found.len(), 1);
/// assert_eq!(found[0].lat(), 10.5276);
/// assert_eq!(found[0].lng(), 76.2144);
/// ```
#[must_use]
pub fn extract_embedded_coordinates(url: &str) -> Vec<Coordinate> {
    LNG_LAT_MOTIF
        .captures_iter(url)
        .filter_map(|captures| {
            let lng = captures.get(1)?.as_str().parse::<f64>().ok()?;
            let lat = captures.get(2)?.as_str().parse::<f64>().ok()?;
            Coordinate::new(lat, lng).ok()
        })
        .collect()
}
