//! Degrading front for a [`Geocoder`].

use crate::{Coordinate, parse_coordinate_pair};

use super::provider::Geocoder;

/// Resolves endpoint text to coordinates and coordinates to labels.
///
/// Neither direction ever fails: provider errors are logged at `warn` and
/// reported as "no answer" so the caller can try its next fallback.
#[derive(Debug, Clone)]
pub struct GeocodingResolver<G> {
    geocoder: G,
}

impl<G: Geocoder> GeocodingResolver<G> {
    /// Wrap `geocoder`.
    #[must_use]
    pub const fn new(geocoder: G) -> Self {
        Self { geocoder }
    }

    /// Borrow the underlying provider.
    #[must_use]
    pub const fn geocoder(&self) -> &G {
        &self.geocoder
    }

    /// Coordinates for a place name or `"lat,lng"` text.
    ///
    /// Text that already parses as a coordinate pair is returned without
    /// contacting the provider. Blank text yields `None`.
    pub async fn resolve_coordinates(&self, input: &str) -> Option<Coordinate> {
        if let Ok(coordinate) = parse_coordinate_pair(input) {
            return Some(coordinate);
        }
        let query = normalise_query(input);
        if query.is_empty() {
            return None;
        }
        match self.geocoder.search(&query).await {
            Ok(found) => {
                if found.is_none() {
                    log::debug!("no geocoding match for {query:?}");
                }
                found
            }
            Err(err) => {
                log::warn!("geocoding {query:?} failed: {err}");
                None
            }
        }
    }

    /// Concise human label for `coordinate`, or `None` when the provider has
    /// nothing usable.
    pub async fn resolve_label(&self, coordinate: Coordinate) -> Option<String> {
        match self.geocoder.reverse(coordinate).await {
            Ok(found) => found.and_then(|reverse| reverse.label()),
            Err(err) => {
                log::warn!("reverse geocoding {coordinate} failed: {err}");
                None
            }
        }
    }
}

/// Turn link-encoded free text into a search query.
///
/// `+` is the form-encoding of a space in map links.
///
/// # Examples
/// ```
/// use routexplore_core::geocoding::normalise_query;
///
/// assert_eq!(normalise_query("  Fort+Kochi "), "Fort Kochi");
/// ```
#[must_use]
pub fn normalise_query(input: &str) -> String {
    input.replace('+', " ").trim().to_owned()
}
