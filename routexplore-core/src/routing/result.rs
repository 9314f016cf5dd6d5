//! Provider-neutral route results.

use geo::LineString;
use serde::{Serialize, Serializer, ser::SerializeStruct};

use crate::Coordinate;

use super::error::RoutingError;
use super::profile::{GeometryEncoding, RoutingProfile};

/// A route's path in one of the supported encodings.
#[derive(Debug, Clone, PartialEq)]
pub enum RouteGeometry {
    /// Positions with `x = lng` and `y = lat`.
    GeoJson(LineString<f64>),
    /// Encoded polyline, precision 5.
    Polyline(String),
    /// Encoded polyline, precision 6.
    Polyline6(String),
}

impl RouteGeometry {
    /// Encoding this geometry is expressed in.
    #[must_use]
    pub const fn encoding(&self) -> GeometryEncoding {
        match self {
            Self::GeoJson(_) => GeometryEncoding::GeoJson,
            Self::Polyline(_) => GeometryEncoding::Polyline,
            Self::Polyline6(_) => GeometryEncoding::Polyline6,
        }
    }

    /// Build an encoded geometry for a polyline encoding.
    ///
    /// Returns `None` for [`GeometryEncoding::GeoJson`], which is not a
    /// string encoding.
    #[must_use]
    pub fn encoded(encoding: GeometryEncoding, encoded: String) -> Option<Self> {
        match encoding {
            GeometryEncoding::GeoJson => None,
            GeometryEncoding::Polyline => Some(Self::Polyline(encoded)),
            GeometryEncoding::Polyline6 => Some(Self::Polyline6(encoded)),
        }
    }
}

/// GeoJSON objects carry `[lng, lat]` positions; encoded polylines are
/// written as plain strings.
impl Serialize for RouteGeometry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::GeoJson(line) => {
                let positions: Vec<[f64; 2]> =
                    line.coords().map(|coord| [coord.x, coord.y]).collect();
                let mut object = serializer.serialize_struct("LineString", 2)?;
                object.serialize_field("type", "LineString")?;
                object.serialize_field("coordinates", &positions)?;
                object.end()
            }
            Self::Polyline(encoded) | Self::Polyline6(encoded) => {
                serializer.serialize_str(encoded)
            }
        }
    }
}

/// Normalised route returned by a [`crate::routing::RouteProvider`].
///
/// Distances are whole metres and durations whole seconds. For GeoJSON
/// geometry, `coordinates` holds one validated [`Coordinate`] per position of
/// the line string; for encoded polylines, or when the provider returned no
/// geometry, it is empty and `geometry` serialises as `null`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteResult {
    provider: String,
    profile: RoutingProfile,
    distance_meters: u64,
    duration_seconds: u64,
    geometry_encoding: GeometryEncoding,
    geometry: Option<RouteGeometry>,
    coordinates: Vec<Coordinate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    request_url: Option<String>,
}

impl RouteResult {
    /// Normalise a provider's first route candidate.
    ///
    /// Distance and duration are rounded to the nearest integer; negative or
    /// non-finite values become zero.
    ///
    /// # Errors
    ///
    /// Returns [`RoutingError::InvalidGeometry`] when a GeoJSON position is
    /// not a valid coordinate.
    ///
    /// # Examples
    /// ```
    /// use geo::LineString;
    /// use routexplore_core::routing::{RouteGeometry, RouteResult, RoutingProfile};
    ///
    /// # fn main() -> Result<(), routexplore_core::routing::RoutingError> {
    /// let line = LineString::from(vec![(76.2144, 10.5276), (76.2673, 9.9312)]);
    /// let route = RouteResult::new("osrm", RoutingProfile::Driving, 81_234.6, 5_400.4,
    ///     RouteGeometry::GeoJson(line))?;
    /// assert_eq!(route.distance_meters(), 81_235);
    /// assert_eq!(route.duration_seconds(), 5_400);
    /// assert_eq!(route.coordinates().len(), 2);
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(
        provider: impl Into<String>,
        profile: RoutingProfile,
        distance_meters: f64,
        duration_seconds: f64,
        geometry: RouteGeometry,
    ) -> Result<Self, RoutingError> {
        let coordinates = match &geometry {
            RouteGeometry::GeoJson(line) => flatten_line(line)?,
            RouteGeometry::Polyline(_) | RouteGeometry::Polyline6(_) => Vec::new(),
        };
        Ok(Self {
            provider: provider.into(),
            profile,
            distance_meters: round_metric(distance_meters),
            duration_seconds: round_metric(duration_seconds),
            geometry_encoding: geometry.encoding(),
            geometry: Some(geometry),
            coordinates,
            request_url: None,
        })
    }

    /// A route whose provider reported no path geometry.
    ///
    /// Distance and duration are rounded as in [`Self::new`]; `encoding`
    /// records what was requested.
    #[must_use]
    pub fn without_geometry(
        provider: impl Into<String>,
        profile: RoutingProfile,
        distance_meters: f64,
        duration_seconds: f64,
        encoding: GeometryEncoding,
    ) -> Self {
        Self {
            provider: provider.into(),
            profile,
            distance_meters: round_metric(distance_meters),
            duration_seconds: round_metric(duration_seconds),
            geometry_encoding: encoding,
            geometry: None,
            coordinates: Vec::new(),
            request_url: None,
        }
    }

    /// Record the provider URL that produced this route.
    #[must_use]
    pub fn with_request_url(mut self, url: impl Into<String>) -> Self {
        self.request_url = Some(url.into());
        self
    }

    /// Name of the routing provider.
    #[must_use]
    pub fn provider(&self) -> &str {
        &self.provider
    }

    /// Profile the route was computed for.
    #[must_use]
    pub const fn profile(&self) -> RoutingProfile {
        self.profile
    }

    /// Length in whole metres.
    #[must_use]
    pub const fn distance_meters(&self) -> u64 {
        self.distance_meters
    }

    /// Travel time in whole seconds.
    #[must_use]
    pub const fn duration_seconds(&self) -> u64 {
        self.duration_seconds
    }

    /// The route path, when the provider returned one.
    #[must_use]
    pub const fn geometry(&self) -> Option<&RouteGeometry> {
        self.geometry.as_ref()
    }

    /// Encoding of the route path.
    #[must_use]
    pub const fn geometry_encoding(&self) -> GeometryEncoding {
        self.geometry_encoding
    }

    /// Flattened positions of a GeoJSON geometry.
    #[must_use]
    pub fn coordinates(&self) -> &[Coordinate] {
        &self.coordinates
    }

    /// Provider request URL, when recorded.
    #[must_use]
    pub fn request_url(&self) -> Option<&str> {
        self.request_url.as_deref()
    }
}

fn flatten_line(line: &LineString<f64>) -> Result<Vec<Coordinate>, RoutingError> {
    line.coords()
        .map(|coord| {
            Coordinate::try_from(*coord).map_err(|err| RoutingError::InvalidGeometry {
                message: err.to_string(),
            })
        })
        .collect()
}

#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "value is rounded, finite and non-negative; saturating cast is intended"
)]
fn round_metric(value: f64) -> u64 {
    if value.is_finite() && value > 0.0 {
        value.round() as u64
    } else {
        0
    }
}
