//! Orchestrator inputs.

use serde::{Deserialize, Serialize};

use crate::routing::{GeometryEncoding, RoutingProfile};
use crate::{RawCoordinate, Waypoint};

/// Options for [`crate::itinerary::ItineraryPipeline::resolve_link`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolveLinkOptions {
    /// Whether to route between the resolved endpoints.
    pub route: bool,
    /// Profile used when routing.
    pub profile: RoutingProfile,
    /// Geometry encoding used when routing.
    pub encoding: GeometryEncoding,
}

impl Default for ResolveLinkOptions {
    fn default() -> Self {
        Self {
            route: true,
            profile: RoutingProfile::default(),
            encoding: GeometryEncoding::default(),
        }
    }
}

/// Input to [`crate::itinerary::ItineraryPipeline::generate_route`].
///
/// Explicit coordinates take precedence over `link`. For each endpoint a
/// valid structured pair wins over the `"lat,lng"` text form.
///
/// # Examples
/// ```
/// use routexplore_core::itinerary::GenerateRouteRequest;
/// use routexplore_core::routing::{GeometryEncoding, RoutingProfile};
///
/// let request: GenerateRouteRequest = serde_json::from_str(
///     r#"{"startCoordinates": {"lat": 10.52, "lng": 76.21}, "end": "9.93,76.26",
///         "travelmode": "walking", "geometry": "polyline"}"#,
/// ).expect("valid request");
/// assert_eq!(request.profile(), RoutingProfile::Walking);
/// assert_eq!(request.encoding(), GeometryEncoding::Polyline);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GenerateRouteRequest {
    /// Structured start coordinate.
    pub start_coordinates: Option<RawCoordinate>,
    /// Structured end coordinate.
    pub end_coordinates: Option<RawCoordinate>,
    /// Start as `"lat,lng"` text.
    pub start: Option<String>,
    /// End as `"lat,lng"` text.
    pub end: Option<String>,
    /// Label for the start endpoint; reverse geocoded when absent.
    pub start_name: Option<String>,
    /// Label for the end endpoint; reverse geocoded when absent.
    pub end_name: Option<String>,
    /// Map link used when explicit coordinates are missing.
    pub link: Option<String>,
    /// Intermediate stops; coordinate-valued ones are routed.
    pub waypoints: Vec<Waypoint>,
    /// Travel mode such as `walking` or `bicycling`.
    #[serde(alias = "travelmode")]
    pub travel_mode: Option<String>,
    /// Geometry encoding: `geojson`, `polyline` or `polyline6`.
    pub geometry: Option<String>,
}

impl GenerateRouteRequest {
    /// Routing profile for the requested travel mode.
    #[must_use]
    pub fn profile(&self) -> RoutingProfile {
        RoutingProfile::from_travel_mode(self.travel_mode.as_deref())
    }

    /// Requested geometry encoding.
    #[must_use]
    pub fn encoding(&self) -> GeometryEncoding {
        GeometryEncoding::from_param(self.geometry.as_deref())
    }

    /// The link, when present and not blank.
    #[must_use]
    pub fn link(&self) -> Option<&str> {
        self.link
            .as_deref()
            .map(str::trim)
            .filter(|link| !link.is_empty())
    }
}
