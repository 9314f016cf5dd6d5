//! Core domain for turning map links and coordinates into routed itineraries.
//!
//! Parsing and validation here are pure. Network access is expressed as
//! capability traits ([`link::LinkCanonicalizer`], [`geocoding::Geocoder`],
//! [`routing::RouteProvider`]) implemented by adapter crates, and the
//! [`itinerary::ItineraryPipeline`] sequences them per request.

pub mod coordinate;
pub mod endpoint;
pub mod geocoding;
pub mod itinerary;
pub mod link;
pub mod routing;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use coordinate::{
    Coordinate, CoordinateError, CoordinateInput, RawCoordinate, is_valid_coordinate,
    parse_coordinate_pair,
};
pub use endpoint::{Endpoint, EndpointRole, Waypoint};
pub use itinerary::{
    ErrorClass, GenerateRouteRequest, Itinerary, ItineraryError, ItineraryPipeline, LinkMeta,
    ResolveLinkOptions,
};
