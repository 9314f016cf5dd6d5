//! Facade crate for routexplore.
//!
//! This crate re-exports the core domain types and, behind the default `http`
//! feature, the HTTP adapters that back the itinerary pipeline.

#![forbid(unsafe_code)]

pub use routexplore_core::{
    Coordinate, CoordinateError, Endpoint, EndpointRole, ErrorClass, GenerateRouteRequest,
    Itinerary, ItineraryError, ItineraryPipeline, LinkMeta, ResolveLinkOptions, Waypoint,
    geocoding, itinerary, link, routing,
};

#[cfg(feature = "http")]
pub use routexplore_data::{
    HttpItineraryPipeline, HttpLinkCanonicalizer, HttpProviderSettings, NominatimGeocoder,
    OsrmRouteProvider, ProviderBuildError,
};
