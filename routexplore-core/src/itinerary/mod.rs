//! The `resolve-link` and `generate-route` orchestrators.
//!
//! [`ItineraryPipeline`] sequences the link, geocoding and routing stages
//! for one request at a time. It holds no mutable state, so a single
//! pipeline can serve concurrent requests.

mod error;
mod pipeline;
mod request;

pub use error::{ErrorClass, ItineraryError};
pub use pipeline::ItineraryPipeline;
pub use request::{GenerateRouteRequest, ResolveLinkOptions};

use serde::Serialize;

use crate::link::LinkFormat;
use crate::routing::RouteResult;
use crate::{Endpoint, Waypoint};

/// Where a link-derived itinerary came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkMeta {
    /// The link as supplied by the caller.
    pub input_link: String,
    /// The link after following redirects.
    pub final_url: String,
    /// Decoder that recognised the link.
    pub parsed_from: LinkFormat,
}

/// Terminal result of either orchestrator.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Itinerary {
    /// Origin.
    pub start: Endpoint,
    /// Destination.
    pub end: Endpoint,
    /// Intermediate stops as supplied; link waypoints stay unresolved text.
    pub waypoints: Vec<Waypoint>,
    /// Routed path, when routing was requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub route: Option<RouteResult>,
    /// Provenance for link-derived itineraries.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<LinkMeta>,
}
