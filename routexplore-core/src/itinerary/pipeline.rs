//! Request-scoped sequencing of canonicalisation, decoding, geocoding and
//! routing.

use futures_util::join;

use crate::endpoint::EndpointRole;
use crate::geocoding::{Geocoder, GeocodingResolver};
use crate::link::{DecoderChain, LinkCanonicalizer, extract_embedded_coordinates};
use crate::routing::{RouteProvider, RouteRequest, RouteResult};
use crate::{
    Coordinate, CoordinateError, CoordinateInput, Endpoint, RawCoordinate, Waypoint,
    parse_coordinate_pair,
};

use super::error::ItineraryError;
use super::request::{GenerateRouteRequest, ResolveLinkOptions};
use super::{Itinerary, LinkMeta};

/// Both orchestrators over injected providers.
///
/// # Examples
/// ```
/// use routexplore_core::itinerary::{ItineraryPipeline, ResolveLinkOptions};
/// use routexplore_core::test_support::{
///     StubCanonicalizer, StubGeocoder, StubRouteProvider, block_on_for_tests,
/// };
///
/// let pipeline = ItineraryPipeline::new(
///     StubCanonicalizer::identity(),
///     StubGeocoder::default(),
///     StubRouteProvider::straight_line(),
/// );
/// let options = ResolveLinkOptions { route: false, ..ResolveLinkOptions::default() };
/// let itinerary = block_on_for_tests(pipeline.resolve_link(
///     "https://www.google.com/maps/dir/10.52,76.21/9.93,76.26",
///     &options,
/// ))
/// .expect("coordinate endpoints resolve without a geocoder");
/// assert!(itinerary.start.is_routable());
/// assert!(itinerary.route.is_none());
/// ```
#[derive(Debug)]
pub struct ItineraryPipeline<L, G, R> {
    canonicalizer: L,
    resolver: GeocodingResolver<G>,
    router: R,
    decoders: DecoderChain,
}

impl<L, G, R> ItineraryPipeline<L, G, R>
where
    L: LinkCanonicalizer,
    G: Geocoder,
    R: RouteProvider,
{
    /// Assemble a pipeline using the standard decoder chain.
    #[must_use]
    pub fn new(canonicalizer: L, geocoder: G, router: R) -> Self {
        Self {
            canonicalizer,
            resolver: GeocodingResolver::new(geocoder),
            router,
            decoders: DecoderChain::standard(),
        }
    }

    /// The link canonicaliser.
    #[must_use]
    pub const fn canonicalizer(&self) -> &L {
        &self.canonicalizer
    }

    /// The geocoding provider.
    #[must_use]
    pub const fn geocoder(&self) -> &G {
        self.resolver.geocoder()
    }

    /// The routing provider.
    #[must_use]
    pub const fn router(&self) -> &R {
        &self.router
    }

    /// Resolve a map link into endpoints, waypoints and an optional route.
    ///
    /// Start and end are geocoded concurrently. An endpoint that cannot be
    /// geocoded falls back to coordinates embedded in the canonical URL: the
    /// first embedded pair for the start, the second (or else the first) for
    /// the end. Waypoints are returned as unresolved text.
    ///
    /// # Errors
    ///
    /// - [`ItineraryError::UnrecognizedLinkFormat`] when no decoder matches.
    /// - [`ItineraryError::MissingCoordinates`] when routing is requested and
    ///   an endpoint has no coordinates.
    /// - [`ItineraryError::RoutingFailed`] when the routing provider fails.
    pub async fn resolve_link(
        &self,
        link: &str,
        options: &ResolveLinkOptions,
    ) -> Result<Itinerary, ItineraryError> {
        let mut itinerary = self.locate(link, Pins::default()).await?;
        if options.route {
            let request = routable(&itinerary, std::iter::empty())?
                .with_profile(options.profile)
                .with_encoding(options.encoding);
            itinerary.route = Some(self.route(&request).await?);
        }
        Ok(itinerary)
    }

    /// Route between explicit coordinates, or between a link's endpoints.
    ///
    /// Valid explicit coordinates for both endpoints take precedence over any
    /// link; no geocoding search or link decoding happens on that path, and
    /// endpoints without a supplied name are labelled by reverse geocoding
    /// (falling back to `"lat,lng"`). Coordinate-valued waypoints become
    /// intermediate stops in the order given.
    ///
    /// Otherwise the link is resolved with routing forced on. A valid
    /// explicit coordinate for one endpoint still pins that endpoint, and
    /// request waypoints follow the link's own waypoints.
    ///
    /// # Errors
    ///
    /// - [`ItineraryError::InvalidCoordinate`] when a supplied coordinate is
    ///   malformed and no link is available.
    /// - [`ItineraryError::MissingEndpoints`] when neither coordinates nor a
    ///   link are supplied.
    /// - Any error from [`Self::resolve_link`] on the link path.
    /// - [`ItineraryError::RoutingFailed`] when the routing provider fails.
    pub async fn generate_route(
        &self,
        request: &GenerateRouteRequest,
    ) -> Result<Itinerary, ItineraryError> {
        let start = explicit_coordinate(request.start_coordinates, request.start.as_deref());
        let end = explicit_coordinate(request.end_coordinates, request.end.as_deref());

        match (start, end, request.link()) {
            (Explicit::Valid(from), Explicit::Valid(to), _) => {
                self.route_explicit(request, from, to).await
            }
            (start, end, Some(link)) => {
                log::debug!("explicit coordinates incomplete; resolving link {link}");
                let pins = Pins {
                    start: start.valid(),
                    end: end.valid(),
                };
                self.route_link(request, link, pins).await
            }
            (Explicit::Invalid(source), _, None) => Err(ItineraryError::InvalidCoordinate {
                endpoint: EndpointRole::Start,
                source,
            }),
            (_, Explicit::Invalid(source), None) => Err(ItineraryError::InvalidCoordinate {
                endpoint: EndpointRole::End,
                source,
            }),
            (_, _, None) => Err(ItineraryError::MissingEndpoints),
        }
    }

    async fn route_explicit(
        &self,
        request: &GenerateRouteRequest,
        from: Coordinate,
        to: Coordinate,
    ) -> Result<Itinerary, ItineraryError> {
        let (start_name, end_name) = join!(
            self.label_for(request.start_name.as_deref(), from),
            self.label_for(request.end_name.as_deref(), to),
        );

        let route_request = RouteRequest::with_waypoints(from, stops(&request.waypoints), to)
            .with_profile(request.profile())
            .with_encoding(request.encoding());
        let route = self.route(&route_request).await?;

        Ok(Itinerary {
            start: Endpoint::at(from).with_name(start_name),
            end: Endpoint::at(to).with_name(end_name),
            waypoints: request.waypoints.clone(),
            route: Some(route),
            meta: None,
        })
    }

    async fn route_link(
        &self,
        request: &GenerateRouteRequest,
        link: &str,
        pins: Pins,
    ) -> Result<Itinerary, ItineraryError> {
        let mut itinerary = self.locate(link, pins).await?;
        if let Some(name) = supplied_name(request.start_name.as_deref()) {
            itinerary.start.name = Some(name.to_owned());
        }
        if let Some(name) = supplied_name(request.end_name.as_deref()) {
            itinerary.end.name = Some(name.to_owned());
        }

        let route_request = routable(&itinerary, stops(&request.waypoints))?
            .with_profile(request.profile())
            .with_encoding(request.encoding());
        itinerary.route = Some(self.route(&route_request).await?);
        itinerary.waypoints.extend(request.waypoints.iter().cloned());
        Ok(itinerary)
    }

    /// Canonicalise and decode `link`, then find coordinates for each
    /// endpoint that is not already pinned.
    async fn locate(&self, link: &str, pins: Pins) -> Result<Itinerary, ItineraryError> {
        let final_url = self.canonicalizer.canonicalize(link).await;
        let parsed = self.decoders.decode(&final_url)?;

        let (start_found, end_found) = join!(
            self.geocode_unless_pinned(&parsed.start, pins.start),
            self.geocode_unless_pinned(&parsed.end, pins.end),
        );
        let (start_coordinates, end_coordinates) =
            fill_from_embedded(&final_url, start_found, end_found);

        Ok(Itinerary {
            start: endpoint(parsed.start, start_coordinates),
            end: endpoint(parsed.end, end_coordinates),
            waypoints: parsed.waypoints.into_iter().map(Waypoint::from).collect(),
            route: None,
            meta: Some(LinkMeta {
                input_link: link.to_owned(),
                final_url,
                parsed_from: parsed.format,
            }),
        })
    }

    async fn geocode_unless_pinned(
        &self,
        query: &str,
        pinned: Option<Coordinate>,
    ) -> Option<Coordinate> {
        match pinned {
            Some(coordinate) => Some(coordinate),
            None => self.resolver.resolve_coordinates(query).await,
        }
    }

    async fn label_for(&self, supplied: Option<&str>, coordinate: Coordinate) -> String {
        if let Some(name) = supplied_name(supplied) {
            return name.to_owned();
        }
        self.resolver
            .resolve_label(coordinate)
            .await
            .unwrap_or_else(|| coordinate.to_string())
    }

    async fn route(&self, request: &RouteRequest) -> Result<RouteResult, ItineraryError> {
        self.router.route(request).await.map_err(|err| {
            log::warn!("routing failed: {err}");
            ItineraryError::from(err)
        })
    }
}

/// Endpoint coordinates fixed by the caller ahead of link resolution.
#[derive(Debug, Default, Clone, Copy)]
struct Pins {
    start: Option<Coordinate>,
    end: Option<Coordinate>,
}

/// Outcome of reading one endpoint's explicit coordinate inputs.
enum Explicit {
    Valid(Coordinate),
    Invalid(CoordinateError),
    Absent,
}

impl Explicit {
    const fn valid(&self) -> Option<Coordinate> {
        match self {
            Self::Valid(coordinate) => Some(*coordinate),
            Self::Invalid(_) | Self::Absent => None,
        }
    }
}

/// A valid structured pair wins; otherwise the text form is parsed; an
/// invalid structured pair is only reported when no text was given.
fn explicit_coordinate(structured: Option<RawCoordinate>, text: Option<&str>) -> Explicit {
    let structured = structured.map(CoordinateInput::Structured);
    if let Some(Ok(coordinate)) = structured.as_ref().map(CoordinateInput::resolve) {
        return Explicit::Valid(coordinate);
    }
    let input = text
        .map(|text| CoordinateInput::Text(text.to_owned()))
        .or(structured);
    match input.as_ref().map(CoordinateInput::resolve) {
        Some(Ok(coordinate)) => Explicit::Valid(coordinate),
        Some(Err(err)) => Explicit::Invalid(err),
        None => Explicit::Absent,
    }
}

/// Coordinate-valued waypoints in order; place names are skipped.
fn stops(waypoints: &[Waypoint]) -> impl Iterator<Item = Coordinate> + '_ {
    waypoints
        .iter()
        .filter_map(|waypoint| parse_coordinate_pair(waypoint.value()).ok())
}

fn routable(
    itinerary: &Itinerary,
    stops: impl IntoIterator<Item = Coordinate>,
) -> Result<RouteRequest, ItineraryError> {
    let from = require_coordinates(&itinerary.start, EndpointRole::Start)?;
    let to = require_coordinates(&itinerary.end, EndpointRole::End)?;
    Ok(RouteRequest::with_waypoints(from, stops, to))
}

fn fill_from_embedded(
    final_url: &str,
    start: Option<Coordinate>,
    end: Option<Coordinate>,
) -> (Option<Coordinate>, Option<Coordinate>) {
    if start.is_some() && end.is_some() {
        return (start, end);
    }
    let embedded = extract_embedded_coordinates(final_url);
    if !embedded.is_empty() {
        log::debug!(
            "falling back to {} embedded coordinate(s) from {final_url}",
            embedded.len()
        );
    }
    let first = embedded.first().copied();
    let second = embedded.get(1).copied().or(first);
    (start.or(first), end.or(second))
}

fn endpoint(name: String, coordinates: Option<Coordinate>) -> Endpoint {
    Endpoint {
        name: Some(name),
        coordinates,
    }
}

fn require_coordinates(
    endpoint: &Endpoint,
    role: EndpointRole,
) -> Result<Coordinate, ItineraryError> {
    endpoint
        .coordinates
        .ok_or(ItineraryError::MissingCoordinates { endpoint: role })
}

fn supplied_name(name: Option<&str>) -> Option<&str> {
    name.map(str::trim).filter(|name| !name.is_empty())
}
