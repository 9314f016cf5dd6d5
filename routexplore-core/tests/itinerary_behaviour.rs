//! Behavioural tests for the itinerary orchestrators.

use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use routexplore_core::geocoding::GeocodingError;
use routexplore_core::routing::{RouteGeometry, RoutingError};
use routexplore_core::test_support::{
    StubCanonicalizer, StubGeocoder, StubRouteProvider, block_on_for_tests,
};
use routexplore_core::{
    Coordinate, ErrorClass, GenerateRouteRequest, Itinerary, ItineraryError, ItineraryPipeline,
    ResolveLinkOptions, Waypoint,
};
use std::cell::RefCell;

type StubPipeline = ItineraryPipeline<StubCanonicalizer, StubGeocoder, StubRouteProvider>;
type Outcome = RefCell<Option<Result<Itinerary, ItineraryError>>>;

const SHORT_LINK: &str = "https://maps.app.goo.gl/TkW3x";
const CANONICAL_LINK: &str = "https://www.google.com/maps/dir/Thrissur/Angamaly/Kochi/@10.2,76.3,10z";
const EMBEDDED_LINK: &str = "https://www.google.com/maps/dir/Vadakkunnathan/Marine+Drive/@10.2,76.3,10z/data=!4m8!4m7!1m2!1m1!1s0x1:0x2!2m2!1d76.2144!2d10.5276!1m2!2m2!1d76.2673!2d9.9312";

fn thrissur() -> Coordinate {
    Coordinate::new(10.5276, 76.2144).expect("valid coordinate")
}

fn kochi() -> Coordinate {
    Coordinate::new(9.9312, 76.2673).expect("valid coordinate")
}

#[fixture]
fn geocoder() -> RefCell<Option<StubGeocoder>> {
    RefCell::new(None)
}

#[fixture]
fn router() -> RefCell<Option<StubRouteProvider>> {
    RefCell::new(None)
}

#[fixture]
fn pipeline() -> RefCell<Option<StubPipeline>> {
    RefCell::new(None)
}

#[fixture]
fn outcome() -> Outcome {
    RefCell::new(None)
}

fn run<F>(
    geocoder: &RefCell<Option<StubGeocoder>>,
    router: &RefCell<Option<StubRouteProvider>>,
    pipeline: &RefCell<Option<StubPipeline>>,
    outcome: &Outcome,
    call: F,
) where
    F: FnOnce(&StubPipeline) -> Result<Itinerary, ItineraryError>,
{
    let built = ItineraryPipeline::new(
        StubCanonicalizer::identity().with_redirect(SHORT_LINK, CANONICAL_LINK),
        geocoder.borrow_mut().take().expect("geocoder must be configured"),
        router.borrow_mut().take().expect("router must be configured"),
    );
    *outcome.borrow_mut() = Some(call(&built));
    *pipeline.borrow_mut() = Some(built);
}

fn itinerary(outcome: &Outcome) -> Itinerary {
    outcome
        .borrow()
        .clone()
        .expect("a request should have run")
        .expect("request should succeed")
}

// --- Given steps ---

#[given("a gazetteer knowing Thrissur and Kochi")]
fn gazetteer(#[from(geocoder)] geocoder: &RefCell<Option<StubGeocoder>>) {
    *geocoder.borrow_mut() = Some(
        StubGeocoder::default()
            .with_place("Thrissur", thrissur())
            .with_place("Kochi", kochi()),
    );
}

#[given("a geocoding service that is down")]
fn geocoding_down(#[from(geocoder)] geocoder: &RefCell<Option<StubGeocoder>>) {
    *geocoder.borrow_mut() = Some(StubGeocoder::failing(GeocodingError::Unavailable {
        url: "http://geocoder.test/search".into(),
        message: "connection refused".into(),
    }));
}

#[given("a working routing service")]
fn routing_up(#[from(router)] router: &RefCell<Option<StubRouteProvider>>) {
    *router.borrow_mut() = Some(StubRouteProvider::straight_line());
}

#[given("a routing service that is down")]
fn routing_down(#[from(router)] router: &RefCell<Option<StubRouteProvider>>) {
    *router.borrow_mut() = Some(StubRouteProvider::failing(RoutingError::Http {
        url: "http://osrm.test/route/v1/driving".into(),
        status: 503,
    }));
}

// --- When steps ---

#[when("I resolve the shortened directions link")]
fn resolve_short_link(
    #[from(geocoder)] geocoder: &RefCell<Option<StubGeocoder>>,
    #[from(router)] router: &RefCell<Option<StubRouteProvider>>,
    #[from(pipeline)] pipeline: &RefCell<Option<StubPipeline>>,
    #[from(outcome)] outcome: &Outcome,
) {
    run(geocoder, router, pipeline, outcome, |built| {
        block_on_for_tests(built.resolve_link(SHORT_LINK, &ResolveLinkOptions::default()))
    });
}

#[when("I resolve a directions link carrying embedded coordinates")]
fn resolve_embedded_link(
    #[from(geocoder)] geocoder: &RefCell<Option<StubGeocoder>>,
    #[from(router)] router: &RefCell<Option<StubRouteProvider>>,
    #[from(pipeline)] pipeline: &RefCell<Option<StubPipeline>>,
    #[from(outcome)] outcome: &Outcome,
) {
    run(geocoder, router, pipeline, outcome, |built| {
        block_on_for_tests(built.resolve_link(EMBEDDED_LINK, &ResolveLinkOptions::default()))
    });
}

#[when("I generate a named route from explicit coordinates with a link")]
fn generate_explicit(
    #[from(geocoder)] geocoder: &RefCell<Option<StubGeocoder>>,
    #[from(router)] router: &RefCell<Option<StubRouteProvider>>,
    #[from(pipeline)] pipeline: &RefCell<Option<StubPipeline>>,
    #[from(outcome)] outcome: &Outcome,
) {
    let request = GenerateRouteRequest {
        start_coordinates: Some(thrissur().into()),
        end_coordinates: Some(kochi().into()),
        start_name: Some("Thrissur".into()),
        end_name: Some("Kochi".into()),
        link: Some(SHORT_LINK.into()),
        waypoints: vec![Waypoint::from("10.3,76.3")],
        ..GenerateRouteRequest::default()
    };
    run(geocoder, router, pipeline, outcome, |built| {
        block_on_for_tests(built.generate_route(&request))
    });
}

// --- Then steps ---

#[then("the start is located at Thrissur")]
fn start_at_thrissur(#[from(outcome)] outcome: &Outcome) {
    assert_eq!(itinerary(outcome).start.coordinates, Some(thrissur()));
}

#[then("the end is located at Kochi")]
fn end_at_kochi(#[from(outcome)] outcome: &Outcome) {
    assert_eq!(itinerary(outcome).end.coordinates, Some(kochi()));
}

#[then("the waypoint Angamaly is left unresolved")]
fn waypoint_unresolved(
    #[from(pipeline)] pipeline: &RefCell<Option<StubPipeline>>,
    #[from(outcome)] outcome: &Outcome,
) {
    assert_eq!(itinerary(outcome).waypoints, vec![Waypoint::from("Angamaly")]);
    let guard = pipeline.borrow();
    let built = guard.as_ref().expect("pipeline should exist");
    assert!(
        !built
            .geocoder()
            .searches()
            .contains(&"Angamaly".to_owned())
    );
}

#[then("the provenance names the shortened and canonical links")]
fn provenance(#[from(outcome)] outcome: &Outcome) {
    let meta = itinerary(outcome).meta.expect("link metadata");
    assert_eq!(meta.input_link, SHORT_LINK);
    assert_eq!(meta.final_url, CANONICAL_LINK);
    assert_eq!(meta.parsed_from.as_str(), "dir-path");
}

#[then("a route is returned")]
fn route_returned(#[from(outcome)] outcome: &Outcome) {
    assert!(itinerary(outcome).route.is_some());
}

#[then("no geocoding or link resolution happened")]
fn nothing_resolved(#[from(pipeline)] pipeline: &RefCell<Option<StubPipeline>>) {
    let guard = pipeline.borrow();
    let built = guard.as_ref().expect("pipeline should exist");
    assert!(built.canonicalizer().calls().is_empty());
    assert!(built.geocoder().searches().is_empty());
    assert!(built.geocoder().reverse_lookups().is_empty());
}

#[then("the route coordinates match the line string positions")]
fn coordinates_match(#[from(outcome)] outcome: &Outcome) {
    let route = itinerary(outcome).route.expect("route");
    let Some(RouteGeometry::GeoJson(line)) = route.geometry() else {
        panic!("expected GeoJSON geometry, got {:?}", route.geometry());
    };
    assert_eq!(route.coordinates().len(), line.0.len());
    for (coordinate, position) in route.coordinates().iter().zip(line.coords()) {
        assert_eq!(coordinate.lng(), position.x);
        assert_eq!(coordinate.lat(), position.y);
    }
}

#[then("the request fails with a gateway error")]
fn gateway_error(#[from(outcome)] outcome: &Outcome) {
    let borrowed = outcome.borrow();
    let result = borrowed.as_ref().expect("a request should have run");
    let err = result.as_ref().expect_err("request should fail");
    assert_eq!(err.class(), ErrorClass::Gateway);
}

// --- Scenario registrations ---

macro_rules! register_scenario {
    ($fn_name:ident, $title:literal) => {
        #[scenario(path = "tests/features/itinerary.feature", name = $title)]
        fn $fn_name(
            geocoder: RefCell<Option<StubGeocoder>>,
            router: RefCell<Option<StubRouteProvider>>,
            pipeline: RefCell<Option<StubPipeline>>,
            outcome: Outcome,
        ) {
            let _ = (geocoder, router, pipeline, outcome);
        }
    };
}

register_scenario!(resolving_short_links, "Resolving a shortened directions link");
register_scenario!(
    explicit_coordinates,
    "Explicit coordinates bypass geocoding and links"
);
register_scenario!(
    geojson_coordinates,
    "GeoJSON routes expose every position as a coordinate"
);
register_scenario!(
    embedded_fallback,
    "Embedded coordinates rescue failed geocoding"
);
register_scenario!(routing_failure, "A failing routing service is a gateway error");
