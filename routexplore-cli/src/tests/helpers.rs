//! Stub pipelines shared by the CLI unit tests.

use routexplore_core::Coordinate;
use routexplore_core::ItineraryPipeline;
use routexplore_core::test_support::{StubCanonicalizer, StubGeocoder, StubRouteProvider};

pub(super) type StubPipeline =
    ItineraryPipeline<StubCanonicalizer, StubGeocoder, StubRouteProvider>;

pub(super) const SHORT_LINK: &str = "https://maps.app.goo.gl/TkW3x";
pub(super) const CANONICAL_LINK: &str = "https://www.google.com/maps/dir/Thrissur/Kochi";

pub(super) fn thrissur() -> Coordinate {
    Coordinate::new(10.5276, 76.2144).expect("valid coordinate")
}

pub(super) fn kochi() -> Coordinate {
    Coordinate::new(9.9312, 76.2673).expect("valid coordinate")
}

/// A pipeline that knows Thrissur and Kochi and draws straight-line routes.
pub(super) fn stub_pipeline() -> StubPipeline {
    ItineraryPipeline::new(
        StubCanonicalizer::identity().with_redirect(SHORT_LINK, CANONICAL_LINK),
        StubGeocoder::default()
            .with_place("Thrissur", thrissur())
            .with_place("Kochi", kochi()),
        StubRouteProvider::straight_line(),
    )
}
