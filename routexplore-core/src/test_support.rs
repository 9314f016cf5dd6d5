//! Deterministic, call-recording providers for unit and behaviour tests.

use std::collections::HashMap;
use std::future::Future;
use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;
use geo::LineString;

use crate::Coordinate;
use crate::geocoding::{Geocoder, GeocodingError, ReverseGeocode};
use crate::link::LinkCanonicalizer;
use crate::routing::{
    GeometryEncoding, RouteGeometry, RouteProvider, RouteRequest, RouteResult, RoutingError,
};

/// Drive `future` to completion on a fresh current-thread Tokio runtime.
///
/// # Panics
///
/// Panics if the runtime cannot be built.
#[expect(
    clippy::expect_used,
    reason = "test helper; a missing runtime is unrecoverable"
)]
pub fn block_on_for_tests<F: Future>(future: F) -> F::Output {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("test runtime should build")
        .block_on(future)
}

fn snapshot<T: Clone>(calls: &Mutex<Vec<T>>) -> Vec<T> {
    calls
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
}

fn record<T>(calls: &Mutex<Vec<T>>, call: T) {
    calls
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .push(call);
}

/// `LinkCanonicalizer` that rewrites configured links and passes others
/// through unchanged.
#[derive(Debug, Default)]
pub struct StubCanonicalizer {
    redirects: HashMap<String, String>,
    calls: Mutex<Vec<String>>,
}

impl StubCanonicalizer {
    /// A canonicaliser that never rewrites.
    #[must_use]
    pub fn identity() -> Self {
        Self::default()
    }

    /// Resolve `from` to `to`.
    #[must_use]
    pub fn with_redirect(mut self, from: impl Into<String>, to: impl Into<String>) -> Self {
        self.redirects.insert(from.into(), to.into());
        self
    }

    /// Links passed to [`LinkCanonicalizer::canonicalize`] so far.
    #[must_use]
    pub fn calls(&self) -> Vec<String> {
        snapshot(&self.calls)
    }
}

#[async_trait]
impl LinkCanonicalizer for StubCanonicalizer {
    async fn canonicalize(&self, link: &str) -> String {
        record(&self.calls, link.to_owned());
        self.redirects
            .get(link)
            .cloned()
            .unwrap_or_else(|| link.to_owned())
    }
}

/// `Geocoder` backed by a fixed gazetteer.
#[derive(Debug, Default)]
pub struct StubGeocoder {
    places: HashMap<String, Coordinate>,
    reverse: Option<ReverseGeocode>,
    failure: Option<GeocodingError>,
    searches: Mutex<Vec<String>>,
    reverse_lookups: Mutex<Vec<Coordinate>>,
}

impl StubGeocoder {
    /// A geocoder whose every call fails with `error`.
    #[must_use]
    pub fn failing(error: GeocodingError) -> Self {
        Self {
            failure: Some(error),
            ..Self::default()
        }
    }

    /// Answer searches for exactly `query` with `coordinate`.
    #[must_use]
    pub fn with_place(mut self, query: impl Into<String>, coordinate: Coordinate) -> Self {
        self.places.insert(query.into(), coordinate);
        self
    }

    /// Answer every reverse lookup with `result`.
    #[must_use]
    pub fn with_reverse(mut self, result: ReverseGeocode) -> Self {
        self.reverse = Some(result);
        self
    }

    /// Queries passed to [`Geocoder::search`] so far.
    #[must_use]
    pub fn searches(&self) -> Vec<String> {
        snapshot(&self.searches)
    }

    /// Coordinates passed to [`Geocoder::reverse`] so far.
    #[must_use]
    pub fn reverse_lookups(&self) -> Vec<Coordinate> {
        snapshot(&self.reverse_lookups)
    }
}

#[async_trait]
impl Geocoder for StubGeocoder {
    async fn search(&self, query: &str) -> Result<Option<Coordinate>, GeocodingError> {
        record(&self.searches, query.to_owned());
        if let Some(error) = &self.failure {
            return Err(error.clone());
        }
        Ok(self.places.get(query).copied())
    }

    async fn reverse(
        &self,
        coordinate: Coordinate,
    ) -> Result<Option<ReverseGeocode>, GeocodingError> {
        record(&self.reverse_lookups, coordinate);
        if let Some(error) = &self.failure {
            return Err(error.clone());
        }
        Ok(self.reverse.clone())
    }
}

/// `RouteProvider` that joins the requested coordinates with straight lines.
///
/// Every route reports 1000 m and 60 s. Polyline requests receive the
/// placeholder string `"stub"`.
#[derive(Debug, Default)]
pub struct StubRouteProvider {
    failure: Option<RoutingError>,
    requests: Mutex<Vec<RouteRequest>>,
}

impl StubRouteProvider {
    /// A provider that always succeeds.
    #[must_use]
    pub fn straight_line() -> Self {
        Self::default()
    }

    /// A provider that always fails with `error`.
    #[must_use]
    pub fn failing(error: RoutingError) -> Self {
        Self {
            failure: Some(error),
            requests: Mutex::default(),
        }
    }

    /// Requests received so far.
    #[must_use]
    pub fn requests(&self) -> Vec<RouteRequest> {
        snapshot(&self.requests)
    }
}

#[async_trait]
impl RouteProvider for StubRouteProvider {
    async fn route(&self, request: &RouteRequest) -> Result<RouteResult, RoutingError> {
        record(&self.requests, request.clone());
        if let Some(error) = &self.failure {
            return Err(error.clone());
        }
        let geometry = match request.encoding() {
            GeometryEncoding::GeoJson => RouteGeometry::GeoJson(
                request
                    .coordinates()
                    .iter()
                    .map(|coordinate| geo::Coord::from(*coordinate))
                    .collect::<LineString<f64>>(),
            ),
            GeometryEncoding::Polyline => RouteGeometry::Polyline("stub".to_owned()),
            GeometryEncoding::Polyline6 => RouteGeometry::Polyline6("stub".to_owned()),
        };
        RouteResult::new("stub", request.profile(), 1000.0, 60.0, geometry)
    }
}
