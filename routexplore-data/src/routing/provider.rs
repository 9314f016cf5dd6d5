//! HTTP `RouteProvider` using OSRM's Route API.

use std::time::Duration;

use async_trait::async_trait;
use geo::{Coord, LineString};
use reqwest::Client;
use reqwest::header::ACCEPT;
use routexplore_core::routing::{
    GeometryEncoding, RouteGeometry, RouteProvider, RouteRequest, RouteResult, RoutingError,
    RoutingProfile,
};
use url::Url;

use super::osrm::{OsrmGeometry, OsrmRoute, RouteResponse};
use crate::transport::{
    DEFAULT_USER_AGENT, ProviderBuildError, convert_reqwest_error, sanitise_base_url,
};

/// Public OSRM demo server.
pub const DEFAULT_OSRM_URL: &str = "https://router.project-osrm.org";

/// Provider name reported in route results.
const PROVIDER_NAME: &str = "osrm";

const DEFAULT_TIMEOUT_SECS: u64 = 15;

/// Configuration for [`OsrmRouteProvider`].
#[derive(Debug, Clone)]
pub struct OsrmConfig {
    /// Base URL for the OSRM service (e.g., `"http://localhost:5000"`).
    pub base_url: String,
    /// Request timeout duration.
    pub timeout: Duration,
    /// User agent string for requests.
    pub user_agent: String,
}

impl Default for OsrmConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_OSRM_URL.to_owned(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_owned(),
        }
    }
}

impl OsrmConfig {
    /// Create a new configuration with the given base URL.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Set the request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the user agent string.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

/// Route provider backed by an OSRM instance.
///
/// Requests are never retried. An HTTP status of 400 or above, a response
/// without route candidates, and any transport failure are all errors.
#[derive(Debug, Clone)]
pub struct OsrmRouteProvider {
    client: Client,
    base_url: String,
    timeout: Duration,
}

impl OsrmRouteProvider {
    /// Create a provider for the service at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is invalid or the HTTP client fails
    /// to build.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ProviderBuildError> {
        Self::with_config(OsrmConfig::new(base_url))
    }

    /// Create a provider with explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is invalid or the HTTP client fails
    /// to build.
    pub fn with_config(config: OsrmConfig) -> Result<Self, ProviderBuildError> {
        let base_url = sanitise_base_url(&config.base_url);
        Url::parse(&base_url).map_err(|source| ProviderBuildError::BaseUrl {
            url: config.base_url.clone(),
            source,
        })?;
        let client = Client::builder()
            .user_agent(&config.user_agent)
            .connect_timeout(config.timeout)
            .timeout(config.timeout)
            .build()
            .map_err(ProviderBuildError::HttpClient)?;
        Ok(Self {
            client,
            base_url,
            timeout: config.timeout,
        })
    }

    /// Build the OSRM Route API URL.
    ///
    /// The URL format is
    /// `{base_url}/route/v1/{profile}/{coordinates}?overview=full&geometries={encoding}`
    /// where coordinates are semicolon-separated `lng,lat` pairs.
    fn build_route_url(&self, request: &RouteRequest) -> String {
        let coords = request
            .coordinates()
            .iter()
            .map(|coordinate| format!("{},{}", coordinate.lng(), coordinate.lat()))
            .collect::<Vec<_>>()
            .join(";");

        format!(
            "{}/route/v1/{}/{}?overview=full&geometries={}",
            self.base_url,
            request.profile(),
            coords,
            request.encoding()
        )
    }

    async fn fetch_route(&self, url: &str) -> Result<RouteResponse, RoutingError> {
        let response = self
            .client
            .get(url)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|err| RoutingError::from(convert_reqwest_error(&err, url, self.timeout)))?;

        let status = response.status();
        if status.is_client_error() || status.is_server_error() {
            return Err(RoutingError::Http {
                url: url.to_owned(),
                status: status.as_u16(),
            });
        }

        response.json().await.map_err(|err| RoutingError::Parse {
            url: url.to_owned(),
            message: err.to_string(),
        })
    }
}

/// Normalise the first route candidate of an OSRM response.
fn convert_response(
    response: RouteResponse,
    url: &str,
    profile: RoutingProfile,
    encoding: GeometryEncoding,
) -> Result<RouteResult, RoutingError> {
    let RouteResponse {
        code,
        message,
        routes,
    } = response;
    let Some(route) = routes.into_iter().next() else {
        log::debug!(
            "OSRM returned no routes ({code}): {}",
            message.as_deref().unwrap_or_default()
        );
        return Err(RoutingError::NoRoute {
            url: url.to_owned(),
            code,
        });
    };
    let OsrmRoute {
        distance,
        duration,
        geometry,
    } = route;
    let route = match geometry {
        Some(geometry) => {
            let geometry =
                convert_geometry(geometry, encoding).ok_or_else(|| RoutingError::Parse {
                    url: url.to_owned(),
                    message: format!("route geometry is not {encoding}"),
                })?;
            RouteResult::new(PROVIDER_NAME, profile, distance, duration, geometry)?
        }
        None => {
            log::debug!("OSRM route from {url} carries no geometry");
            RouteResult::without_geometry(PROVIDER_NAME, profile, distance, duration, encoding)
        }
    };
    Ok(route.with_request_url(url))
}

fn convert_geometry(geometry: OsrmGeometry, encoding: GeometryEncoding) -> Option<RouteGeometry> {
    match (geometry, encoding) {
        (OsrmGeometry::GeoJson { coordinates }, GeometryEncoding::GeoJson) => {
            Some(RouteGeometry::GeoJson(
                coordinates
                    .into_iter()
                    .map(|[x, y]| Coord { x, y })
                    .collect::<LineString<f64>>(),
            ))
        }
        (OsrmGeometry::Encoded(encoded), _) => RouteGeometry::encoded(encoding, encoded),
        (OsrmGeometry::GeoJson { .. }, _) => None,
    }
}

#[async_trait]
impl RouteProvider for OsrmRouteProvider {
    async fn route(&self, request: &RouteRequest) -> Result<RouteResult, RoutingError> {
        let url = self.build_route_url(request);
        log::debug!("requesting route from {url}");
        let response = self.fetch_route(&url).await?;
        convert_response(response, &url, request.profile(), request.encoding())
    }
}
