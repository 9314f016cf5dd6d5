//! HTTP client for the Nominatim search and reverse APIs.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::{Client, Response};
use routexplore_core::Coordinate;
use routexplore_core::geocoding::{Geocoder, GeocodingError, ReverseGeocode};
use url::Url;

use super::nominatim::{ReverseResponse, SearchHit};
use crate::transport::{
    DEFAULT_USER_AGENT, ProviderBuildError, TransportError, convert_reqwest_error,
    sanitise_base_url,
};

/// Public Nominatim instance.
pub const DEFAULT_NOMINATIM_URL: &str = "https://nominatim.openstreetmap.org";

const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Configuration for [`NominatimGeocoder`].
#[derive(Debug, Clone)]
pub struct NominatimConfig {
    /// Base URL of the Nominatim service.
    pub base_url: String,
    /// Request timeout.
    pub timeout: Duration,
    /// User agent string; Nominatim's usage policy requires one.
    pub user_agent: String,
}

impl Default for NominatimConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_NOMINATIM_URL.to_owned(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_owned(),
        }
    }
}

impl NominatimConfig {
    /// Create a configuration for the service at `base_url`.
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

/// Geocoder backed by a Nominatim instance.
#[derive(Debug, Clone)]
pub struct NominatimGeocoder {
    client: Client,
    base_url: String,
    timeout: Duration,
}

impl NominatimGeocoder {
    /// Create a geocoder for the service at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is invalid or the HTTP client fails
    /// to build.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ProviderBuildError> {
        Self::with_config(NominatimConfig::new(base_url))
    }

    /// Create a geocoder with explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is invalid or the HTTP client fails
    /// to build.
    pub fn with_config(config: NominatimConfig) -> Result<Self, ProviderBuildError> {
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

    fn endpoint_url(&self, path: &str, params: &[(&str, &str)]) -> Result<Url, GeocodingError> {
        let endpoint = format!("{}/{path}", self.base_url);
        Url::parse_with_params(&endpoint, params).map_err(|err| GeocodingError::Parse {
            url: endpoint.clone(),
            message: err.to_string(),
        })
    }

    fn search_url(&self, query: &str) -> Result<Url, GeocodingError> {
        self.endpoint_url(
            "search",
            &[("q", query), ("format", "json"), ("limit", "1")],
        )
    }

    fn reverse_url(&self, coordinate: Coordinate) -> Result<Url, GeocodingError> {
        let lat = coordinate.lat().to_string();
        let lon = coordinate.lng().to_string();
        self.endpoint_url(
            "reverse",
            &[
                ("lat", lat.as_str()),
                ("lon", lon.as_str()),
                ("format", "jsonv2"),
                ("addressdetails", "1"),
            ],
        )
    }

    async fn call(&self, url: &Url) -> Result<Response, TransportError> {
        self.client
            .get(url.clone())
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|err| convert_reqwest_error(&err, url.as_str(), self.timeout))?
            .error_for_status()
            .map_err(|err| convert_reqwest_error(&err, url.as_str(), self.timeout))
    }

    async fn fetch_json<T: serde::de::DeserializeOwned>(
        &self,
        url: &Url,
    ) -> Result<T, GeocodingError> {
        let response = self.call(url).await?;
        response.json().await.map_err(|err| GeocodingError::Parse {
            url: url.to_string(),
            message: err.to_string(),
        })
    }
}

/// First hit of a search, validated.
fn first_hit(hits: Vec<SearchHit>, url: &Url) -> Result<Option<Coordinate>, GeocodingError> {
    let Some(hit) = hits.into_iter().next() else {
        return Ok(None);
    };
    let parse_error = |message: String| GeocodingError::Parse {
        url: url.to_string(),
        message,
    };
    let lat = hit
        .lat
        .trim()
        .parse::<f64>()
        .map_err(|err| parse_error(format!("latitude {:?}: {err}", hit.lat)))?;
    let lng = hit
        .lon
        .trim()
        .parse::<f64>()
        .map_err(|err| parse_error(format!("longitude {:?}: {err}", hit.lon)))?;
    Coordinate::new(lat, lng)
        .map(Some)
        .map_err(|err| parse_error(err.to_string()))
}

#[async_trait]
impl Geocoder for NominatimGeocoder {
    async fn search(&self, query: &str) -> Result<Option<Coordinate>, GeocodingError> {
        let url = self.search_url(query)?;
        let hits: Vec<SearchHit> = self.fetch_json(&url).await?;
        first_hit(hits, &url)
    }

    async fn reverse(
        &self,
        coordinate: Coordinate,
    ) -> Result<Option<ReverseGeocode>, GeocodingError> {
        let url = self.reverse_url(coordinate)?;
        let response: ReverseResponse = self.fetch_json(&url).await?;
        Ok(response.into_reverse_geocode())
    }
}
