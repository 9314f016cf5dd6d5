//! HTTP adapters for the routexplore providers.
//!
//! Responsibilities:
//! - Follow shortener redirects to a canonical map link.
//! - Geocode place names and label coordinates through Nominatim.
//! - Request routes from an OSRM instance and normalise the response.
//!
//! Boundaries:
//! - Do not encode domain rules (live in `routexplore-core`).
//! - Never retry; every failure surfaces to the caller once.
//!
//! Invariants:
//! - Adapters are `Send + Sync` and hold no global mutable state.

pub mod canonical;
pub mod geocoding;
pub mod routing;
pub mod transport;

pub use canonical::{HttpLinkCanonicalizer, LinkCanonicalizerConfig};
pub use geocoding::{NominatimConfig, NominatimGeocoder};
pub use routing::{OsrmConfig, OsrmRouteProvider};
pub use transport::{DEFAULT_USER_AGENT, ProviderBuildError, TransportError};

use routexplore_core::ItineraryPipeline;

/// Pipeline wired to the HTTP adapters.
pub type HttpItineraryPipeline =
    ItineraryPipeline<HttpLinkCanonicalizer, NominatimGeocoder, OsrmRouteProvider>;

/// Endpoints and identity shared by every HTTP adapter.
#[derive(Debug, Clone)]
pub struct HttpProviderSettings {
    /// Base URL of the OSRM service.
    pub osrm_base_url: String,
    /// Base URL of the Nominatim service.
    pub nominatim_base_url: String,
    /// User agent sent with every request.
    pub user_agent: String,
}

impl Default for HttpProviderSettings {
    fn default() -> Self {
        Self {
            osrm_base_url: routing::DEFAULT_OSRM_URL.to_owned(),
            nominatim_base_url: geocoding::DEFAULT_NOMINATIM_URL.to_owned(),
            user_agent: DEFAULT_USER_AGENT.to_owned(),
        }
    }
}

impl HttpProviderSettings {
    /// Build a pipeline whose providers all use these settings.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderBuildError`] when a base URL is invalid or an HTTP
    /// client cannot be built.
    ///
    /// # Examples
    /// ```
    /// use routexplore_data::HttpProviderSettings;
    ///
    /// # fn main() -> Result<(), routexplore_data::ProviderBuildError> {
    /// let settings = HttpProviderSettings {
    ///     osrm_base_url: "http://localhost:5000".into(),
    ///     ..HttpProviderSettings::default()
    /// };
    /// let pipeline = settings.build_pipeline()?;
    /// # let _ = pipeline;
    /// # Ok(())
    /// # }
    /// ```
    pub fn build_pipeline(&self) -> Result<HttpItineraryPipeline, ProviderBuildError> {
        let canonicalizer = HttpLinkCanonicalizer::with_config(
            LinkCanonicalizerConfig::default().with_user_agent(&self.user_agent),
        )?;
        let geocoder = NominatimGeocoder::with_config(
            NominatimConfig::new(&self.nominatim_base_url).with_user_agent(&self.user_agent),
        )?;
        let router = OsrmRouteProvider::with_config(
            OsrmConfig::new(&self.osrm_base_url).with_user_agent(&self.user_agent),
        )?;
        Ok(ItineraryPipeline::new(canonicalizer, geocoder, router))
    }
}
