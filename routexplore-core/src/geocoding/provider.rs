//! Geocoding capability contract.

use async_trait::async_trait;

use crate::Coordinate;

use super::error::GeocodingError;
use super::reverse::ReverseGeocode;

/// External geocoding service.
///
/// `Ok(None)` means the provider answered but found nothing; `Err` means the
/// provider could not answer at all.
#[async_trait]
pub trait Geocoder: Send + Sync {
    /// Best single match for free-text `query`.
    async fn search(&self, query: &str) -> Result<Option<Coordinate>, GeocodingError>;

    /// Structured address fields describing `coordinate`.
    async fn reverse(
        &self,
        coordinate: Coordinate,
    ) -> Result<Option<ReverseGeocode>, GeocodingError>;
}
