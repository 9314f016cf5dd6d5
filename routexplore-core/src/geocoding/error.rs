use thiserror::Error;

/// Errors reported by a [`crate::geocoding::Geocoder`].
///
/// These never escape [`crate::geocoding::GeocodingResolver`]; they exist so
/// adapters can describe failures precisely in logs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeocodingError {
    /// The provider could not be reached or answered with an error status.
    #[error("geocoding provider unavailable at {url}: {message}")]
    Unavailable {
        /// Request URL.
        url: String,
        /// Transport or status detail.
        message: String,
    },
    /// The provider answered with a body that could not be interpreted.
    #[error("failed to parse geocoding response from {url}: {message}")]
    Parse {
        /// Request URL.
        url: String,
        /// Parser detail.
        message: String,
    },
}
