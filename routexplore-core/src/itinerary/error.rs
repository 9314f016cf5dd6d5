use thiserror::Error;

use crate::CoordinateError;
use crate::endpoint::EndpointRole;
use crate::link::LinkError;
use crate::routing::RoutingError;

/// Whether a failure is the caller's fault or an upstream provider's.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    /// Malformed or insufficient input.
    Client,
    /// Well-formed input that a delegated provider could not serve.
    Gateway,
}

/// Errors surfaced by the orchestrators.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ItineraryError {
    /// An explicitly supplied coordinate was malformed or out of range.
    #[error("invalid {endpoint} coordinate: {source}")]
    InvalidCoordinate {
        /// Endpoint whose coordinate was rejected.
        endpoint: EndpointRole,
        /// Validation failure.
        source: CoordinateError,
    },
    /// No decoder recognised the canonical link.
    #[error("unrecognized map link format: {final_url}")]
    UnrecognizedLinkFormat {
        /// Canonical URL that failed to decode.
        final_url: String,
    },
    /// Neither explicit coordinates nor a link were supplied.
    #[error("provide start and end coordinates (\"lat,lng\" or {{lat, lng}}) or a map link")]
    MissingEndpoints,
    /// Routing was requested but an endpoint could not be located.
    #[error("could not determine coordinates for the {endpoint} endpoint")]
    MissingCoordinates {
        /// Endpoint lacking coordinates.
        endpoint: EndpointRole,
    },
    /// The routing provider could not produce a path.
    #[error("routing failed")]
    RoutingFailed {
        /// Provider failure, kept for diagnostics.
        source: RoutingError,
    },
}

impl ItineraryError {
    /// Classify the failure for an outer transport.
    ///
    /// # Examples
    /// ```
    /// use routexplore_core::itinerary::{ErrorClass, ItineraryError};
    ///
    /// assert_eq!(ItineraryError::MissingEndpoints.class(), ErrorClass::Client);
    /// ```
    #[must_use]
    pub const fn class(&self) -> ErrorClass {
        match self {
            Self::InvalidCoordinate { .. }
            | Self::UnrecognizedLinkFormat { .. }
            | Self::MissingEndpoints
            | Self::MissingCoordinates { .. } => ErrorClass::Client,
            Self::RoutingFailed { .. } => ErrorClass::Gateway,
        }
    }
}

impl From<LinkError> for ItineraryError {
    fn from(value: LinkError) -> Self {
        match value {
            LinkError::UnrecognizedLinkFormat { final_url } => {
                Self::UnrecognizedLinkFormat { final_url }
            }
        }
    }
}

impl From<RoutingError> for ItineraryError {
    fn from(source: RoutingError) -> Self {
        Self::RoutingFailed { source }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(ItineraryError::InvalidCoordinate {
        endpoint: EndpointRole::Start,
        source: CoordinateError::LatitudeOutOfRange { lat: 91.0 },
    }, ErrorClass::Client)]
    #[case(ItineraryError::UnrecognizedLinkFormat { final_url: "x".into() }, ErrorClass::Client)]
    #[case(ItineraryError::MissingEndpoints, ErrorClass::Client)]
    #[case(ItineraryError::MissingCoordinates { endpoint: EndpointRole::End }, ErrorClass::Client)]
    #[case(ItineraryError::RoutingFailed {
        source: RoutingError::NoRoute { url: "x".into(), code: "NoRoute".into() },
    }, ErrorClass::Gateway)]
    fn classifies_errors(#[case] error: ItineraryError, #[case] expected: ErrorClass) {
        assert_eq!(error.class(), expected);
    }

    #[rstest]
    fn routing_failures_hide_provider_detail_in_the_message() {
        let error = ItineraryError::from(RoutingError::Http {
            url: "http://osrm.test".into(),
            status: 502,
        });
        assert_eq!(error.to_string(), "routing failed");
    }
}
