//! Shared HTTP plumbing: client construction errors, transport errors and
//! their conversion from `reqwest`.

use std::time::Duration;

use routexplore_core::geocoding::GeocodingError;
use routexplore_core::routing::RoutingError;
use thiserror::Error;

/// Default user agent sent by every adapter.
pub const DEFAULT_USER_AGENT: &str = "routexplore/0.1";

/// Error type for adapter construction failures.
#[derive(Debug, Error)]
pub enum ProviderBuildError {
    /// Failed to build the HTTP client.
    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),
    /// The configured base URL is not an absolute URL.
    #[error("invalid base URL {url:?}: {source}")]
    BaseUrl {
        /// The rejected URL text.
        url: String,
        /// Parser failure.
        source: url::ParseError,
    },
}

/// Transport-level failures encountered while issuing HTTP requests.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// The server returned an HTTP error status.
    #[error("request to {url} failed with status {status}: {message}")]
    Http {
        /// Fully qualified request URL.
        url: String,
        /// HTTP status code.
        status: u16,
        /// Error description.
        message: String,
    },
    /// The request exceeded its deadline.
    #[error("request to {url} timed out after {timeout_secs}s")]
    Timeout {
        /// Fully qualified request URL.
        url: String,
        /// Configured timeout in seconds.
        timeout_secs: u64,
    },
    /// The request failed before a response arrived.
    #[error("network error contacting {url}: {message}")]
    Network {
        /// Fully qualified request URL.
        url: String,
        /// Transport detail.
        message: String,
    },
}

impl TransportError {
    /// URL of the failed request.
    #[must_use]
    pub fn url(&self) -> &str {
        match self {
            Self::Http { url, .. } | Self::Timeout { url, .. } | Self::Network { url, .. } => url,
        }
    }
}

/// Classify a `reqwest` failure.
pub(crate) fn convert_reqwest_error(
    error: &reqwest::Error,
    url: &str,
    timeout: Duration,
) -> TransportError {
    if error.is_timeout() {
        return TransportError::Timeout {
            url: url.to_owned(),
            timeout_secs: timeout.as_secs(),
        };
    }

    if let Some(status) = error.status() {
        return TransportError::Http {
            url: url.to_owned(),
            status: status.as_u16(),
            message: error.to_string(),
        };
    }

    TransportError::Network {
        url: url.to_owned(),
        message: error.to_string(),
    }
}

/// Strip trailing slashes so paths can be appended with a single `/`.
pub(crate) fn sanitise_base_url(base_url: &str) -> String {
    base_url.trim().trim_end_matches('/').to_owned()
}

impl From<TransportError> for RoutingError {
    fn from(value: TransportError) -> Self {
        match value {
            TransportError::Http { url, status, .. } => Self::Http { url, status },
            TransportError::Timeout { url, timeout_secs } => Self::Timeout { url, timeout_secs },
            TransportError::Network { url, message } => Self::Network { url, message },
        }
    }
}

impl From<TransportError> for GeocodingError {
    fn from(value: TransportError) -> Self {
        Self::Unavailable {
            url: value.url().to_owned(),
            message: value.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("https://router.project-osrm.org/", "https://router.project-osrm.org")]
    #[case(" http://localhost:5000// ", "http://localhost:5000")]
    #[case("http://localhost:5000", "http://localhost:5000")]
    fn base_urls_lose_trailing_slashes(#[case] raw: &str, #[case] expected: &str) {
        assert_eq!(sanitise_base_url(raw), expected);
    }

    #[rstest]
    fn transport_errors_map_onto_routing_errors() {
        let err = RoutingError::from(TransportError::Timeout {
            url: "http://osrm.test/route".into(),
            timeout_secs: 15,
        });
        assert_eq!(
            err,
            RoutingError::Timeout {
                url: "http://osrm.test/route".into(),
                timeout_secs: 15
            }
        );
    }

    #[rstest]
    fn transport_errors_make_geocoding_unavailable() {
        let err = GeocodingError::from(TransportError::Http {
            url: "http://nominatim.test/search".into(),
            status: 429,
            message: "too many requests".into(),
        });
        assert!(matches!(
            err,
            GeocodingError::Unavailable { ref url, .. } if url == "http://nominatim.test/search"
        ));
    }
}
