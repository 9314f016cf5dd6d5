use thiserror::Error;

/// Errors from [`crate::routing::RouteProvider::route`].
///
/// Callers outside the routing layer see all of these as a single routing
/// failure; the variants are kept apart for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RoutingError {
    /// Fewer than two coordinates were supplied.
    #[error("a route needs at least two coordinates, got {found}")]
    TooFewCoordinates {
        /// Number of coordinates supplied.
        found: usize,
    },
    /// The provider answered with an HTTP error status.
    #[error("routing request to {url} failed with status {status}")]
    Http {
        /// Request URL.
        url: String,
        /// HTTP status code.
        status: u16,
    },
    /// The request could not be delivered.
    #[error("network error calling {url}: {message}")]
    Network {
        /// Request URL.
        url: String,
        /// Transport detail.
        message: String,
    },
    /// The request exceeded its deadline.
    #[error("routing request to {url} timed out after {timeout_secs}s")]
    Timeout {
        /// Request URL.
        url: String,
        /// Configured timeout in seconds.
        timeout_secs: u64,
    },
    /// The provider returned no route candidates.
    #[error("no route returned by {url} (code {code})")]
    NoRoute {
        /// Request URL.
        url: String,
        /// Provider status code.
        code: String,
    },
    /// The response body could not be decoded.
    #[error("failed to parse routing response from {url}: {message}")]
    Parse {
        /// Request URL.
        url: String,
        /// Parser detail.
        message: String,
    },
    /// The route geometry contained an unusable position.
    #[error("route geometry is invalid: {message}")]
    InvalidGeometry {
        /// Validation detail.
        message: String,
    },
}
