//! Routing capability contract.

use async_trait::async_trait;

use super::error::RoutingError;
use super::request::RouteRequest;
use super::result::RouteResult;

/// External routing service.
///
/// Implementations take the first route candidate the service returns and
/// normalise it with [`RouteResult::new`]. Waypoint order must be preserved.
#[async_trait]
pub trait RouteProvider: Send + Sync {
    /// Compute a route visiting `request`'s coordinates in order.
    async fn route(&self, request: &RouteRequest) -> Result<RouteResult, RoutingError>;
}
