//! Route synthesis through an external routing provider.
//!
//! A [`RouteRequest`] carries two or more validated coordinates in visiting
//! order together with a [`RoutingProfile`] and the wanted
//! [`GeometryEncoding`]. A [`RouteProvider`] turns it into a normalised
//! [`RouteResult`]. Waypoints are passed through in the order supplied; no
//! reordering is attempted.

mod error;
mod profile;
mod provider;
mod request;
mod result;

pub use error::RoutingError;
pub use profile::{GeometryEncoding, RoutingProfile};
pub use provider::RouteProvider;
pub use request::RouteRequest;
pub use result::{RouteGeometry, RouteResult};
