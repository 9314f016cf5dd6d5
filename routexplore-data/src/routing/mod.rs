//! OSRM-backed [`routexplore_core::routing::RouteProvider`].
//!
//! Requests go to the OSRM Route service with `overview=full` and the
//! geometry encoding chosen by the caller. Only the first route candidate is
//! used.
//!
//! # Example
//!
//! ```no_run
//! use routexplore_core::Coordinate;
//! use routexplore_core::routing::{RouteProvider, RouteRequest};
//! use routexplore_data::routing::{OsrmConfig, OsrmRouteProvider};
//! use std::time::Duration;
//!
//! # async fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! let config = OsrmConfig::new("http://localhost:5000").with_timeout(Duration::from_secs(20));
//! let provider = OsrmRouteProvider::with_config(config)?;
//! let request = RouteRequest::new("10.5276,76.2144".parse()?, "9.9312,76.2673".parse()?);
//! let route = provider.route(&request).await?;
//! println!("{} m", route.distance_meters());
//! # Ok(())
//! # }
//! ```

mod osrm;
mod provider;

pub use provider::{DEFAULT_OSRM_URL, OsrmConfig, OsrmRouteProvider};
