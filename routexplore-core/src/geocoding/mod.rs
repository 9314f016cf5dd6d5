//! Forward and reverse geocoding behind a provider-neutral capability.
//!
//! [`Geocoder`] is implemented by network adapters. [`GeocodingResolver`]
//! wraps any geocoder and applies the pipeline's degradation policy:
//! coordinate text short-circuits the provider, and provider failures become
//! `None` after being logged.

mod error;
mod provider;
mod resolver;
mod reverse;

pub use error::GeocodingError;
pub use provider::Geocoder;
pub use resolver::{GeocodingResolver, normalise_query};
pub use reverse::{AddressDetails, ReverseGeocode};
