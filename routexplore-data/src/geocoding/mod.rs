//! Nominatim-backed [`routexplore_core::geocoding::Geocoder`].
//!
//! Forward lookups use `/search?q=..&format=json&limit=1`; reverse lookups
//! use `/reverse?lat=..&lon=..&format=jsonv2&addressdetails=1`.
//!
//! # Example
//!
//! ```no_run
//! use routexplore_core::geocoding::Geocoder;
//! use routexplore_data::geocoding::{NominatimConfig, NominatimGeocoder};
//!
//! # async fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! let config = NominatimConfig::default().with_user_agent("my-app/1.0");
//! let geocoder = NominatimGeocoder::with_config(config)?;
//! let kochi = geocoder.search("Kochi").await?;
//! # let _ = kochi;
//! # Ok(())
//! # }
//! ```

mod nominatim;
mod provider;

pub use provider::{DEFAULT_NOMINATIM_URL, NominatimConfig, NominatimGeocoder};
