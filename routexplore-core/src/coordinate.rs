//! Validated latitude/longitude pairs.
//!
//! A [`Coordinate`] can only be obtained through a validating constructor, so
//! every value in circulation satisfies `lat ∈ [-90, 90]` and
//! `lng ∈ [-180, 180]`. Parsing accepts either a structured pair or the
//! `"lat,lng"` text form used by map links and request payloads.

use std::{fmt, str::FromStr};

use geo::Coord;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors returned when a latitude/longitude pair fails validation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoordinateError {
    /// The text form did not contain exactly two comma-separated parts.
    #[error("expected \"lat,lng\" with exactly two components, found {found}")]
    WrongComponentCount {
        /// Number of comma-separated components found.
        found: usize,
    },
    /// A component was not a finite number.
    #[error("coordinate component {value:?} is not a finite number")]
    NotANumber {
        /// The offending component text.
        value: String,
    },
    /// Latitude fell outside `[-90, 90]`.
    #[error("latitude {lat} is outside [-90, 90]")]
    LatitudeOutOfRange {
        /// Rejected latitude.
        lat: f64,
    },
    /// Longitude fell outside `[-180, 180]`.
    #[error("longitude {lng} is outside [-180, 180]")]
    LongitudeOutOfRange {
        /// Rejected longitude.
        lng: f64,
    },
}

/// A WGS84 position in decimal degrees.
///
/// # Examples
/// ```
/// use routexplore_core::Coordinate;
///
/// # fn main() -> Result<(), routexplore_core::CoordinateError> {
/// let thrissur: Coordinate = "10.5276, 76.2144".parse()?;
/// assert_eq!(thrissur.lat(), 10.5276);
/// assert_eq!(thrissur.lng(), 76.2144);
/// assert_eq!(thrissur.to_string(), "10.5276,76.2144");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawCoordinate", into = "RawCoordinate")]
pub struct Coordinate {
    lat: f64,
    lng: f64,
}

impl Coordinate {
    /// Validates and constructs a [`Coordinate`].
    ///
    /// # Errors
    ///
    /// Returns [`CoordinateError`] when either component is non-finite or out
    /// of range.
    pub fn new(lat: f64, lng: f64) -> Result<Self, CoordinateError> {
        if !lat.is_finite() {
            return Err(CoordinateError::NotANumber {
                value: lat.to_string(),
            });
        }
        if !lng.is_finite() {
            return Err(CoordinateError::NotANumber {
                value: lng.to_string(),
            });
        }
        if !(-90.0..=90.0).contains(&lat) {
            return Err(CoordinateError::LatitudeOutOfRange { lat });
        }
        if !(-180.0..=180.0).contains(&lng) {
            return Err(CoordinateError::LongitudeOutOfRange { lng });
        }
        Ok(Self { lat, lng })
    }

    /// Latitude in decimal degrees.
    #[must_use]
    pub const fn lat(&self) -> f64 {
        self.lat
    }

    /// Longitude in decimal degrees.
    #[must_use]
    pub const fn lng(&self) -> f64 {
        self.lng
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.lat, self.lng)
    }
}

impl FromStr for Coordinate {
    type Err = CoordinateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_coordinate_pair(s)
    }
}

impl From<Coordinate> for Coord<f64> {
    fn from(value: Coordinate) -> Self {
        Self {
            x: value.lng,
            y: value.lat,
        }
    }
}

impl TryFrom<Coord<f64>> for Coordinate {
    type Error = CoordinateError;

    fn try_from(value: Coord<f64>) -> Result<Self, Self::Error> {
        Self::new(value.y, value.x)
    }
}

/// Unvalidated `{lat, lng}` pair as it arrives in a structured payload.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RawCoordinate {
    /// Latitude in decimal degrees.
    pub lat: f64,
    /// Longitude in decimal degrees.
    pub lng: f64,
}

impl RawCoordinate {
    /// Whether the pair is finite and inside the valid ranges.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        is_valid_coordinate(self.lat, self.lng)
    }
}

impl TryFrom<RawCoordinate> for Coordinate {
    type Error = CoordinateError;

    fn try_from(value: RawCoordinate) -> Result<Self, Self::Error> {
        Self::new(value.lat, value.lng)
    }
}

impl From<Coordinate> for RawCoordinate {
    fn from(value: Coordinate) -> Self {
        Self {
            lat: value.lat,
            lng: value.lng,
        }
    }
}

/// Coordinate supplied either as a structured pair or as `"lat,lng"` text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CoordinateInput {
    /// `{ "lat": .., "lng": .. }`
    Structured(RawCoordinate),
    /// `"lat,lng"`
    Text(String),
}

impl CoordinateInput {
    /// Validate the input into a [`Coordinate`].
    ///
    /// # Errors
    ///
    /// Returns [`CoordinateError`] when the input is malformed or out of range.
    pub fn resolve(&self) -> Result<Coordinate, CoordinateError> {
        match self {
            Self::Structured(raw) => Coordinate::try_from(*raw),
            Self::Text(text) => parse_coordinate_pair(text),
        }
    }
}

/// Structural and range predicate for a latitude/longitude pair.
///
/// # Examples
/// ```
/// use routexplore_core::is_valid_coordinate;
///
/// assert!(is_valid_coordinate(48.8566, 2.3522));
/// assert!(!is_valid_coordinate(91.0, 0.0));
/// assert!(!is_valid_coordinate(f64::NAN, 0.0));
/// ```
#[must_use]
pub fn is_valid_coordinate(lat: f64, lng: f64) -> bool {
    Coordinate::new(lat, lng).is_ok()
}

/// Parse `"lat,lng"` text into a [`Coordinate`].
///
/// Each side is trimmed and parsed as an IEEE-754 double.
///
/// # Errors
///
/// Returns [`CoordinateError`] when the text does not split into exactly two
/// finite, in-range numbers.
pub fn parse_coordinate_pair(input: &str) -> Result<Coordinate, CoordinateError> {
    let parts: Vec<&str> = input.split(',').map(str::trim).collect();
    let [lat_text, lng_text] = parts.as_slice() else {
        return Err(CoordinateError::WrongComponentCount { found: parts.len() });
    };
    let lat = parse_component(lat_text)?;
    let lng = parse_component(lng_text)?;
    Coordinate::new(lat, lng)
}

fn parse_component(text: &str) -> Result<f64, CoordinateError> {
    text.parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| CoordinateError::NotANumber {
            value: text.to_owned(),
        })
}
