//! Start/end locations and intermediate waypoints of an itinerary.

use serde::{Deserialize, Serialize};

use crate::Coordinate;

/// A start or end location, possibly still awaiting geocoding or labelling.
///
/// A name without coordinates is pending geocoding; coordinates without a name
/// are pending a label. An endpoint with neither cannot be routed.
///
/// # Examples
/// ```
/// use routexplore_core::{Coordinate, Endpoint};
///
/// # fn main() -> Result<(), routexplore_core::CoordinateError> {
/// let pending = Endpoint::named("Kochi");
/// assert!(!pending.is_routable());
///
/// let resolved = pending.with_coordinates(Coordinate::new(9.9312, 76.2673)?);
/// assert!(resolved.is_routable());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Endpoint {
    /// Human-readable label or the raw text extracted from a link.
    pub name: Option<String>,
    /// Resolved position.
    pub coordinates: Option<Coordinate>,
}

impl Endpoint {
    /// An endpoint known only by name.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            coordinates: None,
        }
    }

    /// An endpoint known only by position.
    #[must_use]
    pub const fn at(coordinates: Coordinate) -> Self {
        Self {
            name: None,
            coordinates: Some(coordinates),
        }
    }

    /// Attach resolved coordinates.
    #[must_use]
    pub const fn with_coordinates(mut self, coordinates: Coordinate) -> Self {
        self.coordinates = Some(coordinates);
        self
    }

    /// Attach a label.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Whether coordinates are available for routing.
    #[must_use]
    pub const fn is_routable(&self) -> bool {
        self.coordinates.is_some()
    }
}

/// Identifies which end of the itinerary an endpoint occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EndpointRole {
    /// The origin.
    Start,
    /// The destination.
    End,
}

impl EndpointRole {
    /// Lowercase label used in messages.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::End => "end",
        }
    }
}

impl std::fmt::Display for EndpointRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An intermediate stop between start and end.
///
/// `via` marks a shaping point that does not stop; the routing provider still
/// receives it as an ordinary intermediate coordinate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Waypoint {
    /// Bare place name or `"lat,lng"` text.
    Plain(String),
    /// Text with an explicit via flag.
    Detailed {
        /// Place name or `"lat,lng"` text.
        value: String,
        /// Whether the waypoint is a non-stop shaping point.
        #[serde(default)]
        via: bool,
    },
}

impl Waypoint {
    /// The textual value irrespective of form.
    #[must_use]
    pub fn value(&self) -> &str {
        match self {
            Self::Plain(value) | Self::Detailed { value, .. } => value,
        }
    }

    /// Whether the waypoint is a non-stop shaping point.
    #[must_use]
    pub const fn is_via(&self) -> bool {
        matches!(self, Self::Detailed { via: true, .. })
    }
}

impl From<String> for Waypoint {
    fn from(value: String) -> Self {
        Self::Plain(value)
    }
}

impl From<&str> for Waypoint {
    fn from(value: &str) -> Self {
        Self::Plain(value.to_owned())
    }
}
