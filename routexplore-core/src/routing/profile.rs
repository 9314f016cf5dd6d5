//! Travel-mode and geometry-encoding vocabularies.

use serde::{Deserialize, Serialize};

/// Routing profile understood by the provider.
///
/// There is no transit profile: transit and any other unknown mode route as
/// [`RoutingProfile::Driving`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoutingProfile {
    /// Motor vehicle.
    #[default]
    Driving,
    /// On foot.
    Walking,
    /// Bicycle.
    Cycling,
}

impl RoutingProfile {
    /// Map a user-facing travel mode to a profile.
    ///
    /// Total and case-insensitive; absent or unknown modes map to driving.
    ///
    /// # Examples
    /// ```
    /// use routexplore_core::routing::RoutingProfile;
    ///
    /// assert_eq!(RoutingProfile::from_travel_mode(Some("Bicycling")), RoutingProfile::Cycling);
    /// assert_eq!(RoutingProfile::from_travel_mode(Some("transit")), RoutingProfile::Driving);
    /// assert_eq!(RoutingProfile::from_travel_mode(None), RoutingProfile::Driving);
    /// ```
    #[must_use]
    pub fn from_travel_mode(mode: Option<&str>) -> Self {
        match mode.map(str::to_lowercase).as_deref() {
            Some("walking") => Self::Walking,
            Some("bicycling" | "cycling") => Self::Cycling,
            _ => Self::Driving,
        }
    }

    /// Path segment used in provider URLs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Driving => "driving",
            Self::Walking => "walking",
            Self::Cycling => "cycling",
        }
    }
}

impl std::fmt::Display for RoutingProfile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Wire format of a route's path.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GeometryEncoding {
    /// GeoJSON `LineString`.
    #[default]
    GeoJson,
    /// Encoded polyline, precision 5.
    Polyline,
    /// Encoded polyline, precision 6.
    Polyline6,
}

impl GeometryEncoding {
    /// Parse a request parameter; anything other than `polyline` or
    /// `polyline6` selects GeoJSON.
    #[must_use]
    pub fn from_param(param: Option<&str>) -> Self {
        match param {
            Some("polyline6") => Self::Polyline6,
            Some("polyline") => Self::Polyline,
            _ => Self::GeoJson,
        }
    }

    /// Provider query value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::GeoJson => "geojson",
            Self::Polyline => "polyline",
            Self::Polyline6 => "polyline6",
        }
    }
}

impl std::fmt::Display for GeometryEncoding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
