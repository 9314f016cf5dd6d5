//! Validated routing requests.

use crate::Coordinate;

use super::error::RoutingError;
use super::profile::{GeometryEncoding, RoutingProfile};

/// Ordered coordinates plus routing options.
///
/// Always holds at least two coordinates: start first, end last.
///
/// # Examples
/// ```
/// use routexplore_core::Coordinate;
/// use routexplore_core::routing::{GeometryEncoding, RouteRequest, RoutingProfile};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let request = RouteRequest::with_waypoints(
///     "10.52,76.21".parse()?,
///     ["10.3,76.33".parse::<Coordinate>()?],
///     "9.93,76.26".parse()?,
/// )
/// .with_profile(RoutingProfile::Walking)
/// .with_encoding(GeometryEncoding::Polyline);
/// assert_eq!(request.coordinates().len(), 3);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RouteRequest {
    coordinates: Vec<Coordinate>,
    profile: RoutingProfile,
    encoding: GeometryEncoding,
}

impl RouteRequest {
    /// A direct route from `start` to `end`.
    #[must_use]
    pub fn new(start: Coordinate, end: Coordinate) -> Self {
        Self::with_waypoints(start, std::iter::empty(), end)
    }

    /// A route from `start` through `waypoints`, in order, to `end`.
    #[must_use]
    pub fn with_waypoints(
        start: Coordinate,
        waypoints: impl IntoIterator<Item = Coordinate>,
        end: Coordinate,
    ) -> Self {
        let coordinates = std::iter::once(start)
            .chain(waypoints)
            .chain(std::iter::once(end))
            .collect();
        Self {
            coordinates,
            profile: RoutingProfile::default(),
            encoding: GeometryEncoding::default(),
        }
    }

    /// A route through `coordinates` in visiting order.
    ///
    /// # Errors
    ///
    /// Returns [`RoutingError::TooFewCoordinates`] for fewer than two
    /// coordinates.
    pub fn through(coordinates: Vec<Coordinate>) -> Result<Self, RoutingError> {
        if coordinates.len() < 2 {
            return Err(RoutingError::TooFewCoordinates {
                found: coordinates.len(),
            });
        }
        Ok(Self {
            coordinates,
            profile: RoutingProfile::default(),
            encoding: GeometryEncoding::default(),
        })
    }

    /// Set the routing profile.
    #[must_use]
    pub const fn with_profile(mut self, profile: RoutingProfile) -> Self {
        self.profile = profile;
        self
    }

    /// Set the output geometry encoding.
    #[must_use]
    pub const fn with_encoding(mut self, encoding: GeometryEncoding) -> Self {
        self.encoding = encoding;
        self
    }

    /// Coordinates in visiting order.
    #[must_use]
    pub fn coordinates(&self) -> &[Coordinate] {
        &self.coordinates
    }

    /// Routing profile.
    #[must_use]
    pub const fn profile(&self) -> RoutingProfile {
        self.profile
    }

    /// Requested geometry encoding.
    #[must_use]
    pub const fn encoding(&self) -> GeometryEncoding {
        self.encoding
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn coordinate(lat: f64, lng: f64) -> Coordinate {
        Coordinate::new(lat, lng).expect("valid coordinate")
    }

    #[rstest]
    fn direct_request_has_two_points_and_defaults() {
        let request = RouteRequest::new(coordinate(1.0, 2.0), coordinate(3.0, 4.0));
        assert_eq!(
            request.coordinates(),
            &[coordinate(1.0, 2.0), coordinate(3.0, 4.0)]
        );
        assert_eq!(request.profile(), RoutingProfile::Driving);
        assert_eq!(request.encoding(), GeometryEncoding::GeoJson);
    }

    #[rstest]
    fn waypoints_keep_their_order_between_start_and_end() {
        let request = RouteRequest::with_waypoints(
            coordinate(0.0, 0.0),
            [coordinate(2.0, 2.0), coordinate(1.0, 1.0)],
            coordinate(3.0, 3.0),
        );
        let lats: Vec<f64> = request.coordinates().iter().map(Coordinate::lat).collect();
        assert_eq!(lats, vec![0.0, 2.0, 1.0, 3.0]);
    }

    #[rstest]
    #[case(0)]
    #[case(1)]
    fn through_rejects_short_sequences(#[case] count: usize) {
        let coordinates = vec![coordinate(0.0, 0.0); count];
        assert_eq!(
            RouteRequest::through(coordinates),
            Err(RoutingError::TooFewCoordinates { found: count })
        );
    }
}
