//! OSRM API response types for the Route service.
//!
//! See: <http://project-osrm.org/docs/v5.24.0/api/#route-service>

use serde::Deserialize;

/// OSRM Route API response.
#[derive(Debug, Deserialize)]
pub struct RouteResponse {
    /// Status code from OSRM, `"Ok"` on success.
    pub code: String,

    /// Optional error message when `code` is not `"Ok"`.
    pub message: Option<String>,

    /// Route candidates, best first.
    #[serde(default)]
    pub routes: Vec<OsrmRoute>,
}

/// A single route candidate.
#[derive(Debug, Deserialize)]
pub struct OsrmRoute {
    /// Length in metres.
    #[serde(default)]
    pub distance: f64,
    /// Travel time in seconds.
    #[serde(default)]
    pub duration: f64,
    /// Path in the requested encoding.
    pub geometry: Option<OsrmGeometry>,
}

/// Route geometry: an encoded polyline string or a GeoJSON line string.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum OsrmGeometry {
    /// `polyline` or `polyline6` output.
    Encoded(String),
    /// `geojson` output with `[lng, lat]` positions.
    GeoJson {
        /// Positions in visiting order.
        coordinates: Vec<[f64; 2]>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialise_geojson_route() {
        let json = r#"{
            "code": "Ok",
            "routes": [{
                "distance": 81234.5,
                "duration": 5400.2,
                "geometry": {"type": "LineString", "coordinates": [[76.2144, 10.5276], [76.2673, 9.9312]]}
            }],
            "waypoints": []
        }"#;

        let response: RouteResponse = serde_json::from_str(json).expect("should deserialise");

        assert_eq!(response.code, "Ok");
        let route = response.routes.first().expect("one route");
        assert_eq!(route.distance, 81234.5);
        assert!(matches!(
            &route.geometry,
            Some(OsrmGeometry::GeoJson { coordinates }) if coordinates.len() == 2
        ));
    }

    #[test]
    fn deserialise_polyline_route() {
        let json = r#"{"code": "Ok", "routes": [{"distance": 10, "duration": 2, "geometry": "_p~iF~ps|U"}]}"#;

        let response: RouteResponse = serde_json::from_str(json).expect("should deserialise");

        let route = response.routes.first().expect("one route");
        assert!(matches!(&route.geometry, Some(OsrmGeometry::Encoded(text)) if text == "_p~iF~ps|U"));
    }

    #[test]
    fn deserialise_error_response() {
        let json = r#"{"code": "NoRoute", "message": "Impossible route between points"}"#;

        let response: RouteResponse = serde_json::from_str(json).expect("should deserialise");

        assert_eq!(response.code, "NoRoute");
        assert_eq!(
            response.message.as_deref(),
            Some("Impossible route between points")
        );
        assert!(response.routes.is_empty());
    }
}
