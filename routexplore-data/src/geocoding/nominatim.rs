//! Nominatim response types.
//!
//! See: <https://nominatim.org/release-docs/latest/api/Overview/>

use routexplore_core::geocoding::{AddressDetails, ReverseGeocode};
use serde::Deserialize;

/// One entry of a `/search` response. Coordinates arrive as strings.
#[derive(Debug, Deserialize)]
pub struct SearchHit {
    pub lat: String,
    pub lon: String,
}

/// A `/reverse` response.
///
/// Nominatim answers an unmatched location with `{"error": ".."}` and a
/// success status.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ReverseResponse {
    pub error: Option<String>,
    pub name: Option<String>,
    pub display_name: Option<String>,
    pub address: AddressDetails,
}

impl ReverseResponse {
    #[must_use]
    pub fn into_reverse_geocode(self) -> Option<ReverseGeocode> {
        if let Some(error) = self.error {
            log::debug!("reverse geocoding found nothing: {error}");
            return None;
        }
        Some(ReverseGeocode {
            name: self.name,
            display_name: self.display_name,
            address: self.address,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialise_search_hits() {
        let json = r#"[{"place_id": 1, "lat": "9.9312328", "lon": "76.2673041", "display_name": "Kochi"}]"#;
        let hits: Vec<SearchHit> = serde_json::from_str(json).expect("should deserialise");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].lat, "9.9312328");
        assert_eq!(hits[0].lon, "76.2673041");
    }

    #[test]
    fn deserialise_reverse_response() {
        let json = r#"{
            "name": "",
            "display_name": "MG Road, Kochi, Kerala, India",
            "address": {"road": "MG Road", "city": "Kochi", "state": "Kerala", "country": "India"}
        }"#;
        let response: ReverseResponse = serde_json::from_str(json).expect("should deserialise");
        let reverse = response.into_reverse_geocode().expect("a location");
        assert_eq!(reverse.address.road.as_deref(), Some("MG Road"));
        assert_eq!(reverse.label().as_deref(), Some("MG Road, Kochi"));
    }

    #[test]
    fn error_responses_mean_no_match() {
        let response: ReverseResponse =
            serde_json::from_str(r#"{"error": "Unable to geocode"}"#).expect("should deserialise");
        assert!(response.into_reverse_geocode().is_none());
    }
}
