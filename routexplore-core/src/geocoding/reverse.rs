//! Reverse-geocoding results and concise label derivation.

use serde::{Deserialize, Serialize};

/// Address components returned by a reverse lookup.
///
/// Field names follow the OpenStreetMap tagging vocabulary used by Nominatim.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AddressDetails {
    /// Named tourist attraction.
    pub attraction: Option<String>,
    /// Other tourism feature.
    pub tourism: Option<String>,
    /// Named building.
    pub building: Option<String>,
    /// Amenity such as a station or hospital.
    pub amenity: Option<String>,
    /// Street name.
    pub road: Option<String>,
    /// Suburb or neighbourhood.
    pub suburb: Option<String>,
    /// Village.
    pub village: Option<String>,
    /// Town.
    pub town: Option<String>,
    /// City.
    pub city: Option<String>,
    /// County or district.
    pub county: Option<String>,
    /// State or province.
    pub state: Option<String>,
}

impl AddressDetails {
    /// City, falling back to town.
    fn locality(&self) -> Option<&str> {
        non_blank(self.city.as_deref()).or_else(|| non_blank(self.town.as_deref()))
    }

    /// State, falling back to county.
    fn region(&self) -> Option<&str> {
        non_blank(self.state.as_deref()).or_else(|| non_blank(self.county.as_deref()))
    }

    fn landmark(&self) -> Option<&str> {
        [
            &self.attraction,
            &self.tourism,
            &self.building,
            &self.amenity,
        ]
        .into_iter()
        .find_map(|field| non_blank(field.as_deref()))
    }
}

/// Result of a reverse lookup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReverseGeocode {
    /// Name of the feature at the location, when it is a point of interest.
    pub name: Option<String>,
    /// The provider's full human-readable address.
    pub display_name: Option<String>,
    /// Structured address components.
    #[serde(default)]
    pub address: AddressDetails,
}

impl ReverseGeocode {
    /// Derive a concise label.
    ///
    /// Candidates are tried in order: point-of-interest name;
    /// attraction/tourism/building/amenity; `road, city`;
    /// `suburb-or-village, region`; `city, region`; the full display string.
    ///
    /// # Examples
    /// ```
    /// use routexplore_core::geocoding::{AddressDetails, ReverseGeocode};
    ///
    /// let result = ReverseGeocode {
    ///     name: None,
    ///     display_name: Some("MG Road, Ernakulam, Kochi, Kerala, India".into()),
    ///     address: AddressDetails {
    ///         road: Some("MG Road".into()),
    ///         city: Some("Kochi".into()),
    ///         state: Some("Kerala".into()),
    ///         ..AddressDetails::default()
    ///     },
    /// };
    /// assert_eq!(result.label().as_deref(), Some("MG Road, Kochi"));
    /// ```
    #[must_use]
    pub fn label(&self) -> Option<String> {
        let address = &self.address;
        non_blank(self.name.as_deref())
            .or_else(|| address.landmark())
            .map(str::to_owned)
            .or_else(|| join_pair(non_blank(address.road.as_deref()), address.locality()))
            .or_else(|| {
                let area = non_blank(address.suburb.as_deref())
                    .or_else(|| non_blank(address.village.as_deref()));
                join_pair(area, address.region())
            })
            .or_else(|| join_pair(address.locality(), address.region()))
            .or_else(|| non_blank(self.display_name.as_deref()).map(str::to_owned))
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|text| !text.is_empty())
}

fn join_pair(first: Option<&str>, second: Option<&str>) -> Option<String> {
    Some(format!("{}, {}", first?, second?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn address() -> AddressDetails {
        AddressDetails {
            attraction: None,
            tourism: None,
            building: None,
            amenity: None,
            road: Some("Marine Drive".into()),
            suburb: Some("Ernakulam".into()),
            village: Some("Mulavukad".into()),
            town: None,
            city: Some("Kochi".into()),
            county: Some("Ernakulam District".into()),
            state: Some("Kerala".into()),
        }
    }

    fn result(name: Option<&str>, address: AddressDetails) -> ReverseGeocode {
        ReverseGeocode {
            name: name.map(str::to_owned),
            display_name: Some("Full display string".into()),
            address,
        }
    }

    #[rstest]
    fn prefers_point_of_interest_name() {
        let reverse = result(Some("Cochin Shipyard"), address());
        assert_eq!(reverse.label().as_deref(), Some("Cochin Shipyard"));
    }

    #[rstest]
    fn falls_back_to_landmark_tags_in_order() {
        let mut details = address();
        details.building = Some("Lulu Mall".into());
        details.amenity = Some("Bus stand".into());
        let reverse = result(Some("  "), details);
        assert_eq!(reverse.label().as_deref(), Some("Lulu Mall"));
    }

    #[rstest]
    fn composes_road_and_city() {
        assert_eq!(
            result(None, address()).label().as_deref(),
            Some("Marine Drive, Kochi")
        );
    }

    #[rstest]
    fn composes_suburb_and_region_without_a_road() {
        let mut details = address();
        details.road = None;
        assert_eq!(
            result(None, details).label().as_deref(),
            Some("Ernakulam, Kerala")
        );
    }

    #[rstest]
    fn composes_village_and_county_without_suburb_or_state() {
        let details = AddressDetails {
            village: Some("Mulavukad".into()),
            county: Some("Ernakulam District".into()),
            ..AddressDetails::default()
        };
        assert_eq!(
            result(None, details).label().as_deref(),
            Some("Mulavukad, Ernakulam District")
        );
    }

    #[rstest]
    fn composes_town_and_region() {
        let details = AddressDetails {
            town: Some("Aluva".into()),
            state: Some("Kerala".into()),
            ..AddressDetails::default()
        };
        assert_eq!(result(None, details).label().as_deref(), Some("Aluva, Kerala"));
    }

    #[rstest]
    fn falls_back_to_display_name() {
        let details = AddressDetails {
            city: Some("Kochi".into()),
            ..AddressDetails::default()
        };
        assert_eq!(
            result(None, details).label().as_deref(),
            Some("Full display string")
        );
    }

    #[rstest]
    fn empty_result_has_no_label() {
        assert_eq!(ReverseGeocode::default().label(), None);
    }
}
