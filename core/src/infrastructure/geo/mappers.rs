use std::collections::HashMap;

use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

use crate::domain::provider::entities::{
    ElementKind, GeoPoint, GeocodedLocation, LocationElement,
};

#[derive(Debug, Deserialize)]
pub struct OverpassResponse {
    #[serde(default)]
    pub elements: Vec<Value>,
}

#[derive(Debug, Deserialize)]
struct OverpassElement {
    #[serde(rename = "type")]
    kind: ElementKind,
    lat: Option<f64>,
    lon: Option<f64>,
    center: Option<OverpassCenter>,
    #[serde(default)]
    tags: HashMap<String, String>,
}

#[derive(Debug, Deserialize)]
struct OverpassCenter {
    lat: f64,
    lon: f64,
}

impl From<OverpassElement> for LocationElement {
    fn from(element: OverpassElement) -> Self {
        Self {
            kind: element.kind,
            lat: element.lat,
            lon: element.lon,
            center: element.center.map(|c| GeoPoint::new(c.lat, c.lon)),
            tags: element.tags,
        }
    }
}

/// Elements that do not decode are logged and skipped one by one.
pub fn map_overpass_elements(response: OverpassResponse) -> Vec<LocationElement> {
    response
        .elements
        .into_iter()
        .filter_map(|value| match serde_json::from_value::<OverpassElement>(value) {
            Ok(element) => Some(element.into()),
            Err(e) => {
                warn!(error = %e, "skipping malformed location element");
                None
            }
        })
        .collect()
}

#[derive(Debug, Deserialize)]
pub struct NominatimPlace {
    lat: String,
    lon: String,
    display_name: String,
}

pub fn map_nominatim_place(query: &str, places: Vec<NominatimPlace>) -> Option<GeocodedLocation> {
    places.into_iter().find_map(|place| {
        let point = GeoPoint::new(place.lat.parse().ok()?, place.lon.parse().ok()?);
        point.is_valid().then(|| GeocodedLocation {
            query: query.to_string(),
            display_name: place.display_name,
            point,
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nodes_and_ways_are_mapped_and_bad_elements_skipped() {
        let response: OverpassResponse = serde_json::from_str(
            r#"{
                "version": 0.6,
                "elements": [
                    {"type": "node", "id": 1, "lat": 28.61, "lon": 77.20,
                     "tags": {"amenity": "pharmacy", "name": "Apollo Pharmacy"}},
                    {"type": "way", "id": 2, "center": {"lat": 28.62, "lon": 77.21},
                     "tags": {"healthcare": "hospital"}},
                    {"type": "node", "id": 3, "lat": "north", "lon": 77.2},
                    {"type": "area", "id": 4},
                    {"type": "node", "id": 5, "lat": 28.63, "lon": 77.22}
                ]
            }"#,
        )
        .unwrap();

        let elements = map_overpass_elements(response);

        assert_eq!(elements.len(), 3);
        assert_eq!(elements[0].tag("name"), Some("Apollo Pharmacy"));
        assert_eq!(elements[1].kind, ElementKind::Way);
        assert_eq!(elements[1].center, Some(GeoPoint::new(28.62, 77.21)));
        assert!(elements[2].tags.is_empty());
    }

    #[test]
    fn missing_elements_key_is_empty() {
        let response: OverpassResponse = serde_json::from_str(r#"{"remark": "timeout"}"#).unwrap();
        assert!(map_overpass_elements(response).is_empty());
    }

    #[test]
    fn nominatim_coordinates_are_parsed() {
        let places: Vec<NominatimPlace> = serde_json::from_str(
            r#"[{"lat": "bad", "lon": "77.2", "display_name": "Nowhere"},
                {"lat": "28.6139", "lon": "77.2090", "display_name": "New Delhi, Delhi, India"}]"#,
        )
        .unwrap();

        let location = map_nominatim_place("New Delhi, Delhi, India", places).unwrap();

        assert_eq!(location.point, GeoPoint::new(28.6139, 77.2090));
        assert_eq!(location.display_name, "New Delhi, Delhi, India");
        assert!(map_nominatim_place("x", Vec::new()).is_none());
    }
}
