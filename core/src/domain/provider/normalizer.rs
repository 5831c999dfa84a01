//! Turns raw location-search elements into sorted, deduplicated provider records.

use std::collections::HashSet;

use tracing::debug;

use crate::domain::provider::{
    entities::{ElementKind, FacilityType, GeoPoint, LocationElement, ProviderRecord},
    geo::{coordinate_key, directions_url, haversine_km, round2},
};

const GENERIC_PROVIDER_NAME: &str = "Healthcare Provider";
const MEANINGLESS_NAMES: [&str; 3] = ["yes", "no", "null"];
const NOT_AVAILABLE: &str = "Not available";
const DEFAULT_HOURS: &str = "Call to confirm hours";

#[derive(Debug, Clone, Copy)]
pub struct NormalizeContext<'a> {
    pub origin: GeoPoint,
    pub radius_km: f64,
    pub city: &'a str,
    pub state: &'a str,
}

pub fn normalize_providers(
    elements: &[LocationElement],
    context: NormalizeContext<'_>,
) -> Vec<ProviderRecord> {
    let mut seen = HashSet::new();
    let mut providers: Vec<(f64, ProviderRecord)> = Vec::new();

    for element in elements {
        let Some(point) = element_point(element) else {
            debug!(kind = ?element.kind, "element without usable coordinates skipped");
            continue;
        };

        if !seen.insert(coordinate_key(point)) {
            continue;
        }

        let distance = haversine_km(context.origin, point);
        if !distance.is_finite() || distance > context.radius_km {
            continue;
        }

        let Some(name) = resolve_name(element) else {
            continue;
        };

        let record = ProviderRecord {
            name,
            address: build_address(element, context.city, context.state),
            phone: first_tag(element, &["phone", "contact:phone"])
                .unwrap_or(NOT_AVAILABLE)
                .to_string(),
            website: first_tag(element, &["website", "contact:website"])
                .unwrap_or(NOT_AVAILABLE)
                .to_string(),
            hours: element
                .tag("opening_hours")
                .unwrap_or(DEFAULT_HOURS)
                .to_string(),
            distance_km: round2(distance),
            lat: point.lat,
            lon: point.lon,
            facility_type: classify_facility(element),
            directions_url: directions_url(context.origin, point),
        };

        providers.push((distance, record));
    }

    providers.sort_by(|a, b| a.0.total_cmp(&b.0));
    providers.into_iter().map(|(_, record)| record).collect()
}

/// Points use their own coordinates, areas their center.
pub fn element_point(element: &LocationElement) -> Option<GeoPoint> {
    let point = match element.kind {
        ElementKind::Node => GeoPoint::new(element.lat?, element.lon?),
        ElementKind::Way | ElementKind::Relation => element.center?,
    };

    point.is_valid().then_some(point)
}

pub fn resolve_name(element: &LocationElement) -> Option<String> {
    let name = first_tag(element, &["name", "operator", "brand"]).unwrap_or(GENERIC_PROVIDER_NAME);

    let lowered = name.to_lowercase();
    if name.chars().count() < 2 || MEANINGLESS_NAMES.contains(&lowered.as_str()) {
        return None;
    }

    Some(name.to_string())
}

/// Fixed priority table, first match wins.
pub fn classify_facility(element: &LocationElement) -> FacilityType {
    let amenity = element.tag("amenity").unwrap_or_default();
    let healthcare = element.tag("healthcare").unwrap_or_default();
    let office = element.tag("office").unwrap_or_default();

    if amenity == "hospital" || healthcare == "hospital" {
        FacilityType::Hospital
    } else if amenity == "pharmacy" {
        FacilityType::Pharmacy
    } else if amenity == "clinic" || healthcare == "clinic" {
        FacilityType::Clinic
    } else if amenity == "doctors"
        || healthcare == "doctor"
        || matches!(office, "healthcare" | "physician")
    {
        FacilityType::Doctor
    } else {
        FacilityType::Other
    }
}

pub fn build_address(element: &LocationElement, city: &str, state: &str) -> String {
    let parts: Vec<&str> = ["addr:housenumber", "addr:street", "addr:city"]
        .iter()
        .filter_map(|key| element.tag(key))
        .collect();

    if parts.is_empty() {
        format!("Near {city}, {state}")
    } else {
        parts.join(", ")
    }
}

fn first_tag<'a>(element: &'a LocationElement, keys: &[&str]) -> Option<&'a str> {
    keys.iter().find_map(|key| element.tag(key))
}
