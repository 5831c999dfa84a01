use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lon.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lon)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    Node,
    Way,
    Relation,
}

/// Raw location-search element: a point, or an area carrying its center.
#[derive(Debug, Clone, PartialEq)]
pub struct LocationElement {
    pub kind: ElementKind,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    pub center: Option<GeoPoint>,
    pub tags: HashMap<String, String>,
}

impl LocationElement {
    pub fn tag(&self, key: &str) -> Option<&str> {
        self.tags
            .get(key)
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum FacilityType {
    Hospital,
    Pharmacy,
    Clinic,
    #[serde(rename = "Doctor/Physician")]
    Doctor,
    #[serde(rename = "Healthcare Facility")]
    Other,
}

impl FacilityType {
    pub fn label(&self) -> &'static str {
        match self {
            FacilityType::Hospital => "Hospital",
            FacilityType::Pharmacy => "Pharmacy",
            FacilityType::Clinic => "Clinic",
            FacilityType::Doctor => "Doctor/Physician",
            FacilityType::Other => "Healthcare Facility",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProviderRecord {
    pub name: String,
    pub address: String,
    pub phone: String,
    pub website: String,
    pub hours: String,
    pub distance_km: f64,
    pub lat: f64,
    pub lon: f64,
    pub facility_type: FacilityType,
    pub directions_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GeocodedLocation {
    pub query: String,
    pub display_name: String,
    pub point: GeoPoint,
}
