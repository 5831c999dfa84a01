use std::ops::RangeInclusive;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::provider::{
    entities::{GeocodedLocation, ProviderRecord},
    strategies::SearchStrategy,
};

pub const SEARCH_RADIUS_KM: RangeInclusive<u16> = 1..=50;
pub const DEFAULT_SEARCH_RADIUS_KM: u16 = 15;

/// Region options that are searched without the India suffix.
pub const INTERNATIONAL_REGIONS: [&str; 5] = [
    "United States",
    "United Kingdom",
    "Canada",
    "Australia",
    "Other",
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Region {
    #[default]
    India,
    International,
}

impl Region {
    pub fn for_state(state: &str) -> Self {
        let state = state.trim();
        if INTERNATIONAL_REGIONS
            .iter()
            .any(|r| r.eq_ignore_ascii_case(state))
        {
            Region::International
        } else {
            Region::India
        }
    }
}

/// Free-text geocoding query for a city and state or region.
pub fn location_query(city: &str, state: &str) -> String {
    let base = format!("{}, {}", city.trim(), state.trim());
    match Region::for_state(state) {
        Region::India => format!("{base}, India"),
        Region::International => base,
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ServiceType {
    #[default]
    Gynecologist,
    GeneralPhysician,
    Dermatologist,
    SexualHealthClinic,
    FamilyPlanningCenter,
    EmergencyServices,
    Pharmacy,
    DiagnosticCenter,
}

impl ServiceType {
    pub fn label(&self) -> &'static str {
        match self {
            ServiceType::Gynecologist => "Gynecologist/Women's Health Specialist",
            ServiceType::GeneralPhysician => "General Physician",
            ServiceType::Dermatologist => "Dermatologist",
            ServiceType::SexualHealthClinic => "Sexual Health Clinic",
            ServiceType::FamilyPlanningCenter => "Family Planning Center",
            ServiceType::EmergencyServices => "Emergency Services",
            ServiceType::Pharmacy => "Pharmacy",
            ServiceType::DiagnosticCenter => "Diagnostic Center",
        }
    }
}

#[derive(Debug, Clone)]
pub struct ProviderSearchInput {
    pub session_id: Uuid,
    pub city: String,
    pub state: String,
    pub radius_km: u16,
    pub service_type: ServiceType,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProviderSearchOutcome {
    pub location: GeocodedLocation,
    pub city: String,
    pub state: String,
    pub radius_km: u16,
    pub service_type: ServiceType,
    /// Strategy that produced the results, if any did.
    pub strategy: Option<SearchStrategy>,
    pub raw_results: usize,
    pub providers: Vec<ProviderRecord>,
    pub searched_at: DateTime<Utc>,
}

impl ProviderSearchOutcome {
    pub fn search_location(&self) -> String {
        format!("{}, {}", self.city, self.state)
    }
}
