use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Location-search query shapes, tried in order until one returns results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum SearchStrategy {
    /// Doctors, hospitals, clinics and pharmacies tagged as amenities.
    HealthcareAmenities,
    /// Anything carrying a `healthcare` tag.
    HealthcareTag,
    /// Healthcare and physician offices.
    MedicalOffices,
}

pub const SEARCH_STRATEGIES: [SearchStrategy; 3] = [
    SearchStrategy::HealthcareAmenities,
    SearchStrategy::HealthcareTag,
    SearchStrategy::MedicalOffices,
];

impl SearchStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchStrategy::HealthcareAmenities => "healthcare_amenities",
            SearchStrategy::HealthcareTag => "healthcare_tag",
            SearchStrategy::MedicalOffices => "medical_offices",
        }
    }
}
