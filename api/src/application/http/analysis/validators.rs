use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;
use yshy_core::domain::analysis::{entities::Language, value_objects::PainLevel};

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct SymptomCheckValidator {
    #[serde(default)]
    pub language: Language,
    #[validate(length(
        min = 21,
        max = 5000,
        message = "Please provide a more detailed description of your symptoms (at least 20 characters)"
    ))]
    pub description: String,
    #[validate(range(min = 1, max = 90, message = "duration_days must be between 1 and 90"))]
    pub duration_days: u16,
    #[serde(default)]
    pub pain_level: PainLevel,
    #[serde(default)]
    #[validate(length(max = 20, message = "at most 20 factors can be reported"))]
    pub factors: Vec<String>,
    #[validate(range(min = 1, max = 5, message = "severity must be between 1 and 5"))]
    pub severity: Option<u8>,
}
