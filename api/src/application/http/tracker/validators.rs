use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct AddTrackerEntryValidator {
    #[validate(length(min = 1, max = 100, message = "condition must be between 1 and 100 characters"))]
    pub condition: String,
    #[validate(range(min = 1, max = 5, message = "severity must be between 1 and 5"))]
    pub severity: u8,
    /// Defaults to now.
    pub date: Option<DateTime<Utc>>,
}
