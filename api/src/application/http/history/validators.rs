use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct ImportHistoryValidator {
    /// Contents of a previously exported `.yshy` file.
    #[validate(length(min = 1, message = "data must not be empty"))]
    pub data: String,
}
