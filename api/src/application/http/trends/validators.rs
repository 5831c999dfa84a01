use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Serialize, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct TrendParams {
    /// Restrict the series to one condition label. Case-insensitive.
    #[schema(example = "Bacterial Vaginosis")]
    pub condition: Option<String>,
}
