use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;
use yshy_core::domain::provider::value_objects::{DEFAULT_SEARCH_RADIUS_KM, Region, ServiceType};

fn default_radius() -> u16 {
    DEFAULT_SEARCH_RADIUS_KM
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct ProviderSearchValidator {
    #[validate(length(min = 1, max = 100, message = "city must be between 1 and 100 characters"))]
    #[schema(example = "Pune")]
    pub city: String,
    #[validate(length(min = 1, max = 100, message = "state must be between 1 and 100 characters"))]
    #[schema(example = "Maharashtra")]
    pub state: String,
    #[serde(default = "default_radius")]
    #[validate(range(min = 1, max = 50, message = "radius_km must be between 1 and 50"))]
    #[schema(example = 15)]
    pub radius_km: u16,
    #[serde(default)]
    pub service_type: ServiceType,
}

#[derive(Debug, Serialize, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct ResourceParams {
    /// Takes precedence over `state`.
    pub region: Option<Region>,
    /// State or region name used to pick the listing when `region` is absent.
    pub state: Option<String>,
}

impl ResourceParams {
    pub fn region(&self) -> Region {
        self.region
            .or_else(|| self.state.as_deref().map(Region::for_state))
            .unwrap_or_default()
    }
}
