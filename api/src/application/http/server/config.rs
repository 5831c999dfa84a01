use axum::extract::State;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use yshy_core::domain::{
    analysis::value_objects::{MAX_IMAGES_PER_ANALYSIS, MIN_SYMPTOM_DESCRIPTION_CHARS},
    provider::value_objects::{DEFAULT_SEARCH_RADIUS_KM, SEARCH_RADIUS_KM},
};

use super::{api_entities::response::Response, app_state::AppState};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct AppConfig {
    pub app_version: String,
    pub languages: Vec<String>,
    pub max_images_per_analysis: usize,
    pub min_symptom_description_chars: usize,
    pub min_search_radius_km: u16,
    pub max_search_radius_km: u16,
    pub default_search_radius_km: u16,
    pub session_ttl_minutes: u64,
}

#[utoipa::path(
    get,
    path = "/config",
    tag = "config",
    summary = "Client configuration",
    responses(
        (status = 200, body = AppConfig)
    ),
)]
pub async fn get_config(State(state): State<AppState>) -> Response<AppConfig> {
    Response::OK(AppConfig {
        app_version: env!("CARGO_PKG_VERSION").to_string(),
        languages: vec!["english".to_string(), "hindi".to_string()],
        max_images_per_analysis: MAX_IMAGES_PER_ANALYSIS,
        min_symptom_description_chars: MIN_SYMPTOM_DESCRIPTION_CHARS,
        min_search_radius_km: *SEARCH_RADIUS_KM.start(),
        max_search_radius_km: *SEARCH_RADIUS_KM.end(),
        default_search_radius_km: DEFAULT_SEARCH_RADIUS_KM,
        session_ttl_minutes: state.args.session.ttl_minutes,
    })
}
