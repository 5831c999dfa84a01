use axum::{Extension, extract::State};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use yshy_core::domain::provider::{
    ports::ProviderService,
    value_objects::{ProviderSearchInput, ProviderSearchOutcome},
};

use crate::application::{
    http::{
        provider::validators::ProviderSearchValidator,
        server::{
            api_entities::{
                api_error::{ApiError, ValidateJson},
                response::Response,
            },
            app_state::AppState,
        },
    },
    session_middleware::CurrentSession,
};

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProviderSearchResponse {
    pub data: ProviderSearchOutcome,
}

#[utoipa::path(
    post,
    path = "/providers/search",
    tag = "providers",
    summary = "Find nearby healthcare providers",
    description = "Geocodes the city and state, then searches map data around it. \
        Providers are sorted by distance.",
    request_body = ProviderSearchValidator,
    responses(
        (status = 200, body = ProviderSearchResponse),
        (status = 404, description = "The location could not be geocoded"),
        (status = 502, description = "The map services failed")
    ),
)]
pub async fn search_providers(
    State(state): State<AppState>,
    Extension(session): Extension<CurrentSession>,
    ValidateJson(payload): ValidateJson<ProviderSearchValidator>,
) -> Result<Response<ProviderSearchResponse>, ApiError> {
    let outcome = state
        .service
        .search_providers(ProviderSearchInput {
            session_id: session.session_id,
            city: payload.city,
            state: payload.state,
            radius_km: payload.radius_km,
            service_type: payload.service_type,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(ProviderSearchResponse { data: outcome }))
}
