use axum::{Extension, extract::State};
use yshy_core::domain::provider::ports::ProviderService;

use crate::application::{
    http::server::{
        api_entities::{api_error::ApiError, response::TextAttachment},
        app_state::AppState,
    },
    session_middleware::CurrentSession,
};

#[utoipa::path(
    get,
    path = "/providers/report",
    tag = "providers",
    summary = "Download the last provider search as a resource list",
    responses(
        (status = 200, content_type = "text/plain", body = String),
        (status = 404, description = "No provider search in this session yet")
    ),
)]
pub async fn get_resource_report(
    State(state): State<AppState>,
    Extension(session): Extension<CurrentSession>,
) -> Result<TextAttachment, ApiError> {
    let (file_name, body) = state
        .service
        .provider_resource_report(session.session_id)
        .await
        .map_err(ApiError::from)?;

    Ok(TextAttachment { file_name, body })
}
