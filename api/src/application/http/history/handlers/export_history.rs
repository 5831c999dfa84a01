use axum::{Extension, extract::State};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use yshy_core::domain::history::{ports::HistoryService, value_objects::ExportedHistory};

use crate::application::{
    http::server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
    session_middleware::CurrentSession,
};

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ExportHistoryResponse {
    pub data: ExportedHistory,
}

#[utoipa::path(
    get,
    path = "/export",
    tag = "history",
    summary = "Export history and tracker entries",
    description = "Returns a base64 document that can be saved as a `.yshy` file and imported later",
    responses(
        (status = 200, body = ExportHistoryResponse)
    ),
)]
pub async fn export_history(
    State(state): State<AppState>,
    Extension(session): Extension<CurrentSession>,
) -> Result<Response<ExportHistoryResponse>, ApiError> {
    let exported = state
        .service
        .export_history(session.session_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(ExportHistoryResponse { data: exported }))
}
