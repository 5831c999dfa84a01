use axum::{
    Extension,
    extract::{Path, State},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use yshy_core::domain::history::{entities::HistoryEntry, ports::HistoryService};

use crate::application::{
    http::server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
    session_middleware::CurrentSession,
};

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct HistoryEntryResponse {
    pub data: HistoryEntry,
}

#[utoipa::path(
    get,
    path = "/{entry_id}",
    tag = "history",
    summary = "Get one history entry",
    params(
        ("entry_id" = String, Path, description = "History entry id"),
    ),
    responses(
        (status = 200, body = HistoryEntryResponse),
        (status = 404, description = "No entry with this id")
    ),
)]
pub async fn get_history_entry(
    Path(entry_id): Path<String>,
    State(state): State<AppState>,
    Extension(session): Extension<CurrentSession>,
) -> Result<Response<HistoryEntryResponse>, ApiError> {
    let entry = state
        .service
        .get_history_entry(session.session_id, entry_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(HistoryEntryResponse { data: entry }))
}
