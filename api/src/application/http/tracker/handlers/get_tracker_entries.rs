use axum::{Extension, extract::State};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use yshy_core::domain::history::{entities::TrackerEntry, ports::HistoryService};

use crate::application::{
    http::server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
    session_middleware::CurrentSession,
};

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TrackerEntriesResponse {
    pub data: Vec<TrackerEntry>,
}

#[utoipa::path(
    get,
    path = "",
    tag = "tracker",
    summary = "List symptom tracker entries",
    responses(
        (status = 200, body = TrackerEntriesResponse)
    ),
)]
pub async fn get_tracker_entries(
    State(state): State<AppState>,
    Extension(session): Extension<CurrentSession>,
) -> Result<Response<TrackerEntriesResponse>, ApiError> {
    let entries = state
        .service
        .list_tracker_entries(session.session_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(TrackerEntriesResponse { data: entries }))
}
