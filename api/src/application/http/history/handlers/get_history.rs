use axum::{Extension, extract::State};
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
pub struct HistoryResponse {
    pub data: Vec<HistoryEntry>,
}

#[utoipa::path(
    get,
    path = "",
    tag = "history",
    summary = "List the session history",
    description = "Returns every recorded analysis in insertion order",
    responses(
        (status = 200, body = HistoryResponse)
    ),
)]
pub async fn get_history(
    State(state): State<AppState>,
    Extension(session): Extension<CurrentSession>,
) -> Result<Response<HistoryResponse>, ApiError> {
    let entries = state
        .service
        .list_history(session.session_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(HistoryResponse { data: entries }))
}
