use axum::{Extension, extract::State};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use yshy_core::domain::history::ports::HistoryService;

use crate::application::{
    http::server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
    session_middleware::CurrentSession,
};

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ClearedResponse {
    pub message: String,
}

#[utoipa::path(
    delete,
    path = "",
    tag = "history",
    summary = "Clear the session history",
    description = "Removes every history entry. Tracker entries are kept.",
    responses(
        (status = 200, body = ClearedResponse)
    ),
)]
pub async fn clear_history(
    State(state): State<AppState>,
    Extension(session): Extension<CurrentSession>,
) -> Result<Response<ClearedResponse>, ApiError> {
    state
        .service
        .clear_history(session.session_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(ClearedResponse {
        message: "History cleared".to_string(),
    }))
}
