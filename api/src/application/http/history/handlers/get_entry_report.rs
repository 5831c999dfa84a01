use axum::{
    Extension,
    extract::{Path, State},
};
use yshy_core::domain::history::ports::HistoryService;

use crate::application::{
    http::server::{
        api_entities::{api_error::ApiError, response::TextAttachment},
        app_state::AppState,
    },
    session_middleware::CurrentSession,
};

#[utoipa::path(
    get,
    path = "/{entry_id}/report",
    tag = "history",
    summary = "Download a plain-text report for one entry",
    params(
        ("entry_id" = String, Path, description = "History entry id"),
    ),
    responses(
        (status = 200, content_type = "text/plain", body = String),
        (status = 404, description = "No entry with this id")
    ),
)]
pub async fn get_entry_report(
    Path(entry_id): Path<String>,
    State(state): State<AppState>,
    Extension(session): Extension<CurrentSession>,
) -> Result<TextAttachment, ApiError> {
    let (file_name, body) = state
        .service
        .history_entry_report(session.session_id, entry_id)
        .await
        .map_err(ApiError::from)?;

    Ok(TextAttachment { file_name, body })
}
