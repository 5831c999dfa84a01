use axum::{Extension, extract::State};
use yshy_core::domain::history::ports::HistoryService;

use crate::application::{
    http::{
        history::handlers::clear_history::ClearedResponse,
        server::{
            api_entities::{api_error::ApiError, response::Response},
            app_state::AppState,
        },
    },
    session_middleware::CurrentSession,
};

#[utoipa::path(
    delete,
    path = "",
    tag = "tracker",
    summary = "Clear symptom tracker entries",
    description = "Removes every tracker entry. The analysis history is kept.",
    responses(
        (status = 200, body = ClearedResponse)
    ),
)]
pub async fn clear_tracker(
    State(state): State<AppState>,
    Extension(session): Extension<CurrentSession>,
) -> Result<Response<ClearedResponse>, ApiError> {
    state
        .service
        .clear_tracker(session.session_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(ClearedResponse {
        message: "Tracker cleared".to_string(),
    }))
}
