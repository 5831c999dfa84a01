use axum::{Extension, extract::State};
use yshy_core::domain::session::ports::SessionService;

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
    tag = "session",
    summary = "End the current session",
    description = "Drops the session and everything recorded in it",
    responses(
        (status = 200, body = ClearedResponse)
    ),
)]
pub async fn end_session(
    State(state): State<AppState>,
    Extension(session): Extension<CurrentSession>,
) -> Result<Response<ClearedResponse>, ApiError> {
    state
        .service
        .end_session(session.session_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(ClearedResponse {
        message: "Session ended".to_string(),
    }))
}
