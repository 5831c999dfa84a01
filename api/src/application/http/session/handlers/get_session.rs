use axum::{Extension, extract::State};
use serde::Serialize;
use utoipa::ToSchema;
use yshy_core::domain::session::{entities::SessionInfo, ports::SessionService};

use crate::application::{
    http::server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
    session_middleware::CurrentSession,
};

#[derive(Debug, PartialEq, Serialize, ToSchema)]
pub struct SessionResponse {
    pub data: SessionInfo,
}

#[utoipa::path(
    get,
    path = "",
    tag = "session",
    summary = "Current session",
    description = "Starts a session when the `x-session-id` header is missing or unknown",
    responses(
        (status = 200, body = SessionResponse)
    ),
)]
pub async fn get_session(
    State(state): State<AppState>,
    Extension(session): Extension<CurrentSession>,
) -> Result<Response<SessionResponse>, ApiError> {
    let mut info = state
        .service
        .resolve_session(Some(session.session_id))
        .await
        .map_err(ApiError::from)?;
    info.is_new = session.is_new;

    Ok(Response::OK(SessionResponse { data: info }))
}
