use axum::{
    extract::{Request, State},
    http::HeaderValue,
    middleware::Next,
    response::Response,
};
use tracing::debug;
use uuid::Uuid;
use yshy_core::domain::session::ports::SessionService;

use crate::application::http::server::{api_entities::api_error::ApiError, app_state::AppState};

pub const SESSION_HEADER: &str = "x-session-id";

/// Session resolved for the current request, stored in request extensions.
#[derive(Clone, Copy, Debug)]
pub struct CurrentSession {
    pub session_id: Uuid,
    pub is_new: bool,
}

/// Resolves `x-session-id` to a live session, starting a new one when the
/// header is missing or names an unknown session. The id in use is echoed
/// back in the response header.
pub async fn session_middleware(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let requested = req
        .headers()
        .get(SESSION_HEADER)
        .and_then(|h| h.to_str().ok())
        .and_then(|s| Uuid::parse_str(s.trim()).ok());

    let session = state.service.resolve_session(requested).await?;
    if session.is_new {
        debug!(session_id = %session.id, "new session attached to request");
    }

    req.extensions_mut().insert(CurrentSession {
        session_id: session.id,
        is_new: session.is_new,
    });

    let mut response = next.run(req).await;
    if let Ok(value) = HeaderValue::from_str(&session.id.to_string()) {
        response.headers_mut().insert(SESSION_HEADER, value);
    }

    Ok(response)
}
