use super::handlers::{
    end_session::{__path_end_session, end_session},
    get_session::{__path_get_session, get_session},
};
use crate::application::{http::server::app_state::AppState, session_middleware::session_middleware};
use axum::{Router, middleware, routing::get};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(get_session, end_session))]
pub struct SessionApiDoc;

pub fn session_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/session", state.args.server.root_path),
            get(get_session).delete(end_session),
        )
        .layer(middleware::from_fn_with_state(
            state.clone(),
            session_middleware,
        ))
}
