use super::handlers::get_trends::{__path_get_trends, get_trends};
use crate::application::{http::server::app_state::AppState, session_middleware::session_middleware};
use axum::{Router, middleware, routing::get};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(get_trends))]
pub struct TrendsApiDoc;

pub fn trends_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/trends", state.args.server.root_path),
            get(get_trends),
        )
        .layer(middleware::from_fn_with_state(
            state.clone(),
            session_middleware,
        ))
}
