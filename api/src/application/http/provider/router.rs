use super::handlers::{
    get_resource_report::get_resource_report, get_resources::get_resources,
    search_providers::search_providers,
};
use crate::application::{http::server::app_state::AppState, session_middleware::session_middleware};
use axum::{
    Router, middleware,
    routing::{get, post},
};

pub fn provider_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/providers/search", state.args.server.root_path),
            post(search_providers),
        )
        .route(
            &format!("{}/providers/report", state.args.server.root_path),
            get(get_resource_report),
        )
        .route(
            &format!("{}/resources", state.args.server.root_path),
            get(get_resources),
        )
        .layer(middleware::from_fn_with_state(
            state.clone(),
            session_middleware,
        ))
}
