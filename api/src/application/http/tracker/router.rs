use super::handlers::{
    add_tracker_entry::{__path_add_tracker_entry, add_tracker_entry},
    clear_tracker::{__path_clear_tracker, clear_tracker},
    get_tracker_entries::{__path_get_tracker_entries, get_tracker_entries},
};
use crate::application::{http::server::app_state::AppState, session_middleware::session_middleware};
use axum::{Router, middleware, routing::get};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(get_tracker_entries, add_tracker_entry, clear_tracker))]
pub struct TrackerApiDoc;

pub fn tracker_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/tracker", state.args.server.root_path),
            get(get_tracker_entries)
                .post(add_tracker_entry)
                .delete(clear_tracker),
        )
        .layer(middleware::from_fn_with_state(
            state.clone(),
            session_middleware,
        ))
}
