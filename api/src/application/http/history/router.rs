use super::handlers::{
    clear_history::{__path_clear_history, clear_history},
    export_history::{__path_export_history, export_history},
    get_entry_report::{__path_get_entry_report, get_entry_report},
    get_history::{__path_get_history, get_history},
    get_history_entry::{__path_get_history_entry, get_history_entry},
    import_history::{__path_import_history, import_history},
};
use crate::application::{http::server::app_state::AppState, session_middleware::session_middleware};
use axum::{
    Router,
    extract::DefaultBodyLimit,
    middleware,
    routing::{get, post},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(
    get_history,
    clear_history,
    export_history,
    import_history,
    get_history_entry,
    get_entry_report
))]
pub struct HistoryApiDoc;

/// Room for a long session of multi-image analyses once base64 encoded.
pub const MAX_IMPORT_BODY_BYTES: usize = 32 * 1024 * 1024;

pub fn history_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/history", state.args.server.root_path),
            get(get_history).delete(clear_history),
        )
        .route(
            &format!("{}/history/export", state.args.server.root_path),
            get(export_history),
        )
        .route(
            &format!("{}/history/import", state.args.server.root_path),
            post(import_history).layer(DefaultBodyLimit::max(MAX_IMPORT_BODY_BYTES)),
        )
        .route(
            &format!("{}/history/{{entry_id}}", state.args.server.root_path),
            get(get_history_entry),
        )
        .route(
            &format!("{}/history/{{entry_id}}/report", state.args.server.root_path),
            get(get_entry_report),
        )
        .layer(middleware::from_fn_with_state(
            state.clone(),
            session_middleware,
        ))
}
