use super::handlers::{
    analyze_images::{__path_analyze_images, MAX_IMAGE_SIZE, analyze_images},
    check_symptoms::{__path_check_symptoms, check_symptoms},
};
use crate::application::{http::server::app_state::AppState, session_middleware::session_middleware};
use axum::{Router, extract::DefaultBodyLimit, middleware, routing::post};
use utoipa::OpenApi;
use yshy_core::domain::analysis::value_objects::MAX_IMAGES_PER_ANALYSIS;

#[derive(OpenApi)]
#[openapi(paths(analyze_images, check_symptoms))]
pub struct AnalysisApiDoc;

pub fn analysis_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/analysis/images", state.args.server.root_path),
            post(analyze_images).layer(DefaultBodyLimit::max(
                MAX_IMAGE_SIZE * MAX_IMAGES_PER_ANALYSIS + 64 * 1024,
            )),
        )
        .route(
            &format!("{}/analysis/symptoms", state.args.server.root_path),
            post(check_symptoms),
        )
        .layer(middleware::from_fn_with_state(
            state.clone(),
            session_middleware,
        ))
}
