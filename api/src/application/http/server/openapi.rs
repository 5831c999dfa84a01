use crate::application::http::{
    analysis::router::AnalysisApiDoc,
    health::__path_health,
    history::router::HistoryApiDoc,
    provider::handlers::{
        get_resource_report::__path_get_resource_report, get_resources::__path_get_resources,
        search_providers::__path_search_providers,
    },
    session::router::SessionApiDoc,
    tracker::router::TrackerApiDoc,
    trends::router::TrendsApiDoc,
};
use utoipa::OpenApi;

use super::config::__path_get_config;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "YSHY API",
        description = "Preliminary, non-diagnostic analysis of intimate-health images and symptoms"
    ),
    paths(
        get_config,
        health,
        search_providers,
        get_resource_report,
        get_resources
    ),
    nest(
        (path = "/analysis", api = AnalysisApiDoc),
        (path = "/history", api = HistoryApiDoc),
        (path = "/tracker", api = TrackerApiDoc),
        (path = "/trends", api = TrendsApiDoc),
        (path = "/session", api = SessionApiDoc),
    )
)]
pub struct ApiDoc;
