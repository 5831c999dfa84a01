use axum::{
    Extension,
    extract::{Query, State},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use yshy_core::domain::trends::{
    ports::TrendService,
    value_objects::{TrendFilter, TrendReport},
};

use crate::application::{
    http::{
        server::{
            api_entities::{api_error::ApiError, response::Response},
            app_state::AppState,
        },
        trends::validators::TrendParams,
    },
    session_middleware::CurrentSession,
};

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TrendResponse {
    pub data: TrendReport,
}

#[utoipa::path(
    get,
    path = "",
    tag = "trends",
    summary = "Severity trend over history and tracker entries",
    description = "Statistics and classification are omitted when there are no records; a single record has a flat trend",
    params(TrendParams),
    responses(
        (status = 200, body = TrendResponse)
    ),
)]
pub async fn get_trends(
    State(state): State<AppState>,
    Extension(session): Extension<CurrentSession>,
    Query(params): Query<TrendParams>,
) -> Result<Response<TrendResponse>, ApiError> {
    let condition = params
        .condition
        .map(|c| c.trim().to_string())
        .filter(|c| !c.is_empty() && !c.eq_ignore_ascii_case("all"));

    let report = state
        .service
        .trend_report(TrendFilter {
            session_id: session.session_id,
            condition,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(TrendResponse { data: report }))
}
