use axum::{Extension, extract::State};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use yshy_core::domain::history::{
    entities::TrackerEntry, ports::HistoryService, value_objects::AddTrackerEntryInput,
};

use crate::application::{
    http::{
        server::{
            api_entities::{
                api_error::{ApiError, ValidateJson},
                response::Response,
            },
            app_state::AppState,
        },
        tracker::validators::AddTrackerEntryValidator,
    },
    session_middleware::CurrentSession,
};

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TrackerEntryResponse {
    pub data: TrackerEntry,
}

#[utoipa::path(
    post,
    path = "",
    tag = "tracker",
    summary = "Record a symptom observation",
    request_body = AddTrackerEntryValidator,
    responses(
        (status = 201, body = TrackerEntryResponse),
        (status = 422, description = "Condition empty or severity out of range")
    ),
)]
pub async fn add_tracker_entry(
    State(state): State<AppState>,
    Extension(session): Extension<CurrentSession>,
    ValidateJson(payload): ValidateJson<AddTrackerEntryValidator>,
) -> Result<Response<TrackerEntryResponse>, ApiError> {
    let entry = state
        .service
        .add_tracker_entry(AddTrackerEntryInput {
            session_id: session.session_id,
            condition: payload.condition,
            severity: payload.severity,
            date: payload.date,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(TrackerEntryResponse { data: entry }))
}
