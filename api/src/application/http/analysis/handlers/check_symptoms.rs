use axum::{Extension, extract::State};
use yshy_core::domain::analysis::{ports::AnalysisService, value_objects::SymptomCheckInput};

use crate::application::{
    http::{
        analysis::{handlers::analyze_images::AnalysisResponse, validators::SymptomCheckValidator},
        server::{
            api_entities::{
                api_error::{ApiError, ValidateJson},
                response::Response,
            },
            app_state::AppState,
        },
    },
    session_middleware::CurrentSession,
};

#[utoipa::path(
    post,
    path = "/symptoms",
    tag = "analysis",
    summary = "Check described symptoms",
    description = "Analyzes a structured symptom description and records the result in the session history",
    request_body = SymptomCheckValidator,
    responses(
        (status = 200, body = AnalysisResponse),
        (status = 422, description = "Description too short or values out of range"),
        (status = 502, description = "The analysis service failed")
    ),
)]
pub async fn check_symptoms(
    State(state): State<AppState>,
    Extension(session): Extension<CurrentSession>,
    ValidateJson(payload): ValidateJson<SymptomCheckValidator>,
) -> Result<Response<AnalysisResponse>, ApiError> {
    let entry = state
        .service
        .check_symptoms(SymptomCheckInput {
            session_id: session.session_id,
            language: payload.language,
            description: payload.description,
            duration_days: payload.duration_days,
            pain_level: payload.pain_level,
            factors: payload.factors,
            reported_severity: payload.severity,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(AnalysisResponse { data: entry }))
}
