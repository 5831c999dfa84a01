use axum::{Extension, extract::State};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use yshy_core::domain::history::{
    ports::HistoryService,
    value_objects::{ImportHistoryInput, ImportSummary},
};

use crate::application::{
    http::{
        history::validators::ImportHistoryValidator,
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

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ImportHistoryResponse {
    pub data: ImportSummary,
}

#[utoipa::path(
    post,
    path = "/import",
    tag = "history",
    summary = "Import a previously exported history",
    description = "Replaces the session history and tracker entries. Nothing changes when the file is invalid.",
    request_body = ImportHistoryValidator,
    responses(
        (status = 200, body = ImportHistoryResponse),
        (status = 422, description = "The file could not be decoded or failed validation")
    ),
)]
pub async fn import_history(
    State(state): State<AppState>,
    Extension(session): Extension<CurrentSession>,
    ValidateJson(payload): ValidateJson<ImportHistoryValidator>,
) -> Result<Response<ImportHistoryResponse>, ApiError> {
    let summary = state
        .service
        .import_history(ImportHistoryInput {
            session_id: session.session_id,
            data: payload.data,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(ImportHistoryResponse { data: summary }))
}
