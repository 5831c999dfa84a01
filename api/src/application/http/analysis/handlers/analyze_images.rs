use axum::{
    Extension,
    extract::{Multipart, State},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use yshy_core::domain::{
    analysis::{
        entities::Language,
        ports::AnalysisService,
        value_objects::{AnalyzeImagesInput, ImageInput, MAX_IMAGES_PER_ANALYSIS},
    },
    history::entities::HistoryEntry,
};

use crate::application::{
    http::server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
    session_middleware::CurrentSession,
};

pub const MAX_IMAGE_SIZE: usize = 10 * 1024 * 1024; // 10MB

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AnalysisResponse {
    pub data: HistoryEntry,
}

#[utoipa::path(
    post,
    path = "/images",
    tag = "analysis",
    summary = "Analyze one or more images",
    description = "Analyzes up to four images and records the result in the session history. \
        Multipart fields: `images` (repeatable) and optional `language`.",
    responses(
        (status = 200, body = AnalysisResponse),
        (status = 400, description = "Missing, empty or too many images"),
        (status = 502, description = "The analysis service failed")
    ),
)]
pub async fn analyze_images(
    State(state): State<AppState>,
    Extension(session): Extension<CurrentSession>,
    mut multipart: Multipart,
) -> Result<Response<AnalysisResponse>, ApiError> {
    let mut language = Language::default();
    let mut images: Vec<ImageInput> = Vec::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("Failed to read multipart field: {}", e)))?
    {
        let name = field.name().unwrap_or("").to_string();

        match name.as_str() {
            "language" => {
                let value = field.text().await.map_err(|e| {
                    ApiError::BadRequest(format!("Failed to read language: {}", e))
                })?;
                language = value
                    .parse()
                    .map_err(|_| ApiError::BadRequest(format!("Unsupported language: {value}")))?;
            }
            "images" | "images[]" | "image" => {
                if images.len() == MAX_IMAGES_PER_ANALYSIS {
                    return Err(ApiError::BadRequest(format!(
                        "At most {} images can be analyzed at once",
                        MAX_IMAGES_PER_ANALYSIS
                    )));
                }

                let file_name = field
                    .file_name()
                    .map(str::to_string)
                    .unwrap_or_else(|| format!("image_{}", images.len() + 1));
                let content_type = field.content_type().map(str::to_string);
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| ApiError::BadRequest(format!("Failed to read image: {}", e)))?;

                if data.len() > MAX_IMAGE_SIZE {
                    return Err(ApiError::BadRequest(format!(
                        "Image too large. Max size is {} bytes",
                        MAX_IMAGE_SIZE
                    )));
                }

                images.push(ImageInput::new(file_name, content_type, data));
            }
            _ => {}
        }
    }

    let entry = state
        .service
        .analyze_images(AnalyzeImagesInput {
            session_id: session.session_id,
            language,
            images,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(AnalysisResponse { data: entry }))
}
