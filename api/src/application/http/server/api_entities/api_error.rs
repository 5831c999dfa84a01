use axum::{
    Json,
    extract::{FromRequest, Request, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use thiserror::Error;
use tracing::error;
use utoipa::ToSchema;
use validator::Validate;
use yshy_core::domain::common::entities::app_errors::CoreError;

const GEOCODE_GUIDANCE: &str = "Check the spelling of your city and state, or try a larger nearby city.";

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ApiErrorResponse {
    pub code: String,
    pub status: u16,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guidance: Option<String>,
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    UnProcessableEntity(String),

    #[error("{message}")]
    LocationNotFound { message: String, guidance: String },

    #[error("{0}")]
    BadGateway(String),

    #[error("{0}")]
    InternalServerError(String),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) | ApiError::LocationNotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::UnProcessableEntity(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::BadGateway(_) => StatusCode::BAD_GATEWAY,
            ApiError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn code(&self) -> &'static str {
        match self {
            ApiError::BadRequest(_) => "E_BAD_REQUEST",
            ApiError::NotFound(_) => "E_NOT_FOUND",
            ApiError::UnProcessableEntity(_) => "E_UNPROCESSABLE_ENTITY",
            ApiError::LocationNotFound { .. } => "E_LOCATION_NOT_FOUND",
            ApiError::BadGateway(_) => "E_SERVICE_UNAVAILABLE",
            ApiError::InternalServerError(_) => "E_INTERNAL_SERVER_ERROR",
        }
    }
}

impl From<CoreError> for ApiError {
    fn from(error: CoreError) -> Self {
        match error {
            CoreError::ExternalServiceError(detail) => {
                error!(%detail, "collaborator failure surfaced to client");
                ApiError::BadGateway(
                    "An external service is temporarily unavailable. Your history is safe; please try again."
                        .to_string(),
                )
            }
            CoreError::GeocodeMiss(_) => ApiError::LocationNotFound {
                message: error.to_string(),
                guidance: GEOCODE_GUIDANCE.to_string(),
            },
            CoreError::ImportValidation(_) => ApiError::UnProcessableEntity(error.to_string()),
            CoreError::SessionNotFound => ApiError::NotFound("Session not found".to_string()),
            CoreError::NotFound => ApiError::NotFound("Resource not found".to_string()),
            CoreError::Invalid(message) => ApiError::BadRequest(message),
            CoreError::InternalServerError => {
                ApiError::InternalServerError("Internal server error".to_string())
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let guidance = match &self {
            ApiError::LocationNotFound { guidance, .. } => Some(guidance.clone()),
            _ => None,
        };

        let body = ApiErrorResponse {
            code: self.code().to_string(),
            status: status.as_u16(),
            message: self.to_string(),
            guidance,
        };

        (status, Json(body)).into_response()
    }
}

/// JSON extractor that runs `validator` rules before the handler sees the payload.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidateJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidateJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| ApiError::BadRequest(e.body_text()))?;

        value
            .validate()
            .map_err(|e| ApiError::UnProcessableEntity(e.to_string()))?;

        Ok(ValidateJson(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn geocode_miss_carries_guidance() {
        let error = ApiError::from(CoreError::GeocodeMiss("Atlantis, Delhi, India".into()));
        assert_eq!(error.status(), StatusCode::NOT_FOUND);
        assert!(error.to_string().contains("Atlantis"));
        assert!(matches!(error, ApiError::LocationNotFound { .. }));
    }

    #[test]
    fn collaborator_failures_hide_details() {
        let error = ApiError::from(CoreError::ExternalServiceError("key=secret 401".into()));
        assert_eq!(error.status(), StatusCode::BAD_GATEWAY);
        assert!(!error.to_string().contains("secret"));
    }
}
