use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoreError {
    /// The AI completion or location-search collaborator failed.
    #[error("External service error: {0}")]
    ExternalServiceError(String),

    #[error("Could not find the location '{0}'")]
    GeocodeMiss(String),

    #[error("Invalid history file: {0}")]
    ImportValidation(String),

    #[error("Session not found")]
    SessionNotFound,

    #[error("Not found")]
    NotFound,

    #[error("Invalid input: {0}")]
    Invalid(String),

    #[error("Internal server error")]
    InternalServerError,
}
