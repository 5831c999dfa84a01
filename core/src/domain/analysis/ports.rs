use std::future::Future;

use crate::domain::{
    analysis::value_objects::{AnalyzeImagesInput, ImageInput, SymptomCheckInput},
    common::entities::app_errors::CoreError,
    history::entities::HistoryEntry,
};

/// Generative-AI completion collaborator.
pub trait LLMClient: Send + Sync {
    fn generate_with_image(
        &self,
        prompt: String,
        image: ImageInput,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;

    fn generate_with_text(
        &self,
        prompt: String,
        input: String,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;
}

pub trait AnalysisService: Send + Sync {
    /// Analyzes one or more images and records the result in the session history.
    fn analyze_images(
        &self,
        input: AnalyzeImagesInput,
    ) -> impl Future<Output = Result<HistoryEntry, CoreError>> + Send;

    fn check_symptoms(
        &self,
        input: SymptomCheckInput,
    ) -> impl Future<Output = Result<HistoryEntry, CoreError>> + Send;
}
