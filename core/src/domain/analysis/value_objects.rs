use std::fmt;

use bytes::Bytes;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::analysis::entities::Language;

/// Minimum length of a symptom description worth sending for analysis.
pub const MIN_SYMPTOM_DESCRIPTION_CHARS: usize = 20;
pub const MAX_IMAGES_PER_ANALYSIS: usize = 4;

#[derive(Debug, Clone)]
pub struct ImageInput {
    pub file_name: String,
    pub mime_type: String,
    pub data: Bytes,
}

impl ImageInput {
    pub fn new(file_name: String, mime_type: Option<String>, data: Bytes) -> Self {
        let mime_type = mime_type
            .filter(|m| m.starts_with("image/"))
            .unwrap_or_else(|| mime_type_from_name(&file_name).to_string());

        Self {
            file_name,
            mime_type,
            data,
        }
    }
}

pub fn mime_type_from_name(file_name: &str) -> &'static str {
    let extension = file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_lowercase())
        .unwrap_or_default();

    match extension.as_str() {
        "png" => "image/png",
        "webp" => "image/webp",
        "heic" => "image/heic",
        _ => "image/jpeg",
    }
}

#[derive(Debug, Clone)]
pub struct AnalyzeImagesInput {
    pub session_id: Uuid,
    pub language: Language,
    pub images: Vec<ImageInput>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum PainLevel {
    #[default]
    None,
    Mild,
    Moderate,
    Severe,
    VerySevere,
}

impl fmt::Display for PainLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PainLevel::None => "None",
            PainLevel::Mild => "Mild",
            PainLevel::Moderate => "Moderate",
            PainLevel::Severe => "Severe",
            PainLevel::VerySevere => "Very Severe",
        };
        write!(f, "{label}")
    }
}

#[derive(Debug, Clone)]
pub struct SymptomCheckInput {
    pub session_id: Uuid,
    pub language: Language,
    pub description: String,
    pub duration_days: u16,
    pub pain_level: PainLevel,
    pub factors: Vec<String>,
    pub reported_severity: Option<u8>,
}

impl SymptomCheckInput {
    /// Structured symptom description sent alongside the symptom prompt.
    pub fn to_prompt_input(&self) -> String {
        let factors = if self.factors.is_empty() {
            "None reported".to_string()
        } else {
            self.factors.join(", ")
        };

        let mut info = format!(
            "Symptoms: {}\nDuration: {} days\nPain level: {}\nAdditional factors: {}",
            self.description.trim(),
            self.duration_days,
            self.pain_level,
            factors
        );

        if let Some(severity) = self.reported_severity {
            info.push_str(&format!("\nSelf-reported severity (1-5): {severity}"));
        }

        info
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mime_type_falls_back_to_extension() {
        let image = ImageInput::new("photo.PNG".into(), None, Bytes::from_static(b"x"));
        assert_eq!(image.mime_type, "image/png");

        let image = ImageInput::new(
            "upload".into(),
            Some("application/octet-stream".into()),
            Bytes::new(),
        );
        assert_eq!(image.mime_type, "image/jpeg");
    }

    #[test]
    fn prompt_input_lists_every_field() {
        let input = SymptomCheckInput {
            session_id: Uuid::new_v4(),
            language: Language::English,
            description: "Itching and redness for three days".into(),
            duration_days: 3,
            pain_level: PainLevel::VerySevere,
            factors: vec!["Pregnant".into(), "Recent UTI".into()],
            reported_severity: Some(4),
        };

        let text = input.to_prompt_input();
        assert!(text.contains("Duration: 3 days"));
        assert!(text.contains("Pain level: Very Severe"));
        assert!(text.contains("Additional factors: Pregnant, Recent UTI"));
        assert!(text.contains("Self-reported severity (1-5): 4"));
    }

    #[test]
    fn no_factors_is_reported_explicitly() {
        let input = SymptomCheckInput {
            session_id: Uuid::new_v4(),
            language: Language::English,
            description: "Burning during urination since yesterday".into(),
            duration_days: 1,
            pain_level: PainLevel::Mild,
            factors: vec![],
            reported_severity: None,
        };
        assert!(input.to_prompt_input().contains("Additional factors: None reported"));
    }
}
