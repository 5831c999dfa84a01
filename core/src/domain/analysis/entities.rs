use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    English,
    Hindi,
}

impl Language {
    pub fn as_str(&self) -> &str {
        match self {
            Language::English => "english",
            Language::Hindi => "hindi",
        }
    }

    /// Headings that open the conditions list, most specific first.
    pub fn condition_headings(&self) -> &'static [&'static str] {
        match self {
            Language::English => &["Possible Conditions", "Preliminary Conditions"],
            Language::Hindi => &["संभावित स्थितियां", "संभावित स्थितियाँ", "Possible Conditions"],
        }
    }

    /// Label used when an entry has no identified condition.
    pub fn general_condition_label(&self) -> &'static str {
        match self {
            Language::English => "General Health Concern",
            Language::Hindi => "सामान्य स्वास्थ्य चिंता",
        }
    }
}

impl FromStr for Language {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "english" | "en" => Ok(Language::English),
            "hindi" | "hi" | "हिन्दी" => Ok(Language::Hindi),
            _ => Err(()),
        }
    }
}

/// Severity on the 1-5 scale, or unset when the model gave no rating.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(from = "Option<u8>", into = "Option<u8>")]
pub struct Severity(Option<u8>);

impl Severity {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;
    /// Value reported for an unset severity where a number is required.
    pub const FALLBACK: u8 = 1;

    pub fn assessed(value: u8) -> Self {
        Self(Some(value.clamp(Self::MIN, Self::MAX)))
    }

    pub fn unset() -> Self {
        Self(None)
    }

    pub fn value(&self) -> Option<u8> {
        self.0
    }

    pub fn is_set(&self) -> bool {
        self.0.is_some()
    }

    pub fn or_fallback(&self) -> u8 {
        self.0.unwrap_or(Self::FALLBACK)
    }

    /// Highest of two severities; an unset side never wins over a set one.
    pub fn combine(self, other: Severity) -> Severity {
        match (self.0, other.0) {
            (Some(a), Some(b)) => Severity(Some(a.max(b))),
            (Some(a), None) | (None, Some(a)) => Severity(Some(a)),
            (None, None) => Severity(None),
        }
    }
}

impl From<Option<u8>> for Severity {
    fn from(value: Option<u8>) -> Self {
        match value {
            Some(v) => Severity::assessed(v),
            None => Severity::unset(),
        }
    }
}

impl From<Severity> for Option<u8> {
    fn from(value: Severity) -> Self {
        value.0
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(v) => write!(f, "{}/{}", v, Self::MAX),
            None => write!(f, "not rated"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisKind {
    Image,
    Symptom,
    MultiImage,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum FallbackReason {
    EmptyInput,
    MissingHeading,
    EmptySection,
}

/// Whether the conditions list came from a located section or is a default guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ParseOutcome {
    Parsed,
    Fallback { reason: FallbackReason },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AnalysisResult {
    pub raw_text: String,
    pub severity: Severity,
    pub conditions: Vec<String>,
    pub kind: AnalysisKind,
    pub outcome: ParseOutcome,
}

impl AnalysisResult {
    pub fn is_confident(&self) -> bool {
        self.outcome == ParseOutcome::Parsed && self.severity.is_set()
    }
}

/// One image of a multi-image analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ImageAnalysis {
    pub image_number: usize,
    pub image_name: String,
    pub result: AnalysisResult,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_is_clamped_into_scale() {
        assert_eq!(Severity::assessed(0).value(), Some(1));
        assert_eq!(Severity::assessed(9).value(), Some(5));
    }

    #[test]
    fn combine_prefers_highest_set_value() {
        assert_eq!(
            Severity::assessed(2).combine(Severity::assessed(4)),
            Severity::assessed(4)
        );
        assert_eq!(
            Severity::unset().combine(Severity::assessed(2)),
            Severity::assessed(2)
        );
        assert!(!Severity::unset().combine(Severity::unset()).is_set());
    }

    #[test]
    fn unset_severity_is_distinct_from_one() {
        assert_ne!(Severity::unset(), Severity::assessed(1));
        assert_eq!(Severity::unset().or_fallback(), 1);
        assert_eq!(Severity::unset().to_string(), "not rated");
    }

    #[test]
    fn severity_serializes_as_nullable_number() {
        assert_eq!(serde_json::to_string(&Severity::assessed(3)).unwrap(), "3");
        assert_eq!(serde_json::to_string(&Severity::unset()).unwrap(), "null");
        let parsed: Severity = serde_json::from_str("7").unwrap();
        assert_eq!(parsed, Severity::assessed(5));
    }

    #[test]
    fn language_parses_codes_and_names() {
        assert_eq!("hi".parse::<Language>(), Ok(Language::Hindi));
        assert_eq!("English".parse::<Language>(), Ok(Language::English));
        assert!("fr".parse::<Language>().is_err());
    }
}
