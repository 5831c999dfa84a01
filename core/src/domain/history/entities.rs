use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::analysis::entities::{AnalysisResult, ImageAnalysis, Severity};

/// Display length of the stored symptom description.
pub const SOURCE_TEXT_DISPLAY_CHARS: usize = 100;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct HistoryEntry {
    pub id: String,
    pub timestamp: DateTime<Utc>,
    #[serde(flatten)]
    pub payload: EntryPayload,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EntryPayload {
    ImageAnalysis {
        image_name: String,
        result: AnalysisResult,
    },
    MultiImageAnalysis {
        analyses: Vec<ImageAnalysis>,
        combined_severity: Severity,
        all_conditions: Vec<String>,
    },
    SymptomCheck {
        source_text: String,
        reported_severity: Option<u8>,
        result: AnalysisResult,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum EntryType {
    ImageAnalysis,
    MultiImageAnalysis,
    SymptomCheck,
}

impl HistoryEntry {
    pub fn new(id: String, timestamp: DateTime<Utc>, payload: EntryPayload) -> Self {
        Self {
            id,
            timestamp,
            payload,
        }
    }

    pub fn entry_type(&self) -> EntryType {
        match self.payload {
            EntryPayload::ImageAnalysis { .. } => EntryType::ImageAnalysis,
            EntryPayload::MultiImageAnalysis { .. } => EntryType::MultiImageAnalysis,
            EntryPayload::SymptomCheck { .. } => EntryType::SymptomCheck,
        }
    }

    /// Severity used for trends: combined severity for multi-image entries,
    /// the parsed rating otherwise, then the user's own rating for symptom checks.
    pub fn severity(&self) -> Severity {
        match &self.payload {
            EntryPayload::ImageAnalysis { result, .. } => result.severity,
            EntryPayload::MultiImageAnalysis {
                combined_severity, ..
            } => *combined_severity,
            EntryPayload::SymptomCheck {
                result,
                reported_severity,
                ..
            } => {
                if result.severity.is_set() {
                    result.severity
                } else {
                    Severity::from(*reported_severity)
                }
            }
        }
    }

    pub fn conditions(&self) -> &[String] {
        match &self.payload {
            EntryPayload::ImageAnalysis { result, .. } => &result.conditions,
            EntryPayload::MultiImageAnalysis { all_conditions, .. } => all_conditions,
            EntryPayload::SymptomCheck { result, .. } => &result.conditions,
        }
    }
}

/// One severity observation for a condition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct TrackerEntry {
    pub date: DateTime<Utc>,
    pub condition: String,
    pub severity: u8,
    /// History entry this observation was derived from, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_entry_id: Option<String>,
}

impl TrackerEntry {
    pub fn new(date: DateTime<Utc>, condition: String, severity: u8) -> Self {
        Self {
            date,
            condition: condition.trim().to_string(),
            severity: severity.clamp(Severity::MIN, Severity::MAX),
            source_entry_id: None,
        }
    }

    pub fn derived_from(mut self, entry_id: &str) -> Self {
        self.source_entry_id = Some(entry_id.to_string());
        self
    }
}

/// Tracker observations for an analysis: one per condition, or a single
/// entry under `general_label` when no condition was identified.
pub fn tracker_entries_for(entry: &HistoryEntry, general_label: &str) -> Vec<TrackerEntry> {
    let severity = entry.severity().or_fallback();
    let conditions = entry.conditions();

    if conditions.is_empty() {
        return vec![
            TrackerEntry::new(entry.timestamp, general_label.to_string(), severity)
                .derived_from(&entry.id),
        ];
    }

    conditions
        .iter()
        .map(|condition| {
            TrackerEntry::new(entry.timestamp, condition.clone(), severity).derived_from(&entry.id)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::analysis::entities::{AnalysisKind, ParseOutcome};

    fn result(severity: Severity, conditions: &[&str]) -> AnalysisResult {
        AnalysisResult {
            raw_text: String::new(),
            severity,
            conditions: conditions.iter().map(|c| c.to_string()).collect(),
            kind: AnalysisKind::Symptom,
            outcome: ParseOutcome::Parsed,
        }
    }

    #[test]
    fn symptom_check_falls_back_to_reported_severity() {
        let entry = HistoryEntry::new(
            "abc".into(),
            Utc::now(),
            EntryPayload::SymptomCheck {
                source_text: "itching".into(),
                reported_severity: Some(4),
                result: result(Severity::unset(), &["UTI"]),
            },
        );
        assert_eq!(entry.severity(), Severity::assessed(4));
    }

    #[test]
    fn parsed_severity_beats_reported_one() {
        let entry = HistoryEntry::new(
            "abc".into(),
            Utc::now(),
            EntryPayload::SymptomCheck {
                source_text: "itching".into(),
                reported_severity: Some(4),
                result: result(Severity::assessed(2), &[]),
            },
        );
        assert_eq!(entry.severity(), Severity::assessed(2));
    }

    #[test]
    fn tracker_entries_use_general_label_without_conditions() {
        let entry = HistoryEntry::new(
            "e1".into(),
            Utc::now(),
            EntryPayload::ImageAnalysis {
                image_name: "a.jpg".into(),
                result: result(Severity::assessed(3), &[]),
            },
        );
        let tracked = tracker_entries_for(&entry, "General Health Concern");
        assert_eq!(tracked.len(), 1);
        assert_eq!(tracked[0].condition, "General Health Concern");
        assert_eq!(tracked[0].severity, 3);
        assert_eq!(tracked[0].source_entry_id.as_deref(), Some("e1"));
    }

    #[test]
    fn tracker_entries_one_per_condition_with_fallback_severity() {
        let entry = HistoryEntry::new(
            "e2".into(),
            Utc::now(),
            EntryPayload::ImageAnalysis {
                image_name: "a.jpg".into(),
                result: result(Severity::unset(), &["Yeast Infection", "Dermatitis"]),
            },
        );
        let tracked = tracker_entries_for(&entry, "General Health Concern");
        assert_eq!(tracked.len(), 2);
        assert!(tracked.iter().all(|t| t.severity == Severity::FALLBACK));
    }

    #[test]
    fn tracker_severity_is_clamped() {
        assert_eq!(TrackerEntry::new(Utc::now(), "UTI".into(), 9).severity, 5);
        assert_eq!(TrackerEntry::new(Utc::now(), "UTI".into(), 0).severity, 1);
    }

    #[test]
    fn entry_serializes_with_type_tag() {
        let entry = HistoryEntry::new(
            "e3".into(),
            Utc::now(),
            EntryPayload::SymptomCheck {
                source_text: "burning".into(),
                reported_severity: None,
                result: result(Severity::assessed(2), &["UTI"]),
            },
        );
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["type"], "symptom_check");
        assert_eq!(json["id"], "e3");
        assert_eq!(json["result"]["severity"], 2);
    }
}
