use std::fmt::Write;

use crate::domain::{
    analysis::entities::{AnalysisResult, Severity},
    history::entities::{EntryPayload, HistoryEntry},
};

const SEPARATOR: &str = "==================================================";

const DISCLAIMER: &str = "IMPORTANT DISCLAIMER:\n\
This is not a medical diagnosis. Please consult a healthcare professional for proper evaluation.";

pub fn report_file_name(entry: &HistoryEntry) -> String {
    let prefix = match entry.payload {
        EntryPayload::MultiImageAnalysis { .. } => "yshy_multi_report",
        EntryPayload::ImageAnalysis { .. } => "yshy_image_report",
        EntryPayload::SymptomCheck { .. } => "yshy_symptom_report",
    };

    format!("{}_{}.txt", prefix, entry.timestamp.format("%Y%m%d_%H%M"))
}

/// Renders the downloadable plain-text report of a history entry.
pub fn render_entry_report(entry: &HistoryEntry) -> String {
    let stamp = entry.timestamp.format("%Y-%m-%d %H:%M");
    let mut out = String::new();

    match &entry.payload {
        EntryPayload::ImageAnalysis { image_name, result } => {
            let _ = writeln!(out, "YSHY Image Analysis Report - {stamp}\n");
            let _ = writeln!(out, "SUMMARY:");
            let _ = writeln!(out, "- Image: {image_name}");
            write_result_summary(&mut out, result);
            let _ = writeln!(out, "\n{SEPARATOR}\n\n{}\n\n{SEPARATOR}", result.raw_text.trim());
        }
        EntryPayload::MultiImageAnalysis {
            analyses,
            combined_severity,
            all_conditions,
        } => {
            let _ = writeln!(out, "YSHY Multi-Image Analysis Report - {stamp}\n");
            let _ = writeln!(out, "SUMMARY:");
            let _ = writeln!(out, "- Total Images Analyzed: {}", analyses.len());
            let _ = writeln!(out, "- Overall Severity Level: {combined_severity}");
            let _ = writeln!(out, "- All Identified Conditions: {}", join_conditions(all_conditions));
            let _ = writeln!(out, "- Recommendation: {}", recommendation(*combined_severity));
            let _ = writeln!(out, "\nINDIVIDUAL IMAGE ANALYSES:\n{SEPARATOR}");

            for analysis in analyses {
                let _ = writeln!(
                    out,
                    "\nIMAGE {}: {}",
                    analysis.image_number, analysis.image_name
                );
                let _ = writeln!(out, "Severity: {}", analysis.result.severity);
                let _ = writeln!(
                    out,
                    "Conditions: {}",
                    join_conditions(&analysis.result.conditions)
                );
                let _ = writeln!(out, "\n{}\n\n{SEPARATOR}", analysis.result.raw_text.trim());
            }
        }
        EntryPayload::SymptomCheck {
            source_text,
            reported_severity,
            result,
        } => {
            let _ = writeln!(out, "YSHY Symptom Check Report - {stamp}\n");
            let _ = writeln!(out, "SUMMARY:");
            let _ = writeln!(out, "- Symptoms: {source_text}");
            if let Some(reported) = reported_severity {
                let _ = writeln!(out, "- Self-reported Severity: {reported}/{}", Severity::MAX);
            }
            write_result_summary(&mut out, result);
            let _ = writeln!(out, "\n{SEPARATOR}\n\n{}\n\n{SEPARATOR}", result.raw_text.trim());
        }
    }

    let _ = write!(out, "\n{DISCLAIMER}\n");
    out
}

fn write_result_summary(out: &mut String, result: &AnalysisResult) {
    let _ = writeln!(out, "- Severity Level: {}", result.severity);
    let _ = writeln!(out, "- Identified Conditions: {}", join_conditions(&result.conditions));
    let _ = writeln!(out, "- Recommendation: {}", recommendation(result.severity));
}

fn join_conditions(conditions: &[String]) -> String {
    if conditions.is_empty() {
        "None identified".to_string()
    } else {
        conditions.join(", ")
    }
}

fn recommendation(severity: Severity) -> &'static str {
    match severity.value() {
        Some(v) if v >= 3 => "consider seeking medical attention promptly",
        Some(_) => "monitor symptoms and consider self-care options",
        None => "severity was not rated; consult a healthcare professional if symptoms persist",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::analysis::entities::{AnalysisKind, ImageAnalysis, ParseOutcome};
    use chrono::{TimeZone, Utc};

    fn result(severity: Severity, conditions: &[&str], raw: &str) -> AnalysisResult {
        AnalysisResult {
            raw_text: raw.to_string(),
            severity,
            conditions: conditions.iter().map(|c| c.to_string()).collect(),
            kind: AnalysisKind::MultiImage,
            outcome: ParseOutcome::Parsed,
        }
    }

    #[test]
    fn multi_image_report_lists_every_image() {
        let entry = HistoryEntry::new(
            "abcdef123456".into(),
            Utc.with_ymd_and_hms(2025, 5, 4, 9, 15, 0).unwrap(),
            EntryPayload::MultiImageAnalysis {
                analyses: vec![
                    ImageAnalysis {
                        image_number: 1,
                        image_name: "left.jpg".into(),
                        result: result(Severity::assessed(2), &["Dermatitis"], "first body"),
                    },
                    ImageAnalysis {
                        image_number: 2,
                        image_name: "right.jpg".into(),
                        result: result(Severity::unset(), &[], "second body"),
                    },
                ],
                combined_severity: Severity::assessed(2),
                all_conditions: vec!["Dermatitis".into()],
            },
        );

        let report = render_entry_report(&entry);

        assert!(report.starts_with("YSHY Multi-Image Analysis Report - 2025-05-04 09:15"));
        assert!(report.contains("- Total Images Analyzed: 2"));
        assert!(report.contains("IMAGE 1: left.jpg"));
        assert!(report.contains("IMAGE 2: right.jpg\nSeverity: not rated\nConditions: None identified"));
        assert!(report.contains("monitor symptoms"));
        assert!(report.trim_end().ends_with("proper evaluation."));
        assert_eq!(report_file_name(&entry), "yshy_multi_report_20250504_0915.txt");
    }

    #[test]
    fn symptom_report_includes_reported_severity() {
        let entry = HistoryEntry::new(
            "abcdef123456".into(),
            Utc.with_ymd_and_hms(2025, 5, 4, 9, 15, 0).unwrap(),
            EntryPayload::SymptomCheck {
                source_text: "Lower abdominal pain".into(),
                reported_severity: Some(4),
                result: result(Severity::assessed(4), &["PID"], "body"),
            },
        );

        let report = render_entry_report(&entry);

        assert!(report.contains("- Self-reported Severity: 4/5"));
        assert!(report.contains("- Severity Level: 4/5"));
        assert!(report.contains("consider seeking medical attention promptly"));
    }
}
