//! Trend aggregation over a session's history and tracker logs.

use std::collections::HashSet;

use tracing::instrument;

use crate::domain::{
    analysis::ports::LLMClient,
    common::{entities::app_errors::CoreError, services::Service},
    history::entities::{EntryType, HistoryEntry, TrackerEntry},
    provider::ports::LocationSearchPort,
    session::ports::SessionRepository,
    trends::{
        ports::TrendService,
        value_objects::{
            ConditionFrequency, ConditionSnapshot, SeverityLevel, TrendAssessment,
            TrendClassification, TrendFilter, TrendRecord, TrendReport, TrendSource, TrendStats,
            TrendThresholds,
        },
    },
};

impl From<EntryType> for TrendSource {
    fn from(value: EntryType) -> Self {
        match value {
            EntryType::ImageAnalysis => TrendSource::ImageAnalysis,
            EntryType::MultiImageAnalysis => TrendSource::MultiImageAnalysis,
            EntryType::SymptomCheck => TrendSource::SymptomCheck,
        }
    }
}

/// Flattens both logs into records sorted by date. Unrated history entries
/// are skipped, entries without conditions use `general_label`, and tracker
/// entries derived from a history entry still present are not counted twice.
pub fn build_trend_records(
    history: &[HistoryEntry],
    tracker: &[TrackerEntry],
    general_label: &str,
) -> Vec<TrendRecord> {
    let mut records = Vec::new();

    for entry in history {
        let Some(severity) = entry.severity().value() else {
            continue;
        };
        let source = TrendSource::from(entry.entry_type());

        if entry.conditions().is_empty() {
            records.push(TrendRecord {
                date: entry.timestamp,
                severity: f64::from(severity),
                condition: general_label.to_string(),
                source,
            });
            continue;
        }

        records.extend(entry.conditions().iter().map(|condition| TrendRecord {
            date: entry.timestamp,
            severity: f64::from(severity),
            condition: condition.clone(),
            source,
        }));
    }

    let history_ids: HashSet<&str> = history.iter().map(|e| e.id.as_str()).collect();
    records.extend(
        tracker
            .iter()
            .filter(|t| {
                t.source_entry_id
                    .as_deref()
                    .is_none_or(|id| !history_ids.contains(id))
            })
            .map(|t| TrendRecord {
                date: t.date,
                severity: f64::from(t.severity),
                condition: t.condition.clone(),
                source: TrendSource::Tracker,
            }),
    );

    records.sort_by_key(|r| r.date);
    records
}

/// `None` when there is nothing to summarize.
pub fn compute_stats(records: &[TrendRecord]) -> Option<TrendStats> {
    let first = records.first()?;
    let last = records.last()?;
    let n = records.len() as f64;

    let severities: Vec<f64> = records.iter().map(|r| r.severity).collect();
    let average_severity = severities.iter().sum::<f64>() / n;
    let max_severity = severities.iter().copied().fold(f64::MIN, f64::max);
    let min_severity = severities.iter().copied().fold(f64::MAX, f64::min);

    let min_date = records.iter().map(|r| r.date.date_naive()).min()?;
    let max_date = records.iter().map(|r| r.date.date_naive()).max()?;

    let trend_direction = if records.len() < 2 {
        0.0
    } else {
        last.severity - first.severity
    };

    Some(TrendStats {
        total_records: records.len(),
        date_range_days: (max_date - min_date).num_days() + 1,
        average_severity,
        max_severity,
        min_severity,
        trend_direction,
        trend_slope: least_squares_slope(&severities),
        condition_frequency: condition_frequency(records),
    })
}

fn least_squares_slope(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }

    let n = values.len() as f64;
    let mean_x = (n - 1.0) / 2.0;
    let mean_y = values.iter().sum::<f64>() / n;

    let (numerator, denominator) =
        values
            .iter()
            .enumerate()
            .fold((0.0, 0.0), |(num, den), (i, y)| {
                let dx = i as f64 - mean_x;
                (num + dx * (y - mean_y), den + dx * dx)
            });

    if denominator == 0.0 {
        0.0
    } else {
        numerator / denominator
    }
}

/// Counts per condition, most frequent first, ties in first-seen order.
fn condition_frequency(records: &[TrendRecord]) -> Vec<ConditionFrequency> {
    let mut frequency: Vec<ConditionFrequency> = Vec::new();

    for record in records {
        match frequency.iter_mut().find(|f| f.condition == record.condition) {
            Some(existing) => existing.count += 1,
            None => frequency.push(ConditionFrequency {
                condition: record.condition.clone(),
                count: 1,
            }),
        }
    }

    frequency.sort_by(|a, b| b.count.cmp(&a.count));
    frequency
}

pub fn classify_trend(slope: f64, thresholds: &TrendThresholds) -> TrendClassification {
    if slope.abs() < thresholds.stable_band {
        TrendClassification::Stable
    } else if slope < -thresholds.stable_band {
        TrendClassification::Improving
    } else {
        TrendClassification::Worsening
    }
}

/// Latest tracker observation of each condition, in first-tracked order.
pub fn latest_by_condition(tracker: &[TrackerEntry]) -> Vec<ConditionSnapshot> {
    let mut snapshots: Vec<ConditionSnapshot> = Vec::new();

    for entry in tracker {
        let snapshot = ConditionSnapshot {
            condition: entry.condition.clone(),
            latest_severity: entry.severity,
            level: SeverityLevel::from_severity(entry.severity),
            last_recorded: entry.date,
        };

        match snapshots
            .iter_mut()
            .find(|s| s.condition == entry.condition)
        {
            Some(existing) if existing.last_recorded <= entry.date => *existing = snapshot,
            Some(_) => {}
            None => snapshots.push(snapshot),
        }
    }

    snapshots
}

impl<LLM, LS, SR> TrendService for Service<LLM, LS, SR>
where
    LLM: LLMClient,
    LS: LocationSearchPort,
    SR: SessionRepository,
{
    #[instrument(skip(self, filter), fields(session_id = %filter.session_id))]
    async fn trend_report(&self, filter: TrendFilter) -> Result<TrendReport, CoreError> {
        let session = self.session(filter.session_id).await?;
        let session = session.lock().await;

        let all_records = build_trend_records(
            session.store.all(),
            session.store.tracker_entries(),
            session.language.general_condition_label(),
        );
        let tracked_conditions = latest_by_condition(session.store.tracker_entries());
        drop(session);

        let mut conditions: Vec<String> = Vec::new();
        for record in &all_records {
            if !conditions.contains(&record.condition) {
                conditions.push(record.condition.clone());
            }
        }

        let records: Vec<TrendRecord> = match filter.condition.as_deref().map(str::trim) {
            Some(wanted) if !wanted.is_empty() => all_records
                .into_iter()
                .filter(|r| r.condition.eq_ignore_ascii_case(wanted))
                .collect(),
            _ => all_records,
        };

        let stats = compute_stats(&records);
        let assessment = stats.as_ref().map(|s| {
            let classification = classify_trend(s.trend_slope, &self.trend_thresholds);
            TrendAssessment {
                classification,
                message: classification.message().to_string(),
            }
        });

        Ok(TrendReport {
            records,
            stats,
            assessment,
            conditions,
            tracked_conditions,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        analysis::entities::{AnalysisKind, AnalysisResult, ParseOutcome, Severity},
        history::entities::EntryPayload,
    };
    use chrono::{DateTime, Duration, TimeZone, Utc};

    fn day(n: i64) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 1, 8, 0, 0).unwrap() + Duration::days(n)
    }

    fn symptom_entry(id: &str, at: DateTime<Utc>, severity: Severity, conditions: &[&str]) -> HistoryEntry {
        HistoryEntry::new(
            id.to_string(),
            at,
            EntryPayload::SymptomCheck {
                source_text: "text".into(),
                reported_severity: None,
                result: AnalysisResult {
                    raw_text: String::new(),
                    severity,
                    conditions: conditions.iter().map(|c| c.to_string()).collect(),
                    kind: AnalysisKind::Symptom,
                    outcome: ParseOutcome::Parsed,
                },
            },
        )
    }

    #[test]
    fn rising_series_is_worsening() {
        let tracker: Vec<TrackerEntry> = [2, 2, 2, 4, 4]
            .iter()
            .enumerate()
            .map(|(i, s)| TrackerEntry::new(day(i as i64), "UTI".into(), *s))
            .collect();

        let records = build_trend_records(&[], &tracker, "General Health Concern");
        let stats = compute_stats(&records).unwrap();

        assert!((stats.trend_slope - 0.6).abs() < 1e-9);
        assert_eq!(stats.trend_direction, 2.0);
        assert_eq!(stats.date_range_days, 5);
        assert_eq!(stats.max_severity, 4.0);
        assert_eq!(stats.min_severity, 2.0);
        assert!((stats.average_severity - 2.8).abs() < 1e-9);
        assert_eq!(
            classify_trend(stats.trend_slope, &TrendThresholds::default()),
            TrendClassification::Worsening
        );
    }

    #[test]
    fn empty_logs_have_no_stats() {
        let records = build_trend_records(&[], &[], "General Health Concern");
        assert!(records.is_empty());
        assert!(compute_stats(&records).is_none());
    }

    #[test]
    fn single_record_has_flat_trend() {
        let tracker = vec![TrackerEntry::new(day(0), "UTI".into(), 3)];
        let stats = compute_stats(&build_trend_records(&[], &tracker, "x")).unwrap();
        assert_eq!(stats.trend_slope, 0.0);
        assert_eq!(stats.trend_direction, 0.0);
        assert_eq!(stats.date_range_days, 1);
    }

    #[test]
    fn classification_bands() {
        let t = TrendThresholds::default();
        assert_eq!(classify_trend(0.05, &t), TrendClassification::Stable);
        assert_eq!(classify_trend(-0.05, &t), TrendClassification::Stable);
        assert_eq!(classify_trend(-0.5, &t), TrendClassification::Improving);
        assert_eq!(classify_trend(0.1, &t), TrendClassification::Worsening);
        assert_eq!(classify_trend(-0.1, &t), TrendClassification::Worsening);
    }

    #[test]
    fn unrated_entries_are_skipped_and_sentinel_used() {
        let history = vec![
            symptom_entry("a", day(2), Severity::unset(), &["UTI"]),
            symptom_entry("b", day(1), Severity::assessed(3), &[]),
        ];

        let records = build_trend_records(&history, &[], "General Health Concern");

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].condition, "General Health Concern");
        assert_eq!(records[0].source, TrendSource::SymptomCheck);
    }

    #[test]
    fn linked_tracker_entries_are_not_double_counted() {
        let history = vec![symptom_entry("a", day(0), Severity::assessed(3), &["UTI", "BV"])];
        let tracker = vec![
            TrackerEntry::new(day(0), "UTI".into(), 3).derived_from("a"),
            TrackerEntry::new(day(0), "BV".into(), 3).derived_from("a"),
            TrackerEntry::new(day(1), "Cramps".into(), 2),
            TrackerEntry::new(day(2), "UTI".into(), 2).derived_from("cleared"),
        ];

        let records = build_trend_records(&history, &tracker, "General Health Concern");

        assert_eq!(records.len(), 4);
        let stats = compute_stats(&records).unwrap();
        assert_eq!(stats.condition_frequency[0].condition, "UTI");
        assert_eq!(stats.condition_frequency[0].count, 2);
    }

    #[test]
    fn records_are_sorted_by_date() {
        let tracker = vec![
            TrackerEntry::new(day(3), "UTI".into(), 1),
            TrackerEntry::new(day(1), "UTI".into(), 5),
        ];
        let records = build_trend_records(&[], &tracker, "x");
        assert_eq!(records[0].severity, 5.0);
        assert_eq!(records[1].severity, 1.0);
    }

    #[test]
    fn snapshot_keeps_latest_severity() {
        let tracker = vec![
            TrackerEntry::new(day(0), "UTI".into(), 2),
            TrackerEntry::new(day(1), "Cramps".into(), 1),
            TrackerEntry::new(day(2), "UTI".into(), 4),
        ];

        let snapshot = latest_by_condition(&tracker);

        assert_eq!(snapshot.len(), 2);
        assert_eq!(snapshot[0].condition, "UTI");
        assert_eq!(snapshot[0].latest_severity, 4);
        assert_eq!(snapshot[0].level, SeverityLevel::High);
        assert_eq!(snapshot[1].level, SeverityLevel::Mild);
        assert_eq!(SeverityLevel::from_severity(2), SeverityLevel::Moderate);
    }
}
