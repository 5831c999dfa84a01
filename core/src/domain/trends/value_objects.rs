use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Slope band inside which a series counts as stable.
#[derive(Debug, Clone, PartialEq)]
pub struct TrendThresholds {
    pub stable_band: f64,
}

impl Default for TrendThresholds {
    fn default() -> Self {
        Self { stable_band: 0.1 }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum TrendSource {
    ImageAnalysis,
    MultiImageAnalysis,
    SymptomCheck,
    Tracker,
}

/// One point of a severity series. Derived on every request, never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TrendRecord {
    pub date: DateTime<Utc>,
    pub severity: f64,
    pub condition: String,
    pub source: TrendSource,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ConditionFrequency {
    pub condition: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TrendStats {
    pub total_records: usize,
    /// Whole days between first and last record, inclusive.
    pub date_range_days: i64,
    pub average_severity: f64,
    pub max_severity: f64,
    pub min_severity: f64,
    /// Last severity minus first severity.
    pub trend_direction: f64,
    /// Least-squares slope of severity over record index.
    pub trend_slope: f64,
    pub condition_frequency: Vec<ConditionFrequency>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum TrendClassification {
    Stable,
    Improving,
    Worsening,
}

impl TrendClassification {
    pub fn message(&self) -> &'static str {
        match self {
            TrendClassification::Stable => "Your symptoms appear to be stable",
            TrendClassification::Improving => "Your symptoms appear to be improving",
            TrendClassification::Worsening => {
                "Your symptoms may be worsening - consider medical attention"
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum SeverityLevel {
    Mild,
    Moderate,
    High,
}

impl SeverityLevel {
    pub fn from_severity(severity: u8) -> Self {
        match severity {
            s if s >= 4 => SeverityLevel::High,
            s if s >= 2 => SeverityLevel::Moderate,
            _ => SeverityLevel::Mild,
        }
    }
}

/// Latest tracked severity of one condition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ConditionSnapshot {
    pub condition: String,
    pub latest_severity: u8,
    pub level: SeverityLevel,
    pub last_recorded: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TrendAssessment {
    pub classification: TrendClassification,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TrendReport {
    pub records: Vec<TrendRecord>,
    pub stats: Option<TrendStats>,
    pub assessment: Option<TrendAssessment>,
    /// Condition labels present in the unfiltered series.
    pub conditions: Vec<String>,
    pub tracked_conditions: Vec<ConditionSnapshot>,
}

#[derive(Debug, Clone)]
pub struct TrendFilter {
    pub session_id: Uuid,
    pub condition: Option<String>,
}
