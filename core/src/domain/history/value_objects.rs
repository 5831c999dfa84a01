use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::history::entities::{HistoryEntry, TrackerEntry};

pub const EXPORT_FORMAT_VERSION: u32 = 1;

fn legacy_version() -> u32 {
    EXPORT_FORMAT_VERSION
}

/// Decoded shape of an export blob.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportEnvelope {
    #[serde(default = "legacy_version")]
    pub version: u32,
    pub session_id: String,
    pub history: Vec<HistoryEntry>,
    pub tracker_entries: Vec<TrackerEntry>,
    #[serde(default)]
    pub exported_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ExportedHistory {
    pub file_name: String,
    pub data: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ImportSummary {
    pub source_session_id: String,
    pub history_entries: usize,
    pub tracker_entries: usize,
}

#[derive(Debug, Clone)]
pub struct AddTrackerEntryInput {
    pub session_id: Uuid,
    pub condition: String,
    pub severity: u8,
    pub date: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone)]
pub struct ImportHistoryInput {
    pub session_id: Uuid,
    pub data: String,
}
