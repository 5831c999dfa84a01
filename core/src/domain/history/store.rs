use base64::{Engine, engine::general_purpose::STANDARD};
use chrono::Utc;
use std::collections::HashSet;

use crate::domain::{
    analysis::entities::Severity,
    common::entities::app_errors::CoreError,
    history::{
        entities::{HistoryEntry, TrackerEntry},
        value_objects::{EXPORT_FORMAT_VERSION, ExportEnvelope, ImportSummary},
    },
};

/// Session-scoped, append-only log of analyses and tracker observations.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HistoryStore {
    history: Vec<HistoryEntry>,
    tracker: Vec<TrackerEntry>,
}

impl HistoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, entry: HistoryEntry) {
        self.history.push(entry);
    }

    /// Entries in insertion order.
    pub fn all(&self) -> &[HistoryEntry] {
        &self.history
    }

    pub fn get(&self, entry_id: &str) -> Option<&HistoryEntry> {
        self.history.iter().find(|entry| entry.id == entry_id)
    }

    pub fn contains(&self, entry_id: &str) -> bool {
        self.get(entry_id).is_some()
    }

    pub fn clear(&mut self) {
        self.history.clear();
    }

    pub fn add_tracker_entry(&mut self, entry: TrackerEntry) {
        self.tracker.push(entry);
    }

    pub fn tracker_entries(&self) -> &[TrackerEntry] {
        &self.tracker
    }

    pub fn clear_tracker(&mut self) {
        self.tracker.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty() && self.tracker.is_empty()
    }

    /// Encodes the store as base64 JSON. This is obfuscation, not protection.
    pub fn export(&self, session_id: &str) -> Result<String, CoreError> {
        let envelope = ExportEnvelope {
            version: EXPORT_FORMAT_VERSION,
            session_id: session_id.to_string(),
            history: self.history.clone(),
            tracker_entries: self.tracker.clone(),
            exported_at: Some(Utc::now()),
        };

        let json = serde_json::to_vec(&envelope).map_err(|_| CoreError::InternalServerError)?;

        Ok(STANDARD.encode(json))
    }

    /// Replaces the store with the content of an export blob. The store is left
    /// untouched when the blob does not decode or validate.
    pub fn import(&mut self, data: &str) -> Result<ImportSummary, CoreError> {
        let envelope = decode_envelope(data)?;
        validate_envelope(&envelope)?;

        let summary = ImportSummary {
            source_session_id: envelope.session_id,
            history_entries: envelope.history.len(),
            tracker_entries: envelope.tracker_entries.len(),
        };

        self.history = envelope.history;
        self.tracker = envelope.tracker_entries;

        Ok(summary)
    }
}

fn decode_envelope(data: &str) -> Result<ExportEnvelope, CoreError> {
    let compact: String = data.chars().filter(|c| !c.is_whitespace()).collect();
    let bytes = STANDARD
        .decode(compact.as_bytes())
        .map_err(|e| CoreError::ImportValidation(format!("not a valid export encoding: {e}")))?;

    serde_json::from_slice(&bytes).map_err(|e| CoreError::ImportValidation(e.to_string()))
}

fn validate_envelope(envelope: &ExportEnvelope) -> Result<(), CoreError> {
    if envelope.version > EXPORT_FORMAT_VERSION {
        return Err(CoreError::ImportValidation(format!(
            "unsupported export version {}",
            envelope.version
        )));
    }

    let mut ids = HashSet::new();
    if let Some(duplicate) = envelope.history.iter().find(|e| !ids.insert(e.id.as_str())) {
        return Err(CoreError::ImportValidation(format!(
            "duplicate history entry id {}",
            duplicate.id
        )));
    }

    let out_of_range = envelope
        .tracker_entries
        .iter()
        .find(|e| !(Severity::MIN..=Severity::MAX).contains(&e.severity));
    if let Some(entry) = out_of_range {
        return Err(CoreError::ImportValidation(format!(
            "tracker severity {} out of range for '{}'",
            entry.severity, entry.condition
        )));
    }

    Ok(())
}
