use std::future::Future;

use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    history::{
        entities::{HistoryEntry, TrackerEntry},
        value_objects::{AddTrackerEntryInput, ExportedHistory, ImportHistoryInput, ImportSummary},
    },
};

pub trait HistoryService: Send + Sync {
    fn list_history(
        &self,
        session_id: Uuid,
    ) -> impl Future<Output = Result<Vec<HistoryEntry>, CoreError>> + Send;

    fn get_history_entry(
        &self,
        session_id: Uuid,
        entry_id: String,
    ) -> impl Future<Output = Result<HistoryEntry, CoreError>> + Send;

    /// Plain-text report of one history entry.
    fn history_entry_report(
        &self,
        session_id: Uuid,
        entry_id: String,
    ) -> impl Future<Output = Result<(String, String), CoreError>> + Send;

    fn clear_history(&self, session_id: Uuid) -> impl Future<Output = Result<(), CoreError>> + Send;

    fn export_history(
        &self,
        session_id: Uuid,
    ) -> impl Future<Output = Result<ExportedHistory, CoreError>> + Send;

    fn import_history(
        &self,
        input: ImportHistoryInput,
    ) -> impl Future<Output = Result<ImportSummary, CoreError>> + Send;

    fn list_tracker_entries(
        &self,
        session_id: Uuid,
    ) -> impl Future<Output = Result<Vec<TrackerEntry>, CoreError>> + Send;

    fn add_tracker_entry(
        &self,
        input: AddTrackerEntryInput,
    ) -> impl Future<Output = Result<TrackerEntry, CoreError>> + Send;

    fn clear_tracker(&self, session_id: Uuid) -> impl Future<Output = Result<(), CoreError>> + Send;
}
