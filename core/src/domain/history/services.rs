use chrono::Utc;
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::domain::{
    analysis::{ports::LLMClient, report},
    common::{entities::app_errors::CoreError, services::Service},
    history::{
        entities::{HistoryEntry, TrackerEntry},
        ports::HistoryService,
        value_objects::{AddTrackerEntryInput, ExportedHistory, ImportHistoryInput, ImportSummary},
    },
    provider::ports::LocationSearchPort,
    session::ports::SessionRepository,
};

impl<LLM, LS, SR> HistoryService for Service<LLM, LS, SR>
where
    LLM: LLMClient,
    LS: LocationSearchPort,
    SR: SessionRepository,
{
    async fn list_history(&self, session_id: Uuid) -> Result<Vec<HistoryEntry>, CoreError> {
        let session = self.session(session_id).await?;
        let session = session.lock().await;

        Ok(session.store.all().to_vec())
    }

    async fn get_history_entry(
        &self,
        session_id: Uuid,
        entry_id: String,
    ) -> Result<HistoryEntry, CoreError> {
        let session = self.session(session_id).await?;
        let session = session.lock().await;

        session
            .store
            .get(&entry_id)
            .cloned()
            .ok_or(CoreError::NotFound)
    }

    async fn history_entry_report(
        &self,
        session_id: Uuid,
        entry_id: String,
    ) -> Result<(String, String), CoreError> {
        let entry = self.get_history_entry(session_id, entry_id).await?;

        Ok((
            report::report_file_name(&entry),
            report::render_entry_report(&entry),
        ))
    }

    #[instrument(skip(self))]
    async fn clear_history(&self, session_id: Uuid) -> Result<(), CoreError> {
        let session = self.session(session_id).await?;
        let mut session = session.lock().await;

        let removed = session.store.all().len();
        session.store.clear();
        info!(removed, "history cleared");

        Ok(())
    }

    #[instrument(skip(self))]
    async fn export_history(&self, session_id: Uuid) -> Result<ExportedHistory, CoreError> {
        let session = self.session(session_id).await?;
        let session = session.lock().await;

        let data = session.store.export(&session.id.to_string())?;
        let file_name = format!(
            "health_analysis_history_{}.yshy",
            Utc::now().format("%Y%m%d_%H%M%S")
        );
        info!(
            history_entries = session.store.all().len(),
            tracker_entries = session.store.tracker_entries().len(),
            "history exported"
        );

        Ok(ExportedHistory { file_name, data })
    }

    #[instrument(skip(self, input), fields(session_id = %input.session_id))]
    async fn import_history(&self, input: ImportHistoryInput) -> Result<ImportSummary, CoreError> {
        let session = self.session(input.session_id).await?;
        let mut session = session.lock().await;

        match session.store.import(&input.data) {
            Ok(summary) => {
                info!(
                    source_session_id = %summary.source_session_id,
                    history_entries = summary.history_entries,
                    tracker_entries = summary.tracker_entries,
                    "history imported"
                );
                Ok(summary)
            }
            Err(e) => {
                warn!(error = %e, "history import rejected");
                Err(e)
            }
        }
    }

    async fn list_tracker_entries(&self, session_id: Uuid) -> Result<Vec<TrackerEntry>, CoreError> {
        let session = self.session(session_id).await?;
        let session = session.lock().await;

        Ok(session.store.tracker_entries().to_vec())
    }

    #[instrument(skip(self, input), fields(session_id = %input.session_id))]
    async fn add_tracker_entry(&self, input: AddTrackerEntryInput) -> Result<TrackerEntry, CoreError> {
        let condition = input.condition.trim();
        if condition.is_empty() {
            return Err(CoreError::Invalid("condition must not be empty".to_string()));
        }

        let entry = TrackerEntry::new(
            input.date.unwrap_or_else(Utc::now),
            condition.to_string(),
            input.severity,
        );

        let session = self.session(input.session_id).await?;
        let mut session = session.lock().await;
        session.store.add_tracker_entry(entry.clone());
        info!(condition = %entry.condition, severity = entry.severity, "tracker entry added");

        Ok(entry)
    }

    #[instrument(skip(self))]
    async fn clear_tracker(&self, session_id: Uuid) -> Result<(), CoreError> {
        let session = self.session(session_id).await?;
        let mut session = session.lock().await;

        session.store.clear_tracker();
        info!("tracker cleared");

        Ok(())
    }
}
