use chrono::{Duration, Utc};
use tracing::{info, instrument};
use uuid::Uuid;

use crate::domain::{
    analysis::ports::LLMClient,
    common::{entities::app_errors::CoreError, services::Service},
    provider::ports::LocationSearchPort,
    session::{
        entities::{SessionHandle, SessionInfo},
        ports::{SessionRepository, SessionService},
    },
};

impl<LLM, LS, SR> Service<LLM, LS, SR>
where
    LLM: LLMClient,
    LS: LocationSearchPort,
    SR: SessionRepository,
{
    pub(crate) async fn session(&self, session_id: Uuid) -> Result<SessionHandle, CoreError> {
        self.session_repository
            .get(session_id)
            .await?
            .ok_or(CoreError::SessionNotFound)
    }
}

impl<LLM, LS, SR> SessionService for Service<LLM, LS, SR>
where
    LLM: LLMClient,
    LS: LocationSearchPort,
    SR: SessionRepository,
{
    async fn resolve_session(&self, session_id: Option<Uuid>) -> Result<SessionInfo, CoreError> {
        if let Some(id) = session_id {
            if let Some(handle) = self.session_repository.get(id).await? {
                let mut session = handle.lock().await;
                session.touch(Utc::now());
                return Ok(session.info(false));
            }
        }

        let handle = self.session_repository.create().await?;
        let session = handle.lock().await;
        info!(session_id = %session.id, "session started");

        Ok(session.info(true))
    }

    #[instrument(skip(self))]
    async fn end_session(&self, session_id: Uuid) -> Result<(), CoreError> {
        if !self.session_repository.remove(session_id).await? {
            return Err(CoreError::SessionNotFound);
        }

        info!("session ended");
        Ok(())
    }

    async fn purge_idle_sessions(&self, ttl: Duration) -> Result<usize, CoreError> {
        let purged = self.session_repository.purge_idle(ttl).await?;
        if purged > 0 {
            info!(purged, ttl_minutes = ttl.num_minutes(), "idle sessions purged");
        }

        Ok(purged)
    }
}
