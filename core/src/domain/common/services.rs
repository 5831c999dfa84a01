use std::sync::Arc;

use chrono::Duration;

use crate::domain::{
    analysis::ports::LLMClient, common::SessionConfig, provider::ports::LocationSearchPort,
    session::ports::SessionRepository, trends::value_objects::TrendThresholds,
};

/// Session orchestrator: every service trait of the domain is implemented on it.
pub struct Service<LLM, LS, SR>
where
    LLM: LLMClient,
    LS: LocationSearchPort,
    SR: SessionRepository,
{
    pub(crate) llm_client: Arc<LLM>,
    pub(crate) location_search: Arc<LS>,
    pub(crate) session_repository: Arc<SR>,
    pub(crate) trend_thresholds: TrendThresholds,
    pub(crate) session_config: SessionConfig,
}

impl<LLM, LS, SR> Service<LLM, LS, SR>
where
    LLM: LLMClient,
    LS: LocationSearchPort,
    SR: SessionRepository,
{
    pub fn new(
        llm_client: LLM,
        location_search: LS,
        session_repository: SR,
        trend_thresholds: TrendThresholds,
        session_config: SessionConfig,
    ) -> Self {
        Self {
            llm_client: Arc::new(llm_client),
            location_search: Arc::new(location_search),
            session_repository: Arc::new(session_repository),
            trend_thresholds,
            session_config,
        }
    }

    /// How long a session may stay idle before the sweeper purges it.
    pub fn session_ttl(&self) -> Duration {
        self.session_config.idle_ttl()
    }
}

impl<LLM, LS, SR> Clone for Service<LLM, LS, SR>
where
    LLM: LLMClient,
    LS: LocationSearchPort,
    SR: SessionRepository,
{
    fn clone(&self) -> Self {
        Self {
            llm_client: Arc::clone(&self.llm_client),
            location_search: Arc::clone(&self.location_search),
            session_repository: Arc::clone(&self.session_repository),
            trend_thresholds: self.trend_thresholds.clone(),
            session_config: self.session_config.clone(),
        }
    }
}
