use std::{collections::HashMap, sync::Arc};

use chrono::{Duration, Utc};
use tokio::sync::{Mutex, RwLock};
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    session::{
        entities::{SessionContext, SessionHandle},
        ports::SessionRepository,
    },
};

/// Process-local session registry. Each session sits behind its own mutex so
/// sessions never contend with each other.
#[derive(Debug, Clone, Default)]
pub struct InMemorySessionRepository {
    sessions: Arc<RwLock<HashMap<Uuid, SessionHandle>>>,
}

impl InMemorySessionRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }
}

impl SessionRepository for InMemorySessionRepository {
    async fn create(&self) -> Result<SessionHandle, CoreError> {
        let context = SessionContext::new();
        let id = context.id;
        let handle = Arc::new(Mutex::new(context));

        self.sessions.write().await.insert(id, Arc::clone(&handle));
        Ok(handle)
    }

    async fn get(&self, session_id: Uuid) -> Result<Option<SessionHandle>, CoreError> {
        Ok(self.sessions.read().await.get(&session_id).cloned())
    }

    async fn remove(&self, session_id: Uuid) -> Result<bool, CoreError> {
        Ok(self.sessions.write().await.remove(&session_id).is_some())
    }

    async fn purge_idle(&self, ttl: Duration) -> Result<usize, CoreError> {
        let now = Utc::now();
        let mut sessions = self.sessions.write().await;

        let mut idle = Vec::new();
        for (id, handle) in sessions.iter() {
            // A session busy with a request is active by definition.
            if let Ok(session) = handle.try_lock() {
                if session.is_idle(now, ttl) {
                    idle.push(*id);
                }
            }
        }

        for id in &idle {
            sessions.remove(id);
        }

        Ok(idle.len())
    }
}
