use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;
use tokio::sync::Mutex;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{
    analysis::entities::Language,
    common::{generate_anonymous_id, generate_uuid_v7},
    history::store::HistoryStore,
    provider::value_objects::ProviderSearchOutcome,
};

/// Everything one user accumulates during a session. Passed explicitly to
/// every operation through its [`SessionHandle`].
#[derive(Debug, Clone)]
pub struct SessionContext {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub last_active_at: DateTime<Utc>,
    pub language: Language,
    pub store: HistoryStore,
    pub last_provider_search: Option<ProviderSearchOutcome>,
    sequence: u64,
}

/// Appends, exports and imports of one session are serialized by this lock.
pub type SessionHandle = Arc<Mutex<SessionContext>>;

impl SessionContext {
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            id: generate_uuid_v7(),
            created_at: now,
            last_active_at: now,
            language: Language::default(),
            store: HistoryStore::new(),
            last_provider_search: None,
            sequence: 0,
        }
    }

    /// Id for a new history entry, unique within this session.
    pub fn next_entry_id(&mut self, at: DateTime<Utc>) -> String {
        loop {
            self.sequence += 1;
            let id = generate_anonymous_id(self.id, self.sequence, at);
            if !self.store.contains(&id) {
                return id;
            }
        }
    }

    pub fn touch(&mut self, now: DateTime<Utc>) {
        if now > self.last_active_at {
            self.last_active_at = now;
        }
    }

    pub fn is_idle(&self, now: DateTime<Utc>, ttl: Duration) -> bool {
        now - self.last_active_at > ttl
    }

    pub fn info(&self, is_new: bool) -> SessionInfo {
        SessionInfo {
            id: self.id,
            created_at: self.created_at,
            last_active_at: self.last_active_at,
            is_new,
        }
    }
}

impl Default for SessionContext {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct SessionInfo {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub last_active_at: DateTime<Utc>,
    pub is_new: bool,
}
