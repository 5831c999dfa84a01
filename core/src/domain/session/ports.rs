use std::future::Future;

use chrono::Duration;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    session::entities::{SessionHandle, SessionInfo},
};

pub trait SessionRepository: Send + Sync {
    fn create(&self) -> impl Future<Output = Result<SessionHandle, CoreError>> + Send;

    fn get(
        &self,
        session_id: Uuid,
    ) -> impl Future<Output = Result<Option<SessionHandle>, CoreError>> + Send;

    /// `true` when a session was removed.
    fn remove(&self, session_id: Uuid) -> impl Future<Output = Result<bool, CoreError>> + Send;

    /// Drops every session idle for longer than `ttl`, returning how many went.
    fn purge_idle(&self, ttl: Duration) -> impl Future<Output = Result<usize, CoreError>> + Send;
}

pub trait SessionService: Send + Sync {
    /// Returns the session with this id, creating a fresh one when the id is
    /// absent or unknown. Marks it active.
    fn resolve_session(
        &self,
        session_id: Option<Uuid>,
    ) -> impl Future<Output = Result<SessionInfo, CoreError>> + Send;

    fn end_session(&self, session_id: Uuid) -> impl Future<Output = Result<(), CoreError>> + Send;

    fn purge_idle_sessions(
        &self,
        ttl: Duration,
    ) -> impl Future<Output = Result<usize, CoreError>> + Send;
}
