// src/application/ports/session.rs
use crate::application::ApplicationResult;
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, Copy)]
pub struct SessionRecord {
    pub user_id: UserId,
    pub expires_at: DateTime<Utc>,
}

/// Opaque-token session storage for the admin gateway. Tokens are
/// generated by the login command; the store only maps them to their
/// owner and expiry.
#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn put(&self, token: &str, record: SessionRecord) -> ApplicationResult<()>;
    async fn get(&self, token: &str) -> ApplicationResult<Option<SessionRecord>>;
    async fn remove(&self, token: &str) -> ApplicationResult<()>;
    /// Drop every record whose expiry is at or before `now`. Abandoned
    /// sessions would otherwise linger until their token resurfaces.
    async fn prune(&self, now: DateTime<Utc>) -> ApplicationResult<()>;
}
