use crate::application::ApplicationResult;
use crate::application::error::ApplicationError;
use crate::application::ports::session::{SessionRecord, SessionStore};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::Mutex;

/// Process-local session store. Sessions do not survive a restart, which
/// matches the admin gateway's contract: operators simply log in again.
#[derive(Default)]
pub struct InMemorySessionStore {
    sessions: Mutex<HashMap<String, SessionRecord>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> ApplicationResult<std::sync::MutexGuard<'_, HashMap<String, SessionRecord>>> {
        self.sessions
            .lock()
            .map_err(|_| ApplicationError::infrastructure("session store poisoned"))
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn put(&self, token: &str, record: SessionRecord) -> ApplicationResult<()> {
        self.lock()?.insert(token.to_string(), record);
        Ok(())
    }

    async fn get(&self, token: &str) -> ApplicationResult<Option<SessionRecord>> {
        Ok(self.lock()?.get(token).copied())
    }

    async fn remove(&self, token: &str) -> ApplicationResult<()> {
        self.lock()?.remove(token);
        Ok(())
    }

    async fn prune(&self, now: DateTime<Utc>) -> ApplicationResult<()> {
        self.lock()?.retain(|_, record| record.expires_at > now);
        Ok(())
    }
}
