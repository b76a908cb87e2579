use crate::{Session, SessionId, SessionIdRef};
use moka::sync::Cache;
use std::time::Duration;

/// In-memory session storage
///
/// Sessions that are not touched for the idle timeout are evicted.
/// Cloning the store is cheap and every clone sees the same sessions.
#[derive(Clone)]
pub struct SessionStore {
    inner: Cache<SessionId, Session>,
}

impl SessionStore {
    #[must_use]
    pub fn new(max_sessions: u64, idle_timeout: Duration) -> Self {
        let inner = Cache::builder()
            .time_to_idle(idle_timeout)
            .max_capacity(max_sessions)
            .build();

        Self { inner }
    }

    #[must_use]
    pub fn load(&self, id: &SessionIdRef) -> Option<Session> {
        self.inner.get(id)
    }

    pub fn save(&self, session: Session) {
        self.inner.insert(session.id().to_owned(), session);
    }
}
