use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};
use chrono::Utc;
use tokio::sync::{Mutex, RwLock};
use tracing::info;
use uuid::Uuid;
use crate::core::domain::DEFAULT_SESSION_IDLE_SECS;
use crate::core::library::{LibraryError, LibraryResult};
use crate::session::model::CatalogSession;

pub(crate) type SharedSession = Arc<Mutex<CatalogSession>>;

#[derive(Debug)]
struct StoredSession {
    session: SharedSession,
    // epoch millis of the last lookup
    last_seen: AtomicI64,
}

impl StoredSession {
    fn is_idle(&self, now: i64, idle_ttl_millis: i64) -> bool {
        now - self.last_seen.load(Ordering::Relaxed) > idle_ttl_millis
    }
}

// SessionStore keeps every open catalog page in memory, nothing survives a restart. Tabs that
// are closed without a DELETE are dropped once idle for longer than the ttl.
#[derive(Debug)]
pub(crate) struct SessionStore {
    sessions: RwLock<HashMap<String, StoredSession>>,
    idle_ttl_millis: i64,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
            idle_ttl_millis: DEFAULT_SESSION_IDLE_SECS as i64 * 1000,
        }
    }
}

fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

fn not_found(session_id: &str) -> LibraryError {
    LibraryError::not_found(format!("session {} not found", session_id).as_str())
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_idle_ttl_secs(mut self, idle_ttl_secs: u64) -> Self {
        self.idle_ttl_millis = i64::try_from(idle_ttl_secs.saturating_mul(1000)).unwrap_or(i64::MAX);
        self
    }

    pub async fn create(&self) -> SharedSession {
        self.create_at(now_millis()).await
    }

    pub async fn get(&self, session_id: &str) -> LibraryResult<SharedSession> {
        self.get_at(session_id, now_millis()).await
    }

    pub async fn remove(&self, session_id: &str) -> LibraryResult<()> {
        self.sessions.write().await.remove(session_id).map(|_| ()).ok_or_else(|| not_found(session_id))
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    // every new session sweeps out the idle ones, so the map only holds recently used pages
    async fn create_at(&self, now: i64) -> SharedSession {
        let session_id = Uuid::new_v4().to_string();
        let session = Arc::new(Mutex::new(CatalogSession::new(session_id.as_str())));
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, stored| !stored.is_idle(now, self.idle_ttl_millis));
        if sessions.len() < before {
            info!("evicted {} idle catalog sessions", before - sessions.len());
        }
        sessions.insert(session_id, StoredSession { session: session.clone(), last_seen: AtomicI64::new(now) });
        session
    }

    async fn get_at(&self, session_id: &str, now: i64) -> LibraryResult<SharedSession> {
        let sessions = self.sessions.read().await;
        let stored = sessions.get(session_id).ok_or_else(|| not_found(session_id))?;
        if stored.is_idle(now, self.idle_ttl_millis) {
            return Err(not_found(session_id));
        }
        stored.last_seen.store(now, Ordering::Relaxed);
        Ok(stored.session.clone())
    }
}
