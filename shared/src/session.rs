//! Cookie-addressed, server-side session storage
//!
//! The browser only ever holds an opaque session id; quiz progress and
//! uploaded datasets stay in process memory until they sit idle for too long.

use moka::future::Cache;
use std::time::Duration;
use tower_cookies::{Cookie, Cookies};
use uuid::Uuid;

/// Default cookie name used by all apps
pub const SESSION_COOKIE: &str = "session_id";

/// Sessions untouched for this long are dropped
pub const DEFAULT_SESSION_IDLE: Duration = Duration::from_secs(30 * 60);

/// Upper bound on live sessions per app
pub const MAX_SESSIONS: u64 = 10_000;

/// In-memory session cache keyed by the session cookie. Every read or
/// write of an entry restarts its idle timer.
#[derive(Clone)]
pub struct SessionStore<T> {
    sessions: Cache<Uuid, T>,
}

impl<T: Clone + Send + Sync + 'static> Default for SessionStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone + Send + Sync + 'static> SessionStore<T> {
    pub fn new() -> Self {
        Self::with_idle_timeout(DEFAULT_SESSION_IDLE)
    }

    pub fn with_idle_timeout(idle: Duration) -> Self {
        let sessions = Cache::builder()
            .max_capacity(MAX_SESSIONS)
            .time_to_idle(idle)
            .build();
        Self { sessions }
    }

    /// Read the session id from the request cookies, minting and setting a
    /// new one when absent or unparsable
    pub fn session_id(&self, cookies: &Cookies) -> Uuid {
        if let Some(id) = self.existing_id(cookies) {
            return id;
        }

        let id = Uuid::new_v4();
        let mut cookie = Cookie::new(SESSION_COOKIE, id.to_string());
        cookie.set_path("/");
        cookie.set_http_only(true);
        cookies.add(cookie);
        crate::app_debug!("🍪 Issued new session id {}", id);
        id
    }

    /// Existing session id from the cookie, without minting one
    pub fn existing_id(&self, cookies: &Cookies) -> Option<Uuid> {
        cookies
            .get(SESSION_COOKIE)
            .and_then(|cookie| Uuid::parse_str(cookie.value()).ok())
    }

    pub async fn get(&self, id: Uuid) -> Option<T> {
        self.sessions.get(&id).await
    }

    pub async fn insert(&self, id: Uuid, value: T) {
        self.sessions.insert(id, value).await;
    }

    /// Mutate a session and write it back, returning whatever the closure returns
    pub async fn update<R>(&self, id: Uuid, f: impl FnOnce(&mut T) -> R) -> Option<R> {
        let mut session = self.sessions.get(&id).await?;
        let result = f(&mut session);
        self.sessions.insert(id, session).await;
        Some(result)
    }

    pub async fn remove(&self, id: Uuid) -> Option<T> {
        self.sessions.remove(&id).await
    }

    /// Live sessions, after expired ones have been evicted
    pub async fn len(&self) -> usize {
        self.sessions.run_pending_tasks().await;
        self.sessions.entry_count() as usize
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_insert_get_remove() {
        let store: SessionStore<u32> = SessionStore::new();
        let id = Uuid::new_v4();

        assert!(store.get(id).await.is_none());
        store.insert(id, 7).await;
        assert_eq!(store.get(id).await, Some(7));
        assert_eq!(store.len().await, 1);

        assert_eq!(store.remove(id).await, Some(7));
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_update_returns_closure_value() {
        let store: SessionStore<Vec<u8>> = SessionStore::new();
        let id = Uuid::new_v4();
        store.insert(id, vec![1]).await;

        let len = store
            .update(id, |v| {
                v.push(2);
                v.len()
            })
            .await;
        assert_eq!(len, Some(2));
        assert_eq!(store.get(id).await, Some(vec![1, 2]));

        let missing = store.update(Uuid::new_v4(), |v| v.len()).await;
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn test_clones_share_state() {
        let store: SessionStore<&'static str> = SessionStore::new();
        let other = store.clone();
        let id = Uuid::new_v4();

        other.insert(id, "hello").await;
        assert_eq!(store.get(id).await, Some("hello"));
    }

    #[tokio::test]
    async fn test_idle_sessions_are_evicted() {
        let store: SessionStore<u32> = SessionStore::with_idle_timeout(Duration::from_millis(100));
        let idle = Uuid::new_v4();
        let active = Uuid::new_v4();
        store.insert(idle, 1).await;
        store.insert(active, 2).await;

        for _ in 0..4 {
            tokio::time::sleep(Duration::from_millis(40)).await;
            assert_eq!(store.get(active).await, Some(2));
        }

        assert!(store.get(idle).await.is_none());
        assert_eq!(store.len().await, 1);
    }
}
