//! In-process session store
//!
//! Maps opaque bearer tokens to the authenticated admin, with a TTL.
//! The deployment contract is single-process, so a shared map is the
//! whole story; expired entries are purged lazily on access.

use std::collections::HashMap;
use std::sync::RwLock;

use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

use crate::models::AdminInfo;

struct Session {
    admin: AdminInfo,
    expires_at: DateTime<Utc>,
}

pub struct SessionStore {
    sessions: RwLock<HashMap<String, Session>>,
    ttl: Duration,
}

impl SessionStore {
    pub fn new(ttl_hours: i64) -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
            ttl: Duration::hours(ttl_hours),
        }
    }

    /// Mint a new session token for an authenticated admin
    pub fn create(&self, admin: AdminInfo) -> String {
        let token = Uuid::new_v4().simple().to_string();
        let session = Session {
            admin,
            expires_at: Utc::now() + self.ttl,
        };
        self.sessions
            .write()
            .expect("session store lock poisoned")
            .insert(token.clone(), session);
        token
    }

    /// Resolve a token to its admin, if the session exists and has not
    /// expired. Expired sessions are removed on the way.
    pub fn resolve(&self, token: &str) -> Option<AdminInfo> {
        let now = Utc::now();
        let mut sessions = self.sessions.write().expect("session store lock poisoned");
        match sessions.get(token) {
            Some(session) if session.expires_at > now => Some(session.admin.clone()),
            Some(_) => {
                sessions.remove(token);
                None
            }
            None => None,
        }
    }

    /// Revoke a session. Returns whether a session existed for the token.
    pub fn revoke(&self, token: &str) -> bool {
        self.sessions
            .write()
            .expect("session store lock poisoned")
            .remove(token)
            .is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn admin() -> AdminInfo {
        AdminInfo {
            id: 1,
            username: "admin".to_string(),
        }
    }

    #[test]
    fn create_then_resolve() {
        let store = SessionStore::new(24);
        let token = store.create(admin());
        let resolved = store.resolve(&token).unwrap();
        assert_eq!(resolved.id, 1);
        assert_eq!(resolved.username, "admin");
    }

    #[test]
    fn unknown_token_does_not_resolve() {
        let store = SessionStore::new(24);
        assert!(store.resolve("nope").is_none());
    }

    #[test]
    fn expired_session_is_purged() {
        let store = SessionStore::new(0);
        let token = store.create(admin());
        assert!(store.resolve(&token).is_none());
        // Purged, not just hidden
        assert!(!store.revoke(&token));
    }

    #[test]
    fn revoked_token_does_not_resolve() {
        let store = SessionStore::new(24);
        let token = store.create(admin());
        assert!(store.revoke(&token));
        assert!(store.resolve(&token).is_none());
        assert!(!store.revoke(&token));
    }

    #[test]
    fn tokens_are_unique() {
        let store = SessionStore::new(24);
        assert_ne!(store.create(admin()), store.create(admin()));
    }
}
