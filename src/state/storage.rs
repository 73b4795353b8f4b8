//! Session storage implementation
//!
//! In-memory, process-wide map from user ID to dialogue session. Sessions are
//! never persisted and never expire; they live until they are completed,
//! replaced by a new `/start`, or the process exits.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::debug;
use super::session::Session;

/// Shared session store; clones refer to the same map
#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    sessions: Arc<Mutex<HashMap<i64, Session>>>,
}

impl SessionStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<i64, Session>> {
        // Every critical section is a single map operation, so a poisoned map is still consistent
        self.sessions.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Start a fresh session, replacing any previous one for this user
    pub fn create(&self, user_id: i64) -> Session {
        let session = Session::new(user_id);
        let replaced = self.lock().insert(user_id, session.clone()).is_some();
        debug!(user_id = user_id, replaced = replaced, "Session created");
        session
    }

    /// Snapshot of the user's session, if any
    pub fn get(&self, user_id: i64) -> Option<Session> {
        self.lock().get(&user_id).cloned()
    }

    /// Write back an advanced session
    pub fn save(&self, session: Session) {
        debug!(user_id = session.user_id, step = %session.step, "Session saved");
        self.lock().insert(session.user_id, session);
    }

    /// Remove the user's session; returns whether one existed
    pub fn delete(&self, user_id: i64) -> bool {
        let deleted = self.lock().remove(&user_id).is_some();
        if deleted {
            debug!("Deleted session for user {}", user_id);
        } else {
            debug!("No session to delete for user {}", user_id);
        }
        deleted
    }

    /// Number of live sessions
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
