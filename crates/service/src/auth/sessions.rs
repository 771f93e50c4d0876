use dashmap::DashMap;
use uuid::Uuid;

/// In-process registry of live session ids. A token is only honored while its
/// id is present here, so ending a session is an actual invalidation rather
/// than a cookie deletion. Sessions do not survive a restart.
#[derive(Default)]
pub struct SessionStore {
    live: DashMap<Uuid, i32>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self { live: DashMap::new() }
    }

    pub fn insert(&self, session_id: Uuid, admin_id: i32) {
        self.live.insert(session_id, admin_id);
    }

    pub fn is_live(&self, session_id: &Uuid) -> bool {
        self.live.contains_key(session_id)
    }

    /// Returns whether the session was live.
    pub fn remove(&self, session_id: &Uuid) -> bool {
        self.live.remove(session_id).is_some()
    }

    pub fn live_count(&self) -> usize {
        self.live.len()
    }
}
