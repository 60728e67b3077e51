use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::session::SessionStore;

/// In-memory SessionStore for testing and native fallback.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    values: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.lock().unwrap().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.values
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.values.lock().unwrap().remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::{
        clear_session, read_raw_user, snooze_active_at, snooze_for, ACCESS_TOKEN_KEY,
        ONBOARDING_SNOOZE_KEY, REFRESH_TOKEN_KEY, USER_KEY,
    };

    #[test]
    fn test_set_get_remove() {
        let store = MemoryStore::new();
        assert!(store.get("missing").is_none());

        store.set(ACCESS_TOKEN_KEY, "t1");
        assert_eq!(store.get(ACCESS_TOKEN_KEY).as_deref(), Some("t1"));

        store.set(ACCESS_TOKEN_KEY, "t2");
        assert_eq!(store.get(ACCESS_TOKEN_KEY).as_deref(), Some("t2"));

        store.remove(ACCESS_TOKEN_KEY);
        assert!(store.get(ACCESS_TOKEN_KEY).is_none());
    }

    #[test]
    fn test_clear_session_is_idempotent() {
        let store = MemoryStore::new();
        store.set(ACCESS_TOKEN_KEY, "t1");
        store.set(REFRESH_TOKEN_KEY, "r1");
        store.set(USER_KEY, "{\"id\":1}");
        store.set(ONBOARDING_SNOOZE_KEY, "9999999999999");

        clear_session(&store);
        assert!(store.get(ACCESS_TOKEN_KEY).is_none());
        assert!(store.get(REFRESH_TOKEN_KEY).is_none());
        assert!(store.get(USER_KEY).is_none());
        // Snoozing survives logout.
        assert!(store.get(ONBOARDING_SNOOZE_KEY).is_some());

        // Second clear leaves the store in the same state.
        clear_session(&store);
        assert!(store.get(ACCESS_TOKEN_KEY).is_none());
        assert!(store.get(REFRESH_TOKEN_KEY).is_none());
        assert!(store.get(USER_KEY).is_none());
        assert!(store.get(ONBOARDING_SNOOZE_KEY).is_some());
    }

    #[test]
    fn test_snooze_active_in_the_future() {
        let store = MemoryStore::new();
        snooze_for(&store, 60_000.0, 1_000_000.0);

        assert!(snooze_active_at(&store, 1_030_000.0));
        // No consumption-on-read.
        assert!(store.get(ONBOARDING_SNOOZE_KEY).is_some());
    }

    #[test]
    fn test_stale_snooze_is_deleted_lazily() {
        let store = MemoryStore::new();
        store.set(ONBOARDING_SNOOZE_KEY, "1000");

        assert!(!snooze_active_at(&store, 2_000.0));
        assert!(store.get(ONBOARDING_SNOOZE_KEY).is_none());

        // A later check is indistinguishable from "never snoozed".
        assert!(!snooze_active_at(&store, 2_000.0));
    }

    #[test]
    fn test_garbage_snooze_is_deleted() {
        let store = MemoryStore::new();
        store.set(ONBOARDING_SNOOZE_KEY, "not-a-number");

        assert!(!snooze_active_at(&store, 0.0));
        assert!(store.get(ONBOARDING_SNOOZE_KEY).is_none());
    }

    #[test]
    fn test_read_raw_user_filters_garbage() {
        let store = MemoryStore::new();
        assert!(read_raw_user(&store).is_none());

        store.set(USER_KEY, "undefined");
        assert!(read_raw_user(&store).is_none());

        store.set(USER_KEY, "null");
        assert!(read_raw_user(&store).is_none());

        store.set(USER_KEY, "{\"id\":1}");
        assert_eq!(read_raw_user(&store).as_deref(), Some("{\"id\":1}"));
    }
}
