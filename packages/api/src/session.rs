//! # Auth session — login, logout, and boot-time initialization
//!
//! [`AuthSession`] owns the persisted side of the session. The in-memory
//! side (a signal holding token/user/loading) lives in the UI crate and is
//! always derived from what happens here, never the other way around.
//!
//! State machine: `Uninitialized → Loading → Ready(authenticated | anonymous)`.
//! [`AuthSession::initialize`] performs the `Loading` step once per
//! application boot; the UI treats nothing as meaningful until it resolves.

use std::future::Future;
use std::sync::Arc;

use store::SessionStore;

use crate::error::ApiError;
use crate::models::{AuthResponse, UserRecord};

/// Resolved session state after [`AuthSession::initialize`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SessionSnapshot {
    pub access_token: Option<String>,
    pub user: Option<UserRecord>,
}

impl SessionSnapshot {
    pub fn is_authenticated(&self) -> bool {
        self.access_token.is_some()
    }
}

/// Owner of the persisted session keys.
#[derive(Clone)]
pub struct AuthSession {
    store: Arc<dyn SessionStore>,
}

impl AuthSession {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &Arc<dyn SessionStore> {
        &self.store
    }

    pub fn persisted_token(&self) -> Option<String> {
        self.store.get(store::ACCESS_TOKEN_KEY)
    }

    /// Defensive read of the persisted user snapshot. Malformed state reads
    /// as absence, never as an error.
    pub fn persisted_user(&self) -> Option<UserRecord> {
        let raw = store::read_raw_user(self.store.as_ref())?;
        serde_json::from_str(&raw).ok()
    }

    pub fn persist_user(&self, user: &UserRecord) {
        if let Ok(json) = serde_json::to_string(user) {
            self.store.set(store::USER_KEY, &json);
        }
    }

    /// Adopt a server auth response. The caller already performed the
    /// authenticating request; nothing goes over the wire here.
    pub fn login(&self, auth: &AuthResponse) {
        self.store.set(store::ACCESS_TOKEN_KEY, &auth.access_token);
        if let Some(refresh) = &auth.refresh_token {
            self.store.set(store::REFRESH_TOKEN_KEY, refresh);
        }
        self.persist_user(&auth.user);
    }

    /// Drop the persisted session. Never talks to the server, and leaves
    /// the onboarding snooze in place.
    pub fn logout(&self) {
        store::clear_session(self.store.as_ref());
    }

    /// Resolve the session at application boot.
    ///
    /// With a persisted token, the server either confirms the identity (the
    /// returned user replaces the persisted snapshot) or the whole session
    /// is cleared. With no token, one unauthenticated `fetch_user` call
    /// still runs: a server-set cookie from an external SSO redirect may
    /// identify us, in which case a placeholder token is persisted so the
    /// rest of the app sees an authenticated session. A failure on that
    /// path is an ordinary anonymous visitor and has no side effects.
    pub async fn initialize<F, Fut>(&self, fetch_user: F) -> SessionSnapshot
    where
        F: Fn(Option<String>) -> Fut,
        Fut: Future<Output = Result<UserRecord, ApiError>>,
    {
        match self.persisted_token() {
            Some(token) => match fetch_user(Some(token.clone())).await {
                Ok(user) => {
                    self.persist_user(&user);
                    SessionSnapshot {
                        access_token: Some(token),
                        user: Some(user),
                    }
                }
                Err(err) => {
                    tracing::debug!("stored token rejected, clearing session: {err}");
                    self.logout();
                    SessionSnapshot::default()
                }
            },
            None => match fetch_user(None).await {
                Ok(user) => {
                    self.store
                        .set(store::ACCESS_TOKEN_KEY, store::COOKIE_SESSION_TOKEN);
                    self.persist_user(&user);
                    SessionSnapshot {
                        access_token: Some(store::COOKIE_SESSION_TOKEN.to_string()),
                        user: Some(user),
                    }
                }
                Err(_) => SessionSnapshot::default(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::onboarding::{evaluate_onboarding_gate, GateDecision, MERCHANT_ROUTE};
    use std::sync::Mutex;
    use store::{MemoryStore, ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY, USER_KEY};

    fn session_over(store: MemoryStore) -> AuthSession {
        AuthSession::new(Arc::new(store))
    }

    fn user_with_stage(stage: &str) -> UserRecord {
        UserRecord {
            id: Some(1),
            email: Some("m@example.com".to_string()),
            onboarding_stage: Some(stage.to_string()),
            ..UserRecord::default()
        }
    }

    #[tokio::test]
    async fn test_initialize_with_valid_token() {
        let store = MemoryStore::new();
        store.set(ACCESS_TOKEN_KEY, "t1");
        let session = session_over(store.clone());

        let seen = Arc::new(Mutex::new(Vec::new()));
        let seen2 = seen.clone();
        let user = user_with_stage("verified");
        let fetched = user.clone();
        let snapshot = session
            .initialize(move |token| {
                seen2.lock().unwrap().push(token);
                let user = fetched.clone();
                async move { Ok(user) }
            })
            .await;

        assert_eq!(snapshot.access_token.as_deref(), Some("t1"));
        assert_eq!(snapshot.user, Some(user.clone()));
        assert!(snapshot.is_authenticated());
        // The fetch went out with the stored token.
        assert_eq!(*seen.lock().unwrap(), vec![Some("t1".to_string())]);
        // The fetched user replaced the persisted snapshot.
        assert_eq!(session.persisted_user(), Some(user.clone()));

        // Scenario: after boot the onboarding gate routes to merchant
        // creation for a `verified` user.
        assert_eq!(
            evaluate_onboarding_gate(&store, 0.0),
            GateDecision::Redirect(MERCHANT_ROUTE)
        );
    }

    #[tokio::test]
    async fn test_initialize_with_rejected_token_clears_everything() {
        let store = MemoryStore::new();
        store.set(ACCESS_TOKEN_KEY, "t1");
        store.set(USER_KEY, "{\"id\":1}");
        let session = session_over(store.clone());

        let snapshot = session
            .initialize(|_| async {
                Err(ApiError::Status {
                    status: 401,
                    message: "Unauthorized".to_string(),
                    payload: None,
                })
            })
            .await;

        assert_eq!(snapshot, SessionSnapshot::default());
        assert!(store.get(ACCESS_TOKEN_KEY).is_none());
        assert!(store.get(USER_KEY).is_none());
    }

    #[tokio::test]
    async fn test_initialize_accepts_cookie_session_without_token() {
        let store = MemoryStore::new();
        let session = session_over(store.clone());

        let user = user_with_stage("active");
        let fetched = user.clone();
        let snapshot = session
            .initialize(move |token| {
                assert!(token.is_none());
                let user = fetched.clone();
                async move { Ok(user) }
            })
            .await;

        assert_eq!(
            snapshot.access_token.as_deref(),
            Some(store::COOKIE_SESSION_TOKEN)
        );
        assert_eq!(
            store.get(ACCESS_TOKEN_KEY).as_deref(),
            Some(store::COOKIE_SESSION_TOKEN)
        );
        assert_eq!(session.persisted_user(), Some(user));
    }

    #[tokio::test]
    async fn test_initialize_anonymous_is_silent() {
        let store = MemoryStore::new();
        let session = session_over(store.clone());

        let snapshot = session
            .initialize(|_| async { Err(ApiError::Network("offline".to_string())) })
            .await;

        assert_eq!(snapshot, SessionSnapshot::default());
        // Nothing was set and nothing was cleared.
        assert!(store.get(ACCESS_TOKEN_KEY).is_none());
        assert!(store.get(USER_KEY).is_none());
    }

    #[tokio::test]
    async fn test_login_persists_exactly_the_session_keys() {
        let store = MemoryStore::new();
        let session = session_over(store.clone());

        let user = user_with_stage("account_created");
        session.login(&AuthResponse {
            access_token: "t9".to_string(),
            refresh_token: Some("r9".to_string()),
            token_type: Some("bearer".to_string()),
            user: user.clone(),
        });

        assert_eq!(store.get(ACCESS_TOKEN_KEY).as_deref(), Some("t9"));
        assert_eq!(store.get(REFRESH_TOKEN_KEY).as_deref(), Some("r9"));
        assert_eq!(session.persisted_user(), Some(user));
    }

    #[tokio::test]
    async fn test_login_without_refresh_token_leaves_key_absent() {
        let store = MemoryStore::new();
        let session = session_over(store.clone());

        session.login(&AuthResponse {
            access_token: "t9".to_string(),
            refresh_token: None,
            token_type: None,
            user: UserRecord::default(),
        });

        assert!(store.get(REFRESH_TOKEN_KEY).is_none());
    }

    #[tokio::test]
    async fn test_logout_is_idempotent() {
        let store = MemoryStore::new();
        let session = session_over(store.clone());
        session.login(&AuthResponse {
            access_token: "t".to_string(),
            refresh_token: Some("r".to_string()),
            token_type: None,
            user: UserRecord::default(),
        });

        session.logout();
        let after_once: Vec<Option<String>> = [ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY, USER_KEY]
            .iter()
            .map(|k| store.get(k))
            .collect();
        session.logout();
        let after_twice: Vec<Option<String>> = [ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY, USER_KEY]
            .iter()
            .map(|k| store.get(k))
            .collect();

        assert_eq!(after_once, vec![None, None, None]);
        assert_eq!(after_once, after_twice);
    }
}
