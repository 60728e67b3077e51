//! Authentication context and hooks for the UI.

use api::models::AuthResponse;
use api::{ApiClient, ApiConfig, AuthSession, UserRecord};
use dioxus::prelude::*;

/// Authentication state for the application.
///
/// `token == None` means unauthenticated, whatever `user` holds. Nothing
/// here is meaningful until `loading` flips to false.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthState {
    pub token: Option<String>,
    pub user: Option<UserRecord>,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            token: None,
            user: None,
            loading: true,
        }
    }
}

/// Get the current authentication state.
/// Returns a signal that updates when the user logs in or out.
pub fn use_auth() -> Signal<AuthState> {
    use_context::<Signal<AuthState>>()
}

/// The shared REST client.
pub fn use_api() -> ApiClient {
    use_context::<ApiClient>()
}

/// The persisted-session handle.
pub fn use_session() -> AuthSession {
    use_context::<AuthSession>()
}

/// Adopt a successful auth response into both the persisted and the
/// in-memory session. The caller already performed the authenticating
/// request.
pub fn adopt_login(mut auth: Signal<AuthState>, session: &AuthSession, response: &AuthResponse) {
    session.login(response);
    auth.set(AuthState {
        token: Some(response.access_token.clone()),
        user: Some(response.user.clone()),
        loading: false,
    });
}

/// Clear both sides of the session. Never calls the server.
pub fn sign_out(mut auth: Signal<AuthState>, session: &AuthSession) {
    session.logout();
    auth.set(AuthState {
        token: None,
        user: None,
        loading: false,
    });
}

/// Provider component that owns the session for the whole app.
/// Wrap the router with this component to enable authentication.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let store = crate::session_store();
    let session = use_context_provider(|| AuthSession::new(store.clone()));
    let client = use_context_provider(|| ApiClient::new(ApiConfig::from_env(), store));
    let mut auth_state = use_context_provider(|| Signal::new(AuthState::default()));

    // Resolve the session once per application boot. A persisted token is
    // re-validated against the server; with no token one cookie-credential
    // probe still runs so external SSO sessions are picked up.
    let _ = use_resource(move || {
        let session = session.clone();
        let client = client.clone();
        async move {
            let snapshot = session
                .initialize(|token| {
                    let client = client.clone();
                    async move { client.get_current_user_with(token).await }
                })
                .await;
            auth_state.set(AuthState {
                token: snapshot.access_token,
                user: snapshot.user,
                loading: false,
            });
        }
    });

    rsx! {
        {children}
    }
}
