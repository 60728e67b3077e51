//! SSO callback. An external redirect delivers tokens in the query string;
//! this page persists them, fetches the account, and routes exactly as a
//! normal login would.

use api::models::AuthResponse;
use api::onboarding::post_login_route;
use dioxus::prelude::*;
use ui::{adopt_login, sign_out, use_api, use_auth, use_session, FullPageSpinner};

#[component]
pub fn AuthCallback(access_token: String, refresh_token: String) -> Element {
    let auth = use_auth();
    let client = use_api();
    let session = use_session();
    let nav = use_navigator();
    let mut error = use_signal(|| Option::<String>::None);

    let _ = use_resource(move || {
        let client = client.clone();
        let session = session.clone();
        let access_token = access_token.clone();
        let refresh_token = refresh_token.clone();
        async move {
            if access_token.is_empty() {
                error.set(Some("Authentication failed. No token provided.".to_string()));
                return;
            }

            // Persist the tokens first so the account fetch goes out
            // authenticated.
            session
                .store()
                .set(store::ACCESS_TOKEN_KEY, &access_token);
            if !refresh_token.is_empty() {
                session
                    .store()
                    .set(store::REFRESH_TOKEN_KEY, &refresh_token);
            }

            match client.get_current_user().await {
                Ok(user) => {
                    let refresh = (!refresh_token.is_empty()).then_some(refresh_token);
                    adopt_login(
                        auth,
                        &session,
                        &AuthResponse {
                            access_token,
                            refresh_token: refresh,
                            token_type: None,
                            user: user.clone(),
                        },
                    );
                    nav.replace(post_login_route(&user));
                }
                Err(err) => {
                    tracing::error!("auth callback failed: {err}");
                    sign_out(auth, &session);
                    error.set(Some(
                        "Failed to fetch your account after sign-in.".to_string(),
                    ));
                }
            }
        }
    });

    rsx! {
        if let Some(message) = error() {
            div {
                class: "auth-page",
                div {
                    class: "auth-card error-card",
                    h2 { "Authentication error" }
                    p { "{message}" }
                    Link { to: "/login", class: "primary-link", "Return to login" }
                }
            }
        } else {
            FullPageSpinner {}
        }
    }
}
