//! Login page: password sign-in plus the OAuth redirect buttons.

use api::onboarding::post_login_route;
use dioxus::prelude::*;
use ui::{adopt_login, use_api, use_auth, use_session};

use super::TextField;

/// Leave the SPA entirely; the OAuth dance is server-driven.
fn external_redirect(url: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(url);
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        tracing::info!("external redirect: {url}");
    }
}

#[component]
pub fn Login() -> Element {
    let auth = use_auth();
    let client = use_api();
    let session = use_session();
    let nav = use_navigator();

    let email = use_signal(String::new);
    let password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut submitting = use_signal(|| false);

    // Already signed in: skip the form.
    let state = auth();
    if !state.loading {
        if let Some(user) = state.token.as_ref().and(state.user.as_ref()) {
            nav.replace(post_login_route(user));
        }
    }

    let google_url = client.config().google_login_url();
    let github_url = client.config().github_login_url();

    let on_submit = {
        let client = client.clone();
        let session = session.clone();
        move |evt: FormEvent| {
            evt.prevent_default();
            let client = client.clone();
            let session = session.clone();
            async move {
                error.set(None);
                submitting.set(true);

                // Drop any stale session before re-authenticating.
                session.logout();

                match client.login(&email(), &password()).await {
                    Ok(response) => {
                        adopt_login(auth, &session, &response);
                        nav.replace(post_login_route(&response.user));
                    }
                    Err(err) => {
                        let message = match err.status() {
                            Some(401) => {
                                "Incorrect email or password. Please check your credentials and try again."
                                    .to_string()
                            }
                            Some(500) => "Server error. Please try again later.".to_string(),
                            None => {
                                "Unable to connect to the server. Please check your connection."
                                    .to_string()
                            }
                            _ => err.to_string(),
                        };
                        error.set(Some(message));
                    }
                }
                submitting.set(false);
            }
        }
    };

    rsx! {
        div {
            class: "auth-page",
            div {
                class: "auth-card",
                h1 { "Welcome back" }
                p { class: "auth-subtitle", "Sign in to your PayDeck account" }

                if let Some(message) = error() {
                    div { class: "form-error", "{message}" }
                }

                form {
                    onsubmit: on_submit,
                    TextField {
                        label: "Email",
                        value: email,
                        input_type: "email",
                        placeholder: "you@company.com",
                        required: true,
                    }
                    TextField {
                        label: "Password",
                        value: password,
                        input_type: "password",
                        required: true,
                    }
                    button {
                        class: "primary full-width",
                        r#type: "submit",
                        disabled: submitting(),
                        if submitting() { "Signing in..." } else { "Sign in" }
                    }
                }

                div { class: "auth-divider", "or" }

                div {
                    class: "oauth-buttons",
                    button {
                        class: "secondary full-width",
                        onclick: move |_| external_redirect(&google_url),
                        "Continue with Google"
                    }
                    button {
                        class: "secondary full-width",
                        onclick: move |_| external_redirect(&github_url),
                        "Continue with GitHub"
                    }
                }

                p {
                    class: "auth-footer",
                    "New to PayDeck? "
                    Link { to: "/register", "Create an account" }
                }
            }
        }
    }
}
