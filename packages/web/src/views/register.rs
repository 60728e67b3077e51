//! Registration page. A successful registration is followed by a normal
//! login with the same credentials, then the onboarding funnel.

use api::models::Registration;
use api::onboarding::VERIFY_ROUTE;
use dioxus::prelude::*;
use ui::{adopt_login, use_api, use_auth, use_session};

use super::TextField;

#[component]
pub fn Register() -> Element {
    let auth = use_auth();
    let client = use_api();
    let session = use_session();
    let nav = use_navigator();

    let name = use_signal(String::new);
    let email = use_signal(String::new);
    let country = use_signal(String::new);
    let password = use_signal(String::new);
    let confirm = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut submitting = use_signal(|| false);

    let on_submit = {
        let client = client.clone();
        let session = session.clone();
        move |evt: FormEvent| {
            evt.prevent_default();
            let client = client.clone();
            let session = session.clone();
            async move {
                error.set(None);

                if password() != confirm() {
                    error.set(Some("Passwords do not match.".to_string()));
                    return;
                }
                if password().len() < 8 {
                    error.set(Some("Password must be at least 8 characters.".to_string()));
                    return;
                }

                submitting.set(true);
                let registration = Registration {
                    name: name().trim().to_string(),
                    email: email().trim().to_string(),
                    password: password(),
                    country: country().trim().to_string(),
                };

                let result = async {
                    client.register(&registration).await?;
                    client.login(&registration.email, &registration.password).await
                }
                .await;

                match result {
                    Ok(response) => {
                        adopt_login(auth, &session, &response);
                        nav.replace(VERIFY_ROUTE);
                    }
                    Err(err) => error.set(Some(err.to_string())),
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
                h1 { "Create your account" }
                p { class: "auth-subtitle", "Start accepting payments in minutes" }

                if let Some(message) = error() {
                    div { class: "form-error", "{message}" }
                }

                form {
                    onsubmit: on_submit,
                    TextField { label: "Full name", value: name, required: true }
                    TextField {
                        label: "Email",
                        value: email,
                        input_type: "email",
                        required: true,
                    }
                    TextField { label: "Country", value: country, required: true }
                    TextField {
                        label: "Password",
                        value: password,
                        input_type: "password",
                        required: true,
                    }
                    TextField {
                        label: "Confirm password",
                        value: confirm,
                        input_type: "password",
                        required: true,
                    }
                    button {
                        class: "primary full-width",
                        r#type: "submit",
                        disabled: submitting(),
                        if submitting() { "Creating account..." } else { "Create account" }
                    }
                }

                p {
                    class: "auth-footer",
                    "Already have an account? "
                    Link { to: "/login", "Sign in" }
                }
            }
        }
    }
}
