//! Account settings: password change, settlement schedule, and account
//! deletion.

use api::models::PasswordChange;
use dioxus::prelude::*;
use ui::{sign_out, use_api, use_auth, use_session, Navbar};

use super::{SelectField, TextField};

#[component]
pub fn Settings() -> Element {
    let auth = use_auth();
    let client = use_api();
    let session = use_session();
    let nav = use_navigator();

    let mut error = use_signal(|| Option::<String>::None);
    let mut notice = use_signal(|| Option::<String>::None);

    // Password form
    let old_password = use_signal(String::new);
    let new_password = use_signal(String::new);
    let confirm_password = use_signal(String::new);
    let mut changing = use_signal(|| false);

    // Settlement schedule
    let schedule = use_signal(|| "daily".to_string());
    let mut schedule_loaded = use_signal(|| false);
    let mut saving_schedule = use_signal(|| false);

    // Danger zone
    let mut confirming_delete = use_signal(|| false);
    let mut deleting = use_signal(|| false);

    let _ = use_resource({
        let client = client.clone();
        move || {
            let client = client.clone();
            async move {
                if let Ok(current) = client.get_settlement_schedule().await {
                    let mut schedule = schedule;
                    if !current.schedule.is_empty() {
                        schedule.set(current.schedule);
                    }
                    schedule_loaded.set(true);
                }
            }
        }
    });

    let on_change_password = {
        let client = client.clone();
        move |evt: FormEvent| {
            evt.prevent_default();
            let client = client.clone();
            async move {
                error.set(None);
                notice.set(None);

                if new_password() != confirm_password() {
                    error.set(Some("New passwords do not match.".to_string()));
                    return;
                }

                changing.set(true);
                let change = PasswordChange {
                    old_password: old_password(),
                    password: new_password(),
                    confirm_password: confirm_password(),
                };
                match client.change_password(&change).await {
                    Ok(()) => {
                        notice.set(Some("Password updated.".to_string()));
                        let mut old_password = old_password;
                        let mut new_password = new_password;
                        let mut confirm_password = confirm_password;
                        old_password.set(String::new());
                        new_password.set(String::new());
                        confirm_password.set(String::new());
                    }
                    Err(err) => error.set(Some(err.to_string())),
                }
                changing.set(false);
            }
        }
    };

    let on_save_schedule = {
        let client = client.clone();
        move |evt: FormEvent| {
            evt.prevent_default();
            let client = client.clone();
            async move {
                error.set(None);
                notice.set(None);
                saving_schedule.set(true);
                match client.update_settlement_schedule(&schedule()).await {
                    Ok(_) => notice.set(Some("Settlement schedule updated.".to_string())),
                    Err(err) => error.set(Some(err.to_string())),
                }
                saving_schedule.set(false);
            }
        }
    };

    let on_delete_account = {
        let client = client.clone();
        let session = session.clone();
        move |_| {
            let client = client.clone();
            let session = session.clone();
            async move {
                error.set(None);
                deleting.set(true);
                match client.delete_account().await {
                    Ok(()) => {
                        sign_out(auth, &session);
                        nav.push("/login");
                    }
                    Err(err) => {
                        error.set(Some(err.to_string()));
                        deleting.set(false);
                    }
                }
            }
        }
    };

    rsx! {
        Navbar {}
        div {
            class: "page",
            div {
                class: "page-header",
                h1 { "Settings" }
            }

            if let Some(message) = error() {
                div { class: "form-error", "{message}" }
            }
            if let Some(message) = notice() {
                div { class: "form-notice", "{message}" }
            }

            div {
                class: "card",
                h2 { "Change password" }
                form {
                    onsubmit: on_change_password,
                    TextField {
                        label: "Current password",
                        value: old_password,
                        input_type: "password",
                        required: true,
                    }
                    TextField {
                        label: "New password",
                        value: new_password,
                        input_type: "password",
                        required: true,
                    }
                    TextField {
                        label: "Confirm new password",
                        value: confirm_password,
                        input_type: "password",
                        required: true,
                    }
                    button {
                        class: "primary",
                        r#type: "submit",
                        disabled: changing(),
                        if changing() { "Updating..." } else { "Update password" }
                    }
                }
            }

            div {
                class: "card",
                h2 { "Settlement schedule" }
                if !schedule_loaded() {
                    p { class: "empty-state", "Loading..." }
                }
                form {
                    onsubmit: on_save_schedule,
                    SelectField {
                        label: "Schedule",
                        value: schedule,
                        options: vec![
                            "daily".to_string(),
                            "weekly".to_string(),
                            "monthly".to_string(),
                        ],
                    }
                    button {
                        class: "primary",
                        r#type: "submit",
                        disabled: saving_schedule(),
                        if saving_schedule() { "Saving..." } else { "Save schedule" }
                    }
                }
            }

            div {
                class: "card danger-card",
                h2 { "Danger zone" }
                p { "Deleting your account removes your merchant profile permanently." }
                if confirming_delete() {
                    div {
                        class: "overlay-actions",
                        button {
                            class: "danger-button",
                            disabled: deleting(),
                            onclick: on_delete_account,
                            if deleting() { "Deleting..." } else { "Yes, delete my account" }
                        }
                        button {
                            class: "secondary",
                            onclick: move |_| confirming_delete.set(false),
                            "Keep my account"
                        }
                    }
                } else {
                    button {
                        class: "danger-button",
                        onclick: move |_| confirming_delete.set(true),
                        "Delete account"
                    }
                }
            }
        }
    }
}
