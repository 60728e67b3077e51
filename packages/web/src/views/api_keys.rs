//! API key management: create, rename, roll, revoke. Full key material is
//! shown exactly once, straight from the create/roll response.

use api::models::{ApiKey, NewApiKey};
use dioxus::prelude::*;
use ui::{use_api, Navbar};

use super::{SelectField, TextField};

#[component]
pub fn ApiKeys() -> Element {
    let client = use_api();

    let mut keys = use_signal(Vec::<ApiKey>::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| true);

    // One-time reveal of freshly minted key material.
    let mut revealed = use_signal(|| Option::<String>::None);

    let name = use_signal(String::new);
    let key_type = use_signal(|| "secret".to_string());
    let environment = use_signal(|| "test".to_string());
    let mut creating = use_signal(|| false);

    // Inline rename state.
    let mut renaming_id = use_signal(|| Option::<i64>::None);
    let rename_value = use_signal(String::new);

    let reload = {
        let client = client.clone();
        move || {
            let client = client.clone();
            async move {
                match client.get_api_keys().await {
                    Ok(list) => keys.set(list),
                    Err(err) => error.set(Some(err.to_string())),
                }
                loading.set(false);
            }
        }
    };

    let _ = use_resource({
        let reload = reload.clone();
        move || {
            let reload = reload.clone();
            async move { reload().await }
        }
    });

    let on_create = {
        let client = client.clone();
        let reload = reload.clone();
        move |evt: FormEvent| {
            evt.prevent_default();
            let client = client.clone();
            let reload = reload.clone();
            async move {
                error.set(None);
                if name().trim().is_empty() {
                    error.set(Some("Give the key a name".to_string()));
                    return;
                }
                creating.set(true);
                let new_key = NewApiKey {
                    name: name().trim().to_string(),
                    key_type: key_type(),
                    environment: environment(),
                };
                match client.create_api_key(&new_key).await {
                    Ok(key) => {
                        revealed.set(key.api_key.clone());
                        reload().await;
                    }
                    Err(err) => error.set(Some(err.to_string())),
                }
                creating.set(false);
            }
        }
    };

    rsx! {
        Navbar {}
        div {
            class: "page",
            div {
                class: "page-header",
                h1 { "API keys" }
            }

            if let Some(message) = error() {
                div { class: "form-error", "{message}" }
            }

            if let Some(secret) = revealed() {
                div {
                    class: "card reveal-card",
                    h2 { "Copy your new key now" }
                    p { "This is the only time the full key is shown." }
                    code { class: "mono reveal-key", "{secret}" }
                    button {
                        class: "secondary",
                        onclick: move |_| revealed.set(None),
                        "I have copied it"
                    }
                }
            }

            div {
                class: "card",
                h2 { "Create key" }
                form {
                    class: "inline-form",
                    onsubmit: on_create,
                    TextField { label: "Name", value: name }
                    SelectField {
                        label: "Type",
                        value: key_type,
                        options: vec!["secret".to_string(), "publishable".to_string()],
                    }
                    SelectField {
                        label: "Environment",
                        value: environment,
                        options: vec!["test".to_string(), "live".to_string()],
                    }
                    button {
                        class: "primary",
                        r#type: "submit",
                        disabled: creating(),
                        if creating() { "Creating..." } else { "Create key" }
                    }
                }
            }

            div {
                class: "card",
                h2 { "Your keys" }
                if loading() {
                    p { class: "empty-state", "Loading..." }
                } else if keys().is_empty() {
                    p { class: "empty-state", "No API keys yet." }
                } else {
                    table {
                        class: "data-table",
                        thead {
                            tr {
                                th { "Name" }
                                th { "Prefix" }
                                th { "Type" }
                                th { "Environment" }
                                th { "Status" }
                                th { "Last used" }
                                th { "" }
                            }
                        }
                        tbody {
                            for key in keys() {
                                KeyRow {
                                    key: "{key.id}",
                                    api_key: key,
                                    renaming_id,
                                    rename_value,
                                    on_changed: {
                                        let reload = reload.clone();
                                        move |_| {
                                            let reload = reload.clone();
                                            async move { reload().await }
                                        }
                                    },
                                    on_reveal: move |secret| revealed.set(Some(secret)),
                                    on_error: move |message| error.set(Some(message)),
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn KeyRow(
    api_key: ApiKey,
    renaming_id: Signal<Option<i64>>,
    rename_value: Signal<String>,
    on_changed: EventHandler<()>,
    on_reveal: EventHandler<String>,
    on_error: EventHandler<String>,
) -> Element {
    let client = ui::use_api();
    let mut renaming_id = renaming_id;
    let mut rename_value = rename_value;
    let key_id = api_key.id;
    let key_name = api_key.name.clone();
    let last_used = api_key.last_used_at.clone().unwrap_or_else(|| "never".to_string());

    let on_roll = {
        let client = client.clone();
        move |_| {
            let client = client.clone();
            async move {
                match client.roll_api_key(key_id).await {
                    Ok(rolled) => {
                        if let Some(secret) = rolled.api_key {
                            on_reveal.call(secret);
                        }
                        on_changed.call(());
                    }
                    Err(err) => on_error.call(err.to_string()),
                }
            }
        }
    };

    let on_revoke = {
        let client = client.clone();
        move |_| {
            let client = client.clone();
            async move {
                match client.revoke_api_key(key_id, None).await {
                    Ok(()) => on_changed.call(()),
                    Err(err) => on_error.call(err.to_string()),
                }
            }
        }
    };

    let on_rename = {
        let client = client.clone();
        move |_| {
            let client = client.clone();
            async move {
                let new_name = rename_value().trim().to_string();
                if new_name.is_empty() {
                    renaming_id.set(None);
                    return;
                }
                match client.update_api_key(key_id, &new_name).await {
                    Ok(_) => {
                        renaming_id.set(None);
                        on_changed.call(());
                    }
                    Err(err) => on_error.call(err.to_string()),
                }
            }
        }
    };

    rsx! {
        tr {
            td {
                if renaming_id() == Some(key_id) {
                    input {
                        value: "{rename_value}",
                        oninput: move |evt| rename_value.set(evt.value()),
                    }
                    button { class: "link-button", onclick: on_rename, "Save" }
                } else {
                    "{api_key.name}"
                    button {
                        class: "link-button",
                        onclick: move |_| {
                            rename_value.set(key_name.clone());
                            renaming_id.set(Some(key_id));
                        },
                        "Rename"
                    }
                }
            }
            td { class: "mono", "{api_key.key_prefix}..." }
            td { "{api_key.key_type}" }
            td { "{api_key.environment}" }
            td {
                if api_key.is_active {
                    span { class: "badge badge-succeeded", "active" }
                } else {
                    span { class: "badge badge-failed", "revoked" }
                }
            }
            td { class: "muted", "{last_used}" }
            td {
                if api_key.is_active {
                    button { class: "link-button", onclick: on_roll, "Roll" }
                    button { class: "link-button danger", onclick: on_revoke, "Revoke" }
                }
            }
        }
    }
}
