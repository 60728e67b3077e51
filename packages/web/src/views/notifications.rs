//! Notification inbox.

use api::models::Notification;
use dioxus::prelude::*;
use ui::{use_api, Navbar};

const PAGE_SIZE: u32 = 50;

#[component]
pub fn Notifications() -> Element {
    let client = use_api();

    let mut notifications = use_signal(Vec::<Notification>::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| true);

    let reload = {
        let client = client.clone();
        move || {
            let client = client.clone();
            async move {
                match client.get_notifications(0, PAGE_SIZE).await {
                    Ok(list) => notifications.set(list),
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

    let on_mark_all = {
        let client = client.clone();
        let reload = reload.clone();
        move |_| {
            let client = client.clone();
            let reload = reload.clone();
            async move {
                match client.mark_all_notifications_read().await {
                    Ok(()) => reload().await,
                    Err(err) => error.set(Some(err.to_string())),
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
                h1 { "Notifications" }
                button { class: "secondary", onclick: on_mark_all, "Mark all read" }
            }

            if let Some(message) = error() {
                div { class: "form-error", "{message}" }
            }

            div {
                class: "card",
                if loading() {
                    p { class: "empty-state", "Loading..." }
                } else if notifications().is_empty() {
                    p { class: "empty-state", "You're all caught up." }
                } else {
                    ul {
                        class: "notification-list",
                        for notification in notifications() {
                            NotificationRow {
                                key: "{notification.id}",
                                notification,
                                on_changed: {
                                    let reload = reload.clone();
                                    move |_| {
                                        let reload = reload.clone();
                                        async move { reload().await }
                                    }
                                },
                                on_error: move |message| error.set(Some(message)),
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn NotificationRow(
    notification: Notification,
    on_changed: EventHandler<()>,
    on_error: EventHandler<String>,
) -> Element {
    let client = ui::use_api();
    let notification_id = notification.id;
    let row_class = if notification.is_read {
        "notification read"
    } else {
        "notification unread"
    };

    let on_mark_read = move |_| {
        let client = client.clone();
        async move {
            match client.mark_notification_read(notification_id).await {
                Ok(()) => on_changed.call(()),
                Err(err) => on_error.call(err.to_string()),
            }
        }
    };

    rsx! {
        li {
            class: "{row_class}",
            div {
                class: "notification-body",
                span { class: "notification-type", "{notification.kind}" }
                p { "{notification.message}" }
                span { class: "muted", "{notification.created_at}" }
            }
            if !notification.is_read {
                button { class: "link-button", onclick: on_mark_read, "Mark read" }
            }
        }
    }
}
