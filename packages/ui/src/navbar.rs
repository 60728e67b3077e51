//! Top navigation bar: section links, the admin entry, and the
//! unread-notification badge.

use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaBell;
use dioxus_free_icons::Icon;

use crate::auth::{sign_out, use_api, use_auth, use_session};

const UNREAD_POLL_SECS: u64 = 60;

#[component]
pub fn Navbar() -> Element {
    let auth = use_auth();
    let client = use_api();
    let session = use_session();
    let nav = use_navigator();
    let mut unread = use_signal(|| 0i64);

    // 60-second unread poll, alive for the lifetime of the navbar. No
    // cancellation on unmount; a late response updating a dead signal is a
    // benign race.
    use_effect(move || {
        let client = client.clone();
        spawn(async move {
            loop {
                match client.get_unread_notifications_count().await {
                    Ok(count) => unread.set(count.unread),
                    Err(err) => {
                        tracing::debug!("unread poll failed: {err}");
                        unread.set(0);
                    }
                }
                crate::sleep_secs(UNREAD_POLL_SECS).await;
            }
        });
    });

    // Hidden entirely for anonymous visitors.
    if auth().token.is_none() {
        return rsx! {};
    }

    let is_admin = session
        .persisted_user()
        .map(|u| u.is_superadmin)
        .unwrap_or(false);
    let session_for_logout = session.clone();

    rsx! {
        nav {
            class: "navbar",
            div {
                class: "navbar-brand",
                Link { to: "/dashboard", "PayDeck" }
            }
            div {
                class: "navbar-links",
                Link { to: "/dashboard", "Dashboard" }
                Link { to: "/analytics", "Analytics" }
                Link { to: "/charges", "Charges" }
                Link { to: "/payouts", "Payouts" }
                Link { to: "/api-keys", "API Keys" }
                Link { to: "/kyc", "KYC" }
                Link { to: "/settings", "Settings" }
                if is_admin {
                    Link { to: "/admin", class: "navbar-admin", "Admin" }
                }
            }
            div {
                class: "navbar-actions",
                Link {
                    to: "/notifications",
                    class: "navbar-bell",
                    Icon { icon: FaBell, width: 16, height: 16 }
                    if unread() > 0 {
                        span { class: "navbar-badge", "{unread()}" }
                    }
                }
                button {
                    class: "navbar-logout",
                    onclick: move |_| {
                        sign_out(auth, &session_for_logout);
                        nav.push("/login");
                    },
                    "Log out"
                }
            }
        }
    }
}
