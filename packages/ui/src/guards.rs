//! Route guards composed around page subtrees.
//!
//! Two independent gates: [`ProtectedRoute`] blocks unauthenticated access,
//! [`OnboardingGuard`] pushes partially-onboarded users to their next
//! onboarding step. Both are thin shells; the decisions live in
//! [`api::onboarding`] where they are tested natively.

use dioxus::prelude::*;

use api::onboarding::{evaluate_onboarding_gate, GateDecision, LOGIN_ROUTE};

use crate::auth::{use_auth, use_session};
use crate::spinner::FullPageSpinner;

/// Best-effort capture of the originally requested location, for a
/// post-login return.
fn requested_location() -> Option<String> {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()?.location().pathname().ok()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        None
    }
}

/// Blocks unauthenticated access.
///
/// While the session is resolving, a spinner; once resolved, either the
/// child subtree or a replace-navigation to the login page.
#[component]
pub fn ProtectedRoute(children: Element) -> Element {
    let auth = use_auth();
    let nav = use_navigator();

    let state = auth();
    if state.loading {
        return rsx! {
            FullPageSpinner {}
        };
    }

    if state.token.is_none() {
        let target = match requested_location() {
            Some(from) if from != LOGIN_ROUTE => format!("{LOGIN_ROUTE}?from={from}"),
            _ => LOGIN_ROUTE.to_string(),
        };
        nav.replace(target);
        return rsx! {};
    }

    rsx! {
        {children}
    }
}

/// Redirects partially-onboarded users to the right onboarding step.
///
/// Evaluated once per mount against the *persisted* user, not the live
/// session signal; a session change after mount does not re-run the gate.
#[component]
pub fn OnboardingGuard(children: Element) -> Element {
    let nav = use_navigator();
    let session = use_session();

    use_effect(move || {
        match evaluate_onboarding_gate(session.store().as_ref(), store::now_ms()) {
            GateDecision::Allow => {}
            GateDecision::Redirect(path) => {
                tracing::debug!("onboarding gate redirecting to {path}");
                nav.push(path);
            }
        }
    });

    rsx! {
        {children}
    }
}
