//! # Onboarding routing decisions
//!
//! Pure functions mapping persisted session state to a navigation decision.
//! The route guard component is a thin shell around
//! [`evaluate_onboarding_gate`]; everything that can go wrong is decided
//! here, natively testable against an in-memory store.

use store::SessionStore;

use crate::models::UserRecord;

pub const LOGIN_ROUTE: &str = "/login";
pub const DASHBOARD_ROUTE: &str = "/dashboard";
pub const ADMIN_ROUTE: &str = "/admin";
pub const VERIFY_ROUTE: &str = "/onboarding/verify";
pub const MERCHANT_ROUTE: &str = "/onboarding/merchant";

/// Where a user stands in the onboarding funnel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OnboardingDecision {
    Complete,
    Redirect(&'static str),
}

/// Map an onboarding stage to a routing decision.
///
/// Deliberately lenient: any stage other than the two explicit funnel steps
/// (including `active`, absent, or values this client has never heard of)
/// counts as fully onboarded.
pub fn classify(user: &UserRecord) -> OnboardingDecision {
    match user.onboarding_stage.as_deref() {
        Some("account_created") => OnboardingDecision::Redirect(VERIFY_ROUTE),
        Some("verified") => OnboardingDecision::Redirect(MERCHANT_ROUTE),
        _ => OnboardingDecision::Complete,
    }
}

/// Outcome of the onboarding gate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateDecision {
    Allow,
    Redirect(&'static str),
}

/// Evaluate the onboarding gate against persisted state at `now_ms`.
///
/// Reads the persisted user directly (not any in-memory session) so a
/// snapshot written moments ago by a login flow is honored on the very next
/// navigation. Order matters: missing or unparseable user sends the visitor
/// back to login, admins bypass everything, an active snooze suppresses the
/// funnel (and is left in place), a stale snooze is deleted before the
/// stage check runs.
pub fn evaluate_onboarding_gate(store: &dyn SessionStore, now_ms: f64) -> GateDecision {
    let Some(raw) = store::read_raw_user(store) else {
        return GateDecision::Redirect(LOGIN_ROUTE);
    };
    let Ok(user) = serde_json::from_str::<UserRecord>(&raw) else {
        return GateDecision::Redirect(LOGIN_ROUTE);
    };

    if user.is_superadmin {
        return GateDecision::Allow;
    }

    if store::snooze_active_at(store, now_ms) {
        return GateDecision::Allow;
    }

    match classify(&user) {
        OnboardingDecision::Complete => GateDecision::Allow,
        OnboardingDecision::Redirect(path) => GateDecision::Redirect(path),
    }
}

/// Landing route after a successful login or SSO callback.
pub fn post_login_route(user: &UserRecord) -> &'static str {
    if user.is_superadmin {
        return ADMIN_ROUTE;
    }
    match classify(user) {
        OnboardingDecision::Redirect(path) => path,
        OnboardingDecision::Complete => DASHBOARD_ROUTE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use store::{MemoryStore, SessionStore, ONBOARDING_SNOOZE_KEY, USER_KEY};

    fn user_with_stage(stage: Option<&str>) -> UserRecord {
        UserRecord {
            onboarding_stage: stage.map(str::to_string),
            ..UserRecord::default()
        }
    }

    fn persist_user(store: &MemoryStore, user: &UserRecord) {
        store.set(USER_KEY, &serde_json::to_string(user).unwrap());
    }

    #[test]
    fn test_classifier_funnel_steps() {
        assert_eq!(
            classify(&user_with_stage(Some("account_created"))),
            OnboardingDecision::Redirect(VERIFY_ROUTE)
        );
        assert_eq!(
            classify(&user_with_stage(Some("verified"))),
            OnboardingDecision::Redirect(MERCHANT_ROUTE)
        );
    }

    #[test]
    fn test_classifier_is_total_and_lenient() {
        for stage in [None, Some(""), Some("active"), Some("unknown_future_value")] {
            assert_eq!(
                classify(&user_with_stage(stage)),
                OnboardingDecision::Complete,
                "stage {stage:?} should classify as complete"
            );
        }
    }

    #[test]
    fn test_gate_without_user_redirects_to_login() {
        let store = MemoryStore::new();
        assert_eq!(
            evaluate_onboarding_gate(&store, 0.0),
            GateDecision::Redirect(LOGIN_ROUTE)
        );

        store.set(USER_KEY, "undefined");
        assert_eq!(
            evaluate_onboarding_gate(&store, 0.0),
            GateDecision::Redirect(LOGIN_ROUTE)
        );

        store.set(USER_KEY, "{not json");
        assert_eq!(
            evaluate_onboarding_gate(&store, 0.0),
            GateDecision::Redirect(LOGIN_ROUTE)
        );
    }

    #[test]
    fn test_superadmin_bypasses_onboarding() {
        let store = MemoryStore::new();
        let user = UserRecord {
            is_superadmin: true,
            onboarding_stage: Some("account_created".to_string()),
            ..UserRecord::default()
        };
        persist_user(&store, &user);
        assert_eq!(evaluate_onboarding_gate(&store, 0.0), GateDecision::Allow);
    }

    #[test]
    fn test_active_snooze_allows_and_is_not_consumed() {
        let store = MemoryStore::new();
        persist_user(&store, &user_with_stage(Some("account_created")));
        store.set(ONBOARDING_SNOOZE_KEY, "5000");

        assert_eq!(evaluate_onboarding_gate(&store, 1000.0), GateDecision::Allow);
        assert_eq!(store.get(ONBOARDING_SNOOZE_KEY).as_deref(), Some("5000"));
    }

    #[test]
    fn test_stale_snooze_is_removed_and_evaluation_proceeds() {
        let store = MemoryStore::new();
        persist_user(&store, &user_with_stage(Some("account_created")));
        store.set(ONBOARDING_SNOOZE_KEY, "5000");

        // Past the snooze: the stage check runs and the stale key is gone.
        assert_eq!(
            evaluate_onboarding_gate(&store, 6000.0),
            GateDecision::Redirect(VERIFY_ROUTE)
        );
        assert!(store.get(ONBOARDING_SNOOZE_KEY).is_none());

        // Identical to a store where no snooze was ever set.
        assert_eq!(
            evaluate_onboarding_gate(&store, 6000.0),
            GateDecision::Redirect(VERIFY_ROUTE)
        );
    }

    #[test]
    fn test_completed_onboarding_allows() {
        let store = MemoryStore::new();
        persist_user(&store, &user_with_stage(Some("active")));
        assert_eq!(evaluate_onboarding_gate(&store, 0.0), GateDecision::Allow);
    }

    #[test]
    fn test_post_login_routing() {
        let admin = UserRecord {
            is_superadmin: true,
            onboarding_stage: Some("account_created".to_string()),
            ..UserRecord::default()
        };
        assert_eq!(post_login_route(&admin), ADMIN_ROUTE);
        assert_eq!(
            post_login_route(&user_with_stage(Some("account_created"))),
            VERIFY_ROUTE
        );
        assert_eq!(
            post_login_route(&user_with_stage(Some("verified"))),
            MERCHANT_ROUTE
        );
        assert_eq!(post_login_route(&user_with_stage(None)), DASHBOARD_ROUTE);
    }
}
