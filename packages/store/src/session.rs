//! # Session persistence — the key/value contract and its bookkeeping
//!
//! Everything the dashboard remembers between page loads lives under four
//! well-known keys in a [`SessionStore`]:
//!
//! | Key | Value |
//! |-----|-------|
//! | [`ACCESS_TOKEN_KEY`] | Bearer token, or [`COOKIE_SESSION_TOKEN`] for cookie-backed sessions |
//! | [`REFRESH_TOKEN_KEY`] | Opaque refresh token (optional) |
//! | [`USER_KEY`] | JSON-serialized snapshot of the signed-in user |
//! | [`ONBOARDING_SNOOZE_KEY`] | Epoch-ms timestamp until which onboarding prompts stay hidden |
//!
//! The store itself enforces nothing: no validation, no encryption, no
//! expiry. Timestamp comparison for the snooze key happens in
//! [`snooze_active_at`], and every reader must tolerate absent or malformed
//! values by treating the session as empty.

/// Key/value contract for durable session state.
///
/// Implementations live in sibling modules ([`crate::memory`] and, on the
/// web platform, [`crate::local`]).
pub trait SessionStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

pub const ACCESS_TOKEN_KEY: &str = "access_token";
pub const REFRESH_TOKEN_KEY: &str = "refresh_token";
pub const USER_KEY: &str = "user";
pub const ONBOARDING_SNOOZE_KEY: &str = "onboarding_snooze_until";

/// Placeholder persisted under [`ACCESS_TOKEN_KEY`] when a server-set cookie
/// session is accepted without a bearer token of its own.
pub const COOKIE_SESSION_TOKEN: &str = "cookie_auth_user";

/// Remove the three session keys. The onboarding snooze survives on purpose:
/// snoozing is a device preference, not part of the identity.
///
/// Both logout paths (explicit logout and the HTTP client's 401 handler) go
/// through here, so the cleared key set cannot diverge between them.
pub fn clear_session(store: &dyn SessionStore) {
    store.remove(ACCESS_TOKEN_KEY);
    store.remove(REFRESH_TOKEN_KEY);
    store.remove(USER_KEY);
}

/// Read the raw persisted user snapshot, filtering the garbage values other
/// writers have been known to leave behind (`"undefined"`, `"null"`).
pub fn read_raw_user(store: &dyn SessionStore) -> Option<String> {
    match store.get(USER_KEY) {
        Some(raw) if raw != "undefined" && raw != "null" => Some(raw),
        _ => None,
    }
}

/// Whether an onboarding snooze is in effect at `now_ms`.
///
/// A stale or unparseable value is deleted on the spot, so a later check
/// behaves exactly as if no snooze was ever set. An active value is left in
/// place; there is no consumption-on-read.
pub fn snooze_active_at(store: &dyn SessionStore, now_ms: f64) -> bool {
    let Some(raw) = store.get(ONBOARDING_SNOOZE_KEY) else {
        return false;
    };
    match raw.trim().parse::<f64>() {
        Ok(until) if now_ms < until => true,
        _ => {
            store.remove(ONBOARDING_SNOOZE_KEY);
            false
        }
    }
}

/// Hide onboarding prompts for `duration_ms` starting at `now_ms`.
pub fn snooze_for(store: &dyn SessionStore, duration_ms: f64, now_ms: f64) {
    let until = (now_ms + duration_ms) as u64;
    store.set(ONBOARDING_SNOOZE_KEY, &until.to_string());
}

/// Current wall-clock time in epoch milliseconds, platform-aware.
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub fn now_ms() -> f64 {
    js_sys::Date::now()
}

#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
pub fn now_ms() -> f64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as f64)
        .unwrap_or(0.0)
}
