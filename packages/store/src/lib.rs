pub mod session;

mod memory;
pub use memory::MemoryStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local::LocalStore;

pub use session::{
    clear_session, now_ms, read_raw_user, snooze_active_at, snooze_for, SessionStore,
    ACCESS_TOKEN_KEY, COOKIE_SESSION_TOKEN, ONBOARDING_SNOOZE_KEY, REFRESH_TOKEN_KEY, USER_KEY,
};
