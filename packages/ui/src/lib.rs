//! This crate contains all shared UI for the workspace.

mod auth;
pub use auth::{adopt_login, sign_out, use_api, use_auth, use_session, AuthProvider, AuthState};

mod guards;
pub use guards::{OnboardingGuard, ProtectedRoute};

mod navbar;
pub use navbar::Navbar;

mod spinner;
pub use spinner::FullPageSpinner;

pub mod charts;

mod platform;
pub use platform::{session_store, sleep_secs};

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}
