//! # API crate — REST client and session logic for the PayDeck dashboard
//!
//! Everything the views need to talk to the payments backend and to reason
//! about the current session lives here. The crate is UI-free: it depends on
//! the [`store`] crate's `SessionStore` interface rather than any browser
//! API, so the whole surface is exercised by native tests against an
//! in-memory store.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | [`ApiClient`] — request building, error normalization, the global 401 logout-and-redirect, and one wrapper per backend endpoint |
//! | [`config`] | [`ApiConfig`] — the single base-URL configuration value and the OAuth entry URLs derived from it |
//! | [`error`] | [`ApiError`] and the error-payload message normalization rules |
//! | [`models`] | Wire models, deserialized defensively (`serde` defaults, flexible money fields) |
//! | [`onboarding`] | Pure onboarding classifier and the onboarding-gate evaluation |
//! | [`session`] | [`AuthSession`] — login/logout/initialize over a `SessionStore` |

pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod onboarding;
pub mod session;

pub use client::ApiClient;
pub use config::ApiConfig;
pub use error::ApiError;
pub use models::UserRecord;
pub use session::{AuthSession, SessionSnapshot};
