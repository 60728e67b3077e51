//! # Client configuration
//!
//! Every host the dashboard talks to derives from a single base URL, so no
//! page carries its own host literal. The value is resolved at build time
//! from the `PAYDECK_API_BASE` environment variable and falls back to a
//! local development server.

/// Where the payments API lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

impl ApiConfig {
    /// Resolve from `PAYDECK_API_BASE` at build time.
    pub fn from_env() -> Self {
        Self::new(option_env!("PAYDECK_API_BASE").unwrap_or("http://localhost:8000"))
    }

    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for a server-relative path.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// OAuth entry points. The server drives the whole redirect dance and
    /// lands back on `/auth/callback` with tokens in the query string.
    pub fn google_login_url(&self) -> String {
        self.url("/api/v1/auth/google/login")
    }

    pub fn github_login_url(&self) -> String {
        self.url("/api/v1/auth/github/login")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slashes_are_trimmed() {
        let config = ApiConfig::new("https://api.paydeck.test///");
        assert_eq!(config.base_url(), "https://api.paydeck.test");
        assert_eq!(
            config.url("/api/v1/users/me"),
            "https://api.paydeck.test/api/v1/users/me"
        );
    }

    #[test]
    fn test_oauth_urls_derive_from_base() {
        let config = ApiConfig::new("https://api.paydeck.test");
        assert_eq!(
            config.google_login_url(),
            "https://api.paydeck.test/api/v1/auth/google/login"
        );
        assert_eq!(
            config.github_login_url(),
            "https://api.paydeck.test/api/v1/auth/github/login"
        );
    }
}
