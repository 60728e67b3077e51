//! # REST client for the payments backend
//!
//! One [`ApiClient`] instance is shared by the whole application. It turns
//! `(path, method, body)` into an HTTP request with the persisted bearer
//! token attached, parses 2xx bodies as JSON (204 yields nothing), and
//! normalizes every non-2xx response into an [`ApiError::Status`].
//!
//! ## The 401 side effect
//!
//! A 401 on any path except the login endpoint means the session is dead:
//! the client clears the persisted session keys and invokes the
//! unauthorized hook *before* the error is returned, whether or not the
//! caller ever looks at it. In the browser the hook hard-navigates to the
//! login page (unless it is already showing); tests inject their own hook.
//! The clear goes through the same [`store::clear_session`] as an explicit
//! logout, so the two paths cannot diverge.
//!
//! No retries, no backoff, no timeouts: a hung request hangs the awaiting
//! caller, nothing else.

use std::sync::Arc;

use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{json, Value};
use store::SessionStore;

use crate::config::ApiConfig;
use crate::error::{normalize_error_message, ApiError};
use crate::models::*;
use crate::onboarding::LOGIN_ROUTE;

/// The one path whose 401 responses stay local: a failed login attempt is
/// the caller's problem, not a dead session.
pub const LOGIN_PATH: &str = "/api/v1/auth/login";

/// Request body shapes the backend accepts.
enum Body {
    Json(Value),
    Form(Vec<(&'static str, String)>),
}

#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    config: ApiConfig,
    store: Arc<dyn SessionStore>,
    on_unauthorized: Arc<dyn Fn() + Send + Sync>,
}

/// Default unauthorized hook: hard navigation to the login page, bypassing
/// the router and any component error boundary.
fn hard_redirect_to_login() {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let location = window.location();
            let on_login = location
                .pathname()
                .map(|p| p == LOGIN_ROUTE)
                .unwrap_or(false);
            if !on_login {
                let _ = location.set_href(LOGIN_ROUTE);
            }
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        tracing::warn!("session expired; would redirect to {LOGIN_ROUTE}");
    }
}

impl ApiClient {
    pub fn new(config: ApiConfig, store: Arc<dyn SessionStore>) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
            store,
            on_unauthorized: Arc::new(hard_redirect_to_login),
        }
    }

    /// Replace the unauthorized hook (tests observe navigation this way).
    pub fn with_unauthorized_hook(mut self, hook: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_unauthorized = Arc::new(hook);
        self
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    fn bearer(&self) -> Option<String> {
        self.store.get(store::ACCESS_TOKEN_KEY)
    }

    async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<Body>,
    ) -> Result<Option<Value>, ApiError> {
        let token = self.bearer();
        self.request_full(method, path, token, &[], body).await
    }

    async fn request_full(
        &self,
        method: Method,
        path: &str,
        token: Option<String>,
        query: &[(&str, String)],
        body: Option<Body>,
    ) -> Result<Option<Value>, ApiError> {
        let mut req = self
            .http
            .request(method, self.config.url(path))
            .header(reqwest::header::ACCEPT, "application/json");
        if !query.is_empty() {
            req = req.query(query);
        }
        if let Some(token) = token {
            req = req.bearer_auth(token);
        }
        match body {
            Some(Body::Json(value)) => req = req.json(&value),
            Some(Body::Form(pairs)) => req = req.form(&pairs),
            None => {}
        }
        // Ship server-set cookies alongside the bearer token.
        #[cfg(target_arch = "wasm32")]
        {
            req = req.fetch_credentials_include();
        }

        let res = req
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let status = res.status();
        if !status.is_success() {
            let fallback = status
                .canonical_reason()
                .unwrap_or("request failed")
                .to_string();
            let payload = res.json::<Value>().await.ok();
            return Err(self.fail(path, status.as_u16(), &fallback, payload));
        }
        if status == reqwest::StatusCode::NO_CONTENT {
            return Ok(None);
        }
        res.json::<Value>()
            .await
            .map(Some)
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Turn a non-2xx response into an [`ApiError`], applying the global
    /// 401 side effect first.
    fn fail(&self, path: &str, status: u16, status_text: &str, payload: Option<Value>) -> ApiError {
        if status == 401 && path != LOGIN_PATH {
            tracing::warn!("session rejected by server on {path}, forcing re-login");
            store::clear_session(self.store.as_ref());
            (self.on_unauthorized)();
        }
        let message = normalize_error_message(payload.as_ref(), status_text);
        ApiError::Status {
            status,
            message,
            payload,
        }
    }

    fn decode<T: DeserializeOwned>(&self, value: Option<Value>) -> Result<T, ApiError> {
        serde_json::from_value(value.unwrap_or(Value::Null))
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let value = self.request(Method::GET, path, None).await?;
        self.decode(value)
    }

    async fn get_json_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let token = self.bearer();
        let value = self
            .request_full(Method::GET, path, token, query, None)
            .await?;
        self.decode(value)
    }

    async fn send_json<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: &impl Serialize,
    ) -> Result<T, ApiError> {
        let value = serde_json::to_value(body).map_err(|e| ApiError::Decode(e.to_string()))?;
        let value = self.request(method, path, Some(Body::Json(value))).await?;
        self.decode(value)
    }

    // ---- auth ----

    pub async fn register(&self, registration: &Registration) -> Result<RegisteredUser, ApiError> {
        self.send_json(Method::POST, "/api/v1/auth/register", registration)
            .await
    }

    /// The one form-urlencoded endpoint: credentials go out as
    /// `username`/`password` pairs, not JSON.
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthResponse, ApiError> {
        let form = vec![
            ("username", email.to_string()),
            ("password", password.to_string()),
        ];
        let value = self
            .request(Method::POST, LOGIN_PATH, Some(Body::Form(form)))
            .await?;
        self.decode(value)
    }

    pub async fn verify_user(
        &self,
        profile: &BusinessProfile,
    ) -> Result<VerificationReceipt, ApiError> {
        self.send_json(Method::POST, "/api/v1/auth/verify", profile)
            .await
    }

    // ---- users & account ----

    pub async fn get_current_user(&self) -> Result<UserRecord, ApiError> {
        self.get_json("/api/v1/users/me").await
    }

    /// `users/me` with an explicit token override. The session initializer
    /// uses this to probe cookie-backed sessions with no bearer token at
    /// all.
    pub async fn get_current_user_with(
        &self,
        token: Option<String>,
    ) -> Result<UserRecord, ApiError> {
        let value = self
            .request_full(Method::GET, "/api/v1/users/me", token, &[], None)
            .await?;
        self.decode(value)
    }

    pub async fn refresh_user_data(&self) -> Result<UserRecord, ApiError> {
        self.get_json("/api/v1/users/me/refresh").await
    }

    pub async fn delete_account(&self) -> Result<(), ApiError> {
        self.request(Method::DELETE, "/api/v1/users/me", None)
            .await
            .map(|_| ())
    }

    pub async fn change_password(&self, change: &PasswordChange) -> Result<(), ApiError> {
        self.send_json::<Value>(Method::PUT, "/api/v1/account/change-password", change)
            .await
            .map(|_| ())
    }

    // ---- merchant ----

    pub async fn create_merchant(
        &self,
        account: &NewMerchantAccount,
    ) -> Result<MerchantAccount, ApiError> {
        self.send_json(Method::POST, "/api/v1/merchant/account", account)
            .await
    }

    pub async fn get_merchant(&self) -> Result<MerchantAccount, ApiError> {
        self.get_json("/api/v1/merchant/account").await
    }

    pub async fn get_balance(&self) -> Result<Balance, ApiError> {
        self.get_json("/api/v1/merchant/balance").await
    }

    pub async fn get_limits(&self) -> Result<TransactionLimits, ApiError> {
        self.get_json("/api/v1/merchant/limits").await
    }

    // ---- charges (differently-prefixed resource, preserved verbatim) ----

    pub async fn get_charges(&self) -> Result<Vec<Charge>, ApiError> {
        self.get_json("/v1/charges").await
    }

    pub async fn create_charge(&self, charge: &NewCharge) -> Result<Charge, ApiError> {
        self.send_json(Method::POST, "/v1/charges", charge).await
    }

    // ---- API keys ----

    pub async fn get_api_keys(&self) -> Result<Vec<ApiKey>, ApiError> {
        self.get_json("/api/v1/api-keys").await
    }

    pub async fn create_api_key(&self, key: &NewApiKey) -> Result<ApiKey, ApiError> {
        self.send_json(Method::POST, "/api/v1/api-keys", key).await
    }

    pub async fn update_api_key(&self, key_id: i64, name: &str) -> Result<ApiKey, ApiError> {
        self.send_json(
            Method::PUT,
            &format!("/api/v1/api-keys/{key_id}"),
            &json!({ "name": name }),
        )
        .await
    }

    pub async fn revoke_api_key(&self, key_id: i64, reason: Option<&str>) -> Result<(), ApiError> {
        let body = json!({ "reason": reason.unwrap_or("Revoked via dashboard") });
        self.request(
            Method::DELETE,
            &format!("/api/v1/api-keys/{key_id}"),
            Some(Body::Json(body)),
        )
        .await
        .map(|_| ())
    }

    pub async fn roll_api_key(&self, key_id: i64) -> Result<ApiKey, ApiError> {
        let value = self
            .request(
                Method::POST,
                &format!("/api/v1/api-keys/{key_id}/roll"),
                None,
            )
            .await?;
        self.decode(value)
    }

    // ---- KYC ----

    pub async fn submit_kyc_for_review(&self) -> Result<KycStatus, ApiError> {
        let value = self.request(Method::POST, "/api/v1/kyc/submit", None).await?;
        self.decode(value)
    }

    pub async fn get_kyc_status(&self) -> Result<KycStatus, ApiError> {
        self.get_json("/api/v1/kyc/status").await
    }

    pub async fn get_kyc_documents(&self) -> Result<Vec<KycDocument>, ApiError> {
        self.get_json("/api/v1/kyc/documents").await
    }

    pub async fn delete_kyc_document(&self, document_id: i64) -> Result<(), ApiError> {
        self.request(
            Method::DELETE,
            &format!("/api/v1/kyc/documents/{document_id}"),
            None,
        )
        .await
        .map(|_| ())
    }

    pub async fn submit_kyc_business(
        &self,
        profile: &BusinessProfile,
    ) -> Result<BusinessProfile, ApiError> {
        self.send_json(Method::POST, "/api/v1/kyc/business", profile)
            .await
    }

    pub async fn get_kyc_business(&self) -> Result<BusinessProfile, ApiError> {
        self.get_json("/api/v1/kyc/business").await
    }

    pub async fn submit_kyc_identity(
        &self,
        identity: &IdentityProfile,
    ) -> Result<IdentityProfile, ApiError> {
        self.send_json(Method::POST, "/api/v1/kyc/identity", identity)
            .await
    }

    pub async fn get_kyc_identity(&self) -> Result<IdentityProfile, ApiError> {
        self.get_json("/api/v1/kyc/identity").await
    }

    // ---- payout accounts ----

    pub async fn get_payout_accounts(&self) -> Result<Vec<PayoutAccount>, ApiError> {
        self.get_json("/api/v1/payout-accounts").await
    }

    pub async fn create_payout_account(
        &self,
        account: &NewPayoutAccount,
    ) -> Result<PayoutAccount, ApiError> {
        self.send_json(Method::POST, "/api/v1/payout-accounts", account)
            .await
    }

    pub async fn get_payout_account(&self, account_id: i64) -> Result<PayoutAccount, ApiError> {
        self.get_json(&format!("/api/v1/payout-accounts/{account_id}"))
            .await
    }

    pub async fn update_payout_account(
        &self,
        account_id: i64,
        update: &PayoutAccountUpdate,
    ) -> Result<PayoutAccount, ApiError> {
        self.send_json(
            Method::PUT,
            &format!("/api/v1/payout-accounts/{account_id}"),
            update,
        )
        .await
    }

    pub async fn delete_payout_account(&self, account_id: i64) -> Result<(), ApiError> {
        self.request(
            Method::DELETE,
            &format!("/api/v1/payout-accounts/{account_id}"),
            None,
        )
        .await
        .map(|_| ())
    }

    // ---- payouts ----

    pub async fn get_payouts(&self) -> Result<Vec<Payout>, ApiError> {
        self.get_json("/api/v1/payouts").await
    }

    pub async fn create_payout(&self, payout: &NewPayout) -> Result<Payout, ApiError> {
        self.send_json(Method::POST, "/api/v1/payouts", payout).await
    }

    pub async fn get_payout(&self, payout_id: i64) -> Result<Payout, ApiError> {
        self.get_json(&format!("/api/v1/payouts/{payout_id}")).await
    }

    pub async fn cancel_payout(&self, payout_id: i64) -> Result<Payout, ApiError> {
        let value = self
            .request(
                Method::PUT,
                &format!("/api/v1/payouts/{payout_id}/cancel"),
                None,
            )
            .await?;
        self.decode(value)
    }

    pub async fn process_payout_manual(&self, payout_id: i64) -> Result<Payout, ApiError> {
        let value = self
            .request(
                Method::POST,
                &format!("/api/v1/payouts/{payout_id}/process"),
                None,
            )
            .await?;
        self.decode(value)
    }

    // ---- notifications ----

    pub async fn get_notifications(
        &self,
        skip: u32,
        limit: u32,
    ) -> Result<Vec<Notification>, ApiError> {
        self.get_json_query(
            "/api/v1/notifications",
            &[("skip", skip.to_string()), ("limit", limit.to_string())],
        )
        .await
    }

    pub async fn get_unread_notifications_count(&self) -> Result<UnreadCount, ApiError> {
        self.get_json("/api/v1/notifications/unread_count").await
    }

    pub async fn mark_notification_read(&self, notification_id: i64) -> Result<(), ApiError> {
        self.request(
            Method::PUT,
            &format!("/api/v1/notifications/{notification_id}/read"),
            None,
        )
        .await
        .map(|_| ())
    }

    pub async fn mark_all_notifications_read(&self) -> Result<(), ApiError> {
        self.request(Method::PUT, "/api/v1/notifications/read_all", None)
            .await
            .map(|_| ())
    }

    // ---- settlements ----

    pub async fn get_settlement_schedule(&self) -> Result<SettlementSchedule, ApiError> {
        self.get_json("/api/v1/settlements/schedule").await
    }

    pub async fn update_settlement_schedule(
        &self,
        schedule: &str,
    ) -> Result<SettlementSchedule, ApiError> {
        self.send_json(
            Method::PUT,
            "/api/v1/settlements/schedule",
            &json!({ "schedule": schedule }),
        )
        .await
    }

    // ---- admin ----

    pub async fn admin_list_payouts(&self, status: Option<&str>) -> Result<Vec<Payout>, ApiError> {
        let mut query = Vec::new();
        if let Some(status) = status {
            query.push(("status", status.to_string()));
        }
        self.get_json_query("/api/v1/admin/payouts", &query).await
    }

    pub async fn admin_get_merchants(
        &self,
        skip: u32,
        limit: u32,
        search: Option<&str>,
    ) -> Result<MerchantPage, ApiError> {
        let mut query = vec![("skip", skip.to_string()), ("limit", limit.to_string())];
        if let Some(search) = search.filter(|s| !s.is_empty()) {
            query.push(("search", search.to_string()));
        }
        self.get_json_query("/api/v1/admin/merchants", &query).await
    }

    pub async fn admin_get_merchant_details(
        &self,
        merchant_id: &str,
    ) -> Result<MerchantDetail, ApiError> {
        self.get_json(&format!("/api/v1/admin/merchants/{merchant_id}"))
            .await
    }

    pub async fn admin_update_merchant_status(
        &self,
        merchant_id: &str,
        status: &str,
    ) -> Result<(), ApiError> {
        self.send_json::<Value>(
            Method::PUT,
            &format!("/api/v1/admin/merchants/{merchant_id}/status"),
            &json!({ "status": status }),
        )
        .await
        .map(|_| ())
    }

    pub async fn admin_update_risk_assessment(
        &self,
        merchant_id: &str,
        risk: &RiskUpdate,
    ) -> Result<(), ApiError> {
        self.send_json::<Value>(
            Method::PUT,
            &format!("/api/v1/admin/merchants/{merchant_id}/risk"),
            risk,
        )
        .await
        .map(|_| ())
    }

    pub async fn admin_approve_kyc(&self, user_id: i64) -> Result<(), ApiError> {
        self.request(
            Method::POST,
            &format!("/api/v1/admin/kyc/{user_id}/approve"),
            None,
        )
        .await
        .map(|_| ())
    }

    pub async fn admin_reject_kyc(&self, user_id: i64, reason: &str) -> Result<(), ApiError> {
        self.send_json::<Value>(
            Method::POST,
            &format!("/api/v1/admin/kyc/{user_id}/reject"),
            &json!({ "rejection_reason": reason }),
        )
        .await
        .map(|_| ())
    }

    pub async fn admin_get_transactions(
        &self,
        skip: u32,
        limit: u32,
        merchant_id: Option<&str>,
    ) -> Result<TransactionPage, ApiError> {
        let mut query = vec![("skip", skip.to_string()), ("limit", limit.to_string())];
        if let Some(merchant_id) = merchant_id.filter(|m| !m.is_empty()) {
            query.push(("merchant_id", merchant_id.to_string()));
        }
        self.get_json_query("/api/v1/admin/transactions", &query)
            .await
    }

    pub async fn admin_get_audit_logs(
        &self,
        skip: u32,
        limit: u32,
        user_id: Option<i64>,
        action: Option<&str>,
    ) -> Result<AuditLogPage, ApiError> {
        let mut query = vec![("skip", skip.to_string()), ("limit", limit.to_string())];
        if let Some(user_id) = user_id {
            query.push(("user_id", user_id.to_string()));
        }
        if let Some(action) = action.filter(|a| !a.is_empty()) {
            query.push(("action", action.to_string()));
        }
        self.get_json_query("/api/v1/admin/audit-logs", &query).await
    }

    pub async fn admin_promote_user(&self, user_id: i64) -> Result<(), ApiError> {
        self.request(
            Method::POST,
            &format!("/api/v1/admin/users/{user_id}/promote"),
            None,
        )
        .await
        .map(|_| ())
    }

    pub async fn admin_sync_balances(&self, merchant_id: &str) -> Result<(), ApiError> {
        self.request(
            Method::POST,
            &format!("/api/v1/admin/merchants/{merchant_id}/sync-balances"),
            None,
        )
        .await
        .map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use store::{MemoryStore, ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY, USER_KEY};

    fn seeded_store() -> MemoryStore {
        let store = MemoryStore::new();
        store.set(ACCESS_TOKEN_KEY, "t1");
        store.set(REFRESH_TOKEN_KEY, "r1");
        store.set(USER_KEY, "{\"id\":1}");
        store
    }

    fn client_over(store: MemoryStore, hits: Arc<AtomicUsize>) -> ApiClient {
        ApiClient::new(ApiConfig::new("http://localhost:8000"), Arc::new(store))
            .with_unauthorized_hook(move || {
                hits.fetch_add(1, Ordering::SeqCst);
            })
    }

    #[test]
    fn test_401_outside_login_clears_session_and_navigates() {
        let store = seeded_store();
        let hits = Arc::new(AtomicUsize::new(0));
        let client = client_over(store.clone(), hits.clone());

        // The error is produced but never inspected by the caller.
        let _ = client.fail("/api/v1/merchant/balance", 401, "Unauthorized", None);

        assert!(store.get(ACCESS_TOKEN_KEY).is_none());
        assert!(store.get(REFRESH_TOKEN_KEY).is_none());
        assert!(store.get(USER_KEY).is_none());
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_401_on_login_path_stays_local() {
        let store = seeded_store();
        let hits = Arc::new(AtomicUsize::new(0));
        let client = client_over(store.clone(), hits.clone());

        let err = client.fail(LOGIN_PATH, 401, "Unauthorized", None);

        assert_eq!(err.status(), Some(401));
        assert!(store.get(ACCESS_TOKEN_KEY).is_some());
        assert_eq!(hits.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_non_401_errors_have_no_side_effects() {
        let store = seeded_store();
        let hits = Arc::new(AtomicUsize::new(0));
        let client = client_over(store.clone(), hits.clone());

        let err = client.fail("/v1/charges", 500, "Internal Server Error", None);

        assert_eq!(err.status(), Some(500));
        assert!(store.get(ACCESS_TOKEN_KEY).is_some());
        assert_eq!(hits.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_error_message_normalization_flows_through() {
        let store = seeded_store();
        let hits = Arc::new(AtomicUsize::new(0));
        let client = client_over(store, hits);

        let err = client.fail(
            "/v1/charges",
            422,
            "Unprocessable Entity",
            Some(serde_json::json!({ "detail": [{ "msg": "a" }, { "msg": "b" }] })),
        );

        assert_eq!(err.to_string(), "a, b");
    }

    #[test]
    fn test_repeated_401s_converge_on_the_same_state() {
        let store = seeded_store();
        let hits = Arc::new(AtomicUsize::new(0));
        let client = client_over(store.clone(), hits.clone());

        let _ = client.fail("/api/v1/users/me", 401, "Unauthorized", None);
        let _ = client.fail("/api/v1/merchant/balance", 401, "Unauthorized", None);

        assert!(store.get(ACCESS_TOKEN_KEY).is_none());
        assert_eq!(hits.load(Ordering::SeqCst), 2);
    }
}
