//! Wire models for the payments backend.
//!
//! Everything deserializes defensively: response-only fields default when
//! absent, and unknown fields are ignored, so a server rollout that adds or
//! drops a field never breaks the dashboard. Monetary amounts arrive as
//! either JSON numbers or decimal strings depending on the endpoint; the
//! flexible deserializers below fold both into `f64` for display math only
//! (amounts sent back to the server travel as strings).

use serde::{Deserialize, Deserializer, Serialize};

fn de_money<'de, D>(de: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Num(f64),
        Str(String),
        Null,
    }
    Ok(match Raw::deserialize(de)? {
        Raw::Num(n) => n,
        Raw::Str(s) => s.trim().parse().unwrap_or(0.0),
        Raw::Null => 0.0,
    })
}

fn de_money_opt<'de, D>(de: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Num(f64),
        Str(String),
        Null,
    }
    Ok(match Raw::deserialize(de)? {
        Raw::Num(n) => Some(n),
        Raw::Str(s) => s.trim().parse().ok(),
        Raw::Null => None,
    })
}

/// Server-supplied identity/profile snapshot.
///
/// Replaced wholesale on every successful `users/me` call or login; the
/// persisted copy under the `user` storage key is this struct serialized to
/// JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct UserRecord {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub is_superadmin: bool,
    #[serde(default)]
    pub is_verified: bool,
    #[serde(default)]
    pub has_merchant_account: bool,
    #[serde(default)]
    pub onboarding_stage: Option<String>,
    #[serde(default)]
    pub verification_status: Option<String>,
    #[serde(default)]
    pub merchant_info: Option<MerchantInfo>,
}

impl UserRecord {
    /// Canonical verification check. Precedence: the merchant record's
    /// verification status, then the top-level status, then an `active`
    /// onboarding stage. Every call site goes through here.
    pub fn verification_complete(&self) -> bool {
        if let Some(info) = &self.merchant_info {
            if info.verification_status.as_deref() == Some("verified") {
                return true;
            }
        }
        self.verification_status.as_deref() == Some("verified")
            || self.onboarding_stage.as_deref() == Some("active")
    }

    /// Whether a merchant account exists server-side.
    pub fn merchant_present(&self) -> bool {
        self.merchant_info.is_some()
            || self.has_merchant_account
            || self.onboarding_stage.as_deref() == Some("active")
    }

    /// Name to greet the user with: their name, the mailbox part of their
    /// email, or a generic fallback.
    pub fn display_name(&self) -> String {
        if let Some(name) = self.name.as_deref().filter(|n| !n.is_empty()) {
            return name.to_string();
        }
        if let Some(email) = self.email.as_deref() {
            if let Some(mailbox) = email.split('@').next().filter(|m| !m.is_empty()) {
                return mailbox.to_string();
            }
        }
        "there".to_string()
    }
}

/// Merchant account summary embedded in the user snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct MerchantInfo {
    #[serde(default)]
    pub merchant_id: Option<String>,
    #[serde(default)]
    pub account_status: Option<String>,
    #[serde(default)]
    pub verification_status: Option<String>,
    #[serde(default)]
    pub kyc_status: Option<String>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub settlement_schedule: Option<String>,
    #[serde(default)]
    pub risk_level: Option<String>,
}

/// Shape of a successful login/register response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthResponse {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub token_type: Option<String>,
    pub user: UserRecord,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub password: String,
    pub country: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PasswordChange {
    pub old_password: String,
    pub password: String,
    pub confirm_password: String,
}

/// Business verification form, submitted during onboarding and editable
/// again from the KYC page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct BusinessProfile {
    pub business_name: String,
    pub industry: String,
    pub staff_size: u32,
    pub business_type: String,
    pub location: String,
    pub phone_number: String,
    #[serde(default)]
    pub business_email: Option<String>,
    #[serde(default)]
    pub business_website: Option<String>,
    #[serde(default)]
    pub business_description: Option<String>,
    #[serde(default)]
    pub support_email: Option<String>,
    #[serde(default)]
    pub support_phone: Option<String>,
    pub bank_account_name: String,
    pub bank_account_number: String,
    #[serde(default)]
    pub bank_name: Option<String>,
    #[serde(default)]
    pub bank_code: Option<String>,
    #[serde(default)]
    pub tax_id: Option<String>,
    #[serde(default)]
    pub verification_status: Option<String>,
}

/// Identity verification form (KYC).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct IdentityProfile {
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: String,
    pub id_number: String,
    pub id_type: String,
    pub id_country: String,
    pub address_line1: String,
    #[serde(default)]
    pub address_line2: Option<String>,
    pub city: String,
    pub state_province: String,
    pub postal_code: String,
    pub country: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewMerchantAccount {
    pub currency: String,
    pub settlement_schedule: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
pub struct MerchantAccount {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub user_id: i64,
    #[serde(default)]
    pub merchant_id: String,
    #[serde(default)]
    pub account_status: String,
    #[serde(default)]
    pub verification_status: String,
    #[serde(default)]
    pub kyc_status: String,
    #[serde(default)]
    pub currency: String,
    #[serde(default)]
    pub settlement_schedule: String,
    #[serde(default)]
    pub risk_level: String,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
pub struct Balance {
    #[serde(default, deserialize_with = "de_money")]
    pub available_balance: f64,
    #[serde(default, deserialize_with = "de_money")]
    pub pending_balance: f64,
    #[serde(default, deserialize_with = "de_money")]
    pub reserved_balance: f64,
    #[serde(default)]
    pub currency: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
pub struct TransactionLimits {
    #[serde(default, deserialize_with = "de_money_opt")]
    pub daily_transaction_limit: Option<f64>,
    #[serde(default, deserialize_with = "de_money_opt")]
    pub monthly_transaction_limit: Option<f64>,
    #[serde(default, deserialize_with = "de_money_opt")]
    pub single_transaction_limit: Option<f64>,
    #[serde(default)]
    pub daily_transaction_count: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
pub struct Charge {
    #[serde(default)]
    pub id: String,
    #[serde(default, deserialize_with = "de_money")]
    pub amount: f64,
    #[serde(default)]
    pub currency: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub created_at: String,
}

/// Charge creation payload. `amount` is a pre-formatted decimal string so
/// the server never sees float artifacts.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewCharge {
    pub amount: String,
    pub currency: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub idempotency_key: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
pub struct ApiKey {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub merchant_id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub key_type: String,
    #[serde(default)]
    pub environment: String,
    #[serde(default)]
    pub key_prefix: String,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub last_used_at: Option<String>,
    /// Full key material; only present in create/roll responses and never
    /// retrievable again.
    #[serde(default)]
    pub api_key: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewApiKey {
    pub name: String,
    pub key_type: String,
    pub environment: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
pub struct PayoutAccount {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub merchant_id: String,
    #[serde(default)]
    pub account_holder_name: String,
    #[serde(default)]
    pub account_number_last4: String,
    #[serde(default)]
    pub routing_number: String,
    #[serde(default)]
    pub bank_name: String,
    #[serde(default)]
    pub bank_country: String,
    #[serde(default)]
    pub currency: String,
    #[serde(default)]
    pub account_type: String,
    #[serde(default)]
    pub is_primary: bool,
    #[serde(default)]
    pub is_verified: bool,
    #[serde(default)]
    pub verification_status: String,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub verified_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewPayoutAccount {
    pub account_holder_name: String,
    pub account_number: String,
    pub routing_number: String,
    pub bank_name: String,
    pub bank_country: String,
    pub currency: String,
    pub account_type: String,
    pub is_primary: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct PayoutAccountUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_holder_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_primary: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
pub struct Payout {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub merchant_id: String,
    #[serde(default)]
    pub payout_account_id: i64,
    #[serde(default, deserialize_with = "de_money")]
    pub amount: f64,
    #[serde(default)]
    pub currency: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub failure_reason: Option<String>,
    #[serde(default)]
    pub processed_at: Option<String>,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewPayout {
    pub payout_account_id: i64,
    pub amount: String,
    pub currency: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
pub struct Notification {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub merchant_id: Option<String>,
    #[serde(default)]
    pub user_id: Option<i64>,
    #[serde(default, rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub data: Option<String>,
    #[serde(default)]
    pub is_read: bool,
    #[serde(default)]
    pub created_at: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
pub struct UnreadCount {
    #[serde(default)]
    pub unread: i64,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
pub struct KycStatus {
    #[serde(default)]
    pub user_id: i64,
    #[serde(default)]
    pub kyc_status: String,
    #[serde(default)]
    pub submitted_at: Option<String>,
    #[serde(default)]
    pub verified_at: Option<String>,
    #[serde(default)]
    pub rejection_reason: Option<String>,
    #[serde(default)]
    pub required_actions: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
pub struct KycDocument {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub user_id: i64,
    #[serde(default)]
    pub document_type: String,
    #[serde(default)]
    pub file_url: String,
    #[serde(default)]
    pub file_name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub rejection_reason: Option<String>,
    #[serde(default)]
    pub uploaded_at: String,
    #[serde(default)]
    pub reviewed_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
pub struct SettlementSchedule {
    #[serde(default)]
    pub merchant_id: String,
    #[serde(default)]
    pub schedule: String,
    #[serde(default)]
    pub delay_days: Option<i64>,
    #[serde(default, deserialize_with = "de_money_opt")]
    pub minimum_payout_amount: Option<f64>,
    #[serde(default)]
    pub next_settlement_date: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
pub struct AdminUser {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub is_superadmin: bool,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
pub struct AdminMerchant {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub merchant_id: String,
    #[serde(default)]
    pub account_status: String,
    #[serde(default)]
    pub verification_status: String,
    #[serde(default)]
    pub kyc_status: String,
    #[serde(default)]
    pub kyc_verified_at: Option<String>,
    #[serde(default)]
    pub currency: String,
    #[serde(default, deserialize_with = "de_money")]
    pub available_balance: f64,
    #[serde(default, deserialize_with = "de_money")]
    pub pending_balance: f64,
    #[serde(default, deserialize_with = "de_money")]
    pub reserved_balance: f64,
    #[serde(default)]
    pub risk_level: String,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub user_info: Option<AdminUser>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
pub struct MerchantPage {
    #[serde(default)]
    pub total: i64,
    #[serde(default)]
    pub merchants: Vec<AdminMerchant>,
}

/// Detail payload for a single merchant in the admin console.
#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
pub struct MerchantDetail {
    #[serde(default)]
    pub merchant: AdminMerchant,
    #[serde(default)]
    pub user: Option<AdminUser>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiskUpdate {
    pub risk_level: String,
    pub risk_factors: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
pub struct Transaction {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub user_id: i64,
    #[serde(default)]
    pub description: String,
    #[serde(default, deserialize_with = "de_money")]
    pub amount: f64,
    #[serde(default)]
    pub currency: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub user: Option<AdminUser>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
pub struct TransactionPage {
    #[serde(default)]
    pub total: i64,
    #[serde(default)]
    pub transactions: Vec<Transaction>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
pub struct AuditLog {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub user_id: Option<i64>,
    #[serde(default)]
    pub merchant_id: Option<String>,
    #[serde(default)]
    pub action: String,
    #[serde(default)]
    pub resource_type: String,
    #[serde(default)]
    pub resource_id: Option<String>,
    #[serde(default)]
    pub ip_address: Option<String>,
    #[serde(default)]
    pub user_agent: Option<String>,
    #[serde(default)]
    pub changes: Option<String>,
    #[serde(default)]
    pub extra_data: Option<String>,
    #[serde(default)]
    pub created_at: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
pub struct AuditLogPage {
    #[serde(default)]
    pub total: i64,
    #[serde(default)]
    pub logs: Vec<AuditLog>,
}

/// Minimal record returned by the register endpoint; the client follows up
/// with a normal login to obtain tokens.
#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
pub struct RegisteredUser {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Receipt returned when a business verification is submitted.
#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
pub struct VerificationReceipt {
    #[serde(default)]
    pub business_name: String,
    #[serde(default)]
    pub industry: String,
    #[serde(default)]
    pub staff_size: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_record_tolerates_sparse_payloads() {
        let user: UserRecord = serde_json::from_str("{}").unwrap();
        assert!(!user.is_superadmin);
        assert!(user.onboarding_stage.is_none());
        assert_eq!(user.display_name(), "there");
    }

    #[test]
    fn test_verification_precedence_prefers_merchant_record() {
        let user: UserRecord = serde_json::from_value(serde_json::json!({
            "verification_status": "pending",
            "merchant_info": { "verification_status": "verified" }
        }))
        .unwrap();
        assert!(user.verification_complete());

        let user: UserRecord = serde_json::from_value(serde_json::json!({
            "verification_status": "verified",
            "merchant_info": { "verification_status": "pending" }
        }))
        .unwrap();
        assert!(user.verification_complete());

        let user: UserRecord = serde_json::from_value(serde_json::json!({
            "onboarding_stage": "active"
        }))
        .unwrap();
        assert!(user.verification_complete());

        let user: UserRecord = serde_json::from_value(serde_json::json!({
            "onboarding_stage": "verified"
        }))
        .unwrap();
        assert!(!user.verification_complete());
    }

    #[test]
    fn test_display_name_falls_back_to_mailbox() {
        let user: UserRecord = serde_json::from_value(serde_json::json!({
            "email": "ada@example.com"
        }))
        .unwrap();
        assert_eq!(user.display_name(), "ada");
    }

    #[test]
    fn test_money_fields_accept_strings_and_numbers() {
        let balance: Balance = serde_json::from_value(serde_json::json!({
            "available_balance": "1250.50",
            "pending_balance": 99.9,
            "reserved_balance": null,
            "currency": "USD"
        }))
        .unwrap();
        assert_eq!(balance.available_balance, 1250.50);
        assert_eq!(balance.pending_balance, 99.9);
        assert_eq!(balance.reserved_balance, 0.0);
    }

    #[test]
    fn test_persisted_user_roundtrip() {
        let user: UserRecord = serde_json::from_value(serde_json::json!({
            "id": 7,
            "email": "m@example.com",
            "name": "M",
            "is_superadmin": true,
            "onboarding_stage": "active"
        }))
        .unwrap();
        let json = serde_json::to_string(&user).unwrap();
        let back: UserRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(user, back);
    }
}
