mod form;
pub use form::{SelectField, TextField};

mod login;
pub use login::Login;

mod register;
pub use register::Register;

mod auth_callback;
pub use auth_callback::AuthCallback;

mod verify_account;
pub use verify_account::VerifyAccount;

mod create_merchant;
pub use create_merchant::CreateMerchantAccount;

mod dashboard;
pub use dashboard::Dashboard;

mod analytics;
pub use analytics::Analytics;

mod charges;
pub use charges::Charges;

mod api_keys;
pub use api_keys::ApiKeys;

mod kyc;
pub use kyc::Kyc;

mod payouts;
pub use payouts::Payouts;

mod notifications;
pub use notifications::Notifications;

mod settings;
pub use settings::Settings;

mod admin_dashboard;
pub use admin_dashboard::AdminDashboard;

mod admin_merchant_details;
pub use admin_merchant_details::AdminMerchantDetails;

mod admin_transactions;
pub use admin_transactions::AdminTransactions;

mod admin_payouts;
pub use admin_payouts::AdminPayouts;

mod admin_audit_logs;
pub use admin_audit_logs::AdminAuditLogs;
