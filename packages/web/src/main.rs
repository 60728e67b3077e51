use dioxus::prelude::*;

use ui::{AuthProvider, OnboardingGuard, ProtectedRoute};

mod views;

/// Route table. Guard composition mirrors the page wrappers below: public
/// pages are bare, merchant pages sit behind the authentication guard plus
/// the onboarding gate, admin pages skip the onboarding gate entirely.
#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Root {},
    #[route("/login")]
    Login {},
    #[route("/register")]
    Register {},
    #[route("/auth/callback?:access_token&:refresh_token")]
    AuthCallback { access_token: String, refresh_token: String },
    #[route("/onboarding/verify")]
    VerifyAccount {},
    #[route("/onboarding/merchant")]
    CreateMerchantAccount {},
    #[route("/dashboard")]
    Dashboard {},
    #[route("/analytics")]
    Analytics {},
    #[route("/charges")]
    Charges {},
    #[route("/api-keys")]
    ApiKeys {},
    #[route("/kyc")]
    Kyc {},
    #[route("/payouts")]
    Payouts {},
    #[route("/notifications")]
    Notifications {},
    #[route("/settings")]
    Settings {},
    #[route("/admin")]
    AdminDashboard {},
    #[route("/admin/merchants/:merchant_id")]
    AdminMerchantDetails { merchant_id: String },
    #[route("/admin/transactions")]
    AdminTransactions {},
    #[route("/admin/payouts")]
    AdminPayouts {},
    #[route("/admin/audit-logs")]
    AdminAuditLogs {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        AuthProvider {
            Router::<Route> {}
        }
    }
}

/// Redirect `/` to the dashboard.
#[component]
fn Root() -> Element {
    let nav = use_navigator();
    nav.replace(Route::Dashboard {});
    rsx! {}
}

#[component]
fn Login() -> Element {
    rsx! {
        views::Login {}
    }
}

#[component]
fn Register() -> Element {
    rsx! {
        views::Register {}
    }
}

#[component]
fn AuthCallback(access_token: String, refresh_token: String) -> Element {
    rsx! {
        views::AuthCallback { access_token, refresh_token }
    }
}

#[component]
fn VerifyAccount() -> Element {
    rsx! {
        ProtectedRoute {
            views::VerifyAccount {}
        }
    }
}

#[component]
fn CreateMerchantAccount() -> Element {
    rsx! {
        ProtectedRoute {
            views::CreateMerchantAccount {}
        }
    }
}

#[component]
fn Dashboard() -> Element {
    rsx! {
        ProtectedRoute {
            OnboardingGuard {
                views::Dashboard {}
            }
        }
    }
}

#[component]
fn Analytics() -> Element {
    rsx! {
        ProtectedRoute {
            OnboardingGuard {
                views::Analytics {}
            }
        }
    }
}

#[component]
fn Charges() -> Element {
    rsx! {
        ProtectedRoute {
            OnboardingGuard {
                views::Charges {}
            }
        }
    }
}

#[component]
fn ApiKeys() -> Element {
    rsx! {
        ProtectedRoute {
            OnboardingGuard {
                views::ApiKeys {}
            }
        }
    }
}

#[component]
fn Kyc() -> Element {
    rsx! {
        ProtectedRoute {
            OnboardingGuard {
                views::Kyc {}
            }
        }
    }
}

#[component]
fn Payouts() -> Element {
    rsx! {
        ProtectedRoute {
            OnboardingGuard {
                views::Payouts {}
            }
        }
    }
}

#[component]
fn Notifications() -> Element {
    rsx! {
        ProtectedRoute {
            OnboardingGuard {
                views::Notifications {}
            }
        }
    }
}

#[component]
fn Settings() -> Element {
    rsx! {
        ProtectedRoute {
            OnboardingGuard {
                views::Settings {}
            }
        }
    }
}

#[component]
fn AdminDashboard() -> Element {
    rsx! {
        ProtectedRoute {
            views::AdminDashboard {}
        }
    }
}

#[component]
fn AdminMerchantDetails(merchant_id: String) -> Element {
    rsx! {
        ProtectedRoute {
            views::AdminMerchantDetails { merchant_id }
        }
    }
}

#[component]
fn AdminTransactions() -> Element {
    rsx! {
        ProtectedRoute {
            views::AdminTransactions {}
        }
    }
}

#[component]
fn AdminPayouts() -> Element {
    rsx! {
        ProtectedRoute {
            views::AdminPayouts {}
        }
    }
}

#[component]
fn AdminAuditLogs() -> Element {
    rsx! {
        ProtectedRoute {
            views::AdminAuditLogs {}
        }
    }
}
