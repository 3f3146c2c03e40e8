use serde::{Deserialize, Serialize};

use crate::model::{CreditPackage, PaymentDetails, Role, Settings, User};

/// Root configuration container.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub admin: AdminConfig,
    #[serde(default)]
    pub signup: SignupConfig,
    #[serde(default)]
    pub generator: GeneratorConfig,
    #[serde(default)]
    pub seed: SeedConfig,
}

/// The fixed administrator credential pair.
///
/// Matching this pair at login grants admin role unconditionally; it is
/// session bootstrap, not an authentication mechanism.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminConfig {
    pub email: String,
    pub password: String,
    #[serde(default = "default_admin_name")]
    pub display_name: String,
}

/// Signup policy knobs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignupConfig {
    /// Free credits granted to every new account (default: 10).
    #[serde(default = "default_starting_credits")]
    pub starting_credits: i64,
}

/// Image generation endpoint configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Base URL of the generation API.
    pub base_url: String,
    /// Bearer token for the generation API, if it requires one.
    #[serde(default)]
    pub api_key: Option<String>,
    /// Request timeout in seconds (default: 120; image generation is slow).
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
    /// Connection timeout in seconds (default: 5).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u64,
}

/// Data present before the first signup: demo accounts, credit packages,
/// and the bank-transfer details shown to purchasing users.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedConfig {
    #[serde(default = "default_seed_users")]
    pub users: Vec<User>,
    pub payment_details: PaymentDetails,
    pub credit_packages: Vec<CreditPackage>,
}

impl SeedConfig {
    /// Assemble the settings singleton from the seed.
    pub fn settings(&self) -> Settings {
        Settings {
            payment_details: self.payment_details.clone(),
            credit_packages: self.credit_packages.clone(),
        }
    }
}

fn default_admin_name() -> String {
    "Admin".to_string()
}

fn default_starting_credits() -> i64 {
    10
}

fn default_timeout() -> u64 {
    120
}

fn default_connect_timeout() -> u64 {
    5
}

fn default_seed_users() -> Vec<User> {
    vec![User {
        id: "user-1".to_string(),
        name: "Demo User".to_string(),
        email: "user@demo.com".to_string(),
        credits: 10,
        role: Role::User,
        blocked: false,
    }]
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            email: "admin@pixelmint.app".to_string(),
            password: "admin123".to_string(),
            display_name: default_admin_name(),
        }
    }
}

impl Default for SignupConfig {
    fn default() -> Self {
        Self {
            starting_credits: default_starting_credits(),
        }
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.pixelmint.app".to_string(),
            api_key: None,
            timeout_seconds: default_timeout(),
            connect_timeout_seconds: default_connect_timeout(),
        }
    }
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            users: default_seed_users(),
            payment_details: PaymentDetails {
                method_name: "Bkash/Nagad".to_string(),
                account_number: "01700000000".to_string(),
                qr_code_url: "https://i.ibb.co/68ycr2S/placeholder-qr.png".to_string(),
            },
            credit_packages: vec![
                CreditPackage {
                    id: "pkg1".to_string(),
                    name: "Starter Pack".to_string(),
                    credits: 100,
                    price: 50.0,
                },
                CreditPackage {
                    id: "pkg2".to_string(),
                    name: "Pro Pack".to_string(),
                    credits: 500,
                    price: 200.0,
                },
                CreditPackage {
                    id: "pkg3".to_string(),
                    name: "Mega Pack".to_string(),
                    credits: 1200,
                    price: 450.0,
                },
            ],
        }
    }
}
