//! Domain types shared across the store, policy, and generation layers.

use std::time::SystemTime;

use serde::{Deserialize, Serialize};

/// Balance sentinel for administrator accounts.
///
/// Admins never spend credits; the sentinel only exists so an admin user
/// renders a balance at all.
pub const ADMIN_CREDITS: i64 = i64::MAX;

/// Account role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    User,
    Admin,
}

/// A registered account.
///
/// Unique by `id`; emails are expected unique among non-admin users
/// (enforced by the signup policy, not by the store).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    /// Credit balance. The reducer performs no floor check, so a misused
    /// deduction can drive this negative; see the caller contract on
    /// [`crate::store::Action::DeductCredits`].
    pub credits: i64,
    pub role: Role,
    pub blocked: bool,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

/// A purchasable bundle exchanging a price for a credit amount.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreditPackage {
    pub id: String,
    pub name: String,
    pub credits: i64,
    pub price: f64,
}

/// Manual bank-transfer details shown to purchasing users.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentDetails {
    pub method_name: String,
    pub account_number: String,
    /// URL or `data:image/...;base64,` reference to the payment QR code.
    pub qr_code_url: String,
}

/// Singleton application settings: payment details plus the ordered
/// credit package list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    pub payment_details: PaymentDetails,
    pub credit_packages: Vec<CreditPackage>,
}

impl Settings {
    /// Look up a package by id.
    pub fn package(&self, package_id: &str) -> Option<&CreditPackage> {
        self.credit_packages.iter().find(|p| p.id == package_id)
    }
}

/// Verification status of a payment request.
///
/// Transitions exactly once: `Pending` to `Approved` or `Rejected`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    Pending,
    Approved,
    Rejected,
}

/// A user's claim of having paid for a package, awaiting administrator
/// verification.
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentRequest {
    pub id: String,
    pub user_id: String,
    pub user_email: String,
    pub package_id: String,
    /// Package name captured when the request was filed. The payout is
    /// *not* captured: approval looks the package up again by id.
    pub package_name: String,
    pub transaction_ref: String,
    pub status: PaymentStatus,
    pub created_at: SystemTime,
}

/// An image produced during this session.
///
/// Lives only in the generation session's [`crate::generate::Gallery`],
/// never in the global state; lost on session end.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedImage {
    pub id: String,
    pub url: String,
    pub prompt: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn package_lookup_by_id() {
        let settings = Settings {
            payment_details: PaymentDetails {
                method_name: "Bank".to_string(),
                account_number: "000".to_string(),
                qr_code_url: String::new(),
            },
            credit_packages: vec![CreditPackage {
                id: "pkg1".to_string(),
                name: "Starter".to_string(),
                credits: 100,
                price: 50.0,
            }],
        };

        assert_eq!(settings.package("pkg1").map(|p| p.credits), Some(100));
        assert!(settings.package("missing").is_none());
    }

    #[test]
    fn admin_role_check() {
        let user = User {
            id: "admin".to_string(),
            name: "Admin".to_string(),
            email: "admin@example.com".to_string(),
            credits: ADMIN_CREDITS,
            role: Role::Admin,
            blocked: false,
        };
        assert!(user.is_admin());
    }
}
