//! The full application snapshot.

use crate::model::{PaymentRequest, Settings, User};

/// View selector for the embedding UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActivePage {
    /// Image generation workspace (user landing page).
    #[default]
    Generate,
    /// Credit purchase page.
    Credits,
    /// Admin overview (admin landing page).
    Dashboard,
    /// Admin payment request review.
    Payments,
    /// Admin user management.
    Users,
    /// Admin pricing/payment settings.
    Settings,
}

/// One immutable snapshot of the session.
///
/// Snapshots are cheap to clone and compared structurally; the reducer
/// consumes one snapshot and returns the next.
#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    /// The signed-in user, if any. A copy, not an index into `users`:
    /// the reducer keeps the copy in sync on balance changes.
    pub current_user: Option<User>,
    /// All registered accounts (admins are synthesized at login and are
    /// not listed here).
    pub users: Vec<User>,
    /// All payment requests filed this session, oldest first.
    pub payments: Vec<PaymentRequest>,
    pub settings: Settings,
    pub active_page: ActivePage,
}

impl AppState {
    /// Build the pre-login snapshot from seed data.
    pub fn initial(users: Vec<User>, settings: Settings) -> Self {
        Self {
            current_user: None,
            users,
            payments: Vec::new(),
            settings,
            active_page: ActivePage::default(),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.current_user.is_some()
    }

    /// Look up a registered user by id.
    pub fn user(&self, user_id: &str) -> Option<&User> {
        self.users.iter().find(|u| u.id == user_id)
    }

    /// Look up a registered user by email.
    pub fn user_by_email(&self, email: &str) -> Option<&User> {
        self.users.iter().find(|u| u.email == email)
    }

    /// Look up a payment request by id.
    pub fn payment(&self, payment_id: &str) -> Option<&PaymentRequest> {
        self.payments.iter().find(|p| p.id == payment_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PaymentDetails;

    fn empty_settings() -> Settings {
        Settings {
            payment_details: PaymentDetails {
                method_name: String::new(),
                account_number: String::new(),
                qr_code_url: String::new(),
            },
            credit_packages: Vec::new(),
        }
    }

    #[test]
    fn initial_state_is_signed_out() {
        let state = AppState::initial(Vec::new(), empty_settings());
        assert!(!state.is_authenticated());
        assert_eq!(state.active_page, ActivePage::Generate);
        assert!(state.payments.is_empty());
    }

    #[test]
    fn default_page_is_generate() {
        assert_eq!(ActivePage::default(), ActivePage::Generate);
    }
}
