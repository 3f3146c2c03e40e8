//! The session facade: action creators over the store.

use std::sync::Arc;
use std::time::SystemTime;

use uuid::Uuid;

use crate::config::AppConfig;
use crate::model::{
    CreditPackage, PaymentDetails, PaymentRequest, PaymentStatus, Role, User, ADMIN_CREDITS,
};
use crate::notify::{Notice, Notifier};
use crate::session::error::SessionError;
use crate::store::{Action, ActivePage, AppState, StoreHandle};

/// Handle for driving a user session against the store.
///
/// Clones share the underlying store and notifier, so one session can be
/// handed to several view components.
#[derive(Clone)]
pub struct Session {
    store: StoreHandle,
    notifier: Arc<dyn Notifier>,
    admin_email: String,
    admin_password: String,
    admin_name: String,
    starting_credits: i64,
}

impl Session {
    /// Create a session over an existing store.
    pub fn new(store: StoreHandle, notifier: Arc<dyn Notifier>, config: &AppConfig) -> Self {
        Self {
            store,
            notifier,
            admin_email: config.admin.email.clone(),
            admin_password: config.admin.password.clone(),
            admin_name: config.admin.display_name.clone(),
            starting_credits: config.signup.starting_credits,
        }
    }

    /// Create a session with a freshly seeded store.
    pub fn from_config(config: &AppConfig, notifier: Arc<dyn Notifier>) -> Self {
        let store = StoreHandle::new(AppState::initial(
            config.seed.users.clone(),
            config.seed.settings(),
        ));
        Self::new(store, notifier, config)
    }

    /// The underlying store, for snapshot reads.
    pub fn store(&self) -> &StoreHandle {
        &self.store
    }

    /// The notice sink this session reports through.
    pub fn notifier(&self) -> &Arc<dyn Notifier> {
        &self.notifier
    }

    pub fn snapshot(&self) -> AppState {
        self.store.snapshot()
    }

    fn notify(&self, notice: Notice) {
        self.notifier.notify(notice);
    }

    /// Sign in with an email/password pair.
    ///
    /// The configured admin pair grants admin role unconditionally. Any
    /// other email is looked up among registered users; the password is
    /// accepted but not verified against anything (this is a stub, not an
    /// authentication mechanism). Blocked accounts are rejected.
    pub fn login(&self, email: &str, password: &str) -> Result<User, SessionError> {
        if email == self.admin_email && password == self.admin_password {
            let admin = User {
                id: "admin-0".to_string(),
                name: self.admin_name.clone(),
                email: self.admin_email.clone(),
                credits: ADMIN_CREDITS,
                role: Role::Admin,
                blocked: false,
            };
            self.store.dispatch(Action::LogIn {
                user: admin.clone(),
            });
            tracing::info!(email = %email, "admin login");
            self.notify(Notice::success("Admin login successful!"));
            return Ok(admin);
        }

        let snapshot = self.store.snapshot();
        let Some(user) = snapshot.user_by_email(email).cloned() else {
            tracing::warn!(email = %email, "login rejected: unknown email");
            self.notify(Notice::error("Invalid credentials."));
            return Err(SessionError::InvalidCredentials);
        };

        if user.blocked {
            tracing::warn!(email = %email, "login rejected: account blocked");
            self.notify(Notice::error(
                "Your account is blocked. Please contact support.",
            ));
            return Err(SessionError::AccountBlocked {
                email: user.email,
            });
        }

        self.store.dispatch(Action::LogIn { user: user.clone() });
        self.notify(Notice::success(format!("Welcome back, {}!", user.name)));
        Ok(user)
    }

    /// Register a new account and sign it in.
    ///
    /// The password is accepted for interface parity but not stored; see
    /// [`Session::login`].
    pub fn signup(&self, name: &str, email: &str, _password: &str) -> Result<User, SessionError> {
        let snapshot = self.store.snapshot();
        if snapshot.user_by_email(email).is_some() {
            self.notify(Notice::error("An account with this email already exists."));
            return Err(SessionError::EmailTaken {
                email: email.to_string(),
            });
        }

        let user = User {
            id: format!("user-{}", Uuid::new_v4()),
            name: name.to_string(),
            email: email.to_string(),
            credits: self.starting_credits,
            role: Role::User,
            blocked: false,
        };
        self.store.dispatch(Action::SignUp { user: user.clone() });
        tracing::info!(user_id = %user.id, "account created");
        self.notify(Notice::success(format!(
            "Account created successfully! You have {} free credits.",
            self.starting_credits
        )));
        Ok(user)
    }

    /// Sign out. Users, payments, and settings survive the transition.
    pub fn logout(&self) {
        self.store.dispatch(Action::LogOut);
        self.notify(Notice::success("You have been logged out."));
    }

    pub fn set_active_page(&self, page: ActivePage) {
        self.store.dispatch(Action::SetActivePage(page));
    }

    /// Subtract credits from a user's balance.
    ///
    /// Silent no-op when the *current* session belongs to an admin;
    /// admins never spend credits.
    pub fn deduct_credits(&self, user_id: &str, amount: i64) {
        let snapshot = self.store.snapshot();
        if snapshot.current_user.as_ref().is_some_and(User::is_admin) {
            return;
        }
        self.store.dispatch(Action::DeductCredits {
            user_id: user_id.to_string(),
            amount,
        });
    }

    /// File a payment request for a credit package.
    ///
    /// Requires a signed-in user and an existing package; the package
    /// name is captured into the request, the payout amount is not.
    pub fn request_payment(
        &self,
        package_id: &str,
        transaction_ref: &str,
    ) -> Result<PaymentRequest, SessionError> {
        let snapshot = self.store.snapshot();
        let Some(current) = snapshot.current_user.as_ref() else {
            return Err(SessionError::NotAuthenticated);
        };
        let Some(pkg) = snapshot.settings.package(package_id) else {
            self.notify(Notice::error("Selected package not found."));
            return Err(SessionError::PackageNotFound {
                package_id: package_id.to_string(),
            });
        };

        let request = PaymentRequest {
            id: format!("payment-{}", Uuid::new_v4()),
            user_id: current.id.clone(),
            user_email: current.email.clone(),
            package_id: package_id.to_string(),
            package_name: pkg.name.clone(),
            transaction_ref: transaction_ref.to_string(),
            status: PaymentStatus::Pending,
            created_at: SystemTime::now(),
        };
        self.store.dispatch(Action::RequestPayment(request.clone()));
        tracing::info!(payment_id = %request.id, package_id = %package_id, "payment requested");
        self.notify(Notice::success(
            "Payment request submitted! Please wait for approval.",
        ));
        Ok(request)
    }

    /// Approve a pending payment request, crediting its user.
    pub fn approve_payment(&self, payment_id: &str) {
        self.store.dispatch(Action::ApprovePayment {
            payment_id: payment_id.to_string(),
        });
        self.notify(Notice::success("Payment approved and credits added."));
    }

    /// Reject a pending payment request.
    pub fn reject_payment(&self, payment_id: &str) {
        self.store.dispatch(Action::RejectPayment {
            payment_id: payment_id.to_string(),
        });
        self.notify(Notice::error("Payment rejected."));
    }

    /// Admin override: set a user's balance to an absolute value.
    pub fn update_user_credits(&self, user_id: &str, credits: i64) {
        self.store.dispatch(Action::SetUserCredits {
            user_id: user_id.to_string(),
            credits,
        });
        self.notify(Notice::success("User credits updated."));
    }

    /// Flip a user's blocked flag.
    pub fn toggle_user_block(&self, user_id: &str) {
        let next = self.store.dispatch(Action::ToggleUserBlock {
            user_id: user_id.to_string(),
        });
        if let Some(user) = next.user(user_id) {
            let verb = if user.blocked { "blocked" } else { "unblocked" };
            self.notify(Notice::success(format!("User {verb}.")));
        }
    }

    pub fn update_payment_settings(&self, details: PaymentDetails) {
        self.store.dispatch(Action::UpdatePaymentDetails(details));
        self.notify(Notice::success("Payment settings updated."));
    }

    pub fn set_qr_code(&self, url: &str) {
        self.store.dispatch(Action::SetQrCode {
            url: url.to_string(),
        });
        self.notify(Notice::success("QR Code updated successfully."));
    }

    /// Add a credit package with a freshly generated id.
    pub fn add_credit_package(&self, name: &str, credits: i64, price: f64) -> CreditPackage {
        let pkg = CreditPackage {
            id: format!("pkg-{}", Uuid::new_v4()),
            name: name.to_string(),
            credits,
            price,
        };
        self.store.dispatch(Action::AddCreditPackage(pkg.clone()));
        self.notify(Notice::success("Credit package added."));
        pkg
    }

    /// Replace the package matching the payload's id.
    pub fn update_credit_package(&self, pkg: CreditPackage) {
        self.store.dispatch(Action::UpdateCreditPackage(pkg));
        self.notify(Notice::success("Credit package updated."));
    }

    pub fn delete_credit_package(&self, package_id: &str) {
        self.store.dispatch(Action::DeleteCreditPackage {
            package_id: package_id.to_string(),
        });
        self.notify(Notice::success("Credit package deleted."));
    }
}
