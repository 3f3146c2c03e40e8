//! Actions accepted by the store.

use crate::model::{CreditPackage, PaymentDetails, PaymentRequest, User};
use crate::store::state::ActivePage;

/// A state transition request.
///
/// Actions carry already-validated payloads; the policy layer in
/// [`crate::session`] is responsible for precondition checks and id
/// generation before dispatch.
#[derive(Debug, Clone)]
pub enum Action {
    /// Sign the given user in and route them to their landing page.
    LogIn { user: User },
    /// Sign out. Users, payments, and settings survive; only the auth
    /// fields and the active page reset.
    LogOut,
    /// Register a new account and sign it in.
    SignUp { user: User },
    SetActivePage(ActivePage),
    /// Subtract `amount` from a user's balance.
    ///
    /// Caller contract: refuse this for admin sessions and check the
    /// balance beforehand. The reducer performs no floor check and will
    /// legally drive a balance negative if misused.
    DeductCredits { user_id: String, amount: i64 },
    /// File a new pending payment request.
    RequestPayment(PaymentRequest),
    /// Approve a pending request, crediting its user by the package's
    /// credit amount looked up now. If the package no longer exists the
    /// approval is a silent no-op.
    ApprovePayment { payment_id: String },
    /// Reject a pending request. No balance change.
    RejectPayment { payment_id: String },
    /// Admin override: set a user's balance to an absolute value.
    SetUserCredits { user_id: String, credits: i64 },
    /// Flip a user's blocked flag.
    ToggleUserBlock { user_id: String },
    UpdatePaymentDetails(PaymentDetails),
    /// Replace only the QR code reference in the payment details.
    SetQrCode { url: String },
    AddCreditPackage(CreditPackage),
    /// Replace the package whose id matches the payload's.
    UpdateCreditPackage(CreditPackage),
    DeleteCreditPackage { package_id: String },
}

impl Action {
    /// Short name for tracing.
    pub fn kind(&self) -> &'static str {
        match self {
            Action::LogIn { .. } => "log_in",
            Action::LogOut => "log_out",
            Action::SignUp { .. } => "sign_up",
            Action::SetActivePage(_) => "set_active_page",
            Action::DeductCredits { .. } => "deduct_credits",
            Action::RequestPayment(_) => "request_payment",
            Action::ApprovePayment { .. } => "approve_payment",
            Action::RejectPayment { .. } => "reject_payment",
            Action::SetUserCredits { .. } => "set_user_credits",
            Action::ToggleUserBlock { .. } => "toggle_user_block",
            Action::UpdatePaymentDetails(_) => "update_payment_details",
            Action::SetQrCode { .. } => "set_qr_code",
            Action::AddCreditPackage(_) => "add_credit_package",
            Action::UpdateCreditPackage(_) => "update_credit_package",
            Action::DeleteCreditPackage { .. } => "delete_credit_package",
        }
    }
}
