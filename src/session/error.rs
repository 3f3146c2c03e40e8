//! Validation failures surfaced by the policy layer.

use thiserror::Error;

/// Errors returned by [`crate::session::Session`] operations.
///
/// All variants are validation failures: none of them corrupts or
/// partially applies state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    /// No account matches the given email.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// The account exists but has been blocked by an administrator.
    #[error("Account '{email}' is blocked")]
    AccountBlocked { email: String },

    /// Signup attempted with an email that is already registered.
    #[error("An account with email '{email}' already exists")]
    EmailTaken { email: String },

    /// The operation requires a signed-in user.
    #[error("Not signed in")]
    NotAuthenticated,

    /// The referenced credit package does not exist.
    #[error("Credit package '{package_id}' not found")]
    PackageNotFound { package_id: String },
}
