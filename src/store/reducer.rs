//! The pure state transition function.

use crate::model::{PaymentStatus, Role, User};
use crate::store::action::Action;
use crate::store::state::{ActivePage, AppState};

/// Process one action and return the new snapshot.
///
/// Consumes the current snapshot and returns the next one; callers keep
/// their own clones, so the transition is observationally pure. Total
/// over all inputs: unknown ids and already-settled payment requests
/// fall through as no-ops rather than errors. Never performs I/O and
/// never fails.
pub fn reduce(mut state: AppState, action: Action) -> AppState {
    match action {
        Action::LogIn { user } => {
            state.active_page = landing_page(&user);
            state.current_user = Some(user);
            state
        }
        Action::LogOut => {
            state.current_user = None;
            state.active_page = ActivePage::default();
            state
        }
        Action::SignUp { user } => {
            state.users.push(user.clone());
            state.current_user = Some(user);
            state.active_page = ActivePage::Generate;
            state
        }
        Action::SetActivePage(page) => {
            state.active_page = page;
            state
        }
        Action::DeductCredits { user_id, amount } => {
            adjust_credits(state, &user_id, |credits| credits - amount)
        }
        Action::RequestPayment(request) => {
            state.payments.push(request);
            state
        }
        Action::ApprovePayment { payment_id } => {
            // Only a pending request can settle; a second approval of the
            // same id finds no match and leaves the state unchanged.
            let Some((package_id, user_id)) = state
                .payments
                .iter()
                .find(|p| p.id == payment_id && p.status == PaymentStatus::Pending)
                .map(|p| (p.package_id.clone(), p.user_id.clone()))
            else {
                return state;
            };

            // Payout is resolved at approval time. A package deleted
            // after the request was filed makes the approval a no-op.
            let Some(payout) = state.settings.package(&package_id).map(|p| p.credits) else {
                return state;
            };

            if let Some(p) = state.payments.iter_mut().find(|p| p.id == payment_id) {
                p.status = PaymentStatus::Approved;
            }

            adjust_credits(state, &user_id, |credits| credits.saturating_add(payout))
        }
        Action::RejectPayment { payment_id } => {
            if let Some(p) = state
                .payments
                .iter_mut()
                .find(|p| p.id == payment_id && p.status == PaymentStatus::Pending)
            {
                p.status = PaymentStatus::Rejected;
            }
            state
        }
        Action::SetUserCredits { user_id, credits } => {
            adjust_credits(state, &user_id, |_| credits)
        }
        Action::ToggleUserBlock { user_id } => {
            if let Some(u) = state.users.iter_mut().find(|u| u.id == user_id) {
                u.blocked = !u.blocked;
            }
            state
        }
        Action::UpdatePaymentDetails(details) => {
            state.settings.payment_details = details;
            state
        }
        Action::SetQrCode { url } => {
            state.settings.payment_details.qr_code_url = url;
            state
        }
        Action::AddCreditPackage(pkg) => {
            state.settings.credit_packages.push(pkg);
            state
        }
        Action::UpdateCreditPackage(pkg) => {
            if let Some(existing) = state
                .settings
                .credit_packages
                .iter_mut()
                .find(|p| p.id == pkg.id)
            {
                *existing = pkg;
            }
            state
        }
        Action::DeleteCreditPackage { package_id } => {
            state.settings.credit_packages.retain(|p| p.id != package_id);
            state
        }
    }
}

fn landing_page(user: &User) -> ActivePage {
    match user.role {
        Role::Admin => ActivePage::Dashboard,
        Role::User => ActivePage::Generate,
    }
}

/// Apply `f` to one user's balance, keeping the current-user copy in
/// sync when it refers to the same account.
fn adjust_credits(mut state: AppState, user_id: &str, f: impl Fn(i64) -> i64) -> AppState {
    if let Some(u) = state.users.iter_mut().find(|u| u.id == user_id) {
        u.credits = f(u.credits);
    }
    if let Some(u) = state.current_user.as_mut() {
        if u.id == user_id {
            u.credits = f(u.credits);
        }
    }
    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{
        CreditPackage, PaymentDetails, PaymentRequest, PaymentStatus, Role, Settings, User,
    };
    use std::time::SystemTime;

    fn test_user(id: &str, credits: i64) -> User {
        User {
            id: id.to_string(),
            name: format!("User {id}"),
            email: format!("{id}@example.com"),
            credits,
            role: Role::User,
            blocked: false,
        }
    }

    fn test_settings() -> Settings {
        Settings {
            payment_details: PaymentDetails {
                method_name: "Bkash/Nagad".to_string(),
                account_number: "01700000000".to_string(),
                qr_code_url: "https://example.com/qr.png".to_string(),
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
            ],
        }
    }

    fn test_state() -> AppState {
        AppState::initial(vec![test_user("u1", 10), test_user("u2", 3)], test_settings())
    }

    fn pending_request(id: &str, user_id: &str, package_id: &str) -> PaymentRequest {
        PaymentRequest {
            id: id.to_string(),
            user_id: user_id.to_string(),
            user_email: format!("{user_id}@example.com"),
            package_id: package_id.to_string(),
            package_name: "Starter Pack".to_string(),
            transaction_ref: "TX123".to_string(),
            status: PaymentStatus::Pending,
            created_at: SystemTime::now(),
        }
    }

    #[test]
    fn login_routes_user_to_generate() {
        let state = test_state();
        let user = test_user("u1", 10);
        let next = reduce(state, Action::LogIn { user: user.clone() });

        assert_eq!(next.current_user, Some(user));
        assert_eq!(next.active_page, ActivePage::Generate);
    }

    #[test]
    fn login_routes_admin_to_dashboard() {
        let state = test_state();
        let admin = User {
            role: Role::Admin,
            ..test_user("admin", i64::MAX)
        };
        let next = reduce(state, Action::LogIn { user: admin });

        assert_eq!(next.active_page, ActivePage::Dashboard);
    }

    #[test]
    fn logout_preserves_collections() {
        let mut state = test_state();
        state.payments.push(pending_request("pay1", "u1", "pkg1"));
        let state = reduce(state, Action::LogIn { user: test_user("u1", 10) });

        let before = state.clone();
        let next = reduce(state, Action::LogOut);

        assert!(next.current_user.is_none());
        assert_eq!(next.active_page, ActivePage::Generate);
        assert_eq!(next.users, before.users);
        assert_eq!(next.payments, before.payments);
        assert_eq!(next.settings, before.settings);
    }

    #[test]
    fn signup_appends_and_logs_in() {
        let state = test_state();
        let newcomer = test_user("u3", 10);
        let next = reduce(state, Action::SignUp { user: newcomer.clone() });

        assert_eq!(next.current_user, Some(newcomer.clone()));
        assert!(next.users.contains(&newcomer));
        assert_eq!(next.users.len(), 3);
        assert_eq!(next.active_page, ActivePage::Generate);
    }

    #[test]
    fn deduct_updates_user_and_current_copy() {
        let state = reduce(test_state(), Action::LogIn { user: test_user("u1", 10) });
        let next = reduce(
            state,
            Action::DeductCredits {
                user_id: "u1".to_string(),
                amount: 1,
            },
        );

        assert_eq!(next.user("u1").map(|u| u.credits), Some(9));
        assert_eq!(next.current_user.as_ref().map(|u| u.credits), Some(9));
    }

    #[test]
    fn deduct_has_no_floor_check() {
        let next = reduce(
            test_state(),
            Action::DeductCredits {
                user_id: "u2".to_string(),
                amount: 5,
            },
        );

        assert_eq!(next.user("u2").map(|u| u.credits), Some(-2));
    }

    #[test]
    fn deduct_unknown_user_is_noop() {
        let state = test_state();
        let next = reduce(
            state.clone(),
            Action::DeductCredits {
                user_id: "ghost".to_string(),
                amount: 1,
            },
        );
        assert_eq!(next, state);
    }

    #[test]
    fn approve_credits_user_with_current_package_amount() {
        let mut state = test_state();
        state.payments.push(pending_request("pay1", "u1", "pkg1"));

        let next = reduce(
            state,
            Action::ApprovePayment {
                payment_id: "pay1".to_string(),
            },
        );

        assert_eq!(next.payment("pay1").map(|p| p.status), Some(PaymentStatus::Approved));
        assert_eq!(next.user("u1").map(|u| u.credits), Some(110));
    }

    #[test]
    fn approve_twice_has_no_additional_effect() {
        let mut state = test_state();
        state.payments.push(pending_request("pay1", "u1", "pkg1"));

        let once = reduce(
            state,
            Action::ApprovePayment {
                payment_id: "pay1".to_string(),
            },
        );
        let twice = reduce(
            once.clone(),
            Action::ApprovePayment {
                payment_id: "pay1".to_string(),
            },
        );

        assert_eq!(twice, once);
        assert_eq!(twice.user("u1").map(|u| u.credits), Some(110));
    }

    #[test]
    fn approve_after_package_edit_pays_new_amount() {
        let mut state = test_state();
        state.payments.push(pending_request("pay1", "u1", "pkg1"));

        let state = reduce(
            state,
            Action::UpdateCreditPackage(CreditPackage {
                id: "pkg1".to_string(),
                name: "Starter Pack".to_string(),
                credits: 250,
                price: 50.0,
            }),
        );
        let next = reduce(
            state,
            Action::ApprovePayment {
                payment_id: "pay1".to_string(),
            },
        );

        assert_eq!(next.user("u1").map(|u| u.credits), Some(260));
    }

    #[test]
    fn approve_with_deleted_package_is_noop() {
        let mut state = test_state();
        state.payments.push(pending_request("pay1", "u1", "pkg1"));

        let state = reduce(
            state,
            Action::DeleteCreditPackage {
                package_id: "pkg1".to_string(),
            },
        );
        let before = state.clone();
        let next = reduce(
            state,
            Action::ApprovePayment {
                payment_id: "pay1".to_string(),
            },
        );

        // The request survives the package deletion, still pending.
        assert_eq!(next, before);
        assert_eq!(next.payment("pay1").map(|p| p.status), Some(PaymentStatus::Pending));
    }

    #[test]
    fn reject_settles_without_balance_change() {
        let mut state = test_state();
        state.payments.push(pending_request("pay1", "u1", "pkg1"));

        let next = reduce(
            state,
            Action::RejectPayment {
                payment_id: "pay1".to_string(),
            },
        );

        assert_eq!(next.payment("pay1").map(|p| p.status), Some(PaymentStatus::Rejected));
        assert_eq!(next.user("u1").map(|u| u.credits), Some(10));
    }

    #[test]
    fn reject_then_approve_is_noop() {
        let mut state = test_state();
        state.payments.push(pending_request("pay1", "u1", "pkg1"));

        let state = reduce(
            state,
            Action::RejectPayment {
                payment_id: "pay1".to_string(),
            },
        );
        let before = state.clone();
        let next = reduce(
            state,
            Action::ApprovePayment {
                payment_id: "pay1".to_string(),
            },
        );

        assert_eq!(next, before);
    }

    #[test]
    fn set_user_credits_is_absolute() {
        let next = reduce(
            test_state(),
            Action::SetUserCredits {
                user_id: "u2".to_string(),
                credits: 42,
            },
        );
        assert_eq!(next.user("u2").map(|u| u.credits), Some(42));
    }

    #[test]
    fn toggle_block_flips_flag() {
        let state = test_state();
        let blocked = reduce(
            state,
            Action::ToggleUserBlock {
                user_id: "u1".to_string(),
            },
        );
        assert_eq!(blocked.user("u1").map(|u| u.blocked), Some(true));

        let unblocked = reduce(
            blocked,
            Action::ToggleUserBlock {
                user_id: "u1".to_string(),
            },
        );
        assert_eq!(unblocked.user("u1").map(|u| u.blocked), Some(false));
    }

    #[test]
    fn package_collection_operations() {
        let state = test_state();

        let added = reduce(
            state,
            Action::AddCreditPackage(CreditPackage {
                id: "pkg3".to_string(),
                name: "Mega Pack".to_string(),
                credits: 1200,
                price: 450.0,
            }),
        );
        assert_eq!(added.settings.credit_packages.len(), 3);

        let deleted = reduce(
            added,
            Action::DeleteCreditPackage {
                package_id: "pkg2".to_string(),
            },
        );
        assert_eq!(deleted.settings.credit_packages.len(), 2);
        assert!(deleted.settings.package("pkg2").is_none());
    }

    #[test]
    fn qr_code_update_touches_only_qr_field() {
        let state = test_state();
        let before = state.settings.payment_details.clone();
        let next = reduce(
            state,
            Action::SetQrCode {
                url: "data:image/png;base64,AAAA".to_string(),
            },
        );

        let details = &next.settings.payment_details;
        assert_eq!(details.qr_code_url, "data:image/png;base64,AAAA");
        assert_eq!(details.method_name, before.method_name);
        assert_eq!(details.account_number, before.account_number);
    }
}
