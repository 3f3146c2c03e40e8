//! pixelmint — session core for a credits-based AI image studio.
//!
//! Users sign up, spend credits to generate images, and purchase more
//! credits via manually verified bank transfers; administrators manage
//! users, approve payments, and configure pricing. All state is held in
//! memory for the session: there is no persistence, no real
//! authentication, and no real payment gateway.
//!
//! The crate is the model behind a view, not the view itself:
//!
//! - [`store`] — the snapshot, the action sum type, the pure reducer,
//!   and a thread-safe store handle
//! - [`session`] — the policy layer wrapping dispatches with
//!   precondition checks and notices
//! - [`generate`] — prompt composition, the async generation client
//!   boundary, and the session-local gallery
//! - [`config`] — TOML configuration with seeded demo data
//! - [`notify`] — the user-facing notification seam

pub mod config;
pub mod generate;
pub mod model;
pub mod notify;
pub mod qr;
pub mod session;
pub mod store;

pub use config::AppConfig;
pub use session::Session;
pub use store::{Action, AppState, StoreHandle};

/// Initialize tracing for binaries and examples.
///
/// Respects `RUST_LOG`; defaults to `info`. Safe to call more than once
/// (subsequent calls are no-ops).
pub fn init_logging() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init();
}
