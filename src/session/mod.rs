//! Policy layer over the store.
//!
//! Each operation wraps a dispatch with precondition checks and a
//! user-facing notice: the decision logic lives here, the transition
//! itself in [`crate::store::reduce`]. Every failure path leaves the
//! snapshot unchanged.

mod error;
mod handle;


pub use error::SessionError;
pub use handle::Session;
