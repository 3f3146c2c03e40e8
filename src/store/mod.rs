//! Global state store with unidirectional data flow.
//!
//! # Architecture
//!
//! ```text
//! Action ──→ reduce ──→ AppState ──→ View (embedder)
//!    ↑                                 │
//!    └─────────────────────────────────┘
//! ```
//!
//! - **State**: immutable snapshot of the whole session
//! - **Action**: user intents and admin operations
//! - **Reducer**: pure function that transforms state based on actions
//!
//! Preconditions (duplicate email, blocked account, balance floors) are
//! checked by the policy layer in [`crate::session`] before dispatch; the
//! reducer itself is total and never fails.

mod action;
mod handle;
mod reducer;
mod state;

pub use action::Action;
pub use handle::StoreHandle;
pub use reducer::reduce;
pub use state::{ActivePage, AppState};
