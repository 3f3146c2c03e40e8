//! Thread-safe store container.
//!
//! Wraps the current snapshot behind a read-write lock: many concurrent
//! readers can take snapshots while dispatches are exclusive and run to
//! completion before the next action is processed.

use std::sync::{Arc, RwLock};

use crate::store::action::Action;
use crate::store::reducer::reduce;
use crate::store::state::AppState;

/// Shared handle to the application state.
///
/// Cloning the handle shares the underlying state; reading clones the
/// snapshot, which is cheap because [`AppState`] is `Clone`.
#[derive(Clone)]
pub struct StoreHandle {
    inner: Arc<RwLock<AppState>>,
}

impl StoreHandle {
    /// Create a store holding the given initial snapshot.
    pub fn new(initial: AppState) -> Self {
        Self {
            inner: Arc::new(RwLock::new(initial)),
        }
    }

    /// Get a clone of the current snapshot.
    pub fn snapshot(&self) -> AppState {
        self.inner.read().expect("state lock poisoned").clone()
    }

    /// Apply one action atomically and return the resulting snapshot.
    pub fn dispatch(&self, action: Action) -> AppState {
        let mut guard = self.inner.write().expect("state lock poisoned");
        tracing::debug!(action = action.kind(), "dispatching action");
        let next = reduce(guard.clone(), action);
        *guard = next.clone();
        next
    }
}
