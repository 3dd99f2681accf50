//! The dispatch capability handed to components.

use std::fmt;
use std::sync::Arc;

use super::{Action, Store, StoreRef};

/// A cloneable handle that forwards actions to a store.
///
/// Two handles compare equal when they forward to the same closure, which
/// is the case for clones of one handle.
#[derive(Clone)]
pub struct Dispatch(Arc<dyn Fn(Action) -> Action + Send + Sync>);

impl Dispatch {
    /// Wrap an arbitrary forwarding function.
    pub fn new<F>(forward: F) -> Self
    where
        F: Fn(Action) -> Action + Send + Sync + 'static,
    {
        Self(Arc::new(forward))
    }

    /// A handle forwarding to `store.dispatch`.
    pub fn from_store<S>(store: StoreRef<S>) -> Self
    where
        S: Send + Sync + 'static,
    {
        Self::new(move |action| store.dispatch(action))
    }

    /// Send an action. Returns whatever the store returns.
    pub fn dispatch(&self, action: Action) -> Action {
        (self.0)(action)
    }

    /// Check whether two handles share the same forwarding closure.
    pub fn ptr_eq(&self, other: &Dispatch) -> bool {
        std::ptr::addr_eq(Arc::as_ptr(&self.0), Arc::as_ptr(&other.0))
    }
}

impl PartialEq for Dispatch {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl fmt::Debug for Dispatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Dispatch(..)")
    }
}
