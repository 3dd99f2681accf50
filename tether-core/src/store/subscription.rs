//! Listener registration.
//!
//! A store hands back an [`Unsubscribe`] for every listener it accepts.
//! The bindings wrap it in a [`Subscription`], which releases the
//! registration when dropped so it cannot outlive the component that
//! created it, even when the component unwinds out of a panic.

use std::fmt;
use std::sync::Arc;

use tracing::debug;

use crate::host::InstanceId;

/// A store-change callback.
///
/// Invoked synchronously by the store after each dispatch.
#[derive(Clone)]
pub struct Listener(Arc<dyn Fn() + Send + Sync>);

impl Listener {
    /// Wrap a callback.
    pub fn new<F>(notify: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        Self(Arc::new(notify))
    }

    /// Invoke the callback.
    pub fn notify(&self) {
        (self.0)();
    }
}

impl fmt::Debug for Listener {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Listener(..)")
    }
}

/// Removes one listener from a store. Callable once.
pub struct Unsubscribe(Box<dyn FnOnce() + Send + Sync>);

impl Unsubscribe {
    /// Wrap the store-side removal logic.
    pub fn new<F>(remove: F) -> Self
    where
        F: FnOnce() + Send + Sync + 'static,
    {
        Self(Box::new(remove))
    }

    /// An unsubscribe that does nothing.
    pub fn noop() -> Self {
        Self::new(|| {})
    }

    /// Remove the listener.
    pub fn call(self) {
        (self.0)();
    }
}

impl fmt::Debug for Unsubscribe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Unsubscribe(..)")
    }
}

/// Guard owning one active listener registration.
///
/// Dropping the guard (or calling [`release`](Self::release)) unsubscribes
/// exactly once.
pub struct Subscription {
    owner: InstanceId,
    unsubscribe: Option<Unsubscribe>,
}

impl Subscription {
    /// Take ownership of a registration made on behalf of `owner`.
    pub fn new(owner: InstanceId, unsubscribe: Unsubscribe) -> Self {
        debug!(instance = ?owner, "store subscription created");
        Self {
            owner,
            unsubscribe: Some(unsubscribe),
        }
    }

    /// Whether the registration is still held.
    pub fn is_active(&self) -> bool {
        self.unsubscribe.is_some()
    }

    /// Unsubscribe now. Later calls and the eventual drop do nothing.
    pub fn release(&mut self) {
        if let Some(unsubscribe) = self.unsubscribe.take() {
            debug!(instance = ?self.owner, "store subscription released");
            unsubscribe.call();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.release();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("owner", &self.owner)
            .field("active", &self.is_active())
            .finish()
    }
}
