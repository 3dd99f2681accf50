//! Store Contract
//!
//! The bindings do not implement a state container. They consume any store
//! exposing three capabilities:
//!
//! - `get_state`: read the current state
//! - `dispatch`: send an action
//! - `subscribe`: register a change listener, returning an [`Unsubscribe`]
//!
//! A store is shared by every connected component under its provider and is
//! only ever read or dispatched against from here. The store is expected to
//! serialize its own listener notifications.

mod action;
mod dispatch;
mod subscription;

pub use action::Action;
pub use dispatch::Dispatch;
pub use subscription::{Listener, Subscription, Unsubscribe};

use std::sync::Arc;

/// An external application-state store.
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use parking_lot::Mutex;
/// use tether_core::store::{Action, Listener, Store, Unsubscribe};
///
/// struct Counter {
///     state: Mutex<Arc<i64>>,
///     listeners: Mutex<Vec<Listener>>,
/// }
///
/// impl Store for Counter {
///     type State = i64;
///
///     fn get_state(&self) -> Arc<i64> {
///         self.state.lock().clone()
///     }
///
///     fn dispatch(&self, action: Action) -> Action {
///         if action.kind == "increment" {
///             let next = **self.state.lock() + 1;
///             *self.state.lock() = Arc::new(next);
///         }
///         let listeners = self.listeners.lock().clone();
///         for listener in &listeners {
///             listener.notify();
///         }
///         action
///     }
///
///     fn subscribe(&self, listener: Listener) -> Unsubscribe {
///         self.listeners.lock().push(listener);
///         Unsubscribe::noop()
///     }
/// }
///
/// let counter = Counter { state: Mutex::new(Arc::new(0)), listeners: Mutex::new(Vec::new()) };
/// counter.dispatch(Action::new("increment"));
/// assert_eq!(*counter.get_state(), 1);
/// ```
pub trait Store: Send + Sync {
    /// The state tree held by the store.
    type State: Send + Sync + 'static;

    /// Read the current state.
    fn get_state(&self) -> Arc<Self::State>;

    /// Send an action to the store. Returns the dispatched action.
    fn dispatch(&self, action: Action) -> Action;

    /// Register a listener called after every dispatch.
    fn subscribe(&self, listener: Listener) -> Unsubscribe;
}

/// A shared, type-erased store handle.
pub type StoreRef<S> = Arc<dyn Store<State = S>>;
