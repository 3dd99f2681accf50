//! Store Bindings
//!
//! This module binds components to an external store:
//!
//! - [`provider`] publishes a store to a subtree.
//! - [`connect`] / [`connect_with`] wrap a render function into a component
//!   whose props are derived from the store.
//!
//! # Change Detection
//!
//! State props are compared by identity by default. A mapper that returns
//! the same `Arc<Props>` for the same state never causes a re-render; one
//! that allocates on every call re-renders on every store notification.
//! [`ChangeDetection::Equality`] switches to value comparison.

mod connected;
mod mapping;
mod provider;

pub use connected::{connect, connect_with, Connect, Connected};
pub use mapping::{ChangeDetection, MapDispatch, MapState, MergeProps};
pub use provider::{provider, store_key, ProviderProps, STORE_KEY};
