//! Tether Core
//!
//! This crate binds components of a rendering host to an external,
//! centralized application-state store. It provides:
//!
//! - A provider that publishes a store to a subtree of components
//! - `connect`, which derives component props from store state and dispatch
//!   and re-renders the component when the relevant state changes
//!
//! The store and the rendering engine are external. The crate consumes
//! them through the [`store::Store`] trait and the [`host`] lifecycle
//! traits.
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//!
//! - `context`: Typed, tree-scoped registry used to pass the store down
//! - `store`: The store contract, actions, dispatch and subscriptions
//! - `props`: The dynamic prop bag flowing into components
//! - `host`: Component lifecycle traits and a minimal mount driver
//! - `connect`: The provider and `connect`
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use parking_lot::Mutex;
//! use tether_core::connect::{connect, provider, ProviderProps};
//! use tether_core::context::Scope;
//! use tether_core::host::Mount;
//! use tether_core::props::Props;
//! use tether_core::store::{Action, Listener, Store, StoreRef, Unsubscribe};
//!
//! struct AppState {
//!     count: i64,
//! }
//!
//! struct AppStore {
//!     state: Mutex<Arc<AppState>>,
//!     listeners: Mutex<Vec<Listener>>,
//! }
//!
//! impl Store for AppStore {
//!     type State = AppState;
//!
//!     fn get_state(&self) -> Arc<AppState> {
//!         self.state.lock().clone()
//!     }
//!
//!     fn dispatch(&self, action: Action) -> Action {
//!         if action.kind == "increment" {
//!             let count = self.state.lock().count + 1;
//!             *self.state.lock() = Arc::new(AppState { count });
//!         }
//!         let listeners = self.listeners.lock().clone();
//!         for listener in &listeners {
//!             listener.notify();
//!         }
//!         action
//!     }
//!
//!     fn subscribe(&self, listener: Listener) -> Unsubscribe {
//!         self.listeners.lock().push(listener);
//!         Unsubscribe::noop()
//!     }
//! }
//!
//! let store: StoreRef<AppState> = Arc::new(AppStore {
//!     state: Mutex::new(Arc::new(AppState { count: 1 })),
//!     listeners: Mutex::new(Vec::new()),
//! });
//!
//! let root = Scope::root();
//! provider(&root, ProviderProps { store: store.clone(), children: () });
//!
//! let counter = connect(|_scope, props: Props| {
//!     format!("{}: {}", props.str("message").unwrap_or(""), props.str("count").unwrap_or(""))
//! })
//! .map_state(|state: &AppState| Props::new().with("count", state.count.to_string()));
//!
//! let mut mount = Mount::new(root.child(), counter);
//! let html = mount.render(Props::new().with("message", "clicks")).unwrap();
//! assert_eq!(html, "clicks: 1");
//!
//! store.dispatch(Action::new("increment"));
//! assert!(mount.is_refresh_pending());
//! assert_eq!(mount.flush().unwrap().as_deref(), Some("clicks: 2"));
//! ```

pub mod connect;
pub mod context;
pub mod error;
pub mod host;
pub mod props;
pub mod store;

// Re-export main types for convenience
pub use connect::{connect, connect_with, provider, ChangeDetection, Connect, ProviderProps};
pub use context::{ContextKey, Scope};
pub use error::{Error, Result};
pub use host::{Component, Mount, Mountable};
pub use props::{DispatchProp, Prop, Props};
pub use store::{Action, Dispatch, Store, StoreRef};
